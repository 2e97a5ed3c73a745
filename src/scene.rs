use crate::{CubeGeometry, LocationGeometry, Result, SpaceConfig, SpaceParams};

use serde::Serialize;

/// Everything a renderer needs to draw the space for one set of params.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneDescription {
    pub title: String,
    pub cube: CubeGeometry,
    pub location: Option<LocationGeometry>,
}

impl SceneDescription {
    /// The location is the literal `location` param if present, otherwise the
    /// position solved from `axis` and `affinities`. Vectors are only drawn
    /// when there is a location.
    pub fn build(config: &SpaceConfig, params: &SpaceParams) -> Result<Self> {
        let location = match params.resolved_location()? {
            Some(point) => {
                let targets = params.vector_points()?;
                Some(LocationGeometry::new(point, &targets, &config.marker))
            }
            None => None,
        };

        Ok(Self {
            title: params.title.clone(),
            cube: CubeGeometry::new(&config.cube),
            location,
        })
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
