//! Tunable dimensions for the scene descriptions.
//!
//! Every config deserializes with `#[serde(default)]`, so a JSON file only has
//! to name the fields it changes.

use crate::{Error, Result};

use serde::{Deserialize, Serialize};

/// Dimensions of the labeled cube.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Center point of the cube.
    pub center: [f32; 3],
    /// Edge length, measured between the centre lines of opposite bars.
    pub size: f32,
    /// Width and depth of each edge bar.
    pub thickness: f32,
    /// How far labels sit outside their vertex, as a fraction of `size`.
    pub label_distance: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            center: [127.5; 3],
            // Leaves room for the bar thickness around the 255 solver cube.
            size: 275.0,
            thickness: 10.0,
            label_distance: 1.0 / 7.0,
        }
    }
}

/// Dimensions of the arrows drawn from a location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    /// Cone radius. Shafts are half as thick.
    pub thickness: f32,
    /// Height of the cone at the tip of each arrow.
    pub arrow_length: f32,
    /// World units left empty between the marker and the start of each shaft.
    pub base_margin: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            thickness: 5.0,
            arrow_length: 20.0,
            base_margin: 10.0,
        }
    }
}

/// Dimensions of a location marker and its arrows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Radius of the sphere at the location.
    pub radius: f32,
    pub arrows: ArrowConfig,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            arrows: ArrowConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceConfig {
    pub cube: CubeConfig,
    pub marker: MarkerConfig,
}

impl SpaceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Config)
    }
}
