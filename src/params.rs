//! Query-string parameters describing what to show in the space.
//!
//! ```text
//! ?title=Me&location=60,200,30&vectors[0]=0,0,0&vectors[1]=255,255,255
//! ?axis=1&affinities=0.3,0.8,0.5,0.1
//! ```
//!
//! Coordinate lists are comma separated. Repeated bare `vectors=` keys are also
//! accepted and are appended after the indexed ones.

use crate::{calculate_position, AxisAffinities, Error, PoliticalAxis, Result};

use ilattice::glam::Vec3;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SpaceParams {
    pub title: String,
    /// A literal `[x, y, z]` position.
    pub location: Vec<f32>,
    /// `[x, y, z]` targets for arrows drawn from the location.
    pub vectors: Vec<Vec<f32>>,
    /// Fundamental axis index, used with `affinities` when there is no
    /// literal `location`.
    pub axis: Option<usize>,
    pub affinities: Vec<f32>,
}

impl SpaceParams {
    /// Parses a URL query, with or without the leading `?`.
    ///
    /// Unknown keys are ignored. Later occurrences of a scalar key replace
    /// earlier ones.
    pub fn parse(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = SpaceParams::default();
        let mut indexed = Vec::new();
        let mut bare = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "title" => params.title = value.into_owned(),
                "location" => params.location = parse_list("location", &value)?,
                "affinities" => params.affinities = parse_list("affinities", &value)?,
                "axis" => {
                    let axis = value.trim().parse().map_err(|_| Error::InvalidNumber {
                        field: "axis",
                        value: value.to_string(),
                    })?;
                    params.axis = Some(axis);
                }
                "vectors" => bare.push(parse_list("vectors", &value)?),
                other => match vector_index(other) {
                    Some(index) => indexed.push((index, parse_list("vectors", &value)?)),
                    None => tracing::trace!(key = other, "ignoring unknown query parameter"),
                },
            }
        }

        indexed.sort_by_key(|(index, _)| *index);
        params.vectors = indexed.into_iter().map(|(_, v)| v).chain(bare).collect();

        Ok(params)
    }

    /// Writes the params back as a query string, without the leading `?`.
    /// Empty fields are left out.
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.affinities.is_empty() {
            query.append_pair("affinities", &join_list(&self.affinities));
        }
        if let Some(axis) = self.axis {
            query.append_pair("axis", &axis.to_string());
        }
        if !self.location.is_empty() {
            query.append_pair("location", &join_list(&self.location));
        }
        if !self.title.is_empty() {
            query.append_pair("title", &self.title);
        }
        for (i, vector) in self.vectors.iter().enumerate() {
            query.append_pair(&format!("vectors[{i}]"), &join_list(vector));
        }
        query.finish()
    }

    /// The literal location, if one was given.
    pub fn location_point(&self) -> Result<Option<Vec3>> {
        if self.location.is_empty() {
            return Ok(None);
        }
        point("location", &self.location).map(Some)
    }

    pub fn vector_points(&self) -> Result<Vec<Vec3>> {
        self.vectors.iter().map(|v| point("vectors", v)).collect()
    }

    /// The position solved from `axis` and `affinities`, if they were given.
    ///
    /// Affinities are passed to the solver as given, without range checks.
    pub fn solved_location(&self) -> Result<Option<Vec3>> {
        match (self.axis, self.affinities.is_empty()) {
            (None, true) => Ok(None),
            (Some(axis), false) => {
                let axis = PoliticalAxis::try_from(axis)?;
                let affinities: [f32; 4] = self.affinities.as_slice().try_into().map_err(|_| {
                    Error::WrongArity {
                        field: "affinities",
                        expected: 4,
                        found: self.affinities.len(),
                    }
                })?;
                Ok(Some(calculate_position(axis, &AxisAffinities::new(affinities))))
            }
            _ => Err(Error::MissingAffinities),
        }
    }

    /// The literal location if given, otherwise the solved one.
    pub fn resolved_location(&self) -> Result<Option<Vec3>> {
        match self.location_point()? {
            Some(point) => Ok(Some(point)),
            None => self.solved_location(),
        }
    }
}

fn vector_index(key: &str) -> Option<usize> {
    key.strip_prefix("vectors[")?.strip_suffix(']')?.parse().ok()
}

fn parse_list(field: &'static str, value: &str) -> Result<Vec<f32>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    value
        .split(',')
        .map(|item| {
            item.trim()
                .parse::<f32>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| Error::InvalidNumber {
                    field,
                    value: item.to_owned(),
                })
        })
        .collect()
}

fn join_list(values: &[f32]) -> String {
    values
        .iter()
        .map(f32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn point(field: &'static str, values: &[f32]) -> Result<Vec3> {
    match values {
        &[x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(Error::WrongArity {
            field,
            expected: 3,
            found: values.len(),
        }),
    }
}
