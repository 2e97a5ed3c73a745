//! Provides error definitions.
use crate::PoliticalAxis;

use thiserror::Error;

/// Failures at the input boundary: query parameters and configuration.
///
/// The geometry builders and solver never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A fundamental axis index other than 0 through 3.
    #[error("unknown axis index {0}; expected 0 through 3")]
    UnknownAxis(usize),

    /// An affinity outside `[0, 1]`.
    #[error("affinity {value} for {axis:?} is outside [0, 1]")]
    AffinityOutOfRange { axis: PoliticalAxis, value: f32 },

    /// A coordinate list with the wrong number of entries.
    #[error("`{field}` needs {expected} values, found {found}")]
    WrongArity {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A list entry that is not a number.
    #[error("`{field}` has non-numeric value `{value}`")]
    InvalidNumber { field: &'static str, value: String },

    /// An axis was given without affinities, or affinities without an axis.
    #[error("`axis` and `affinities` must be given together")]
    MissingAffinities,

    /// Malformed configuration.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
