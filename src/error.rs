use thiserror::Error;

pub type Result<T, E = CubeError> = std::result::Result<T, E>;

/// Errors raised while building configurations or applying options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CubeError {
    #[error("face {face} has {len} cells; expected one of 9, 16, 25, 36, 49 or 64")]
    InvalidGridLength { face: usize, len: usize },
    #[error("a cube has exactly 6 faces, got {0}")]
    FaceCount(usize),
    #[error("face index {0} out of range (0..6)")]
    FaceIndex(usize),
    #[error("style parameter {name} = {value} rejected: {reason}")]
    InvalidStyle {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("unknown option {0:?}")]
    UnknownOption(String),
    #[error("option {name} expects {expected}, got {value:?}")]
    OptionValue {
        name: String,
        expected: &'static str,
        value: String,
    },
}
