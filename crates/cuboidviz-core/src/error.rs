//! Error types for cuboid reconstruction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The flat coordinate list does not match any reconstruction variant.
    #[error("expected 8 or 16 coordinates, got {0}")]
    PointCount(usize),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// A shape references a label that the job does not define.
    #[error("shape on frame {frame} references unknown label {label_id}")]
    UnknownLabel { frame: u64, label_id: u64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
