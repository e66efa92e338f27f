/// Result of numbering, project edits and project-file I/O.
pub type ShotcodeResult<T> = Result<T, ShotcodeError>;

/// Everything that can go wrong while numbering shots or editing a project.
#[derive(thiserror::Error, Debug)]
pub enum ShotcodeError {
    /// An edit or lookup the project cannot honour: unknown id, index out of
    /// range, a lock in the wrong state, or no shot number left.
    #[error("validation error: {0}")]
    Validation(String),

    /// A key is missing from a reference order; the data has drifted out of sync.
    #[error("ordering error: {0}")]
    Ordering(String),

    /// Malformed shotcode or number input.
    #[error("parse error: {0}")]
    Parse(String),

    /// The project file is not valid JSON or does not have the expected shape.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Reading or writing the project file failed.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotcodeError {
    // Shorthands so call sites can pass `format!` output or a literal.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn ordering(msg: impl Into<String>) -> Self {
        Self::Ordering(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ShotcodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
