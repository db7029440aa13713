/// Convenience result type used across espscene.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by library APIs.
///
/// Recoverable conditions (missing asset data, unmatched glyphs) never show
/// up here; those paths return `Option`/empty values instead. This enum
/// covers the failures that must reject an input outright.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Malformed element input, e.g. a missing `type` discriminator.
    #[error("construction error: {0}")]
    Construction(String),

    /// Errors when serializing or deserializing wire shapes.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Construction`] value.
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
