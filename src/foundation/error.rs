/// Convenience result type used across Placard.
pub type PlacardResult<T> = Result<T, PlacardError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlacardError {
    /// Invalid or malformed source template data (bad transforms, bad markup).
    #[error("template error: {0}")]
    Template(String),

    /// Errors when serializing or deserializing scene documents or profiles.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The hydrate call was superseded by a newer one on the same session;
    /// the caller must discard this result.
    #[error("superseded: {0}")]
    Superseded(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacardError {
    /// Build a [`PlacardError::Template`] value.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Build a [`PlacardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`PlacardError::Superseded`] value.
    pub fn superseded(msg: impl Into<String>) -> Self {
        Self::Superseded(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
