/// Convenience result type used across the crate.
pub type FlapResult<T> = Result<T, FlapError>;

/// Top-level error type returned by flapboard APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlapError {
    /// A visual surface required by a flip timeline was not mounted.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// A transition was requested before the slot's engine was built.
    #[error("engine not ready")]
    EngineNotReady,

    /// Input configuration is structurally or semantically invalid.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation runtime operation targeted a dead or invalid resource.
    #[error("animation error: {0}")]
    Animation(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlapError {
    /// Build a [`FlapError::ResourceUnavailable`] value.
    pub fn resource_unavailable(msg: impl Into<String>) -> Self {
        Self::ResourceUnavailable(msg.into())
    }

    /// Build a [`FlapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlapError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FlapError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FlapError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
