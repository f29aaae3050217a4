/// Convenience result type used across Papillon.
pub type PapillonResult<T> = Result<T, PapillonError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PapillonError {
    /// Invalid user-provided configuration or data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Outline sampling preconditions were violated.
    #[error("sampling error: {0}")]
    Sampling(String),

    /// Morph animator misuse (e.g. starting without a frame scheduler).
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors raised by a render surface.
    #[error("render error: {0}")]
    Render(String),

    /// An external dependency did not become available in time.
    #[error("dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// The gallery manifest could not be fetched or parsed.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// A required UI element is absent from the host document.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PapillonError {
    /// Build a [`PapillonError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PapillonError::Sampling`] value.
    pub fn sampling(msg: impl Into<String>) -> Self {
        Self::Sampling(msg.into())
    }

    /// Build a [`PapillonError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`PapillonError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PapillonError::DependencyUnavailable`] value.
    pub fn dependency_unavailable(msg: impl Into<String>) -> Self {
        Self::DependencyUnavailable(msg.into())
    }

    /// Build a [`PapillonError::Manifest`] value.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Build a [`PapillonError::MissingElement`] value.
    pub fn missing_element(msg: impl Into<String>) -> Self {
        Self::MissingElement(msg.into())
    }

    /// Build a [`PapillonError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
