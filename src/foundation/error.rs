/// Convenience result type used across nekoforge.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Top-level error taxonomy used by engine internals.
///
/// Public render entry points absorb these and hand back an empty artifact instead; they surface
/// only through the `try_*` APIs, the batch runner and the CLI.
#[derive(thiserror::Error, Debug)]
pub enum ForgeError {
    /// Invalid caller-provided data (sizes, thread counts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while acquiring or drawing onto a render surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or decoding an exported artifact.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForgeError {
    /// Build a [`ForgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ForgeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ForgeError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`ForgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
