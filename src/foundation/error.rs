/// Convenience result type used across the studio.
pub type StudioResult<T> = Result<T, StudioError>;

/// Top-level error taxonomy used by studio APIs.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A trait image could not be read or decoded. The previous frame stays visible.
    #[error("asset load error: '{locator}': {source:#}")]
    AssetLoad {
        /// Locator of the asset that failed.
        locator: String,
        /// Underlying IO or decode failure.
        #[source]
        source: anyhow::Error,
    },

    /// Errors while composing or rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding a frame for download or sharing.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudioError {
    /// Build a [`StudioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StudioError::AssetLoad`] value.
    pub fn asset_load(locator: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::AssetLoad {
            locator: locator.into(),
            source: source.into(),
        }
    }

    /// Build a [`StudioError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StudioError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Whether the session can simply retry the operation that produced this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::AssetLoad { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
