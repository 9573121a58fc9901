/// Result alias used across the crate.
pub type FolioResult<T> = Result<T, FolioError>;

/// Errors surfaced while loading, wiring or rendering a page.
///
/// Runtime behavior of the page itself never fails: missing localized strings or unknown
/// navigation targets are silent no-ops. Errors only describe broken inputs.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// The page document or its configuration is malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// A required page element is missing at startup.
    #[error("wiring error: {0}")]
    Wiring(String),

    /// Canvas or raster output failure.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Wiring`].
    pub fn wiring(msg: impl Into<String>) -> Self {
        Self::Wiring(msg.into())
    }

    /// Build a [`FolioError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FolioError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
