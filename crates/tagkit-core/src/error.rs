//! Error types for helpers that call out to collaborators.
//!
//! Escaping, attribute serialization and tag building never fail. Only the
//! helpers that resolve URLs, capture caller blocks or parse settings return
//! [`Result`], and they hand the collaborator's error back unchanged.

/// Boxed error produced by a caller-supplied capture block.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum HelperError {
	/// The URL resolver refused the target.
	#[error("cannot resolve URL for {target:?}: {reason}")]
	UrlResolution { target: String, reason: String },

	#[error("URL parameter encoding error: {0}")]
	UrlEncoding(#[from] serde_urlencoded::ser::Error),

	/// A block passed to `form_tag_block` / `javascript_tag_block` failed.
	#[error("block capture failed: {0}")]
	Capture(#[source] BoxError),

	#[error("invalid helper settings: {0}")]
	Settings(#[from] toml::de::Error),
}

impl HelperError {
	/// Wraps any error raised while rendering a captured block.
	pub fn capture(err: impl Into<BoxError>) -> Self {
		HelperError::Capture(err.into())
	}
}

pub type Result<T> = std::result::Result<T, HelperError>;
