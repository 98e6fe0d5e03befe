//! Helper settings.
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! script_mime_type = "text/javascript"
//! method_field = "_method"
//! hidden_wrapper_style = "margin:0;padding:0"
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCRIPT_MIME_TYPE: &str = "text/javascript";
pub const DEFAULT_METHOD_FIELD: &str = "_method";
pub const DEFAULT_HIDDEN_WRAPPER_STYLE: &str = "margin:0;padding:0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperSettings {
	/// `type` attribute of generated `<script>` tags and content type of
	/// generated script responses.
	pub script_mime_type: String,
	/// Name of the hidden field carrying an overridden HTTP verb.
	pub method_field: String,
	/// Inline style of the container around hidden form fields.
	pub hidden_wrapper_style: String,
}

impl Default for HelperSettings {
	fn default() -> Self {
		Self {
			script_mime_type: DEFAULT_SCRIPT_MIME_TYPE.to_string(),
			method_field: DEFAULT_METHOD_FIELD.to_string(),
			hidden_wrapper_style: DEFAULT_HIDDEN_WRAPPER_STYLE.to_string(),
		}
	}
}

impl HelperSettings {
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn script_mime_type(mut self, mime: impl Into<String>) -> Self {
		self.script_mime_type = mime.into();
		self
	}

	pub fn method_field(mut self, field: impl Into<String>) -> Self {
		self.method_field = field.into();
		self
	}

	pub fn hidden_wrapper_style(mut self, style: impl Into<String>) -> Self {
		self.hidden_wrapper_style = style.into();
		self
	}
}
