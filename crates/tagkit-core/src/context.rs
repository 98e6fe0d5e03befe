//! Collaborators the helpers call out to: URL resolution and CSRF tokens.

use crate::error::Result;

/// Resolves a route target and its parameters to a URL.
pub trait UrlResolver: Send + Sync {
	fn resolve_url(&self, target: &str, params: &[(&str, &str)]) -> Result<String>;
}

/// Treats the target as a path and appends parameters as a query string.
///
/// # Examples
///
/// ```
/// use tagkit_core::{PathUrlResolver, UrlResolver};
///
/// let resolver = PathUrlResolver;
/// assert_eq!(resolver.resolve_url("/posts", &[]).unwrap(), "/posts");
/// assert_eq!(
///     resolver.resolve_url("/search", &[("q", "a b")]).unwrap(),
///     "/search?q=a+b"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathUrlResolver;

impl UrlResolver for PathUrlResolver {
	fn resolve_url(&self, target: &str, params: &[(&str, &str)]) -> Result<String> {
		if params.is_empty() {
			return Ok(target.to_string());
		}
		let query = serde_urlencoded::to_string(params)?;
		let separator = if target.contains('?') { '&' } else { '?' };
		Ok(format!("{target}{separator}{query}"))
	}
}

/// Source of the request-forgery token embedded into forms.
pub trait CsrfSource: Send + Sync {
	fn enabled(&self) -> bool;
	fn field_name(&self) -> String;
	fn token(&self) -> String;
}

pub const DEFAULT_CSRF_FIELD: &str = "authenticity_token";

/// A fixed token for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
	field_name: String,
	value: String,
}

impl CsrfToken {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			field_name: DEFAULT_CSRF_FIELD.to_string(),
			value: value.into(),
		}
	}

	pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
		self.field_name = field_name.into();
		self
	}
}

impl CsrfSource for CsrfToken {
	fn enabled(&self) -> bool {
		true
	}

	fn field_name(&self) -> String {
		self.field_name.clone()
	}

	fn token(&self) -> String {
		self.value.clone()
	}
}

/// Forgery protection turned off; no token field is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCsrf;

impl CsrfSource for NoCsrf {
	fn enabled(&self) -> bool {
		false
	}

	fn field_name(&self) -> String {
		String::new()
	}

	fn token(&self) -> String {
		String::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_existing_query_gets_ampersand() {
		let url = PathUrlResolver
			.resolve_url("/posts?page=2", &[("sort", "desc")])
			.unwrap();
		assert_eq!(url, "/posts?page=2&sort=desc");
	}

	#[rstest]
	fn test_params_are_urlencoded() {
		let url = PathUrlResolver
			.resolve_url("/s", &[("q", "a&b"), ("lang", "ja")])
			.unwrap();
		assert_eq!(url, "/s?q=a%26b&lang=ja");
	}

	#[rstest]
	fn test_csrf_token_defaults() {
		let token = CsrfToken::new("abc123");
		assert!(token.enabled());
		assert_eq!(token.field_name(), "authenticity_token");
		assert_eq!(token.token(), "abc123");
	}

	#[rstest]
	fn test_csrf_token_custom_field() {
		let token = CsrfToken::new("t").with_field_name("csrfmiddlewaretoken");
		assert_eq!(token.field_name(), "csrfmiddlewaretoken");
	}

	#[rstest]
	fn test_no_csrf() {
		assert!(!NoCsrf.enabled());
	}
}
