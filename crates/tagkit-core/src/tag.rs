//! Tag assembly.
//!
//! Whether a tag self-closes is decided by the caller's flag, never by the
//! element name: `tag("input", None, attrs, false)` renders an explicit
//! `<input ...></input>` pair.

use crate::attributes::AttributeMap;

/// Renders `<name attrs>`.
pub fn open_tag(name: &str, attrs: &AttributeMap) -> String {
	format!("<{name}{}>", attrs.to_html())
}

/// Renders `</name>`.
pub fn close_tag(name: &str) -> String {
	format!("</{name}>")
}

/// Renders `<name attrs/>`.
pub fn self_closing_tag(name: &str, attrs: &AttributeMap) -> String {
	format!("<{name}{}/>", attrs.to_html())
}

/// Renders an open/close pair around raw `content`.
///
/// Content is inserted as-is; it is markup, not text.
pub fn content_tag(name: &str, content: &str, attrs: &AttributeMap) -> String {
	format!("{}{content}{}", open_tag(name, attrs), close_tag(name))
}

/// Renders a tag from its parts.
///
/// # Examples
///
/// ```
/// use tagkit_core::{AttributeMap, tag};
///
/// let attrs = AttributeMap::new().with("type", "hidden").with("name", "_method");
/// assert_eq!(
///     tag("input", None, &attrs, false),
///     r#"<input type="hidden" name="_method"></input>"#
/// );
/// assert_eq!(tag("br", Some("ignored"), &AttributeMap::new(), true), "<br/>");
/// ```
pub fn tag(name: &str, content: Option<&str>, attrs: &AttributeMap, self_closing: bool) -> String {
	if self_closing {
		self_closing_tag(name, attrs)
	} else {
		content_tag(name, content.unwrap_or_default(), attrs)
	}
}

/// An element description rendered in one go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSpec {
	pub name: String,
	pub attributes: AttributeMap,
	pub content: Option<String>,
	pub self_closing: bool,
}

impl TagSpec {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<crate::AttrValue>) -> Self {
		self.attributes.insert(name, value);
		self
	}

	pub fn attributes(mut self, attributes: AttributeMap) -> Self {
		self.attributes = attributes;
		self
	}

	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = Some(content.into());
		self
	}

	pub fn self_closing(mut self) -> Self {
		self.self_closing = true;
		self
	}

	pub fn render(&self) -> String {
		tag(
			&self.name,
			self.content.as_deref(),
			&self.attributes,
			self.self_closing,
		)
	}
}
