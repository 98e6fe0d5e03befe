//! Form open tags with HTTP verb override.
//!
//! HTML forms only submit `get` and `post`. Any other verb renders
//! `method="post"` and carries the real verb in a hidden field, next to the
//! CSRF token field, inside a zero-margin container.

use crate::attributes::{AttrValue, AttributeMap};
use crate::context::CsrfSource;
use crate::settings::HelperSettings;
use crate::tag::{content_tag, open_tag, self_closing_tag};

pub const MULTIPART_ENCTYPE: &str = "multipart/form-data";

/// The `method` a form is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMethod {
	Get,
	Post,
	/// Submitted as `post`; the original verb travels in a hidden field.
	Override(String),
}

impl FormMethod {
	/// Classifies a verb, case-insensitively. Missing and empty verbs are `post`.
	pub fn classify(verb: Option<&str>) -> Self {
		match verb {
			None | Some("") => FormMethod::Post,
			Some(v) if v.eq_ignore_ascii_case("get") => FormMethod::Get,
			Some(v) if v.eq_ignore_ascii_case("post") => FormMethod::Post,
			Some(v) => FormMethod::Override(v.to_string()),
		}
	}

	/// Value of the rendered `method` attribute.
	pub fn as_attribute(&self) -> &'static str {
		match self {
			FormMethod::Get => "get",
			FormMethod::Post | FormMethod::Override(_) => "post",
		}
	}
}

/// Caller options for a form, before URL resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
	pub method: Option<String>,
	pub multipart: bool,
	pub attributes: AttributeMap,
}

impl FormOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn method(mut self, verb: impl Into<String>) -> Self {
		self.method = Some(verb.into());
		self
	}

	pub fn multipart(mut self, multipart: bool) -> Self {
		self.multipart = multipart;
		self
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.attributes.insert(name, value);
		self
	}
}

/// A form with its action already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRequest {
	pub target_url: String,
	pub verb: Option<String>,
	pub multipart: bool,
	pub extra_attributes: AttributeMap,
}

impl FormRequest {
	pub fn new(target_url: impl Into<String>) -> Self {
		Self {
			target_url: target_url.into(),
			verb: None,
			multipart: false,
			extra_attributes: AttributeMap::new(),
		}
	}

	pub fn from_options(target_url: impl Into<String>, options: FormOptions) -> Self {
		Self {
			target_url: target_url.into(),
			verb: options.method,
			multipart: options.multipart,
			extra_attributes: options.attributes,
		}
	}

	pub fn verb(mut self, verb: impl Into<String>) -> Self {
		self.verb = Some(verb.into());
		self
	}

	pub fn multipart(mut self, multipart: bool) -> Self {
		self.multipart = multipart;
		self
	}

	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.extra_attributes.insert(name, value);
		self
	}
}

/// Rendered form opening: the `<form>` tag and the hidden fields following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOpenTag {
	pub open_tag: String,
	pub extra: String,
}

impl FormOpenTag {
	pub fn into_html(self) -> String {
		self.open_tag + &self.extra
	}
}

/// Builds the `<form>` open tag and any verb override markup.
///
/// Attribute order is `action`, `method`, `enctype` (multipart only), then the
/// caller's remaining attributes. A rendered `multipart` attribute counts as
/// the multipart flag and is never emitted itself.
///
/// # Examples
///
/// ```
/// use tagkit_core::{FormRequest, HelperSettings, NoCsrf, build_form_open_tag};
///
/// let form = build_form_open_tag(
///     &FormRequest::new("/upload").multipart(true),
///     &HelperSettings::default(),
///     &NoCsrf,
/// );
/// assert_eq!(
///     form.open_tag,
///     r#"<form action="/upload" method="post" enctype="multipart/form-data">"#
/// );
/// assert_eq!(form.extra, "");
/// ```
pub fn build_form_open_tag(
	request: &FormRequest,
	settings: &HelperSettings,
	csrf: &dyn CsrfSource,
) -> FormOpenTag {
	let method = FormMethod::classify(request.verb.as_deref());
	tracing::trace!(?method, action = %request.target_url, "building form open tag");

	let mut caller = request.extra_attributes.clone();
	let multipart_attr = caller
		.remove("multipart")
		.is_some_and(|value| value.is_rendered());

	let mut attrs = AttributeMap::new()
		.with("action", request.target_url.as_str())
		.with("method", method.as_attribute());
	if request.multipart || multipart_attr {
		attrs.insert("enctype", MULTIPART_ENCTYPE);
	}
	attrs.extend_missing(&caller);

	let extra = match &method {
		FormMethod::Override(verb) => hidden_fields(verb, settings, csrf),
		FormMethod::Get | FormMethod::Post => String::new(),
	};

	FormOpenTag {
		open_tag: open_tag("form", &attrs),
		extra,
	}
}

fn hidden_fields(verb: &str, settings: &HelperSettings, csrf: &dyn CsrfSource) -> String {
	tracing::debug!(verb, field = %settings.method_field, "emitting verb override field");
	let mut fields = hidden_input(&settings.method_field, verb);
	if csrf.enabled() {
		fields.push_str(&hidden_input(&csrf.field_name(), &csrf.token()));
	} else {
		tracing::debug!("forgery protection disabled, omitting token field");
	}
	content_tag(
		"div",
		&fields,
		&AttributeMap::new().with("style", settings.hidden_wrapper_style.as_str()),
	)
}

fn hidden_input(name: &str, value: &str) -> String {
	self_closing_tag(
		"input",
		&AttributeMap::new()
			.with("type", "hidden")
			.with("name", name)
			.with("value", value),
	)
}
