//! # tagkit
//!
//! Markup and inline script generation for view templates: form tags with
//! HTTP verb override, anchors and buttons wired to inline handlers,
//! CDATA-wrapped `<script>` blocks, JavaScript option literals, and the
//! escaping that keeps untrusted text safe in HTML and JavaScript contexts.
//!
//! ## Feature Flags
//!
//! - `templates` (default) - registers the helpers into a [Tera](https://keats.github.io/tera/) engine
//!
//! ## Quick Example
//!
//! ```rust
//! use tagkit::prelude::*;
//!
//! let helpers = Helpers::default();
//!
//! let mut page = PageScript::new();
//! page.element("details").call("toggle", Vec::<serde_json::Value>::new());
//!
//! let link = helpers.link_to_function("Details", page, AttributeMap::new());
//! assert!(link.starts_with(r##"<a href="#" onclick="try { "##));
//! ```

#[cfg(feature = "templates")]
pub mod templates;

pub use tagkit_core::{
	AttrValue, AttributeMap, BoxError, CsrfSource, CsrfToken, ElementProxy, FormMethod,
	FormOpenTag, FormOptions, FormRequest, Handler, HandlerStyle, HelperError, HelperSettings,
	Helpers, JsResponse, NoCsrf, PageScript, PageStatement, PathUrlResolver, Result, ScriptValue,
	TagSpec, UrlResolver, array_or_string_for_javascript, build_form_open_tag,
	build_inline_handler, build_page_handler, close_tag, content_tag, escape_javascript,
	html_escape, javascript_cdata_section, open_tag, options_for_javascript, self_closing_tag, tag,
};

#[cfg(feature = "templates")]
pub use templates::{HELPER_FILTERS, HELPER_FUNCTIONS, register_helpers};

pub mod prelude {
	pub use crate::{
		AttrValue, AttributeMap, CsrfSource, CsrfToken, FormOptions, Handler, HelperError,
		HelperSettings, Helpers, NoCsrf, PageScript, Result, UrlResolver, escape_javascript,
	};

	#[cfg(feature = "templates")]
	pub use crate::register_helpers;
}
