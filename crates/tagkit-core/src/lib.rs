//! # tagkit-core
//!
//! Markup and inline script generation for view templates.
//!
//! ## Building blocks
//!
//! - [`escaping`]: JavaScript string, CDATA and HTML attribute escaping
//! - [`attributes`]: attribute values and their canonical serialization
//! - [`tag`] and [`literals`]: tag assembly and JavaScript option literals
//! - [`handler`]: `onclick` composition and generated page statements
//! - [`form`]: form open tags with HTTP verb override
//! - [`helpers`]: the above wired to URL, CSRF and settings collaborators
//!
//! Every operation is a pure, synchronous transformation into a `String`;
//! only helpers that call a fallible collaborator return [`Result`].
//!
//! ## Example
//!
//! ```
//! use tagkit_core::{CsrfToken, FormOptions, Helpers};
//!
//! let helpers = Helpers::default().with_csrf(CsrfToken::new("s3cr3t"));
//! let html = helpers
//!     .form_tag("/posts/1", &[], FormOptions::new().method("put"))
//!     .unwrap();
//! assert!(html.starts_with(r#"<form action="/posts/1" method="post">"#));
//! assert!(html.contains(r#"name="_method" value="put""#));
//! assert!(html.contains(r#"name="authenticity_token" value="s3cr3t""#));
//! ```

pub mod attributes;
pub mod context;
pub mod error;
pub mod escaping;
pub mod form;
pub mod handler;
pub mod helpers;
pub mod literals;
pub mod settings;
pub mod tag;

pub use attributes::{AttrValue, AttributeMap};
pub use context::{CsrfSource, CsrfToken, NoCsrf, PathUrlResolver, UrlResolver};
pub use error::{BoxError, HelperError, Result};
pub use escaping::{escape_javascript, html_escape, javascript_cdata_section};
pub use form::{FormMethod, FormOpenTag, FormOptions, FormRequest, build_form_open_tag};
pub use handler::{
	ElementProxy, Handler, HandlerStyle, PageScript, PageStatement, build_inline_handler,
	build_page_handler,
};
pub use helpers::{Helpers, JsResponse};
pub use literals::{ScriptValue, array_or_string_for_javascript, options_for_javascript};
pub use settings::HelperSettings;
pub use tag::{TagSpec, close_tag, content_tag, open_tag, self_closing_tag, tag};
