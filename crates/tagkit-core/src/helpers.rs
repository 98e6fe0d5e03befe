//! View-level helpers wired to their collaborators.

use crate::attributes::AttributeMap;
use crate::context::{CsrfSource, NoCsrf, PathUrlResolver, UrlResolver};
use crate::error::Result;
use crate::escaping::{escape_javascript, javascript_cdata_section};
use crate::form::{FormOptions, FormRequest, build_form_open_tag};
use crate::handler::{
	Handler, HandlerStyle, PageScript, build_inline_handler, build_page_handler,
};
use crate::settings::HelperSettings;
use crate::tag::{close_tag, content_tag};
use std::sync::Arc;

/// A generated script to be sent as a response body without a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsResponse {
	pub content_type: String,
	pub body: String,
}

/// Markup helpers for one rendering context.
///
/// Cloning is cheap; collaborators are shared.
///
/// # Examples
///
/// ```
/// use tagkit_core::{AttributeMap, Helpers};
///
/// let helpers = Helpers::default();
/// assert_eq!(
///     helpers.link_to_function("Greeting", "alert('Hello world!')", AttributeMap::new()),
///     r##"<a href="#" onclick="alert(&#x27;Hello world!&#x27;); return false;">Greeting</a>"##
/// );
/// ```
#[derive(Clone)]
pub struct Helpers {
	settings: Arc<HelperSettings>,
	urls: Arc<dyn UrlResolver>,
	csrf: Arc<dyn CsrfSource>,
}

impl Default for Helpers {
	fn default() -> Self {
		Self::new(HelperSettings::default())
	}
}

impl std::fmt::Debug for Helpers {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Helpers")
			.field("settings", &self.settings)
			.field("csrf_enabled", &self.csrf.enabled())
			.finish()
	}
}

impl Helpers {
	/// Helpers with path-style URLs and forgery protection off.
	pub fn new(settings: HelperSettings) -> Self {
		Self {
			settings: Arc::new(settings),
			urls: Arc::new(PathUrlResolver),
			csrf: Arc::new(NoCsrf),
		}
	}

	pub fn with_url_resolver(mut self, resolver: impl UrlResolver + 'static) -> Self {
		self.urls = Arc::new(resolver);
		self
	}

	pub fn with_csrf(mut self, csrf: impl CsrfSource + 'static) -> Self {
		self.csrf = Arc::new(csrf);
		self
	}

	pub fn settings(&self) -> &HelperSettings {
		&self.settings
	}

	/// Opens a form posting to the resolved `target`.
	pub fn form_tag(
		&self,
		target: &str,
		params: &[(&str, &str)],
		options: FormOptions,
	) -> Result<String> {
		let url = self.urls.resolve_url(target, params)?;
		let request = FormRequest::from_options(url, options);
		Ok(build_form_open_tag(&request, &self.settings, self.csrf.as_ref()).into_html())
	}

	/// Renders a complete form around the captured block.
	///
	/// The block runs before the action URL is resolved.
	pub fn form_tag_block<F>(
		&self,
		target: &str,
		params: &[(&str, &str)],
		options: FormOptions,
		capture: F,
	) -> Result<String>
	where
		F: FnOnce() -> Result<String>,
	{
		let content = capture()?;
		let open = self.form_tag(target, params, options)?;
		Ok(format!("{open}{content}{}", close_tag("form")))
	}

	/// An anchor running `handler` on click and cancelling navigation.
	///
	/// `href` defaults to `#` unless the caller's renders; a caller `onclick`
	/// runs before the handler.
	pub fn link_to_function(
		&self,
		name: &str,
		handler: impl Into<Handler>,
		attrs: AttributeMap,
	) -> String {
		let onclick = self.compose_onclick(&handler.into(), &attrs, HandlerStyle::Anchor);
		let mut composed = AttributeMap::new()
			.with(
				"href",
				attrs
					.get("href")
					.filter(|href| href.is_rendered())
					.cloned()
					.unwrap_or_else(|| "#".into()),
			)
			.with("onclick", onclick);
		composed.extend_missing(&attrs);
		content_tag("a", name, &composed)
	}

	/// A `<button>` running `handler` on click.
	pub fn button_to_function(
		&self,
		name: &str,
		handler: impl Into<Handler>,
		attrs: AttributeMap,
	) -> String {
		let onclick = self.compose_onclick(&handler.into(), &attrs, HandlerStyle::Button);
		let mut composed = AttributeMap::new().with("onclick", onclick);
		composed.extend_missing(&attrs);
		content_tag("button", name, &composed)
	}

	/// A `<script>` tag with a CDATA-wrapped body.
	///
	/// `type` always comes from the settings and is rendered first.
	pub fn javascript_tag(&self, content: &str, attrs: AttributeMap) -> String {
		let mut composed =
			AttributeMap::new().with("type", self.settings.script_mime_type.as_str());
		composed.extend_missing(&attrs);
		content_tag("script", &javascript_cdata_section(content), &composed)
	}

	pub fn javascript_tag_block<F>(&self, attrs: AttributeMap, capture: F) -> Result<String>
	where
		F: FnOnce() -> Result<String>,
	{
		let content = capture()?;
		Ok(self.javascript_tag(&content, attrs))
	}

	pub fn escape_javascript<'a>(&self, javascript: impl Into<Option<&'a str>>) -> String {
		escape_javascript(javascript)
	}

	/// Generated statements as a script response.
	pub fn render_js_block(&self, script: &PageScript) -> JsResponse {
		JsResponse {
			content_type: self.settings.script_mime_type.clone(),
			body: build_page_handler(script),
		}
	}

	fn compose_onclick(
		&self,
		handler: &Handler,
		attrs: &AttributeMap,
		style: HandlerStyle,
	) -> String {
		let existing = attrs.get("onclick").and_then(|value| value.as_text());
		build_inline_handler(existing.as_deref(), &handler.to_js(), style)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::HelperError;
	use crate::attributes::AttrValue;
	use crate::context::CsrfToken;
	use rstest::{fixture, rstest};

	#[fixture]
	fn helpers() -> Helpers {
		Helpers::default()
	}

	#[rstest]
	fn test_link_keeps_caller_href_and_chains_onclick(helpers: Helpers) {
		let attrs = AttributeMap::new()
			.with("id", "more_link")
			.with("href", "/fallback")
			.with("onclick", "log()");
		assert_eq!(
			helpers.link_to_function("More", "show()", attrs),
			r#"<a href="/fallback" onclick="log(); show(); return false;" id="more_link">More</a>"#
		);
	}

	#[rstest]
	#[case(AttrValue::Bool(false))]
	#[case(AttrValue::Absent)]
	fn test_link_falls_back_to_hash_for_unrendered_href(
		helpers: Helpers,
		#[case] href: AttrValue,
	) {
		let attrs = AttributeMap::new().with("href", href);
		assert_eq!(
			helpers.link_to_function("x", "go()", attrs),
			r##"<a href="#" onclick="go(); return false;">x</a>"##
		);
	}

	#[rstest]
	fn test_link_with_page_script(helpers: Helpers) {
		let mut page = PageScript::new();
		page.hide("details");
		let html = helpers.link_to_function("Hide", page, AttributeMap::new());
		assert!(html.starts_with(r##"<a href="#" onclick="try { Element.hide(&quot;details&quot;); }"##));
		assert!(html.ends_with(r#"throw e; }; return false;">Hide</a>"#));
	}

	#[rstest]
	fn test_button(helpers: Helpers) {
		let attrs = AttributeMap::new().with("class", "details_button");
		assert_eq!(
			helpers.button_to_function("Details", "toggle()", attrs),
			r#"<button onclick="toggle();" class="details_button">Details</button>"#
		);
	}

	#[rstest]
	fn test_javascript_tag(helpers: Helpers) {
		assert_eq!(
			helpers.javascript_tag("alert('All is good')", AttributeMap::new().with("defer", true)),
			"<script type=\"text/javascript\" defer=\"defer\">\n//<![CDATA[\nalert('All is good')\n//]]>\n</script>"
		);
	}

	#[rstest]
	fn test_javascript_tag_type_cannot_be_overridden(helpers: Helpers) {
		let html = helpers.javascript_tag("x", AttributeMap::new().with("type", "module"));
		assert!(html.starts_with(r#"<script type="text/javascript">"#));
	}

	#[rstest]
	fn test_javascript_tag_block_propagates_capture_error(helpers: Helpers) {
		let result = helpers.javascript_tag_block(AttributeMap::new(), || {
			Err(HelperError::capture("boom"))
		});
		assert!(matches!(result, Err(HelperError::Capture(_))));
	}

	#[rstest]
	fn test_form_tag_block_wraps_content() {
		let helpers = Helpers::default().with_csrf(CsrfToken::new("tok"));
		let html = helpers
			.form_tag_block("/posts", &[], FormOptions::new(), || {
				Ok("<div>fields</div>".to_string())
			})
			.unwrap();
		assert_eq!(
			html,
			r#"<form action="/posts" method="post"><div>fields</div></form>"#
		);
	}

	#[rstest]
	fn test_render_js_block(helpers: Helpers) {
		let mut page = PageScript::new();
		page.alert("saved");
		let response = helpers.render_js_block(&page);
		assert_eq!(response.content_type, "text/javascript");
		assert!(response.body.starts_with(r#"try { alert("saved"); }"#));
	}
}
