//! Event handler composition for `onclick` / `onsubmit` attributes.
//!
//! A handler is either an inline expression or a [`PageScript`] of generated
//! statements. Page scripts are wrapped in a `try`/`catch` shell that alerts
//! the error and the escaped statement source, then rethrows.

use crate::escaping::escape_javascript;
use serde_json::Value;

/// Termination style of an inline handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerStyle {
	/// Anchors cancel navigation: `expr; return false;`
	Anchor,
	/// Buttons only terminate the statement: `expr;`
	Button,
}

/// Chains an optional existing handler with `expression`.
///
/// # Examples
///
/// ```
/// use tagkit_core::{HandlerStyle, build_inline_handler};
///
/// assert_eq!(
///     build_inline_handler(None, "doThing()", HandlerStyle::Anchor),
///     "doThing(); return false;"
/// );
/// assert_eq!(
///     build_inline_handler(Some("log()"), "doThing()", HandlerStyle::Anchor),
///     "log(); doThing(); return false;"
/// );
/// assert_eq!(
///     build_inline_handler(None, "doThing()", HandlerStyle::Button),
///     "doThing();"
/// );
/// ```
pub fn build_inline_handler(
	existing: Option<&str>,
	expression: &str,
	style: HandlerStyle,
) -> String {
	let mut handler = String::new();
	if let Some(existing) = existing {
		handler.push_str(existing);
		handler.push_str("; ");
	}
	handler.push_str(expression);
	match style {
		HandlerStyle::Anchor => handler.push_str("; return false;"),
		HandlerStyle::Button => handler.push(';'),
	}
	handler
}

/// One generated client-side statement.
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatement {
	/// `$("target").method(args)`, or `method(args)` without a target.
	Call {
		target: Option<String>,
		method: String,
		args: Vec<Value>,
	},
	/// Emitted verbatim.
	Raw(String),
}

impl PageStatement {
	pub fn to_js(&self) -> String {
		match self {
			PageStatement::Call {
				target,
				method,
				args,
			} => {
				let args = args
					.iter()
					.map(Value::to_string)
					.collect::<Vec<_>>()
					.join(", ");
				match target {
					Some(target) => {
						format!("$({}).{method}({args})", Value::from(target.as_str()))
					}
					None => format!("{method}({args})"),
				}
			}
			PageStatement::Raw(js) => js.clone(),
		}
	}
}

/// Ordered list of generated statements.
///
/// # Examples
///
/// ```
/// use tagkit_core::PageScript;
///
/// let mut page = PageScript::new();
/// page.element("details").call("visualEffect", ["toggle_blind"]);
/// page.replace_html("more_link", "Show me less");
/// assert_eq!(
///     page.to_js(),
///     "$(\"details\").visualEffect(\"toggle_blind\");\nElement.update(\"more_link\", \"Show me less\");"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageScript {
	statements: Vec<PageStatement>,
}

impl PageScript {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, statement: PageStatement) -> &mut Self {
		self.statements.push(statement);
		self
	}

	pub fn push_raw(&mut self, js: impl Into<String>) -> &mut Self {
		self.push(PageStatement::Raw(js.into()))
	}

	/// Calls a global function.
	pub fn call<I, A>(&mut self, method: impl Into<String>, args: I) -> &mut Self
	where
		I: IntoIterator<Item = A>,
		A: Into<Value>,
	{
		self.push(PageStatement::Call {
			target: None,
			method: method.into(),
			args: args.into_iter().map(Into::into).collect(),
		})
	}

	/// Targets the element with the given id.
	pub fn element(&mut self, id: impl Into<String>) -> ElementProxy<'_> {
		ElementProxy {
			script: self,
			id: id.into(),
		}
	}

	pub fn replace_html(&mut self, id: impl Into<String>, html: impl Into<String>) -> &mut Self {
		let args: [String; 2] = [id.into(), html.into()];
		self.call("Element.update", args)
	}

	pub fn show(&mut self, id: impl Into<String>) -> &mut Self {
		let id: String = id.into();
		self.call("Element.show", [id])
	}

	pub fn hide(&mut self, id: impl Into<String>) -> &mut Self {
		let id: String = id.into();
		self.call("Element.hide", [id])
	}

	pub fn alert(&mut self, message: impl Into<String>) -> &mut Self {
		let message: String = message.into();
		self.call("alert", [message])
	}

	pub fn redirect_to(&mut self, url: impl Into<String>) -> &mut Self {
		let url: String = url.into();
		let url = Value::from(url);
		self.push_raw(format!("window.location.href = {url}"))
	}

	pub fn statements(&self) -> &[PageStatement] {
		&self.statements
	}

	pub fn is_empty(&self) -> bool {
		self.statements.is_empty()
	}

	/// Each statement terminated by `;`, one per line.
	pub fn to_js(&self) -> String {
		self.statements
			.iter()
			.map(|statement| format!("{};", statement.to_js()))
			.collect::<Vec<_>>()
			.join("\n")
	}
}

impl FromIterator<PageStatement> for PageScript {
	fn from_iter<I: IntoIterator<Item = PageStatement>>(iter: I) -> Self {
		Self {
			statements: iter.into_iter().collect(),
		}
	}
}

/// Statement builder bound to one element id.
pub struct ElementProxy<'a> {
	script: &'a mut PageScript,
	id: String,
}

impl ElementProxy<'_> {
	pub fn call<I, A>(self, method: impl Into<String>, args: I) -> Self
	where
		I: IntoIterator<Item = A>,
		A: Into<Value>,
	{
		self.script.push(PageStatement::Call {
			target: Some(self.id.clone()),
			method: method.into(),
			args: args.into_iter().map(Into::into).collect(),
		});
		self
	}
}

/// Wraps generated statements in the error-reporting shell.
///
/// The `try` body holds the executable statements; the second `alert` holds
/// the same source as an escaped string literal.
pub fn build_page_handler(script: &PageScript) -> String {
	let source = script.to_js();
	tracing::trace!(statements = script.statements().len(), "wrapping page handler");
	format!(
		"try {{ {source} }} catch (e) {{ alert('RJS error:\\n\\n' + e.toString()); alert('{}'); throw e; }}",
		escape_javascript(source.as_str())
	)
}

/// The script behind an event attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Handler {
	Inline(String),
	Page(PageScript),
}

impl Handler {
	/// Handler source before inline composition.
	pub fn to_js(&self) -> String {
		match self {
			Handler::Inline(expression) => expression.clone(),
			Handler::Page(script) => build_page_handler(script),
		}
	}
}

impl Default for Handler {
	fn default() -> Self {
		Handler::Inline(String::new())
	}
}

impl From<&str> for Handler {
	fn from(expression: &str) -> Self {
		Handler::Inline(expression.to_string())
	}
}

impl From<String> for Handler {
	fn from(expression: String) -> Self {
		Handler::Inline(expression)
	}
}

impl From<PageScript> for Handler {
	fn from(script: PageScript) -> Self {
		Handler::Page(script)
	}
}
