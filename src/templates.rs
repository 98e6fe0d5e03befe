//! Tera integration
//!
//! The helpers are registered from a fixed list rather than discovered at
//! runtime:
//!
//! | Name | Kind | Usage |
//! |------|------|-------|
//! | `escape_javascript` | filter | `{{ text \| escape_javascript }}` |
//! | `javascript_cdata` | filter | `{{ code \| javascript_cdata }}` |
//! | `javascript_tag` | filter | `{{ code \| javascript_tag(defer=true) }}` |
//! | `link_to_function` | function | `{{ link_to_function(name="Go", function="go()") }}` |
//! | `button_to_function` | function | `{{ button_to_function(name="Go", function="go()") }}` |
//! | `form_tag` | function | `{{ form_tag(url="/posts/1", method="put") }}` |
//!
//! Named arguments other than the ones each helper consumes become HTML
//! attributes, rendered in alphabetical order. Markup-producing helpers are
//! marked safe so Tera's autoescaping leaves them alone; `escape_javascript`
//! is not, so pipe it through `safe` inside `<script>` blocks.
//!
//! ## Example
//!
//! ```rust
//! use tagkit::{Helpers, register_helpers};
//! use tera::{Context, Tera};
//!
//! let mut tera = Tera::default();
//! register_helpers(&mut tera, Helpers::default());
//! tera.add_raw_template(
//!     "link.html",
//!     r#"{{ link_to_function(name="Hi", function="greet()") }}"#,
//! )
//! .unwrap();
//!
//! let html = tera.render("link.html", &Context::new()).unwrap();
//! assert_eq!(html, r##"<a href="#" onclick="greet(); return false;">Hi</a>"##);
//! ```

use std::collections::HashMap;
use tagkit_core::{
	AttrValue, AttributeMap, FormOptions, Helpers, escape_javascript, javascript_cdata_section,
};
use tera::{Error, Filter, Function, Result as TeraResult, Tera, Value};

/// Filters registered by [`register_helpers`].
pub const HELPER_FILTERS: &[&str] = &["escape_javascript", "javascript_cdata", "javascript_tag"];

/// Functions registered by [`register_helpers`].
pub const HELPER_FUNCTIONS: &[&str] = &["link_to_function", "button_to_function", "form_tag"];

/// Registers every helper filter and function on `tera`.
pub fn register_helpers(tera: &mut Tera, helpers: Helpers) {
	tera.register_filter("escape_javascript", EscapeJavascript);
	tera.register_filter("javascript_cdata", JavascriptCdata);
	tera.register_filter(
		"javascript_tag",
		JavascriptTag {
			helpers: helpers.clone(),
		},
	);
	tera.register_function(
		"link_to_function",
		FunctionTag {
			helpers: helpers.clone(),
			kind: FunctionTagKind::Link,
		},
	);
	tera.register_function(
		"button_to_function",
		FunctionTag {
			helpers: helpers.clone(),
			kind: FunctionTagKind::Button,
		},
	);
	tera.register_function("form_tag", FormTag { helpers });
	tracing::debug!(
		filters = HELPER_FILTERS.len(),
		functions = HELPER_FUNCTIONS.len(),
		"registered template helpers"
	);
}

/// Text of a value; `null` is empty, non-strings use their JSON form.
fn value_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn required_arg(args: &HashMap<String, Value>, helper: &str, name: &str) -> TeraResult<String> {
	args.get(name)
		.map(value_text)
		.ok_or_else(|| Error::msg(format!("`{helper}` requires a `{name}` argument")))
}

/// Every argument not in `consumed`, sorted by name.
fn attributes_from(args: &HashMap<String, Value>, consumed: &[&str]) -> AttributeMap {
	let mut names: Vec<&String> = args
		.keys()
		.filter(|name| !consumed.contains(&name.as_str()))
		.collect();
	names.sort();
	names
		.into_iter()
		.map(|name| (name.clone(), AttrValue::from(&args[name])))
		.collect()
}

struct EscapeJavascript;

impl Filter for EscapeJavascript {
	fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
		let text = value_text(value);
		Ok(Value::String(escape_javascript(text.as_str())))
	}
}

struct JavascriptCdata;

impl Filter for JavascriptCdata {
	fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
		Ok(Value::String(javascript_cdata_section(&value_text(value))))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

struct JavascriptTag {
	helpers: Helpers,
}

impl Filter for JavascriptTag {
	fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let attrs = attributes_from(args, &[]);
		Ok(Value::String(
			self.helpers.javascript_tag(&value_text(value), attrs),
		))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

#[derive(Clone, Copy)]
enum FunctionTagKind {
	Link,
	Button,
}

struct FunctionTag {
	helpers: Helpers,
	kind: FunctionTagKind,
}

impl Function for FunctionTag {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let helper = match self.kind {
			FunctionTagKind::Link => "link_to_function",
			FunctionTagKind::Button => "button_to_function",
		};
		let name = required_arg(args, helper, "name")?;
		let function = args.get("function").map(value_text).unwrap_or_default();
		let attrs = attributes_from(args, &["name", "function"]);
		let html = match self.kind {
			FunctionTagKind::Link => self.helpers.link_to_function(&name, function, attrs),
			FunctionTagKind::Button => self.helpers.button_to_function(&name, function, attrs),
		};
		Ok(Value::String(html))
	}

	fn is_safe(&self) -> bool {
		true
	}
}

struct FormTag {
	helpers: Helpers,
}

impl Function for FormTag {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let url = required_arg(args, "form_tag", "url")?;
		let mut options = FormOptions::new();
		options.method = args.get("method").map(value_text);
		options.multipart = args
			.get("multipart")
			.is_some_and(|value| AttrValue::from(value).is_rendered());
		options.attributes = attributes_from(args, &["url", "method", "multipart"]);
		let html = self
			.helpers
			.form_tag(&url, &[], options)
			.map_err(|err| Error::chain("form_tag failed", err))?;
		Ok(Value::String(html))
	}

	fn is_safe(&self) -> bool {
		true
	}
}
