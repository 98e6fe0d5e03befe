//! HTML attribute values and their serialization.
//!
//! Attributes are kept in insertion order. Serialization rules:
//! - `true` renders as `name="name"` (e.g. `disabled="disabled"`)
//! - `false` and absent values drop the attribute
//! - everything else renders its string form, HTML-escaped

use crate::escaping::html_escape;
use serde_json::Value;
use std::fmt;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	Text(String),
	Bool(bool),
	Int(i64),
	Float(f64),
	Absent,
}

impl AttrValue {
	/// Returns the string form used in markup, or `None` for values that
	/// render without a string (`bool`, absent).
	pub fn as_text(&self) -> Option<String> {
		match self {
			AttrValue::Text(s) => Some(s.clone()),
			AttrValue::Int(n) => Some(n.to_string()),
			AttrValue::Float(n) => Some(n.to_string()),
			AttrValue::Bool(_) | AttrValue::Absent => None,
		}
	}

	/// Whether the attribute is rendered at all.
	pub fn is_rendered(&self) -> bool {
		!matches!(self, AttrValue::Bool(false) | AttrValue::Absent)
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		AttrValue::Int(value.into())
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		AttrValue::Int(value)
	}
}

impl From<u32> for AttrValue {
	fn from(value: u32) -> Self {
		AttrValue::Int(value.into())
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		AttrValue::Float(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttrValue::Absent, Into::into)
	}
}

/// JSON values coming from template contexts. Shapes without an attribute
/// meaning (arrays, objects, out-of-range numbers) are stringified.
impl From<&Value> for AttrValue {
	fn from(value: &Value) -> Self {
		match value {
			Value::Null => AttrValue::Absent,
			Value::Bool(b) => AttrValue::Bool(*b),
			Value::String(s) => AttrValue::Text(s.clone()),
			Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					AttrValue::Int(i)
				} else if let Some(f) = n.as_f64() {
					AttrValue::Float(f)
				} else {
					AttrValue::Text(n.to_string())
				}
			}
			other => AttrValue::Text(other.to_string()),
		}
	}
}

/// Ordered attribute-name to value mapping.
///
/// Keys are case-sensitive. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
	entries: Vec<(String, AttrValue)>,
}

impl AttributeMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Inserts or replaces an attribute, keeping the original position of an
	/// existing key.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		let index = self.entries.iter().position(|(key, _)| key == name)?;
		Some(self.entries.remove(index).1)
	}

	/// Appends every entry of `other` whose key is not already present.
	///
	/// Composers insert their required keys first and then fill in the
	/// caller's attributes with this.
	pub fn extend_missing(&mut self, other: &AttributeMap) {
		for (key, value) in &other.entries {
			if !self.contains(key) {
				self.entries.push((key.clone(), value.clone()));
			}
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Serializes the rendered attributes as ` key="value"` pairs.
	///
	/// The result carries a single leading space when non-empty so it can be
	/// appended straight after a tag name.
	///
	/// # Examples
	///
	/// ```
	/// use tagkit_core::AttributeMap;
	///
	/// let attrs = AttributeMap::new()
	///     .with("class", "btn")
	///     .with("disabled", true)
	///     .with("hidden", false);
	/// assert_eq!(attrs.to_html(), r#" class="btn" disabled="disabled""#);
	/// assert_eq!(AttributeMap::new().to_html(), "");
	/// ```
	pub fn to_html(&self) -> String {
		let mut html = String::new();
		for (key, value) in &self.entries {
			let rendered = match value {
				AttrValue::Bool(true) => key.clone(),
				other => match other.as_text() {
					Some(text) => html_escape(&text).into_owned(),
					None => continue,
				},
			};
			html.push(' ');
			html.push_str(key);
			html.push_str("=\"");
			html.push_str(&rendered);
			html.push('"');
		}
		html
	}
}

impl fmt::Display for AttributeMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_html())
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = AttributeMap::new();
		for (key, value) in iter {
			map.insert(key, value);
		}
		map
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_true_renders_name_as_value() {
		let attrs = AttributeMap::new().with("disabled", true);
		assert_eq!(attrs.to_html(), r#" disabled="disabled""#);
	}

	#[rstest]
	fn test_false_and_absent_are_omitted() {
		let attrs = AttributeMap::new()
			.with("disabled", false)
			.with("title", None::<&str>);
		assert_eq!(attrs.to_html(), "");
	}

	#[rstest]
	fn test_text_value_is_escaped() {
		let attrs = AttributeMap::new().with("title", r#"Tom & "Jerry""#);
		assert_eq!(attrs.to_html(), r#" title="Tom &amp; &quot;Jerry&quot;""#);
	}

	#[rstest]
	fn test_numbers_are_stringified() {
		let attrs = AttributeMap::new().with("tabindex", 3).with("step", 0.5);
		assert_eq!(attrs.to_html(), r#" tabindex="3" step="0.5""#);
	}

	#[rstest]
	fn test_insert_replaces_in_place() {
		let mut attrs = AttributeMap::new().with("id", "a").with("class", "b");
		attrs.insert("id", "c");
		assert_eq!(attrs.to_html(), r#" id="c" class="b""#);
		assert_eq!(attrs.len(), 2);
	}

	#[rstest]
	fn test_keys_are_case_sensitive() {
		let attrs = AttributeMap::new().with("ID", "a").with("id", "b");
		assert_eq!(attrs.len(), 2);
	}

	#[rstest]
	fn test_extend_missing_keeps_existing_values() {
		let mut attrs = AttributeMap::new().with("href", "#");
		let caller = AttributeMap::new().with("class", "x").with("href", "/other");
		attrs.extend_missing(&caller);
		assert_eq!(attrs.to_html(), r##" href="#" class="x""##);
	}

	#[rstest]
	fn test_remove() {
		let mut attrs = AttributeMap::new().with("a", "1").with("b", "2");
		assert_eq!(attrs.remove("a"), Some(AttrValue::from("1")));
		assert_eq!(attrs.remove("a"), None);
		assert_eq!(attrs.to_html(), r#" b="2""#);
	}

	#[rstest]
	#[case(json!(null), AttrValue::Absent)]
	#[case(json!(true), AttrValue::Bool(true))]
	#[case(json!("x"), AttrValue::Text("x".to_string()))]
	#[case(json!(7), AttrValue::Int(7))]
	#[case(json!(1.5), AttrValue::Float(1.5))]
	#[case(json!(["a", "b"]), AttrValue::Text(r#"["a","b"]"#.to_string()))]
	fn test_from_json_value(#[case] value: Value, #[case] expected: AttrValue) {
		assert_eq!(AttrValue::from(&value), expected);
	}

	#[rstest]
	fn test_collect_from_pairs() {
		let attrs: AttributeMap = [("type", "hidden"), ("name", "q")].into_iter().collect();
		assert_eq!(attrs.to_html(), r#" type="hidden" name="q""#);
	}
}
