//! JavaScript literal assembly for option hashes passed to client-side calls.
//!
//! These helpers only glue already-serialized pieces together. Values are not
//! escaped here; callers escape with [`crate::escape_javascript`] first.

use std::fmt::Display;

/// A value for an inline option: a list, a scalar, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptValue {
	List(Vec<String>),
	Scalar(String),
	Absent,
}

impl From<&str> for ScriptValue {
	fn from(value: &str) -> Self {
		ScriptValue::Scalar(value.to_string())
	}
}

impl From<String> for ScriptValue {
	fn from(value: String) -> Self {
		ScriptValue::Scalar(value)
	}
}

impl<S: Into<String>> From<Vec<S>> for ScriptValue {
	fn from(values: Vec<S>) -> Self {
		ScriptValue::List(values.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<ScriptValue>> From<Option<T>> for ScriptValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(ScriptValue::Absent, Into::into)
	}
}

/// Renders a list as `['a','b']`, a scalar as `'a'`, and nothing as an empty
/// string.
///
/// # Examples
///
/// ```
/// use tagkit_core::array_or_string_for_javascript;
///
/// assert_eq!(array_or_string_for_javascript(vec!["a", "b"]), "['a','b']");
/// assert_eq!(array_or_string_for_javascript("top"), "'top'");
/// assert_eq!(array_or_string_for_javascript(None::<&str>), "");
/// ```
pub fn array_or_string_for_javascript(option: impl Into<ScriptValue>) -> String {
	match option.into() {
		ScriptValue::List(items) => format!("['{}']", items.join("','")),
		ScriptValue::Scalar(value) => format!("'{value}'"),
		ScriptValue::Absent => String::new(),
	}
}

/// Renders `{k1:v1, k2:v2}` with entries sorted by key.
///
/// Values are raw JavaScript expressions and are inserted verbatim.
///
/// # Examples
///
/// ```
/// use tagkit_core::options_for_javascript;
///
/// assert_eq!(options_for_javascript([("b", "2"), ("a", "1")]), "{a:1, b:2}");
/// assert_eq!(options_for_javascript(Vec::<(&str, &str)>::new()), "{}");
/// ```
pub fn options_for_javascript<K, V>(options: impl IntoIterator<Item = (K, V)>) -> String
where
	K: Display,
	V: Display,
{
	let mut pairs: Vec<(String, String)> = options
		.into_iter()
		.map(|(key, value)| (key.to_string(), value.to_string()))
		.collect();
	pairs.sort();
	let body = pairs
		.iter()
		.map(|(key, value)| format!("{key}:{value}"))
		.collect::<Vec<_>>()
		.join(", ");
	format!("{{{body}}}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_list_elements_are_not_escaped() {
		assert_eq!(
			array_or_string_for_javascript(vec!["it's".to_string()]),
			"['it's']"
		);
	}

	#[rstest]
	fn test_empty_list() {
		assert_eq!(array_or_string_for_javascript(Vec::<String>::new()), "['']");
	}

	#[rstest]
	fn test_options_sorted_regardless_of_input_order() {
		let forward = options_for_javascript([("a", "1"), ("b", "2")]);
		let backward = options_for_javascript([("b", "2"), ("a", "1")]);
		assert_eq!(forward, "{a:1, b:2}");
		assert_eq!(forward, backward);
	}

	#[rstest]
	fn test_options_sort_by_key_not_rendered_pair() {
		// `a1` sorts after `a`, even though `a1:` would sort before `a:`
		assert_eq!(
			options_for_javascript([("a1", "'x'"), ("a", "'y'")]),
			"{a:'y', a1:'x'}"
		);
	}

	#[rstest]
	fn test_options_values_are_raw_expressions() {
		let rendered = options_for_javascript([
			("onComplete", "function(request){ done() }".to_string()),
			("asynchronous", "true".to_string()),
		]);
		assert_eq!(
			rendered,
			"{asynchronous:true, onComplete:function(request){ done() }}"
		);
	}
}
