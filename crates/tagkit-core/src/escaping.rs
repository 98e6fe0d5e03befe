//! Escaping for JavaScript string literals, CDATA script bodies and HTML
//! attribute values.

use std::borrow::Cow;

/// Escapes text for embedding inside a single- or double-quoted JavaScript
/// string literal.
///
/// Rules, in order of precedence:
/// - `\` becomes `\\`
/// - `</` becomes `<\/` so the text cannot close a surrounding `<script>`
/// - `\r\n`, `\n` and `\r` each become the two characters `\n`
/// - `'` and `"` get a backslash prefix
///
/// A missing input escapes to the empty string.
///
/// # Examples
///
/// ```
/// use tagkit_core::escape_javascript;
///
/// assert_eq!(escape_javascript("it's"), r"it\'s");
/// assert_eq!(escape_javascript("</script>"), r"<\/script>");
/// assert_eq!(escape_javascript("a\r\nb"), r"a\nb");
/// assert_eq!(escape_javascript(None::<&str>), "");
/// ```
pub fn escape_javascript<'a>(javascript: impl Into<Option<&'a str>>) -> String {
	let Some(source) = javascript.into() else {
		return String::new();
	};

	let mut escaped = String::with_capacity(source.len() + 8);
	let mut chars = source.chars().peekable();
	while let Some(c) = chars.next() {
		match c {
			'\\' => escaped.push_str(r"\\"),
			'<' if chars.peek() == Some(&'/') => {
				chars.next();
				escaped.push_str(r"<\/");
			}
			'\r' => {
				if chars.peek() == Some(&'\n') {
					chars.next();
				}
				escaped.push_str(r"\n");
			}
			'\n' => escaped.push_str(r"\n"),
			'"' | '\'' => {
				escaped.push('\\');
				escaped.push(c);
			}
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Wraps script content in a comment-guarded CDATA section.
///
/// The CDATA markers sit behind `//` so consumers that treat the body as plain
/// script still see valid JavaScript.
///
/// # Examples
///
/// ```
/// use tagkit_core::javascript_cdata_section;
///
/// assert_eq!(
///     javascript_cdata_section("alert(1)"),
///     "\n//<![CDATA[\nalert(1)\n//]]>\n"
/// );
/// ```
pub fn javascript_cdata_section(content: &str) -> String {
	format!("\n//<![CDATA[\n{content}\n//]]>\n")
}

/// Escapes HTML special characters for attribute values and text.
///
/// Borrows the input when nothing needs escaping.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain text", "plain text")]
	#[case(r"C:\temp", r"C:\\temp")]
	#[case("alert('hi')", r"alert(\'hi\')")]
	#[case(r#"say "hi""#, r#"say \"hi\""#)]
	#[case("</script><script>", r"<\/script><script>")]
	#[case("a<b", "a<b")]
	#[case("one\ntwo", r"one\ntwo")]
	#[case("one\r\ntwo", r"one\ntwo")]
	#[case("one\rtwo", r"one\ntwo")]
	#[case("\n\r", r"\n\n")]
	fn test_escape_javascript(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_javascript(input), expected);
	}

	#[rstest]
	fn test_escape_javascript_absent_input() {
		assert_eq!(escape_javascript(None::<&str>), "");
		assert_eq!(escape_javascript(Some("x")), "x");
	}

	#[rstest]
	fn test_backslash_is_doubled_before_quotes_are_escaped() {
		let escaped = escape_javascript("a\\b'c\"d</e\nf");
		assert_eq!(escaped, r#"a\\b\'c\"d<\/e\nf"#);
	}

	#[rstest]
	fn test_escaped_quote_input_is_escaped_again() {
		// an already escaped quote gains both a doubled backslash and a new prefix
		assert_eq!(escape_javascript(r"\'"), r"\\\'");
	}

	#[rstest]
	fn test_cdata_section_keeps_content_verbatim() {
		let wrapped = javascript_cdata_section("x");
		assert!(wrapped.starts_with("\n//<![CDATA[\n"));
		assert!(wrapped.ends_with("\n//]]>\n"));
		assert_eq!(wrapped, "\n//<![CDATA[\nx\n//]]>\n");
	}

	#[rstest]
	fn test_html_escape_borrows_clean_input() {
		assert!(matches!(html_escape("Hello World"), Cow::Borrowed(_)));
	}

	#[rstest]
	fn test_html_escape_all_specials() {
		assert_eq!(
			html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
			"&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
		);
	}
}
