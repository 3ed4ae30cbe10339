//! Free-Text Input Sanitization
//!
//! Every free-text form field passes through [`sanitize`] before it is
//! validated or stored. The function escapes HTML-reserved characters so
//! stored text cannot inject markup when echoed back, strips the literal
//! characters `;`, `"` and `'`, and trims surrounding whitespace.
//!
//! The result is a fixed point: `sanitize(sanitize(x)) == sanitize(x)`
//! for every input. Two details make that hold:
//! - an `&` that already introduces one of the escape sequences emitted
//!   here is left alone instead of being escaped again;
//! - the trim runs last, since stripping can expose new surrounding
//!   whitespace (e.g. `"; a ;"`).

/// Escape-sequence names this module emits, as they appear after the
/// semicolon strip. An `&` followed by one of these is already escaped
/// output and must not be escaped a second time.
const ESCAPE_NAMES: &[&str] = &["amp", "lt", "gt", "quot", "#x27"];

/// Sanitize a free-text field.
///
/// Total function: never fails, and maps absent/empty input to `""`.
pub fn sanitize(input: &str) -> String {
    let escaped = escape_markup(input);
    let stripped: String = escaped
        .chars()
        .filter(|c| !matches!(c, ';' | '"' | '\''))
        .collect();
    stripped.trim().to_string()
}

/// Escape HTML-reserved characters without double-escaping.
fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        rest = &rest[ch.len_utf8()..];
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '&' => {
                if ESCAPE_NAMES.iter().any(|name| rest.starts_with(name)) {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  alice  "), "alice");
        assert_eq!(sanitize("\talice\n"), "alice");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize("Alice Smith"), "Alice Smith");
        assert_eq!(sanitize("rua do sol, 12"), "rua do sol, 12");
    }

    #[test]
    fn test_escapes_markup() {
        assert_eq!(sanitize("a<b"), "a&ltb");
        assert_eq!(sanitize("a>b"), "a&gtb");
        assert_eq!(sanitize("<script>"), "&ltscript&gt");
        assert_eq!(sanitize("a&b"), "a&ampb");
    }

    #[test]
    fn test_strips_quotes_and_semicolons() {
        assert_eq!(sanitize("it's"), "it&#x27s");
        assert_eq!(sanitize("a;b"), "ab");
        assert_eq!(sanitize(r#"say "hi""#), "say &quothi&quot");
        assert_eq!(sanitize("DROP TABLE clients;--"), "DROP TABLE clients--");
    }

    #[test]
    fn test_strip_can_expose_whitespace() {
        // Stripping the outer semicolons must not leave surrounding spaces
        assert_eq!(sanitize("; a ;"), "a");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "",
            "   ",
            "plain",
            "  padded  ",
            "a<b>c",
            "a&b",
            "a&amp;b",
            "a&ltb",
            "it's a \"test\"; ok",
            "; a ;",
            "&",
            "&quo",
            "<>&\"';",
            "júlia & joão <admin>",
        ];
        for input in inputs {
            let once = sanitize(input);
            let twice = sanitize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_already_escaped_not_doubled() {
        // Output of a previous pass goes through unchanged
        assert_eq!(sanitize("a&ampb"), "a&ampb");
        assert_eq!(sanitize("a&ltb"), "a&ltb");
        assert_eq!(sanitize("&#x27s"), "&#x27s");
    }
}
