//! Splitting raw action text into a verb and an argument body

/// Split `Verb(body)` into its trimmed verb and body.
///
/// The body runs from the first `(` to the *last* `)` in the string, not the
/// one matching the opening parenthesis, so arguments may themselves contain
/// parentheses: `URL(http://x/(a))` has the body `http://x/(a)`. Without a
/// closing parenthesis after the opening one the body runs to the end.
///
/// Returns `None` when the verb is empty.
pub fn split_action(raw: &str) -> Option<(&str, &str)> {
    let (verb, body) = match raw.find('(') {
        Some(open) => {
            let body = match raw.rfind(')') {
                Some(close) if close > open => &raw[open + 1..close],
                _ => &raw[open + 1..],
            };
            (&raw[..open], body)
        }
        None => (raw, ""),
    };

    let verb = verb.trim();
    if verb.is_empty() {
        return None;
    }
    Some((verb, body.trim()))
}

/// Lenient integer parsing: optional leading whitespace and sign followed by
/// digits, trailing text ignored. Anything without leading digits is 0.
pub fn to_int(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_body() {
        assert_eq!(split_action("Settings(0)"), Some(("Settings", "0")));
        assert_eq!(split_action(" EditStatus ( 2 ) "), Some(("EditStatus", "2")));
    }

    #[test]
    fn test_split_without_body() {
        assert_eq!(split_action("About"), Some(("About", "")));
        assert_eq!(split_action("  Login  "), Some(("Login", "")));
    }

    #[test]
    fn test_empty_verb() {
        assert_eq!(split_action(""), None);
        assert_eq!(split_action("   "), None);
        assert_eq!(split_action("(body)"), None);
    }

    #[test]
    fn test_body_ends_at_last_parenthesis() {
        assert_eq!(
            split_action("URL(http://x/(a))"),
            Some(("URL", "http://x/(a)"))
        );
        assert_eq!(split_action("A(b) C(d)"), Some(("A", "b) C(d")));
    }

    #[test]
    fn test_unclosed_body_runs_to_end() {
        assert_eq!(split_action("Execute(C:\\anime"), Some(("Execute", "C:\\anime")));
        assert_eq!(split_action("x)y(z"), Some(("x)y", "z")));
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int("42"), 42);
        assert_eq!(to_int("  -3"), -3);
        assert_eq!(to_int("+7abc"), 7);
        assert_eq!(to_int("abc"), 0);
        assert_eq!(to_int(""), 0);
        assert_eq!(to_int("99999999999"), i32::MAX);
    }
}
