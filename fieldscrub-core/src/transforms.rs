// File: fieldscrub-core/src/transforms.rs
//! Single-value sanitisation transforms.
//!
//! Every transform here is independently callable for ad-hoc use and is also
//! what the engine dispatches to for category members. All of them degrade
//! to a safe default (0, empty string, dropped value) rather than fail.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::value::FieldValue;

// Characters an address may contain besides alphanumerics.
static EMAIL_EXTRA_CHARS: Lazy<HashSet<char>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend([
        '!', '#', '$', '%', '&', '\'', '*', '+', '-', '=', '?', '^', '_', '`', '{', '|', '}',
        '~', '@', '.', '[', ']',
    ]);
    set
});

static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["']"#).unwrap());

/// Removes markup in the manner of classic tag stripping: everything from a
/// `<` up to the next `>` is dropped, and an unterminated `<` swallows the
/// remainder of the input.
pub fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut inside_tag = false;

    for c in input.chars() {
        match c {
            '<' => inside_tag = true,
            '>' if inside_tag => inside_tag = false,
            _ if !inside_tag => output.push(c),
            _ => {}
        }
    }

    output
}

fn encode_quotes(input: &str) -> String {
    QUOTE_RE
        .replace_all(input, |caps: &regex::Captures| {
            if &caps[0] == "\"" {
                "&#34;"
            } else {
                "&#39;"
            }
        })
        .into_owned()
}

/// Strips markup, encodes quote characters, and trims surrounding
/// whitespace.
pub fn sanitise_string(value: &str) -> String {
    encode_quotes(&strip_tags(value)).trim().to_string()
}

/// Coerces any field value to a boolean using standard truthiness rules.
pub fn sanitise_boolean(value: &FieldValue) -> bool {
    value.is_truthy()
}

/// Coerces any field value to an integer.
///
/// Text parses its leading numeric prefix (`"42abc"` is 42, `"abc"` is 0),
/// floats truncate, booleans map to 0/1, lists map to 0 when empty and 1
/// otherwise, and null and upload handles map to 0. Never fails.
pub fn sanitise_integer(value: &FieldValue) -> i64 {
    match value {
        FieldValue::Null => 0,
        FieldValue::Bool(b) => i64::from(*b),
        FieldValue::Int(n) => *n,
        FieldValue::Float(f) => *f as i64,
        FieldValue::Text(s) => parse_leading_int(s),
        FieldValue::List(items) => i64::from(!items.is_empty()),
        FieldValue::Upload(_) => 0,
    }
}

// Optional sign plus leading ASCII digits; anything after the prefix is
// ignored. Saturates on overflow.
fn parse_leading_int(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }

    match digits.parse::<i64>() {
        Ok(n) => {
            if negative {
                -n
            } else {
                n
            }
        }
        Err(_) => {
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    }
}

/// Applies the plain-string pass, then validates the result as URL syntax.
/// Anything `Url::parse` rejects becomes an empty string.
pub fn sanitise_url(value: &str) -> String {
    let encoded = sanitise_string(value);
    if encoded.is_empty() {
        return encoded;
    }

    match Url::parse(&encoded) {
        Ok(_) => encoded,
        Err(_) => String::new(),
    }
}

/// Drops every character an email address may not contain.
pub fn sanitise_email(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || EMAIL_EXTRA_CHARS.contains(c))
        .collect()
}

/// Enum-like whitelisting: returns `value` unchanged if it is a member of
/// `allowed`, and an empty string otherwise.
pub fn sanitise_within<'a>(value: &'a str, allowed: &[&str]) -> &'a str {
    if allowed.contains(&value) {
        value
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sanitisation_strips_tags_and_trims() {
        assert_eq!(sanitise_string("  <b>bold</b> move  "), "bold move");
        assert_eq!(sanitise_string("a \"quoted\" 'word'"), "a &#34;quoted&#34; &#39;word&#39;");
        assert_eq!(sanitise_string("plain"), "plain");
    }

    #[test]
    fn unterminated_tag_swallows_the_rest() {
        assert_eq!(strip_tags("before <never closed"), "before ");
        assert_eq!(strip_tags("a > b"), "a > b");
    }

    #[test]
    fn boolean_coercion() {
        assert!(!sanitise_boolean(&FieldValue::text("")));
        assert!(!sanitise_boolean(&FieldValue::text("0")));
        assert!(sanitise_boolean(&FieldValue::text("abc")));
        assert!(sanitise_boolean(&FieldValue::text("false")));
        assert!(!sanitise_boolean(&FieldValue::Null));
    }

    #[test]
    fn integer_coercion() {
        assert_eq!(sanitise_integer(&FieldValue::text("42")), 42);
        assert_eq!(sanitise_integer(&FieldValue::text("42abc")), 42);
        assert_eq!(sanitise_integer(&FieldValue::text("abc")), 0);
        assert_eq!(sanitise_integer(&FieldValue::text("-7x")), -7);
        assert_eq!(sanitise_integer(&FieldValue::text("3.9")), 3);
        assert_eq!(sanitise_integer(&FieldValue::Float(3.9)), 3);
        assert_eq!(sanitise_integer(&FieldValue::Bool(true)), 1);
        assert_eq!(sanitise_integer(&FieldValue::List(vec![])), 0);
        assert_eq!(sanitise_integer(&FieldValue::List(vec![FieldValue::Null])), 1);
    }

    #[test]
    fn url_validation_rejects_non_urls() {
        assert_eq!(sanitise_url(" https://example.com/a?b=c "), "https://example.com/a?b=c");
        assert_eq!(sanitise_url("not a url"), "");
        assert_eq!(sanitise_url(""), "");
    }

    #[test]
    fn email_keeps_only_address_characters() {
        assert_eq!(sanitise_email(" user+tag@example.com \n"), "user+tag@example.com");
        assert_eq!(sanitise_email("we(ird)@exa mple.com"), "weird@example.com");
    }

    #[test]
    fn within_whitelists_members_only() {
        assert_eq!(sanitise_within("red", &["red", "blue"]), "red");
        assert_eq!(sanitise_within("green", &["red", "blue"]), "");
    }
}
