use std::sync::OnceLock;

use regex::Regex;

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Everything that is not a word character or whitespace. Digits and
    // underscores survive, punctuation does not.
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("static regex"))
}

/// Lowercase, strip punctuation, split on whitespace.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = punctuation().replace_all(&lowered, "");
    stripped
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The normalized input as a single space-joined string, for substring
/// keyword checks (intent detection tests keywords against this).
pub fn normalize_joined(text: &str) -> String {
    normalize(text).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("I have a Fever!!"), vec!["i", "have", "a", "fever"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("!?.,;").is_empty());
    }

    #[test]
    fn digits_and_underscores_survive() {
        assert_eq!(normalize("user_1 aged 42?"), vec!["user_1", "aged", "42"]);
    }

    #[test]
    fn joined_form_collapses_whitespace() {
        assert_eq!(normalize_joined("  Head   ache! "), "head ache");
    }
}
