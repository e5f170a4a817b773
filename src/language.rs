//! Language detection stub.
//!
//! Good enough to tag chat records with a plausible language code; not
//! a real language identifier. Counts characters per Unicode script
//! block and picks the dominant one, defaulting to "en" whenever
//! nothing non-Latin dominates.

use crate::config::DEFAULT_LANGUAGE;

const SCRIPTS: &[(&str, std::ops::RangeInclusive<u32>)] = &[
    ("hi", 0x0900..=0x097F), // Devanagari
    ("bn", 0x0980..=0x09FF), // Bengali
    ("ta", 0x0B80..=0x0BFF), // Tamil
    ("te", 0x0C00..=0x0C7F), // Telugu
];

/// Detect the language of `text`, defaulting to [`DEFAULT_LANGUAGE`].
pub fn detect_language(text: &str) -> &'static str {
    let mut best = DEFAULT_LANGUAGE;
    let mut best_count = 0usize;

    for (code, range) in SCRIPTS {
        let count = text
            .chars()
            .filter(|c| range.contains(&(*c as u32)))
            .count();
        if count > best_count {
            best = code;
            best_count = count;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_english() {
        assert_eq!(detect_language("I have a fever"), "en");
    }

    #[test]
    fn devanagari_is_hindi() {
        assert_eq!(detect_language("मुझे बुखार है"), "hi");
    }

    #[test]
    fn tamil_script_detected() {
        assert_eq!(detect_language("எனக்கு காய்ச்சல்"), "ta");
    }

    #[test]
    fn empty_and_symbols_default_to_english() {
        assert_eq!(detect_language(""), "en");
        assert_eq!(detect_language("123 !?"), "en");
    }
}
