//! Numeric and fixed-term preservation ("F3") for translated notices
//!
//! The model regularly garbles two things in public-notice text: legal section
//! numbers ("Section 144" coming back as "धारा 99") and the word "curfew",
//! which it tends to truncate to a partial transliteration. This module patches
//! exactly those two cases using patterns found in the English source. Any other
//! drift between source and translation is left alone.
//!
//! # Example
//!
//! ```ignore
//! use notice_mt::preserve;
//!
//! let fixed = preserve("Issued under Section 144", "धारा 99 के अंतर्गत जारी");
//! assert_eq!(fixed, "धारा 144 के अंतर्गत जारी");
//! ```

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Hindi token for "Section"
pub const SECTION_TOKEN: &str = "धारा";

/// Correct Hindi rendering of "curfew"
pub const CURFEW_TOKEN: &str = "कर्फ्यू";

/// Partial transliteration of "curfew" the model is known to emit
pub const CURFEW_PARTIAL: &str = "कर्ट";

static SOURCE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Section\s+(\d+)").expect("valid source section pattern"));

static TARGET_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"धारा\s+\d+").expect("valid target section pattern"));

/// Collect the section numbers referenced in the source, in order of appearance
pub fn section_numbers(source: &str) -> Vec<&str> {
    SOURCE_SECTION
        .captures_iter(source)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Apply section-number and curfew corrections to a raw translation
///
/// The n-th "Section N" in the source rewrites the n-th "धारा <digits>" span in
/// the translation. Spans beyond the number of source references are kept as
/// generated, and source references without a matching span are dropped.
pub fn preserve(source: &str, raw_translation: &str) -> String {
    let numbers = section_numbers(source);

    let mut translation = if numbers.is_empty() {
        raw_translation.to_string()
    } else {
        let mut next = numbers.iter();
        TARGET_SECTION
            .replace_all(raw_translation, |caps: &Captures| match next.next() {
                Some(number) => format!("{} {}", SECTION_TOKEN, number),
                None => caps[0].to_string(),
            })
            .into_owned()
    };

    if source.to_lowercase().contains("curfew") {
        translation = translation.replace(CURFEW_PARTIAL, CURFEW_TOKEN);
    }

    translation
}
