//! Length-ratio confidence heuristic
//!
//! Hindi renderings of English notices usually run 1.0-1.3x the source word
//! count. The score below only reflects how plausible the output length is for
//! this language pair; it is not a calibrated probability.

/// Count whitespace-delimited tokens
///
/// Separators are Unicode whitespace plus the ASCII information separators
/// U+001C..U+001F, the same set Python's `str.split()` breaks on.
pub fn word_count(text: &str) -> usize {
    text.split(is_separator).filter(|w| !w.is_empty()).count()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Score a translation against its source by word-count ratio
///
/// Returns 0.0 for an empty translation, 0.5 when the source has no words,
/// otherwise 0.9 / 0.7 / 0.5 for the ratio bands [0.8, 1.5], [0.5, 2.0] and
/// everything else.
pub fn estimate(source: &str, translation: &str) -> f64 {
    if translation.is_empty() {
        return 0.0;
    }

    let src_words = word_count(source);
    let tgt_words = word_count(translation);

    if src_words == 0 {
        return 0.5;
    }

    let ratio = tgt_words as f64 / src_words as f64;

    if (0.8..=1.5).contains(&ratio) {
        0.9
    } else if (0.5..=2.0).contains(&ratio) {
        0.7
    } else {
        0.5
    }
}
