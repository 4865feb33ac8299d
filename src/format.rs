// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Display formatters applied while rendering the badge.
//!
//! Two pure helpers live here: [`shortnum`] converts magnitudes into short
//! human-readable strings (`1500` becomes `1.5k`) and [`smarttruncate`] cuts
//! long text at word boundaries. Both are deterministic and carry no state,
//! so the renderer can apply them per field without coordination.

use std::sync::LazyLock;

use regex::Regex;

/// Magnitude suffixes indexed by power of 1000, starting at `1000^1`.
pub const QUANTAS: [char; 5] = ['k', 'M', 'G', 'T', 'P'];

/// Default significant-digit precision used by [`shortnum`].
const DEFAULT_PRECISION: usize = 3;

/// Default maximum length used by [`smarttruncate`].
const DEFAULT_TRUNCATE_LENGTH: usize = 80;

/// Default suffix appended to truncated text.
const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

/// Default word-boundary pattern: runs of word characters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Formats a non-negative magnitude as a short string with three significant
/// digits.
///
/// Values of 1000 and above are divided by the largest power of 1000 not
/// exceeding them and suffixed with the matching [`QUANTAS`] letter; smaller
/// values are formatted without a suffix.
///
/// The caller must guarantee `value >= 0` and
/// `value < 1000^(QUANTAS.len() + 1)`; values beyond the suffix table index
/// out of range.
///
/// # Examples
///
/// ```
/// use ghbadge::shortnum;
///
/// assert_eq!(shortnum(999.0), "999");
/// assert_eq!(shortnum(1500.0), "1.5k");
/// assert_eq!(shortnum(2_500_000.0), "2.5M");
/// ```
pub fn shortnum(value: f64) -> String {
    shortnum_with_precision(value, DEFAULT_PRECISION)
}

/// Formats a non-negative magnitude with the requested number of significant
/// digits.
///
/// See [`shortnum`] for the suffix rules and preconditions.
pub fn shortnum_with_precision(value: f64, precision: usize) -> String {
    if value >= 1000.0 {
        let mut order = 0usize;
        let mut quotient = value;
        while quotient >= 1000.0 {
            quotient /= 1000.0;
            order += 1;
        }
        format!("{}{}", format_significant(quotient, precision), QUANTAS[order - 1])
    } else {
        format_significant(value, precision)
    }
}

/// Formats a value to the requested number of significant digits, trimming
/// trailing zeros after the decimal point.
fn format_significant(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (precision as i64 - 1 - magnitude).max(0) as usize;
    let formatted = format!("{value:.decimals$}");

    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        formatted
    }
}

/// Truncates text at the last word boundary fitting an 80-character limit,
/// appending `...` when a cut was made.
///
/// # Examples
///
/// ```
/// use ghbadge::smarttruncate;
///
/// assert_eq!(smarttruncate("hello world"), "hello world");
/// ```
pub fn smarttruncate(value: &str) -> String {
    smarttruncate_with(value, DEFAULT_TRUNCATE_LENGTH, DEFAULT_TRUNCATE_SUFFIX, &WORD_PATTERN)
}

/// Truncates text at the last `pattern` match ending at or before `length`
/// characters.
///
/// The limit counts characters, not bytes, so multibyte text is measured the
/// way it displays. Strings within the limit are returned unchanged. When no
/// match ends within the limit the cut falls back to keeping
/// `length - suffix chars` characters. Cut positions always land on `char`
/// boundaries.
pub fn smarttruncate_with(value: &str, length: usize, suffix: &str, pattern: &Regex) -> String {
    let byte_limit = match value.char_indices().nth(length) {
        Some((index, _)) => index,
        None => return value.to_owned()
    };

    let mut last_end = None;
    for found in pattern.find_iter(value) {
        if found.end() > byte_limit {
            break;
        }
        last_end = Some(found.end());
    }

    let cutoff = last_end.unwrap_or_else(|| {
        let keep = length.saturating_sub(suffix.chars().count());
        value
            .char_indices()
            .nth(keep)
            .map_or(value.len(), |(index, _)| index)
    });

    format!("{}{}", &value[..cutoff], suffix)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use regex::Regex;

    use super::{shortnum, shortnum_with_precision, smarttruncate, smarttruncate_with};

    #[test]
    fn shortnum_keeps_values_below_one_thousand() {
        assert_eq!(shortnum(999.0), "999");
        assert_eq!(shortnum(0.0), "0");
        assert_eq!(shortnum(42.0), "42");
    }

    #[test]
    fn shortnum_applies_kilo_suffix() {
        assert_eq!(shortnum(1500.0), "1.5k");
        assert_eq!(shortnum(1000.0), "1k");
        assert_eq!(shortnum(12_500.0), "12.5k");
    }

    #[test]
    fn shortnum_applies_mega_suffix() {
        assert_eq!(shortnum(2_500_000.0), "2.5M");
    }

    #[test]
    fn shortnum_applies_giga_suffix() {
        assert_eq!(shortnum(3_200_000_000.0), "3.2G");
    }

    #[test]
    fn shortnum_honors_custom_precision() {
        assert_eq!(shortnum_with_precision(1234.0, 2), "1.2k");
        assert_eq!(shortnum_with_precision(1234.0, 4), "1.234k");
    }

    #[test]
    fn shortnum_fractional_values_receive_no_suffix() {
        assert_eq!(shortnum(0.5), "0.5");
    }

    #[test]
    fn smarttruncate_passes_short_strings_through() {
        assert_eq!(smarttruncate("short"), "short");
    }

    #[test]
    fn smarttruncate_cuts_at_last_whole_word() {
        let pattern = Regex::new(r"\w+").expect("valid pattern");
        assert_eq!(smarttruncate_with("hello world", 8, "...", &pattern), "hello...");
    }

    #[test]
    fn smarttruncate_keeps_strings_at_exact_limit() {
        let pattern = Regex::new(r"\w+").expect("valid pattern");
        assert_eq!(smarttruncate_with("12345678", 8, "...", &pattern), "12345678");
    }

    #[test]
    fn smarttruncate_falls_back_when_first_word_exceeds_limit() {
        let pattern = Regex::new(r"\w+").expect("valid pattern");
        assert_eq!(smarttruncate_with("aaaaaaaaaaaa", 8, "...", &pattern), "aaaaa...");
    }

    #[test]
    fn smarttruncate_falls_back_when_no_pattern_matches() {
        let pattern = Regex::new(r"\w+").expect("valid pattern");
        assert_eq!(smarttruncate_with("!!!!!!!!!!!!", 8, "...", &pattern), "!!!!!...");
    }

    #[test]
    fn smarttruncate_is_idempotent_on_already_short_strings() {
        let once = smarttruncate("brief");
        let twice = smarttruncate(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn smarttruncate_respects_char_boundaries() {
        let pattern = Regex::new(r"\w+").expect("valid pattern");
        assert_eq!(smarttruncate_with("héllo wörld étc", 9, "...", &pattern), "héllo...");
    }

    #[test]
    fn smarttruncate_limit_counts_characters_not_bytes() {
        let pattern = Regex::new(r"\w+").expect("valid pattern");
        // Five characters spanning ten bytes fit an eight-character limit.
        assert_eq!(smarttruncate_with("ééééé", 8, "...", &pattern), "ééééé");
    }

    #[test]
    fn smarttruncate_fallback_keeps_character_count_for_multibyte_text() {
        let pattern = Regex::new(r"\w+").expect("valid pattern");
        // No match ends within the limit, so five characters are kept.
        let truncated = smarttruncate_with("öööööööööööö", 8, "...", &pattern);
        assert_eq!(truncated, "ööööö...");
    }

    proptest! {
        #[test]
        fn shortnum_suffix_tracks_magnitude(value in 0u64..1_000_000_000u64) {
            let formatted = shortnum(value as f64);
            let has_suffix = formatted.ends_with(['k', 'M', 'G']);
            prop_assert_eq!(has_suffix, value >= 1000);
        }

        #[test]
        fn smarttruncate_never_exceeds_limit_plus_suffix(text in "[ a-z]{0,160}") {
            let result = smarttruncate(&text);
            prop_assert!(result.len() <= 80 + 3);
            if text.len() <= 80 {
                prop_assert_eq!(result, text);
            }
        }
    }
}
