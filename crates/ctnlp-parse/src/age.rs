//! Age normalization to years.
//!
//! Registry ages look like `18 Years`, `6 Months` or `N/A`. The quantity is
//! always a whole number in the source text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Unit words and how many of each make up one year, in matching order.
pub const AGE_UNITS: [(&str, f64); 6] = [
    ("Year", 1.0),
    ("Month", 12.0),
    ("Week", 52.0),
    ("Day", 365.0),
    ("Hour", 8766.0),
    ("Minute", 525_960.0),
];

/// Placeholder values meaning "no age limit".
pub const IGNORED_AGE_VALUES: [&str; 2] = ["N/A", "None"];

static AGE_PATTERNS: LazyLock<Vec<(Regex, f64)>> = LazyLock::new(|| {
    AGE_UNITS
        .iter()
        .filter_map(|(unit, per_year)| {
            Regex::new(&format!(r"(?i)(\d{{1,3}}) {unit}s?"))
                .ok()
                .map(|pattern| (pattern, *per_year))
        })
        .collect()
});

/// Converts an age expression to years.
///
/// Returns `None` for empty input, for `N/A`/`None`, and for text with no
/// recognizable `<number> <unit>` pair. The last case is logged.
pub fn normalize_age(text: &str) -> Option<f64> {
    if text.is_empty() || IGNORED_AGE_VALUES.contains(&text) {
        return None;
    }

    for (pattern, per_year) in AGE_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        let Ok(quantity) = caps[1].parse::<u32>() else {
            continue;
        };
        return Some(f64::from(quantity) / per_year);
    }

    warn!(age = text, "could not parse age");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("age parsed");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn converts_each_unit() {
        approx(normalize_age("18 Years"), 18.0);
        approx(normalize_age("1 Year"), 1.0);
        approx(normalize_age("60 Months"), 5.0);
        approx(normalize_age("26 Weeks"), 0.5);
        approx(normalize_age("14 Days"), 14.0 / 365.0);
        approx(normalize_age("24 Hours"), 24.0 / 8766.0);
        approx(normalize_age("30 Minutes"), 30.0 / 525_960.0);
    }

    #[test]
    fn unit_match_ignores_case() {
        approx(normalize_age("6 months"), 0.5);
        approx(normalize_age("65 YEARS"), 65.0);
    }

    #[test]
    fn placeholders_and_empty_are_none() {
        assert_eq!(normalize_age(""), None);
        assert_eq!(normalize_age("N/A"), None);
        assert_eq!(normalize_age("None"), None);
    }

    #[test]
    fn unrecognized_text_is_none() {
        assert_eq!(normalize_age("eighteen years"), None);
        assert_eq!(normalize_age("18 Decades"), None);
    }

    #[test]
    fn all_unit_patterns_compile() {
        assert_eq!(AGE_PATTERNS.len(), AGE_UNITS.len());
    }
}
