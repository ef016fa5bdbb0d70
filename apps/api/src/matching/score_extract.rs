//! Score extraction: recovers the two labeled percentages from free-text
//! (HTML-flavored) model output.
//!
//! Total over all inputs. A missing or malformed label yields 0, never an
//! error; the two extractions are fully independent of each other.

use regex::Regex;
use std::sync::LazyLock;

const MAX_SCORE: u32 = 100;

static MATCH_SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Match Score:\s*(\d{1,3})%").expect("valid score pattern"));

/// Older prompt variants scored the match out of 10 instead of as a percentage.
static MATCH_SCORE_OUT_OF_TEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Match Score:\s*(\d{1,2})\s*/\s*10").expect("valid score pattern")
});

/// One deployed variant labels the figure "ATS Friendly Format Score".
static ATS_SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ATS (?:Friendly Format )?Score:\s*(\d{1,3})%").expect("valid score pattern")
});

/// Extracts the overall match score from a report.
///
/// The percentage label is canonical. When it is absent an out-of-ten label
/// is accepted and converted with `round(n / 10 * 100)`. Either way the
/// result is clamped to at most 100; no label at all yields 0.
pub fn extract_match_score(report: &str) -> u32 {
    if let Some(score) = first_capture(&MATCH_SCORE_RE, report) {
        return score.min(MAX_SCORE);
    }

    match first_capture(&MATCH_SCORE_OUT_OF_TEN_RE, report) {
        Some(score) => ((score as f64 / 10.0 * 100.0).round() as u32).min(MAX_SCORE),
        None => 0,
    }
}

/// Extracts the ATS compatibility score from a report.
pub fn extract_ats_score(report: &str) -> u32 {
    first_capture(&ATS_SCORE_RE, report).map_or(0, |score| score.min(MAX_SCORE))
}

/// The first match's digit group parsed as an integer, if the pattern matches.
fn first_capture(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_percentage_match_score() {
        assert_eq!(extract_match_score("Match Score: 73%"), 73);
    }

    #[test]
    fn test_label_is_case_insensitive() {
        assert_eq!(extract_match_score("match score: 73%"), 73);
        assert_eq!(extract_match_score("MATCH SCORE:73%"), 73);
        assert_eq!(extract_ats_score("ats score: 42%"), 42);
    }

    #[test]
    fn test_whitespace_after_label_is_optional() {
        assert_eq!(extract_match_score("Match Score:90%"), 90);
        assert_eq!(extract_match_score("Match Score:   90%"), 90);
    }

    #[test]
    fn test_overlong_percentage_is_clamped_to_100() {
        assert_eq!(extract_match_score("Match Score: 150%"), 100);
        assert_eq!(extract_ats_score("ATS Score: 999%"), 100);
    }

    #[test]
    fn test_missing_labels_yield_zero() {
        let report = "<p>Your resume looks reasonable overall.</p>";
        assert_eq!(extract_match_score(report), 0);
        assert_eq!(extract_ats_score(report), 0);
    }

    #[test]
    fn test_empty_input_yields_zero() {
        assert_eq!(extract_match_score(""), 0);
        assert_eq!(extract_ats_score(""), 0);
    }

    #[test]
    fn test_out_of_ten_score_converts_to_percentage() {
        assert_eq!(extract_match_score("Match Score: 8/10"), 80);
        assert_eq!(extract_match_score("Match Score: 8 / 10"), 80);
    }

    #[test]
    fn test_out_of_ten_conversion_is_clamped() {
        assert_eq!(extract_match_score("Match Score: 99/10"), 100);
    }

    #[test]
    fn test_percentage_label_wins_over_out_of_ten() {
        assert_eq!(extract_match_score("Match Score: 7/10 then Match Score: 65%"), 65);
    }

    #[test]
    fn test_ats_friendly_format_label_is_accepted() {
        assert_eq!(extract_ats_score("ATS Friendly Format Score: 64%"), 64);
    }

    #[test]
    fn test_html_markup_around_label_is_ignored() {
        let report = "<p><strong>Match Score:90%</strong></p><p><strong>ATS Score:75%</strong></p>";
        assert_eq!(extract_match_score(report), 90);
        assert_eq!(extract_ats_score(report), 75);
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(extract_match_score("Match Score: 40% ... Match Score: 90%"), 40);
    }

    #[test]
    fn test_scores_are_independent() {
        let ats_only = "<p>ATS Score: 75%</p>";
        assert_eq!(extract_match_score(ats_only), 0);
        assert_eq!(extract_ats_score(ats_only), 75);

        let match_only = "<p>Match Score: 88%</p>";
        assert_eq!(extract_match_score(match_only), 88);
        assert_eq!(extract_ats_score(match_only), 0);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let report = "<p>Match Score: 61%</p><p>ATS Score: 58%</p>";
        assert_eq!(extract_match_score(report), extract_match_score(report));
        assert_eq!(extract_ats_score(report), extract_ats_score(report));
    }
}
