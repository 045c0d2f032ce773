// SPDX-License-Identifier: MIT

//! Turning raw model text into typed data.
//!
//! Generative models wrap their JSON in markdown fences, use typographic
//! quotes, and pad the object with prose. Every call site funnels through
//! this module: sanitize the raw text, parse it strictly, and let the
//! caller substitute a fallback value carrying a `degraded` flag when
//! anything goes wrong.

use serde::de::DeserializeOwned;

/// Reduce raw model output to a substring likely to be valid JSON.
///
/// Steps, in order:
/// 1. strip a leading/trailing ```json code fence
/// 2. replace U+201C/U+201D smart quotes with `"`
/// 3. trim whitespace
/// 4. slice from the first `{` through the last `}` (inclusive)
///
/// When no `{` is present the trimmed string is returned whole. No
/// validity guarantee; the parser handles failure.
pub fn sanitize_model_output(raw: &str) -> String {
    let mut s = raw.trim();
    if let Some(stripped) = s.strip_prefix("```json") {
        s = stripped;
    } else if let Some(stripped) = s.strip_prefix("```") {
        s = stripped;
    }
    let s = s.trim().trim_end_matches("```");

    let s = s.replace('\u{201C}', "\"").replace('\u{201D}', "\"");
    let s = s.trim();

    match (s.find('{'), s.rfind('}')) {
        (Some(start), Some(end)) if end >= start => s[start..=end].to_string(),
        _ => s.to_string(),
    }
}

/// Strict parse failure, carrying the candidate string for diagnostics.
#[derive(Debug, thiserror::Error)]
#[error("model output is not valid JSON: {message}")]
pub struct ParseError {
    pub message: String,
    /// The sanitized candidate that failed to parse
    pub candidate: String,
}

/// Sanitize raw model output and strictly deserialize it into `T`.
///
/// Missing optional fields are left to serde defaults; structural
/// validation beyond what the parser enforces is the caller's job.
pub fn parse_model_json<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let candidate = sanitize_model_output(raw);
    serde_json::from_str(&candidate).map_err(|e| ParseError {
        message: e.to_string(),
        candidate,
    })
}

/// A parsed-or-synthesized value plus how it was obtained.
///
/// `degraded` is true when the value came from fallback synthesis rather
/// than the model, so callers can surface degradation instead of silently
/// masking it.
#[derive(Debug, Clone)]
pub struct ModelData<T> {
    pub data: T,
    pub degraded: bool,
}

impl<T> ModelData<T> {
    /// Wrap a value parsed from real model output.
    pub fn fresh(data: T) -> Self {
        Self {
            data,
            degraded: false,
        }
    }

    /// Wrap a synthesized fallback value.
    pub fn fallback(data: T) -> Self {
        Self {
            data,
            degraded: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        a: u32,
    }

    #[test]
    fn test_strips_json_fence() {
        assert_eq!(
            sanitize_model_output("```json\n{\"a\":1}\n```"),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_strips_bare_fence() {
        assert_eq!(sanitize_model_output("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_smart_quotes_replaced_everywhere() {
        assert_eq!(
            sanitize_model_output("{\u{201C}a\u{201D}:1}"),
            "{\"a\":1}"
        );
        // Idempotent: a second pass changes nothing
        let once = sanitize_model_output("{\u{201C}a\u{201D}:\u{201C}b\u{201D}}");
        assert_eq!(sanitize_model_output(&once), once);
        assert!(!once.contains('\u{201C}'));
        assert!(!once.contains('\u{201D}'));
    }

    #[test]
    fn test_brace_slicing_drops_surrounding_prose() {
        assert_eq!(
            sanitize_model_output("Here is your plan: {\"a\":1} Enjoy!"),
            "{\"a\":1}"
        );
        assert_eq!(sanitize_model_output("prefix{\"a\":1}suffix"), "{\"a\":1}");
    }

    #[test]
    fn test_no_brace_returns_trimmed_input() {
        assert_eq!(sanitize_model_output("  [1, 2, 3]  "), "[1, 2, 3]");
    }

    #[test]
    fn test_fenced_and_quoted_combined() {
        let raw = "```json\n{\u{201C}a\u{201D}: 1}\n```";
        let parsed: Sample = parse_model_json(raw).unwrap();
        assert_eq!(parsed, Sample { a: 1 });
    }

    #[test]
    fn test_parse_error_carries_candidate() {
        let err = parse_model_json::<Sample>("not json at all").unwrap_err();
        assert_eq!(err.candidate, "not json at all");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_keys() {
        let value = serde_json::json!({
            "flightTime": 5,
            "distance": 1200,
            "days": [{"day": 1, "activities": []}]
        });
        let raw = format!("```json\n{}\n```", value);
        let reparsed: serde_json::Value = parse_model_json(&raw).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn test_model_data_flags() {
        assert!(!ModelData::fresh(1).degraded);
        assert!(ModelData::fallback(1).degraded);
    }
}
