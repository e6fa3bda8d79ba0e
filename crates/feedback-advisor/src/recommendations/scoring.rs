use serde::Serialize;
use tracing::trace;

use super::domain::{FilterAnswers, MessageType};
use super::filters::{ExpectedAnswer, RefinementFilter};

/// Agreement between the answered filters and what a message type expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub score: u8,
    pub reasons: Vec<String>,
}

impl MatchScore {
    pub fn perfect() -> Self {
        Self {
            score: 100,
            reasons: Vec::new(),
        }
    }
}

/// Fractional agreement over answered filters; unanswered filters are ignored.
///
/// Every answered filter carries equal weight. A filter whose expectation for
/// `message_type` is its wildcard always counts as matched.
pub fn score_candidate(
    candidate: &str,
    message_type: MessageType,
    answers: &FilterAnswers,
    filters: &[RefinementFilter],
) -> MatchScore {
    let mut applied: u32 = 0;
    let mut matched: u32 = 0;
    let mut reasons = Vec::new();

    for filter in filters {
        let Some(answer) = answers.get(filter.question) else {
            continue;
        };
        applied += 1;

        match filter.expected_for(message_type) {
            ExpectedAnswer::Wildcard => matched += 1,
            ExpectedAnswer::Option(expected) if expected == answer => matched += 1,
            ExpectedAnswer::Option(expected) => {
                reasons.push(mismatch_reason(filter, expected));
            }
        }
    }

    let score = if applied == 0 {
        100
    } else {
        rounded_percentage(matched, applied)
    };
    let score = score.clamp(0, 100) as u8;

    trace!(candidate, applied, matched, score, "candidate scored");

    MatchScore { score, reasons }
}

fn mismatch_reason(filter: &RefinementFilter, expected: &str) -> String {
    let explanation = filter.explanation(expected);
    if explanation.is_empty() {
        format!("Expected \"{}\" for \"{}\"", expected, filter.question)
    } else {
        format!(
            "Expected \"{}\" for \"{}\" {}",
            expected, filter.question, explanation
        )
    }
}

/// `round(100 * matched / applied)` with halves rounded up, in integer arithmetic.
fn rounded_percentage(matched: u32, applied: u32) -> i64 {
    let numerator = 200 * i64::from(matched) + i64::from(applied);
    numerator / (2 * i64::from(applied))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(rounded_percentage(1, 2), 50);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(0, 4), 0);
        assert_eq!(rounded_percentage(4, 4), 100);
    }
}
