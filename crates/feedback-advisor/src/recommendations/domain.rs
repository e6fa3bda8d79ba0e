use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Message criticality, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Critical,
    Major,
    Minor,
    Informational,
}

impl SeverityLevel {
    pub const fn ordered() -> [Self; 4] {
        [Self::Critical, Self::Major, Self::Minor, Self::Informational]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Informational => "Informational",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Informational => "informational",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Critical => {
                "Data loss, security exposure, or a blocked workflow. The user cannot continue until it is addressed."
            }
            Self::Major => {
                "Something failed or needs attention soon, but the user can still work around it."
            }
            Self::Minor => "A small problem or a state change worth noticing without urgency.",
            Self::Informational => "Neutral context, confirmation, or guidance with no problem to solve.",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeverityLevel {
    type Err = ClassificationParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ClassificationParseError::UnknownSeverity(raw.to_string()))
    }
}

/// Communication pattern of the message being surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Indicator,
    Validation,
    Notification,
}

impl MessageType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Indicator, Self::Validation, Self::Notification]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Indicator => "Indicator",
            Self::Validation => "Validation",
            Self::Notification => "Notification",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Indicator => "indicator",
            Self::Validation => "validation",
            Self::Notification => "notification",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Indicator => {
                "Passive status attached to an object or region, read when the user looks for it."
            }
            Self::Validation => "Feedback on user input, tied to the field or form that produced it.",
            Self::Notification => {
                "A message about an event, pushed to the user whether or not they asked."
            }
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MessageType {
    type Err = ClassificationParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ClassificationParseError::UnknownMessageType(raw.to_string()))
    }
}

/// Raised by adapters when a severity or type name does not match the fixed sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationParseError {
    #[error("unknown severity '{0}' (expected Critical, Major, Minor, or Informational)")]
    UnknownSeverity(String),
    #[error("unknown message type '{0}' (expected Indicator, Validation, or Notification)")]
    UnknownMessageType(String),
}

/// Page region a component is designed to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Global,
    Page,
    Section,
    Inline,
}

impl Scope {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Page => "Page",
            Self::Section => "Section",
            Self::Inline => "Inline",
        }
    }
}

/// Catalog documentation for a feedback component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    pub description: &'static str,
    pub usage_triggers: Vec<&'static str>,
    pub rationale: &'static str,
    pub scopes: Vec<Scope>,
    pub documentation: &'static str,
    pub tags: Vec<&'static str>,
}

impl ComponentEntry {
    pub const PLACEHOLDER_RATIONALE: &'static str = "Direct matrix match";

    /// Stand-in for matrix names that have no authored documentation yet.
    pub fn placeholder() -> Self {
        Self {
            description: "",
            usage_triggers: Vec::new(),
            rationale: Self::PLACEHOLDER_RATIONALE,
            scopes: Vec::new(),
            documentation: "",
            tags: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self == &Self::placeholder()
    }
}

/// Answers collected by the caller, keyed by filter question text.
///
/// Blank answers are treated as cleared and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Option<String>>",
    into = "BTreeMap<String, String>"
)]
pub struct FilterAnswers {
    answers: BTreeMap<String, String>,
}

impl FilterAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.set(question, answer);
        self
    }

    pub fn set(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let question = question.into();
        let answer = answer.into();
        if answer.trim().is_empty() {
            self.answers.remove(&question);
        } else {
            self.answers.insert(question, answer);
        }
    }

    pub fn clear(&mut self, question: &str) {
        self.answers.remove(question);
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers
            .iter()
            .map(|(question, answer)| (question.as_str(), answer.as_str()))
    }
}

impl From<BTreeMap<String, Option<String>>> for FilterAnswers {
    fn from(raw: BTreeMap<String, Option<String>>) -> Self {
        let mut answers = FilterAnswers::new();
        for (question, answer) in raw {
            if let Some(answer) = answer {
                answers.set(question, answer);
            }
        }
        answers
    }
}

impl From<FilterAnswers> for BTreeMap<String, String> {
    fn from(value: FilterAnswers) -> Self {
        value.answers
    }
}

/// Scored candidate with its catalog documentation merged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub name: &'static str,
    pub score: u8,
    pub reasons: Vec<String>,
    #[serde(flatten)]
    pub entry: ComponentEntry,
}

impl RecommendationResult {
    pub fn is_exact(&self) -> bool {
        self.score == 100
    }
}

/// Engine output: exact matches in matrix order, partial matches best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    pub matches: Vec<RecommendationResult>,
    pub alternatives: Vec<RecommendationResult>,
}

impl RecommendationSet {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.alternatives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len() + self.alternatives.len()
    }
}

/// How an adapter should present a [`RecommendationSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationState {
    /// Severity or message type has not been chosen yet.
    AwaitingInput,
    /// The matrix lists no component for the pair.
    NoKnownPattern,
    /// Candidates existed but every one scored zero.
    NoViableCandidates,
    Recommended,
}

impl RecommendationState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AwaitingInput => "Select a severity and message type",
            Self::NoKnownPattern => "No known component for this combination",
            Self::NoViableCandidates => "No component fits the selected criteria",
            Self::Recommended => "Recommended components",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parses_labels_case_insensitively() {
        assert_eq!("minor".parse::<SeverityLevel>(), Ok(SeverityLevel::Minor));
        assert_eq!(
            " Informational ".parse::<SeverityLevel>(),
            Ok(SeverityLevel::Informational)
        );
        assert!(matches!(
            "urgent".parse::<SeverityLevel>(),
            Err(ClassificationParseError::UnknownSeverity(value)) if value == "urgent"
        ));
    }

    #[test]
    fn message_type_rejects_unknown_names() {
        assert_eq!(
            "NOTIFICATION".parse::<MessageType>(),
            Ok(MessageType::Notification)
        );
        assert!("toast".parse::<MessageType>().is_err());
    }

    #[test]
    fn blank_answers_count_as_cleared() {
        let mut answers = FilterAnswers::new().with("Who triggers the message?", "User action");
        assert_eq!(answers.len(), 1);

        answers.set("Who triggers the message?", "  ");
        assert!(answers.is_empty());
    }

    #[test]
    fn null_answers_deserialize_as_absent() {
        let answers: FilterAnswers = serde_json::from_value(serde_json::json!({
            "Who triggers the message?": "System event",
            "Does it require user action?": null,
        }))
        .expect("answers deserialize");

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("Who triggers the message?"), Some("System event"));
        assert_eq!(answers.get("Does it require user action?"), None);
    }

    #[test]
    fn placeholder_is_recognised() {
        let entry = ComponentEntry::placeholder();
        assert!(entry.is_placeholder());
        assert_eq!(entry.rationale, "Direct matrix match");
        assert!(entry.usage_triggers.is_empty());
    }
}
