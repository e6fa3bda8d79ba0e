use serde::Serialize;

use super::domain::MessageType;

/// What a filter expects the user to have answered for a given message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedAnswer {
    /// A specific allowed option.
    Option(&'static str),
    /// Any answer is acceptable.
    Wildcard,
}

/// Optional question used to rank candidates the matrix already allows.
#[derive(Debug, Clone)]
pub struct RefinementFilter {
    pub key: &'static str,
    pub question: &'static str,
    pub helper: &'static str,
    pub options: Vec<&'static str>,
    /// Option text shown for the "any answer" choice.
    pub wildcard: &'static str,
    pub expectations: Vec<(MessageType, ExpectedAnswer)>,
    pub(crate) explanations: Vec<(&'static str, &'static str)>,
}

impl RefinementFilter {
    pub fn expected_for(&self, message_type: MessageType) -> ExpectedAnswer {
        self.expectations
            .iter()
            .find(|(kind, _)| *kind == message_type)
            .map(|(_, expected)| *expected)
            .unwrap_or(ExpectedAnswer::Wildcard)
    }

    /// Display text for an expectation, rendering the wildcard with this filter's own wording.
    pub fn expected_label(&self, expected: ExpectedAnswer) -> &'static str {
        match expected {
            ExpectedAnswer::Option(option) => option,
            ExpectedAnswer::Wildcard => self.wildcard,
        }
    }

    /// Fixed phrase appended to mismatch reasons; empty when none is authored.
    pub fn explanation(&self, expected: &str) -> &'static str {
        self.explanations
            .iter()
            .find(|(option, _)| *option == expected)
            .map(|(_, phrase)| *phrase)
            .unwrap_or("")
    }

    pub fn allows(&self, answer: &str) -> bool {
        self.options.iter().any(|option| *option == answer)
    }

    pub fn view(&self) -> RefinementFilterView {
        RefinementFilterView {
            key: self.key,
            question: self.question,
            helper: self.helper,
            options: self.options.clone(),
            wildcard: self.wildcard,
            expected: MessageType::ordered()
                .into_iter()
                .map(|kind| ExpectedAnswerView {
                    message_type: kind,
                    answer: self.expected_label(self.expected_for(kind)),
                    wildcard: self.expected_for(kind) == ExpectedAnswer::Wildcard,
                })
                .collect(),
        }
    }
}

/// Serializable description of a filter for adapters.
#[derive(Debug, Clone, Serialize)]
pub struct RefinementFilterView {
    pub key: &'static str,
    pub question: &'static str,
    pub helper: &'static str,
    pub options: Vec<&'static str>,
    pub wildcard: &'static str,
    pub expected: Vec<ExpectedAnswerView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpectedAnswerView {
    pub message_type: MessageType,
    pub answer: &'static str,
    pub wildcard: bool,
}

pub(crate) fn standard_filters() -> Vec<RefinementFilter> {
    vec![
        RefinementFilter {
            key: "trigger",
            question: "Who triggers the message?",
            helper: "Messages caused by something the user just did belong close to that action; system events need a channel of their own.",
            options: vec!["User action", "System event", "Either"],
            wildcard: "Either",
            expectations: vec![
                (MessageType::Indicator, ExpectedAnswer::Wildcard),
                (MessageType::Validation, ExpectedAnswer::Option("User action")),
                (MessageType::Notification, ExpectedAnswer::Option("System event")),
            ],
            explanations: vec![
                (
                    "User action",
                    "because validation responds to input the user just provided.",
                ),
                (
                    "System event",
                    "because notifications report events the user did not initiate.",
                ),
            ],
        },
        RefinementFilter {
            key: "action",
            question: "Does it require user action?",
            helper: "Decide whether the user has to respond before the message can go away.",
            options: vec!["Needs response", "Just informative", "Depends"],
            wildcard: "Depends",
            expectations: vec![
                (MessageType::Indicator, ExpectedAnswer::Option("Just informative")),
                (MessageType::Validation, ExpectedAnswer::Option("Needs response")),
                (MessageType::Notification, ExpectedAnswer::Wildcard),
            ],
            explanations: vec![
                (
                    "Just informative",
                    "since indicators describe state and never ask for a response.",
                ),
                (
                    "Needs response",
                    "since validation feedback stays until the input is corrected.",
                ),
            ],
        },
        RefinementFilter {
            key: "persistence",
            question: "How long should it stay visible?",
            helper: "Persistent messages live with the content; temporary ones disappear on their own.",
            options: vec!["Persistent", "Until resolved", "Temporary", "Flexible"],
            wildcard: "Flexible",
            expectations: vec![
                (MessageType::Indicator, ExpectedAnswer::Option("Persistent")),
                (MessageType::Validation, ExpectedAnswer::Option("Until resolved")),
                (MessageType::Notification, ExpectedAnswer::Wildcard),
            ],
            explanations: vec![
                (
                    "Persistent",
                    "as indicators remain visible for as long as the state they describe.",
                ),
                (
                    "Until resolved",
                    "as validation messages clear once the problem is fixed.",
                ),
            ],
        },
    ]
}
