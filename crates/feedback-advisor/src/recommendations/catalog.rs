use std::collections::HashMap;
use std::sync::OnceLock;

use super::domain::{ComponentEntry, MessageType, Scope, SeverityLevel};
use super::filters::{standard_filters, RefinementFilter};

/// Immutable reference data the engine reads from.
#[derive(Debug)]
pub struct KnowledgeBase {
    components: Vec<(&'static str, ComponentEntry)>,
    matrix: HashMap<(SeverityLevel, MessageType), Vec<&'static str>>,
    filters: Vec<RefinementFilter>,
}

impl KnowledgeBase {
    pub fn standard() -> Self {
        Self {
            components: standard_components(),
            matrix: standard_matrix(),
            filters: standard_filters(),
        }
    }

    /// Process-wide instance, built on first use and never mutated.
    pub fn shared() -> &'static KnowledgeBase {
        static SHARED: OnceLock<KnowledgeBase> = OnceLock::new();
        SHARED.get_or_init(KnowledgeBase::standard)
    }

    pub(crate) fn from_parts(
        components: Vec<(&'static str, ComponentEntry)>,
        matrix: HashMap<(SeverityLevel, MessageType), Vec<&'static str>>,
        filters: Vec<RefinementFilter>,
    ) -> Self {
        Self {
            components,
            matrix,
            filters,
        }
    }

    pub fn severity_levels(&self) -> [SeverityLevel; 4] {
        SeverityLevel::ordered()
    }

    pub fn message_types(&self) -> [MessageType; 3] {
        MessageType::ordered()
    }

    /// Catalog entry for `name`, or the placeholder when none has been authored.
    pub fn component_entry(&self, name: &str) -> ComponentEntry {
        self.components
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, entry)| entry.clone())
            .unwrap_or_else(ComponentEntry::placeholder)
    }

    pub fn component_names(&self) -> Vec<&'static str> {
        self.components.iter().map(|(name, _)| *name).collect()
    }

    pub fn eligible_candidates(
        &self,
        severity: SeverityLevel,
        message_type: MessageType,
    ) -> &[&'static str] {
        self.matrix
            .get(&(severity, message_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn refinement_filters(&self) -> &[RefinementFilter] {
        &self.filters
    }

    /// Resolve a filter by its short key or by its full question text.
    pub fn find_filter(&self, reference: &str) -> Option<&RefinementFilter> {
        let wanted = reference.trim();
        self.filters.iter().find(|filter| {
            filter.key.eq_ignore_ascii_case(wanted) || filter.question.eq_ignore_ascii_case(wanted)
        })
    }

    /// Parse a `filter=option` pair, where `filter` is a key or question, into an answer
    /// keyed by question text.
    pub fn resolve_answer(
        &self,
        raw: &str,
    ) -> Result<(&'static str, &'static str), AnswerParseError> {
        let (reference, option) = raw
            .split_once('=')
            .ok_or_else(|| AnswerParseError::MissingSeparator(raw.to_string()))?;

        let filter = self
            .find_filter(reference)
            .ok_or_else(|| AnswerParseError::UnknownFilter(reference.trim().to_string()))?;

        let wanted = option.trim();
        let option = filter
            .options
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnswerParseError::UnknownOption {
                question: filter.question,
                option: wanted.to_string(),
                allowed: filter.options.join(", "),
            })?;

        Ok((filter.question, *option))
    }
}

/// Raised when a `filter=option` answer cannot be matched to the filter definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerParseError {
    #[error("answer '{0}' must look like filter=option")]
    MissingSeparator(String),
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),
    #[error("'{option}' is not an option for \"{question}\" (choose one of: {allowed})")]
    UnknownOption {
        question: &'static str,
        option: String,
        allowed: String,
    },
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_matrix() -> HashMap<(SeverityLevel, MessageType), Vec<&'static str>> {
    use MessageType::{Indicator, Notification, Validation};
    use SeverityLevel::{Critical, Informational, Major, Minor};

    HashMap::from([
        ((Critical, Indicator), vec![]),
        ((Critical, Validation), vec!["Modal dialog", "Error summary"]),
        ((Critical, Notification), vec!["Modal dialog", "Banner"]),
        ((Major, Indicator), vec!["Badge", "Status light"]),
        ((Major, Validation), vec!["Inline field error", "Error summary"]),
        ((Major, Notification), vec!["Banner", "Toast"]),
        ((Minor, Indicator), vec!["Status light"]),
        ((Minor, Validation), vec!["Inline field error", "Helper text"]),
        ((Minor, Notification), vec!["Toast", "Inline message"]),
        (
            (Informational, Indicator),
            vec!["Status light", "Helper text", "Tooltip", "Icon"],
        ),
        ((Informational, Validation), vec!["Helper text", "Inline message"]),
        (
            (Informational, Notification),
            vec!["Toast", "Inline message", "Notification center"],
        ),
    ])
}

fn standard_components() -> Vec<(&'static str, ComponentEntry)> {
    vec![
        (
            "Modal dialog",
            ComponentEntry {
                description: "Blocking overlay that takes focus until the user responds.",
                usage_triggers: vec![
                    "Irreversible or destructive action",
                    "Session or data about to be lost",
                    "Decision required before continuing",
                ],
                rationale: "Critical messages must not be missed; a modal guarantees the user acknowledges them.",
                scopes: vec![Scope::Global],
                documentation: "https://design-system.example/components/modal-dialog",
                tags: vec!["blocking", "focus-trap", "critical"],
            },
        ),
        (
            "Error summary",
            ComponentEntry {
                description: "List of all form errors shown at the top of the form with links to each field.",
                usage_triggers: vec![
                    "Form submitted with several invalid fields",
                    "Errors outside the visible viewport",
                ],
                rationale: "Gives one place to review every blocking problem after a failed submit.",
                scopes: vec![Scope::Page, Scope::Section],
                documentation: "https://design-system.example/components/error-summary",
                tags: vec!["form", "validation", "accessibility"],
            },
        ),
        (
            "Banner",
            ComponentEntry {
                description: "Full-width message pinned to the top of the page or section.",
                usage_triggers: vec![
                    "Service degradation or outage",
                    "Account or billing problem",
                    "Change affecting the whole page",
                ],
                rationale: "Persistent and prominent without blocking, suited to problems that outlive a single action.",
                scopes: vec![Scope::Global, Scope::Page, Scope::Section],
                documentation: "https://design-system.example/components/banner",
                tags: vec!["persistent", "dismissible"],
            },
        ),
        (
            "Badge",
            ComponentEntry {
                description: "Small count or label attached to an object.",
                usage_triggers: vec!["Unread or pending items", "Object needs attention"],
                rationale: "Marks the object itself so the problem is found where the user will act on it.",
                scopes: vec![Scope::Inline],
                documentation: "https://design-system.example/components/badge",
                tags: vec!["status", "count"],
            },
        ),
        (
            "Status light",
            ComponentEntry {
                description: "Coloured dot with a short label describing the state of an object.",
                usage_triggers: vec![
                    "Connection or sync state",
                    "Job or deployment status",
                    "Health of a resource",
                ],
                rationale: "Indicators are passive; a status light reports state without demanding attention.",
                scopes: vec![Scope::Section, Scope::Inline],
                documentation: "https://design-system.example/components/status-light",
                tags: vec!["status", "passive"],
            },
        ),
        (
            "Inline field error",
            ComponentEntry {
                description: "Error text rendered directly below the field that failed validation.",
                usage_triggers: vec![
                    "Field value rejected on blur or submit",
                    "Required field left empty",
                ],
                rationale: "Keeps the explanation next to the input the user has to fix.",
                scopes: vec![Scope::Inline],
                documentation: "https://design-system.example/components/inline-field-error",
                tags: vec!["form", "validation"],
            },
        ),
        (
            "Helper text",
            ComponentEntry {
                description: "Muted guidance shown beneath a field or control.",
                usage_triggers: vec![
                    "Format hints before input",
                    "Constraints the user should know up front",
                ],
                rationale: "Prevents errors by explaining expectations before they are broken.",
                scopes: vec![Scope::Inline],
                documentation: "https://design-system.example/components/helper-text",
                tags: vec!["form", "guidance", "passive"],
            },
        ),
        (
            "Toast",
            ComponentEntry {
                description: "Brief message that appears in a corner and dismisses itself.",
                usage_triggers: vec![
                    "Background task finished",
                    "Confirmation of a completed action",
                ],
                rationale: "Reports events without interrupting the current task.",
                scopes: vec![Scope::Global],
                documentation: "https://design-system.example/components/toast",
                tags: vec!["transient", "non-blocking"],
            },
        ),
        (
            "Inline message",
            ComponentEntry {
                description: "Boxed message placed inside the content it relates to.",
                usage_triggers: vec![
                    "Context for a specific section",
                    "Outcome of an action within a panel",
                ],
                rationale: "Ties the message to the region it concerns instead of the whole page.",
                scopes: vec![Scope::Section, Scope::Inline],
                documentation: "https://design-system.example/components/inline-message",
                tags: vec!["contextual"],
            },
        ),
        (
            "Tooltip",
            ComponentEntry {
                description: "Short label revealed on hover or focus.",
                usage_triggers: vec![
                    "Explaining an icon-only control",
                    "Supplementary detail on demand",
                ],
                rationale: "Keeps low-priority information out of the way until requested.",
                scopes: vec![Scope::Inline],
                documentation: "https://design-system.example/components/tooltip",
                tags: vec!["on-demand", "passive"],
            },
        ),
        (
            "Icon",
            ComponentEntry {
                description: "Standalone glyph conveying a state such as info, success, or warning.",
                usage_triggers: vec!["Compact state in tables or lists"],
                rationale: "Smallest possible footprint for a state that needs no explanation.",
                scopes: vec![Scope::Inline],
                documentation: "https://design-system.example/components/icon",
                tags: vec!["status", "compact"],
            },
        ),
    ]
}
