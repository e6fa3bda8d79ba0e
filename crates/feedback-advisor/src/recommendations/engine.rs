use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::KnowledgeBase;
use super::domain::{
    FilterAnswers, MessageType, RecommendationResult, RecommendationSet, RecommendationState,
    SeverityLevel,
};
use super::scoring::score_candidate;

/// Stateless evaluator over an immutable knowledge base.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    knowledge: Arc<KnowledgeBase>,
}

impl RecommendationEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(KnowledgeBase::standard()))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Rank the matrix candidates for a classification.
    ///
    /// Either input missing, or a pair with no candidates, yields an empty set.
    /// Candidates scoring zero are dropped.
    pub fn recommend(
        &self,
        severity: Option<SeverityLevel>,
        message_type: Option<MessageType>,
        answers: &FilterAnswers,
    ) -> RecommendationSet {
        let (Some(severity), Some(message_type)) = (severity, message_type) else {
            return RecommendationSet::default();
        };

        let candidates = self.knowledge.eligible_candidates(severity, message_type);
        let filters = self.knowledge.refinement_filters();

        let mut set = RecommendationSet::default();
        for &name in candidates {
            let scored = score_candidate(name, message_type, answers, filters);
            if scored.score == 0 {
                continue;
            }

            let result = RecommendationResult {
                name,
                score: scored.score,
                reasons: scored.reasons,
                entry: self.knowledge.component_entry(name),
            };

            if result.is_exact() {
                set.matches.push(result);
            } else {
                set.alternatives.push(result);
            }
        }

        // `sort_by` is stable, so equal scores keep matrix order.
        set.alternatives
            .sort_by(|left, right| right.score.cmp(&left.score));

        debug!(
            severity = severity.label(),
            message_type = message_type.label(),
            answered = answers.len(),
            candidates = candidates.len(),
            matches = set.matches.len(),
            alternatives = set.alternatives.len(),
            "recommendation evaluated"
        );

        set
    }

    /// Same as [`recommend`](Self::recommend), tagged with how the result should be presented.
    pub fn evaluate(&self, request: &RecommendationRequest) -> Recommendation {
        let set = self.recommend(request.severity, request.message_type, &request.filters);
        let state = match (request.severity, request.message_type) {
            (Some(severity), Some(message_type)) => {
                if self
                    .knowledge
                    .eligible_candidates(severity, message_type)
                    .is_empty()
                {
                    RecommendationState::NoKnownPattern
                } else if set.is_empty() {
                    RecommendationState::NoViableCandidates
                } else {
                    RecommendationState::Recommended
                }
            }
            _ => RecommendationState::AwaitingInput,
        };

        Recommendation {
            state,
            severity: request.severity,
            message_type: request.message_type,
            matches: set.matches,
            alternatives: set.alternatives,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Inputs collected by a presentation adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub severity: Option<SeverityLevel>,
    #[serde(default)]
    pub message_type: Option<MessageType>,
    #[serde(default)]
    pub filters: FilterAnswers,
}

/// Recommendation set together with its presentation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub state: RecommendationState,
    pub severity: Option<SeverityLevel>,
    pub message_type: Option<MessageType>,
    pub matches: Vec<RecommendationResult>,
    pub alternatives: Vec<RecommendationResult>,
}
