//! Feedback component recommendations.
//!
//! A message is classified by severity and type; the eligibility matrix in the
//! knowledge base names the components ever valid for that pair, and the
//! optional refinement filters grade how well each candidate fits the
//! caller's answers. Everything here is immutable or pure, so the engine can
//! be shared freely between request handlers.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod filters;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerParseError, KnowledgeBase};
pub use domain::{
    ClassificationParseError, ComponentEntry, FilterAnswers, MessageType, RecommendationResult,
    RecommendationSet, RecommendationState, Scope, SeverityLevel,
};
pub use engine::{Recommendation, RecommendationEngine, RecommendationRequest};
pub use filters::{ExpectedAnswer, RefinementFilter, RefinementFilterView};
pub use router::{recommendation_router, RecommendationPayload};
pub use scoring::{score_candidate, MatchScore};
