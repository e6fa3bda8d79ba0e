use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::recommendations::catalog::KnowledgeBase;
use crate::recommendations::domain::{
    FilterAnswers, MessageType, RecommendationResult, SeverityLevel,
};
use crate::recommendations::engine::RecommendationEngine;
use crate::recommendations::filters::{standard_filters, RefinementFilter};

pub(super) const TRIGGER: &str = "Who triggers the message?";
pub(super) const ACTION: &str = "Does it require user action?";
pub(super) const PERSISTENCE: &str = "How long should it stay visible?";

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::standard()
}

pub(super) fn filters() -> Vec<RefinementFilter> {
    standard_filters()
}

pub(super) fn answers(pairs: &[(&str, &str)]) -> FilterAnswers {
    pairs
        .iter()
        .fold(FilterAnswers::new(), |answers, (question, answer)| {
            answers.with(*question, *answer)
        })
}

pub(super) fn names(results: &[RecommendationResult]) -> Vec<&'static str> {
    results.iter().map(|result| result.name).collect()
}

/// Engine over a hand-built matrix, for cases the standard tables do not cover.
pub(super) fn engine_with_matrix(
    matrix: Vec<((SeverityLevel, MessageType), Vec<&'static str>)>,
) -> RecommendationEngine {
    let knowledge = KnowledgeBase::from_parts(
        Vec::new(),
        matrix.into_iter().collect::<HashMap<_, _>>(),
        standard_filters(),
    );
    RecommendationEngine::new(Arc::new(knowledge))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
