use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    ClassificationParseError, ComponentEntry, FilterAnswers, MessageType, SeverityLevel,
};
use super::engine::{RecommendationEngine, RecommendationRequest};
use super::filters::RefinementFilterView;

/// Router builder exposing the knowledge base and the recommendation endpoint.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/catalog/severities", get(severities_handler))
        .route("/api/v1/catalog/message-types", get(message_types_handler))
        .route("/api/v1/catalog/filters", get(filters_handler))
        .route("/api/v1/catalog/components/:name", get(component_handler))
        .route("/api/v1/recommendations", post(recommend_handler))
        .with_state(engine)
}

/// Raw request body; classification names are parsed leniently so bad input maps to 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationPayload {
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub message_type: Option<String>,
    #[serde(default)]
    pub filters: FilterAnswers,
}

impl TryFrom<RecommendationPayload> for RecommendationRequest {
    type Error = ClassificationParseError;

    fn try_from(payload: RecommendationPayload) -> Result<Self, Self::Error> {
        let severity = non_blank(payload.severity)
            .map(|raw| raw.parse::<SeverityLevel>())
            .transpose()?;
        let message_type = non_blank(payload.message_type)
            .map(|raw| raw.parse::<MessageType>())
            .transpose()?;

        Ok(RecommendationRequest {
            severity,
            message_type,
            filters: payload.filters,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

#[derive(Debug, Serialize)]
pub struct ClassificationView {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ComponentView {
    pub name: String,
    pub documented: bool,
    #[serde(flatten)]
    pub entry: ComponentEntry,
}

pub(crate) async fn severities_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Json<Vec<ClassificationView>> {
    let levels = engine
        .knowledge()
        .severity_levels()
        .into_iter()
        .map(|level| ClassificationView {
            key: level.key(),
            label: level.label(),
            description: level.description(),
        })
        .collect();
    Json(levels)
}

pub(crate) async fn message_types_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Json<Vec<ClassificationView>> {
    let types = engine
        .knowledge()
        .message_types()
        .into_iter()
        .map(|kind| ClassificationView {
            key: kind.key(),
            label: kind.label(),
            description: kind.description(),
        })
        .collect();
    Json(types)
}

pub(crate) async fn filters_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Json<Vec<RefinementFilterView>> {
    let filters = engine
        .knowledge()
        .refinement_filters()
        .iter()
        .map(|filter| filter.view())
        .collect();
    Json(filters)
}

pub(crate) async fn component_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Path(name): Path<String>,
) -> Json<ComponentView> {
    let entry = engine.knowledge().component_entry(&name);
    Json(ComponentView {
        documented: !entry.is_placeholder(),
        name,
        entry,
    })
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(payload): Json<RecommendationPayload>,
) -> Response {
    match RecommendationRequest::try_from(payload) {
        Ok(request) => {
            let recommendation = engine.evaluate(&request);
            (StatusCode::OK, Json(recommendation)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}
