use crate::infra::standard_engine;
use chrono::{DateTime, Utc};
use clap::Args;
use feedback_advisor::error::AppError;
use feedback_advisor::recommendations::{
    FilterAnswers, KnowledgeBase, MessageType, Recommendation, RecommendationRequest,
    RecommendationResult, RecommendationState, SeverityLevel,
};
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Message severity: Critical, Major, Minor, or Informational
    #[arg(long)]
    pub(crate) severity: Option<SeverityLevel>,
    /// Message type: Indicator, Validation, or Notification
    #[arg(long)]
    pub(crate) message_type: Option<MessageType>,
    /// Filter answer as FILTER=OPTION, where FILTER is a key (trigger, action, persistence) or the full question
    #[arg(long = "answer", value_name = "FILTER=OPTION")]
    pub(crate) answers: Vec<String>,
    /// Print the recommendation as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Include refinement filter questions, options, and expectations
    #[arg(long)]
    pub(crate) filters: bool,
}

#[derive(Debug, Serialize)]
struct RecommendationReport {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    recommendation: Recommendation,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        severity,
        message_type,
        answers,
        json,
    } = args;

    let engine = standard_engine();
    let filters = parse_answers(engine.knowledge(), answers.as_slice())?;
    let recommendation = engine.evaluate(&RecommendationRequest {
        severity,
        message_type,
        filters,
    });

    if json {
        let report = RecommendationReport {
            generated_at: Utc::now(),
            recommendation,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_recommendation(&recommendation));
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    print!("{}", render_catalog(KnowledgeBase::shared(), args.filters));
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let engine = standard_engine();

    println!("Feedback advisor demo");
    println!("\nEligibility overview (no filter answers)");
    for severity in engine.knowledge().severity_levels() {
        for kind in engine.knowledge().message_types() {
            let set = engine.recommend(Some(severity), Some(kind), &FilterAnswers::new());
            let names: Vec<&str> = set.matches.iter().map(|result| result.name).collect();
            let listing = if names.is_empty() {
                "(no known component)".to_string()
            } else {
                names.join(", ")
            };
            println!("- {} x {}: {}", severity, kind, listing);
        }
    }

    for (title, request) in reference_scenarios(engine.knowledge())? {
        println!("\n== {title}");
        print!("{}", render_recommendation(&engine.evaluate(&request)));
    }

    Ok(())
}

fn reference_scenarios(
    knowledge: &KnowledgeBase,
) -> Result<Vec<(&'static str, RecommendationRequest)>, AppError> {
    let request = |severity, message_type, answers: &[&str]| -> Result<_, AppError> {
        Ok(RecommendationRequest {
            severity: Some(severity),
            message_type: Some(message_type),
            filters: parse_answers(knowledge, answers)?,
        })
    };

    Ok(vec![
        (
            "Minor indicator, no filters",
            request(SeverityLevel::Minor, MessageType::Indicator, &[])?,
        ),
        (
            "Informational indicator triggered by the user",
            request(
                SeverityLevel::Informational,
                MessageType::Indicator,
                &["trigger=User action"],
            )?,
        ),
        (
            "Major validation that is just informative",
            request(
                SeverityLevel::Major,
                MessageType::Validation,
                &["action=Just informative"],
            )?,
        ),
        (
            "Critical indicator",
            request(SeverityLevel::Critical, MessageType::Indicator, &[])?,
        ),
        (
            "Minor validation with one agreeing and one conflicting answer",
            request(
                SeverityLevel::Minor,
                MessageType::Validation,
                &["trigger=User action", "action=Just informative"],
            )?,
        ),
    ])
}

fn parse_answers<S: AsRef<str>>(
    knowledge: &KnowledgeBase,
    raw_answers: &[S],
) -> Result<FilterAnswers, AppError> {
    let mut answers = FilterAnswers::new();
    for raw in raw_answers {
        let (question, option) = knowledge.resolve_answer(raw.as_ref())?;
        answers.set(question, option);
    }
    Ok(answers)
}

fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut out = String::new();

    if let (Some(severity), Some(kind)) =
        (recommendation.severity, recommendation.message_type)
    {
        out.push_str(&format!("Classification: {} x {}\n", severity, kind));
    }

    if recommendation.state != RecommendationState::Recommended {
        out.push_str(&format!("{}\n", recommendation.state.label()));
        return out;
    }

    if recommendation.matches.is_empty() {
        out.push_str("\nMatches: none\n");
    } else {
        out.push_str("\nMatches\n");
        for result in &recommendation.matches {
            render_result(&mut out, result);
        }
    }

    if !recommendation.alternatives.is_empty() {
        out.push_str("\nAlternatives\n");
        for result in &recommendation.alternatives {
            render_result(&mut out, result);
        }
    }

    out
}

fn render_result(out: &mut String, result: &RecommendationResult) {
    out.push_str(&format!("- {} ({}%)\n", result.name, result.score));
    if !result.entry.description.is_empty() {
        out.push_str(&format!("    {}\n", result.entry.description));
    }
    out.push_str(&format!("    Why: {}\n", result.entry.rationale));
    if !result.entry.scopes.is_empty() {
        let scopes: Vec<&str> = result.entry.scopes.iter().map(|scope| scope.label()).collect();
        out.push_str(&format!("    Scope: {}\n", scopes.join(", ")));
    }
    if !result.entry.documentation.is_empty() {
        out.push_str(&format!("    Docs: {}\n", result.entry.documentation));
    }
    for reason in &result.reasons {
        out.push_str(&format!("    ! {}\n", reason));
    }
}

fn render_catalog(knowledge: &KnowledgeBase, include_filters: bool) -> String {
    let mut out = String::new();

    out.push_str("Severities\n");
    for level in knowledge.severity_levels() {
        out.push_str(&format!("- {}: {}\n", level, level.description()));
    }

    out.push_str("\nMessage types\n");
    for kind in knowledge.message_types() {
        out.push_str(&format!("- {}: {}\n", kind, kind.description()));
    }

    out.push_str("\nComponents\n");
    for name in knowledge.component_names() {
        let entry = knowledge.component_entry(name);
        out.push_str(&format!("- {}: {}\n", name, entry.description));
    }

    if include_filters {
        out.push_str("\nRefinement filters\n");
        for filter in knowledge.refinement_filters() {
            out.push_str(&format!("- [{}] {}\n", filter.key, filter.question));
            out.push_str(&format!("    {}\n", filter.helper));
            out.push_str(&format!("    Options: {}\n", filter.options.join(" / ")));
            for kind in knowledge.message_types() {
                out.push_str(&format!(
                    "    {}: {}\n",
                    kind,
                    filter.expected_label(filter.expected_for(kind))
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(severity: SeverityLevel, kind: MessageType, answers: &[&str]) -> Recommendation {
        let engine = standard_engine();
        let filters = parse_answers(engine.knowledge(), answers).expect("answers parse");
        engine.evaluate(&RecommendationRequest {
            severity: Some(severity),
            message_type: Some(kind),
            filters,
        })
    }

    #[test]
    fn parse_answers_rejects_unknown_filters() {
        let error = parse_answers(KnowledgeBase::shared(), &["mood=happy"])
            .expect_err("unknown filter rejected");
        assert!(matches!(error, AppError::Answer(_)));
    }

    #[test]
    fn renders_alternatives_with_reasons() {
        let recommendation = evaluate(
            SeverityLevel::Minor,
            MessageType::Validation,
            &["trigger=User action", "action=Just informative"],
        );

        let text = render_recommendation(&recommendation);
        assert!(text.contains("Classification: Minor x Validation"));
        assert!(text.contains("Alternatives"));
        assert!(text.contains("- Inline field error (50%)"));
        assert!(text.contains("! Expected \"Needs response\""));
    }

    #[test]
    fn renders_empty_states_with_their_label() {
        let recommendation = evaluate(SeverityLevel::Critical, MessageType::Indicator, &[]);
        let text = render_recommendation(&recommendation);
        assert!(text.contains(RecommendationState::NoKnownPattern.label()));
    }

    #[test]
    fn renders_placeholder_rationale_for_undocumented_components() {
        let recommendation = evaluate(SeverityLevel::Informational, MessageType::Notification, &[]);
        let text = render_recommendation(&recommendation);
        assert!(text.contains("- Notification center (100%)"));
        assert!(text.contains("Why: Direct matrix match"));
    }

    #[test]
    fn catalog_lists_filters_on_request() {
        let knowledge = KnowledgeBase::shared();
        assert!(!render_catalog(knowledge, false).contains("Refinement filters"));

        let text = render_catalog(knowledge, true);
        assert!(text.contains("[trigger] Who triggers the message?"));
        assert!(text.contains("Indicator: Either"));
    }

    #[test]
    fn reference_scenarios_all_parse() {
        let scenarios = reference_scenarios(KnowledgeBase::shared()).expect("scenarios build");
        assert_eq!(scenarios.len(), 5);
    }
}
