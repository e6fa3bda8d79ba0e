use crate::demo::{run_catalog, run_demo, run_recommend, CatalogArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use feedback_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Feedback Advisor",
    about = "Recommend UI feedback components for a message severity and type",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Recommend components for a severity, message type, and optional filter answers
    Recommend(RecommendArgs),
    /// Print the severities, message types, components, and filters the engine knows
    Catalog(CatalogArgs),
    /// Walk every severity and type pair, then replay the reference scenarios
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_accepts_repeated_answers() {
        let cli = Cli::try_parse_from([
            "feedback-advisor",
            "recommend",
            "--severity",
            "minor",
            "--message-type",
            "Validation",
            "--answer",
            "trigger=User action",
            "--answer",
            "action=Just informative",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.answers.len(), 2);
                assert!(!args.json);
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_severity_is_rejected_at_parse_time() {
        let error = Cli::try_parse_from([
            "feedback-advisor",
            "recommend",
            "--severity",
            "urgent",
            "--message-type",
            "Indicator",
        ])
        .expect_err("severity rejected");
        assert!(error.to_string().contains("urgent"));
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["feedback-advisor"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
