mod fallback;
mod parser;
mod prompt;

pub use fallback::demo_plan;
pub use parser::parse_plan;
pub use prompt::build_learning_path_prompt;

use tracing::{error, warn};

use crate::model::LearningPlan;
use crate::provider::TextGenerator;

pub const RETRY_MESSAGE: &str = "AI is taking a coffee break. Please try again!";
pub const DEMO_MESSAGE: &str =
    "Using demo mode (API rate limit reached). Try again later for live AI responses.";

/// What the caller gets back, always. Failures carry a short user-facing
/// message; provider detail stays in the logs.
#[derive(Debug)]
pub enum GenerationOutcome {
    Success {
        plan: LearningPlan,
        is_demo: bool,
        message: Option<String>,
    },
    Failure {
        error: String,
    },
}

/// Run one generation end to end: build the prompt, call the provider, parse
/// the reply. A quota-limited provider is papered over with the demo plan; a
/// reply that fails to parse is NOT — it surfaces as a plain failure so a bad
/// model day never masquerades as live output.
pub async fn generate_learning_path<G: TextGenerator>(
    provider: &G,
    subject: &str,
    level: &str,
) -> GenerationOutcome {
    let prompt = build_learning_path_prompt(subject, level);

    let raw = match provider.generate_text(&prompt).await {
        Ok(raw) => raw,
        Err(err) if err.is_rate_limited() => {
            warn!(%err, "provider quota exhausted, serving demo plan");
            return GenerationOutcome::Success {
                plan: demo_plan(subject, level),
                is_demo: true,
                message: Some(DEMO_MESSAGE.to_string()),
            };
        }
        Err(err) => {
            error!(%err, "provider call failed");
            return GenerationOutcome::Failure {
                error: RETRY_MESSAGE.to_string(),
            };
        }
    };

    match parse_plan(&raw) {
        Ok(plan) => GenerationOutcome::Success {
            plan,
            is_demo: false,
            message: None,
        },
        Err(err) => {
            error!(%err, "could not parse provider reply");
            GenerationOutcome::Failure {
                error: RETRY_MESSAGE.to_string(),
            }
        }
    }
}
