//! Error types at the library boundary

use std::time::Duration;

use thiserror::Error;

/// Failures of the AI plan generator. All of them are recoverable:
/// the orchestrator falls back to the rule-based plan.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("AI generation is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("AI API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("AI response contained no text")]
    EmptyResponse,

    #[error("No JSON {0} found in AI response")]
    MissingJson(&'static str),

    #[error("Invalid JSON in AI response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("AI plan rejected: {0}")]
    InvalidPlan(String),

    #[error("AI request timed out after {0:?}")]
    Timeout(Duration),
}

/// Failures visible to callers of the orchestrator. Only persistence
/// errors cross this boundary.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Failed to load saved plan: {0:#}")]
    Load(anyhow::Error),

    #[error("Failed to save plan: {0:#}")]
    Save(anyhow::Error),

    #[error("Failed to delete plan: {0:#}")]
    Delete(anyhow::Error),
}
