//! AI module - plan generation through a generative text API
//!
//! The generator only builds prompts, calls the API and validates what comes
//! back. Fallback and caching live in `recommend::orchestrator`.

pub mod gemini;
pub mod parse;
pub mod prompt;

pub use gemini::{GeminiClient, GeminiConfig};

use async_trait::async_trait;

use crate::error::AiError;
use crate::profile::HealthProfile;
use crate::recommend::{Bmi, DayPlan, Level};

/// Everything the AI needs to know to write a plan
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub profile: HealthProfile,
    pub bmi: Bmi,
    pub level: Level,
    pub duration_minutes: u32,
}

/// Validated AI output: seven `DayPlan::Ai` days in order plus tips
#[derive(Debug, Clone, PartialEq)]
pub struct AiPlan {
    pub weekly_plan: Vec<DayPlan>,
    pub tips: Vec<String>,
}

#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Single completion request for a 7-day plan. No retries.
    async fn generate_plan(&self, request: &PlanRequest) -> Result<AiPlan, AiError>;

    /// Single completion request for a flat list of tips
    async fn generate_tips(&self, profile: &HealthProfile) -> Result<Vec<String>, AiError>;
}
