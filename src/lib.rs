//! zenplan - personalized yoga and meditation plans
//!
//! AI-generated weekly plans with a deterministic rule-based fallback,
//! saved once per user until explicitly regenerated.

pub mod ai;
pub mod config;
pub mod db;
pub mod error;
pub mod profile;
pub mod recommend;
pub mod tips;

pub use config::Config;
pub use db::Database;
pub use error::{AiError, RecommendError};
pub use profile::HealthProfile;
pub use recommend::{Orchestrator, RecommendationResult, SavedPlan};
