//! Runtime configuration

use std::time::Duration;

use crate::ai::GeminiConfig;
use crate::recommend::orchestrator::DEFAULT_AI_TIMEOUT;

pub const DEFAULT_DB_PATH: &str = "zenplan.db";
pub const DEFAULT_USER_ID: &str = "local";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub user_id: String,
    /// None when no API key is configured; AI generation is then skipped
    pub gemini: Option<GeminiConfig>,
    /// Upper bound for one AI call, on top of the HTTP timeout
    pub ai_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            gemini: None,
            ai_timeout: DEFAULT_AI_TIMEOUT,
        }
    }
}

impl Config {
    /// Gemini settings from an optional key; blank keys disable AI
    pub fn with_gemini(mut self, api_key: Option<String>, model: Option<String>) -> Self {
        let timeout = self.ai_timeout;
        self.gemini = api_key
            .filter(|k| !k.trim().is_empty())
            .map(|key| {
                let mut gemini = GeminiConfig::new(key);
                if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
                    gemini.model = model;
                }
                gemini.timeout = timeout;
                gemini
            });
        self
    }

    pub fn ai_enabled(&self) -> bool {
        self.gemini.is_some()
    }
}
