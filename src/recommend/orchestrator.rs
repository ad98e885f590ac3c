//! Recommendation orchestrator
//!
//! Cache-aside flow per request:
//! 1. saved plan exists → return it (no AI call, no write)
//! 2. otherwise try AI generation (bounded by a timeout)
//! 3. on any AI failure, or when AI is off, use the rule-based plan
//! 4. persist the complete result once and return it
//!
//! Generation for one user is single-flight: concurrent requests wait for
//! the first one and then read its saved plan.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::ai::{PlanGenerator, PlanRequest};
use crate::error::{AiError, RecommendError};
use crate::profile::HealthProfile;

use super::bmi::Bmi;
use super::{RecommendationResult, SavedPlan, rules};

/// Default upper bound for one AI call
pub const DEFAULT_AI_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-user plan storage
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn get_plan(&self, user_id: &str) -> anyhow::Result<Option<SavedPlan>>;
    async fn save_plan(&self, user_id: &str, plan: &SavedPlan) -> anyhow::Result<()>;
    async fn delete_plan(&self, user_id: &str) -> anyhow::Result<()>;
}

pub struct Orchestrator {
    store: Arc<dyn PlanStore>,
    generator: Option<Arc<dyn PlanGenerator>>,
    ai_timeout: Duration,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Orchestrator {
    pub fn new(store: Arc<dyn PlanStore>) -> Self {
        Self {
            store,
            generator: None,
            ai_timeout: DEFAULT_AI_TIMEOUT,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn PlanGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_ai_timeout(mut self, timeout: Duration) -> Self {
        self.ai_timeout = timeout;
        self
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Return the saved plan, generating and saving one if there is none
    pub async fn get_or_create(
        &self,
        user_id: &str,
        profile: &HealthProfile,
        use_ai: bool,
    ) -> Result<SavedPlan, RecommendError> {
        if let Some(saved) = self.load(user_id).await? {
            return Ok(saved);
        }

        let lock = self.user_lock(user_id).await;
        let result = {
            let _guard = lock.lock().await;
            // Another request may have saved a plan while we waited
            match self.load(user_id).await {
                Ok(Some(saved)) => Ok(saved),
                Ok(None) => self.generate_and_save(user_id, profile, use_ai).await,
                Err(e) => Err(e),
            }
        };
        self.release(user_id, lock).await;
        result
    }

    /// Drop the saved plan and immediately generate a new one
    pub async fn regenerate(
        &self,
        user_id: &str,
        profile: &HealthProfile,
        use_ai: bool,
    ) -> Result<SavedPlan, RecommendError> {
        let lock = self.user_lock(user_id).await;
        let result = {
            let _guard = lock.lock().await;
            match self.store.delete_plan(user_id).await {
                Ok(()) => {
                    info!(user_id, "Saved plan deleted, regenerating");
                    self.generate_and_save(user_id, profile, use_ai).await
                }
                Err(e) => Err(RecommendError::Delete(e)),
            }
        };
        self.release(user_id, lock).await;
        result
    }

    /// Tips only: AI list when available, rule-based tips otherwise
    pub async fn tips(&self, profile: &HealthProfile, use_ai: bool) -> Vec<String> {
        if use_ai {
            match self.try_ai_tips(profile).await {
                Ok(tips) => return tips,
                Err(e) => warn!(error = %e, "AI tips failed, using rule-based tips"),
            }
        }
        rules::tips_for(profile, &Bmi::from_profile(profile))
    }

    /// Build a recommendation without touching the store
    pub async fn build(&self, profile: &HealthProfile, use_ai: bool) -> RecommendationResult {
        if use_ai {
            match self.try_ai(profile).await {
                Ok(result) => {
                    info!("AI plan generated");
                    return result;
                }
                Err(e) => warn!(error = %e, "AI plan generation failed, using rule-based plan"),
            }
        }
        info!("Rule-based plan generated");
        rules::generate(profile)
    }

    async fn load(&self, user_id: &str) -> Result<Option<SavedPlan>, RecommendError> {
        let saved = self
            .store
            .get_plan(user_id)
            .await
            .map_err(RecommendError::Load)?;
        if saved.is_some() {
            debug!(user_id, "Using saved plan");
        }
        Ok(saved)
    }

    async fn generate_and_save(
        &self,
        user_id: &str,
        profile: &HealthProfile,
        use_ai: bool,
    ) -> Result<SavedPlan, RecommendError> {
        let recommendation = self.build(profile, use_ai).await;
        // JSON has no representation for inf/NaN; such a row could never be read back
        if !recommendation.bmi.is_finite() {
            return Err(RecommendError::Save(anyhow::anyhow!(
                "BMI is not a finite number (weight {} kg, height {} cm)",
                profile.weight_or_default(),
                profile.height_or_default()
            )));
        }
        let saved = SavedPlan::new(recommendation, profile.clone());
        self.store
            .save_plan(user_id, &saved)
            .await
            .map_err(RecommendError::Save)?;
        Ok(saved)
    }

    async fn try_ai(&self, profile: &HealthProfile) -> Result<RecommendationResult, AiError> {
        let generator = self.generator.as_ref().ok_or(AiError::NotConfigured)?;

        let bmi = Bmi::from_profile(profile);
        let request = PlanRequest {
            profile: profile.clone(),
            bmi,
            level: rules::level_for(profile),
            duration_minutes: rules::duration_for(profile, &bmi),
        };

        let plan = tokio::time::timeout(self.ai_timeout, generator.generate_plan(&request))
            .await
            .map_err(|_| AiError::Timeout(self.ai_timeout))??;

        let result = RecommendationResult {
            recommended_level: request.level,
            recommended_duration: request.duration_minutes,
            recommended_types: rules::types_for(profile.goal),
            weekly_plan: plan.weekly_plan,
            bmi: bmi.rounded(),
            bmi_category: bmi.category.label().to_string(),
            tips: plan.tips,
        };

        if !result.has_valid_week() {
            return Err(AiError::InvalidPlan(
                "weekly plan must have days 1..=7 in order".to_string(),
            ));
        }
        Ok(result)
    }

    async fn try_ai_tips(&self, profile: &HealthProfile) -> Result<Vec<String>, AiError> {
        let generator = self.generator.as_ref().ok_or(AiError::NotConfigured)?;
        tokio::time::timeout(self.ai_timeout, generator.generate_tips(profile))
            .await
            .map_err(|_| AiError::Timeout(self.ai_timeout))?
    }

    async fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        in_flight
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn release(&self, user_id: &str, lock: Arc<Mutex<()>>) {
        drop(lock);
        let mut in_flight = self.in_flight.lock().await;
        if in_flight
            .get(user_id)
            .is_some_and(|l| Arc::strong_count(l) == 1)
        {
            in_flight.remove(user_id);
        }
    }
}
