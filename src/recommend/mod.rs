//! Recommendation module - personalized weekly yoga/meditation plans
//!
//! Features:
//! - BMI classification
//! - Rule-based plan generation (always succeeds)
//! - AI plan generation with fallback and per-user caching

pub mod bmi;
pub mod orchestrator;
pub mod rules;

pub use bmi::{Bmi, BmiCategory};
pub use orchestrator::{Orchestrator, PlanStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::HealthProfile;

/// Number of days in a weekly plan
pub const DAYS_PER_WEEK: u8 = 7;

/// Recommended training level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label_vi(&self) -> &'static str {
        match self {
            Level::Beginner => "Người mới bắt đầu",
            Level::Intermediate => "Trung bình",
            Level::Advanced => "Nâng cao",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Workout type tag used in recommendations and rule-based days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    #[serde(rename = "Yoga")]
    Yoga,
    #[serde(rename = "Hít thở")]
    Breathing,
    #[serde(rename = "Thiền")]
    Meditation,
}

impl WorkoutType {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Breathing => "Hít thở",
            WorkoutType::Meditation => "Thiền",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            WorkoutType::Yoga => "🧘",
            WorkoutType::Breathing => "🌬️",
            WorkoutType::Meditation => "☯",
        }
    }
}

/// Kind of an AI-generated exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Yoga,
    Meditation,
    Breathing,
}

/// Single exercise inside an AI-generated day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    /// Free text, e.g. "10 phút"
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    pub instructions: Vec<String>,
    pub benefits: String,
}

/// One day of a weekly plan, tagged by the path that produced it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum DayPlan {
    Ai {
        day: u8,
        focus: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
        exercises: Vec<Exercise>,
    },
    Rule {
        day: u8,
        focus: String,
        workouts: Vec<WorkoutType>,
    },
}

impl DayPlan {
    pub fn day(&self) -> u8 {
        match self {
            DayPlan::Ai { day, .. } | DayPlan::Rule { day, .. } => *day,
        }
    }

    pub fn focus(&self) -> &str {
        match self {
            DayPlan::Ai { focus, .. } | DayPlan::Rule { focus, .. } => focus,
        }
    }

    /// Exercises of an AI day; rule days have none
    pub fn exercises(&self) -> &[Exercise] {
        match self {
            DayPlan::Ai { exercises, .. } => exercises,
            DayPlan::Rule { .. } => &[],
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, DayPlan::Ai { .. })
    }
}

/// Output of the recommendation pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub recommended_level: Level,
    /// Minutes per session
    pub recommended_duration: u32,
    pub recommended_types: Vec<WorkoutType>,
    pub weekly_plan: Vec<DayPlan>,
    /// Rounded to one decimal
    pub bmi: f64,
    pub bmi_category: String,
    pub tips: Vec<String>,
}

impl RecommendationResult {
    /// True when the plan has exactly one entry per day 1..=7 in order
    pub fn has_valid_week(&self) -> bool {
        self.weekly_plan.len() == DAYS_PER_WEEK as usize
            && self
                .weekly_plan
                .iter()
                .enumerate()
                .all(|(i, d)| d.day() as usize == i + 1)
    }

    pub fn is_ai_generated(&self) -> bool {
        self.weekly_plan.iter().any(DayPlan::is_ai)
    }

    /// Format plan for terminal output
    pub fn format(&self) -> String {
        let mut out = format!(
            "BMI: {:.1} ({})\nCấp độ: {}\nThời lượng: {} phút/buổi\nLoại bài tập: {}\n",
            self.bmi,
            self.bmi_category,
            self.recommended_level.label_vi(),
            self.recommended_duration,
            self.recommended_types
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", "),
        );

        out.push_str("\nKế hoạch 7 ngày:\n");
        for day in &self.weekly_plan {
            match day {
                DayPlan::Rule { day, focus, workouts } => {
                    let tags: Vec<_> = workouts
                        .iter()
                        .map(|w| format!("{} {}", w.emoji(), w.label()))
                        .collect();
                    out.push_str(&format!("  Ngày {}: {} [{}]\n", day, focus, tags.join(", ")));
                }
                DayPlan::Ai { day, focus, details, exercises } => {
                    out.push_str(&format!("  Ngày {}: {}\n", day, focus));
                    if let Some(details) = details {
                        out.push_str(&format!("    {}\n", details));
                    }
                    for ex in exercises {
                        out.push_str(&format!("    - {} ({})\n", ex.name, ex.duration));
                    }
                }
            }
        }

        if !self.tips.is_empty() {
            out.push_str("\nLời khuyên:\n");
            for tip in &self.tips {
                out.push_str(&format!("  • {}\n", tip));
            }
        }
        out
    }
}

/// Persisted snapshot of a generated plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub recommendation: RecommendationResult,
    pub health_profile: HealthProfile,
    pub created_at: DateTime<Utc>,
}

impl SavedPlan {
    pub fn new(recommendation: RecommendationResult, health_profile: HealthProfile) -> Self {
        Self {
            recommendation,
            health_profile,
            created_at: Utc::now(),
        }
    }
}
