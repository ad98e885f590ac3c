//! Health profile - hồ sơ sức khỏe người dùng

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weight used when the profile has none (kg)
pub const DEFAULT_WEIGHT_KG: f64 = 65.0;
/// Height used when the profile has none (cm)
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
/// Age used when the profile has none
pub const DEFAULT_AGE: u32 = 25;

/// Shown in prompts for fields the user never filled in
pub const NOT_PROVIDED: &str = "Chưa cung cấp";

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label_vi(&self) -> &'static str {
        match self {
            Gender::Male => "Nam",
            Gender::Female => "Nữ",
            Gender::Other => "Khác",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ParseEnumError {
                kind: "gender",
                value: s.to_string(),
                expected: "male, female, other",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EatingHabits {
    Healthy,   // Lành mạnh
    Normal,    // Bình thường
    Unhealthy, // Không lành mạnh
}

impl EatingHabits {
    pub fn label_vi(&self) -> &'static str {
        match self {
            EatingHabits::Healthy => "Lành mạnh",
            EatingHabits::Normal => "Bình thường",
            EatingHabits::Unhealthy => "Không lành mạnh",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EatingHabits::Healthy => "healthy",
            EatingHabits::Normal => "normal",
            EatingHabits::Unhealthy => "unhealthy",
        }
    }
}

impl FromStr for EatingHabits {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "healthy" => Ok(EatingHabits::Healthy),
            "normal" => Ok(EatingHabits::Normal),
            "unhealthy" => Ok(EatingHabits::Unhealthy),
            _ => Err(ParseEnumError {
                kind: "eating habits",
                value: s.to_string(),
                expected: "healthy, normal, unhealthy",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary, // Ít vận động
    Light,     // Vận động nhẹ
    Moderate,  // Vận động vừa phải
    Active,    // Vận động nhiều
}

impl ActivityLevel {
    pub fn label_vi(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Ít vận động",
            ActivityLevel::Light => "Vận động nhẹ",
            ActivityLevel::Moderate => "Vận động vừa phải",
            ActivityLevel::Active => "Vận động nhiều",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            _ => Err(ParseEnumError {
                kind: "activity level",
                value: s.to_string(),
                expected: "sedentary, light, moderate, active",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,  // Giảm cân
    MuscleGain,  // Tăng cơ
    Flexibility, // Dẻo dai
    Relaxation,  // Thư giãn
}

impl Goal {
    pub fn label_vi(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Giảm cân",
            Goal::MuscleGain => "Tăng cơ",
            Goal::Flexibility => "Tăng độ dẻo dai",
            Goal::Relaxation => "Thư giãn, giảm stress",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Flexibility => "flexibility",
            Goal::Relaxation => "relaxation",
        }
    }
}

impl FromStr for Goal {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "flexibility" => Ok(Goal::Flexibility),
            "relaxation" => Ok(Goal::Relaxation),
            _ => Err(ParseEnumError {
                kind: "goal",
                value: s.to_string(),
                expected: "weight_loss, muscle_gain, flexibility, relaxation",
            }),
        }
    }
}

/// Parse a body measurement (kg or cm); zero, negative and non-finite
/// values are rejected
pub fn parse_measurement(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", s, e))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("'{}' must be a positive number", s));
    }
    Ok(value)
}

/// User health profile. Every field is optional; missing numbers fall back
/// to the `DEFAULT_*` constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>, // kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>, // cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eating_habits: Option<EatingHabits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
}

impl HealthProfile {
    pub fn weight_or_default(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT_KG)
    }

    pub fn height_or_default(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_HEIGHT_CM)
    }

    pub fn age_or_default(&self) -> u32 {
        self.age.unwrap_or(DEFAULT_AGE)
    }

    /// Overlay the fields set in `other` on top of this profile
    pub fn merge(&mut self, other: &HealthProfile) {
        if other.weight.is_some() {
            self.weight = other.weight;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.age.is_some() {
            self.age = other.age;
        }
        if other.gender.is_some() {
            self.gender = other.gender;
        }
        if other.eating_habits.is_some() {
            self.eating_habits = other.eating_habits;
        }
        if other.activity_level.is_some() {
            self.activity_level = other.activity_level;
        }
        if other.goal.is_some() {
            self.goal = other.goal;
        }
    }
}

impl fmt::Display for HealthProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = |v: Option<f64>, unit: &str| {
            v.map(|v| format!("{:.0} {}", v, unit))
                .unwrap_or_else(|| NOT_PROVIDED.to_string())
        };
        writeln!(f, "Cân nặng:   {}", num(self.weight, "kg"))?;
        writeln!(f, "Chiều cao:  {}", num(self.height, "cm"))?;
        writeln!(
            f,
            "Tuổi:       {}",
            self.age.map(|a| a.to_string()).unwrap_or_else(|| NOT_PROVIDED.to_string())
        )?;
        writeln!(f, "Giới tính:  {}", self.gender.map_or(NOT_PROVIDED, |g| g.label_vi()))?;
        writeln!(f, "Ăn uống:    {}", self.eating_habits.map_or(NOT_PROVIDED, |e| e.label_vi()))?;
        writeln!(f, "Vận động:   {}", self.activity_level.map_or(NOT_PROVIDED, |a| a.label_vi()))?;
        write!(f, "Mục tiêu:   {}", self.goal.map_or(NOT_PROVIDED, |g| g.label_vi()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let profile = HealthProfile::default();
        assert_eq!(profile.weight_or_default(), 65.0);
        assert_eq!(profile.height_or_default(), 170.0);
        assert_eq!(profile.age_or_default(), 25);
    }

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("70"), Ok(70.0));
        assert_eq!(parse_measurement(" 172.5 "), Ok(172.5));

        for bad in ["0", "-5", "inf", "NaN", "abc", ""] {
            assert!(parse_measurement(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_enum_parse_accepts_wire_values() {
        assert_eq!("weight_loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert_eq!("muscle-gain".parse::<Goal>().unwrap(), Goal::MuscleGain);
        assert_eq!("Active".parse::<ActivityLevel>().unwrap(), ActivityLevel::Active);
        assert_eq!("unhealthy".parse::<EatingHabits>().unwrap(), EatingHabits::Unhealthy);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
    }

    #[test]
    fn test_enum_parse_rejects_unknown() {
        let err = "running".parse::<Goal>().unwrap_err();
        assert!(err.to_string().contains("running"));
        assert!(err.to_string().contains("weight_loss"));
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for goal in [Goal::WeightLoss, Goal::MuscleGain, Goal::Flexibility, Goal::Relaxation] {
            assert_eq!(goal.as_str().parse::<Goal>().unwrap(), goal);
        }
    }

    #[test]
    fn test_profile_json_uses_camel_case_and_snake_values() {
        let profile = HealthProfile {
            weight: Some(70.0),
            activity_level: Some(ActivityLevel::Moderate),
            goal: Some(Goal::WeightLoss),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["activityLevel"], "moderate");
        assert_eq!(json["goal"], "weight_loss");
        assert!(json.get("height").is_none());
    }

    #[test]
    fn test_merge_only_overrides_set_fields() {
        let mut profile = HealthProfile {
            weight: Some(70.0),
            height: Some(175.0),
            goal: Some(Goal::Relaxation),
            ..Default::default()
        };
        profile.merge(&HealthProfile {
            weight: Some(68.0),
            age: Some(31),
            ..Default::default()
        });
        assert_eq!(profile.weight, Some(68.0));
        assert_eq!(profile.height, Some(175.0));
        assert_eq!(profile.age, Some(31));
        assert_eq!(profile.goal, Some(Goal::Relaxation));
    }

    #[test]
    fn test_display_marks_missing_fields() {
        let text = HealthProfile::default().to_string();
        assert!(text.contains(NOT_PROVIDED));
    }
}
