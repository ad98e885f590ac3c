//! Body-mass index calculation and classification

use serde::{Deserialize, Serialize};

use crate::profile::HealthProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight, // < 18.5
    Normal,      // 18.5 - 25
    Overweight,  // 25 - 30
    Obese,       // >= 30
}

impl BmiCategory {
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Thiếu cân",
            BmiCategory::Normal => "Bình thường",
            BmiCategory::Overweight => "Thừa cân",
            BmiCategory::Obese => "Béo phì",
        }
    }
}

/// Computed BMI. `value` is unrounded; thresholds compare against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

impl Bmi {
    /// weight in kg, height in cm. Height <= 0 yields a non-finite value.
    pub fn calculate(weight_kg: f64, height_cm: f64) -> Self {
        let height_m = height_cm / 100.0;
        let value = weight_kg / (height_m * height_m);
        Self {
            value,
            category: BmiCategory::from_value(value),
        }
    }

    pub fn from_profile(profile: &HealthProfile) -> Self {
        Self::calculate(profile.weight_or_default(), profile.height_or_default())
    }

    /// Value rounded to one decimal for display and storage
    pub fn rounded(&self) -> f64 {
        (self.value * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_example() {
        let bmi = Bmi::calculate(70.0, 175.0);
        assert_eq!(bmi.rounded(), 22.9);
        assert_eq!(bmi.category, BmiCategory::Normal);
        assert_eq!(bmi.category.label(), "Bình thường");
    }

    #[test]
    fn test_obese_example() {
        let bmi = Bmi::calculate(90.0, 160.0);
        assert_eq!(bmi.rounded(), 35.2);
        assert_eq!(bmi.category, BmiCategory::Obese);
        assert_eq!(bmi.category.label(), "Béo phì");
    }

    #[test]
    fn test_category_boundaries_are_exact() {
        assert_eq!(BmiCategory::from_value(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_value(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_value(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_value(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_monotonic_in_weight() {
        let mut previous = Bmi::calculate(30.0, 170.0);
        for w in 31..200 {
            let current = Bmi::calculate(w as f64, 170.0);
            assert!(current.value >= previous.value);
            assert!(current.category as u8 >= previous.category as u8);
            previous = current;
        }
    }

    #[test]
    fn test_defaults_from_empty_profile() {
        let bmi = Bmi::from_profile(&HealthProfile::default());
        // 65 / 1.7^2
        assert_eq!(bmi.rounded(), 22.5);
        assert_eq!(bmi.category, BmiCategory::Normal);
    }

    #[test]
    fn test_zero_height_is_not_finite() {
        let bmi = Bmi::calculate(65.0, 0.0);
        assert!(!bmi.value.is_finite());
        assert_eq!(bmi.category, BmiCategory::Obese);
    }
}
