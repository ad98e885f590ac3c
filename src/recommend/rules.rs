//! Rule-based recommendation generator
//!
//! Deterministic fallback used whenever AI generation is disabled or fails.

use crate::profile::{ActivityLevel, EatingHabits, Goal, HealthProfile};
use crate::tips::{
    TIP_CONSISTENCY, TIP_HYDRATION, TIP_OVERWEIGHT, TIP_SEDENTARY, TIP_UNDERWEIGHT,
    TIP_UNHEALTHY_EATING,
};

use super::bmi::Bmi;
use super::{DayPlan, Level, RecommendationResult, WorkoutType};

/// Session length when no goal adjusts it (minutes)
const BASE_DURATION_MINUTES: u32 = 10;

/// Build a complete recommendation from the profile alone
pub fn generate(profile: &HealthProfile) -> RecommendationResult {
    let bmi = Bmi::from_profile(profile);

    RecommendationResult {
        recommended_level: level_for(profile),
        recommended_duration: duration_for(profile, &bmi),
        recommended_types: types_for(profile.goal),
        weekly_plan: weekly_plan_for(profile.goal),
        bmi: bmi.rounded(),
        bmi_category: bmi.category.label().to_string(),
        tips: tips_for(profile, &bmi),
    }
}

/// Beginner by default, Intermediate for moderate/active users,
/// Advanced for active users under 40.
pub fn level_for(profile: &HealthProfile) -> Level {
    match profile.activity_level {
        Some(ActivityLevel::Active) if profile.age_or_default() < 40 => Level::Advanced,
        Some(ActivityLevel::Active) | Some(ActivityLevel::Moderate) => Level::Intermediate,
        _ => Level::Beginner,
    }
}

pub fn duration_for(profile: &HealthProfile, bmi: &Bmi) -> u32 {
    match profile.goal {
        Some(Goal::WeightLoss) if bmi.value > 25.0 => 20,
        Some(Goal::WeightLoss) => 15,
        Some(Goal::MuscleGain) => 20,
        Some(Goal::Relaxation) => 10,
        _ => BASE_DURATION_MINUTES,
    }
}

pub fn types_for(goal: Option<Goal>) -> Vec<WorkoutType> {
    match goal {
        Some(Goal::WeightLoss) => vec![WorkoutType::Yoga, WorkoutType::Breathing],
        Some(Goal::MuscleGain) | Some(Goal::Flexibility) => vec![WorkoutType::Yoga],
        Some(Goal::Relaxation) => vec![WorkoutType::Meditation, WorkoutType::Breathing],
        None => Vec::new(),
    }
}

/// Fixed 7-day template; day 3 and day 6 depend on the goal
pub fn weekly_plan_for(goal: Option<Goal>) -> Vec<DayPlan> {
    let day3 = if goal == Some(Goal::Relaxation) {
        vec![WorkoutType::Meditation]
    } else {
        vec![WorkoutType::Yoga]
    };
    let day6 = if goal == Some(Goal::WeightLoss) {
        vec![WorkoutType::Yoga, WorkoutType::Breathing]
    } else {
        vec![WorkoutType::Meditation]
    };

    let template: [(&str, Vec<WorkoutType>); 7] = [
        ("Khởi động nhẹ nhàng", vec![WorkoutType::Yoga]),
        ("Hít thở và thư giãn", vec![WorkoutType::Breathing]),
        ("Tăng cường sức mạnh", day3),
        ("Thiền định", vec![WorkoutType::Meditation]),
        ("Dẻo dai cơ thể", vec![WorkoutType::Yoga]),
        ("Đốt cháy năng lượng", day6),
        ("Nghỉ ngơi và phục hồi", vec![WorkoutType::Meditation, WorkoutType::Breathing]),
    ];

    template
        .into_iter()
        .zip(1u8..)
        .map(|((focus, workouts), day)| DayPlan::Rule {
            day,
            focus: focus.to_string(),
            workouts,
        })
        .collect()
}

/// Conditional tips first, then hydration and consistency tips
pub fn tips_for(profile: &HealthProfile, bmi: &Bmi) -> Vec<String> {
    let mut tips = Vec::new();

    if bmi.value < 18.5 {
        tips.push(TIP_UNDERWEIGHT);
    }
    if bmi.value > 25.0 {
        tips.push(TIP_OVERWEIGHT);
    }
    if profile.eating_habits == Some(EatingHabits::Unhealthy) {
        tips.push(TIP_UNHEALTHY_EATING);
    }
    if profile.activity_level == Some(ActivityLevel::Sedentary) {
        tips.push(TIP_SEDENTARY);
    }
    tips.push(TIP_HYDRATION);
    tips.push(TIP_CONSISTENCY);

    tips.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(activity: Option<ActivityLevel>, age: Option<u32>, goal: Option<Goal>) -> HealthProfile {
        HealthProfile {
            weight: Some(70.0),
            height: Some(175.0),
            age,
            activity_level: activity,
            goal,
            ..Default::default()
        }
    }

    #[test]
    fn test_moderate_weight_loss_example() {
        let result = generate(&HealthProfile {
            weight: Some(70.0),
            height: Some(175.0),
            age: Some(30),
            activity_level: Some(ActivityLevel::Moderate),
            goal: Some(Goal::WeightLoss),
            ..Default::default()
        });
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.bmi_category, "Bình thường");
        assert_eq!(result.recommended_level, Level::Intermediate);
        assert_eq!(result.recommended_duration, 15);
        assert_eq!(
            result.recommended_types,
            vec![WorkoutType::Yoga, WorkoutType::Breathing]
        );
    }

    #[test]
    fn test_obese_weight_loss_gets_longer_sessions() {
        let result = generate(&HealthProfile {
            weight: Some(90.0),
            height: Some(160.0),
            goal: Some(Goal::WeightLoss),
            ..Default::default()
        });
        assert_eq!(result.bmi, 35.2);
        assert_eq!(result.bmi_category, "Béo phì");
        assert_eq!(result.recommended_duration, 20);
        assert_eq!(result.recommended_level, Level::Beginner);
    }

    #[test]
    fn test_level_promotion() {
        assert_eq!(level_for(&profile(None, None, None)), Level::Beginner);
        assert_eq!(level_for(&profile(Some(ActivityLevel::Light), Some(20), None)), Level::Beginner);
        assert_eq!(level_for(&profile(Some(ActivityLevel::Moderate), Some(20), None)), Level::Intermediate);
        assert_eq!(level_for(&profile(Some(ActivityLevel::Active), Some(39), None)), Level::Advanced);
        assert_eq!(level_for(&profile(Some(ActivityLevel::Active), Some(40), None)), Level::Intermediate);
        // missing age falls back to 25
        assert_eq!(level_for(&profile(Some(ActivityLevel::Active), None, None)), Level::Advanced);
    }

    #[test]
    fn test_duration_by_goal() {
        let bmi = Bmi::calculate(70.0, 175.0);
        assert_eq!(duration_for(&profile(None, None, None), &bmi), 10);
        assert_eq!(duration_for(&profile(None, None, Some(Goal::MuscleGain)), &bmi), 20);
        assert_eq!(duration_for(&profile(None, None, Some(Goal::Relaxation)), &bmi), 10);
        assert_eq!(duration_for(&profile(None, None, Some(Goal::Flexibility)), &bmi), 10);
        assert_eq!(duration_for(&profile(None, None, Some(Goal::WeightLoss)), &bmi), 15);
    }

    #[test]
    fn test_types_by_goal() {
        assert!(types_for(None).is_empty());
        assert_eq!(types_for(Some(Goal::MuscleGain)), vec![WorkoutType::Yoga]);
        assert_eq!(types_for(Some(Goal::Flexibility)), vec![WorkoutType::Yoga]);
        assert_eq!(
            types_for(Some(Goal::Relaxation)),
            vec![WorkoutType::Meditation, WorkoutType::Breathing]
        );
    }

    #[test]
    fn test_weekly_plan_has_seven_ordered_days_for_every_goal() {
        for goal in [
            None,
            Some(Goal::WeightLoss),
            Some(Goal::MuscleGain),
            Some(Goal::Flexibility),
            Some(Goal::Relaxation),
        ] {
            let plan = weekly_plan_for(goal);
            assert_eq!(plan.len(), 7);
            for (i, day) in plan.iter().enumerate() {
                assert_eq!(day.day() as usize, i + 1);
                assert!(!day.is_ai());
            }
        }
    }

    #[test]
    fn test_goal_conditioned_days() {
        let relax = weekly_plan_for(Some(Goal::Relaxation));
        let lose = weekly_plan_for(Some(Goal::WeightLoss));

        let workouts = |d: &DayPlan| match d {
            DayPlan::Rule { workouts, .. } => workouts.clone(),
            DayPlan::Ai { .. } => panic!("rule plan expected"),
        };

        assert_eq!(workouts(&relax[2]), vec![WorkoutType::Meditation]);
        assert_eq!(workouts(&lose[2]), vec![WorkoutType::Yoga]);
        assert_eq!(workouts(&lose[5]), vec![WorkoutType::Yoga, WorkoutType::Breathing]);
        assert_eq!(workouts(&relax[5]), vec![WorkoutType::Meditation]);
        // other days do not depend on the goal
        assert_eq!(relax[0], lose[0]);
        assert_eq!(relax[6], lose[6]);
    }

    #[test]
    fn test_tips_conditional_then_fixed_order() {
        let p = HealthProfile {
            weight: Some(90.0),
            height: Some(160.0),
            eating_habits: Some(EatingHabits::Unhealthy),
            activity_level: Some(ActivityLevel::Sedentary),
            ..Default::default()
        };
        let tips = tips_for(&p, &Bmi::from_profile(&p));
        assert_eq!(
            tips,
            vec![TIP_OVERWEIGHT, TIP_UNHEALTHY_EATING, TIP_SEDENTARY, TIP_HYDRATION, TIP_CONSISTENCY]
        );

        let thin = HealthProfile {
            weight: Some(45.0),
            height: Some(170.0),
            ..Default::default()
        };
        let tips = tips_for(&thin, &Bmi::from_profile(&thin));
        assert_eq!(tips, vec![TIP_UNDERWEIGHT, TIP_HYDRATION, TIP_CONSISTENCY]);
    }

    #[test]
    fn test_generate_is_deterministic_and_matches_classifier() {
        let p = profile(Some(ActivityLevel::Active), Some(28), Some(Goal::Flexibility));
        let a = generate(&p);
        let b = generate(&p);
        assert_eq!(a, b);

        let bmi = Bmi::from_profile(&p);
        assert_eq!(a.bmi, bmi.rounded());
        assert_eq!(a.bmi_category, bmi.category.label());
        assert!(a.has_valid_week());
    }
}
