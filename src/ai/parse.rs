//! Extraction and validation of JSON embedded in model output

use serde::Deserialize;

use crate::error::AiError;
use crate::recommend::{DAYS_PER_WEEK, DayPlan, Exercise};

use super::AiPlan;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlan {
    weekly_plan: Vec<RawDay>,
    tips: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    day: u8,
    focus: String,
    #[serde(default)]
    details: Option<String>,
    exercises: Vec<Exercise>,
}

/// Substring from the first `{` to the last `}`
pub fn extract_object(text: &str) -> Option<&str> {
    extract_between(text, '{', '}')
}

/// Substring from the first `[` to the last `]`
pub fn extract_array(text: &str) -> Option<&str> {
    extract_between(text, '[', ']')
}

fn extract_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse and validate a weekly plan out of raw model text
pub fn parse_plan(text: &str) -> Result<AiPlan, AiError> {
    let json = extract_object(text).ok_or(AiError::MissingJson("object"))?;
    let raw: RawPlan = serde_json::from_str(json)?;

    let mut days = raw.weekly_plan;
    if days.len() != DAYS_PER_WEEK as usize {
        return Err(AiError::InvalidPlan(format!(
            "expected {} days, got {}",
            DAYS_PER_WEEK,
            days.len()
        )));
    }

    days.sort_by_key(|d| d.day);
    for (expected, day) in (1..=DAYS_PER_WEEK).zip(&days) {
        if day.day != expected {
            return Err(AiError::InvalidPlan(format!(
                "day numbers must be 1..={}, found {} at position {}",
                DAYS_PER_WEEK, day.day, expected
            )));
        }
        if day.focus.trim().is_empty() {
            return Err(AiError::InvalidPlan(format!("day {} has no focus", day.day)));
        }
        if let Some(ex) = day.exercises.iter().find(|e| e.name.trim().is_empty()) {
            return Err(AiError::InvalidPlan(format!(
                "day {} has an unnamed {:?} exercise",
                day.day, ex.kind
            )));
        }
    }

    let weekly_plan = days
        .into_iter()
        .map(|d| DayPlan::Ai {
            day: d.day,
            focus: d.focus,
            details: d.details.filter(|s| !s.trim().is_empty()),
            exercises: d.exercises,
        })
        .collect();

    Ok(AiPlan {
        weekly_plan,
        tips: clean_tips(raw.tips),
    })
}

/// Parse a flat list of tips out of raw model text
pub fn parse_tips(text: &str) -> Result<Vec<String>, AiError> {
    let json = extract_array(text).ok_or(AiError::MissingJson("array"))?;
    let tips: Vec<String> = serde_json::from_str(json)?;
    let tips = clean_tips(tips);
    if tips.is_empty() {
        return Err(AiError::InvalidPlan("no tips returned".to_string()));
    }
    Ok(tips)
}

fn clean_tips(tips: Vec<String>) -> Vec<String> {
    tips.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::ExerciseKind;

    fn day_json(day: u8) -> String {
        format!(
            r#"{{"day": {day}, "focus": "Ngày {day}", "details": "Chi tiết",
                "exercises": [{{"name": "Tư thế núi", "type": "yoga", "duration": "10 phút",
                "instructions": ["Đứng thẳng", "Hít sâu"], "benefits": "Cải thiện tư thế"}}]}}"#
        )
    }

    fn plan_json(days: &[u8]) -> String {
        let days: Vec<_> = days.iter().map(|&d| day_json(d)).collect();
        format!(
            r#"{{"weeklyPlan": [{}], "tips": ["Uống nước", "  "]}}"#,
            days.join(",")
        )
    }

    #[test]
    fn test_extract_object_ignores_surrounding_text() {
        let text = "Đây là kế hoạch:\n```json\n{\"a\": {\"b\": 1}}\n```\nChúc bạn tập tốt!";
        assert_eq!(extract_object(text), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_extract_requires_both_brackets_in_order() {
        assert_eq!(extract_object("no json here"), None);
        assert_eq!(extract_object("} reversed {"), None);
        assert_eq!(extract_array("[1, 2]"), Some("[1, 2]"));
    }

    #[test]
    fn test_parse_plan_accepts_valid_week_wrapped_in_prose() {
        let text = format!("Kế hoạch của bạn:\n{}\nHết.", plan_json(&[1, 2, 3, 4, 5, 6, 7]));
        let plan = parse_plan(&text).unwrap();
        assert_eq!(plan.weekly_plan.len(), 7);
        assert!(plan.weekly_plan.iter().all(DayPlan::is_ai));
        assert_eq!(plan.weekly_plan[0].exercises()[0].kind, ExerciseKind::Yoga);
        // blank tips are dropped
        assert_eq!(plan.tips, vec!["Uống nước".to_string()]);
    }

    #[test]
    fn test_parse_plan_sorts_days() {
        let plan = parse_plan(&plan_json(&[7, 6, 5, 4, 3, 2, 1])).unwrap();
        let days: Vec<_> = plan.weekly_plan.iter().map(DayPlan::day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_parse_plan_rejects_wrong_day_count() {
        let err = parse_plan(&plan_json(&[1, 2, 3])).unwrap_err();
        assert!(matches!(err, AiError::InvalidPlan(_)));
    }

    #[test]
    fn test_parse_plan_rejects_duplicate_days() {
        let err = parse_plan(&plan_json(&[1, 2, 3, 3, 5, 6, 7])).unwrap_err();
        assert!(matches!(err, AiError::InvalidPlan(_)));
    }

    #[test]
    fn test_parse_plan_rejects_unknown_exercise_type() {
        let text = plan_json(&[1, 2, 3, 4, 5, 6, 7]).replacen("\"yoga\"", "\"pilates\"", 1);
        let err = parse_plan(&text).unwrap_err();
        assert!(matches!(err, AiError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_plan_rejects_missing_tips() {
        let text = r#"{"weeklyPlan": []}"#;
        assert!(matches!(parse_plan(text), Err(AiError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_plan_without_json() {
        assert!(matches!(
            parse_plan("Xin lỗi, tôi không thể giúp."),
            Err(AiError::MissingJson("object"))
        ));
    }

    #[test]
    fn test_parse_plan_broken_json() {
        assert!(matches!(
            parse_plan("{\"weeklyPlan\": [ }"),
            Err(AiError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_tips() {
        let tips = parse_tips("Đây: [\"Ngủ sớm\", \"\", \"Thở sâu\"]").unwrap();
        assert_eq!(tips, vec!["Ngủ sớm".to_string(), "Thở sâu".to_string()]);

        assert!(matches!(parse_tips("none"), Err(AiError::MissingJson("array"))));
        assert!(matches!(parse_tips("[\" \"]"), Err(AiError::InvalidPlan(_))));
        assert!(matches!(parse_tips("[1, 2]"), Err(AiError::InvalidJson(_))));
    }
}
