//! Prompt templates for plan and tip generation

use crate::profile::{HealthProfile, NOT_PROVIDED};

use super::PlanRequest;

fn profile_lines(profile: &HealthProfile) -> String {
    let number = |v: Option<f64>, unit: &str| {
        v.map(|v| format!("{} {}", v, unit))
            .unwrap_or_else(|| NOT_PROVIDED.to_string())
    };

    format!(
        "- Cân nặng: {}\n\
         - Chiều cao: {}\n\
         - Tuổi: {}\n\
         - Giới tính: {}\n\
         - Thói quen ăn uống: {}\n\
         - Mức độ vận động: {}\n\
         - Mục tiêu: {}\n",
        number(profile.weight, "kg"),
        number(profile.height, "cm"),
        profile
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string()),
        profile.gender.map_or(NOT_PROVIDED, |g| g.label_vi()),
        profile.eating_habits.map_or(NOT_PROVIDED, |e| e.label_vi()),
        profile.activity_level.map_or(NOT_PROVIDED, |a| a.label_vi()),
        profile.goal.map_or(NOT_PROVIDED, |g| g.label_vi()),
    )
}

/// Prompt asking for `{ "weeklyPlan": [...7 days], "tips": [...] }`
pub fn plan_prompt(request: &PlanRequest) -> String {
    format!(
        r#"Bạn là huấn luyện viên yoga và thiền chuyên nghiệp. Hãy tạo kế hoạch tập luyện 7 ngày cá nhân hóa cho người dùng sau.

THÔNG TIN NGƯỜI DÙNG:
{profile}- BMI: {bmi:.1} ({category})
- Cấp độ đề xuất: {level}
- Thời lượng mỗi buổi: {duration} phút

YÊU CẦU:
- Đúng 7 ngày, "day" từ 1 đến 7.
- Mỗi ngày có "focus", "details" và danh sách "exercises".
- "type" của bài tập chỉ được là "yoga", "meditation" hoặc "breathing".
- Tổng thời lượng mỗi ngày khoảng {duration} phút.
- Viết bằng tiếng Việt.

Chỉ trả về JSON hợp lệ, không kèm markdown, theo đúng cấu trúc:
{{
  "weeklyPlan": [
    {{
      "day": 1,
      "focus": "Khởi động nhẹ nhàng",
      "details": "Mô tả ngắn về buổi tập",
      "exercises": [
        {{
          "name": "Tư thế em bé",
          "type": "yoga",
          "duration": "5 phút",
          "calories": "15 kcal",
          "instructions": ["Bước 1", "Bước 2"],
          "benefits": "Thư giãn lưng và hông"
        }}
      ]
    }}
  ],
  "tips": ["Lời khuyên 1", "Lời khuyên 2"]
}}"#,
        profile = profile_lines(&request.profile),
        bmi = request.bmi.rounded(),
        category = request.bmi.category.label(),
        level = request.level.label_vi(),
        duration = request.duration_minutes,
    )
}

/// Prompt asking for a JSON array of short tips
pub fn tips_prompt(profile: &HealthProfile) -> String {
    format!(
        r#"Bạn là chuyên gia sức khỏe về yoga và thiền. Dựa trên thông tin sau, hãy đưa ra 5 lời khuyên ngắn gọn, thiết thực.

THÔNG TIN NGƯỜI DÙNG:
{profile}
Chỉ trả về một mảng JSON các chuỗi, không kèm markdown, ví dụ:
["Lời khuyên 1", "Lời khuyên 2"]"#,
        profile = profile_lines(profile),
    )
}
