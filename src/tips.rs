//! Tips module - lời khuyên sức khỏe cho yoga và thiền

use rand::seq::SliceRandom;

/// Rule-based plan tips
pub const TIP_UNDERWEIGHT: &str =
    "Chỉ số BMI của bạn thấp. Hãy bổ sung dinh dưỡng đầy đủ và ưu tiên các bài tập nhẹ nhàng.";
pub const TIP_OVERWEIGHT: &str =
    "Chỉ số BMI của bạn cao. Kết hợp yoga với chế độ ăn hợp lý để giảm cân an toàn.";
pub const TIP_UNHEALTHY_EATING: &str =
    "Hãy cải thiện chế độ ăn: thêm rau xanh, trái cây và hạn chế đồ ăn nhanh.";
pub const TIP_SEDENTARY: &str =
    "Bạn ít vận động. Hãy bắt đầu từ từ với các bài tập ngắn và tăng dần thời gian.";
pub const TIP_HYDRATION: &str = "Uống đủ nước mỗi ngày (2-3 lít).";
pub const TIP_CONSISTENCY: &str = "Tập luyện đều đặn mỗi ngày để đạt kết quả tốt nhất.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipCategory {
    Yoga,       // Yoga
    Meditation, // Thiền
    Breathing,  // Hít thở
    Nutrition,  // Dinh dưỡng
    Recovery,   // Phục hồi
}

impl TipCategory {
    pub fn emoji(&self) -> &'static str {
        match self {
            TipCategory::Yoga => "🧘",
            TipCategory::Meditation => "☯",
            TipCategory::Breathing => "🌬️",
            TipCategory::Nutrition => "🥗",
            TipCategory::Recovery => "😴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TipCategory::Yoga => "Yoga",
            TipCategory::Meditation => "Thiền",
            TipCategory::Breathing => "Hít thở",
            TipCategory::Nutrition => "Dinh dưỡng",
            TipCategory::Recovery => "Phục hồi",
        }
    }

    pub fn all() -> &'static [TipCategory] {
        &[
            TipCategory::Yoga,
            TipCategory::Meditation,
            TipCategory::Breathing,
            TipCategory::Nutrition,
            TipCategory::Recovery,
        ]
    }
}

pub struct Tip {
    pub category: TipCategory,
    pub text: &'static str,
}

pub const TIPS: &[Tip] = &[
    // === YOGA ===
    Tip {
        category: TipCategory::Yoga,
        text: "Tập yoga khi bụng đói hoặc sau bữa ăn ít nhất 2 giờ.",
    },
    Tip {
        category: TipCategory::Yoga,
        text: "Đừng cố ép cơ thể vào tư thế khó. Sự dẻo dai đến từ luyện tập đều đặn, không phải từ một buổi.",
    },
    Tip {
        category: TipCategory::Yoga,
        text: "Giữ mỗi tư thế 5 nhịp thở chậm. Nếu hơi thở bị gián đoạn, hãy giảm mức độ.",
    },
    Tip {
        category: TipCategory::Yoga,
        text: "Luôn khởi động khớp cổ, vai và hông trước khi vào các tư thế sâu.",
    },

    // === THIỀN ===
    Tip {
        category: TipCategory::Meditation,
        text: "Bắt đầu với 5 phút thiền mỗi sáng. Thời gian ngắn nhưng đều đặn hiệu quả hơn một buổi dài.",
    },
    Tip {
        category: TipCategory::Meditation,
        text: "Khi tâm trí lang thang, nhẹ nhàng đưa sự chú ý trở về hơi thở. Đó chính là luyện tập.",
    },
    Tip {
        category: TipCategory::Meditation,
        text: "Chọn một góc yên tĩnh và cố định để thiền. Thói quen nơi chốn giúp tâm lắng xuống nhanh hơn.",
    },

    // === HÍT THỞ ===
    Tip {
        category: TipCategory::Breathing,
        text: "Thở 4-7-8: hít vào 4 giây, giữ 7 giây, thở ra 8 giây. Lặp lại 4 lần trước khi ngủ.",
    },
    Tip {
        category: TipCategory::Breathing,
        text: "Thở bằng bụng thay vì ngực giúp hạ nhịp tim và giảm căng thẳng.",
    },
    Tip {
        category: TipCategory::Breathing,
        text: "Thở hộp: hít 4 giây, giữ 4 giây, thở ra 4 giây, giữ 4 giây. Dùng khi cần lấy lại bình tĩnh.",
    },

    // === DINH DƯỠNG ===
    Tip {
        category: TipCategory::Nutrition,
        text: "Uống một cốc nước ấm sau khi thức dậy để đánh thức hệ tiêu hóa.",
    },
    Tip {
        category: TipCategory::Nutrition,
        text: "Ăn chậm, nhai kỹ. Cơ thể cần khoảng 20 phút để nhận ra cảm giác no.",
    },
    Tip {
        category: TipCategory::Nutrition,
        text: "Ưu tiên rau xanh, ngũ cốc nguyên hạt và đạm thực vật trong mỗi bữa ăn.",
    },

    // === PHỤC HỒI ===
    Tip {
        category: TipCategory::Recovery,
        text: "Ngủ đủ 7-8 tiếng mỗi đêm. Cơ thể phục hồi và thích nghi khi bạn nghỉ ngơi.",
    },
    Tip {
        category: TipCategory::Recovery,
        text: "Kết thúc mỗi buổi tập bằng 3-5 phút tư thế xác chết (Savasana).",
    },
    Tip {
        category: TipCategory::Recovery,
        text: "Một ngày nghỉ mỗi tuần không làm mất tiến bộ mà giúp cơ thể hấp thụ thành quả.",
    },
];

/// Get a random tip from the whole catalog
pub fn get_random_tip() -> &'static Tip {
    let mut rng = rand::thread_rng();
    TIPS.choose(&mut rng).unwrap_or(&TIPS[0])
}

/// Get a random tip of the given category
pub fn get_random_tip_by_category(category: TipCategory) -> Option<&'static Tip> {
    let tips: Vec<_> = TIPS.iter().filter(|t| t.category == category).collect();
    let mut rng = rand::thread_rng();
    tips.choose(&mut rng).copied()
}

/// Format a tip for terminal output
pub fn format_tip(tip: &Tip) -> String {
    format!("{} {}\n\n{}", tip.category.emoji(), tip.category.name(), tip.text)
}
