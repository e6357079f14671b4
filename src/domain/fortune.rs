// ==========================================
// 사주 명리 계산 코어 - 운세 출력 타입
// ==========================================
// 외부 계약: lib/contracts 의 오늘의 운세 / 캘린더 / 질문 응답 형태
// 동일 (날짜, 오행 분포) 입력 → 동일 출력 (결정론 계약)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 오늘의 운세 점수 + 메시지
/// 모든 점수는 0..=100
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayFortune {
    #[serde(rename = "globalScore")]
    pub global_score: u8,
    pub work: u8,
    pub love: u8,
    pub money: u8,
    pub health: u8,
    #[serde(rename = "mainMessage")]
    pub main_message: String,
    pub recommend: String,
    pub avoid: String,
}

/// 캘린더 일자별 길흉 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortuneLevel {
    Good,
    Normal,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarFortuneItem {
    pub date: NaiveDate,
    pub level: FortuneLevel,
}

/// 질문 카테고리 (만남/연애/재물/연락/이동)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Meeting,
    Love,
    Money,
    Contact,
    Move,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 5] = [
        QuestionCategory::Meeting,
        QuestionCategory::Love,
        QuestionCategory::Money,
        QuestionCategory::Contact,
        QuestionCategory::Move,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            QuestionCategory::Meeting => "meeting",
            QuestionCategory::Love => "love",
            QuestionCategory::Money => "money",
            QuestionCategory::Contact => "contact",
            QuestionCategory::Move => "move",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
