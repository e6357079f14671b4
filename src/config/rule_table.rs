// ==========================================
// 사주 명리 계산 코어 - 운세 규칙표
// ==========================================
// 오행 임계 규칙: 분포값이 임계를 넘으면 점수 보정 + 메시지 기여
// JSON 으로 교체 가능, 기본값은 컴파일 타임 내장
// ==========================================

use crate::domain::types::Element;
use serde::{Deserialize, Serialize};

/// 규칙 1건: distribution[element] > threshold → score_delta 적용
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneRule {
    pub element: Element,
    pub threshold: u8,
    #[serde(rename = "scoreDelta")]
    pub score_delta: i32,
    pub message: String,
}

impl FortuneRule {
    fn new(element: Element, threshold: u8, score_delta: i32, message: &str) -> FortuneRule {
        FortuneRule {
            element,
            threshold,
            score_delta,
            message: message.to_string(),
        }
    }
}

/// 운세 규칙표 전체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneRuleTable {
    /// 기본 점수 (규칙/난수 보정 전)
    #[serde(rename = "baseScore")]
    pub base_score: i32,
    pub rules: Vec<FortuneRule>,
}

impl Default for FortuneRuleTable {
    fn default() -> FortuneRuleTable {
        FortuneRuleTable {
            base_score: 60,
            rules: vec![
                FortuneRule::new(
                    Element::Wood,
                    30,
                    5,
                    "목(木) 기운이 강해 새로운 시작과 성장에 힘이 실리는 날입니다.",
                ),
                FortuneRule::new(
                    Element::Fire,
                    30,
                    4,
                    "화(火) 기운이 강해 표현력과 추진력이 돋보이는 날입니다.",
                ),
                FortuneRule::new(
                    Element::Earth,
                    30,
                    3,
                    "토(土) 기운이 강해 안정과 신뢰가 쌓이는 날입니다.",
                ),
                FortuneRule::new(
                    Element::Metal,
                    30,
                    -3,
                    "금(金) 기운이 강해 날카로운 판단이 필요하지만 마찰에 주의해야 합니다.",
                ),
                FortuneRule::new(
                    Element::Water,
                    30,
                    -4,
                    "수(水) 기운이 강해 생각이 깊어지니 결정은 천천히 내리는 것이 좋습니다.",
                ),
                // 극단적 쏠림은 어느 오행이든 감점
                FortuneRule::new(
                    Element::Wood,
                    50,
                    -5,
                    "한쪽으로 크게 쏠린 기운이니 무리한 확장은 피해야 합니다.",
                ),
                FortuneRule::new(
                    Element::Water,
                    50,
                    -5,
                    "흐름이 한쪽으로 치우쳐 있으니 균형을 먼저 찾아야 합니다.",
                ),
            ],
        }
    }
}
