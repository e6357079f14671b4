// ==========================================
// 사주 명리 계산 코어 - 메시지 템플릿 풀
// ==========================================
// 오늘의 운세 본문 / 추천 / 주의 / 질문 카테고리별 응답 풀
// 선택은 전부 시드 난수로 결정론적
// ==========================================

use crate::domain::fortune::QuestionCategory;
use serde::{Deserialize, Serialize};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 질문 카테고리별 응답 풀
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTemplates {
    pub meeting: Vec<String>,
    pub love: Vec<String>,
    pub money: Vec<String>,
    pub contact: Vec<String>,
    #[serde(rename = "move")]
    pub relocation: Vec<String>,
}

impl Default for QuestionTemplates {
    fn default() -> QuestionTemplates {
        QuestionTemplates {
            meeting: strings(&[
                "오늘의 만남은 서두르지 않을수록 좋은 인연으로 이어집니다.",
                "약속 장소에 먼저 도착해 여유를 갖는 것이 흐름을 유리하게 만듭니다.",
                "처음 만나는 사람에게서 뜻밖의 도움을 받을 수 있는 날입니다.",
            ]),
            love: strings(&[
                "마음을 말로 옮기기에 좋은 기운이 흐르고 있습니다.",
                "상대의 이야기를 끝까지 들어주는 것이 오늘의 열쇠입니다.",
                "작은 오해는 오늘 풀어두는 것이 좋습니다.",
            ]),
            money: strings(&[
                "큰 지출보다는 흐름을 정리하는 데 좋은 날입니다.",
                "계획에 없던 소비는 한 번 더 생각한 뒤 결정하세요.",
                "재물운은 평탄하니 장기적인 관점이 유리합니다.",
            ]),
            contact: strings(&[
                "미뤄둔 연락을 먼저 꺼내기에 좋은 날입니다.",
                "연락은 오전보다 오후가 부드럽게 이어집니다.",
                "짧은 안부가 예상보다 큰 인연을 되살릴 수 있습니다.",
            ]),
            relocation: strings(&[
                "이동은 충분히 준비된 뒤에 움직이는 것이 좋습니다.",
                "오늘의 이동은 평소보다 여유 있게 일정을 잡으세요.",
                "환경을 바꾸기 전에 주변의 조언을 구하면 길합니다.",
            ]),
        }
    }
}

impl QuestionTemplates {
    pub fn for_category(&self, category: QuestionCategory) -> &[String] {
        match category {
            QuestionCategory::Meeting => &self.meeting,
            QuestionCategory::Love => &self.love,
            QuestionCategory::Money => &self.money,
            QuestionCategory::Contact => &self.contact,
            QuestionCategory::Move => &self.relocation,
        }
    }
}

/// 메시지 템플릿 전체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    /// 오늘의 운세 본문 ({message} {recommend} {avoid} 플레이스홀더)
    pub today: Vec<String>,
    pub recommendations: Vec<String>,
    pub avoidances: Vec<String>,
    /// 적용된 규칙 메시지가 하나도 없을 때의 기본 문구
    #[serde(rename = "fallbackMessage")]
    pub fallback_message: String,
    pub question: QuestionTemplates,
}

impl Default for MessageTemplates {
    fn default() -> MessageTemplates {
        MessageTemplates {
            today: strings(&[
                "{message} 오늘은 '{recommend}'을(를) 추천하고, '{avoid}'은(는) 피하는 것이 좋습니다.",
                "{message} '{recommend}'에 힘을 싣고 '{avoid}'은(는) 잠시 미뤄두세요.",
                "{message} 추천: {recommend} / 주의: {avoid}",
            ]),
            recommendations: strings(&[
                "가까운 사람과의 대화",
                "미뤄둔 일 하나 마무리하기",
                "가벼운 산책",
                "새로운 계획 메모하기",
            ]),
            avoidances: strings(&[
                "충동적인 지출",
                "감정적인 말다툼",
                "무리한 일정",
                "늦은 밤의 큰 결정",
            ]),
            fallback_message: "고요한 흐름 속에 균형을 찾아가는 하루가 예상됩니다.".to_string(),
            question: QuestionTemplates::default(),
        }
    }
}
