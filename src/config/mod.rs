// ==========================================
// 사주 명리 계산 코어 - 설정 계층
// ==========================================
// 직책: 운세 규칙표 + 메시지 템플릿 관리
// 기본값 내장, JSON 문자열로 교체 가능 (코어는 파일 I/O 를 하지 않는다)
// ==========================================

pub mod rule_table;
pub mod templates;

pub use rule_table::{FortuneRule, FortuneRuleTable};
pub use templates::{MessageTemplates, QuestionTemplates};

use crate::error::MyeongriResult;
use serde::{Deserialize, Serialize};

/// 운세 엔진 설정 묶음
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FortuneRuleConfig {
    #[serde(rename = "ruleTable", default)]
    pub rule_table: FortuneRuleTable,
    #[serde(default)]
    pub templates: MessageTemplates,
}

impl FortuneRuleConfig {
    /// JSON 문자열 2건(규칙표, 템플릿)에서 로드
    ///
    /// 파싱 실패는 Config 오류로 즉시 반환 (기본값으로 조용히 대체하지 않는다)
    pub fn from_json(rule_table_json: &str, templates_json: &str) -> MyeongriResult<Self> {
        Ok(FortuneRuleConfig {
            rule_table: serde_json::from_str(rule_table_json)?,
            templates: serde_json::from_str(templates_json)?,
        })
    }
}
