// ==========================================
// 사주 명리 계산 코어 - 운세 API
// ==========================================
// 직책: 운세 규칙 엔진의 외부 진입점 (규칙/템플릿 교체 지원)
// ==========================================

use crate::config::FortuneRuleConfig;
use crate::domain::chart::FiveElementDistribution;
use crate::domain::fortune::{CalendarFortuneItem, QuestionCategory, TodayFortune};
use crate::engine::rule_engine::FortuneRuleEngine;
use crate::error::MyeongriResult;
use chrono::NaiveDate;

pub struct FortuneApi {
    engine: FortuneRuleEngine,
}

impl Default for FortuneApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FortuneApi {
    pub fn new() -> FortuneApi {
        FortuneApi {
            engine: FortuneRuleEngine::new(),
        }
    }

    pub fn with_config(config: FortuneRuleConfig) -> FortuneApi {
        FortuneApi {
            engine: FortuneRuleEngine::with_config(config),
        }
    }

    /// JSON 설정 문자열에서 생성 (규칙표 + 템플릿)
    pub fn from_json(rule_table_json: &str, templates_json: &str) -> MyeongriResult<FortuneApi> {
        Ok(Self::with_config(FortuneRuleConfig::from_json(
            rule_table_json,
            templates_json,
        )?))
    }

    pub fn today(&self, date: NaiveDate, distribution: &FiveElementDistribution) -> TodayFortune {
        self.engine.today(date, distribution)
    }

    pub fn calendar(
        &self,
        start: NaiveDate,
        days: u32,
        distribution: &FiveElementDistribution,
    ) -> Vec<CalendarFortuneItem> {
        self.engine.calendar(start, days, distribution)
    }

    pub fn question(
        &self,
        date: NaiveDate,
        category: QuestionCategory,
        distribution: Option<&FiveElementDistribution>,
    ) -> String {
        self.engine.question(date, category, distribution)
    }
}
