// ==========================================
// 사주 명리 계산 코어 - 명리 분석 API
// ==========================================
// 직책:
// - 출생 정보 → 기본 프로필 (사주 + 오행 + 일간)
// - 출생 정보 → 종합 차트 (십성 + 형충회합 + 대운·세운 포함)
// 전부 파생 계산이며 상태를 갖지 않는다
// ==========================================

use crate::domain::birth::BirthInfo;
use crate::domain::chart::{SajuChart, SajuProfile};
use crate::engine::five_elements::FiveElementEngine;
use crate::engine::luck::LuckCycleEngine;
use crate::engine::pillars::PillarCalculator;
use crate::engine::relationships::RelationshipEngine;
use crate::engine::ten_gods::TenGodsEngine;
use tracing::{debug, instrument};

pub struct MyeongriApi;

impl MyeongriApi {
    /// 기본 프로필: 사주 네 기둥 + 오행 분포 + 일간
    #[instrument(skip(birth), fields(date = %birth.birth_date, gender = ?birth.gender))]
    pub fn profile(birth: &BirthInfo) -> SajuProfile {
        let pillars = PillarCalculator::four_pillars(birth);
        let five_elements = FiveElementEngine::distribution(&pillars);
        debug!(day_master = %pillars.day_master(), "사주 프로필 계산 완료");
        SajuProfile {
            pillars,
            five_elements,
            day_master: pillars.day_master(),
        }
    }

    /// 종합 차트: 프로필 + 십성 분포 + 형충회합 + 대운·세운
    ///
    /// target_year 는 세운 창의 중심 연도 (통상 조회 시점의 해)
    #[instrument(skip(birth), fields(date = %birth.birth_date, target_year))]
    pub fn analyze(birth: &BirthInfo, target_year: i32) -> SajuChart {
        let pillars = PillarCalculator::four_pillars(birth);
        let five_elements = FiveElementEngine::distribution(&pillars);
        let day_master = pillars.day_master();
        let ten_gods = TenGodsEngine::analyze(day_master, &pillars);
        let relationships = RelationshipEngine::analyze(&pillars);
        let daeun = LuckCycleEngine::daeun(birth);
        let seun = LuckCycleEngine::seun(target_year);
        debug!(
            day_master = %day_master,
            relations = !relationships.is_empty(),
            "종합 차트 계산 완료"
        );
        SajuChart {
            pillars,
            five_elements,
            day_master,
            ten_gods,
            relationships,
            daeun,
            seun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stem_branch::UNKNOWN_HOUR_LABEL;

    fn birth_1984() -> BirthInfo {
        BirthInfo::parse("1984-11-16", Some("01:00"), "M").unwrap()
    }

    #[test]
    fn test_profile_matches_fixture_birth() {
        let profile = MyeongriApi::profile(&birth_1984());
        assert_eq!(profile.pillars.year.to_string(), "甲子");
        assert_eq!(profile.pillars.month.to_string(), "乙亥");
        assert_eq!(profile.pillars.day.to_string(), "甲子");
        assert_eq!(profile.pillars.hour.to_string(), "甲子");
        assert_eq!(profile.day_master.hanja(), "甲");
        assert_eq!(profile.five_elements.sum(), 100);
    }

    #[test]
    fn test_analyze_unknown_hour_uses_sentinel() {
        let birth = BirthInfo::parse("1984-11-16", None, "F").unwrap();
        let chart = MyeongriApi::analyze(&birth, 2024);
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["pillars"]["hour"], UNKNOWN_HOUR_LABEL);
        assert_eq!(chart.ten_gods.total(), 6);
    }

    #[test]
    fn test_analyze_produces_luck_cycles() {
        let chart = MyeongriApi::analyze(&birth_1984(), 2024);
        assert_eq!(chart.daeun.len(), 8);
        assert_eq!(chart.seun.len(), 10);
        assert_eq!(chart.daeun[0].start_year, 1984);
    }
}
