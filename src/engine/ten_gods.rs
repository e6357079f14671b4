// ==========================================
// 사주 명리 계산 코어 - 십성(十神) 분류 엔진
// ==========================================
// 분류는 (일간, 대상 천간)의 순수 함수
// (오행 관계 5종) × (음양 일치 여부 2종) = 10 분류, 빠짐없이 분할된다
// 지지는 본기(本氣) 천간으로 환원 후 동일하게 분류
// ==========================================

use crate::domain::chart::{FourPillars, TenGodsDistribution};
use crate::domain::stem_branch::Stem;
use crate::domain::types::TenGod;

pub struct TenGodsEngine;

impl TenGodsEngine {
    /// 십성 판정
    ///
    /// 자기 자신에 대해서는 항상 비견(比肩)
    pub fn classify(day_master: Stem, target: Stem) -> TenGod {
        let day_element = day_master.element();
        let target_element = target.element();
        let same_polarity = day_master.polarity() == target.polarity();

        // 같은 오행
        if day_element == target_element {
            return if same_polarity {
                TenGod::Companion
            } else {
                TenGod::RobWealth
            };
        }

        // 내가 생하는 것 (식상)
        if day_element.generates() == target_element {
            return if same_polarity {
                TenGod::EatingGod
            } else {
                TenGod::HurtingOfficer
            };
        }

        // 내가 극하는 것 (재성)
        if day_element.overcomes() == target_element {
            return if same_polarity {
                TenGod::IndirectWealth
            } else {
                TenGod::DirectWealth
            };
        }

        // 나를 극하는 것 (관살)
        if target_element.overcomes() == day_element {
            return if same_polarity {
                TenGod::SevenKillings
            } else {
                TenGod::DirectOfficer
            };
        }

        // 남은 경우는 나를 생하는 것 (인성) 뿐이다
        if same_polarity {
            TenGod::IndirectResource
        } else {
            TenGod::DirectResource
        }
    }

    /// 사주 전체 십성 집계
    ///
    /// 기둥당 천간 1 + 지지 본기 1 = 최대 8개 토큰 (시주 未知면 6개)
    pub fn analyze(day_master: Stem, pillars: &FourPillars) -> TenGodsDistribution {
        let mut dist = TenGodsDistribution::default();
        for (_, pillar) in pillars.present() {
            dist.add(Self::classify(day_master, pillar.stem()));
            dist.add(Self::classify(day_master, pillar.branch().hidden_stem()));
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_relation_is_always_companion() {
        for stem in Stem::ALL {
            assert_eq!(TenGodsEngine::classify(stem, stem), TenGod::Companion);
        }
    }

    #[test]
    fn test_classification_from_gap() {
        // 일간 甲(목양) 기준 10간 전체
        let expected = [
            TenGod::Companion,        // 甲: 목양
            TenGod::RobWealth,        // 乙: 목음
            TenGod::EatingGod,        // 丙: 화양
            TenGod::HurtingOfficer,   // 丁: 화음
            TenGod::IndirectWealth,   // 戊: 토양
            TenGod::DirectWealth,     // 己: 토음
            TenGod::SevenKillings,    // 庚: 금양
            TenGod::DirectOfficer,    // 辛: 금음
            TenGod::IndirectResource, // 壬: 수양
            TenGod::DirectResource,   // 癸: 수음
        ];
        for (target, want) in Stem::ALL.into_iter().zip(expected) {
            assert_eq!(TenGodsEngine::classify(Stem::Gap, target), want);
        }
    }

    #[test]
    fn test_classification_covers_all_ten() {
        // 일간마다 10간 분류가 정확히 10 분류를 모두 덮는다
        for day_master in Stem::ALL {
            let mut seen = std::collections::HashSet::new();
            for target in Stem::ALL {
                seen.insert(TenGodsEngine::classify(day_master, target));
            }
            assert_eq!(seen.len(), 10);
        }
    }
}
