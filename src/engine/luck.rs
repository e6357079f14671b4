// ==========================================
// 사주 명리 계산 코어 - 대운·세운 계산 엔진
// ==========================================
// 대운(大運): 월주 기준 10년 단위, 순행/역행은 (성별 × 년간 음양)
// 세운(歲運): 요청 연도를 중심으로 한 해별 년주
// ==========================================

use crate::domain::birth::BirthInfo;
use crate::domain::chart::{DaeunPeriod, SeunPeriod};
use crate::domain::stem_branch::Stem;
use crate::domain::types::Gender;
use crate::engine::pillars::PillarCalculator;
use chrono::Datelike;
use std::fmt;

/// 대운 구간 수 (10년 × 8 = 80세까지)
pub const DAEUN_WINDOW_COUNT: usize = 8;

/// 세운 범위 (중심 연도 앞뒤 5년, 총 10년)
pub const SEUN_SPAN: i32 = 10;

/// 대운 진행 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuckDirection {
    Forward,  // 순행
    Backward, // 역행
}

impl fmt::Display for LuckDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuckDirection::Forward => write!(f, "순행"),
            LuckDirection::Backward => write!(f, "역행"),
        }
    }
}

pub struct LuckCycleEngine;

impl LuckCycleEngine {
    /// 대운 방향 판정
    ///
    /// 남성: 양년생 순행, 음년생 역행 / 여성: 반대
    /// 성별 O 는 여성 규칙을 따른다
    pub fn direction(year_stem: Stem, gender: Gender) -> LuckDirection {
        let yang_year = year_stem.polarity().is_yang();
        let forward = match gender {
            Gender::Male => yang_year,
            Gender::Female | Gender::Other => !yang_year,
        };
        if forward {
            LuckDirection::Forward
        } else {
            LuckDirection::Backward
        }
    }

    /// 대운 계산 (10년 단위 8구간)
    ///
    /// 구간 i 의 기둥 = 월주를 60갑자에서 ±(i+1)칸 이동한 것
    /// 구간 i 의 나이 = (10i+1) ~ (10i+10)세, 시작 연도 = 출생년 + 10i
    // TODO: 절입일까지의 거리로 대운수(기점 나이)를 보정해야 한다
    //       (현재는 일률적으로 1세 기점 - 권위 있는 만세력과 어긋날 수 있음)
    pub fn daeun(birth: &BirthInfo) -> Vec<DaeunPeriod> {
        let birth_year = birth.birth_date.year();
        let month_pillar = PillarCalculator::month_pillar(birth.birth_date);
        let year_stem = PillarCalculator::year_pillar(birth_year).stem();
        let step: i64 = match Self::direction(year_stem, birth.gender) {
            LuckDirection::Forward => 1,
            LuckDirection::Backward => -1,
        };

        (0..DAEUN_WINDOW_COUNT)
            .map(|i| {
                let age_start = i * 10 + 1;
                let age_end = (i + 1) * 10;
                DaeunPeriod {
                    age_range: format!("{age_start}-{age_end}세"),
                    pillar: month_pillar.step(step * (i as i64 + 1)),
                    start_year: birth_year + (i as i32) * 10,
                }
            })
            .collect()
    }

    /// 세운 계산 (중심 연도 앞뒤 5년)
    ///
    /// 해당 연도의 년주를 그대로 쓴다. 현재 시각을 읽지 않는다 (순수 함수)
    pub fn seun(center_year: i32) -> Vec<SeunPeriod> {
        (0..SEUN_SPAN)
            .map(|i| {
                let year = center_year - 5 + i;
                SeunPeriod {
                    year,
                    pillar: PillarCalculator::year_pillar(year),
                }
            })
            .collect()
    }
}
