// ==========================================
// 사주 명리 계산 코어 - 차트 엔티티
// ==========================================
// 사주(四柱) / 오행 분포 / 십성 분포 / 형충회합 / 대운·세운 / 종합 차트
// 모든 엔티티는 파생 불변값 - 요청마다 재계산, 저장 없음
// ==========================================

use crate::domain::stem_branch::{Branch, HourPillar, Stem, StemBranch};
use crate::domain::types::{PillarPosition, RelationKind, TenGod};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 사주 (Four Pillars)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: HourPillar,
}

impl FourPillars {
    /// 일간(日干) - 십성 분류와 시주 유도의 기준점
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// 존재하는 기둥 (시주 미지면 3개)
    pub fn present(&self) -> Vec<(PillarPosition, StemBranch)> {
        let mut out = vec![
            (PillarPosition::Year, self.year),
            (PillarPosition::Month, self.month),
            (PillarPosition::Day, self.day),
        ];
        if let Some(hour) = self.hour.known() {
            out.push((PillarPosition::Hour, hour));
        }
        out
    }
}

// ==========================================
// 오행 분포 (Five Element Distribution)
// ==========================================
// 불변식: 5개 값의 합은 정확히 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiveElementDistribution {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl FiveElementDistribution {
    /// 집계할 토큰이 전혀 없을 때의 균등 분포
    pub const fn uniform() -> Self {
        Self {
            wood: 20,
            fire: 20,
            earth: 20,
            metal: 20,
            water: 20,
        }
    }

    /// wood → water 인덱스 순서의 배열 뷰
    pub const fn as_array(&self) -> [u8; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }

    pub fn get(&self, element: crate::domain::types::Element) -> u8 {
        self.as_array()[element.index()]
    }

    pub fn sum(&self) -> u32 {
        self.as_array().iter().map(|&v| u32::from(v)).sum()
    }
}

// ==========================================
// 십성 분포 (Ten Gods Distribution)
// ==========================================
// 최대 8개 토큰 (기둥당 천간 + 지지 본기)
// 직렬화: 한자 키 10개 전부 포함 (0 포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TenGodsDistribution {
    counts: [u32; 10],
}

impl TenGodsDistribution {
    pub fn add(&mut self, god: TenGod) {
        self.counts[god.index()] += 1;
    }

    pub fn get(&self, god: TenGod) -> u32 {
        self.counts[god.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl Serialize for TenGodsDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(10))?;
        for god in TenGod::ALL {
            map.serialize_entry(god.hanja(), &self.get(god))?;
        }
        map.end()
    }
}

// ==========================================
// 형충회합 관계 (Branch Relations)
// ==========================================
/// 관계 1건: 종류 + 관련 기둥 위치 + 관련 지지
/// 순수 기술(記述)이며 수치 점수는 없다 (해석은 하류 협력자 소관)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRelation {
    #[serde(rename = "type")]
    pub kind: RelationKind,
    pub positions: Vec<PillarPosition>,
    pub branches: Vec<Branch>,
}

impl fmt::Display for BranchRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = self
            .branches
            .iter()
            .map(|b| b.hanja())
            .collect::<Vec<_>>()
            .join("");
        write!(f, "{} {}", self.kind, pair)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RelationshipSet {
    pub conflicts: Vec<BranchRelation>,
    pub combinations: Vec<BranchRelation>,
    pub punishments: Vec<BranchRelation>,
    pub harms: Vec<BranchRelation>,
}

impl RelationshipSet {
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
            && self.combinations.is_empty()
            && self.punishments.is_empty()
            && self.harms.is_empty()
    }
}

// ==========================================
// 대운·세운 (Luck Cycle)
// ==========================================
/// 대운 1구간 (10년 단위)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaeunPeriod {
    #[serde(rename = "ageRange")]
    pub age_range: String,
    pub pillar: StemBranch,
    #[serde(rename = "startYear")]
    pub start_year: i32,
}

/// 세운 1년
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeunPeriod {
    pub year: i32,
    pub pillar: StemBranch,
}

// ==========================================
// 출력 집합
// ==========================================
/// 기본 프로필: 사주 + 오행 분포 + 일간
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuProfile {
    pub pillars: FourPillars,
    #[serde(rename = "fiveElements")]
    pub five_elements: FiveElementDistribution,
    #[serde(rename = "dayMaster")]
    pub day_master: Stem,
}

/// 종합 차트: 하류 협력자(AI 해석/저장/UI)에 전달되는 전체 출력
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SajuChart {
    pub pillars: FourPillars,
    #[serde(rename = "fiveElements")]
    pub five_elements: FiveElementDistribution,
    #[serde(rename = "dayMaster")]
    pub day_master: Stem,
    #[serde(rename = "tenGods")]
    pub ten_gods: TenGodsDistribution,
    pub relationships: RelationshipSet,
    pub daeun: Vec<DaeunPeriod>,
    pub seun: Vec<SeunPeriod>,
}
