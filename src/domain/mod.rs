// ==========================================
// 사주 명리 계산 코어 - 도메인 계층
// ==========================================
// 직책: 엔티티/값 타입/불변식 정의
// 원칙: 계산 로직 없음, 저장 로직 없음 - 파생 불변값만
// ==========================================

pub mod birth;
pub mod chart;
pub mod fortune;
pub mod stem_branch;
pub mod types;

// 핵심 타입 재노출
pub use birth::BirthInfo;
pub use chart::{
    BranchRelation, DaeunPeriod, FiveElementDistribution, FourPillars, RelationshipSet,
    SajuChart, SajuProfile, SeunPeriod, TenGodsDistribution,
};
pub use fortune::{CalendarFortuneItem, FortuneLevel, QuestionCategory, TodayFortune};
pub use stem_branch::{Branch, HourPillar, Stem, StemBranch, UNKNOWN_HOUR_LABEL};
pub use types::{Element, Gender, PillarPosition, Polarity, RelationKind, TenGod};
