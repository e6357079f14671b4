// ==========================================
// 사주 명리 계산 코어 - 핵심 라이브러리
// ==========================================
// 기술 스택: Rust + serde + chrono
// 시스템 정위: 순수 계산 코어 (저장/네트워크/UI 없음)
// 계약: 동일 입력 → 동일 출력 (모든 난수는 시드 결정론)
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 간지/차트/운세 타입
pub mod domain;

// 엔진 계층 - 순수 계산 규칙
pub mod engine;

// 설정 계층 - 운세 규칙표/템플릿
pub mod config;

// API 계층 - 외부 진입점
pub mod api;

// 오류 타입
pub mod error;

// 로깅 초기화
pub mod logging;

// ==========================================
// 핵심 타입 재수출
// ==========================================

// 도메인 타입
pub use domain::types::{Element, Gender, PillarPosition, Polarity, RelationKind, TenGod};

// 도메인 엔티티
pub use domain::{
    BirthInfo, Branch, BranchRelation, CalendarFortuneItem, DaeunPeriod, FiveElementDistribution,
    FortuneLevel, FourPillars, HourPillar, QuestionCategory, RelationshipSet, SajuChart,
    SajuProfile, SeunPeriod, Stem, StemBranch, TenGodsDistribution, TodayFortune,
};

// 엔진
pub use engine::{
    FiveElementEngine, FortuneRuleEngine, LuckCycleEngine, PillarCalculator, RelationshipEngine,
    TenGodsEngine,
};

// 설정
pub use config::{FortuneRuleConfig, FortuneRuleTable, MessageTemplates};

// API
pub use api::{FortuneApi, MyeongriApi};

// 오류
pub use error::{MyeongriError, MyeongriResult};

/// 라이브러리 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 애플리케이션 이름
pub const APP_NAME: &str = "명리 계산 코어";
