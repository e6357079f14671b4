// ==========================================
// 사주 명리 계산 코어 - 계산 엔진 계층
// ==========================================
// 순수 계산만 담당: 입력 동일 → 출력 동일, I/O 없음
// pillars       사주 네 기둥 유도
// five_elements 오행 분포 정규화
// ten_gods      십성 분류
// relationships 형충회합 탐지
// luck          대운·세운 전개
// rule_engine   운세 규칙 평가 (시드 난수)
// ==========================================

pub mod five_elements;
pub mod luck;
pub mod pillars;
pub mod random;
pub mod relationships;
pub mod rule_engine;
pub mod solar_terms;
pub mod ten_gods;

pub use five_elements::FiveElementEngine;
pub use luck::{LuckCycleEngine, LuckDirection, DAEUN_WINDOW_COUNT, SEUN_SPAN};
pub use pillars::PillarCalculator;
pub use random::SeededRandom;
pub use relationships::RelationshipEngine;
pub use rule_engine::FortuneRuleEngine;
pub use solar_terms::{current_term, month_branch_for, SolarTerm, SOLAR_TERMS};
pub use ten_gods::TenGodsEngine;
