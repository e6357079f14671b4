// ==========================================
// LuckCycleEngine 엔진 통합 테스트
// ==========================================
// 테스트 목표: 대운 방향/전개와 세운 창 검증
// 커버 범위: (성별 × 년간 음양) 방향 규칙, 월주 계단 전개, 나이/시작연도 표기
// ==========================================

use myeongri_core::domain::birth::BirthInfo;
use myeongri_core::domain::stem_branch::Stem;
use myeongri_core::domain::types::Gender;
use myeongri_core::engine::luck::{LuckCycleEngine, LuckDirection};

// ==========================================
// 테스트 보조 함수
// ==========================================

fn birth(date: &str, gender: &str) -> BirthInfo {
    BirthInfo::parse(date, Some("01:00"), gender).unwrap()
}

// ==========================================
// 방향 규칙
// ==========================================

#[test]
fn test_direction_matrix() {
    // 양년 남성 순행 / 양년 여성 역행, 음년은 반대
    assert_eq!(
        LuckCycleEngine::direction(Stem::Gap, Gender::Male),
        LuckDirection::Forward
    );
    assert_eq!(
        LuckCycleEngine::direction(Stem::Gap, Gender::Female),
        LuckDirection::Backward
    );
    assert_eq!(
        LuckCycleEngine::direction(Stem::Eul, Gender::Male),
        LuckDirection::Backward
    );
    assert_eq!(
        LuckCycleEngine::direction(Stem::Eul, Gender::Female),
        LuckDirection::Forward
    );
    // 성별 O 는 여성 규칙과 같다
    assert_eq!(
        LuckCycleEngine::direction(Stem::Gap, Gender::Other),
        LuckCycleEngine::direction(Stem::Gap, Gender::Female)
    );
}

// ==========================================
// 대운 전개
// ==========================================

#[test]
fn test_daeun_forward_steps_from_month_pillar() {
    // 1984(甲子년, 양) 남성 → 순행. 월주 乙亥에서 한 칸씩 전진
    let periods = LuckCycleEngine::daeun(&birth("1984-11-16", "M"));
    assert_eq!(periods.len(), 8);
    assert_eq!(periods[0].pillar.to_string(), "丙子");
    assert_eq!(periods[1].pillar.to_string(), "丁丑");
    assert_eq!(periods[7].pillar.to_string(), "癸未");
}

#[test]
fn test_daeun_backward_for_female_yang_year() {
    let periods = LuckCycleEngine::daeun(&birth("1984-11-16", "F"));
    assert_eq!(periods[0].pillar.to_string(), "甲戌");
    assert_eq!(periods[1].pillar.to_string(), "癸酉");
    assert_eq!(periods[7].pillar.to_string(), "丁卯");
}

#[test]
fn test_daeun_age_ranges_and_start_years() {
    let periods = LuckCycleEngine::daeun(&birth("1984-11-16", "M"));
    assert_eq!(periods[0].age_range, "1-10세");
    assert_eq!(periods[0].start_year, 1984);
    assert_eq!(periods[1].age_range, "11-20세");
    assert_eq!(periods[7].age_range, "71-80세");
    assert_eq!(periods[7].start_year, 2054);
}

#[test]
fn test_daeun_ignores_birth_time() {
    // 대운은 년간/월주만의 함수 (생시 未知여도 동일)
    let with_time = LuckCycleEngine::daeun(&birth("1984-11-16", "M"));
    let without = LuckCycleEngine::daeun(&BirthInfo::parse("1984-11-16", None, "M").unwrap());
    assert_eq!(with_time, without);
}

// ==========================================
// 세운
// ==========================================

#[test]
fn test_seun_window_covers_ten_years() {
    let seun = LuckCycleEngine::seun(2024);
    assert_eq!(seun.len(), 10);
    assert_eq!(seun[0].year, 2019);
    assert_eq!(seun[0].pillar.to_string(), "己亥");
    assert_eq!(seun[5].year, 2024);
    assert_eq!(seun[5].pillar.to_string(), "甲辰");
    assert_eq!(seun[9].year, 2028);
    assert_eq!(seun[9].pillar.to_string(), "戊申");
}

#[test]
fn test_seun_is_pure_in_center_year() {
    // 중심 연도만의 함수 - 호출 시점과 무관
    assert_eq!(LuckCycleEngine::seun(2024), LuckCycleEngine::seun(2024));
    let shifted = LuckCycleEngine::seun(2025);
    assert_eq!(shifted[4].year, 2024);
    assert_eq!(shifted[4].pillar.to_string(), "甲辰");
}
