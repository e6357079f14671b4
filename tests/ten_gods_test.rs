// ==========================================
// TenGodsEngine 엔진 통합 테스트
// ==========================================
// 테스트 목표: 십성 분류와 사주 전체 집계 검증
// 커버 범위: 비견 자기관계, 10분류 완전 분할, 고정 생일 집계, 한자 키 직렬화
// ==========================================

use myeongri_core::domain::birth::BirthInfo;
use myeongri_core::domain::stem_branch::Stem;
use myeongri_core::domain::types::TenGod;
use myeongri_core::engine::pillars::PillarCalculator;
use myeongri_core::engine::ten_gods::TenGodsEngine;

// ==========================================
// 테스트 보조 함수
// ==========================================

fn analyze(date: &str, time: Option<&str>) -> myeongri_core::TenGodsDistribution {
    let birth = BirthInfo::parse(date, time, "M").unwrap();
    let pillars = PillarCalculator::four_pillars(&birth);
    TenGodsEngine::analyze(pillars.day_master(), &pillars)
}

// ==========================================
// 분류 규칙
// ==========================================

#[test]
fn test_self_is_companion_for_every_stem() {
    for stem in Stem::ALL {
        assert_eq!(TenGodsEngine::classify(stem, stem), TenGod::Companion);
    }
}

#[test]
fn test_ten_categories_partition_the_stems() {
    for day_master in Stem::ALL {
        let mut seen = std::collections::HashSet::new();
        for target in Stem::ALL {
            seen.insert(TenGodsEngine::classify(day_master, target));
        }
        assert_eq!(seen.len(), 10, "분할 실패: 일간 {day_master}");
    }
}

#[test]
fn test_polarity_split_within_same_element() {
    // 甲(목양) 기준: 같은 목이라도 음양에 따라 비견/겁재로 갈린다
    assert_eq!(TenGodsEngine::classify(Stem::Gap, Stem::Gap), TenGod::Companion);
    assert_eq!(TenGodsEngine::classify(Stem::Gap, Stem::Eul), TenGod::RobWealth);
    // 수 → 목 은 인성: 양수 壬 은 편인, 음수 癸 는 정인
    assert_eq!(
        TenGodsEngine::classify(Stem::Gap, Stem::Im),
        TenGod::IndirectResource
    );
    assert_eq!(
        TenGodsEngine::classify(Stem::Gap, Stem::Gye),
        TenGod::DirectResource
    );
}

// ==========================================
// 사주 전체 집계
// ==========================================

#[test]
fn test_fixture_birth_counts() {
    // 甲子 乙亥 甲子 甲子 / 일간 甲
    // 천간: 甲比肩 乙劫財 甲比肩 甲比肩 (일주 포함)
    // 본기: 子→癸 正印, 亥→壬 偏印, 子→癸 正印, 子→癸 正印
    let dist = analyze("1984-11-16", Some("01:00"));
    assert_eq!(dist.get(TenGod::Companion), 3);
    assert_eq!(dist.get(TenGod::RobWealth), 1);
    assert_eq!(dist.get(TenGod::DirectResource), 3);
    assert_eq!(dist.get(TenGod::IndirectResource), 1);
    assert_eq!(dist.total(), 8);
}

#[test]
fn test_unknown_hour_counts_six_tokens() {
    let dist = analyze("1984-11-16", None);
    assert_eq!(dist.get(TenGod::Companion), 2);
    assert_eq!(dist.get(TenGod::DirectResource), 2);
    assert_eq!(dist.total(), 6);
}

#[test]
fn test_serializes_all_hanja_keys_including_zero() {
    let dist = analyze("1984-11-16", Some("01:00"));
    let json = serde_json::to_value(dist).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 10);
    assert_eq!(obj["比肩"], 3);
    assert_eq!(obj["正印"], 3);
    assert_eq!(obj["七殺"], 0);
}
