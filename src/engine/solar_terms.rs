// ==========================================
// 사주 명리 계산 코어 - 절기(節氣) 테이블
// ==========================================
// 24절기의 근사 날짜 (태양 황경 기반 정밀 계산이 아닌 고정 월/일)
// 월주의 월건(月建)은 달력 월이 아니라 절입일 경계로 바뀐다
// ==========================================

use crate::domain::stem_branch::Branch;

/// 절기 1건: 이름 + 근사 절입일 + 해당 월건
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTerm {
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
    pub month_branch: Branch,
}

/// 24절기 (입춘부터, 절기 순서대로)
/// 절(節) 2개마다 월건 1개 (입춘·우수 = 寅월, 경칩·춘분 = 卯월, ...)
pub const SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm { name: "입춘", month: 2, day: 4, month_branch: Branch::In },
    SolarTerm { name: "우수", month: 2, day: 19, month_branch: Branch::In },
    SolarTerm { name: "경칩", month: 3, day: 6, month_branch: Branch::Myo },
    SolarTerm { name: "춘분", month: 3, day: 21, month_branch: Branch::Myo },
    SolarTerm { name: "청명", month: 4, day: 5, month_branch: Branch::Jin },
    SolarTerm { name: "곡우", month: 4, day: 20, month_branch: Branch::Jin },
    SolarTerm { name: "입하", month: 5, day: 6, month_branch: Branch::Sa },
    SolarTerm { name: "소만", month: 5, day: 21, month_branch: Branch::Sa },
    SolarTerm { name: "망종", month: 6, day: 6, month_branch: Branch::O },
    SolarTerm { name: "하지", month: 6, day: 21, month_branch: Branch::O },
    SolarTerm { name: "소서", month: 7, day: 7, month_branch: Branch::Mi },
    SolarTerm { name: "대서", month: 7, day: 23, month_branch: Branch::Mi },
    SolarTerm { name: "입추", month: 8, day: 8, month_branch: Branch::Sin },
    SolarTerm { name: "처서", month: 8, day: 23, month_branch: Branch::Sin },
    SolarTerm { name: "백로", month: 9, day: 8, month_branch: Branch::Yu },
    SolarTerm { name: "추분", month: 9, day: 23, month_branch: Branch::Yu },
    SolarTerm { name: "한로", month: 10, day: 8, month_branch: Branch::Sul },
    SolarTerm { name: "상강", month: 10, day: 23, month_branch: Branch::Sul },
    SolarTerm { name: "입동", month: 11, day: 7, month_branch: Branch::Hae },
    SolarTerm { name: "소설", month: 11, day: 22, month_branch: Branch::Hae },
    SolarTerm { name: "대설", month: 12, day: 7, month_branch: Branch::Ja },
    SolarTerm { name: "동지", month: 12, day: 22, month_branch: Branch::Ja },
    SolarTerm { name: "소한", month: 1, day: 6, month_branch: Branch::Chuk },
    SolarTerm { name: "대한", month: 1, day: 20, month_branch: Branch::Chuk },
];

/// 월건 경계 12개 (절월 시작일), 달력 순 정렬
/// 소한(1/6) 丑 → 입춘(2/4) 寅 → ... → 대설(12/7) 子
const MONTH_BOUNDARIES: [(u32, u32, Branch); 12] = [
    (1, 6, Branch::Chuk),
    (2, 4, Branch::In),
    (3, 6, Branch::Myo),
    (4, 5, Branch::Jin),
    (5, 6, Branch::Sa),
    (6, 6, Branch::O),
    (7, 7, Branch::Mi),
    (8, 8, Branch::Sin),
    (9, 8, Branch::Yu),
    (10, 8, Branch::Sul),
    (11, 7, Branch::Hae),
    (12, 7, Branch::Ja),
];

/// 절기 기준 월건 판정
///
/// 절입일 이전 날짜는 직전 절월에 속한다
/// 예: 11/16 ≥ 입동(11/7) → 亥월, 11/5 < 입동 → 戌월
pub fn month_branch_for(month: u32, day: u32) -> Branch {
    for &(m, d, branch) in MONTH_BOUNDARIES.iter().rev() {
        if (month, day) >= (m, d) {
            return branch;
        }
    }
    // 1/1 ~ 1/5: 소한 이전 = 대설(子월) 구간
    Branch::Ja
}

/// 주어진 날짜가 속한 절기 (가장 최근 절입일 기준)
pub fn current_term(month: u32, day: u32) -> &'static SolarTerm {
    let mut best: Option<&'static SolarTerm> = None;
    for term in SOLAR_TERMS.iter() {
        if (term.month, term.day) <= (month, day) {
            match best {
                Some(b) if (term.month, term.day) <= (b.month, b.day) => {}
                _ => best = Some(term),
            }
        }
    }
    // 1/1 ~ 1/5: 전년 동지 구간
    best.unwrap_or(&SOLAR_TERMS[21])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_branch_at_boundary() {
        // 입동(11/7) 경계
        assert_eq!(month_branch_for(11, 7), Branch::Hae);
        assert_eq!(month_branch_for(11, 6), Branch::Sul);
        assert_eq!(month_branch_for(11, 16), Branch::Hae);
    }

    #[test]
    fn test_month_branch_year_wrap() {
        // 소한(1/6) 이전은 전년 대설 구간
        assert_eq!(month_branch_for(1, 5), Branch::Ja);
        assert_eq!(month_branch_for(1, 6), Branch::Chuk);
        assert_eq!(month_branch_for(12, 31), Branch::Ja);
        assert_eq!(month_branch_for(2, 3), Branch::Chuk);
        assert_eq!(month_branch_for(2, 4), Branch::In);
    }

    #[test]
    fn test_terms_cover_twelve_branches() {
        let mut branches: Vec<Branch> = SOLAR_TERMS.iter().map(|t| t.month_branch).collect();
        branches.dedup();
        assert_eq!(branches.len(), 12);
    }

    #[test]
    fn test_current_term() {
        assert_eq!(current_term(11, 16).name, "입동");
        assert_eq!(current_term(11, 22).name, "소설");
        assert_eq!(current_term(1, 3).name, "동지");
    }
}
