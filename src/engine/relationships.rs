// ==========================================
// 사주 명리 계산 코어 - 형충회합(刑沖會合) 분석 엔진
// ==========================================
// 지지만 본다 (천간 무시, 未知 시주 무시)
// 기둥 쌍마다 최대 1건 (무순서 쌍 스캔)
// 수치 점수 없음 - 관계 기술만 (해석은 하류 협력자 소관)
// ==========================================

use crate::domain::chart::{BranchRelation, FourPillars, RelationshipSet};
use crate::domain::stem_branch::Branch;
use crate::domain::types::{PillarPosition, RelationKind};

/// 삼형(三刑) 그룹: 寅巳申(무은지형), 丑戌未(시세지형), 子卯(무례지형)
/// 그룹 중 서로 다른 지지가 2개 이상 모이면 성립
const PUNISHMENT_GROUPS: [&[Branch]; 3] = [
    &[Branch::In, Branch::Sa, Branch::Sin],
    &[Branch::Chuk, Branch::Sul, Branch::Mi],
    &[Branch::Ja, Branch::Myo],
];

/// 자형(自刑): 같은 지지가 2개 이상이면 성립
const SELF_PUNISHMENTS: [Branch; 4] = [Branch::Jin, Branch::O, Branch::Yu, Branch::Hae];

pub struct RelationshipEngine;

impl RelationshipEngine {
    /// 사주 지지 간 관계 전체 분석
    pub fn analyze(pillars: &FourPillars) -> RelationshipSet {
        let present: Vec<(PillarPosition, Branch)> = pillars
            .present()
            .into_iter()
            .map(|(pos, sb)| (pos, sb.branch()))
            .collect();

        RelationshipSet {
            conflicts: Self::detect_pairs(&present, RelationKind::Clash, Branch::clash_partner),
            combinations: Self::detect_pairs(
                &present,
                RelationKind::Combination,
                Branch::combination_partner,
            ),
            punishments: Self::detect_punishments(&present),
            harms: Self::detect_pairs(&present, RelationKind::Harm, Branch::harm_partner),
        }
    }

    /// 고정 상대표 기반 쌍 관계 탐지 (충/합/해 공용)
    ///
    /// 무순서 쌍(i < j)마다 1건만 보고한다
    fn detect_pairs(
        present: &[(PillarPosition, Branch)],
        kind: RelationKind,
        partner: fn(Branch) -> Branch,
    ) -> Vec<BranchRelation> {
        let mut out = Vec::new();
        for i in 0..present.len() {
            for j in (i + 1)..present.len() {
                let (pos_i, branch_i) = present[i];
                let (pos_j, branch_j) = present[j];
                if partner(branch_i) == branch_j {
                    out.push(BranchRelation {
                        kind,
                        positions: vec![pos_i, pos_j],
                        branches: vec![branch_i, branch_j],
                    });
                }
            }
        }
        out
    }

    /// 형(刑) 탐지: 삼형 그룹 + 자형
    ///
    /// 표에 해당이 없으면 빈 목록 (오류 아님)
    fn detect_punishments(present: &[(PillarPosition, Branch)]) -> Vec<BranchRelation> {
        let mut out = Vec::new();

        for group in PUNISHMENT_GROUPS {
            let hits: Vec<(PillarPosition, Branch)> = present
                .iter()
                .copied()
                .filter(|(_, b)| group.contains(b))
                .collect();
            let mut distinct: Vec<Branch> = hits.iter().map(|&(_, b)| b).collect();
            distinct.sort_by_key(|b| b.index());
            distinct.dedup();
            if distinct.len() >= 2 {
                out.push(BranchRelation {
                    kind: RelationKind::Punishment,
                    positions: hits.iter().map(|&(p, _)| p).collect(),
                    branches: hits.iter().map(|&(_, b)| b).collect(),
                });
            }
        }

        for branch in SELF_PUNISHMENTS {
            let hits: Vec<PillarPosition> = present
                .iter()
                .filter(|&&(_, b)| b == branch)
                .map(|&(p, _)| p)
                .collect();
            if hits.len() >= 2 {
                out.push(BranchRelation {
                    kind: RelationKind::Punishment,
                    branches: vec![branch; hits.len()],
                    positions: hits,
                });
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stem_branch::{HourPillar, StemBranch};

    fn pillars_of(indices: [i64; 3], hour: Option<i64>) -> FourPillars {
        FourPillars {
            year: StemBranch::from_index(indices[0]),
            month: StemBranch::from_index(indices[1]),
            day: StemBranch::from_index(indices[2]),
            hour: match hour {
                Some(i) => HourPillar::Known(StemBranch::from_index(i)),
                None => HourPillar::Unknown,
            },
        }
    }

    #[test]
    fn test_clash_partner_is_six_apart() {
        for branch in Branch::ALL {
            let partner = branch.clash_partner();
            assert_eq!((branch.index() + 6) % 12, partner.index());
            assert_eq!(partner.clash_partner(), branch);
        }
    }

    #[test]
    fn test_single_clash_reported_once() {
        // 甲子(0) 년주 + 庚午(6) 월주 → 子午충 1건
        let pillars = pillars_of([0, 6, 50], None);
        let rels = RelationshipEngine::analyze(&pillars);
        assert_eq!(rels.conflicts.len(), 1);
        assert_eq!(
            rels.conflicts[0].positions,
            vec![PillarPosition::Year, PillarPosition::Month]
        );
        assert_eq!(rels.conflicts[0].branches, vec![Branch::Ja, Branch::O]);
    }

    #[test]
    fn test_no_relations_when_tables_miss() {
        // 甲子 乙亥 甲子: 충/합/해 없음, 子는 자형 지지가 아님
        let pillars = pillars_of([0, 11, 0], None);
        let rels = RelationshipEngine::analyze(&pillars);
        assert!(rels.is_empty());
    }

    #[test]
    fn test_self_punishment_needs_duplicate() {
        // 己亥(35) 년주 + 乙亥(11) 월주 → 亥亥 자형
        let pillars = pillars_of([35, 11, 0], None);
        let rels = RelationshipEngine::analyze(&pillars);
        assert_eq!(rels.punishments.len(), 1);
        assert_eq!(rels.punishments[0].branches, vec![Branch::Hae, Branch::Hae]);
    }

    #[test]
    fn test_partial_triple_punishment() {
        // 寅(甲寅=50) + 巳(乙巳=41) → 寅巳申 삼형의 부분 성립 (그리고 寅巳 육해)
        let pillars = pillars_of([50, 41, 0], None);
        let rels = RelationshipEngine::analyze(&pillars);
        assert_eq!(rels.punishments.len(), 1);
        assert_eq!(rels.harms.len(), 1);
    }
}
