// ==========================================
// 사주 명리 계산 코어 - 오행 분포 엔진
// ==========================================
// 존재하는 기둥마다 천간 오행 + 지지 대표 오행 = 최대 8개 토큰
// 백분율 합은 반드시 100 (반올림 잔차는 최대 칸에 흡수)
// ==========================================

use crate::domain::chart::{FiveElementDistribution, FourPillars};

pub struct FiveElementEngine;

impl FiveElementEngine {
    /// 사주에서 오행 분포 계산
    ///
    /// 시주가 未知면 3개 기둥 6개 토큰만 집계한다
    pub fn distribution(pillars: &FourPillars) -> FiveElementDistribution {
        let mut counts = [0u32; 5];
        for (_, pillar) in pillars.present() {
            counts[pillar.stem().element().index()] += 1;
            counts[pillar.branch().element().index()] += 1;
        }
        Self::normalize(&counts)
    }

    /// 토큰 수 → 백분율 정규화
    ///
    /// round(count/total × 100) 후 합이 100이 아니면
    /// 현재 최대 칸에 잔차를 더한다 (동률이면 wood→water 순서의 뒤쪽 칸)
    pub fn normalize(counts: &[u32; 5]) -> FiveElementDistribution {
        let total: u32 = counts.iter().sum();
        if total == 0 {
            // 집계할 기둥이 없으면 균등 분포 (년주/일주는 항상 계산되므로 실제로는 도달 불가)
            return FiveElementDistribution::uniform();
        }

        let mut pct = [0i32; 5];
        for (i, &count) in counts.iter().enumerate() {
            pct[i] = ((f64::from(count) / f64::from(total)) * 100.0).round() as i32;
        }

        let diff = 100 - pct.iter().sum::<i32>();
        if diff != 0 {
            let mut max_i = 0;
            for i in 1..5 {
                if pct[i] >= pct[max_i] {
                    max_i = i;
                }
            }
            pct[max_i] += diff;
        }

        FiveElementDistribution {
            wood: pct[0] as u8,
            fire: pct[1] as u8,
            earth: pct[2] as u8,
            metal: pct[3] as u8,
            water: pct[4] as u8,
        }
    }
}
