// ==========================================
// 사주 명리 계산 코어 - 사주 기둥 계산 엔진
// ==========================================
// 직책: 년주/월주/일주/시주 유도의 순수 로직
// 원칙: 무상태, 무부작용, 무 I/O - 고정 기준점 + 순환 산술
// ==========================================

use crate::domain::birth::BirthInfo;
use crate::domain::chart::FourPillars;
use crate::domain::stem_branch::{Branch, HourPillar, Stem, StemBranch};
use crate::engine::solar_terms;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

// ==========================================
// 고정 기준점
// ==========================================

/// 년주 기준: 1900년 = 庚子년 (60갑자 36번)
const YEAR_ANCHOR: i32 = 1900;
const YEAR_ANCHOR_CYCLE_INDEX: i64 = 36;

/// 일주 기준일: 1924-02-05 = 甲子일 (만세력 기준 epoch)
/// 서력 기원일 수(proleptic Gregorian, 0001-01-01 = 1)로 고정
/// 주의: 이 기준이 틀리면 모든 일주가 일괄로 어긋난다
const DAY_EPOCH_DAYS_FROM_CE: i64 = 702_396;

/// 오호둔(五虎遁): 년간별 寅월의 시작 천간
/// 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲 (년간 인덱스 mod 5)
const FIRST_MONTH_STEM: [Stem; 5] = [Stem::Byeong, Stem::Mu, Stem::Gyeong, Stem::Im, Stem::Gap];

/// 오서둔(五鼠遁): 일간별 子시의 시작 천간
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬 (일간 인덱스 mod 5)
const FIRST_HOUR_STEM: [Stem; 5] = [Stem::Gap, Stem::Byeong, Stem::Mu, Stem::Gyeong, Stem::Im];

/// 기준 천간에서 n칸 전진 (월간/시간 공용 보간)
///
/// 오호둔·오서둔은 (기준표, 지지 창) 만 다른 동일 구조의 계단식 알고리즘이다
fn stepped_stem(anchor: Stem, steps: usize) -> Stem {
    Stem::from_index(anchor.index() + steps)
}

// ==========================================
// PillarCalculator - 기둥 계산 (순수 함수)
// ==========================================
pub struct PillarCalculator;

impl PillarCalculator {
    /// 년주 계산
    ///
    /// 기준: 1900년 = 庚子년. 60년 주기: year_pillar(y + 60) == year_pillar(y)
    pub fn year_pillar(year: i32) -> StemBranch {
        StemBranch::from_index(YEAR_ANCHOR_CYCLE_INDEX + i64::from(year - YEAR_ANCHOR))
    }

    /// 일주 계산
    ///
    /// 기준일(1924-02-05 = 甲子)로부터의 경과 일수만의 순수 함수
    /// 기준일 이전 날짜도 rem_euclid 순환으로 처리
    pub fn day_pillar(date: NaiveDate) -> StemBranch {
        let days = i64::from(date.num_days_from_ce()) - DAY_EPOCH_DAYS_FROM_CE;
        StemBranch::from_index(days)
    }

    /// 월주 계산 (절기 기준)
    ///
    /// 1) 절입일 경계로 월건 판정 (달력 월 함수가 아님)
    /// 2) 오호둔으로 년간에서 寅월 시작 천간을 얻고, 절월 순서대로 1칸씩 전진
    pub fn month_pillar(date: NaiveDate) -> StemBranch {
        let branch = solar_terms::month_branch_for(date.month(), date.day());
        let year_stem = Self::year_pillar(date.year()).stem();
        let anchor = FIRST_MONTH_STEM[year_stem.index() % 5];
        // 寅월부터의 절월 순서: 寅0 卯1 ... 丑11
        let steps = (branch.index() + 12 - Branch::In.index()) % 12;
        StemBranch::compose(stepped_stem(anchor, steps), branch)
    }

    /// 시진(時辰) 지지 판정
    ///
    /// 2시간 창 12개. 23시/0시/1시는 子시 창
    /// 미해결 쟁점: 01:00 이 子시인지 丑시인지 원 기준표들이 상충한다.
    /// 현재는 고정 검증 차트(1984-11-16 01:00 → 甲子시)와 일치하는 子시 판정.
    pub fn hour_branch(hour: u32) -> Branch {
        if hour == 23 || hour <= 1 {
            Branch::Ja
        } else {
            Branch::from_index(((hour + 1) / 2) as usize)
        }
    }

    /// 시주 계산 (일간 필요)
    ///
    /// 오서둔으로 일간에서 子시 시작 천간을 얻고, 시진마다 1칸씩 전진
    pub fn hour_pillar(day_master: Stem, time: NaiveTime) -> StemBranch {
        let branch = Self::hour_branch(time.hour());
        let anchor = FIRST_HOUR_STEM[day_master.index() % 5];
        StemBranch::compose(stepped_stem(anchor, branch.index()), branch)
    }

    /// 사주 전체 유도
    ///
    /// 생시 미입력이면 시주는 Unknown 센티널 (오류 아님)
    pub fn four_pillars(birth: &BirthInfo) -> FourPillars {
        let year = Self::year_pillar(birth.birth_date.year());
        let month = Self::month_pillar(birth.birth_date);
        let day = Self::day_pillar(birth.birth_date);
        let hour = match birth.birth_time {
            Some(time) => HourPillar::Known(Self::hour_pillar(day.stem(), time)),
            None => HourPillar::Unknown,
        };
        FourPillars {
            year,
            month,
            day,
            hour,
        }
    }
}
