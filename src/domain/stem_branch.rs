// ==========================================
// 사주 명리 계산 코어 - 천간/지지/60갑자
// ==========================================
// 천간(天干) 10개, 지지(地支) 12개
// 유효한 짝은 음양(홀짝)이 일치하는 60가지뿐 (120가지 전부가 아님)
// ==========================================

use crate::domain::types::{Element, Polarity};
use crate::error::{MyeongriError, MyeongriResult};
use serde::ser::Serializer;
use serde::Serialize;
use std::fmt;

// ==========================================
// 천간 (Heavenly Stem)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Gap,    // 갑(甲)
    Eul,    // 을(乙)
    Byeong, // 병(丙)
    Jeong,  // 정(丁)
    Mu,     // 무(戊)
    Gi,     // 기(己)
    Gyeong, // 경(庚)
    Sin,    // 신(辛)
    Im,     // 임(壬)
    Gye,    // 계(癸)
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    /// 순환 인덱스에서 천간 (mod 10)
    pub const fn from_index(index: usize) -> Stem {
        Self::ALL[index % 10]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Stem::Gap => "甲",
            Stem::Eul => "乙",
            Stem::Byeong => "丙",
            Stem::Jeong => "丁",
            Stem::Mu => "戊",
            Stem::Gi => "己",
            Stem::Gyeong => "庚",
            Stem::Sin => "辛",
            Stem::Im => "壬",
            Stem::Gye => "癸",
        }
    }

    /// 천간의 오행 (인덱스 2개씩: 甲乙목 丙丁화 戊己토 庚辛금 壬癸수)
    pub const fn element(self) -> Element {
        match self {
            Stem::Gap | Stem::Eul => Element::Wood,
            Stem::Byeong | Stem::Jeong => Element::Fire,
            Stem::Mu | Stem::Gi => Element::Earth,
            Stem::Gyeong | Stem::Sin => Element::Metal,
            Stem::Im | Stem::Gye => Element::Water,
        }
    }

    /// 천간의 음양 (인덱스 홀짝)
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}

// ==========================================
// 지지 (Earthly Branch)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Ja,   // 자(子)
    Chuk, // 축(丑)
    In,   // 인(寅)
    Myo,  // 묘(卯)
    Jin,  // 진(辰)
    Sa,   // 사(巳)
    O,    // 오(午)
    Mi,   // 미(未)
    Sin,  // 신(申)
    Yu,   // 유(酉)
    Sul,  // 술(戌)
    Hae,  // 해(亥)
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Sin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    /// 순환 인덱스에서 지지 (mod 12)
    pub const fn from_index(index: usize) -> Branch {
        Self::ALL[index % 12]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Branch::Ja => "子",
            Branch::Chuk => "丑",
            Branch::In => "寅",
            Branch::Myo => "卯",
            Branch::Jin => "辰",
            Branch::Sa => "巳",
            Branch::O => "午",
            Branch::Mi => "未",
            Branch::Sin => "申",
            Branch::Yu => "酉",
            Branch::Sul => "戌",
            Branch::Hae => "亥",
        }
    }

    /// 지지의 대표 오행
    /// 寅卯목 / 巳午화 / 辰戌丑未토 / 申酉금 / 亥子수
    pub const fn element(self) -> Element {
        match self {
            Branch::In | Branch::Myo => Element::Wood,
            Branch::Sa | Branch::O => Element::Fire,
            Branch::Jin | Branch::Sul | Branch::Chuk | Branch::Mi => Element::Earth,
            Branch::Sin | Branch::Yu => Element::Metal,
            Branch::Hae | Branch::Ja => Element::Water,
        }
    }

    /// 지지의 본기(本氣) 천간
    pub const fn hidden_stem(self) -> Stem {
        match self {
            Branch::Ja => Stem::Gye,
            Branch::Chuk => Stem::Gi,
            Branch::In => Stem::Gap,
            Branch::Myo => Stem::Eul,
            Branch::Jin => Stem::Mu,
            Branch::Sa => Stem::Byeong,
            Branch::O => Stem::Jeong,
            Branch::Mi => Stem::Gi,
            Branch::Sin => Stem::Gyeong,
            Branch::Yu => Stem::Sin,
            Branch::Sul => Stem::Mu,
            Branch::Hae => Stem::Im,
        }
    }

    /// 지지의 음양 (인덱스 홀짝)
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// 충(沖) 상대: 12지에서 6칸 맞은편
    pub const fn clash_partner(self) -> Branch {
        Branch::from_index(self.index() + 6)
    }

    /// 육합(六合) 상대: 子丑 寅亥 卯戌 辰酉 巳申 午未
    pub const fn combination_partner(self) -> Branch {
        match self {
            Branch::Ja => Branch::Chuk,
            Branch::Chuk => Branch::Ja,
            Branch::In => Branch::Hae,
            Branch::Hae => Branch::In,
            Branch::Myo => Branch::Sul,
            Branch::Sul => Branch::Myo,
            Branch::Jin => Branch::Yu,
            Branch::Yu => Branch::Jin,
            Branch::Sa => Branch::Sin,
            Branch::Sin => Branch::Sa,
            Branch::O => Branch::Mi,
            Branch::Mi => Branch::O,
        }
    }

    /// 육해(六害) 상대: 子未 丑午 寅巳 卯辰 申亥 酉戌
    pub const fn harm_partner(self) -> Branch {
        match self {
            Branch::Ja => Branch::Mi,
            Branch::Mi => Branch::Ja,
            Branch::Chuk => Branch::O,
            Branch::O => Branch::Chuk,
            Branch::In => Branch::Sa,
            Branch::Sa => Branch::In,
            Branch::Myo => Branch::Jin,
            Branch::Jin => Branch::Myo,
            Branch::Sin => Branch::Hae,
            Branch::Hae => Branch::Sin,
            Branch::Yu => Branch::Sul,
            Branch::Sul => Branch::Yu,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}

// ==========================================
// 60갑자 (Sexagenary Pair)
// ==========================================
// 불변식: stem.index() ≡ branch.index() (mod 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    stem: Stem,
    branch: Branch,
}

impl StemBranch {
    /// 60갑자 순환 인덱스에서 생성 (0 = 甲子, 59 = 癸亥)
    /// 음수 인덱스도 rem_euclid 로 순환 처리
    pub fn from_index(index: i64) -> StemBranch {
        let i = index.rem_euclid(60) as usize;
        StemBranch {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// 천간/지지 짝에서 생성 - 음양 불일치면 오류
    pub fn from_parts(stem: Stem, branch: Branch) -> MyeongriResult<StemBranch> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(MyeongriError::InvalidStemBranchPair {
                stem: stem.hanja(),
                branch: branch.hanja(),
            });
        }
        Ok(StemBranch { stem, branch })
    }

    /// 내부 전용: 테이블 유도 결과처럼 짝이 보장된 경로에서 사용
    pub(crate) fn compose(stem: Stem, branch: Branch) -> StemBranch {
        debug_assert_eq!(stem.index() % 2, branch.index() % 2);
        StemBranch { stem, branch }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// 60갑자 순환 인덱스 (중국인의 나머지 정리: x≡s mod 10, x≡b mod 12)
    pub fn cycle_index(self) -> usize {
        (6 * self.stem.index() + 55 * self.branch.index()) % 60
    }

    /// 60갑자 순환에서 n칸 전진/후진
    pub fn step(self, n: i64) -> StemBranch {
        StemBranch::from_index(self.cycle_index() as i64 + n)
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl Serialize for StemBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ==========================================
// 시주 (Hour Pillar)
// ==========================================
// 생시 미입력 ↔ Unknown 센티널 (집계에 토큰 0개 기여)
// 직렬화 표기: "未知"
pub const UNKNOWN_HOUR_LABEL: &str = "未知";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourPillar {
    Known(StemBranch),
    Unknown,
}

impl HourPillar {
    pub const fn is_unknown(self) -> bool {
        matches!(self, HourPillar::Unknown)
    }

    pub fn known(self) -> Option<StemBranch> {
        match self {
            HourPillar::Known(sb) => Some(sb),
            HourPillar::Unknown => None,
        }
    }
}

impl fmt::Display for HourPillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourPillar::Known(sb) => write!(f, "{sb}"),
            HourPillar::Unknown => write!(f, "{UNKNOWN_HOUR_LABEL}"),
        }
    }
}

impl Serialize for HourPillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
