// ==========================================
// 사주 명리 계산 코어 - 기초 타입 정의
// ==========================================
// 오행(五行) / 음양(陰陽) / 십성(十神) / 성별 / 기둥 위치
// 모든 타입은 불변 값 타입이며 조회 테이블은 const 로 고정
// ==========================================

use serde::{Deserialize, Serialize};
use serde::ser::Serializer;
use std::fmt;

// ==========================================
// 오행 (Five Elements)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,  // 목(木)
    Fire,  // 화(火)
    Earth, // 토(土)
    Metal, // 금(金)
    Water, // 수(水)
}

impl Element {
    /// 분포 배열 인덱스 순서 (wood → water)
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub const fn index(self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    /// 상생(相生): 내가 생하는 오행
    pub const fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// 상극(相剋): 내가 극하는 오행
    pub const fn overcomes(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Fire => Element::Metal,
            Element::Earth => Element::Water,
            Element::Metal => Element::Wood,
            Element::Water => Element::Fire,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// 음양 (Polarity)
// ==========================================
// 천간/지지 모두 순환 인덱스의 홀짝으로 결정된다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang, // 양(陽)
    Yin,  // 음(陰)
}

impl Polarity {
    /// 순환 인덱스에서 음양 판정 (짝수=양, 홀수=음)
    pub const fn from_index(index: usize) -> Polarity {
        if index % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Polarity::Yang)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Yang => write!(f, "陽"),
            Polarity::Yin => write!(f, "陰"),
        }
    }
}

// ==========================================
// 성별 (Gender)
// ==========================================
// 직렬화 형식: "M" | "F" | "O" (외부 입력 계약과 동일)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    /// 입력 문자열 파싱 ("M"/"F"/"O" 외에는 None)
    pub fn parse(value: &str) -> Option<Gender> {
        match value {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            "O" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
            Gender::Other => write!(f, "O"),
        }
    }
}

// ==========================================
// 십성 (Ten Gods)
// ==========================================
// 일간 대비 (오행 관계 × 음양 일치) = 10 분류
// 직렬화는 한자 표기 (외부 계약: Record<한자, count>)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    Companion,        // 비견(比肩): 같은 오행, 같은 음양
    RobWealth,        // 겁재(劫財): 같은 오행, 다른 음양
    EatingGod,        // 식신(食神): 내가 생하는 것, 같은 음양
    HurtingOfficer,   // 상관(傷官): 내가 생하는 것, 다른 음양
    IndirectWealth,   // 편재(偏財): 내가 극하는 것, 같은 음양
    DirectWealth,     // 정재(正財): 내가 극하는 것, 다른 음양
    SevenKillings,    // 칠살(七殺): 나를 극하는 것, 같은 음양
    DirectOfficer,    // 정관(正官): 나를 극하는 것, 다른 음양
    IndirectResource, // 편인(偏印): 나를 생하는 것, 같은 음양
    DirectResource,   // 정인(正印): 나를 생하는 것, 다른 음양
}

impl TenGod {
    pub const ALL: [TenGod; 10] = [
        TenGod::Companion,
        TenGod::RobWealth,
        TenGod::EatingGod,
        TenGod::HurtingOfficer,
        TenGod::IndirectWealth,
        TenGod::DirectWealth,
        TenGod::SevenKillings,
        TenGod::DirectOfficer,
        TenGod::IndirectResource,
        TenGod::DirectResource,
    ];

    pub const fn index(self) -> usize {
        match self {
            TenGod::Companion => 0,
            TenGod::RobWealth => 1,
            TenGod::EatingGod => 2,
            TenGod::HurtingOfficer => 3,
            TenGod::IndirectWealth => 4,
            TenGod::DirectWealth => 5,
            TenGod::SevenKillings => 6,
            TenGod::DirectOfficer => 7,
            TenGod::IndirectResource => 8,
            TenGod::DirectResource => 9,
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            TenGod::Companion => "比肩",
            TenGod::RobWealth => "劫財",
            TenGod::EatingGod => "食神",
            TenGod::HurtingOfficer => "傷官",
            TenGod::IndirectWealth => "偏財",
            TenGod::DirectWealth => "正財",
            TenGod::SevenKillings => "七殺",
            TenGod::DirectOfficer => "正官",
            TenGod::IndirectResource => "偏印",
            TenGod::DirectResource => "正印",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            TenGod::Companion => "비견",
            TenGod::RobWealth => "겁재",
            TenGod::EatingGod => "식신",
            TenGod::HurtingOfficer => "상관",
            TenGod::IndirectWealth => "편재",
            TenGod::DirectWealth => "정재",
            TenGod::SevenKillings => "칠살",
            TenGod::DirectOfficer => "정관",
            TenGod::IndirectResource => "편인",
            TenGod::DirectResource => "정인",
        }
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl Serialize for TenGod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}

// ==========================================
// 사주 기둥 위치 (Pillar Position)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            PillarPosition::Year => "year",
            PillarPosition::Month => "month",
            PillarPosition::Day => "day",
            PillarPosition::Hour => "hour",
        }
    }
}

impl fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// 형충회합 관계 종류 (Relation Kind)
// ==========================================
// 직렬화 표기는 원 계약과 동일: "충(沖)" 등
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Clash,       // 충(沖)
    Combination, // 합(合)
    Punishment,  // 형(刑)
    Harm,        // 해(害)
}

impl RelationKind {
    pub const fn label(self) -> &'static str {
        match self {
            RelationKind::Clash => "충(沖)",
            RelationKind::Combination => "합(合)",
            RelationKind::Punishment => "형(刑)",
            RelationKind::Harm => "해(害)",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for RelationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
