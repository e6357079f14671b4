// ==========================================
// 사주 명리 계산 코어 - 출생 정보 입력
// ==========================================
// 외부 계약: { birthDate: "YYYY-MM-DD", birthTime: "HH:MM" | null, gender: "M"|"F"|"O" }
// 형식 오류는 즉시 InvalidInput - 틀린 차트를 내보내지 않는다
// 생시 부재는 정상 분기 (시주 = 未知)
// ==========================================

use crate::domain::types::Gender;
use crate::error::{MyeongriError, MyeongriResult};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// 검증된 출생 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInfo {
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    #[serde(rename = "birthTime")]
    pub birth_time: Option<NaiveTime>,
    pub gender: Gender,
}

impl BirthInfo {
    pub fn new(birth_date: NaiveDate, birth_time: Option<NaiveTime>, gender: Gender) -> Self {
        Self {
            birth_date,
            birth_time,
            gender,
        }
    }

    /// 문자열 입력 파싱 + 검증
    ///
    /// # 형식
    /// - birth_date: "YYYY-MM-DD" (엄격)
    /// - birth_time: "HH:MM" 또는 None
    /// - gender: "M" | "F" | "O"
    pub fn parse(
        birth_date: &str,
        birth_time: Option<&str>,
        gender: &str,
    ) -> MyeongriResult<BirthInfo> {
        let date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").map_err(|_| {
            MyeongriError::InvalidInput(format!(
                "생년월일 형식 오류(YYYY-MM-DD 필요): {birth_date}"
            ))
        })?;

        let time = match birth_time {
            Some(raw) => Some(NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| {
                MyeongriError::InvalidInput(format!("생시 형식 오류(HH:MM 필요): {raw}"))
            })?),
            None => None,
        };

        let gender = Gender::parse(gender).ok_or_else(|| {
            MyeongriError::InvalidInput(format!("성별 형식 오류(M/F/O 필요): {gender}"))
        })?;

        Ok(BirthInfo::new(date, time, gender))
    }
}
