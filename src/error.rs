// ==========================================
// 사주 명리 계산 코어 - 오류 타입
// ==========================================
// 원칙: 잘못된 차트를 조용히 내보내느니 즉시 실패한다
// 생시 부재는 오류가 아니다 (시주 = 미지 센티널)
// ==========================================

use thiserror::Error;

/// 계산 코어 오류 타입
#[derive(Error, Debug)]
pub enum MyeongriError {
    /// 입력 형식 오류 (생년월일/생시/성별)
    #[error("무효 입력: {0}")]
    InvalidInput(String),

    /// 60갑자 음양 짝 위반 (천간과 지지의 홀짝이 다름)
    #[error("60갑자 짝 위반: 천간={stem} 지지={branch}")]
    InvalidStemBranchPair { stem: &'static str, branch: &'static str },

    /// 규칙/템플릿 설정 파싱 실패
    #[error("설정 파싱 실패: {0}")]
    Config(#[from] serde_json::Error),
}

/// 코어 공용 Result 타입
pub type MyeongriResult<T> = Result<T, MyeongriError>;
