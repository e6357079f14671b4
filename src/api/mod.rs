// ==========================================
// 사주 명리 계산 코어 - API 층
// ==========================================
// 직책: 엔진 계층을 묶은 외부 호출 진입점
// ==========================================

pub mod fortune;
pub mod myeongri;

pub use fortune::FortuneApi;
pub use myeongri::MyeongriApi;
