//! 엔티티 모듈
//!
//! 외부 사용자 저장소(`users` 테이블)에 기록되는 레코드를 정의합니다.

pub mod users;
