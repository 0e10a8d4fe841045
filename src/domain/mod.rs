//! 도메인 계층 모듈
//!
//! 텔레그램 인증 서비스의 도메인 타입들을 정의합니다.
//!
//! # Modules
//!
//! - [`models`] - 텔레그램 사용자, 세션 클레임, 인증된 사용자 모델
//! - [`entities`] - 사용자 저장소에 기록되는 엔티티
//! - [`dto`] - HTTP 요청/응답 데이터 전송 객체

pub mod entities;
pub mod dto;
pub mod models;
