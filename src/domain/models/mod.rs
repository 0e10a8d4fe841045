//! 도메인 모델 모듈
//!
//! - [`telegram`] - `initData`에서 추출한 텔레그램 사용자
//! - [`token`] - 세션 JWT 클레임
//! - [`auth`] - 요청 단위 인증 정보

pub mod auth;
pub mod telegram;
pub mod token;
