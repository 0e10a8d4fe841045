//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 요청 본문과 응답 본문을 정의합니다.
//!
//! - [`auth`] - `POST /auth-telegram`
//! - [`payments`] - `POST /create-invoice`

pub mod auth;
pub mod payments;

pub use auth::*;
pub use payments::*;
