//! 에러 타입 모듈
//!
//! [`errors::AppError`]를 중심으로 한 에러 분류와 HTTP 응답 변환을 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
