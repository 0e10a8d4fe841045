//! 결제 서비스 모듈
//!
//! Telegram Stars(XTR) 인보이스 링크 생성을 담당합니다.

pub mod invoice_service;

pub use invoice_service::*;
