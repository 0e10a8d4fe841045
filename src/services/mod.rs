//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 [`ServiceContainer`](crate::core::ServiceContainer)에서 한 번 생성되어
//! `web::Data`로 핸들러에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TelegramAuthService, payments::InvoiceService};
//!
//! async fn handler(auth: web::Data<TelegramAuthService>) -> impl Responder { ... }
//! ```

pub mod auth;
pub mod payments;
