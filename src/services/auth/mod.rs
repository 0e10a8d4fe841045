//! 인증 서비스 모듈
//!
//! 텔레그램 `initData` 검증과 세션 JWT 발급을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - `initData` HMAC-SHA256 서명 검증
//! - Supabase 호환 세션 JWT 발급/검증
//! - 검증 → upsert → 발급 흐름 조율
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TelegramAuthService;
//!
//! let response = auth_service.authenticate(init_data).await?;
//! println!("token: {}", response.token);
//! ```

pub mod init_data_verifier;
pub mod telegram_auth_service;
pub mod token_service;

pub use init_data_verifier::*;
pub use telegram_auth_service::*;
pub use token_service::*;
