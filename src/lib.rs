//! 텔레그램 미니앱 인증 서비스
//!
//! 텔레그램 미니앱이 전달한 `initData`를 봇 토큰으로 검증하고,
//! 사용자를 Supabase `users` 테이블에 upsert 한 뒤,
//! Supabase RLS가 신뢰하는 세션 JWT를 발급합니다.
//!
//! # Features
//!
//! - **initData 검증**: HMAC-SHA256 서명, 선택적 `auth_date` 만료 검사
//! - **사용자 upsert**: Supabase PostgREST, 텔레그램 ID 기준 병합
//! - **세션 JWT**: HS256, 7일 유효, `authenticated` 역할
//! - **Stars 결제**: 인증된 사용자를 위한 `createInvoiceLink` 프록시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth-telegram, /create-invoice, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 토큰 발급, 결제
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Supabase     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use telegram_auth_service::config::AppConfig;
//! use telegram_auth_service::core::ServiceContainer;
//!
//! let config = AppConfig::from_env()?;
//! let container = ServiceContainer::build(&config)?;
//! let response = container.telegram_auth.authenticate(init_data).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
mod test_support;
