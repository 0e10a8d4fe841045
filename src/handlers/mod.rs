//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 파싱하고, `web::Data`로 주입된 서비스를 호출한 뒤,
//! 결과를 JSON 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Telegram Mini App WebView)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 토큰 발급, 결제                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - Supabase users upsert          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`는 `ResponseError` 구현을 통해 `{ "error": ... }` 응답으로 변환됩니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 텔레그램 로그인
//!   - 로그인 (`POST /auth-telegram`)
//!   - Preflight (`OPTIONS /auth-telegram`)
//!
//! - **`payments`**: Telegram Stars 결제
//!   - 인보이스 링크 생성 (`POST /create-invoice`, Bearer 필요)

pub mod auth;
pub mod payments;
