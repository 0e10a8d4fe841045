//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - 세션 JWT(Bearer) 검증
//! - `sub` 클레임을 텔레그램 ID로 해석
//! - 사용자 정보를 request extension에 저장
//! - 역할(`role` 클레임) 기반 접근 제어
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::resource("/create-invoice")
//!         .wrap(AuthMiddleware::required_with_roles(vec!["authenticated"]))
//!         .route(web::post().to(handlers::payments::create_invoice)),
//! );
//! ```
//!
//! 미들웨어는 `web::Data<TokenService>`가 앱에 등록되어 있어야 동작합니다.
//!
//! ### 2. CORS ([`configure_cors`])
//! - 모든 오리진 허용, 와일드카드 응답
//! - `authorization, x-client-info, apikey, content-type` 헤더 허용

pub mod auth_middleware;
pub mod cors;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use cors::{configure_cors, ALLOWED_HEADERS};
