//! Authentication HTTP Handlers
//!
//! 텔레그램 미니앱 로그인 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - `POST /auth-telegram` - `initData` 검증 후 사용자 행과 세션 JWT 반환
//! - `OPTIONS /auth-telegram` - 브라우저 preflight 응답
use actix_web::{http::header, options, post, web, HttpResponse};
use crate::domain::dto::auth::TelegramAuthRequest;
use crate::errors::AppError;
use crate::middlewares::ALLOWED_HEADERS;
use crate::services::auth::TelegramAuthService;

/// 텔레그램 로그인 핸들러
///
/// 본문은 `Content-Type`과 무관하게 JSON으로 해석합니다. 본문이 없거나
/// JSON이 아니거나 `initData`가 빠진 경우 모두 `MissingInput`으로 처리됩니다.
///
/// # Endpoint
/// `POST /auth-telegram`
///
/// # Response
///
/// ```json
/// { "user": { "id": 42, "...": "..." }, "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
#[post("/auth-telegram")]
pub async fn telegram_auth(
    auth_service: web::Data<TelegramAuthService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let init_data = serde_json::from_slice::<TelegramAuthRequest>(&body)
        .ok()
        .and_then(|request| request.init_data)
        .unwrap_or_default();

    let response = auth_service.authenticate(&init_data).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Preflight 핸들러
///
/// # Endpoint
/// `OPTIONS /auth-telegram`
#[options("/auth-telegram")]
pub async fn telegram_auth_preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .body("ok")
}
