use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 세션 JWT에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 텔레그램 사용자 ID (`sub`)
    pub telegram_id: i64,

    /// 토큰의 `role` 클레임
    pub role: String,
}

/// ActixWeb FromRequest trait 구현
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 request extension에
/// 저장한 값을 꺼냅니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "request is not authenticated".to_string(),
            )
            .into())),
        }
    }
}
