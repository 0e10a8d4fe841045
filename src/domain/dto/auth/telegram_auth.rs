//! 텔레그램 인증 요청/응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserRow;

/// `POST /auth-telegram` 요청 본문
///
/// `initData`가 빠진 경우는 빈 문자열과 동일하게 취급합니다.
#[derive(Debug, Default, Deserialize)]
pub struct TelegramAuthRequest {
    #[serde(rename = "initData", default)]
    pub init_data: Option<String>,
}

/// `POST /auth-telegram` 성공 응답
#[derive(Debug, Serialize)]
pub struct TelegramAuthResponse {
    /// 저장소가 돌려준 사용자 행
    pub user: UserRow,
    /// 세션 JWT
    pub token: String,
}
