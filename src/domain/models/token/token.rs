//! 세션 JWT 클레임 구조체
//!
//! Supabase RLS가 요구하는 `aud`/`sub`/`role` 규약을 따르는 클레임과,
//! 발급에 필요한 검증된 신원 정보를 정의합니다.
use serde::{Deserialize, Serialize};

use crate::domain::models::telegram::TelegramUser;

/// 토큰 발급 대상이 되는 검증된 신원
#[derive(Debug, Clone, PartialEq)]
pub struct SessionIdentity {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl From<&TelegramUser> for SessionIdentity {
    fn from(user: &TelegramUser) -> Self {
        Self {
            telegram_id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
        }
    }
}

/// JWT 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `aud`: `"authenticated"`
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp, 7일 간격)
/// - `sub`: 텔레그램 사용자 ID 문자열
/// - `email`: `"<id>@telegram.user"` 형태의 합성 식별자
/// - `role`: `"authenticated"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    pub sub: String,
    pub email: String,
    pub role: String,
    pub app_metadata: AppMetadata,
    pub user_metadata: UserMetadata,
}

/// 인증 프로바이더 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppMetadata {
    pub provider: String,
    pub providers: Vec<String>,
}

/// 사용자 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

/// 서명된 토큰과 만료 시각
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}
