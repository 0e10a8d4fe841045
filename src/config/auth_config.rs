//! # Authentication Configuration Module
//!
//! 텔레그램 봇 토큰과 JWT 서명 키 등 인증 관련 설정을 정의하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export TELEGRAM_BOT_TOKEN="123456:ABC-DEF..."
//! export JWT_SECRET="your-supabase-jwt-secret"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export TELEGRAM_AUTH_MAX_AGE_SECS="86400"   # 0 이면 auth_date 검사 비활성화
//! export TELEGRAM_API_BASE_URL="https://api.telegram.org"
//! ```
//!
//! 비밀값은 [`Secret`]으로 감싸져 `Debug` 출력과 로그에 노출되지 않습니다.

use std::fmt;

use chrono::Duration;

/// 로그와 `Debug` 출력에서 값을 가리는 비밀 문자열
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 실제 값을 반환합니다. 서명/HTTP 헤더 구성 외에는 사용하지 마세요.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// 텔레그램 봇 관련 설정
#[derive(Debug, Clone, PartialEq)]
pub struct TelegramConfig {
    /// BotFather 에서 발급받은 봇 토큰. `initData` 서명 키 유도에 사용됩니다.
    pub bot_token: Secret,
    /// Bot API 베이스 URL
    pub api_base_url: String,
    /// `auth_date` 허용 기간. `None` 이면 검사하지 않습니다.
    pub auth_max_age: Option<Duration>,
}

/// 세션 JWT 설정
///
/// 서명 키는 다운스트림(Supabase RLS)과 공유하는 HS256 비밀키입니다.
/// 설정되지 않은 경우 서버가 시작되지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct JwtConfig {
    pub secret: Secret,
    /// 토큰 유효 기간
    pub expiration: Duration,
}

impl JwtConfig {
    /// 세션 토큰 유효 기간: 7일
    pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            expiration: Duration::seconds(Self::SESSION_TTL_SECS),
        }
    }
}
