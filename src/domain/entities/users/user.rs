//! User Entity
//!
//! `users` 테이블의 행은 외부 저장소가 소유합니다. 이 서비스는 upsert 필드만
//! 만들어 보내고, 돌려받은 전체 행은 해석하지 않고 응답에 그대로 싣습니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::telegram::TelegramUser;

/// 저장소가 돌려준 전체 사용자 행
pub type UserRow = serde_json::Value;

/// 텔레그램 ID를 기본 키로 하는 upsert 레코드
///
/// 값이 없는 선택 필드는 직렬화에서 제외되어 기존 컬럼 값을 덮어쓰지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpsert {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserUpsert {
    pub fn from_telegram(user: &TelegramUser, now: DateTime<Utc>) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            photo_url: user.photo_url.clone(),
            language_code: user.language_code.clone(),
            updated_at: now,
        }
    }
}
