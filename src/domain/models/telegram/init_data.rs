//! 텔레그램 `initData` 검증 결과 모델
//!
//! `user` 필드는 JSON 문자열로 전달되며, 고정된 형태의 [`TelegramUser`]로 파싱합니다.
//! `id`만 필수이고 나머지 필드는 주어진 그대로 전달합니다.

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_lenient_string;

/// `initData.user`에 담긴 텔레그램 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelegramUser {
    /// 텔레그램 사용자 ID
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub language_code: Option<String>,
}

/// 서명 검증을 통과한 `initData`
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedInitData {
    pub user: TelegramUser,
    /// 텔레그램이 데이터를 서명한 시각 (Unix timestamp)
    pub auth_date: Option<i64>,
    pub query_id: Option<String>,
}
