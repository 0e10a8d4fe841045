//! # 텔레그램 인증 서비스 구현
//!
//! 미니앱이 전달한 `initData`를 검증하고, 사용자를 upsert 한 뒤 세션 JWT를
//! 발급하는 인증 흐름 전체를 조율합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     TelegramAuthService                         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │ InitDataVerifier│  │    UserStore    │  │  TokenService   │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Parse pairs   │─▶│ • Upsert by id  │─▶│ • HS256 sign    │  │
//! │  │ • HMAC-SHA256   │  │ • Return row    │  │ • 7 day expiry  │  │
//! │  │ • Parse user    │  │                 │  │                 │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! 각 단계는 이전 단계가 성공했을 때만 실행됩니다. 검증에 실패하면 저장소는
//! 호출되지 않고, 저장에 실패하면 토큰은 발급되지 않습니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::dto::auth::TelegramAuthResponse;
use crate::domain::entities::users::UserUpsert;
use crate::domain::models::token::SessionIdentity;
use crate::errors::AppResult;
use crate::repositories::users::UserStore;
use crate::services::auth::{InitDataVerifier, TokenService};

/// 텔레그램 미니앱 인증 서비스
pub struct TelegramAuthService {
    verifier: InitDataVerifier,
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
}

impl TelegramAuthService {
    pub fn new(
        verifier: InitDataVerifier,
        users: Arc<dyn UserStore>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            verifier,
            users,
            tokens,
        }
    }

    /// `initData`로 로그인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingInput` / `MalformedInput` / `SignatureMismatch` /
    ///   `InitDataExpired` / `InvalidUserPayload` - 검증 실패
    /// * `AppError::PersistenceFailure` - 사용자 upsert 실패
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let response = auth_service.authenticate(&request.init_data.unwrap_or_default()).await?;
    /// HttpResponse::Ok().json(response)
    /// ```
    pub async fn authenticate(&self, init_data: &str) -> AppResult<TelegramAuthResponse> {
        self.authenticate_at(init_data, Utc::now()).await
    }

    /// 기준 시각을 지정하여 로그인합니다.
    pub async fn authenticate_at(
        &self,
        init_data: &str,
        now: DateTime<Utc>,
    ) -> AppResult<TelegramAuthResponse> {
        let verified = self.verifier.verify(init_data, now).map_err(|e| {
            log::warn!("initData 검증 실패: {}", e.kind());
            e
        })?;
        let user = verified.user;

        let row = self
            .users
            .upsert(&UserUpsert::from_telegram(&user, now))
            .await
            .map_err(|e| {
                log::error!("사용자 upsert 실패 (telegram_id: {}): {}", user.id, e);
                e
            })?;

        let issued = self.tokens.issue(&SessionIdentity::from(&user), now)?;

        log::info!("텔레그램 로그인 성공: {}", user.id);

        Ok(TelegramAuthResponse {
            user: row,
            token: issued.token,
        })
    }
}
