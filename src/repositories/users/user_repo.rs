//! # 사용자 리포지토리 구현
//!
//! 텔레그램 사용자 프로필을 외부 저장소(Supabase `users` 테이블)에 upsert 합니다.
//! 행의 소유권은 저장소에 있으며, 돌려받은 행은 해석하지 않고 그대로 전달합니다.
//!
//! ## 특징
//!
//! - **원자적 upsert**: PostgREST `on_conflict=id` + `merge-duplicates`
//! - **재시도 없음**: 실패는 즉시 `PersistenceFailure`로 전파
//! - **요청 타임아웃**: `SUPABASE_TIMEOUT_SECS` (기본 5초)

use async_trait::async_trait;

use crate::config::{Secret, SupabaseConfig};
use crate::domain::entities::users::{UserRow, UserUpsert};
use crate::errors::{AppError, AppResult, ErrorContext};

/// 사용자 upsert 협력자
///
/// 동일 ID에 대한 동시 요청의 원자성은 구현체(저장소)의 책임입니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 텔레그램 ID 기준으로 사용자를 삽입하거나 갱신하고 전체 행을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::PersistenceFailure` - 저장소 호출 실패, 타임아웃, 빈 응답
    async fn upsert(&self, user: &UserUpsert) -> AppResult<UserRow>;
}

/// Supabase PostgREST 기반 사용자 저장소
///
/// ```text
/// POST {SUPABASE_URL}/rest/v1/users?on_conflict=id
/// apikey: <service role key>
/// Authorization: Bearer <service role key>
/// Prefer: resolution=merge-duplicates,return=representation
/// ```
pub struct SupabaseUserStore {
    client: reqwest::Client,
    endpoint: String,
    service_key: Secret,
}

impl SupabaseUserStore {
    /// 설정으로부터 저장소 클라이언트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - HTTP 클라이언트 생성 실패
    pub fn new(config: &SupabaseConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Supabase HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            client,
            endpoint: config.users_endpoint(),
            service_key: config.service_role_key.clone(),
        })
    }
}

#[async_trait]
impl UserStore for SupabaseUserStore {
    async fn upsert(&self, user: &UserUpsert) -> AppResult<UserRow> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("on_conflict", "id")])
            .header("apikey", self.service_key.expose())
            .bearer_auth(self.service_key.expose())
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(user)
            .send()
            .await
            .map_err(|e| {
                log::error!("사용자 upsert 요청 실패: {}", e);
                if e.is_timeout() {
                    AppError::PersistenceFailure("user store timed out".to_string())
                } else {
                    AppError::PersistenceFailure("user store request failed".to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("사용자 upsert 실패 - 상태: {}, 응답: {}", status, error_text);
            return Err(AppError::PersistenceFailure(format!(
                "user store responded with {}",
                status
            )));
        }

        let rows: Vec<UserRow> = response.json().await.map_err(|e| {
            log::error!("사용자 upsert 응답 파싱 실패: {}", e);
            AppError::PersistenceFailure("unreadable user store response".to_string())
        })?;

        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::PersistenceFailure("user store returned no row".to_string()))
    }
}
