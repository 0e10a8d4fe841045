//! Telegram Stars 인보이스 서비스
//!
//! Bot API `createInvoiceLink`를 호출하여 미니앱에서 열 수 있는 결제 링크를 만듭니다.
//! 디지털 상품 결제이므로 통화는 `XTR`, provider token은 빈 문자열입니다.
//!
//! ```text
//! POST {TELEGRAM_API_BASE_URL}/bot<token>/createInvoiceLink
//! { "title", "description", "payload", "provider_token": "", "currency": "XTR",
//!   "prices": [{ "label", "amount" }] }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{Secret, TelegramConfig};
use crate::domain::dto::payments::CreateInvoiceRequest;
use crate::errors::{AppError, AppResult, ErrorContext};

const BOT_API_TIMEOUT: Duration = Duration::from_secs(10);
const STARS_CURRENCY: &str = "XTR";

#[derive(Debug, Serialize)]
struct LabeledPrice<'a> {
    label: &'a str,
    amount: u32,
}

#[derive(Debug, Serialize)]
struct CreateInvoiceLinkParams<'a> {
    title: &'a str,
    description: &'a str,
    payload: String,
    provider_token: &'a str,
    currency: &'a str,
    prices: Vec<LabeledPrice<'a>>,
}

/// Bot API 공통 응답 래퍼
#[derive(Debug, Deserialize)]
struct BotApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

/// 인보이스 링크 생성 서비스
pub struct InvoiceService {
    client: reqwest::Client,
    api_base_url: String,
    bot_token: Secret,
}

impl InvoiceService {
    /// # Errors
    ///
    /// * `AppError::InternalError` - HTTP 클라이언트 생성 실패
    pub fn new(config: &TelegramConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(BOT_API_TIMEOUT)
            .build()
            .context("Bot API HTTP 클라이언트 생성 실패")?;

        Ok(Self::with_client(
            client,
            config.api_base_url.clone(),
            config.bot_token.clone(),
        ))
    }

    pub fn with_client(client: reqwest::Client, api_base_url: String, bot_token: Secret) -> Self {
        Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            bot_token,
        }
    }

    /// 인증된 사용자를 위한 Stars 인보이스 링크를 생성합니다.
    ///
    /// 결제 완료 후 봇이 구매자를 식별할 수 있도록 `payload`에 사용자 ID와 수량을 담습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - Bot API 통신 실패 또는 `ok: false` 응답
    pub async fn create_invoice_link(
        &self,
        user_id: i64,
        request: &CreateInvoiceRequest,
    ) -> AppResult<String> {
        let params = CreateInvoiceLinkParams {
            title: &request.title,
            description: &request.description,
            payload: serde_json::json!({ "user_id": user_id, "stars": request.stars }).to_string(),
            provider_token: "",
            currency: STARS_CURRENCY,
            prices: vec![LabeledPrice {
                label: &request.title,
                amount: request.stars,
            }],
        };

        let url = format!(
            "{}/bot{}/createInvoiceLink",
            self.api_base_url,
            self.bot_token.expose()
        );

        // 요청 URL에 봇 토큰이 포함되므로 에러 메시지에서 URL을 제거
        let response = self
            .client
            .post(&url)
            .json(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Bot API request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let body = response
            .json::<BotApiResponse<String>>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "unreadable Bot API response ({}): {}",
                    status,
                    e.without_url()
                ))
            })?;

        match body {
            BotApiResponse {
                ok: true,
                result: Some(link),
                ..
            } => {
                log::info!("인보이스 링크 생성: user {} / {} stars", user_id, request.stars);
                Ok(link)
            }
            BotApiResponse { description, .. } => {
                let reason = description.unwrap_or_else(|| status.to_string());
                log::error!("인보이스 링크 생성 실패: {}", reason);
                Err(AppError::ExternalServiceError(format!(
                    "createInvoiceLink failed: {}",
                    reason
                )))
            }
        }
    }
}
