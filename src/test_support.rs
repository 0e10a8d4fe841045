//! 테스트 공용 헬퍼
//!
//! 서명된 `initData` 생성, 가짜 사용자 저장소, 외부 HTTP 서비스를 흉내 내는
//! 로컬 서버를 제공합니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::{web, App, HttpServer};
use async_trait::async_trait;
use chrono::Duration;
use url::form_urlencoded;

use crate::config::{JwtConfig, Secret};
use crate::core::ServiceContainer;
use crate::domain::entities::users::{UserRow, UserUpsert};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::auth::{InitDataVerifier, TelegramAuthService, TokenService};
use crate::services::payments::InvoiceService;

pub const TEST_BOT_TOKEN: &str = "TESTTOKEN";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// 주어진 봇 토큰으로 서명한 `initData` 문자열을 만듭니다.
pub fn sign_init_data(bot_token: &str, pairs: &[(&str, &str)]) -> String {
    let verifier = InitDataVerifier::new(&Secret::new(bot_token), None).unwrap();

    let mut sorted: Vec<_> = pairs.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let check_string = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("\n");
    let hash = verifier.sign(&check_string).unwrap();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.append_pair("hash", &hash);
    serializer.finish()
}

pub fn test_token_service() -> TokenService {
    TokenService::new(&JwtConfig::new(Secret::new(TEST_JWT_SECRET)))
}

/// 호출 횟수와 마지막 레코드를 기록하는 가짜 저장소
#[derive(Default)]
pub struct FakeUserStore {
    pub fail: bool,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<UserUpsert>>,
}

impl FakeUserStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn upsert(&self, user: &UserUpsert) -> AppResult<UserRow> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(user.clone());

        if self.fail {
            return Err(AppError::PersistenceFailure("user store unavailable".to_string()));
        }

        let mut row = serde_json::to_value(user).unwrap();
        row["created_at"] = serde_json::json!("2024-01-01T00:00:00Z");
        row["coins"] = serde_json::json!(0);
        Ok(row)
    }
}

pub fn test_auth_service(store: Arc<FakeUserStore>, max_age: Option<Duration>) -> TelegramAuthService {
    TelegramAuthService::new(
        InitDataVerifier::new(&Secret::new(TEST_BOT_TOKEN), max_age).unwrap(),
        store,
        Arc::new(test_token_service()),
    )
}

/// 주어진 저장소와 Bot API 주소로 서비스 컨테이너를 구성합니다.
pub fn test_container(store: Arc<dyn UserStore>, bot_api_base: &str) -> ServiceContainer {
    let tokens = Arc::new(test_token_service());
    let auth = TelegramAuthService::new(
        InitDataVerifier::new(&Secret::new(TEST_BOT_TOKEN), None).unwrap(),
        store,
        tokens.clone(),
    );
    let invoices = InvoiceService::with_client(
        reqwest::Client::new(),
        bot_api_base.to_string(),
        Secret::new(TEST_BOT_TOKEN),
    );

    ServiceContainer::new(tokens, Arc::new(auth), Arc::new(invoices))
}

/// 로컬 포트에 actix 서버를 띄우고 베이스 URL을 반환합니다.
///
/// Supabase/Bot API 같은 외부 서비스를 흉내 낼 때 사용합니다.
pub fn spawn_server<F>(routes: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(routes.clone()))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    format!("http://{}", addr)
}
