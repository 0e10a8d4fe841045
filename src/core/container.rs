//! # Service Container
//!
//! 설정으로부터 서비스 그래프를 한 번 조립하고, actix `web::Data`로 등록합니다.
//! 핸들러와 미들웨어는 `web::Data<T>` 추출자 또는 `req.app_data()`로 서비스를 꺼냅니다.

use std::sync::Arc;

use actix_web::web;

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::repositories::users::{SupabaseUserStore, UserStore};
use crate::services::auth::{InitDataVerifier, TelegramAuthService, TokenService};
use crate::services::payments::InvoiceService;

/// 애플리케이션 서비스 컨테이너
#[derive(Clone)]
pub struct ServiceContainer {
    pub token_service: Arc<TokenService>,
    pub telegram_auth: Arc<TelegramAuthService>,
    pub invoice_service: Arc<InvoiceService>,
}

impl ServiceContainer {
    pub fn new(
        token_service: Arc<TokenService>,
        telegram_auth: Arc<TelegramAuthService>,
        invoice_service: Arc<InvoiceService>,
    ) -> Self {
        Self {
            token_service,
            telegram_auth,
            invoice_service,
        }
    }

    /// 설정으로부터 전체 서비스 그래프를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 키 유도 또는 HTTP 클라이언트 생성 실패
    pub fn build(config: &AppConfig) -> AppResult<Self> {
        let token_service = Arc::new(TokenService::new(&config.jwt));

        let verifier = InitDataVerifier::new(&config.telegram.bot_token, config.telegram.auth_max_age)?;
        let users: Arc<dyn UserStore> = Arc::new(SupabaseUserStore::new(&config.supabase)?);
        let telegram_auth = Arc::new(TelegramAuthService::new(verifier, users, token_service.clone()));

        let invoice_service = Arc::new(InvoiceService::new(&config.telegram)?);

        log::info!("✅ 서비스 컨테이너 초기화 완료");

        Ok(Self::new(token_service, telegram_auth, invoice_service))
    }

    /// 모든 서비스를 `web::Data`로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::Data::from(self.telegram_auth.clone()))
            .app_data(web::Data::from(self.invoice_service.clone()));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use actix_web::{test, App, HttpResponse};

    use super::*;

    fn config() -> AppConfig {
        let env: HashMap<&str, &str> = HashMap::from([
            ("TELEGRAM_BOT_TOKEN", "TESTTOKEN"),
            ("SUPABASE_URL", "https://xyz.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service-key"),
            ("JWT_SECRET", "test-jwt-secret"),
        ]);
        AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap()
    }

    #[actix_web::test]
    async fn test_registered_services_are_extractable() {
        let container = ServiceContainer::build(&config()).unwrap();

        let app = test::init_service(
            App::new()
                .configure(|cfg| container.register(cfg))
                .route(
                    "/probe",
                    web::get().to(
                        |_tokens: web::Data<TokenService>,
                         _auth: web::Data<TelegramAuthService>,
                         _invoices: web::Data<InvoiceService>| async { HttpResponse::Ok().finish() },
                    ),
                ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/probe").to_request()).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_container_shares_token_service() {
        let container = ServiceContainer::build(&config()).unwrap();
        let cloned = container.clone();

        assert!(Arc::ptr_eq(&container.token_service, &cloned.token_service));
    }
}
