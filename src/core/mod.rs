//! # Core Module
//!
//! 애플리케이션 시작 시 한 번 구성되는 서비스 컨테이너를 제공합니다.
//!
//! ## 구성 흐름
//!
//! ```text
//! AppConfig::from_env()
//!        │
//!        ▼
//! ServiceContainer::build(&config)
//!   ├─ TokenService          (JWT_SECRET)
//!   ├─ SupabaseUserStore     (SUPABASE_URL, SUPABASE_SERVICE_ROLE_KEY)
//!   ├─ TelegramAuthService   (TELEGRAM_BOT_TOKEN)
//!   └─ InvoiceService        (TELEGRAM_BOT_TOKEN, TELEGRAM_API_BASE_URL)
//!        │
//!        ▼
//! App::new().configure(|cfg| container.register(cfg))
//! ```
//!
//! 모든 서비스는 불변이며 `Arc`로 공유됩니다. 요청 처리 중에 설정이나 서비스
//! 상태가 바뀌는 일은 없습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let container = ServiceContainer::build(&config)?;
//!
//! HttpServer::new(move || {
//!     let container = container.clone();
//!     App::new()
//!         .configure(move |cfg| container.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod container;

pub use container::*;
