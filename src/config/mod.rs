//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반 설정값을 시작 시 한 번 읽어 [`AppConfig`]로 고정하고,
//! 각 서비스에는 참조로 주입합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Rate Limiting, Supabase 설정
//! - [`auth_config`] - 텔레그램 봇 토큰, JWT 서명 설정
//! - [`app_config`] - 전체 설정 로더와 [`ConfigError`]
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공하고 [`Secret`]으로 감쌉니다
//! - 필수 비밀값이 없으면 기본값으로 대체하지 않고 시작을 중단합니다
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}:{}", config.server.host, config.server.port);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export TELEGRAM_BOT_TOKEN="123456:ABC-DEF..."
//! export SUPABASE_URL="https://xyz.supabase.co"
//! export SUPABASE_SERVICE_ROLE_KEY="service-role-key"
//! export JWT_SECRET="supabase-jwt-secret"
//!
//! # 선택
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SUPABASE_TIMEOUT_SECS="5"
//! export TELEGRAM_AUTH_MAX_AGE_SECS="0"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod app_config;

pub use data_config::*;
pub use auth_config::*;
pub use app_config::*;
