//! 프로세스 전역 설정 로더
//!
//! 시작 시 한 번만 환경 변수를 읽어 [`AppConfig`]를 만들고,
//! 이후에는 불변 값으로 각 서비스에 주입합니다. 실행 중에 다시 읽지 않습니다.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use super::{
    Environment, JwtConfig, RateLimitConfig, Secret, ServerConfig, SupabaseConfig,
    TelegramConfig,
};

/// 설정 로딩 실패
///
/// 시작 단계에서만 발생하며 서버 기동을 중단시킵니다.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("required configuration `{0}` is not set")]
    Missing(&'static str),

    #[error("configuration `{key}` is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub supabase: SupabaseConfig,
    pub telegram: TelegramConfig,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 필수 값(봇 토큰, Supabase, `JWT_SECRET`) 누락
    /// * `ConfigError::Invalid` - URL 형식 오류
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 로드합니다.
    ///
    /// 테스트에서 프로세스 환경을 건드리지 않고 값을 주입할 때 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_str(
            &lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),
        );

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080),
        };

        let rate_limit = RateLimitConfig {
            per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or(&lookup, "RATE_LIMIT_BURST_SIZE", 200),
        };

        let supabase_url = required(&lookup, "SUPABASE_URL")?;
        url::Url::parse(&supabase_url).map_err(|e| ConfigError::Invalid {
            key: "SUPABASE_URL",
            reason: e.to_string(),
        })?;

        let supabase = SupabaseConfig {
            url: supabase_url,
            service_role_key: Secret::new(required(&lookup, "SUPABASE_SERVICE_ROLE_KEY")?),
            timeout: Duration::from_secs(parse_or(&lookup, "SUPABASE_TIMEOUT_SECS", 5)),
        };

        let max_age_secs: i64 = parse_or(&lookup, "TELEGRAM_AUTH_MAX_AGE_SECS", 0);
        let telegram = TelegramConfig {
            bot_token: Secret::new(required(&lookup, "TELEGRAM_BOT_TOKEN")?),
            api_base_url: lookup("TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|| "https://api.telegram.org".to_string())
                .trim_end_matches('/')
                .to_string(),
            auth_max_age: (max_age_secs > 0).then(|| chrono::Duration::seconds(max_age_secs)),
        };

        let jwt = JwtConfig::new(Secret::new(required(&lookup, "JWT_SECRET")?));

        Ok(Self {
            environment,
            server,
            rate_limit,
            supabase,
            telegram,
            jwt,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("TELEGRAM_BOT_TOKEN", "123456:TEST"),
            ("SUPABASE_URL", "https://xyz.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service-key"),
            ("JWT_SECRET", "jwt-secret"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = load(&base_env()).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.rate_limit.per_second, 100);
        assert_eq!(config.rate_limit.burst_size, 200);
        assert_eq!(config.supabase.timeout, Duration::from_secs(5));
        assert_eq!(config.telegram.api_base_url, "https://api.telegram.org");
        assert!(config.telegram.auth_max_age.is_none());
        assert_eq!(config.jwt.secret.expose(), "jwt-secret");
    }

    #[test]
    fn test_missing_jwt_secret_fails_closed() {
        let mut env = base_env();
        env.remove("JWT_SECRET");
        assert_eq!(load(&env).unwrap_err(), ConfigError::Missing("JWT_SECRET"));

        env.insert("JWT_SECRET", "   ");
        assert_eq!(load(&env).unwrap_err(), ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_missing_bot_token_is_rejected() {
        let mut env = base_env();
        env.remove("TELEGRAM_BOT_TOKEN");
        assert_eq!(load(&env).unwrap_err(), ConfigError::Missing("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn test_invalid_supabase_url_is_rejected() {
        let mut env = base_env();
        env.insert("SUPABASE_URL", "not a url");
        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::Invalid { key: "SUPABASE_URL", .. }
        ));
    }

    #[test]
    fn test_optional_values_are_parsed() {
        let mut env = base_env();
        env.insert("PORT", "9090");
        env.insert("TELEGRAM_AUTH_MAX_AGE_SECS", "86400");
        env.insert("SUPABASE_TIMEOUT_SECS", "2");
        env.insert("TELEGRAM_API_BASE_URL", "http://127.0.0.1:9999/");
        env.insert("ENVIRONMENT", "dev");

        let config = load(&env).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.telegram.auth_max_age, Some(chrono::Duration::seconds(86400)));
        assert_eq!(config.supabase.timeout, Duration::from_secs(2));
        assert_eq!(config.telegram.api_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_unparsable_number_falls_back_to_default() {
        let mut env = base_env();
        env.insert("PORT", "eighty");
        assert_eq!(load(&env).unwrap().server.port, 8080);
    }
}
