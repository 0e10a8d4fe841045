//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, Supabase 연결 설정을 정의합니다.

use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    pub host: String,
    /// 포트 번호. 기본값: 8080
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Rate Limiting 설정
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// Supabase(PostgREST) 연결 설정
///
/// `users` 테이블 upsert에만 사용됩니다. 서비스 키는 RLS를 우회하므로
/// 서버 사이드에서만 보관해야 합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    /// 프로젝트 URL (예: `https://xyz.supabase.co`)
    pub url: String,
    /// `service_role` 키
    pub service_role_key: super::Secret,
    /// 요청 타임아웃. 기본값: 5초
    pub timeout: Duration,
}

impl SupabaseConfig {
    /// `users` 테이블 REST 엔드포인트
    pub fn users_endpoint(&self) -> String {
        format!("{}/rest/v1/users", self.url.trim_end_matches('/'))
    }
}
