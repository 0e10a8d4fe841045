//! CORS 설정
//!
//! 미니앱은 텔레그램 클라이언트의 WebView에서 임의의 오리진으로 로드되므로
//! 모든 오리진을 허용하고 `Access-Control-Allow-Origin: *`를 보냅니다.
//! 쿠키 기반 자격 증명은 사용하지 않습니다.

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};

/// 클라이언트(Supabase JS SDK)가 보내는 헤더 목록
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// CORS 설정을 구성합니다
///
/// # Allowed Methods
///
/// * `GET`, `POST`, `OPTIONS`
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors();
/// App::new().wrap(cors)
/// ```
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
        .max_age(3600)
}
