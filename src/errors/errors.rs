//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 텔레그램 인증 파이프라인을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! `{ "error": "<message>" }` 형식의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `MissingInput` / `MalformedInput` / `SignatureMismatch` | 400 Bad Request |
//! | `InvalidUserPayload` / `InitDataExpired` / `PersistenceFailure` | 400 Bad Request |
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `Forbidden` | 403 Forbidden |
//! | `ExternalServiceError` | 502 Bad Gateway |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn require_hash(hash: Option<String>) -> Result<String, AppError> {
//!     hash.ok_or(AppError::MalformedInput)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 요청은 어떤 에러에서도 토큰을 발급하지 않으며, 내부적으로 재시도하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// `initData`가 없거나 빈 문자열 (400)
    #[error("initData is required")]
    MissingInput,

    /// `hash` 필드가 없는 `initData` (400)
    #[error("Malformed initData: hash is missing")]
    MalformedInput,

    /// 서명 불일치. 변조되었거나 다른 봇의 데이터 (400)
    #[error("Invalid initData signature")]
    SignatureMismatch,

    /// `auth_date`가 허용 기간을 벗어남 (400)
    #[error("initData has expired")]
    InitDataExpired,

    /// `user` 필드가 없거나 파싱할 수 없음 (400)
    #[error("Invalid user payload: {0}")]
    InvalidUserPayload(String),

    /// 사용자 저장소 호출 실패 (400)
    #[error("Failed to persist user: {0}")]
    PersistenceFailure(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 로그용 에러 종류 이름
    ///
    /// 메시지 본문 없이 분류만 남기기 위해 사용합니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingInput => "missing_input",
            AppError::MalformedInput => "malformed_input",
            AppError::SignatureMismatch => "signature_mismatch",
            AppError::InitDataExpired => "init_data_expired",
            AppError::InvalidUserPayload(_) => "invalid_user_payload",
            AppError::PersistenceFailure(_) => "persistence_failure",
            AppError::ValidationError(_) => "validation_error",
            AppError::AuthenticationError(_) => "authentication_error",
            AppError::Forbidden(_) => "forbidden",
            AppError::ExternalServiceError(_) => "external_service_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
