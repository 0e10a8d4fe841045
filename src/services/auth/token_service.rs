//! 세션 JWT 발급 서비스
//!
//! 검증된 텔레그램 신원을 다운스트림 인가 계층(Supabase RLS)에 전달하는
//! HS256 서명 토큰을 발급하고 검증합니다.
//!
//! 토큰 모양은 [`ClaimsContract`] 뒤로 분리되어 있어, 다른 인가 계층이 요구하는
//! 클레임 규약으로 교체할 수 있습니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::JwtConfig;
use crate::domain::models::token::{
    AppMetadata, IssuedToken, SessionClaims, SessionIdentity, UserMetadata,
};
use crate::errors::{AppError, AppResult, ErrorContext};

/// 인증 미들웨어가 클레임에서 읽는 최소 정보
pub trait SessionSubject {
    fn subject(&self) -> &str;
    fn role(&self) -> &str;
}

/// 토큰 클레임 규약
pub trait ClaimsContract: Send + Sync + 'static {
    type Claims: Serialize + DeserializeOwned + SessionSubject;

    /// 검증 시 요구할 `aud` 값
    fn audience(&self) -> &'static str;

    fn build(&self, identity: &SessionIdentity, issued_at: i64, expires_at: i64) -> Self::Claims;
}

/// Supabase `authenticated` 역할 규약
#[derive(Debug, Clone, Copy, Default)]
pub struct SupabaseClaims;

impl SupabaseClaims {
    pub const AUDIENCE: &'static str = "authenticated";
    pub const ROLE: &'static str = "authenticated";
    pub const PROVIDER: &'static str = "telegram";
}

impl ClaimsContract for SupabaseClaims {
    type Claims = SessionClaims;

    fn audience(&self) -> &'static str {
        Self::AUDIENCE
    }

    fn build(&self, identity: &SessionIdentity, issued_at: i64, expires_at: i64) -> SessionClaims {
        SessionClaims {
            aud: Self::AUDIENCE.to_string(),
            iat: issued_at,
            exp: expires_at,
            sub: identity.telegram_id.to_string(),
            email: format!("{}@telegram.user", identity.telegram_id),
            role: Self::ROLE.to_string(),
            app_metadata: AppMetadata {
                provider: Self::PROVIDER.to_string(),
                providers: vec![Self::PROVIDER.to_string()],
            },
            user_metadata: UserMetadata {
                telegram_id: identity.telegram_id,
                username: identity.username.clone(),
                first_name: identity.first_name.clone(),
            },
        }
    }
}

impl SessionSubject for SessionClaims {
    fn subject(&self) -> &str {
        &self.sub
    }

    fn role(&self) -> &str {
        &self.role
    }
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하며 토큰은 7일 동안 유효합니다.
/// 갱신 기능은 없으며, 만료 후에는 `initData` 재검증이 필요합니다.
pub struct TokenService<C: ClaimsContract = SupabaseClaims> {
    contract: C,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService<SupabaseClaims> {
    pub fn new(config: &JwtConfig) -> Self {
        Self::with_contract(config, SupabaseClaims)
    }
}

impl<C: ClaimsContract> TokenService<C> {
    pub fn with_contract(config: &JwtConfig, contract: C) -> Self {
        let secret = config.secret.expose().as_bytes();
        Self {
            contract,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl: config.expiration,
        }
    }

    /// 검증된 신원으로 세션 토큰을 발급합니다.
    ///
    /// # Arguments
    ///
    /// * `identity` - 검증된 텔레그램 신원
    /// * `now` - 발급 시각 (`iat`), 만료는 `now + 7일`
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let issued = token_service.issue(&SessionIdentity::from(&user), Utc::now())?;
    /// println!("expires at {}", issued.expires_at);
    /// ```
    pub fn issue(&self, identity: &SessionIdentity, now: DateTime<Utc>) -> AppResult<IssuedToken> {
        let issued_at = now.timestamp();
        let expires_at = (now + self.ttl).timestamp();
        let claims = self.contract.build(identity, issued_at, expires_at);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")?;

        Ok(IssuedToken { token, expires_at })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, `exp`, `aud`를 검사합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명/audience
    pub fn verify(&self, token: &str) -> AppResult<C::Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[self.contract.audience()]);

        decode::<C::Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("token has expired".to_string())
                }
                _ => AppError::AuthenticationError("invalid token".to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("invalid authorization header".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::config::Secret;

    fn service() -> TokenService {
        TokenService::new(&JwtConfig::new(Secret::new("test-jwt-secret")))
    }

    fn identity() -> SessionIdentity {
        SessionIdentity {
            telegram_id: 42,
            username: Some("ada".to_string()),
            first_name: Some("Ada".to_string()),
        }
    }

    #[test]
    fn test_issued_token_carries_expected_claims() {
        let service = service();
        let issued = service.issue(&identity(), Utc::now()).unwrap();

        let claims = service.verify(&issued.token).unwrap();
        assert_eq!(claims.aud, "authenticated");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "42@telegram.user");
        assert_eq!(claims.role, "authenticated");
        assert_eq!(claims.app_metadata.provider, "telegram");
        assert_eq!(claims.user_metadata.telegram_id, 42);
        assert_eq!(claims.user_metadata.username.as_deref(), Some("ada"));
        assert_eq!(claims.user_metadata.first_name.as_deref(), Some("Ada"));
        assert_eq!(claims.exp, issued.expires_at);
    }

    #[test]
    fn test_expiry_is_seven_days_after_issue() {
        let service = service();
        let issued = service.issue(&identity(), Utc::now()).unwrap();
        let claims = service.verify(&issued.token).unwrap();

        assert_eq!(claims.exp - claims.iat, 604_800);
    }

    #[test]
    fn test_reissue_differs_only_in_timestamps() {
        let service = service();
        let now = Utc::now();
        let first = service.verify(&service.issue(&identity(), now).unwrap().token).unwrap();
        let second = service
            .verify(&service.issue(&identity(), now + Duration::seconds(5)).unwrap().token)
            .unwrap();

        assert_ne!(first.exp, second.exp);
        assert_eq!(second.iat - first.iat, 5);
        assert_eq!(
            SessionClaims { iat: 0, exp: 0, ..first },
            SessionClaims { iat: 0, exp: 0, ..second }
        );
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = TokenService::new(&JwtConfig::new(Secret::new("other-secret")));
        let issued = other.issue(&identity(), Utc::now()).unwrap();

        assert!(matches!(
            service().verify(&issued.token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let long_ago = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let issued = service.issue(&identity(), long_ago).unwrap();

        match service.verify(&issued.token) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("expired")),
            other => panic!("expected expiry error, got {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
