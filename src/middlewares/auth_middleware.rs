//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 세션 JWT를 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self {
            required_role: None,
        }
    }

    /// 복수 역할 중 하나 요구 인증 미들웨어 생성
    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        let role_strings: Vec<String> = roles.into_iter().map(|s| s.to_string()).collect();
        Self {
            required_role: Some(RequiredRole(role_strings)),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};
    use chrono::Utc;

    use super::*;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::domain::models::token::SessionIdentity;
    use crate::services::auth::{
        ClaimsContract, SessionSubject, SupabaseClaims, TokenService,
    };
    use crate::config::{JwtConfig, Secret};
    use crate::test_support::{test_token_service, TEST_JWT_SECRET};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(user)
    }

    fn identity() -> SessionIdentity {
        SessionIdentity {
            telegram_id: 42,
            username: Some("ada".to_string()),
            first_name: None,
        }
    }

    macro_rules! protected_app {
        ($middleware:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_token_service()))
                    .service(
                        web::resource("/me")
                            .wrap($middleware)
                            .route(web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_valid_token_populates_authenticated_user() {
        let app = protected_app!(AuthMiddleware::required_with_roles(vec!["authenticated"]));
        let token = test_token_service().issue(&identity(), Utc::now()).unwrap().token;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["telegram_id"], 42);
        assert_eq!(body["role"], "authenticated");
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = protected_app!(AuthMiddleware::required());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authentication error: missing Authorization header");
    }

    #[actix_web::test]
    async fn test_forged_token_is_unauthorized() {
        let app = protected_app!(AuthMiddleware::required());
        let forged = TokenService::new(&JwtConfig::new(Secret::new("not-the-secret")))
            .issue(&identity(), Utc::now())
            .unwrap()
            .token;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", forged)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    /// `role` 클레임만 다른 규약
    struct ServiceRoleClaims;

    impl ClaimsContract for ServiceRoleClaims {
        type Claims = crate::domain::models::token::SessionClaims;

        fn audience(&self) -> &'static str {
            SupabaseClaims::AUDIENCE
        }

        fn build(&self, identity: &SessionIdentity, issued_at: i64, expires_at: i64) -> Self::Claims {
            let mut claims = SupabaseClaims.build(identity, issued_at, expires_at);
            claims.role = "service_role".to_string();
            claims
        }
    }

    #[actix_web::test]
    async fn test_role_mismatch_is_forbidden() {
        let app = protected_app!(AuthMiddleware::required_with_roles(vec!["authenticated"]));
        let service_role = TokenService::with_contract(
            &JwtConfig::new(Secret::new(TEST_JWT_SECRET)),
            ServiceRoleClaims,
        );
        let token = service_role.issue(&identity(), Utc::now()).unwrap();
        let claims = service_role.verify(&token.token).unwrap();
        assert_eq!(claims.role(), "service_role");

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token.token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Forbidden: insufficient role");
    }

    #[actix_web::test]
    async fn test_missing_token_service_is_internal_error() {
        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        )
        .await;
        let token = test_token_service().issue(&identity(), Utc::now()).unwrap().token;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
