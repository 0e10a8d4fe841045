//! Payments HTTP Handlers
//!
//! 인증된 사용자를 위한 Telegram Stars 인보이스 생성 엔드포인트입니다.
use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::domain::dto::payments::{CreateInvoiceRequest, InvoiceLinkResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::payments::InvoiceService;

/// 인보이스 링크 생성 핸들러
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware) 뒤에 등록되어야 합니다.
///
/// # Endpoint
/// `POST /create-invoice`
///
/// # Request
///
/// ```json
/// { "title": "Coins pack", "description": "100 coins", "stars": 50 }
/// ```
pub async fn create_invoice(
    user: AuthenticatedUser,
    invoice_service: web::Data<InvoiceService>,
    payload: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let invoice_link = invoice_service
        .create_invoice_link(user.telegram_id, &payload)
        .await?;

    Ok(HttpResponse::Ok().json(InvoiceLinkResponse { invoice_link }))
}
