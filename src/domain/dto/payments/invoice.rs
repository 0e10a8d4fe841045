//! Telegram Stars 인보이스 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /create-invoice` 요청 본문
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 1, max = 32, message = "상품명은 1~32자여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "상품 설명은 1~255자여야 합니다"))]
    pub description: String,

    /// 결제할 Telegram Stars 수량
    #[validate(range(min = 1, max = 100000, message = "Stars 수량은 1~100000 이어야 합니다"))]
    pub stars: u32,
}

/// `POST /create-invoice` 성공 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct InvoiceLinkResponse {
    pub invoice_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, stars: u32) -> CreateInvoiceRequest {
        CreateInvoiceRequest {
            title: title.to_string(),
            description: "100 coins".to_string(),
            stars,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("Coins pack", 50).validate().is_ok());
    }

    #[test]
    fn test_invalid_requests_are_rejected() {
        assert!(request("", 50).validate().is_err());
        assert!(request("Coins pack", 0).validate().is_err());
        assert!(request(&"x".repeat(33), 50).validate().is_err());
    }
}
