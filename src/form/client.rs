use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::api::booking::structures::BookingRequest;
use crate::errors::AppError;

use super::controller::RelayTransport;

/// Шлях relay за замовчуванням; перекривається налаштуванням сторінки.
pub const DEFAULT_ENDPOINT: &str = "/api/booking";

/// Адреса ендпоінта визначається один раз при старті сторінки:
/// непорожнє налаштоване значення або шлях за замовчуванням.
pub fn resolve_endpoint(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

pub struct RelayClient {
    client: Client,
    endpoint: Url,
}

impl RelayClient {
    /// `page_origin` — origin сторінки, відносно якого розв'язується шлях
    /// за замовчуванням: у fetch браузер підставляє origin сам, у reqwest
    /// його немає. Налаштований абсолютний URL перекриває origin повністю.
    pub fn new(page_origin: &str, configured_endpoint: Option<&str>) -> Result<Self, AppError> {
        let base = Url::parse(page_origin)
            .map_err(|e| AppError::InvalidInput(format!("Invalid page origin: {}", e)))?;
        let endpoint = base
            .join(&resolve_endpoint(configured_endpoint))
            .map_err(|e| AppError::InvalidInput(format!("Invalid relay endpoint: {}", e)))?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl RelayTransport for RelayClient {
    // Таймаут навмисно не ставимо: скасування відправки немає,
    // покладаємось на дефолти платформи
    async fn submit(&self, payload: &BookingRequest) -> Result<(), AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error reading response body".to_string());
            log::error!("relay returned {}: {}", status, error_text);
            return Err(AppError::Upstream {
                details: error_text,
            });
        }

        Ok(())
    }
}
