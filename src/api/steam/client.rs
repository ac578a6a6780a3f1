use reqwest::Client as HttpClient;
use reqwest::StatusCode;
use super::models::{ApiError, PriceOverviewResponse};
use crate::config::MarketSettings;
use tracing::debug;

/// Steam Community Market client for price overview lookups
#[derive(Debug, Clone)]
pub struct SteamMarketClient {
    http_client: HttpClient,
    settings: MarketSettings,
}

impl SteamMarketClient {
    const PRICE_OVERVIEW_PATH: &'static str = "/market/priceoverview/";

    /// Create a client for the given market base URL, app id and currency
    pub fn with_settings(settings: MarketSettings) -> Self {
        Self {
            http_client: HttpClient::new(),
            settings,
        }
    }

    #[cfg(test)]
    pub fn with_http_client(http_client: HttpClient, settings: MarketSettings) -> Self {
        Self { http_client, settings }
    }

    /// GET /market/priceoverview/
    ///
    /// The item name goes out URL-encoded as `market_hash_name`.
    ///
    /// # Returns
    /// * `Ok(Some(PriceOverviewResponse))` - HTTP 200 with `success: true`
    /// * `Ok(None)` - any other status, or `success` missing/false
    /// * `Err(ApiError)` - transport failure or unparseable body
    pub async fn get_price_overview(
        &self,
        market_hash_name: &str,
    ) -> Result<Option<PriceOverviewResponse>, ApiError> {
        let url = format!("{}{}", self.settings.base_url, Self::PRICE_OVERVIEW_PATH);
        let app_id = self.settings.app_id.to_string();
        let currency = self.settings.currency.to_string();

        let response = self.http_client
            .get(&url)
            .query(&[
                ("appid", app_id.as_str()),
                ("currency", currency.as_str()),
                ("market_hash_name", market_hash_name),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("Price overview for {:?} returned HTTP {}", market_hash_name, status);
            return Ok(None);
        }

        let body = response.text().await?;
        let overview: PriceOverviewResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))?;

        if !overview.success {
            debug!("Price overview for {:?} reported success=false", market_hash_name);
            return Ok(None);
        }

        Ok(Some(overview))
    }
}
