use serde::Deserialize;
use thiserror::Error;

/// Body of GET /market/priceoverview/
///
/// Steam omits price fields it has no data for, and sometimes sends them as
/// `null`; both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceOverviewResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub lowest_price: Option<String>,
    #[serde(default)]
    pub median_price: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
}

/// Error type for market API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/request error
    #[error("Request Error: {0}")]
    Request(#[from] reqwest::Error),
    /// Body was not the expected JSON
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_overview_parses() {
        let body = r#"{"success":true,"lowest_price":"$10.50","median_price":"$11.00","volume":"1,234"}"#;
        let parsed: PriceOverviewResponse = serde_json::from_str(body).unwrap();

        assert!(parsed.success);
        assert_eq!(parsed.lowest_price.as_deref(), Some("$10.50"));
        assert_eq!(parsed.median_price.as_deref(), Some("$11.00"));
        assert_eq!(parsed.volume.as_deref(), Some("1,234"));
    }

    #[test]
    fn test_sparse_overview_parses() {
        let parsed: PriceOverviewResponse =
            serde_json::from_str(r#"{"success":true,"lowest_price":"$0.03","median_price":null}"#).unwrap();
        assert_eq!(parsed.lowest_price.as_deref(), Some("$0.03"));
        assert_eq!(parsed.median_price, None);
        assert_eq!(parsed.volume, None);

        // no success flag at all is treated as a failure
        let parsed: PriceOverviewResponse = serde_json::from_str("{}").unwrap();
        assert!(!parsed.success);
    }
}
