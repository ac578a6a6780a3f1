//! Price snapshot models

use crate::api::steam::PriceOverviewResponse;

/// Shown for any field the market did not report
pub const NOT_AVAILABLE: &str = "N/A";

/// Price snapshot for one market item
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSnapshot {
    pub item_name: String,
    pub lowest_price: String,
    pub median_price: String,
    pub volume: String,
}

impl PriceSnapshot {
    pub fn from_overview(item_name: &str, overview: PriceOverviewResponse) -> Self {
        let or_na = |field: Option<String>| field.unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            item_name: item_name.to_string(),
            lowest_price: or_na(overview.lowest_price),
            median_price: or_na(overview.median_price),
            volume: or_na(overview.volume),
        }
    }
}
