use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use crate::api::steam::{ApiError, SteamMarketClient};
use crate::models::PriceSnapshot;

pub const CARD_FOOTER: &str = "Data from Steam Community Market";
const CARD_COLOR: u32 = 0x2ecc71;

/// Fetch the current price snapshot for one market item
///
/// Returns `Ok(None)` when the market has nothing for the item or answered
/// with a non-success status. Fields the market leaves out come back as "N/A".
pub async fn fetch_price(
    client: &SteamMarketClient,
    item_name: &str,
) -> Result<Option<PriceSnapshot>, ApiError> {
    let overview = client.get_price_overview(item_name).await?;
    Ok(overview.map(|overview| PriceSnapshot::from_overview(item_name, overview)))
}

pub fn price_card_title(snapshot: &PriceSnapshot) -> String {
    format!("Steam Market Price: {}", snapshot.item_name)
}

/// (name, value, inline) for each card field, in display order
pub fn price_card_fields(snapshot: &PriceSnapshot) -> [(&'static str, &str, bool); 3] {
    [
        ("Lowest Price", snapshot.lowest_price.as_str(), true),
        ("Median Price", snapshot.median_price.as_str(), true),
        ("Volume (24h)", snapshot.volume.as_str(), false),
    ]
}

pub fn create_price_embed(snapshot: &PriceSnapshot) -> CreateEmbed {
    CreateEmbed::default()
        .title(price_card_title(snapshot))
        .fields(price_card_fields(snapshot))
        .footer(CreateEmbedFooter::new(CARD_FOOTER))
        .color(CARD_COLOR)
}
