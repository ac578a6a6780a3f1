use serenity::async_trait;
use serenity::builder::CreateMessage;
use serenity::model::id::ChannelId;
use serenity::prelude::Context;
use crate::api::steam::SteamMarketClient;
use crate::models::PriceSnapshot;
use crate::services::price_service;
use crate::utils::CommandError;
use tracing::{debug, info, warn};

pub const FETCH_FAILED_MESSAGE: &str =
    "Could not fetch price data. Check the item name or try again later.";

/// One message the price command posts
#[derive(Debug, Clone, PartialEq)]
pub enum PriceReply {
    Text(String),
    Card(PriceSnapshot),
}

/// Destination for price command output
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    async fn send(&self, reply: PriceReply) -> Result<(), serenity::Error>;
}

/// The configured Discord channel all price output goes to
pub struct DiscordChannel<'a> {
    ctx: &'a Context,
    channel_id: ChannelId,
}

impl<'a> DiscordChannel<'a> {
    pub fn new(ctx: &'a Context, channel_id: ChannelId) -> Self {
        Self { ctx, channel_id }
    }
}

#[async_trait]
impl ReplyChannel for DiscordChannel<'_> {
    async fn send(&self, reply: PriceReply) -> Result<(), serenity::Error> {
        let message = match reply {
            PriceReply::Text(content) => CreateMessage::default().content(content),
            PriceReply::Card(snapshot) => {
                CreateMessage::default().embed(price_service::create_price_embed(&snapshot))
            }
        };

        self.channel_id.send_message(self.ctx, message).await?;
        Ok(())
    }
}

/// `!price <item name>`
///
/// Acknowledges, looks the item up, then posts either a price card or the
/// generic failure notice. Market errors are logged and reported with the
/// same notice as a missing item.
pub async fn execute(
    channel: &dyn ReplyChannel,
    market: &SteamMarketClient,
    item_name: &str,
) -> Result<(), CommandError> {
    let item_name = item_name.trim();
    if item_name.is_empty() {
        return Err(CommandError::MissingItemName);
    }

    info!("💹 Price command called for {:?}", item_name);

    channel
        .send(PriceReply::Text(format!("Fetching price for {}...", item_name)))
        .await?;

    let snapshot = match price_service::fetch_price(market, item_name).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Market lookup for {:?} failed: {}", item_name, e);
            None
        }
    };

    let Some(snapshot) = snapshot else {
        debug!("No price data for {:?}", item_name);
        channel
            .send(PriceReply::Text(FETCH_FAILED_MESSAGE.to_string()))
            .await?;
        return Ok(());
    };

    channel.send(PriceReply::Card(snapshot)).await?;
    Ok(())
}
