use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
mod utils;
#[cfg(test)]
mod test_utils;

use api::steam::SteamMarketClient;
use config::Config;

const DEFAULT_LOG_FILTER: &str = "steam_price_bot=debug,serenity=warn";

struct Handler {
    config: Config,
    market: SteamMarketClient,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg, &self.config, &self.market).await;
    }

    async fn ready(&self, _: Context, ready: Ready) {
        info!("Logged in as {} ({})", ready.user.name, ready.user.id);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting Steam price bot...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Posting prices to channel {} (appid={}, currency={})",
        config.channel_id, config.market.app_id, config.market.currency
    );

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = config.discord_token.clone();
    let handler = Handler {
        market: SteamMarketClient::with_settings(config.market.clone()),
        config,
    };

    let mut client = match Client::builder(&token, intents).event_handler(handler).await {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
        std::process::exit(1);
    }
}
