pub mod price;

use serenity::model::channel::Message;
use serenity::model::id::ChannelId;
use serenity::prelude::Context;
use crate::api::steam::SteamMarketClient;
use crate::config::Config;
use price::DiscordChannel;
use serenity::builder::{CreateEmbed, CreateMessage};
use tracing::{error, warn};
use crate::utils::CommandError;

/// Split `content` into a command name and its raw argument text.
///
/// `content` must start with `prefix` itself. The command name runs from just
/// after `prefix` to the first whitespace; everything after that whitespace,
/// trimmed, is the argument text.
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, &'a str)> {
    let rest = content.strip_prefix(prefix)?;
    let (name, args) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim()),
        None => (rest, ""),
    };

    if name.is_empty() {
        return None;
    }
    Some((name, args))
}

/// Item name for a `price` invocation, `None` for anything the bot ignores
pub fn route<'a>(author_is_bot: bool, content: &'a str, prefix: &str) -> Option<&'a str> {
    if author_is_bot {
        return None;
    }

    match parse_command(content, prefix)? {
        ("price", item_name) => Some(item_name),
        _ => None,
    }
}

/// Red embed reporting a failed command back where it was issued
pub fn command_error_embed(e: &CommandError, prefix: &str) -> CreateEmbed {
    CreateEmbed::default()
        .title("Command Error")
        .description(e.user_message(prefix))
        .color(0xff0000)
}

pub async fn handle_message(ctx: &Context, msg: &Message, config: &Config, market: &SteamMarketClient) {
    let Some(item_name) = route(msg.author.bot, &msg.content, &config.command_prefix) else {
        return;
    };

    let channel = DiscordChannel::new(ctx, ChannelId::new(config.channel_id));
    if let Err(e) = price::execute(&channel, market, item_name).await {
        error!("❌ Error executing command price: {}", e);

        let embed = command_error_embed(&e, &config.command_prefix);
        if let Err(e) = msg.channel_id
            .send_message(ctx, CreateMessage::default().embed(embed))
            .await
        {
            warn!("Failed to report command error in channel {}: {}", msg.channel_id, e);
        }
    }
}
