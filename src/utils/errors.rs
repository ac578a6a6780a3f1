use thiserror::Error;

/// Failure of a chat command as a whole
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Discord request failed: {0}")]
    Discord(#[from] serenity::Error),
    #[error("No item name given")]
    MissingItemName,
}

impl CommandError {
    /// Text shown to the user in the error embed
    pub fn user_message(&self, prefix: &str) -> String {
        match self {
            CommandError::MissingItemName => format!("❌ Usage: `{}price <item name>`", prefix),
            CommandError::Discord(e) => discord_failure_message(http_status(e), &e.to_string()),
        }
    }
}

/// HTTP status Discord answered with, when the failure was an API response
fn http_status(e: &serenity::Error) -> Option<u16> {
    match e {
        serenity::Error::Http(http) => http.status_code().map(|status| status.as_u16()),
        _ => None,
    }
}

fn discord_failure_message(status: Option<u16>, error_msg: &str) -> String {
    match status {
        Some(429) => {
            "⚠️ **Rate Limited**: Discord is rate limiting us. Please try again in a moment.".to_string()
        }
        Some(403) | Some(404) => {
            "❌ **Channel Unreachable**: The bot cannot post in the configured price channel. Check DISCORD_CHANNEL_ID and the bot's permissions.".to_string()
        }
        _ if error_msg.contains("429") || error_msg.contains("rate limit") => {
            "⚠️ **Rate Limited**: Discord is rate limiting us. Please try again in a moment.".to_string()
        }
        _ => "⚠️ **Network Error**: Having trouble connecting to Discord. Please try again.".to_string(),
    }
}
