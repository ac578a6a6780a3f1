//! In-process stand-ins for the Steam market and the Discord channel

use crate::api::steam::SteamMarketClient;
use crate::commands::price::{PriceReply, ReplyChannel};
use crate::config::MarketSettings;
use serenity::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Minimal HTTP/1.1 server that answers every request with one canned
/// status and body, recording each request target it sees.
pub struct MockMarket {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockMarket {
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let body = body.to_string();

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };

                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&buf);
                if let Some(target) = head.lines().next().and_then(|l| l.split(' ').nth(1)) {
                    seen.lock().await.push(target.to_string());
                }

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Market settings with the default app id and currency, pointed here
    pub fn settings(&self) -> MarketSettings {
        MarketSettings {
            base_url: self.base_url.clone(),
            ..MarketSettings::default()
        }
    }

    pub fn client(&self) -> SteamMarketClient {
        market_client(self.settings())
    }

    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

/// Market client that ignores any proxy configured in the environment
pub fn market_client(settings: MarketSettings) -> SteamMarketClient {
    let http_client = reqwest::Client::builder().no_proxy().build().unwrap();
    SteamMarketClient::with_http_client(http_client, settings)
}

/// Reply channel that keeps everything it is asked to send
#[derive(Default)]
pub struct RecordingChannel {
    sent: Mutex<Vec<PriceReply>>,
}

impl RecordingChannel {
    pub async fn sent(&self) -> Vec<PriceReply> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl ReplyChannel for RecordingChannel {
    async fn send(&self, reply: PriceReply) -> Result<(), serenity::Error> {
        self.sent.lock().await.push(reply);
        Ok(())
    }
}
