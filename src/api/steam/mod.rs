pub mod client;
pub mod models;

pub use client::SteamMarketClient;
pub use models::{ApiError, PriceOverviewResponse};
