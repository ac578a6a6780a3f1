//! Data models for bot commands and services

pub mod price;

pub use price::PriceSnapshot;
