//! Upbit public market-data client.
//!
//! Polls the trades-ticks and orderbook REST endpoints and converts the
//! payloads into the core market-data types. All failures surface as
//! [`UpbitError`]; the detector contains them per market.

pub mod client;
pub mod error;
pub mod models;
mod provider;

pub use client::UpbitClient;
pub use error::{Result, UpbitError};
