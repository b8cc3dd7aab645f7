mod client;
mod config;
mod payload;
mod token;

pub use client::HttpPriceResolver;
pub use config::HttpResolverConfig;
pub use payload::PricePayload;
pub use token::{SessionTokenProvider, StaticTokenProvider};
