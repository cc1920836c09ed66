pub mod chains;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod portfolio;
pub mod resources;

pub use chains::{ChainId, Tokens};
pub use client::HydricGateway;
pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use portfolio::{value_portfolio, PortfolioEntry, PortfolioValuation};
pub use resources::{
    OrderField, PoolSearchResult, SearchPoolsInput, SortDirection, Timeframe, TokenBasket,
    TokenListParams, TokenListResult, TokenRef, TokenSearchParams,
};
