use crate::config::GatewayConfig;
use crate::error::Result;
use crate::resources::{
    BasketsResource, PoolSearchResult, PoolsResource, SearchPoolsInput, TokensResource,
};

/// Entry point for the hydric Gateway. Construction is local only; the key is
/// checked for presence here and validated by the server on each call.
#[derive(Clone)]
pub struct HydricGateway {
    pools: PoolsResource,
    tokens: TokensResource,
    baskets: BasketsResource,
}

impl HydricGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("hydric-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                reqwest::blocking::Client::new()
            });
        let base_url = config.api.base_url.clone();

        Ok(Self {
            pools: PoolsResource::new(http.clone(), base_url.clone(), api_key.clone()),
            tokens: TokensResource::new(http.clone(), base_url.clone(), api_key.clone()),
            baskets: BasketsResource::new(http, base_url, api_key),
        })
    }

    pub fn pools(&self) -> &PoolsResource {
        &self.pools
    }

    pub fn tokens(&self) -> &TokensResource {
        &self.tokens
    }

    pub fn baskets(&self) -> &BasketsResource {
        &self.baskets
    }

    pub fn search_pools(&self, input: &SearchPoolsInput) -> Result<PoolSearchResult> {
        self.pools.search_pools(input)
    }

    pub fn search_pool_pages(
        &self,
        input: &SearchPoolsInput,
        max_pages: usize,
    ) -> Result<Vec<PoolSearchResult>> {
        self.pools.search_pool_pages(input, max_pages)
    }

    pub fn get_token_price(&self, chain_id: u64, token_address: &str) -> Result<f64> {
        self.tokens.get_token_price(chain_id, token_address)
    }
}
