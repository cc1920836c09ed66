use super::dto::{TokenListParams, TokenListResult, TokenPriceData, TokenSearchParams};
use crate::error::{GatewayError, Result};
use crate::resources::helpers::{build_url, transport_error, unwrap_envelope};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use urlencoding::encode;

#[derive(Clone)]
pub struct TokensResource {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl TokensResource {
    pub(crate) fn new(http: reqwest::blocking::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// USD price of a token via `GET /tokens/prices/{chainId}/{address}/usd`.
    pub fn get_token_price(&self, chain_id: u64, token_address: &str) -> Result<f64> {
        let chain = chain_id.to_string();
        let address = encode(token_address);
        let url = build_url(&self.base_url, &["tokens", "prices", &chain, &address, "usd"]);
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .map_err(transport_error)?;
        let data: TokenPriceData = unwrap_envelope(response)?;
        Ok(data.price)
    }

    /// Tokens aggregated across every supported chain.
    pub fn list_multi_chain(&self, params: &TokenListParams) -> Result<TokenListResult> {
        self.post(&["tokens"], params)
    }

    pub fn search_multi_chain(&self, params: &TokenSearchParams) -> Result<TokenListResult> {
        check_search(params)?;
        self.post(&["tokens", "search"], params)
    }

    /// Tokens on one chain. Cheaper than the multi-chain listing.
    pub fn list_single_chain(
        &self,
        chain_id: u64,
        params: &TokenListParams,
    ) -> Result<TokenListResult> {
        let chain = chain_id.to_string();
        self.post(&["tokens", &chain], params)
    }

    pub fn search_single_chain(
        &self,
        chain_id: u64,
        params: &TokenSearchParams,
    ) -> Result<TokenListResult> {
        check_search(params)?;
        let chain = chain_id.to_string();
        self.post(&["tokens", &chain, "search"], params)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, segments: &[&str], body: &B) -> Result<T> {
        let url = build_url(&self.base_url, segments);
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(transport_error)?;
        unwrap_envelope(response)
    }
}

fn check_search(params: &TokenSearchParams) -> Result<()> {
    if params.search.trim().is_empty() {
        return Err(GatewayError::api_error("search must not be empty"));
    }
    Ok(())
}
