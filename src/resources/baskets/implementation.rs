use super::dto::{TokenBasketList, TokenBasketResult};
use crate::error::{GatewayError, Result};
use crate::resources::helpers::{build_url, transport_error, unwrap_envelope};
use serde::de::DeserializeOwned;
use urlencoding::encode;

#[derive(Clone)]
pub struct BasketsResource {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl BasketsResource {
    pub(crate) fn new(http: reqwest::blocking::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// All baskets, optionally narrowed to `chain_ids` (empty means every chain).
    pub fn list(&self, chain_ids: &[u64]) -> Result<TokenBasketList> {
        let url = build_url(&self.base_url, &["tokens", "baskets"]);
        self.get(&url, chain_ids)
    }

    /// One basket across chains, optionally narrowed to `chain_ids`.
    pub fn get_multi_chain(&self, basket_id: &str, chain_ids: &[u64]) -> Result<TokenBasketResult> {
        let id = encode(check_basket_id(basket_id)?);
        let url = build_url(&self.base_url, &["tokens", "baskets", &id]);
        self.get(&url, chain_ids)
    }

    /// One basket restricted to a single chain.
    pub fn get_single_chain(&self, chain_id: u64, basket_id: &str) -> Result<TokenBasketResult> {
        let id = encode(check_basket_id(basket_id)?);
        let chain = chain_id.to_string();
        let url = build_url(&self.base_url, &["tokens", "baskets", &chain, &id]);
        self.get(&url, &[])
    }

    fn get<T: DeserializeOwned>(&self, url: &str, chain_ids: &[u64]) -> Result<T> {
        tracing::debug!("GET {} chainIds={:?}", url, chain_ids);
        let mut req = self.http.get(url).bearer_auth(&self.api_key);
        if !chain_ids.is_empty() {
            req = req.query(&chain_id_query(chain_ids));
        }
        let response = req.send().map_err(transport_error)?;
        unwrap_envelope(response)
    }
}

/// Repeated `chainIds` pairs: `?chainIds=1&chainIds=8453`.
fn chain_id_query(chain_ids: &[u64]) -> Vec<(&'static str, u64)> {
    chain_ids.iter().map(|id| ("chainIds", *id)).collect()
}

fn check_basket_id(basket_id: &str) -> Result<&str> {
    let id = basket_id.trim();
    if id.is_empty() {
        return Err(GatewayError::api_error("basketId must not be empty"));
    }
    Ok(id)
}
