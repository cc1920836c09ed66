use crate::resources::TokenRef;
use serde::{Deserialize, Serialize};

/// A curated group of related tokens, e.g. USD stablecoins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenBasket {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub chain_ids: Vec<u64>,
    pub addresses: Vec<TokenRef>,
    pub tokens: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBasketList {
    pub baskets: Vec<TokenBasket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBasketResult {
    pub basket: TokenBasket,
}
