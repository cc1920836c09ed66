use crate::resources::pools::{OrderField, SortDirection};
use serde::{Deserialize, Serialize};

/// A token on a specific chain. The address is forwarded untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRef {
    pub chain_id: u64,
    pub address: String,
}

impl TokenRef {
    pub fn new(chain_id: u64, address: impl Into<String>) -> Self {
        Self {
            chain_id,
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPriceData {
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenOrderBy {
    pub field: OrderField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<TokenOrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_total_value_pooled_usd: Option<f64>,
}

/// Body for the token list endpoints. An all-default value serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<TokenListConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<TokenFilters>,
}

impl TokenListParams {
    pub fn limit(mut self, limit: u32) -> Self {
        self.config.get_or_insert_with(Default::default).limit = Some(limit);
        self
    }

    pub fn order_by(mut self, field: OrderField, direction: SortDirection) -> Self {
        self.config.get_or_insert_with(Default::default).order_by =
            Some(TokenOrderBy { field, direction });
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.config.get_or_insert_with(Default::default).cursor = Some(cursor.into());
        self
    }

    pub fn min_pooled_usd(mut self, usd: f64) -> Self {
        self.filters
            .get_or_insert_with(Default::default)
            .minimum_total_value_pooled_usd = Some(usd);
        self
    }
}

/// Body for the token search endpoints: a keyword matched against symbol or
/// name, plus the same optional config and filters as a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSearchParams {
    pub search: String,
    #[serde(flatten)]
    pub list: TokenListParams,
}

impl TokenSearchParams {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            list: TokenListParams::default(),
        }
    }

    pub fn with(mut self, list: TokenListParams) -> Self {
        self.list = list;
        self
    }
}

/// One page of tokens. Token records are passed through as the gateway sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListResult {
    pub tokens: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
