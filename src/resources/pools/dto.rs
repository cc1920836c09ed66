use crate::resources::TokenRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    #[default]
    Tvl,
    Yield,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

/// Typed parameters for a pool search. `new` fills in the gateway defaults:
/// limit 10, ordered by TVL descending over 24h, no TVL floor.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPoolsInput {
    pub tokens_a: Vec<TokenRef>,
    pub tokens_b: Option<Vec<TokenRef>>,
    pub min_tvl_usd: f64,
    pub limit: u32,
    pub order_by: OrderField,
    pub direction: SortDirection,
    pub timeframe: Timeframe,
    pub cursor: Option<String>,
}

impl SearchPoolsInput {
    pub fn new(tokens_a: Vec<TokenRef>) -> Self {
        Self {
            tokens_a,
            tokens_b: None,
            min_tvl_usd: 0.0,
            limit: 10,
            order_by: OrderField::default(),
            direction: SortDirection::default(),
            timeframe: Timeframe::default(),
            cursor: None,
        }
    }

    pub fn tokens_b(mut self, tokens_b: Vec<TokenRef>) -> Self {
        self.tokens_b = Some(tokens_b);
        self
    }

    pub fn min_tvl_usd(mut self, min_tvl_usd: f64) -> Self {
        self.min_tvl_usd = min_tvl_usd;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn order_by(mut self, field: OrderField, direction: SortDirection) -> Self {
        self.order_by = field;
        self.direction = direction;
        self
    }

    pub fn timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Wire body for `POST /pools/search`.
    pub fn to_request(&self) -> SearchPoolsRequest {
        SearchPoolsRequest {
            tokens_a: self.tokens_a.clone(),
            tokens_b: self.tokens_b.clone(),
            config: SearchConfig {
                limit: self.limit,
                order_by: OrderBy {
                    field: self.order_by,
                    direction: self.direction,
                    timeframe: self.timeframe,
                },
                cursor: self.cursor.clone(),
            },
            filters: SearchFilters {
                minimum_total_value_locked_usd: self.min_tvl_usd,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPoolsRequest {
    pub tokens_a: Vec<TokenRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_b: Option<Vec<TokenRef>>,
    pub config: SearchConfig,
    pub filters: SearchFilters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub limit: u32,
    pub order_by: OrderBy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: OrderField,
    pub direction: SortDirection,
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub minimum_total_value_locked_usd: f64,
}

/// One page of search results. Pools are passed through as the gateway sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSearchResult {
    pub pools: Vec<serde_json::Value>,
    #[serde(default, alias = "cursor", skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
