use super::dto::{PoolSearchResult, SearchPoolsInput};
use crate::error::{GatewayError, Result};
use crate::resources::helpers::{build_url, transport_error, unwrap_envelope};
use reqwest::header::CONTENT_TYPE;

#[derive(Clone)]
pub struct PoolsResource {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl PoolsResource {
    pub(crate) fn new(http: reqwest::blocking::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Single `POST /pools/search` call.
    pub fn search_pools(&self, input: &SearchPoolsInput) -> Result<PoolSearchResult> {
        if input.tokens_a.is_empty() {
            return Err(GatewayError::api_error("tokensA must not be empty"));
        }
        if input.limit == 0 {
            return Err(GatewayError::api_error("limit must be at least 1"));
        }
        if !input.min_tvl_usd.is_finite() || input.min_tvl_usd < 0.0 {
            return Err(GatewayError::api_error(
                "minimumTotalValueLockedUsd must be a non-negative number",
            ));
        }

        let url = build_url(&self.base_url, &["pools", "search"]);
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&input.to_request())
            .send()
            .map_err(transport_error)?;
        unwrap_envelope(response)
    }

    /// Walks the result pages by following `nextCursor`, fetching at most
    /// `max_pages` pages. The input's own cursor seeds the first request.
    /// A missing or empty cursor ends the walk.
    pub fn search_pool_pages(
        &self,
        input: &SearchPoolsInput,
        max_pages: usize,
    ) -> Result<Vec<PoolSearchResult>> {
        let mut pages = Vec::new();
        let mut request = input.clone();

        while pages.len() < max_pages {
            let page = self.search_pools(&request)?;
            let next = page.next_cursor.clone();
            tracing::debug!("Fetched page {} with {} pools", pages.len() + 1, page.pools.len());
            pages.push(page);

            match next {
                Some(cursor) if !cursor.is_empty() => request.cursor = Some(cursor),
                _ => break,
            }
        }

        Ok(pages)
    }
}
