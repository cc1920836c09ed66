pub mod dto;
pub mod implementation;

pub use dto::{
    TokenFilters, TokenListConfig, TokenListParams, TokenListResult, TokenOrderBy,
    TokenPriceData, TokenRef, TokenSearchParams,
};
pub use implementation::TokensResource;
