pub mod dto;
pub mod implementation;

pub use dto::{
    OrderField, PoolSearchResult, SearchPoolsInput, SearchPoolsRequest, SortDirection, Timeframe,
};
pub use implementation::PoolsResource;
