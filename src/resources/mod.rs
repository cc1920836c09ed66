pub mod baskets;
pub(crate) mod helpers;
pub mod pools;
pub mod tokens;

pub use baskets::{BasketsResource, TokenBasket, TokenBasketList, TokenBasketResult};
pub use pools::{
    OrderField, PoolSearchResult, PoolsResource, SearchPoolsInput, SortDirection, Timeframe,
};
pub use tokens::{TokenListParams, TokenListResult, TokenRef, TokenSearchParams, TokensResource};
