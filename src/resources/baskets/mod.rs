pub mod dto;
pub mod implementation;

pub use dto::{TokenBasket, TokenBasketList, TokenBasketResult};
pub use implementation::BasketsResource;
