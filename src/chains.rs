//! Chain ids and well-known token addresses supported by the gateway.

use crate::resources::TokenRef;

pub struct ChainId;

impl ChainId {
    pub const ETHEREUM: u64 = 1;
    pub const BASE: u64 = 8453;
    pub const SCROLL: u64 = 534352;
    pub const MONAD: u64 = 143;
    pub const UNICHAIN: u64 = 130;
    pub const HYPER_EVM: u64 = 999;
    pub const PLASMA: u64 = 9745;

    /// Every supported chain with its display name.
    pub const ALL: [(u64, &'static str); 7] = [
        (Self::ETHEREUM, "Ethereum"),
        (Self::BASE, "Base"),
        (Self::SCROLL, "Scroll"),
        (Self::MONAD, "Monad"),
        (Self::UNICHAIN, "Unichain"),
        (Self::HYPER_EVM, "HyperEVM"),
        (Self::PLASMA, "Plasma"),
    ];

    pub fn name(chain_id: u64) -> Option<&'static str> {
        Self::ALL
            .iter()
            .find(|(id, _)| *id == chain_id)
            .map(|(_, name)| *name)
    }
}

pub struct Tokens;

impl Tokens {
    /// Native ETH uses the zero address.
    pub const ETH: &'static str = "0x0000000000000000000000000000000000000000";
    pub const WETH_BASE: &'static str = "0x4200000000000000000000000000000000000006";
    pub const USDC_ETH: &'static str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
    pub const USDC_BASE: &'static str = "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913";

    pub fn eth() -> TokenRef {
        TokenRef::new(ChainId::ETHEREUM, Self::ETH)
    }

    pub fn weth_base() -> TokenRef {
        TokenRef::new(ChainId::BASE, Self::WETH_BASE)
    }

    pub fn usdc_eth() -> TokenRef {
        TokenRef::new(ChainId::ETHEREUM, Self::USDC_ETH)
    }

    pub fn usdc_base() -> TokenRef {
        TokenRef::new(ChainId::BASE, Self::USDC_BASE)
    }
}
