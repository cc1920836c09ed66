use crate::client::HydricGateway;
use crate::error::Result;
use crate::resources::TokenRef;

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioEntry {
    pub token: TokenRef,
    pub symbol: String,
    pub amount: f64,
}

impl PortfolioEntry {
    pub fn new(token: TokenRef, symbol: impl Into<String>, amount: f64) -> Self {
        Self {
            token,
            symbol: symbol.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioLine {
    pub entry: PortfolioEntry,
    pub price_usd: f64,
    pub value_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioValuation {
    pub lines: Vec<PortfolioLine>,
    pub total_usd: f64,
}

/// Prices each entry in order; the first failed lookup aborts the valuation.
pub fn value_portfolio(
    gateway: &HydricGateway,
    entries: &[PortfolioEntry],
) -> Result<PortfolioValuation> {
    let mut valuation = PortfolioValuation::default();

    for entry in entries {
        let price_usd = gateway.get_token_price(entry.token.chain_id, &entry.token.address)?;
        let value_usd = price_usd * entry.amount;
        valuation.total_usd += value_usd;
        valuation.lines.push(PortfolioLine {
            entry: entry.clone(),
            price_usd,
            value_usd,
        });
    }

    Ok(valuation)
}
