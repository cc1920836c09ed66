//! Rendering helpers for pool records and USD amounts.
//!
//! Pool records are opaque JSON; any field that is missing or has an
//! unexpected type renders as `n/a`.

use num_format::{Locale, ToFormattedString};
use serde_json::Value;

const MISSING: &str = "n/a";

/// `1234567.891` -> `$1,234,567.89`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = int_part
        .parse::<u64>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| int_part.to_string());

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v),
        _ => MISSING.to_string(),
    }
}

/// The display-relevant fields of a pool record.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolSummary {
    pub protocol: String,
    pub pool_type: String,
    pub pair: String,
    pub address: String,
    pub tvl_usd: String,
    pub yield_24h: String,
    pub yield_7d: String,
    pub fee_tier: String,
}

impl PoolSummary {
    pub fn from_pool(pool: &Value) -> Self {
        Self {
            protocol: text_at(pool, "/protocol/name"),
            pool_type: text_at(pool, "/type"),
            pair: token_pair(pool),
            address: text_at(pool, "/address"),
            tvl_usd: number_at(pool, "/balance/totalValueLockedUsd")
                .map(format_usd)
                .unwrap_or_else(|| MISSING.to_string()),
            yield_24h: format_percent(number_at(pool, "/stats/stats24h/yield")),
            yield_7d: format_percent(number_at(pool, "/stats/stats7d/yield")),
            fee_tier: match pool.pointer("/feeTier/feeTierPercentage") {
                Some(Value::Number(n)) => format!("{}%", n),
                Some(Value::String(s)) => format!("{}%", s),
                _ => MISSING.to_string(),
            },
        }
    }
}

fn text_at(pool: &Value, pointer: &str) -> String {
    pool.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or(MISSING)
        .to_string()
}

fn number_at(pool: &Value, pointer: &str) -> Option<f64> {
    pool.pointer(pointer).and_then(Value::as_f64)
}

fn token_pair(pool: &Value) -> String {
    match pool.get("tokens").and_then(Value::as_array) {
        Some(tokens) if !tokens.is_empty() => tokens
            .iter()
            .map(|t| t.get("symbol").and_then(Value::as_str).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("-"),
        _ => MISSING.to_string(),
    }
}
