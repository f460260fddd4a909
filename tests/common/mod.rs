#![allow(dead_code)]

use portfolio_utils::domain::portfolio::{Portfolio, Security};
use serde_json::Map;

pub fn security(isin: &str, percentage: f64) -> Security {
    Security {
        isin: isin.to_string(),
        percentage,
        extra: Map::new(),
    }
}

pub fn portfolio(weights: &[(&str, f64)]) -> Portfolio {
    Portfolio {
        securities: weights
            .iter()
            .map(|(isin, pct)| security(isin, *pct))
            .collect(),
        extra: Map::new(),
    }
}

/// Portfolio with generated identifiers S0, S1, ... for each weight.
pub fn portfolio_from_weights(weights: &[f64]) -> Portfolio {
    Portfolio {
        securities: weights
            .iter()
            .enumerate()
            .map(|(i, pct)| security(&format!("S{i}"), *pct))
            .collect(),
        extra: Map::new(),
    }
}
