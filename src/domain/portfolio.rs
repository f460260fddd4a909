//! Security and portfolio weight types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One holding: an instrument identifier and its weight in percentage points.
///
/// Fields beyond `isin` and `percentage` are kept verbatim in `extra` so the
/// serialized shape survives a round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Security {
    pub isin: String,
    pub percentage: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Security {
    pub fn is_long(&self) -> bool {
        self.percentage > 0.0
    }

    /// A zero weight counts as short.
    pub fn is_short(&self) -> bool {
        self.percentage <= 0.0
    }
}

/// An ordered list of securities plus any passthrough fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub securities: Vec<Security>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Portfolio {
    /// Sum of all weights, shorts included.
    pub fn total_weight(&self) -> f64 {
        self.securities.iter().map(|s| s.percentage).sum()
    }
}
