//! Domain error types.

/// Top-level error type for portfolio_utils.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioError {
    #[error("all positions are short; no weight survives normalization")]
    AllPositionsRemoved,

    #[error("non-finite weight {value} for security {isin}")]
    NonFiniteWeight { isin: String, value: f64 },
}
