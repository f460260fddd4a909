//! Short-position removal and weight renormalization.

use std::borrow::Cow;

use super::error::PortfolioError;
use super::portfolio::{Portfolio, Security};

const WEIGHT_PRECISION: f64 = 1e4;

/// Round half away from zero at four fractional digits.
fn round_weight(weight: f64) -> f64 {
    (weight * WEIGHT_PRECISION).round() / WEIGHT_PRECISION
}

/// Remove every short position (weight <= 0) from a portfolio and rescale
/// the survivors so their weights sum to 100.
///
/// Each surviving weight becomes `old * 100 / total` rounded to four decimal
/// places, so the output sum can drift from 100 by rounding error (about
/// 0.001 at most for portfolios of ordinary size). Survivor order matches
/// the input order.
///
/// When nothing is removed, the input is returned as [`Cow::Borrowed`] with
/// no rescaling applied; callers can detect the no-op by matching on the
/// variant. The rescaling path returns a fresh [`Cow::Owned`] portfolio that
/// shares nothing with the input, with every field other than `securities`
/// carried over unchanged.
///
/// # Errors
///
/// - [`PortfolioError::NonFiniteWeight`] if any weight is NaN or infinite.
/// - [`PortfolioError::AllPositionsRemoved`] if the portfolio holds
///   securities but none with a strictly positive weight.
pub fn remove_shorts_and_normalize(
    portfolio: &Portfolio,
) -> Result<Cow<'_, Portfolio>, PortfolioError> {
    if let Some(bad) = portfolio
        .securities
        .iter()
        .find(|s| !s.percentage.is_finite())
    {
        return Err(PortfolioError::NonFiniteWeight {
            isin: bad.isin.clone(),
            value: bad.percentage,
        });
    }

    let kept: Vec<&Security> = portfolio
        .securities
        .iter()
        .filter(|s| s.is_long())
        .collect();

    if kept.len() >= portfolio.securities.len() {
        return Ok(Cow::Borrowed(portfolio));
    }

    if kept.is_empty() {
        return Err(PortfolioError::AllPositionsRemoved);
    }

    let total: f64 = kept.iter().map(|s| s.percentage).sum();

    let securities = kept
        .into_iter()
        .map(|s| {
            let mut rescaled = s.clone();
            rescaled.percentage = round_weight(s.percentage * 100.0 / total);
            rescaled
        })
        .collect();

    Ok(Cow::Owned(Portfolio {
        securities,
        extra: portfolio.extra.clone(),
    }))
}
