//! portfolio_utils — long-only portfolio weight normalization.
//!
//! Pure domain logic in [`domain`]; the crate performs no I/O.

pub mod domain;
