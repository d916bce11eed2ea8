//! Core domain types, date helpers, and the library-wide error type.

use thiserror::Error;

pub mod day_count;
pub mod types;

pub use day_count::*;
pub use types::*;

/// Result alias used by every fallible operation in the crate.
pub type PayoffResult<T> = Result<T, PricingError>;

/// Valuation and aggregation errors surfaced by the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Input validation error: non-positive strike, spot, volatility or
    /// time-to-expiry, a non-finite value, or an unknown enum token.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The operation needs at least one position.
    #[error("portfolio has no positions")]
    EmptyPortfolio,
}

impl PricingError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Rejects values that are not finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> PayoffResult<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(format!("{name} must be finite")));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(format!("{name} must be > 0")));
    }
    Ok(())
}

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(name: &str, value: f64) -> PayoffResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(format!("{name} must be finite")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("strike", 1.0).is_ok());
        assert_eq!(
            ensure_positive("strike", 0.0),
            Err(PricingError::InvalidParameter(
                "strike must be > 0".to_string()
            ))
        );
        assert!(ensure_positive("strike", -3.0).is_err());
        assert!(ensure_positive("strike", f64::NAN).is_err());
        assert!(ensure_positive("strike", f64::INFINITY).is_err());
    }

    #[test]
    fn error_messages_are_readable() {
        let err = PricingError::invalid("vol must be > 0");
        assert_eq!(err.to_string(), "invalid parameter: vol must be > 0");
        assert_eq!(
            PricingError::EmptyPortfolio.to_string(),
            "portfolio has no positions"
        );
    }
}
