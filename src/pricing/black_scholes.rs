//! Module `pricing::black_scholes`.
//!
//! Closed-form Black-Scholes-Merton value of a European option on a
//! non-dividend-paying underlying.
//!
//! References: Hull (11th ed.), Ch. 15, Eq. (15.20)-(15.21).
//!
//! Unlike a kernel that falls back to intrinsic value, every degenerate input
//! (`t <= 0`, `sigma <= 0`, `s <= 0`, `k <= 0`, non-finite values) is rejected
//! with [`PricingError::InvalidParameter`], so callers never see NaN or
//! infinities.

use crate::core::{OptionType, PayoffResult, PricingError, ensure_finite, ensure_positive};
use crate::math::normal_cdf;

#[inline]
fn d1_d2(spot: f64, strike: f64, rate: f64, expiry: f64, vol: f64) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + vol * vol / 2.0) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes-Merton value with zero dividend yield.
///
/// Parameters:
/// - `option_type`: call or put payoff direction.
/// - `spot`: current underlying price.
/// - `strike`: strike price.
/// - `rate`: continuously compounded annual risk-free rate.
/// - `expiry`: time to expiry in years.
/// - `vol`: annualized volatility.
///
/// # Errors
/// Returns [`PricingError::InvalidParameter`] when `spot`, `strike`,
/// `expiry` or `vol` is not strictly positive, when any input is non-finite,
/// or when the result is not finite.
///
/// # Examples
/// ```rust
/// use ferric_payoffs::core::OptionType;
/// use ferric_payoffs::pricing::bsm_value;
///
/// let call = bsm_value(OptionType::Call, 100.0, 100.0, 0.05, 1.0, 0.20).unwrap();
/// let put = bsm_value(OptionType::Put, 100.0, 100.0, 0.05, 1.0, 0.20).unwrap();
/// assert!(call > put);
/// assert!(bsm_value(OptionType::Call, 100.0, 100.0, 0.05, 0.0, 0.20).is_err());
/// ```
pub fn bsm_value(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    vol: f64,
) -> PayoffResult<f64> {
    ensure_positive("spot", spot)?;
    ensure_positive("strike", strike)?;
    ensure_finite("risk-free rate", rate)?;
    ensure_positive("time to expiry", expiry)?;
    ensure_positive("volatility", vol)?;

    let (d1, d2) = d1_d2(spot, strike, rate, expiry, vol);
    let df = (-rate * expiry).exp();
    let value = match option_type {
        OptionType::Call => normal_cdf(d1) * spot - normal_cdf(d2) * strike * df,
        OptionType::Put => strike * df * normal_cdf(-d2) - spot * normal_cdf(-d1),
    };

    if !value.is_finite() {
        return Err(PricingError::invalid(format!(
            "black-scholes value is not finite (s={spot}, k={strike}, r={rate}, t={expiry}, vol={vol})"
        )));
    }
    Ok(value)
}

/// Market and contract inputs handed to a [`PricingModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInputs {
    /// Call or put.
    pub option_type: OptionType,
    /// Underlying spot price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Time to expiry in years.
    pub expiry: f64,
    /// Annualized volatility.
    pub vol: f64,
}

/// Valuation model abstraction used by positions to derive premiums.
///
/// Every model receives the same inputs so positions can swap models without
/// changing how they gather market data.
pub trait PricingModel {
    /// Theoretical value of one option contract.
    fn value(&self, inputs: &ModelInputs) -> PayoffResult<f64>;
}

/// Analytic Black-Scholes-Merton model for European options.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesModel;

impl BlackScholesModel {
    /// Creates a Black-Scholes model instance.
    pub fn new() -> Self {
        Self
    }
}

impl PricingModel for BlackScholesModel {
    fn value(&self, inputs: &ModelInputs) -> PayoffResult<f64> {
        bsm_value(
            inputs.option_type,
            inputs.spot,
            inputs.strike,
            inputs.rate,
            inputs.expiry,
            inputs.vol,
        )
    }
}
