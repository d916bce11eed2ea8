//! Module `instruments::position`.
//!
//! A single European option holding on an [`Underlying`]. [`OptionPosition`]
//! stores side, option type, strike, expiration and the premium (`cost`) it
//! was opened at. When no premium is supplied, it is priced once at
//! construction through a [`PricingModel`] and frozen; later calls to
//! [`Position::value`] re-price with the current date and may drift from it.
//!
//! The [`Position`] trait is the capability set portfolios aggregate over.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::core::{
    OptionType, PositionSide, PayoffResult, PricingError, ensure_finite, ensure_positive, today,
    year_fraction_act365,
};
use crate::market::Underlying;
use crate::pricing::{BlackScholesModel, ModelInputs, PricingModel, intrinsic_payoff};

/// Multiple of the strike used as the upper end of a payoff chart.
pub const DEFAULT_PERCENT_RANGE: f64 = 2.0;

/// Capabilities shared by every holding a portfolio can aggregate.
pub trait Position: fmt::Display + Send + Sync {
    /// Strike level.
    fn strike(&self) -> f64;

    /// Premium paid (long) or received (short), fixed at construction.
    fn cost(&self) -> f64;

    /// Value of exercising immediately at `underlying_price`.
    fn payoff(&self, underlying_price: f64) -> f64;

    /// Theoretical value of the contract today under the default model.
    fn value(&self, risk_free_rate: f64) -> PayoffResult<f64>;

    /// Payoff net of the premium.
    fn profit(&self, underlying_price: f64) -> f64 {
        self.payoff(underlying_price) - self.cost()
    }

    /// Elementwise [`Position::payoff`], same length and order as `prices`.
    fn payoff_series(&self, prices: &[f64]) -> Vec<f64> {
        prices.iter().map(|&p| self.payoff(p)).collect()
    }

    /// Elementwise [`Position::profit`]; equals `payoff_series(prices) - cost`.
    fn profit_series(&self, prices: &[f64]) -> Vec<f64> {
        let cost = self.cost();
        self.payoff_series(prices)
            .into_iter()
            .map(|payoff| payoff - cost)
            .collect()
    }

    /// Upper price for a payoff chart: `strike * percent_range`.
    fn top_price_bound_with(&self, percent_range: f64) -> f64 {
        self.strike() * percent_range
    }

    /// Upper price for a payoff chart at 200% of the strike.
    fn top_price_bound(&self) -> f64 {
        self.top_price_bound_with(DEFAULT_PERCENT_RANGE)
    }

    /// Display label, e.g. `Long Call (100)`.
    fn label(&self) -> String {
        self.to_string()
    }
}

/// Construction parameters for an [`OptionPosition`].
///
/// # Examples
/// ```
/// use chrono::{Duration, NaiveDate};
/// use ferric_payoffs::instruments::{OptionPosition, Position, PositionConfig};
/// use ferric_payoffs::market::Underlying;
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let luv = Underlying::builder("Southwest Airlines")
///     .ticker("LUV")
///     .price(100.0)
///     .vol(0.2)
///     .build()
///     .unwrap()
///     .shared();
///
/// let call = OptionPosition::new(
///     PositionConfig::call(luv, 120.0, as_of + Duration::days(50), 0.04)
///         .short()
///         .as_of(as_of),
/// )
/// .unwrap();
/// assert_eq!(call.label(), "Short Call (120)");
/// assert_eq!(call.payoff(150.0), -30.0);
/// ```
#[derive(Debug, Clone)]
pub struct PositionConfig {
    /// Security the option is written on.
    pub underlying: Arc<Underlying>,
    /// Call or put.
    pub option_type: OptionType,
    /// Long or short.
    pub side: PositionSide,
    /// Strike level, must be > 0.
    pub strike: f64,
    /// Expiration date, must be after `as_of`.
    pub expiration: NaiveDate,
    /// Continuously compounded rate used when the premium is modelled.
    pub risk_free_rate: f64,
    /// Premium; `None` prices it through the model.
    pub cost: Option<f64>,
    /// Valuation date; `None` means today.
    pub as_of: Option<NaiveDate>,
}

impl PositionConfig {
    /// Long call with a modelled premium, valued today.
    pub fn call(
        underlying: Arc<Underlying>,
        strike: f64,
        expiration: NaiveDate,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            underlying,
            option_type: OptionType::Call,
            side: PositionSide::Long,
            strike,
            expiration,
            risk_free_rate,
            cost: None,
            as_of: None,
        }
    }

    /// Long put with a modelled premium, valued today.
    pub fn put(
        underlying: Arc<Underlying>,
        strike: f64,
        expiration: NaiveDate,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            option_type: OptionType::Put,
            ..Self::call(underlying, strike, expiration, risk_free_rate)
        }
    }

    /// Sets the side to long.
    pub fn long(mut self) -> Self {
        self.side = PositionSide::Long;
        self
    }

    /// Sets the side to short.
    pub fn short(mut self) -> Self {
        self.side = PositionSide::Short;
        self
    }

    /// Sets the side.
    pub fn side(mut self, side: PositionSide) -> Self {
        self.side = side;
        self
    }

    /// Uses an explicit premium instead of the model value.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Fixes the valuation date used for the time to expiry.
    pub fn as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }
}

/// European option holding on a shared underlying.
#[derive(Debug, Clone)]
pub struct OptionPosition {
    underlying: Arc<Underlying>,
    option_type: OptionType,
    side: PositionSide,
    strike: f64,
    expiration: NaiveDate,
    cost: f64,
}

impl OptionPosition {
    /// Builds a position, pricing the premium with Black-Scholes when the
    /// config carries none.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParameter`] when:
    /// - `strike <= 0` or is not finite
    /// - `expiration` is not after the valuation date
    /// - a supplied `cost` is not finite
    /// - the premium must be modelled and the underlying has no spot
    pub fn new(config: PositionConfig) -> PayoffResult<Self> {
        Self::with_model(config, &BlackScholesModel)
    }

    /// Same as [`OptionPosition::new`] with a caller-chosen pricing model.
    ///
    /// The model is not consulted when the config carries a cost.
    pub fn with_model<M: PricingModel + ?Sized>(
        config: PositionConfig,
        model: &M,
    ) -> PayoffResult<Self> {
        ensure_positive("strike", config.strike)?;
        ensure_finite("risk-free rate", config.risk_free_rate)?;
        let as_of = config.as_of.unwrap_or_else(today);
        if config.expiration <= as_of {
            return Err(PricingError::invalid(format!(
                "expiration {} must be after valuation date {as_of}",
                config.expiration
            )));
        }

        let mut position = Self {
            underlying: config.underlying,
            option_type: config.option_type,
            side: config.side,
            strike: config.strike,
            expiration: config.expiration,
            cost: 0.0,
        };

        let cost = match config.cost {
            Some(cost) => {
                ensure_finite("cost", cost)?;
                cost
            }
            None => {
                let cost = position.value_with(model, config.risk_free_rate, as_of)?;
                debug!(
                    "{position} on {}: modelled premium {cost:.6} (r={}, as_of={as_of})",
                    position.underlying, config.risk_free_rate
                );
                cost
            }
        };
        position.cost = cost;
        Ok(position)
    }

    /// Shared underlying.
    pub fn underlying(&self) -> &Arc<Underlying> {
        &self.underlying
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Long or short.
    pub fn side(&self) -> PositionSide {
        self.side
    }

    /// Expiration date.
    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Act/365 years from `as_of` to expiration; negative once expired.
    pub fn time_to_expiry(&self, as_of: NaiveDate) -> f64 {
        year_fraction_act365(as_of, self.expiration)
    }

    /// Black-Scholes value as of a given date.
    pub fn value_as_of(&self, risk_free_rate: f64, as_of: NaiveDate) -> PayoffResult<f64> {
        self.value_with(&BlackScholesModel, risk_free_rate, as_of)
    }

    /// Model value as of a given date, using the underlying's current spot
    /// and volatility.
    ///
    /// # Errors
    /// Propagates model errors, including a non-positive time to expiry and a
    /// missing spot on the underlying.
    pub fn value_with<M: PricingModel + ?Sized>(
        &self,
        model: &M,
        risk_free_rate: f64,
        as_of: NaiveDate,
    ) -> PayoffResult<f64> {
        let inputs = ModelInputs {
            option_type: self.option_type,
            spot: self.underlying.require_spot()?,
            strike: self.strike,
            rate: risk_free_rate,
            expiry: self.time_to_expiry(as_of),
            vol: self.underlying.vol(),
        };
        model.value(&inputs)
    }
}

impl Position for OptionPosition {
    #[inline]
    fn strike(&self) -> f64 {
        self.strike
    }

    #[inline]
    fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    fn payoff(&self, underlying_price: f64) -> f64 {
        intrinsic_payoff(self.option_type, self.side, self.strike, underlying_price)
    }

    fn value(&self, risk_free_rate: f64) -> PayoffResult<f64> {
        self.value_as_of(risk_free_rate, today())
    }
}

impl fmt::Display for OptionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.side, self.option_type, self.strike)
    }
}
