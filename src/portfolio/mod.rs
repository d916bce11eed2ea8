//! Portfolio aggregation of option positions.
//!
//! A [`Portfolio`] sums payoffs and profits of its positions over a shared
//! price sweep. Sums are taken in position-list order, so results are
//! reproducible bit for bit; with the `parallel` feature the per-position
//! series are computed on the rayon pool and summed in the same order.

use std::fmt;

use log::trace;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{PayoffResult, PricingError};
use crate::instruments::{DEFAULT_PERCENT_RANGE, OptionPosition, Position};

pub mod sweep;

pub use sweep::*;

/// Ordered collection of positions.
///
/// # Examples
/// ```
/// use chrono::{Duration, NaiveDate};
/// use ferric_payoffs::instruments::{OptionPosition, PositionConfig};
/// use ferric_payoffs::market::Underlying;
/// use ferric_payoffs::portfolio::Portfolio;
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// let expiry = as_of + Duration::days(50);
/// let stock = Underlying::builder("Acme").price(100.0).vol(0.2).build().unwrap().shared();
///
/// let portfolio = Portfolio::new(vec![
///     OptionPosition::new(PositionConfig::call(stock.clone(), 100.0, expiry, 0.04).as_of(as_of))
///         .unwrap(),
///     OptionPosition::new(
///         PositionConfig::call(stock, 120.0, expiry, 0.04).short().as_of(as_of),
///     )
///     .unwrap(),
/// ]);
///
/// assert_eq!(portfolio.max_top_price_bound(), 240.0);
/// assert_eq!(portfolio.aggregate_payoffs(&[90.0, 110.0, 150.0]), vec![0.0, 10.0, 20.0]);
/// assert_eq!(portfolio.describe_positions(), "Long Call (100)\nShort Call (120)\n");
/// ```
#[derive(Debug, Clone)]
pub struct Portfolio<P = OptionPosition> {
    positions: Vec<P>,
}

impl<P> Default for Portfolio<P> {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
        }
    }
}

impl<P: Position> Portfolio<P> {
    /// Wraps positions in list order.
    pub fn new(positions: Vec<P>) -> Self {
        Self { positions }
    }

    /// Positions in list order.
    pub fn positions(&self) -> &[P] {
        &self.positions
    }

    /// Replaces the whole position list, returning the previous one.
    pub fn set_positions(&mut self, positions: Vec<P>) -> Vec<P> {
        std::mem::replace(&mut self.positions, positions)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the portfolio holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Largest [`Position::top_price_bound`]; `0.0` for an empty portfolio.
    pub fn max_top_price_bound(&self) -> f64 {
        self.max_top_price_bound_with(DEFAULT_PERCENT_RANGE)
    }

    /// Largest `strike * percent_range`; `0.0` for an empty portfolio.
    pub fn max_top_price_bound_with(&self, percent_range: f64) -> f64 {
        self.positions
            .iter()
            .map(|p| p.top_price_bound_with(percent_range))
            .fold(0.0, f64::max)
    }

    /// Sweep prices from `bottom_price` up to, excluding, the top bound.
    ///
    /// An empty portfolio yields an empty sweep.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParameter`] for a non-positive or
    /// non-finite `step` or a non-finite `bottom_price`.
    pub fn price_sweep(&self, bottom_price: f64, step: f64) -> PayoffResult<Vec<f64>> {
        price_grid(bottom_price, self.max_top_price_bound(), step)
    }

    /// Sum of every position's payoff series; zeros when empty.
    pub fn aggregate_payoffs(&self, prices: &[f64]) -> Vec<f64> {
        self.aggregate(prices, |p, xs| p.payoff_series(xs))
    }

    /// Sum of every position's profit series; zeros when empty.
    pub fn aggregate_profits(&self, prices: &[f64]) -> Vec<f64> {
        self.aggregate(prices, |p, xs| p.profit_series(xs))
    }

    /// Payoff series of each position, labelled, in list order.
    pub fn payoff_curves(&self, prices: &[f64]) -> Vec<LabeledSeries> {
        self.labeled(prices, |p, xs| p.payoff_series(xs))
    }

    /// Profit series of each position, labelled, in list order.
    pub fn profit_curves(&self, prices: &[f64]) -> Vec<LabeledSeries> {
        self.labeled(prices, |p, xs| p.profit_series(xs))
    }

    /// Sweep and aggregate payoffs and profits in one pass over the config.
    ///
    /// # Errors
    /// Returns [`PricingError::EmptyPortfolio`] when there is nothing to
    /// chart, and [`PricingError::InvalidParameter`] for an invalid config.
    pub fn curve(&self, config: &SweepConfig) -> PayoffResult<PayoffCurve> {
        if self.is_empty() {
            return Err(PricingError::EmptyPortfolio);
        }
        config.validate()?;
        let top = self.max_top_price_bound_with(config.percent_range);
        let prices = price_grid(config.bottom_price, top, config.step)?;
        let payoffs = self.aggregate_payoffs(&prices);
        let profits = self.aggregate_profits(&prices);
        Ok(PayoffCurve {
            prices,
            payoffs,
            profits,
        })
    }

    /// One label per line, each terminated by `\n`, in list order.
    pub fn describe_positions(&self) -> String {
        self.positions
            .iter()
            .map(|p| format!("{}\n", p.label()))
            .collect()
    }

    fn aggregate<F>(&self, prices: &[f64], series: F) -> Vec<f64>
    where
        F: Fn(&P, &[f64]) -> Vec<f64> + Sync,
    {
        let mut total = vec![0.0; prices.len()];
        for values in self.per_position(prices, &series) {
            for (acc, v) in total.iter_mut().zip(values) {
                *acc += v;
            }
        }
        total
    }

    fn labeled<F>(&self, prices: &[f64], series: F) -> Vec<LabeledSeries>
    where
        F: Fn(&P, &[f64]) -> Vec<f64> + Sync,
    {
        self.positions
            .iter()
            .zip(self.per_position(prices, &series))
            .map(|(p, values)| LabeledSeries {
                label: p.label(),
                values,
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn per_position<F>(&self, prices: &[f64], series: &F) -> Vec<Vec<f64>>
    where
        F: Fn(&P, &[f64]) -> Vec<f64> + Sync,
    {
        trace!(
            "evaluating {} positions over {} prices",
            self.positions.len(),
            prices.len()
        );
        self.positions.iter().map(|p| series(p, prices)).collect()
    }

    #[cfg(feature = "parallel")]
    fn per_position<F>(&self, prices: &[f64], series: &F) -> Vec<Vec<f64>>
    where
        F: Fn(&P, &[f64]) -> Vec<f64> + Sync,
    {
        trace!(
            "evaluating {} positions over {} prices on the rayon pool",
            self.positions.len(),
            prices.len()
        );
        self.positions
            .par_iter()
            .map(|p| series(p, prices))
            .collect()
    }
}

impl<P: Position> fmt::Display for Portfolio<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Portfolio containing:\n{}", self.describe_positions())
    }
}
