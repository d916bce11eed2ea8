//! Price sweeps and the numeric series handed to chart drivers.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{PayoffResult, PricingError, ensure_finite, ensure_positive};
use crate::instruments::DEFAULT_PERCENT_RANGE;

/// Grid settings for a payoff/profit sweep.
///
/// Deserializes from JSON with every field optional:
/// ```
/// use ferric_payoffs::portfolio::SweepConfig;
///
/// let cfg: SweepConfig = serde_json::from_str(r#"{"step": 0.5}"#).unwrap();
/// assert_eq!(cfg.bottom_price, 0.0);
/// assert_eq!(cfg.step, 0.5);
/// assert_eq!(cfg.percent_range, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// First price on the grid.
    pub bottom_price: f64,
    /// Grid spacing, must be > 0.
    pub step: f64,
    /// Upper bound as a multiple of the largest strike.
    pub percent_range: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            bottom_price: 0.0,
            step: 0.01,
            percent_range: DEFAULT_PERCENT_RANGE,
        }
    }
}

impl SweepConfig {
    /// Checks that the grid is well defined.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParameter`] for a non-finite bottom
    /// price, a non-positive step or a non-positive percent range.
    pub fn validate(&self) -> PayoffResult<()> {
        ensure_finite("sweep bottom price", self.bottom_price)?;
        ensure_positive("sweep step", self.step)?;
        ensure_positive("sweep percent range", self.percent_range)?;
        Ok(())
    }
}

/// `bottom, bottom + step, ...` strictly below `top`.
///
/// Points are computed as `bottom + i * step` so rounding does not accumulate.
/// The point count is trimmed so the last point stays below `top` even when
/// `(top - bottom) / step` rounds up past an integer. Returns an empty grid
/// when `top <= bottom`.
pub fn price_grid(bottom: f64, top: f64, step: f64) -> PayoffResult<Vec<f64>> {
    ensure_finite("sweep bottom price", bottom)?;
    ensure_finite("sweep top price", top)?;
    ensure_positive("sweep step", step)?;
    if top <= bottom {
        return Ok(Vec::new());
    }

    let n = ((top - bottom) / step).ceil();
    if !n.is_finite() || n > usize::MAX as f64 {
        return Err(PricingError::invalid(format!(
            "sweep from {bottom} to {top} by {step} has too many points"
        )));
    }
    let mut n = n as usize;
    while n > 0 && bottom + (n - 1) as f64 * step >= top {
        n -= 1;
    }
    debug!("price sweep [{bottom}, {top}) step {step}: {n} points");
    Ok((0..n).map(|i| bottom + i as f64 * step).collect())
}

/// Named series for one position, e.g. one line on a payoff chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    /// Position label such as `Long Call (100)`.
    pub label: String,
    /// One value per sweep price.
    pub values: Vec<f64>,
}

/// Aggregate portfolio curve over a price sweep. All vectors share a length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffCurve {
    /// Sweep prices (x axis).
    pub prices: Vec<f64>,
    /// Summed payoffs.
    pub payoffs: Vec<f64>,
    /// Summed profits.
    pub profits: Vec<f64>,
}

impl PayoffCurve {
    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when the sweep produced no points.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn grid_excludes_the_top() {
        let grid = price_grid(0.0, 5.0, 1.0).unwrap();
        assert_eq!(grid, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn grid_keeps_a_partial_last_step() {
        let grid = price_grid(1.0, 2.0, 0.3).unwrap();
        assert_eq!(grid.len(), 4);
        assert_relative_eq!(grid[3], 1.9, epsilon = 1e-12);
    }

    #[test]
    fn penny_grid_over_two_hundred() {
        let grid = price_grid(0.0, 200.0, 0.01).unwrap();
        assert_eq!(grid.len(), 20_000);
        assert_relative_eq!(*grid.last().unwrap(), 199.99, epsilon = 1e-9);
    }

    #[test]
    fn last_point_stays_below_an_inexact_top() {
        // 0.14 / 0.01 rounds to 14.000000000000002, so ceil alone yields 15 points.
        let grid = price_grid(0.0, 0.14, 0.01).unwrap();
        assert_eq!(grid.len(), 14);
        assert!(*grid.last().unwrap() < 0.14);

        for top in [0.07, 20.26, 32.02, 32.34, 5.0] {
            let grid = price_grid(0.0, top, 0.01).unwrap();
            let last = *grid.last().unwrap();
            assert!(last < top, "last point {last} reaches top {top}");
            assert!(last + 0.01 >= top - 1e-9);
        }
    }

    #[test]
    fn empty_when_top_not_above_bottom() {
        assert!(price_grid(0.0, 0.0, 0.01).unwrap().is_empty());
        assert!(price_grid(50.0, 10.0, 0.01).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_step() {
        assert!(price_grid(0.0, 10.0, 0.0).is_err());
        assert!(price_grid(0.0, 10.0, -1.0).is_err());
        assert!(price_grid(0.0, 10.0, f64::NAN).is_err());
        assert!(price_grid(f64::NEG_INFINITY, 10.0, 1.0).is_err());
    }

    #[test]
    fn config_defaults_and_validation() {
        let cfg = SweepConfig::default();
        assert_eq!(cfg.bottom_price, 0.0);
        assert_eq!(cfg.step, 0.01);
        assert_eq!(cfg.percent_range, 2.0);
        assert!(cfg.validate().is_ok());
        assert!(SweepConfig { step: 0.0, ..cfg }.validate().is_err());
        assert!(SweepConfig { percent_range: -1.0, ..cfg }.validate().is_err());
    }
}
