//! ferric-payoffs values European options with the Black-Scholes-Merton closed form
//! and turns option positions into payoff and profit curves for charting.
//!
//! The crate is the numeric core only: it produces ordered price, payoff and profit
//! series plus position labels. Rendering them is left to the caller.
//!
//! References:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 10 (payoff
//!   diagrams) and Ch. 15 (Black-Scholes-Merton).
//!
//! Numerical considerations:
//! - Pricing rejects non-positive spot, strike, volatility and time to expiry instead
//!   of returning NaN or an intrinsic fallback.
//! - Aggregation sums positions in list order so curves are reproducible.
//!
//! # Feature Flags
//! - `parallel`: computes per-position series with Rayon.
//!
//! # Quick Start
//! Price a Black-Scholes call:
//! ```rust
//! use ferric_payoffs::core::OptionType;
//! use ferric_payoffs::pricing::bsm_value;
//!
//! let px = bsm_value(OptionType::Call, 100.0, 100.0, 0.05, 1.0, 0.20).unwrap();
//! assert!(px > 10.0 && px < 11.0);
//! ```
//!
//! Build a long/short call portfolio and sweep its profit:
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use ferric_payoffs::instruments::{OptionPosition, PositionConfig};
//! use ferric_payoffs::market::Underlying;
//! use ferric_payoffs::portfolio::{Portfolio, SweepConfig};
//!
//! let as_of = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
//! let expiry = as_of + Duration::days(50);
//! let luv = Underlying::builder("Southwest Airlines")
//!     .ticker("LUV")
//!     .price(100.0)
//!     .vol(0.2)
//!     .build()
//!     .unwrap()
//!     .shared();
//!
//! let long = PositionConfig::call(luv.clone(), 100.0, expiry, 0.04).as_of(as_of);
//! let short = PositionConfig::call(luv, 120.0, expiry, 0.04).short().as_of(as_of);
//! let portfolio = Portfolio::new(vec![
//!     OptionPosition::new(long).unwrap(),
//!     OptionPosition::new(short).unwrap(),
//! ]);
//!
//! let curve = portfolio.curve(&SweepConfig::default()).unwrap();
//! assert_eq!(curve.prices.len(), curve.profits.len());
//! assert_eq!(curve.prices[0], 0.0);
//! println!("{portfolio}");
//! ```

pub mod core;
pub mod instruments;
pub mod market;
pub mod math;
pub mod portfolio;
pub mod pricing;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{OptionType, PositionSide, PayoffResult, PricingError};
    pub use crate::instruments::{OptionPosition, Position, PositionConfig};
    pub use crate::market::Underlying;
    pub use crate::portfolio::{PayoffCurve, Portfolio, SweepConfig};
    pub use crate::pricing::{BlackScholesModel, PricingModel, bsm_value};
}
