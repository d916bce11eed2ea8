//! Module `pricing::payoff`.
//!
//! Exercise value of a single option holding at a given underlying price.
//! Prices are not validated; negative inputs evaluate like any other number.

use crate::core::{OptionType, PositionSide};

/// Value of exercising immediately at `price`, signed by the holding side.
///
/// Call: `max(price - strike, 0)`; put: `max(strike - price, 0)`; negated for
/// short holdings.
///
/// # Examples
/// ```rust
/// use ferric_payoffs::core::{OptionType, PositionSide};
/// use ferric_payoffs::pricing::intrinsic_payoff;
///
/// assert_eq!(intrinsic_payoff(OptionType::Call, PositionSide::Long, 100.0, 120.0), 20.0);
/// assert_eq!(intrinsic_payoff(OptionType::Call, PositionSide::Short, 120.0, 150.0), -30.0);
/// ```
#[inline]
pub fn intrinsic_payoff(option_type: OptionType, side: PositionSide, strike: f64, price: f64) -> f64 {
    let payoff = match option_type {
        OptionType::Call => (price - strike).max(0.0),
        OptionType::Put => (strike - price).max(0.0),
    };
    match side {
        PositionSide::Long => payoff,
        PositionSide::Short => -payoff,
    }
}
