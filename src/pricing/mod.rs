//! Option valuation and intrinsic payoff functions.

pub mod black_scholes;
pub mod payoff;

pub use black_scholes::{BlackScholesModel, ModelInputs, PricingModel, bsm_value};
pub use payoff::intrinsic_payoff;

pub use crate::core::types::OptionType;
