//! Property-based tests for pricing and aggregation invariants.
//!
//! - Call value never falls below discounted intrinsic value
//! - Put-call parity
//! - Profit series equals payoff series minus cost
//! - Aggregate payoff is invariant under position reordering

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use ferric_payoffs::prelude::*;
use proptest::prelude::*;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
}

fn stock() -> Arc<Underlying> {
    Underlying::builder("Acme")
        .price(100.0)
        .vol(0.25)
        .build()
        .unwrap()
        .shared()
}

fn build(strike: f64, short: bool, days: i64, stock: &Arc<Underlying>) -> OptionPosition {
    let side = if short {
        PositionSide::Short
    } else {
        PositionSide::Long
    };
    let config = PositionConfig::call(stock.clone(), strike, as_of() + Duration::days(days), 0.03)
        .side(side)
        .as_of(as_of());
    OptionPosition::new(config).unwrap()
}

fn leg() -> impl Strategy<Value = (f64, bool, i64)> {
    (10.0f64..300.0, any::<bool>(), 1i64..720)
}

proptest! {
    #[test]
    fn call_respects_discounted_intrinsic_lower_bound(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        rate in -0.02f64..0.15,
        expiry in 0.01f64..5.0,
        vol in 0.01f64..1.5,
    ) {
        let call = bsm_value(OptionType::Call, spot, strike, rate, expiry, vol).unwrap();
        let bound = (spot - strike * (-rate * expiry).exp()).max(0.0);
        prop_assert!(call >= bound - 1e-9, "call {call} below bound {bound}");
    }

    #[test]
    fn put_call_parity(
        spot in 1.0f64..500.0,
        strike in 1.0f64..500.0,
        rate in -0.02f64..0.15,
        expiry in 0.01f64..5.0,
        vol in 0.01f64..1.5,
    ) {
        let call = bsm_value(OptionType::Call, spot, strike, rate, expiry, vol).unwrap();
        let put = bsm_value(OptionType::Put, spot, strike, rate, expiry, vol).unwrap();
        let gap = spot - strike * (-rate * expiry).exp();
        // Absolute error grows with the magnitude of the prices involved.
        let tol = 1e-9 * spot.max(strike).max(1.0);
        prop_assert!((call - put - gap).abs() <= tol);
    }

    #[test]
    fn profit_series_is_payoff_series_minus_cost(
        (strike, short, days) in leg(),
        prices in prop::collection::vec(-50.0f64..700.0, 0..64),
    ) {
        let position = build(strike, short, days, &stock());
        let payoffs = position.payoff_series(&prices);
        let profits = position.profit_series(&prices);
        prop_assert_eq!(payoffs.len(), prices.len());
        prop_assert_eq!(profits.len(), prices.len());
        for (payoff, profit) in payoffs.iter().zip(&profits) {
            prop_assert_eq!(*profit, payoff - position.cost());
        }
    }

    #[test]
    fn long_and_short_payoffs_cancel(strike in 10.0f64..300.0, price in -50.0f64..700.0) {
        let stock = stock();
        let long = build(strike, false, 30, &stock);
        let short = build(strike, true, 30, &stock);
        prop_assert_eq!(long.payoff(price), -short.payoff(price));
        prop_assert_eq!(long.payoff(strike), 0.0);
        prop_assert_eq!(short.payoff(strike), 0.0);
    }

    #[test]
    fn aggregate_payoff_ignores_position_order(
        legs in prop::collection::vec(leg(), 1..8),
        rotate in 0usize..8,
    ) {
        let stock = stock();
        let positions: Vec<OptionPosition> = legs
            .iter()
            .map(|&(strike, short, days)| build(strike, short, days, &stock))
            .collect();
        let mut reordered = positions.clone();
        reordered.reverse();
        let k = rotate % reordered.len();
        reordered.rotate_left(k);

        let original = Portfolio::new(positions);
        let permuted = Portfolio::new(reordered);
        prop_assert_eq!(original.max_top_price_bound(), permuted.max_top_price_bound());

        let prices = original.price_sweep(0.0, 2.5).unwrap();
        let a = original.aggregate_payoffs(&prices);
        let b = permuted.aggregate_payoffs(&prices);
        prop_assert_eq!(a.len(), prices.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert!((x - y).abs() <= 1e-9 * x.abs().max(1.0));
        }
    }

    #[test]
    fn aggregate_profit_is_aggregate_payoff_minus_total_cost(
        legs in prop::collection::vec(leg(), 0..6),
        prices in prop::collection::vec(0.0f64..600.0, 0..32),
    ) {
        let stock = stock();
        let portfolio = Portfolio::new(
            legs.iter()
                .map(|&(strike, short, days)| build(strike, short, days, &stock))
                .collect::<Vec<_>>(),
        );
        let total_cost: f64 = portfolio.positions().iter().map(|p| p.cost()).sum();
        let payoffs = portfolio.aggregate_payoffs(&prices);
        let profits = portfolio.aggregate_profits(&prices);
        prop_assert_eq!(profits.len(), prices.len());
        for (payoff, profit) in payoffs.iter().zip(&profits) {
            prop_assert!((payoff - total_cost - profit).abs() <= 1e-9 * payoff.abs().max(1.0));
        }
    }
}

#[test]
fn empty_portfolio_edge_cases() {
    let empty: Portfolio = Portfolio::new(Vec::new());
    assert_eq!(empty.max_top_price_bound(), 0.0);
    assert!(empty.aggregate_payoffs(&[]).is_empty());
    assert!(empty.price_sweep(0.0, 0.01).unwrap().is_empty());
    assert_eq!(
        empty.curve(&SweepConfig::default()),
        Err(PricingError::EmptyPortfolio)
    );
}
