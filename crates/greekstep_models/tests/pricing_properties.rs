//! Property-based tests for the real/complex pricer pair.

use greekstep_models::{black_scholes, MarketScenario};
use num_complex::Complex64;
use proptest::prelude::*;

fn scenario_strategy() -> impl Strategy<Value = MarketScenario> {
    (
        1.0..500.0_f64,   // spot
        1.0..500.0_f64,   // strike
        -0.05..0.10_f64,  // rate
        0.0..0.05_f64,    // dividend
        0.01..1.0_f64,    // volatility
        0.01..5.0_f64,    // expiry
    )
        .prop_map(|(spot, strike, rate, dividend, volatility, expiry)| {
            MarketScenario::new(spot, strike, rate, dividend, volatility, expiry).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn price_dominates_discounted_intrinsic(scenario in scenario_strategy()) {
        let price = black_scholes::call_price(scenario.spot, &scenario);
        let discount = (-scenario.rate * scenario.expiry).exp();
        let intrinsic = (scenario.forward() - scenario.strike).max(0.0) * discount;

        prop_assert!(price.is_finite());
        prop_assert!(
            price >= intrinsic - 1e-9,
            "price {} below discounted intrinsic {}",
            price,
            intrinsic
        );
    }

    #[test]
    fn price_is_nondecreasing_in_spot(scenario in scenario_strategy()) {
        let lower = black_scholes::call_price(scenario.spot, &scenario);
        let upper = black_scholes::call_price(scenario.spot * 1.05, &scenario);
        prop_assert!(upper >= lower - 1e-9);
    }

    #[test]
    fn complex_pricer_matches_real_on_the_real_axis(scenario in scenario_strategy()) {
        let real = black_scholes::call_price(scenario.spot, &scenario);
        let complex =
            black_scholes::call_price_complex(Complex64::new(scenario.spot, 0.0), &scenario);

        prop_assert!(complex.im == 0.0);
        let scale = real.abs().max(1.0);
        prop_assert!(
            (complex.re - real).abs() <= 1e-12 * scale,
            "real {} vs complex {}",
            real,
            complex.re
        );
    }

    #[test]
    fn imaginary_bump_leaves_real_part_close(scenario in scenario_strategy()) {
        // An infinitesimal imaginary perturbation shifts the real part only
        // at second order in h
        let h = scenario.spot * 1e-12;
        let bumped =
            black_scholes::call_price_complex(Complex64::new(scenario.spot, h), &scenario);
        let real = black_scholes::call_price(scenario.spot, &scenario);
        let scale = real.abs().max(1.0);
        prop_assert!((bumped.re - real).abs() <= 1e-10 * scale);
    }
}
