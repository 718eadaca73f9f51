//! Black-Scholes European call pricer.
//!
//! The pricer comes in two explicit instantiations, one per scalar kind, so
//! the numeric policies stay visible instead of hiding behind a generic
//! bound:
//!
//! - [`call_price`] for a real spot, with the actual option payoff floor in
//!   the degenerate zero-total-volatility branch;
//! - [`call_price_complex`] for a complex-perturbed spot, with no payoff
//!   floor in the degenerate branch (flooring would destroy the
//!   differentiability that complex-step estimators rely on).
//!
//! Both take the spot explicitly and the remaining parameters from a
//! [`MarketScenario`], because every estimator evaluates the same scenario at
//! a perturbed spot. With a zero imaginary perturbation the complex pricer
//! reproduces the real price exactly in its real part.
//!
//! Neither function validates nor panics; out-of-domain inputs surface as
//! IEEE-754 special values.

use greekstep_core::math::distributions::{norm_cdf, norm_cdf_complex};
use num_complex::Complex64;

use crate::moneyness::{d1_complex, d1_real};
use crate::scenario::MarketScenario;

/// European call price for a real (possibly bumped) spot.
///
/// # Arguments
/// * `spot` - Spot price to evaluate at; the scenario's own spot is ignored
///   so that finite-difference estimators can bump it freely
/// * `scenario` - Strike, rates, volatility and maturity
///
/// # Examples
/// ```
/// use greekstep_models::{black_scholes, MarketScenario};
///
/// let scenario = MarketScenario::new(100.0, 100.0, 0.0, 0.0, 0.20, 1.0).unwrap();
/// let price = black_scholes::call_price(scenario.spot, &scenario);
/// assert!((price - 7.965567455405804).abs() < 1e-10);
/// ```
pub fn call_price(spot: f64, scenario: &MarketScenario) -> f64 {
    let discount = (-scenario.rate * scenario.expiry).exp();
    let forward = spot * ((scenario.rate - scenario.dividend) * scenario.expiry).exp();
    let sigma_t = scenario.total_volatility();

    if sigma_t == 0.0 {
        return discount * (forward - scenario.strike).max(0.0);
    }

    let d1 = d1_real(
        forward,
        scenario.strike,
        scenario.volatility,
        scenario.expiry,
        sigma_t,
    );
    let d2 = d1 - sigma_t;

    discount * (forward * norm_cdf(d1) - scenario.strike * norm_cdf(d2))
}

/// European call price for a complex-perturbed spot.
///
/// The degenerate zero-total-volatility branch returns DF·(F − K) without the
/// payoff floor: `max` is not differentiable at the kink, and the whole point
/// of evaluating at a complex spot is to read derivatives out of the
/// imaginary part.
pub fn call_price_complex(spot: Complex64, scenario: &MarketScenario) -> Complex64 {
    let discount = (-scenario.rate * scenario.expiry).exp();
    let forward = spot * ((scenario.rate - scenario.dividend) * scenario.expiry).exp();
    let sigma_t = scenario.total_volatility();

    if sigma_t == 0.0 {
        return (forward - scenario.strike) * discount;
    }

    let d1 = d1_complex(
        forward,
        scenario.strike,
        scenario.volatility,
        scenario.expiry,
        sigma_t,
    );
    let d2 = d1 - sigma_t;

    (forward * norm_cdf_complex(d1) - norm_cdf_complex(d2) * scenario.strike) * discount
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_one_year() -> MarketScenario {
        MarketScenario::new(100.0, 100.0, 0.0, 0.0, 0.20, 1.0).unwrap()
    }

    #[test]
    fn test_reference_price_atm_one_year() {
        // C = S·(Φ(0.1) − Φ(−0.1)) = 100·(2Φ(0.1) − 1)
        let scenario = atm_one_year();
        let price = call_price(scenario.spot, &scenario);
        assert_relative_eq!(price, 7.965567455405804, epsilon = 1e-10);
    }

    #[test]
    fn test_price_with_carry() {
        // r = 5%, q = 2%: check against the closed form evaluated directly
        let scenario = MarketScenario::new(100.0, 110.0, 0.05, 0.02, 0.25, 2.0).unwrap();
        let discount = (-0.05_f64 * 2.0).exp();
        let forward = scenario.forward();
        let sigma_t = scenario.total_volatility();
        let d1 = ((forward / 110.0_f64).ln() + 0.5 * 0.25 * 0.25 * 2.0) / sigma_t;
        let d2 = d1 - sigma_t;
        let expected = discount * (forward * norm_cdf(d1) - 110.0 * norm_cdf(d2));

        assert_relative_eq!(
            call_price(scenario.spot, &scenario),
            expected,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_degenerate_volatility_real_honours_payoff_floor() {
        let itm = MarketScenario::new(100.0, 90.0, 0.05, 0.0, 0.0, 1.0).unwrap();
        let discount = (-0.05_f64).exp();
        let forward = 100.0 * (0.05_f64).exp();
        assert_relative_eq!(
            call_price(itm.spot, &itm),
            discount * (forward - 90.0),
            epsilon = 1e-15
        );

        let otm = MarketScenario::new(100.0, 200.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(call_price(otm.spot, &otm), 0.0);
    }

    #[test]
    fn test_degenerate_volatility_complex_has_no_floor() {
        // Out of the money the undiscounted intrinsic is negative; the
        // complex branch must keep it that way to stay differentiable
        let otm = MarketScenario::new(100.0, 200.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        let price = call_price_complex(Complex64::new(otm.spot, 0.0), &otm);
        assert_relative_eq!(price.re, -100.0, epsilon = 1e-15);
        assert_eq!(price.im, 0.0);
    }

    #[test]
    fn test_zero_expiry_is_degenerate() {
        let scenario = MarketScenario::new(100.0, 90.0, 0.05, 0.0, 0.2, 0.0).unwrap();
        assert_eq!(call_price(scenario.spot, &scenario), 10.0);
    }

    #[test]
    fn test_complex_zero_imaginary_reproduces_real_price() {
        // Away from the money both scalar kinds take the direct logarithm,
        // so the real parts match bit for bit
        let scenario = MarketScenario::new(120.0, 95.0, 0.03, 0.01, 0.3, 1.5).unwrap();
        let real = call_price(scenario.spot, &scenario);
        let complex = call_price_complex(Complex64::new(scenario.spot, 0.0), &scenario);
        assert_eq!(complex.re, real);
        assert_eq!(complex.im, 0.0);
    }

    #[test]
    fn test_complex_zero_imaginary_at_the_money() {
        // At the money the real pricer goes through ln_1p; agreement is to
        // rounding rather than bit-exact
        let scenario = atm_one_year();
        let real = call_price(scenario.spot, &scenario);
        let complex = call_price_complex(Complex64::new(scenario.spot, 0.0), &scenario);
        assert_relative_eq!(complex.re, real, epsilon = 1e-14);
        assert_eq!(complex.im, 0.0);
    }

    #[test]
    fn test_deep_in_the_money_approaches_forward_intrinsic() {
        let scenario = MarketScenario::new(1000.0, 10.0, 0.02, 0.0, 0.2, 1.0).unwrap();
        let price = call_price(scenario.spot, &scenario);
        let intrinsic = 1000.0 - 10.0 * (-0.02_f64).exp();
        assert_relative_eq!(price, intrinsic, epsilon = 1e-10);
    }

    #[test]
    fn test_imaginary_bump_reads_like_a_derivative() {
        // Im C(S + ih) / h should sit near the analytic Delta Φ(d1)
        let scenario = atm_one_year();
        let h = 1e-10;
        let price = call_price_complex(Complex64::new(scenario.spot, h), &scenario);
        assert_relative_eq!(price.im / h, norm_cdf(0.1), epsilon = 1e-10);
    }
}
