//! Delta and Gamma estimators.
//!
//! Three independent techniques for the same two sensitivities:
//!
//! | Estimator | Error behaviour as h shrinks |
//! |---|---|
//! | analytic | exact baseline |
//! | forward difference | O(h) truncation, then cancellation blows up |
//! | complex step | O(h²) truncation, no cancellation floor |
//!
//! The forward-difference Delta subtracts two nearby real prices, so its
//! total error is U-shaped in h. The three-point Gamma stencil is worse: its
//! cancellation term scales as 1/h². Complex-step Delta reads Im C(S+ih)/h
//! with no real-minus-real subtraction at all. For Gamma the plain
//! complex-step trick cannot reach a second derivative, so two variants are
//! provided: the real-part trick, which inherits an O(1) bias from the
//! first-order CDF extension and serves as the cautionary column of the
//! comparison, and the 45°-rotated perturbation, whose central difference in
//! the imaginary parts recovers the true Gamma without subtracting nearby
//! reals.
//!
//! None of the estimators validate h > 0, S > 0 or σ ≥ 0: a degenerate input
//! surfaces as inf/NaN per the crate error policy, and the sweep driver is
//! expected to supply only positive step sizes.

use greekstep_core::math::distributions::{norm_cdf, norm_pdf};
use greekstep_models::moneyness::d1_real;
use greekstep_models::{black_scholes, MarketScenario};
use num_complex::Complex64;

/// Closed-form Delta: exp(−qT)·Φ(d₁).
pub fn delta_analytic(scenario: &MarketScenario) -> f64 {
    let sigma_t = scenario.total_volatility();
    let d1 = d1_real(
        scenario.forward(),
        scenario.strike,
        scenario.volatility,
        scenario.expiry,
        sigma_t,
    );
    (-scenario.dividend * scenario.expiry).exp() * norm_cdf(d1)
}

/// Closed-form Gamma: exp(−qT)·φ(d₁) / (S·σ√T).
pub fn gamma_analytic(scenario: &MarketScenario) -> f64 {
    let sigma_t = scenario.total_volatility();
    let d1 = d1_real(
        scenario.forward(),
        scenario.strike,
        scenario.volatility,
        scenario.expiry,
        sigma_t,
    );
    (-scenario.dividend * scenario.expiry).exp() * norm_pdf(d1) / (scenario.spot * sigma_t)
}

/// Forward-difference Delta: (C(S+h) − C(S)) / h.
pub fn delta_forward(scenario: &MarketScenario, h: f64) -> f64 {
    let base = black_scholes::call_price(scenario.spot, scenario);
    let bumped = black_scholes::call_price(scenario.spot + h, scenario);
    (bumped - base) / h
}

/// Complex-step Delta: Im C(S + ih) / h.
pub fn delta_complex_step(scenario: &MarketScenario, h: f64) -> f64 {
    let spot = Complex64::new(scenario.spot, h);
    black_scholes::call_price_complex(spot, scenario).im / h
}

/// Three-point forward-difference Gamma: (C(S+2h) − 2C(S+h) + C(S)) / h².
pub fn gamma_forward(scenario: &MarketScenario, h: f64) -> f64 {
    let c0 = black_scholes::call_price(scenario.spot, scenario);
    let c1 = black_scholes::call_price(scenario.spot + h, scenario);
    let c2 = black_scholes::call_price(scenario.spot + 2.0 * h, scenario);
    (c2 - 2.0 * c1 + c0) / (h * h)
}

/// Complex-step Gamma, real-part trick: −2·(Re C(S+ih) − C(S)) / h².
///
/// One complex evaluation plus one real evaluation. The CDF extension
/// Φ(x + iy) = Φ(x) + iyφ(x) is first order in y, so the real part of the
/// bumped price misses the −½y²φ′(x) curvature term and this estimator
/// converges to Γ + e^(−qT)·K·φ(d₂)/(S²·σ√T) rather than Γ (exactly 2Γ at
/// the money). It is retained as the biased baseline the rotated variant is
/// compared against.
pub fn gamma_complex_step_real(scenario: &MarketScenario, h: f64) -> f64 {
    let complex = black_scholes::call_price_complex(Complex64::new(scenario.spot, h), scenario);
    let base = black_scholes::call_price(scenario.spot, scenario);
    -2.0 * (complex.re - base) / (h * h)
}

/// Complex-step Gamma with a ±45°-rotated perturbation:
/// (Im C(S+hω) + Im C(S−hω)) / h², ω = (1 + i)/√2.
///
/// The central difference lives entirely in the imaginary parts, cancelling
/// the leading error term of the real-part trick with no real-minus-real
/// subtraction.
pub fn gamma_complex_step_rotated(scenario: &MarketScenario, h: f64) -> f64 {
    let omega = Complex64::new(
        std::f64::consts::FRAC_1_SQRT_2,
        std::f64::consts::FRAC_1_SQRT_2,
    );
    let up = Complex64::new(scenario.spot, 0.0) + omega * h;
    let down = Complex64::new(scenario.spot, 0.0) - omega * h;

    let c_up = black_scholes::call_price_complex(up, scenario);
    let c_down = black_scholes::call_price_complex(down, scenario);
    (c_up.im + c_down.im) / (h * h)
}
