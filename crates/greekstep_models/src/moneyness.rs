//! Standardised log-moneyness term d₁.
//!
//! The real and complex variants are two free functions rather than one
//! generic function, so that the cancellation guard stays auditable and
//! independently testable:
//!
//! - [`d1_real`] switches ln(F/K) to `ln_1p((F − K)/K)` when F is within
//!   [`LOG_MONEYNESS_GUARD`] of the strike. Small spot bumps probe exactly
//!   this near-the-money regime, where the direct logarithm of a ratio that
//!   rounds to 1.0 loses every significant digit.
//! - [`d1_complex`] always takes the direct principal logarithm. The
//!   infinitesimal imaginary part does not trigger the real-axis
//!   cancellation, and the branch must stay unconditional so the function
//!   remains differentiable in the complex-step sense (no branching on the
//!   imaginary axis).
//!
//! Neither function guards K ≤ 0 or F ≤ 0; the logarithm's NaN propagates
//! per the crate error policy.

use num_complex::Complex64;

/// Relative distance |F/K − 1| below which the real d₁ uses `ln_1p`.
pub const LOG_MONEYNESS_GUARD: f64 = 1e-12;

/// d₁ = (ln(F/K) + ½σ²T) / (σ√T) for a real forward.
///
/// # Arguments
/// * `forward` - Forward price F
/// * `strike` - Strike K
/// * `volatility` - Volatility σ
/// * `expiry` - Time to maturity T
/// * `sigma_t` - Precomputed total volatility σ√T
///
/// # Examples
/// ```
/// use greekstep_models::moneyness::d1_real;
///
/// // At the money with σ = 0.2, T = 1: d₁ = ½σ√T = 0.1
/// let d1 = d1_real(100.0, 100.0, 0.2, 1.0, 0.2);
/// assert!((d1 - 0.1).abs() < 1e-15);
/// ```
#[inline]
pub fn d1_real(forward: f64, strike: f64, volatility: f64, expiry: f64, sigma_t: f64) -> f64 {
    let log_moneyness = if strike > 0.0 {
        let x = (forward - strike) / strike;
        if x.abs() <= LOG_MONEYNESS_GUARD {
            x.ln_1p()
        } else {
            (forward / strike).ln()
        }
    } else {
        (forward / strike).ln()
    };

    (log_moneyness + 0.5 * volatility * volatility * expiry) / sigma_t
}

/// d₁ for a complex-perturbed forward; direct logarithm, unconditionally.
#[inline]
pub fn d1_complex(
    forward: Complex64,
    strike: f64,
    volatility: f64,
    expiry: f64,
    sigma_t: f64,
) -> Complex64 {
    ((forward / strike).ln() + 0.5 * volatility * volatility * expiry) / sigma_t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_d1_at_the_money() {
        // ln(F/K) term vanishes exactly through the ln_1p branch
        let d1 = d1_real(100.0, 100.0, 0.2, 1.0, 0.2);
        assert_relative_eq!(d1, 0.1, epsilon = 1e-15);
    }

    #[test]
    fn test_branch_agreement_at_guard_threshold() {
        // Just above the guard the direct logarithm takes over; the two
        // formulas must agree to well below the sweep's error floors.
        let strike = 100.0;
        let x = 2.0 * LOG_MONEYNESS_GUARD;
        let forward = strike * (1.0 + x);

        let via_direct = d1_real(forward, strike, 0.2, 1.0, 0.2);
        let via_ln_1p = (x.ln_1p() + 0.5 * 0.2 * 0.2) / 0.2;
        assert_relative_eq!(via_direct, via_ln_1p, epsilon = 1e-10);
    }

    #[test]
    fn test_real_and_complex_agree_away_from_money() {
        let d1 = d1_real(110.0, 95.0, 0.3, 2.0, 0.3 * 2.0_f64.sqrt());
        let d1_c = d1_complex(
            Complex64::new(110.0, 0.0),
            95.0,
            0.3,
            2.0,
            0.3 * 2.0_f64.sqrt(),
        );
        assert_relative_eq!(d1, d1_c.re, epsilon = 1e-15);
        assert_eq!(d1_c.im, 0.0);
    }

    #[test]
    fn test_complex_branch_recovers_forward_sensitivity() {
        // Im d₁(F + iy) / y = ∂d₁/∂F = 1 / (F·σ√T) for infinitesimal y
        let forward = 100.0;
        let sigma_t = 0.2;
        let y = 1e-8;
        let d1 = d1_complex(Complex64::new(forward, y), 110.0, 0.2, 1.0, sigma_t);
        assert_relative_eq!(d1.im / y, 1.0 / (forward * sigma_t), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_propagate_specials() {
        // Negative forward: logarithm domain error surfaces as NaN
        assert!(d1_real(-1.0, 100.0, 0.2, 1.0, 0.2).is_nan());
        // Zero strike: F/K overflows to +inf and so does d₁
        assert!(d1_real(100.0, 0.0, 0.2, 1.0, 0.2).is_infinite());
        // Zero total volatility: division by zero, not a panic
        assert!(d1_real(110.0, 100.0, 0.0, 1.0, 0.0).is_infinite());
    }
}
