//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_pdf`: probability density function (PDF), generic over `Float`
//! - `norm_cdf`: cumulative distribution function (CDF) for real arguments
//! - `norm_cdf_complex`: the CDF extended to complex arguments with an
//!   infinitesimal imaginary part, enabling complex-step differentiation
//!   through the CDF
//!
//! The real CDF is evaluated as `0.5 * erfc(-x / sqrt(2))` with the
//! machine-precision `erfc` from libm. The `1 - norm_cdf(-x)` form is never
//! used: it loses all significant digits for large positive x, and the error
//! floors measured by the sweep driver would saturate at the approximation
//! error instead of at rounding.

use num_complex::Complex64;
use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use greekstep_core::math::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) as Φ(x) = 0.5 * erfc(-x / sqrt(2)).
///
/// # Numerical Stability
/// `erfc` keeps full relative accuracy in both tails, so no subtractive
/// cancellation occurs for large |x|. Accurate to rounding for all finite x.
///
/// # Examples
/// ```
/// use greekstep_core::math::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0), 0.5);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * std::f64::consts::FRAC_1_SQRT_2)
}

/// Standard normal CDF extended to a complex argument z = x + iy with
/// infinitesimal y.
///
/// # Mathematical Definition
///
/// ```text
/// Φ(x + iy) = Φ(x) + i·y·φ(x)
/// ```
///
/// This is the first-order Taylor expansion of the real CDF along the
/// imaginary axis, not the analytic continuation of Φ. It is exactly what
/// complex-step differentiation needs: the imaginary part of the output,
/// divided by y, recovers φ(x) to machine precision however small y is,
/// because no subtraction of nearby real values ever happens.
///
/// # Examples
/// ```
/// use greekstep_core::Complex64;
/// use greekstep_core::math::distributions::{norm_cdf_complex, norm_pdf};
///
/// let z = Complex64::new(0.3, 1e-20);
/// let phi = norm_cdf_complex(z);
/// assert!((phi.im / 1e-20 - norm_pdf(0.3)).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_cdf_complex(z: Complex64) -> Complex64 {
    Complex64::new(norm_cdf(z.re), z.im * norm_pdf(z.re))
}
