//! Market scenario value type.

use crate::error::ModelError;

/// Immutable market parameters for one evaluation.
///
/// Holds the tuple (S, K, r, q, σ, T) that every pricer and estimator call
/// consumes by reference. Construction validates the domain once; after that
/// the scenario is plain data with no invariants left to enforce, which is
/// why the fields are public.
///
/// # Examples
/// ```
/// use greekstep_models::MarketScenario;
///
/// let scenario = MarketScenario::new(100.0, 100.0, 0.02, 0.01, 0.20, 1.0).unwrap();
/// assert_eq!(scenario.spot, 100.0);
///
/// assert!(MarketScenario::new(-1.0, 100.0, 0.0, 0.0, 0.2, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketScenario {
    /// Spot price S.
    pub spot: f64,
    /// Strike K.
    pub strike: f64,
    /// Continuously compounded risk-free rate r.
    pub rate: f64,
    /// Continuous dividend / convenience yield q.
    pub dividend: f64,
    /// Volatility σ.
    pub volatility: f64,
    /// Time to maturity T in years.
    pub expiry: f64,
}

impl MarketScenario {
    /// Creates a validated market scenario.
    ///
    /// # Arguments
    /// * `spot` - Spot price (must be positive and finite)
    /// * `strike` - Strike (must be non-negative and finite)
    /// * `rate` - Risk-free rate (must be finite)
    /// * `dividend` - Dividend yield (must be finite)
    /// * `volatility` - Volatility (must be non-negative and finite)
    /// * `expiry` - Time to maturity in years (must be non-negative and finite)
    ///
    /// # Errors
    /// - `ModelError::InvalidSpot` if spot <= 0 or non-finite
    /// - `ModelError::InvalidStrike` if strike < 0 or non-finite
    /// - `ModelError::InvalidVolatility` if volatility < 0 or non-finite
    /// - `ModelError::InvalidExpiry` if expiry < 0 or non-finite
    /// - `ModelError::NonFiniteRate` if rate or dividend is non-finite
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        dividend: f64,
        volatility: f64,
        expiry: f64,
    ) -> Result<Self, ModelError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(ModelError::InvalidSpot { spot });
        }
        if !strike.is_finite() || strike < 0.0 {
            return Err(ModelError::InvalidStrike { strike });
        }
        if !rate.is_finite() {
            return Err(ModelError::NonFiniteRate {
                name: "rate",
                value: rate,
            });
        }
        if !dividend.is_finite() {
            return Err(ModelError::NonFiniteRate {
                name: "dividend yield",
                value: dividend,
            });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(ModelError::InvalidVolatility { volatility });
        }
        if !expiry.is_finite() || expiry < 0.0 {
            return Err(ModelError::InvalidExpiry { expiry });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            dividend,
            volatility,
            expiry,
        })
    }

    /// Total volatility σ√T, with negative T clamped before the square root.
    #[inline]
    pub fn total_volatility(&self) -> f64 {
        self.volatility * self.expiry.max(0.0).sqrt()
    }

    /// Forward price F = S·exp((r − q)T) at the scenario spot.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate - self.dividend) * self.expiry).exp()
    }
}
