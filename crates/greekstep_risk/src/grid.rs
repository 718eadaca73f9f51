//! Logarithmically spaced step-size grid.

/// Returns `points` step sizes 10^e with exponents equally spaced from
/// `start_exponent` to `end_exponent` inclusive.
///
/// Ascending when `start_exponent < end_exponent`. A single-point grid
/// yields just `10^start_exponent`; zero points yield an empty grid.
///
/// # Examples
/// ```
/// use greekstep_risk::grid::log_grid;
///
/// let grid = log_grid(-16.0, -4.0, 24);
/// assert_eq!(grid.len(), 24);
/// assert!(grid.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn log_grid(start_exponent: f64, end_exponent: f64, points: usize) -> Vec<f64> {
    if points == 0 {
        return Vec::new();
    }
    if points == 1 {
        return vec![10.0_f64.powf(start_exponent)];
    }

    let step = (end_exponent - start_exponent) / (points - 1) as f64;
    (0..points)
        .map(|i| 10.0_f64.powf(start_exponent + i as f64 * step))
        .collect()
}
