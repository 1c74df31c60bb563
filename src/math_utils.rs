// src/math_utils.rs - sampling and ordering helpers for GZ curves

/// Evenly spaced samples from `start` to `end` inclusive.
///
/// Each sample is computed as `start + i * step` rather than by repeated
/// addition, so a 0..=90 sweep in 1° steps lands exactly on 90. Returns an
/// empty vector when `step` is not positive or the range is inverted.
///
/// # Examples
/// ```
/// use vessel_stability::math_utils::inclusive_steps;
///
/// assert_eq!(inclusive_steps(0.0, 2.0, 0.5), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// assert!(inclusive_steps(5.0, 0.0, 1.0).is_empty());
/// ```
pub fn inclusive_steps(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !start.is_finite() || !end.is_finite() || end < start {
        return Vec::new();
    }
    // tolerate float noise in (end - start) / step
    let count = ((end - start) / step + 1e-9).floor() as usize;
    (0..=count).map(|i| start + i as f64 * step).collect()
}

/// True when every value is at least its predecessor minus `tolerance`.
pub fn is_non_decreasing(values: &[f64], tolerance: f64) -> bool {
    values.windows(2).all(|pair| pair[1] >= pair[0] - tolerance)
}
