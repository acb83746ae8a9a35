//! Axis value sequences and tick selection for price grids.
//!
//! This module provides:
//! - `arange` / `spot_axis`: Fixed-step sequences (spot axis)
//! - `linspace`: Evenly spaced sequences including both ends (volatility axis)
//! - `tick_indices` / `ticks`: Sparse, rounded axis labels for rendering

use crate::error::{GridError, GridResult};

/// Maximum number of labelled ticks per axis.
pub const DEFAULT_MAX_TICKS: usize = 5;

/// Decimal places shown on tick labels.
pub const TICK_DECIMALS: u32 = 2;

/// Values `start, start + step, …` strictly below `stop`.
///
/// The element count is `ceil((stop - start) / step)`, zero when
/// `stop <= start`.
///
/// # Errors
/// [`GridError::InvalidAxis`] for non-finite bounds or a non-positive step.
///
/// # Examples
/// ```
/// use pricer_grid::axis::arange;
///
/// assert_eq!(arange(1.0, 4.0, 1.0).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert_eq!(arange(0.0, 1.0, 0.4).unwrap().len(), 3);
/// assert!(arange(4.0, 1.0, 1.0).unwrap().is_empty());
/// ```
pub fn arange(start: f64, stop: f64, step: f64) -> GridResult<Vec<f64>> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(GridError::InvalidAxis(format!(
            "non-finite range [{}, {})",
            start, stop
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(GridError::InvalidAxis(format!(
            "step must be positive, got {}",
            step
        )));
    }

    let count = ((stop - start) / step).ceil().max(0.0) as usize;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

/// Unit-spaced window around the spot: `spot - half_width, …, spot + half_width`.
///
/// # Errors
/// [`GridError::InvalidAxis`] for non-finite inputs or a negative half width.
///
/// # Examples
/// ```
/// use pricer_grid::axis::spot_axis;
///
/// let spots = spot_axis(100.0, 5.0).unwrap();
/// assert_eq!(spots.len(), 11);
/// assert_eq!(spots[0], 95.0);
/// assert_eq!(spots[10], 105.0);
/// ```
pub fn spot_axis(spot: f64, half_width: f64) -> GridResult<Vec<f64>> {
    if !half_width.is_finite() || half_width < 0.0 {
        return Err(GridError::InvalidAxis(format!(
            "spot half width must be non-negative, got {}",
            half_width
        )));
    }
    arange(spot - half_width, spot + half_width + 1.0, 1.0)
}

/// `count` evenly spaced values from `start` to `end` inclusive.
///
/// `count == 1` yields `[start]`, `count == 0` an empty sequence.
///
/// # Examples
/// ```
/// use pricer_grid::axis::linspace;
///
/// let vols = linspace(0.1, 0.3, 5);
/// assert_eq!(vols.len(), 5);
/// assert_eq!(vols[0], 0.1);
/// assert_eq!(vols[4], 0.3);
/// assert!((vols[2] - 0.2).abs() < 1e-15);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Indices of at most `max_ticks` evenly spread ticks over `0..len`.
///
/// Positions are truncated towards zero, so the first index is always 0 and
/// the last is `len - 1`.
///
/// # Examples
/// ```
/// use pricer_grid::axis::tick_indices;
///
/// assert_eq!(tick_indices(11, 5), vec![0, 2, 5, 7, 10]);
/// assert_eq!(tick_indices(3, 5), vec![0, 1, 2]);
/// assert!(tick_indices(0, 5).is_empty());
/// ```
pub fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    let count = max_ticks.min(len);
    if count == 0 {
        return Vec::new();
    }
    linspace(0.0, (len - 1) as f64, count)
        .into_iter()
        .map(|position| position as usize)
        .collect()
}

/// Rounds half away from zero to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// One labelled position on an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Index into the axis values
    pub index: usize,
    /// Axis value rounded to [`TICK_DECIMALS`]
    pub value: f64,
}

/// Sparse rounded ticks for an axis.
///
/// # Examples
/// ```
/// use pricer_grid::axis::{linspace, ticks};
///
/// let vols = linspace(0.1, 0.3, 20);
/// let labels = ticks(&vols, 5);
/// assert_eq!(labels.len(), 5);
/// assert_eq!(labels[0].value, 0.1);
/// assert_eq!(labels[4].value, 0.3);
/// ```
pub fn ticks(values: &[f64], max_ticks: usize) -> Vec<Tick> {
    tick_indices(values.len(), max_ticks)
        .into_iter()
        .map(|index| Tick {
            index,
            value: round_to(values[index], TICK_DECIMALS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arange_fractional_bounds() {
        // numpy.arange(97.5, 103.5) has 6 elements
        let values = arange(97.5, 103.5, 1.0).unwrap();
        assert_eq!(values, vec![97.5, 98.5, 99.5, 100.5, 101.5, 102.5]);
    }

    #[test]
    fn test_arange_rejects_bad_inputs() {
        assert!(matches!(
            arange(0.0, 1.0, 0.0),
            Err(GridError::InvalidAxis(_))
        ));
        assert!(arange(f64::NAN, 1.0, 1.0).is_err());
        assert!(arange(0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_spot_axis_reference_window() {
        let spots = spot_axis(100.0, 5.0).unwrap();
        let expected: Vec<f64> = (95..=105).map(|s| s as f64).collect();
        assert_eq!(spots, expected);
    }

    #[test]
    fn test_spot_axis_fractional_half_width() {
        // arange(96.5, 104.5) -> 96.5 .. 103.5
        let spots = spot_axis(100.0, 3.5).unwrap();
        assert_eq!(spots.len(), 8);
        assert_eq!(spots[0], 96.5);
        assert_eq!(spots[7], 103.5);
    }

    #[test]
    fn test_spot_axis_zero_half_width() {
        assert_eq!(spot_axis(100.0, 0.0).unwrap(), vec![100.0]);
    }

    #[test]
    fn test_spot_axis_rejects_negative_half_width() {
        assert!(spot_axis(100.0, -1.0).is_err());
    }

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.1, 0.3, 0).is_empty());
        assert_eq!(linspace(0.1, 0.3, 1), vec![0.1]);
        assert_eq!(linspace(0.1, 0.3, 2), vec![0.1, 0.3]);
    }

    #[test]
    fn test_linspace_reference_volatility_axis() {
        let vols = linspace(0.1, 0.3, 20);
        assert_eq!(vols.len(), 20);
        let step = 0.2 / 19.0;
        for (i, vol) in vols.iter().enumerate() {
            assert_relative_eq!(*vol, 0.1 + i as f64 * step, epsilon = 1e-15);
        }
        assert_eq!(vols[19], 0.3);
    }

    #[test]
    fn test_tick_indices_reference_axes() {
        // 20 volatility rows: linspace(0, 19, 5) = [0, 4.75, 9.5, 14.25, 19]
        assert_eq!(tick_indices(20, 5), vec![0, 4, 9, 14, 19]);
        assert_eq!(tick_indices(1, 5), vec![0]);
        assert!(tick_indices(10, 0).is_empty());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.1105263, 2), 0.11);
        assert_eq!(round_to(99.999, 2), 100.0);
        assert_eq!(round_to(-1.005_1, 2), -1.01);
    }

    #[test]
    fn test_ticks_are_rounded() {
        let vols = linspace(0.1, 0.3, 20);
        let labels = ticks(&vols, 5);
        let values: Vec<f64> = labels.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.1, 0.14, 0.19, 0.25, 0.3]);
    }
}
