// Copyright 2026 the Natspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum distance between two splines.

use crate::common::finite_difference;
#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{NaturalSpline, Point, SearchConfig, SearchError};

/// The closest approach found between two curves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinDistance {
    /// The distance between the two points.
    pub distance: f64,
    /// The x coordinate of the point on the first curve.
    pub x_a: f64,
    /// The x coordinate of the point on the second curve.
    pub x_b: f64,
}

/// Find the minimum distance between two curves over `[start, end]`.
///
/// This uses the default [`SearchConfig`]; see [`min_distance_with`].
///
/// # Errors
///
/// See [`min_distance_with`].
///
/// # Examples
///
/// ```
/// use natspline::{min_distance_with, NaturalSpline, SearchConfig};
///
/// let floor = NaturalSpline::new([(0.0, 0.0), (10.0, 0.0)]).unwrap();
/// let ceiling = NaturalSpline::new([(0.0, 5.0), (10.0, 5.0)]).unwrap();
/// let coarse = SearchConfig { steps: 100, ..Default::default() };
/// let closest = min_distance_with(0.0, 10.0, &floor, &ceiling, &coarse).unwrap();
/// assert!((closest.distance - 5.0).abs() < 1e-3);
/// ```
pub fn min_distance(
    start: f64,
    end: f64,
    curve_a: &NaturalSpline,
    curve_b: &NaturalSpline,
) -> Result<MinDistance, SearchError> {
    min_distance_with(start, end, curve_a, curve_b, &SearchConfig::default())
}

/// Find the minimum distance between two curves over `[start, end]`.
///
/// For every `x0` on a grid of `config.steps` equal subintervals, the
/// distance from `(x0, curve_a(x0))` to `(mu, curve_b(mu))` is considered as
/// a function of `mu`. Its slope, a forward difference with step
/// `config.derivative_step`, is sampled on the same grid. Wherever the slope
/// goes from negative to non-negative between adjacent grid points, the local
/// minimum is refined by bisecting on the slope's sign until the bracket is
/// narrower than `config.tolerance`. The smallest distance over all these
/// candidates is returned.
///
/// This is a fixed-resolution search, not a global optimization. Minima at
/// the ends of the interval are not candidates, and minima narrower than a
/// grid cell can be missed. The cost is quadratic in `config.steps`.
///
/// # Errors
///
/// - [`SearchError::InvalidConfig`], [`SearchError::InvalidInterval`] or
///   [`SearchError::OutsideDomain`] if the inputs are unusable; the interval
///   must lie inside both curves' domains.
/// - [`SearchError::NoCriticalPoint`] if no local minimum is found for any
///   `x0`.
pub fn min_distance_with(
    start: f64,
    end: f64,
    curve_a: &NaturalSpline,
    curve_b: &NaturalSpline,
    config: &SearchConfig,
) -> Result<MinDistance, SearchError> {
    let grid = config.grid(start, end, curve_a, curve_b)?;
    let h = config.derivative_step;
    let mut best: Option<MinDistance> = None;
    let mut candidates = 0_usize;
    for i in 0..=grid.steps() {
        let x0 = grid.at(i);
        let Some(y0) = curve_a.eval(x0) else {
            continue;
        };
        let from = Point::new(x0, y0);
        let dist = |mu: f64| Some(from.distance(Point::new(mu, curve_b.eval(mu)?)));
        let slope = |mu: f64| finite_difference(dist, mu, h);

        let mut r1 = grid.at(0);
        let mut s1 = slope(r1);
        for j in 1..=grid.steps() {
            let r2 = grid.at(j);
            let s2 = slope(r2);
            if let (Some(left_slope), Some(right_slope)) = (s1, s2) {
                if left_slope < 0.0 && right_slope >= 0.0 {
                    let mu = bisect_slope(slope, r1, r2, config.tolerance);
                    if let Some(distance) = dist(mu) {
                        candidates += 1;
                        if best.map_or(true, |b| distance < b.distance) {
                            best = Some(MinDistance {
                                distance,
                                x_a: x0,
                                x_b: mu,
                            });
                        }
                    }
                }
            }
            r1 = r2;
            s1 = s2;
        }
    }
    match best {
        Some(closest) => {
            log::debug!(
                "closest approach {} at x_a = {}, x_b = {} from {candidates} candidates",
                closest.distance,
                closest.x_a,
                closest.x_b
            );
            Ok(closest)
        }
        None => {
            log::debug!("no local minimum of the distance on [{start}, {end}]");
            Err(SearchError::NoCriticalPoint)
        }
    }
}

/// Narrow `[left, right]`, where `slope` goes from negative to positive, to
/// less than `tolerance` and return its midpoint.
fn bisect_slope(
    slope: impl Fn(f64) -> Option<f64>,
    mut left: f64,
    mut right: f64,
    tolerance: f64,
) -> f64 {
    while (right - left).abs() > tolerance {
        let middle = 0.5 * (left + right);
        if middle <= left || middle >= right {
            break;
        }
        match slope(middle) {
            Some(s) if s < 0.0 => left = middle,
            Some(s) if s > 0.0 => right = middle,
            _ => return middle,
        }
    }
    0.5 * (left + right)
}
