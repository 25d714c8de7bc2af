// Copyright 2026 the Natspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating a crossing of two splines.

use crate::common::finite_difference;
#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{NaturalSpline, SearchConfig, SearchError};

/// Find an `x` in `[start, end]` where the two curves have the same y value.
///
/// This uses the default [`SearchConfig`]; see [`find_root_with`].
///
/// # Errors
///
/// See [`find_root_with`].
///
/// # Examples
///
/// ```
/// use natspline::{find_root, NaturalSpline};
///
/// let rising = NaturalSpline::new([(0.0, 0.0), (10.0, 10.0)]).unwrap();
/// let falling = NaturalSpline::new([(0.0, 10.0), (10.0, 0.0)]).unwrap();
/// let x = find_root(0.0, 10.0, &rising, &falling).unwrap();
/// assert!((x - 5.0).abs() < 1e-6);
/// ```
pub fn find_root(
    start: f64,
    end: f64,
    curve_a: &NaturalSpline,
    curve_b: &NaturalSpline,
) -> Result<f64, SearchError> {
    find_root_with(start, end, curve_a, curve_b, &SearchConfig::default())
}

/// Find an `x` in `[start, end]` where the two curves have the same y value.
///
/// The search has two phases. First the difference of the curves is
/// sampled on a grid of `config.steps` equal subintervals, and the first
/// subinterval over which it changes sign (or touches zero) is taken as a
/// bracket. Then Newton-Raphson iteration refines the root inside the
/// bracket, starting from the endpoint where the difference and its slope
/// have the same sign. The slope is a forward difference with step
/// `config.derivative_step`. Iteration stops when successive estimates are
/// closer than `config.tolerance`.
///
/// The bracket shrinks with every iterate. A Newton step that would leave it
/// is replaced by the bracket's midpoint, and so is a step from a point of
/// zero slope that the nudge of one grid step does not keep inside.
///
/// Only the first sign change on the grid is found; crossings narrower than
/// one grid cell may be missed entirely.
///
/// # Errors
///
/// - [`SearchError::InvalidConfig`], [`SearchError::InvalidInterval`] or
///   [`SearchError::OutsideDomain`] if the inputs are unusable; the interval
///   must lie inside both curves' domains.
/// - [`SearchError::NoSignChange`] if no bracket is found on the grid.
/// - [`SearchError::NotConverged`] if refinement takes more than
///   `config.max_iterations` iterations.
pub fn find_root_with(
    start: f64,
    end: f64,
    curve_a: &NaturalSpline,
    curve_b: &NaturalSpline,
    config: &SearchConfig,
) -> Result<f64, SearchError> {
    let grid = config.grid(start, end, curve_a, curve_b)?;
    let outside = SearchError::OutsideDomain { start, end };
    let diff = |x: f64| Some(curve_a.eval(x)? - curve_b.eval(x)?);

    // Scan for a bracket.
    let mut p = grid.at(0);
    let mut fp = diff(p).ok_or(outside)?;
    let mut bracket = None;
    for i in 1..=grid.steps() {
        if fp == 0.0 {
            return Ok(p);
        }
        let q = grid.at(i);
        let fq = diff(q).ok_or(outside)?;
        if fq == 0.0 {
            return Ok(q);
        }
        if fp * fq < 0.0 {
            bracket = Some((p, q, fp));
            break;
        }
        p = q;
        fp = fq;
    }
    let Some((mut lo, mut hi, f_lo)) = bracket else {
        log::debug!("no sign change on [{start}, {end}] at {} steps", grid.steps());
        return Err(SearchError::NoSignChange);
    };
    log::debug!("root bracketed in [{lo}, {hi}]");

    // Refine inside the bracket. `lo` keeps the sign of `f_lo`, `hi` the other.
    let h = config.derivative_step;
    let slope = |x: f64| finite_difference(diff, x, h);
    let mut x = if f_lo * slope(lo).ok_or(outside)? > 0.0 {
        lo
    } else {
        hi
    };
    for _ in 0..config.max_iterations {
        let fx = diff(x).ok_or(outside)?;
        if fx == 0.0 {
            return Ok(x);
        }
        if (fx > 0.0) == (f_lo > 0.0) {
            lo = x;
        } else {
            hi = x;
        }
        let d = slope(x).ok_or(outside)?;
        let mut next = if d == 0.0 {
            x + grid.step()
        } else {
            x - fx / d
        };
        if !(next > lo.min(hi) && next < lo.max(hi)) {
            next = 0.5 * (lo + hi);
        }
        if (next - x).abs() < config.tolerance {
            return Ok(next);
        }
        x = next;
    }
    log::debug!(
        "root refinement in [{lo}, {hi}] hit the cap of {} iterations",
        config.max_iterations
    );
    Err(SearchError::NotConverged {
        iterations: config.max_iterations,
    })
}
