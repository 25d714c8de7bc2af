// Copyright 2026 the Natspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Natural cubic splines.

use alloc::vec::Vec;

use crate::common::solve_tridiagonal;
use crate::{Point, Samples};

/// An error which can be returned when building or sampling a spline.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SplineError {
    /// Fewer than two knots were supplied.
    #[error("a spline needs at least 2 knots, got {0}")]
    TooFewKnots(usize),
    /// Two knots share the same x coordinate.
    #[error("more than one knot at x = {0}")]
    DuplicateX(f64),
    /// The sampling step is not a finite positive number, or is too small
    /// for the sampled range.
    #[error("sampling step must be finite, positive and not too small for the range, got {0}")]
    InvalidStep(f64),
    /// The sampled range is empty or not inside the spline's domain.
    #[error("range [{start}, {stop}] is not inside the spline's domain")]
    OutsideDomain {
        /// Start of the requested range.
        start: f64,
        /// End of the requested range.
        stop: f64,
    },
}

/// One row `A u[i-1] + B u[i] + C u[i+1] = F` of the curvature system.
#[derive(Clone, Copy, Debug)]
struct IntervalCoefficients {
    a: f64,
    b: f64,
    c: f64,
    f: f64,
}

impl IntervalCoefficients {
    /// The row for interior knot `i`, which needs knots `i - 1` and `i + 1`.
    fn at(knots: &[Point], i: usize) -> Self {
        let (k0, k1, k2) = (knots[i - 1], knots[i], knots[i + 1]);
        let h0 = k1.x - k0.x;
        let h1 = k2.x - k1.x;
        IntervalCoefficients {
            a: h0 / 6.0,
            b: (h0 + h1) / 3.0,
            c: h1 / 6.0,
            f: (k2.y - k1.y) / h1 - (k1.y - k0.y) / h0,
        }
    }
}

/// A natural cubic spline interpolating a set of knots.
///
/// Between two adjacent knots the curve is a cubic polynomial; the pieces
/// join with continuous first and second derivatives, and the second
/// derivative is zero at both ends of the domain.
///
/// A spline is immutable once built. Evaluating it outside the x-range of its
/// knots yields `None`.
///
/// # Examples
///
/// ```
/// use natspline::NaturalSpline;
///
/// let spline = NaturalSpline::new([(0.0, 1.0), (1.0, 3.0), (3.0, 2.0)]).unwrap();
/// assert_eq!(spline.domain(), (0.0, 3.0));
/// assert!((spline.eval(1.0).unwrap() - 3.0).abs() < 1e-12);
/// assert!(spline.eval(3.5).is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaturalSpline {
    knots: Vec<Point>,
    curvatures: Vec<f64>,
}

impl NaturalSpline {
    /// Build a spline through the given points.
    ///
    /// The points may be given in any order; they are sorted by x before the
    /// curvatures are solved. Non-finite coordinates are not rejected, and
    /// show up as non-finite values when the spline is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::TooFewKnots`] for fewer than two points and
    /// [`SplineError::DuplicateX`] if two points share an x coordinate.
    pub fn new<I>(points: I) -> Result<NaturalSpline, SplineError>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut knots: Vec<Point> = points.into_iter().map(Into::into).collect();
        if knots.len() < 2 {
            return Err(SplineError::TooFewKnots(knots.len()));
        }
        knots.sort_by(|a, b| a.x.total_cmp(&b.x));
        if let Some(pair) = knots.windows(2).find(|pair| pair[0].x == pair[1].x) {
            return Err(SplineError::DuplicateX(pair[0].x));
        }
        log::trace!("building natural spline through {} knots", knots.len());
        let curvatures = solve_curvatures(&knots);
        Ok(NaturalSpline { knots, curvatures })
    }

    /// The knots, sorted ascending by x.
    #[inline]
    pub fn knots(&self) -> &[Point] {
        &self.knots
    }

    /// The second derivative of the curve at each knot.
    ///
    /// The first and last values are always zero.
    #[inline]
    pub fn curvatures(&self) -> &[f64] {
        &self.curvatures
    }

    /// The number of knots.
    #[inline]
    #[expect(
        clippy::len_without_is_empty,
        reason = "a spline always has at least two knots"
    )]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// The x-range `(min, max)` over which the spline is defined.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.knots[0].x, self.knots[self.knots.len() - 1].x)
    }

    /// Whether `x` lies inside the spline's domain, bounds included.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        let (min, max) = self.domain();
        min <= x && x <= max
    }

    /// Index of the first knot of the segment containing `x`.
    ///
    /// `x` must be inside the domain. The last knot belongs to the last
    /// segment.
    fn segment_index(&self, x: f64) -> usize {
        let after = self.knots.partition_point(|k| k.x <= x);
        after.saturating_sub(1).min(self.knots.len() - 2)
    }

    /// Evaluate the spline at `x`.
    ///
    /// Returns `None` if `x` is outside the spline's [domain](Self::domain)
    /// (or is NaN).
    pub fn eval(&self, x: f64) -> Option<f64> {
        if !self.contains(x) {
            return None;
        }
        let i = self.segment_index(x);
        let (k0, k1) = (self.knots[i], self.knots[i + 1]);
        let (c0, c1) = (self.curvatures[i], self.curvatures[i + 1]);
        let h = k1.x - k0.x;
        let a = k1.x - x;
        let b = x - k0.x;
        let h2 = h * h;
        Some(
            k0.y * a / h
                + k1.y * b / h
                + c0 * (a * a * a - h2 * a) / (6.0 * h)
                + c1 * (b * b * b - h2 * b) / (6.0 * h),
        )
    }

    /// Lazily evaluate the spline at a fixed step from `start` to `stop`.
    ///
    /// See [`Samples`] for the exact set of abscissae produced.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InvalidStep`] if `step` is not finite and
    /// positive, or so small that the number of samples would overflow a
    /// `usize`. Returns [`SplineError::OutsideDomain`] if `start > stop` or
    /// the range is not inside the spline's domain.
    pub fn samples(&self, start: f64, stop: f64, step: f64) -> Result<Samples<'_>, SplineError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(SplineError::InvalidStep(step));
        }
        if !(start <= stop && self.contains(start) && self.contains(stop)) {
            return Err(SplineError::OutsideDomain { start, stop });
        }
        Samples::new(self, start, stop, step).ok_or(SplineError::InvalidStep(step))
    }
}

/// Solve the natural spline system for the second derivative at each knot.
fn solve_curvatures(knots: &[Point]) -> Vec<f64> {
    let n = knots.len();
    let interior = n - 2;
    let mut lower = Vec::with_capacity(interior);
    let mut diag = Vec::with_capacity(interior);
    let mut upper = Vec::with_capacity(interior);
    let mut rhs = Vec::with_capacity(interior);
    for i in 1..n - 1 {
        let row = IntervalCoefficients::at(knots, i);
        lower.push(row.a);
        diag.push(row.b);
        upper.push(row.c);
        rhs.push(row.f);
    }
    let mut curvatures = Vec::with_capacity(n);
    curvatures.push(0.0);
    curvatures.extend(solve_tridiagonal(&lower, &diag, &upper, &rhs));
    curvatures.push(0.0);
    curvatures
}
