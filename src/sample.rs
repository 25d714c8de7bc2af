// Copyright 2026 the Natspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluating a spline at a fixed step.

use core::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{NaturalSpline, Point};

/// Fraction of a step by which the last sample may fall short of `stop` and
/// still be snapped onto it.
const SAMPLE_SLOP: f64 = 1e-9;

/// An iterator over points of a [`NaturalSpline`] at a fixed x step.
///
/// Produced by [`NaturalSpline::samples`]. The abscissae are
/// `start + i * step` for `i = 0, 1, ...` up to and including the last one
/// that does not exceed `stop`. If `stop - start` is a whole number of steps
/// (up to rounding), the last sample is exactly at `stop`.
///
/// The iterator is lazy and cheap to clone; a clone restarts from wherever
/// the original was when it was cloned.
///
/// # Examples
///
/// ```
/// use natspline::NaturalSpline;
///
/// let spline = NaturalSpline::new([(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]).unwrap();
/// let xs: Vec<f64> = spline.samples(0.0, 2.0, 0.5).unwrap().map(|p| p.x).collect();
/// assert_eq!(xs, [0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Samples<'a> {
    spline: &'a NaturalSpline,
    start: f64,
    stop: f64,
    step: f64,
    idx: usize,
    count: usize,
}

impl<'a> Samples<'a> {
    /// Range and step must already have been validated against the spline.
    ///
    /// Returns `None` if the number of samples does not fit in a `usize`.
    pub(crate) fn new(
        spline: &'a NaturalSpline,
        start: f64,
        stop: f64,
        step: f64,
    ) -> Option<Self> {
        let steps = ((stop - start) / step + SAMPLE_SLOP).floor();
        // `usize::MAX as f64` rounds up, so this also rejects `usize::MAX` itself.
        if !(steps < usize::MAX as f64) {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "steps is non-negative and below usize::MAX"
        )]
        let count = (steps as usize).checked_add(1)?;
        Some(Samples {
            spline,
            start,
            stop,
            step,
            idx: 0,
            count,
        })
    }

    fn x_at(&self, i: usize) -> f64 {
        let x = self.start + self.step * i as f64;
        if (self.stop - x).abs() <= SAMPLE_SLOP * self.step {
            self.stop
        } else {
            x.min(self.stop)
        }
    }
}

impl Iterator for Samples<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.idx >= self.count {
            return None;
        }
        let x = self.x_at(self.idx);
        self.idx += 1;
        let y = self.spline.eval(x)?;
        Some(Point::new(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl FusedIterator for Samples<'_> {}
