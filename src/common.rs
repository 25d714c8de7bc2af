// Copyright 2026 the Natspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("natspline requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn floor(self) -> Self => floor;
    fn hypot(self, other: Self) -> Self => hypot;
}

/// Solve a tridiagonal linear system with the Thomas algorithm.
///
/// Row `i` of the system reads
/// `lower[i] * u[i-1] + diag[i] * u[i] + upper[i] * u[i+1] = rhs[i]`,
/// where the unknowns outside the system (`u[-1]` and `u[n]`) are zero, so
/// `lower[0]` and `upper[n-1]` are ignored.
///
/// The forward pass computes the elimination coefficients `alpha` and `beta`
/// so that `u[i] = alpha[i] * u[i+1] + beta[i]`; the backward pass then
/// recovers the unknowns from the last one down.
///
/// All slices must have the same length. No pivoting is done, so the system
/// should be diagonally dominant; the natural spline system always is.
pub fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    debug_assert!(lower.len() == n && upper.len() == n && rhs.len() == n);
    let mut alpha: SmallVec<[f64; 16]> = SmallVec::with_capacity(n);
    let mut beta: SmallVec<[f64; 16]> = SmallVec::with_capacity(n);
    for i in 0..n {
        let (alpha_prev, beta_prev) = if i == 0 {
            (0.0, 0.0)
        } else {
            (alpha[i - 1], beta[i - 1])
        };
        let denom = lower[i] * alpha_prev + diag[i];
        alpha.push(-upper[i] / denom);
        beta.push((rhs[i] - lower[i] * beta_prev) / denom);
    }
    let mut result = alloc::vec![0.0; n];
    let mut next = 0.0;
    for i in (0..n).rev() {
        next = alpha[i] * next + beta[i];
        result[i] = next;
    }
    result
}

/// Approximate the derivative of `f` at `x` by a finite difference.
///
/// A forward difference with step `h` is used. When `f` has no value at
/// `x + h` (typically at the upper end of a curve's domain), a backward
/// difference is used instead. Returns `None` only if `f` has no value at
/// `x`, or at neither neighbor.
pub fn finite_difference(f: impl Fn(f64) -> Option<f64>, x: f64, h: f64) -> Option<f64> {
    let fx = f(x)?;
    match f(x + h) {
        Some(fxh) => Some((fxh - fx) / h),
        None => Some((fx - f(x - h)?) / h),
    }
}

/// A uniform grid of `steps + 1` points from `start` to `end`, both included.
///
/// Points are computed by multiplication rather than accumulation, and the
/// last point is exactly `end`, so every point lies inside `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Grid {
    start: f64,
    end: f64,
    steps: usize,
    step: f64,
}

impl Grid {
    pub(crate) fn new(start: f64, end: f64, steps: usize) -> Grid {
        Grid {
            start,
            end,
            steps,
            step: (end - start) / steps as f64,
        }
    }

    /// The distance between adjacent points.
    #[inline]
    pub(crate) fn step(&self) -> f64 {
        self.step
    }

    /// The number of subintervals.
    #[inline]
    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    /// The `i`th grid point, for `i` in `0..=steps`.
    #[inline]
    pub(crate) fn at(&self, i: usize) -> f64 {
        if i >= self.steps {
            self.end
        } else {
            (self.start + self.step * i as f64).min(self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::*;

    #[test]
    fn test_solve_tridiagonal() {
        // 2u0 + u1 = 3, u0 + 2u1 + u2 = 4, u1 + 2u2 = 3 has the solution (1, 1, 1).
        let lower = [0.0, 1.0, 1.0];
        let diag = [2.0, 2.0, 2.0];
        let upper = [1.0, 1.0, 0.0];
        let rhs = [3.0, 4.0, 3.0];
        let u = solve_tridiagonal(&lower, &diag, &upper, &rhs);
        assert_eq!(u.len(), 3);
        for ui in u {
            assert!((ui - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_solve_tridiagonal_single() {
        let u = solve_tridiagonal(&[5.0], &[4.0], &[7.0], &[2.0]);
        assert_eq!(u, [0.5]);
    }

    #[test]
    fn test_solve_tridiagonal_large() {
        // Diagonally dominant system with a known solution, larger than the inline buffer.
        let n = 100;
        let expected: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
        let lower = vec![1.0; n];
        let diag = vec![4.0; n];
        let upper = vec![1.0; n];
        let rhs: Vec<f64> = (0..n)
            .map(|i| {
                let prev = if i > 0 { expected[i - 1] } else { 0.0 };
                let next = if i + 1 < n { expected[i + 1] } else { 0.0 };
                prev + 4.0 * expected[i] + next
            })
            .collect();
        let u = solve_tridiagonal(&lower, &diag, &upper, &rhs);
        for (a, b) in u.iter().zip(&expected) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_finite_difference() {
        let f = |x: f64| if (0.0..=1.0).contains(&x) { Some(x * x) } else { None };
        let d = finite_difference(f, 0.5, 1e-7).unwrap();
        assert!((d - 1.0).abs() < 1e-6);
        // Falls back to a backward difference at the upper end.
        let d = finite_difference(f, 1.0, 1e-7).unwrap();
        assert!((d - 2.0).abs() < 1e-6);
        assert!(finite_difference(f, 2.0, 1e-7).is_none());
    }

    #[test]
    fn test_grid() {
        let grid = Grid::new(0.0, 10.0, 1000);
        assert_eq!(grid.at(0), 0.0);
        assert_eq!(grid.at(1000), 10.0);
        assert!((grid.at(500) - 5.0).abs() < 1e-12);
        assert!((grid.step() - 0.01).abs() < 1e-15);
        for i in 0..=grid.steps() {
            let x = grid.at(i);
            assert!((0.0..=10.0).contains(&x));
        }
    }
}
