// Copyright 2026 the Natspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameters and errors shared by the two-curve searches.

use crate::common::Grid;
use crate::{find_root_with, min_distance_with, MinDistance, NaturalSpline, Point};

/// Margin by which [`relate`] narrows the overlap of two domains, keeping the
/// searches away from the knots at the ends.
pub const DEFAULT_MARGIN: f64 = 0.01;

/// Resolution and tolerances of the grid searches.
///
/// Both [`find_root_with`] and [`min_distance_with`] first scan a uniform
/// grid for a bracket and then refine inside it. The defaults are fixed so
/// results are reproducible:
///
/// | field             | default     |
/// |-------------------|-------------|
/// | `steps`           | `1000`      |
/// | `tolerance`       | `1e-9`      |
/// | `derivative_step` | `1e-9`      |
/// | `max_iterations`  | `1_000_000` |
///
/// A sign change or a critical point narrower than one grid cell
/// (`(end - start) / steps`) can be missed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of equal subintervals the search interval is divided into.
    pub steps: usize,
    /// Refinement stops once successive estimates are closer than this.
    pub tolerance: f64,
    /// Step of the finite differences used for derivatives.
    pub derivative_step: f64,
    /// Cap on refinement iterations of the root locator.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            steps: 1000,
            tolerance: 1e-9,
            derivative_step: 1e-9,
            max_iterations: 1_000_000,
        }
    }
}

impl SearchConfig {
    /// Check that the parameters describe a usable search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] for zero steps or iterations, or
    /// a tolerance or derivative step that is not finite and positive.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.steps == 0 {
            return Err(SearchError::InvalidConfig("steps must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig(
                "max_iterations must be at least 1",
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SearchError::InvalidConfig(
                "tolerance must be finite and positive",
            ));
        }
        if !(self.derivative_step.is_finite() && self.derivative_step > 0.0) {
            return Err(SearchError::InvalidConfig(
                "derivative_step must be finite and positive",
            ));
        }
        Ok(())
    }

    /// Validate the config and the interval `[start, end]` against both
    /// curves, returning the scan grid.
    pub(crate) fn grid(
        &self,
        start: f64,
        end: f64,
        curve_a: &NaturalSpline,
        curve_b: &NaturalSpline,
    ) -> Result<Grid, SearchError> {
        self.validate()?;
        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(SearchError::InvalidInterval { start, end });
        }
        for curve in [curve_a, curve_b] {
            if !(curve.contains(start) && curve.contains(end)) {
                return Err(SearchError::OutsideDomain { start, end });
            }
        }
        Ok(Grid::new(start, end, self.steps))
    }
}

/// An error which can be returned by the two-curve searches.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The interval is empty, reversed or not finite.
    #[error("invalid search interval [{start}, {end}]")]
    InvalidInterval {
        /// Start of the interval.
        start: f64,
        /// End of the interval.
        end: f64,
    },
    /// The interval is not inside the domain of both curves.
    #[error("search interval [{start}, {end}] is not inside both curves' domains")]
    OutsideDomain {
        /// Start of the interval.
        start: f64,
        /// End of the interval.
        end: f64,
    },
    /// The search parameters are unusable.
    #[error("invalid search config: {0}")]
    InvalidConfig(&'static str),
    /// The curves' difference does not change sign on the scan grid.
    #[error("no sign change found on the scan grid")]
    NoSignChange,
    /// Refinement did not converge within the iteration cap.
    #[error("root refinement did not converge after {iterations} iterations")]
    NotConverged {
        /// The number of iterations performed.
        iterations: usize,
    },
    /// No local minimum of the distance was found on the scan grid.
    #[error("no local minimum of the distance found on the scan grid")]
    NoCriticalPoint,
    /// The domains of the two curves do not overlap.
    #[error("the curves' domains do not overlap")]
    NoOverlap,
}

/// The overlap of two curves' domains, narrowed by `margin` at each end.
///
/// Returns `None` if the narrowed overlap is empty.
///
/// # Examples
///
/// ```
/// use natspline::{overlap, NaturalSpline};
///
/// let a = NaturalSpline::new([(0.0, 0.0), (10.0, 1.0)]).unwrap();
/// let b = NaturalSpline::new([(4.0, 0.0), (12.0, 1.0)]).unwrap();
/// assert_eq!(overlap(&a, &b, 0.5), Some((4.5, 9.5)));
/// assert_eq!(overlap(&a, &b, 3.0), None);
/// ```
pub fn overlap(curve_a: &NaturalSpline, curve_b: &NaturalSpline, margin: f64) -> Option<(f64, f64)> {
    let (a0, a1) = curve_a.domain();
    let (b0, b1) = curve_b.domain();
    let start = a0.max(b0) + margin;
    let end = a1.min(b1) - margin;
    (start < end).then_some((start, end))
}

/// How two curves relate over their common domain.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Relation {
    /// The curves cross at this point.
    Intersection(Point),
    /// The curves do not cross; this is how close they come.
    Separated(MinDistance),
}

/// Determine whether two curves cross, and how close they come if not.
///
/// Both searches run over the overlap of the two domains narrowed by
/// [`DEFAULT_MARGIN`]. If [`find_root_with`] finds a crossing, its point on
/// `curve_a` is returned. Otherwise the result of [`min_distance_with`] over
/// the same interval is returned.
///
/// # Errors
///
/// Returns [`SearchError::NoOverlap`] if the narrowed domains do not overlap,
/// and propagates any other error of the two searches.
pub fn relate(
    curve_a: &NaturalSpline,
    curve_b: &NaturalSpline,
    config: &SearchConfig,
) -> Result<Relation, SearchError> {
    let (start, end) = overlap(curve_a, curve_b, DEFAULT_MARGIN).ok_or(SearchError::NoOverlap)?;
    match find_root_with(start, end, curve_a, curve_b, config) {
        Ok(x) => {
            let y = curve_a
                .eval(x)
                .ok_or(SearchError::OutsideDomain { start, end })?;
            Ok(Relation::Intersection(Point::new(x, y)))
        }
        Err(SearchError::NoSignChange | SearchError::NotConverged { .. }) => {
            log::debug!("no crossing on [{start}, {end}], measuring distance instead");
            min_distance_with(start, end, curve_a, curve_b, config).map(Relation::Separated)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::{overlap, relate, NaturalSpline, Relation, SearchConfig, SearchError};

    fn line(p0: (f64, f64), p1: (f64, f64)) -> NaturalSpline {
        NaturalSpline::new([p0, p1]).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SearchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn invalid_configs() {
        let bad = [
            SearchConfig {
                steps: 0,
                ..Default::default()
            },
            SearchConfig {
                max_iterations: 0,
                ..Default::default()
            },
            SearchConfig {
                tolerance: 0.0,
                ..Default::default()
            },
            SearchConfig {
                derivative_step: f64::NAN,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(SearchError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn grid_checks_interval() {
        let a = line((0.0, 0.0), (10.0, 10.0));
        let b = line((2.0, 0.0), (12.0, 10.0));
        let config = SearchConfig::default();
        assert!(config.grid(2.0, 10.0, &a, &b).is_ok());
        assert_eq!(
            config.grid(1.0, 10.0, &a, &b),
            Err(SearchError::OutsideDomain {
                start: 1.0,
                end: 10.0
            })
        );
        assert_eq!(
            config.grid(5.0, 5.0, &a, &b),
            Err(SearchError::InvalidInterval {
                start: 5.0,
                end: 5.0
            })
        );
    }

    #[test]
    fn overlap_narrows() {
        let a = line((0.0, 0.0), (10.0, 10.0));
        let b = line((-5.0, 0.0), (8.0, 10.0));
        let (start, end) = overlap(&a, &b, 0.01).unwrap();
        assert!((start - 0.01).abs() < 1e-12);
        assert!((end - 7.99).abs() < 1e-12);
        let far = line((20.0, 0.0), (30.0, 0.0));
        assert_eq!(overlap(&a, &far, 0.0), None);
    }

    #[test]
    fn relate_crossing_lines() {
        let a = line((0.0, 0.0), (10.0, 10.0));
        let b = line((0.0, 10.0), (10.0, 0.0));
        match relate(&a, &b, &SearchConfig::default()).unwrap() {
            Relation::Intersection(p) => {
                assert!((p.x - 5.0).abs() < 1e-6);
                assert!((p.y - 5.0).abs() < 1e-6);
            }
            other => panic!("expected an intersection, got {other:?}"),
        }
    }

    #[test]
    fn relate_parallel_lines() {
        let a = line((0.0, 0.0), (10.0, 0.0));
        let b = line((0.0, 5.0), (10.0, 5.0));
        let config = SearchConfig {
            steps: 200,
            ..Default::default()
        };
        match relate(&a, &b, &config).unwrap() {
            Relation::Separated(d) => assert!((d.distance - 5.0).abs() < 1e-3),
            other => panic!("expected a distance, got {other:?}"),
        }
    }

    #[test]
    fn relate_disjoint() {
        let a = line((0.0, 0.0), (1.0, 0.0));
        let b = line((2.0, 0.0), (3.0, 0.0));
        assert_eq!(
            relate(&a, &b, &SearchConfig::default()),
            Err(SearchError::NoOverlap)
        );
    }
}
