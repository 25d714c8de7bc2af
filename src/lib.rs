// Copyright 2026 the Natspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Natural cubic splines through 2D points.
//!
//! The natspline library builds a smooth curve through a set of points,
//! evaluates it anywhere in the x-range of those points, and answers two
//! questions about pairs of curves: where do they cross, and how close do they
//! come.
//!
//! # Examples
//!
//! Building and sampling a spline:
//!
//! ```
//! use natspline::NaturalSpline;
//!
//! let spline = NaturalSpline::new([
//!     (0.0, 1.0),
//!     (2.0, 10.0),
//!     (4.0, -5.0),
//!     (6.0, 0.0),
//!     (8.0, 11.0),
//!     (10.0, 3.0),
//! ])
//! .unwrap();
//! let (min, max) = spline.domain();
//! for p in spline.samples(min, max, 0.5).unwrap() {
//!     assert!(p.y.is_finite());
//! }
//! assert!(spline.eval(10.5).is_none());
//! ```
//!
//! Relating two curves over the overlap of their domains:
//!
//! ```
//! use natspline::{find_root, overlap, NaturalSpline, DEFAULT_MARGIN};
//!
//! let a = NaturalSpline::new([(0.0, 0.0), (5.0, 4.0), (10.0, 10.0)]).unwrap();
//! let b = NaturalSpline::new([(1.0, 9.0), (6.0, 5.0), (12.0, 0.0)]).unwrap();
//! let (start, end) = overlap(&a, &b, DEFAULT_MARGIN).unwrap();
//! let x = find_root(start, end, &a, &b).unwrap();
//! assert!((a.eval(x).unwrap() - b.eval(x).unwrap()).abs() < 1e-6);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate still uses the `alloc` crate regardless.
//!
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the
//!   public data types.
//! - `schemars`: Derive a JSON schema for [`Point`] using [schemars][].
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [mint][] types.
//!
//! Diagnostics go through the [`log`] facade; nothing is printed.
//!
//! [`libm`]: https://docs.rs/libm
//! [schemars]: https://docs.rs/schemars
//! [mint]: https://docs.rs/mint
//! [`log`]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::float_cmp
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("natspline requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

pub mod common;
mod intersect;
mod mindist;
mod point;
mod sample;
mod search;
mod spline;

pub use crate::intersect::{find_root, find_root_with};
pub use crate::mindist::{min_distance, min_distance_with, MinDistance};
pub use crate::point::Point;
pub use crate::sample::Samples;
pub use crate::search::{overlap, relate, Relation, SearchConfig, SearchError, DEFAULT_MARGIN};
pub use crate::spline::{NaturalSpline, SplineError};
