//! # Numerical building blocks
//!
//! Small, dependency-free helpers used by every other module:
//!
//! - [`angle`]: unit conversions and normalization of angles into `[0, τ[`,
//! - [`interval`]: closed and right-open real intervals (domain checks, clipping, modular reduction),
//! - [`polynomial`]: polynomials evaluated with Horner's scheme, used by the
//!   time series of sidereal time and ecliptic obliquity.

pub mod angle;
pub mod interval;
pub mod polynomial;

pub use interval::{ClosedInterval, Interval, RightOpenInterval};
pub use polynomial::Polynomial;
