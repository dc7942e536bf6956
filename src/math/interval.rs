//! # Real intervals
//!
//! Two flavours of bounded real intervals used to express the valid domain of
//! coordinates and to normalize angles:
//!
//! - [`ClosedInterval`] `[low, high]`, which can **clip** a value onto its bounds,
//! - [`RightOpenInterval`] `[low, high[`, which can **reduce** a value modulo its size.
//!
//! Both enforce `low < high` at construction. They deliberately do not implement
//! `PartialEq`: comparing float bounds is not a meaningful way to identify a domain.

use std::fmt;

use crate::sky_errors::SkyError;

/// Behaviour shared by both interval flavours.
pub trait Interval {
    fn low(&self) -> f64;

    fn high(&self) -> f64;

    fn size(&self) -> f64 {
        self.high() - self.low()
    }

    /// Whether `v` belongs to the interval.
    fn contains(&self, v: f64) -> bool;
}

/// Return `value` unchanged if it lies in `interval`, otherwise a
/// [`SkyError::OutOfDomain`] naming the offending `field`.
pub(crate) fn check_in_interval<I>(interval: &I, field: &'static str, value: f64) -> Result<f64, SkyError>
where
    I: Interval + fmt::Display,
{
    if interval.contains(value) {
        Ok(value)
    } else {
        Err(SkyError::OutOfDomain {
            field,
            value,
            domain: interval.to_string(),
        })
    }
}

fn check_bounds(low: f64, high: f64) -> Result<(), SkyError> {
    // written so that NaN bounds are rejected too
    if low < high {
        Ok(())
    } else {
        Err(SkyError::InvalidInterval { low, high })
    }
}

fn check_symmetric_size(size: f64) -> Result<f64, SkyError> {
    if size > 0.0 {
        Ok(size)
    } else {
        Err(SkyError::InvalidIntervalSize(size))
    }
}

/// Closed interval `[low, high]`.
#[derive(Debug, Clone, Copy)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    pub fn of(low: f64, high: f64) -> Result<Self, SkyError> {
        check_bounds(low, high)?;
        Ok(Self { low, high })
    }

    /// Interval of the given size centered on zero: `[-size/2, size/2]`.
    pub fn symmetric(size: f64) -> Result<Self, SkyError> {
        let size = check_symmetric_size(size)?;
        Ok(Self {
            low: -size / 2.0,
            high: size / 2.0,
        })
    }

    /// Constant domains known to satisfy `low < high`.
    pub(crate) const fn from_bounds(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Clamp `v` onto `[low, high]`.
    pub fn clip(&self, v: f64) -> f64 {
        if v <= self.low {
            self.low
        } else if v >= self.high {
            self.high
        } else {
            v
        }
    }
}

impl Interval for ClosedInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v <= self.high
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6},{:.6}]", self.low, self.high)
    }
}

/// Right-open interval `[low, high[`.
#[derive(Debug, Clone, Copy)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    pub fn of(low: f64, high: f64) -> Result<Self, SkyError> {
        check_bounds(low, high)?;
        Ok(Self { low, high })
    }

    /// Interval of the given size centered on zero: `[-size/2, size/2[`.
    pub fn symmetric(size: f64) -> Result<Self, SkyError> {
        let size = check_symmetric_size(size)?;
        Ok(Self {
            low: -size / 2.0,
            high: size / 2.0,
        })
    }

    pub(crate) const fn from_bounds(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Wrap `v` into `[low, high[` using a floored modulo:
    /// `low + floor_mod(v - low, size)`.
    pub fn reduce(&self, v: f64) -> f64 {
        self.low + floor_mod(v - self.low, self.size())
    }
}

/// Modulo whose result carries the sign of the divisor.
///
/// Tiny negative `x` would round up to `y` itself, which is folded back to `0`.
fn floor_mod(x: f64, y: f64) -> f64 {
    let m = x - y * (x / y).floor();
    if m >= y {
        0.0
    } else {
        m
    }
}

impl Interval for RightOpenInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v < self.high
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6},{:.6}[", self.low, self.high)
    }
}
