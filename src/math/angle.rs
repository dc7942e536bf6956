//! Angle unit conversions and normalization.
//!
//! All angles in the crate are carried as radians in a plain `f64`
//! (see [`Radian`]); these helpers convert from and to the other units
//! encountered in catalogues and orbital tables.

use crate::constants::{ArcSec, Degree, Hour, Radian, RADEG, RADH, RADMIN, RADSEC, TAU};
use crate::math::interval::RightOpenInterval;
use crate::sky_errors::SkyError;

const NORMALIZATION: RightOpenInterval = RightOpenInterval::from_bounds(0.0, TAU);

/// Reduce any angle into `[0, τ[`.
pub fn normalize_positive(rad: Radian) -> Radian {
    NORMALIZATION.reduce(rad)
}

pub fn of_arcsec(sec: ArcSec) -> Radian {
    sec * RADSEC
}

/// Convert a degrees/minutes/seconds triplet to radians.
///
/// Arguments
/// -----------------
/// * `deg`: non-negative number of degrees
/// * `min`: arcminutes in `[0, 60[`
/// * `sec`: arcseconds in `[0, 60[`
///
/// Return
/// ----------
/// * The angle in radians, or [`SkyError::InvalidDms`] if a component is out of range.
pub fn of_dms(deg: i32, min: i32, sec: f64) -> Result<Radian, SkyError> {
    if deg < 0 || !(0..60).contains(&min) || !(0.0..60.0).contains(&sec) {
        return Err(SkyError::InvalidDms {
            degrees: deg,
            minutes: min,
            seconds: sec,
        });
    }
    Ok(of_deg(deg as f64) + min as f64 * RADMIN + sec * RADSEC)
}

pub fn of_deg(deg: Degree) -> Radian {
    deg * RADEG
}

pub fn to_deg(rad: Radian) -> Degree {
    rad.to_degrees()
}

pub fn of_hr(hr: Hour) -> Radian {
    hr * RADH
}

pub fn to_hr(rad: Radian) -> Hour {
    rad / RADH
}
