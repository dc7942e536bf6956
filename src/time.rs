//! # Epochs and sidereal time
//!
//! Instants are represented by [`hifitime::Epoch`]. Elapsed time since a reference
//! epoch is computed from **UTC Modified Julian Dates**, which follow the civil
//! calendar (no leap-second counting), the convention used by the analytic models
//! of [`crate::astronomy`].
//!
//! ## Overview
//!
//! - [`ReferenceEpoch`]: the two reference instants of the models (J2000, J2010)
//! - [`greenwich_sidereal_time`] / [`local_sidereal_time`]: sidereal time in radians
use hifitime::Epoch;

use crate::constants::{Radian, DAYS_PER_JULIAN_CENTURY, HOURS_PER_DAY, MJD, T2000, T2010};
use crate::coordinates::GeographicCoordinates;
use crate::math::{angle, Polynomial};

/// Greenwich sidereal time at 0h UTC, in hours, as a series in Julian centuries since J2000.
const SIDEREAL_TIME_AT_MIDNIGHT: Polynomial =
    Polynomial::from_static(&[0.000025862, 2400.051336, 6.697374558]);

/// Reference instant from which model time is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceEpoch {
    /// 2000-01-01 12:00:00 UTC
    J2000,
    /// 2010-01-01 00:00:00 UTC minus one day, i.e. 2009-12-31 00:00:00 UTC
    J2010,
}

impl ReferenceEpoch {
    /// Modified Julian Date (UTC) of the reference epoch.
    pub fn mjd(&self) -> MJD {
        match *self {
            ReferenceEpoch::J2000 => T2000,
            ReferenceEpoch::J2010 => T2010,
        }
    }

    /// Number of days (possibly fractional and negative) from the reference epoch to `when`.
    pub fn days_until(&self, when: &Epoch) -> f64 {
        when.to_mjd_utc_days() - self.mjd()
    }

    /// Number of Julian centuries (36525 days) from the reference epoch to `when`.
    pub fn julian_centuries_until(&self, when: &Epoch) -> f64 {
        self.days_until(when) / DAYS_PER_JULIAN_CENTURY
    }
}

/// Compute the Greenwich sidereal time, in radians, of a given instant.
///
/// Arguments
/// ---------
/// * `when`: the instant; only its UTC representation matters.
///
/// Return
/// ------
/// * Greenwich sidereal time normalized to `[0, 2π)`.
///
/// # Details
/// 1. Truncate `when` to the start of its UTC day and evaluate the quadratic series
///    `S0 = 0.000025862·T² + 2400.051336·T + 6.697374558` (hours), with `T` the number of
///    Julian centuries between J2000 and that midnight.
/// 2. Add the hours elapsed since midnight scaled by the sidereal rate `1.002737909`.
pub fn greenwich_sidereal_time(when: &Epoch) -> Radian {
    // Ratio of sidereal to solar time
    const RAP: f64 = 1.002737909;

    let tjm = when.to_mjd_utc_days();
    let itjm = tjm.floor();
    let t = (itjm - T2000) / DAYS_PER_JULIAN_CENTURY;

    let s0 = SIDEREAL_TIME_AT_MIDNIGHT.at(t);
    let hours_since_midnight = (tjm - itjm) * HOURS_PER_DAY;

    angle::normalize_positive(angle::of_hr(s0 + RAP * hours_since_midnight))
}

/// Local sidereal time, in radians, for an observer at `where_`.
///
/// Adds the east-positive geographic longitude to the Greenwich sidereal time and
/// normalizes the result to `[0, 2π)`.
pub fn local_sidereal_time(when: &Epoch, where_: &GeographicCoordinates) -> Radian {
    angle::normalize_positive(greenwich_sidereal_time(when) + where_.lon())
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;
    use hifitime::Unit;
    use std::f64::consts::{PI, TAU};

    fn angle_gap(a: f64, b: f64) -> f64 {
        ((a - b + PI).rem_euclid(TAU) - PI).abs()
    }

    #[test]
    fn test_reference_epochs() {
        let j2000 = Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
        assert_relative_eq!(ReferenceEpoch::J2000.days_until(&j2000), 0.0, epsilon = 1e-9);

        let j2010 = Epoch::from_gregorian_utc_at_midnight(2010, 1, 1);
        assert_relative_eq!(ReferenceEpoch::J2010.days_until(&j2010), 1.0, epsilon = 1e-9);

        let when = Epoch::from_gregorian_utc_at_midnight(2000, 1, 3);
        assert_relative_eq!(ReferenceEpoch::J2000.days_until(&when), 1.5, epsilon = 1e-9);

        let when = Epoch::from_gregorian_utc_at_midnight(2100, 1, 1);
        assert_relative_eq!(
            ReferenceEpoch::J2000.julian_centuries_until(&when),
            1.0 - 0.5 / 36525.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_greenwich_sidereal_time() {
        // 1980-04-22 14:36:51.67 UT, GST = 4h40m05.23s
        let when = Epoch::from_gregorian_utc(1980, 4, 22, 14, 36, 51, 670_000_000);
        let gst = greenwich_sidereal_time(&when);
        assert_relative_eq!(angle::to_hr(gst), 4.668119, epsilon = 1e-6);
        assert_relative_eq!(gst, 1.222110781964446, epsilon = 1e-9);
    }

    #[test]
    fn test_local_sidereal_time() {
        let when = Epoch::from_gregorian_utc(2004, 9, 23, 11, 0, 0, 0);
        let where_ = GeographicCoordinates::from_deg(-30.0, 45.0).unwrap();
        assert_relative_eq!(greenwich_sidereal_time(&when), 2.9257399567184024, epsilon = 1e-9);
        assert_relative_eq!(
            local_sidereal_time(&when, &where_),
            2.4021411811201037,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sidereal_time_is_periodic() {
        let sidereal_day = Unit::Second * 86_164.0905;
        for (y, m, d, h) in [(1995, 3, 14, 3), (2020, 6, 1, 0), (2031, 11, 2, 22)] {
            let when = Epoch::from_gregorian_utc(y, m, d, h, 17, 0, 0);
            let later = when + sidereal_day;
            assert!(
                angle_gap(greenwich_sidereal_time(&when), greenwich_sidereal_time(&later)) < 1e-6
            );
        }
    }

    #[test]
    fn test_sidereal_time_range() {
        let mut when = Epoch::from_gregorian_utc_at_midnight(1970, 1, 1);
        for _ in 0..200 {
            let gst = greenwich_sidereal_time(&when);
            assert!((0.0..TAU).contains(&gst));
            when += Unit::Hour * 97.3;
        }
    }
}
