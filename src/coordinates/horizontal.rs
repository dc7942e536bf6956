use std::fmt;

use crate::constants::{Degree, Radian};
use crate::coordinates::SphericalCoordinates;
use crate::math::angle;
use crate::math::interval::{check_in_interval, ClosedInterval, Interval, RightOpenInterval};
use crate::sky_errors::SkyError;

const AZ_VALID_DEG: RightOpenInterval = RightOpenInterval::from_bounds(0.0, 360.0);
const ALT_VALID_DEG: ClosedInterval = ClosedInterval::from_bounds(-90.0, 90.0);

// Octants of the compass rose, in degrees of azimuth
const NORTH_EAST_SIDE: RightOpenInterval = RightOpenInterval::from_bounds(0.0, 67.5);
const NORTH_WEST_SIDE: RightOpenInterval = RightOpenInterval::from_bounds(292.5, 360.0);
const SOUTH: RightOpenInterval = RightOpenInterval::from_bounds(112.5, 247.5);
const WEST: RightOpenInterval = RightOpenInterval::from_bounds(202.5, 337.5);
const EAST: RightOpenInterval = RightOpenInterval::from_bounds(22.5, 157.5);

/// Horizontal (local) coordinates: azimuth ∈ `[0, 2π[` measured from north
/// towards east, altitude ∈ `[-π/2, π/2]` above the horizon.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalCoordinates(SphericalCoordinates);

impl HorizontalCoordinates {
    pub fn new(az: Radian, alt: Radian) -> Result<Self, SkyError> {
        SphericalCoordinates::full_turn("azimuth", az, "altitude", alt).map(Self)
    }

    pub fn from_deg(az_deg: Degree, alt_deg: Degree) -> Result<Self, SkyError> {
        let az_deg = check_in_interval(&AZ_VALID_DEG, "azimuth", az_deg)?;
        let alt_deg = check_in_interval(&ALT_VALID_DEG, "altitude", alt_deg)?;
        Ok(Self(SphericalCoordinates::new_unchecked(
            angle::of_deg(az_deg),
            angle::of_deg(alt_deg),
        )))
    }

    pub fn az(&self) -> Radian {
        self.0.lon()
    }

    pub fn az_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    pub fn alt(&self) -> Radian {
        self.0.lat()
    }

    pub fn alt_deg(&self) -> Degree {
        self.0.lat_deg()
    }

    /// Name of the octant containing the azimuth, built from the four cardinal labels.
    ///
    /// The north/south part comes first (`"N"` for `[0°, 67.5°[ ∪ [292.5°, 360°[`,
    /// `"S"` for `[112.5°, 247.5°[`), followed by the west/east part
    /// (`"W"` for `[202.5°, 337.5°[`, otherwise `"E"` for `[22.5°, 157.5°[`).
    /// For example an azimuth of 315° yields `"NW"` and 90° yields `"E"`.
    pub fn az_octant_name(&self, n: &str, e: &str, s: &str, w: &str) -> String {
        let az = self.az_deg();
        let mut name = String::new();
        if NORTH_EAST_SIDE.contains(az) || NORTH_WEST_SIDE.contains(az) {
            name.push_str(n);
        } else if SOUTH.contains(az) {
            name.push_str(s);
        }
        if WEST.contains(az) {
            name.push_str(w);
        } else if EAST.contains(az) {
            name.push_str(e);
        }
        name
    }

    /// Great-circle angle between two horizontal directions.
    pub fn angular_distance_to(&self, that: &HorizontalCoordinates) -> Radian {
        (self.alt().sin() * that.alt().sin()
            + self.alt().cos() * that.alt().cos() * (self.az() - that.az()).cos())
        .acos()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az={:.4}°, alt={:.4}°)", self.az_deg(), self.alt_deg())
    }
}

#[cfg(test)]
mod horizontal_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_domain() {
        assert!(HorizontalCoordinates::from_deg(0.0, -90.0).is_ok());
        assert!(HorizontalCoordinates::from_deg(360.0, 0.0).is_err());
        assert!(HorizontalCoordinates::from_deg(10.0, 91.0).is_err());
        assert!(HorizontalCoordinates::new(std::f64::consts::TAU, 0.0).is_err());
    }

    #[test]
    fn test_octant_names() {
        let octant = |az: f64| {
            HorizontalCoordinates::from_deg(az, 0.0)
                .unwrap()
                .az_octant_name("N", "E", "S", "W")
        };
        assert_eq!(octant(0.0), "N");
        assert_eq!(octant(45.0), "NE");
        assert_eq!(octant(90.0), "E");
        assert_eq!(octant(135.0), "SE");
        assert_eq!(octant(180.0), "S");
        assert_eq!(octant(225.0), "SW");
        assert_eq!(octant(270.0), "W");
        assert_eq!(octant(315.0), "NW");
        assert_eq!(octant(337.5), "N");
    }

    #[test]
    fn test_angular_distance() {
        let epfl = HorizontalCoordinates::from_deg(6.5682, 46.5183).unwrap();
        let cern = HorizontalCoordinates::from_deg(6.0497, 46.2328).unwrap();
        assert_relative_eq!(epfl.angular_distance_to(&cern), 0.0079882, epsilon = 1e-6);

        let zenith = HorizontalCoordinates::from_deg(0.0, 90.0).unwrap();
        let horizon = HorizontalCoordinates::from_deg(123.0, 0.0).unwrap();
        assert_relative_eq!(
            zenith.angular_distance_to(&horizon),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_display() {
        let hor = HorizontalCoordinates::from_deg(350.0, 7.2).unwrap();
        assert_eq!(hor.to_string(), "(az=350.0000°, alt=7.2000°)");
    }
}
