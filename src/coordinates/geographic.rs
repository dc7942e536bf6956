use std::fmt;

use crate::constants::{Degree, Radian};
use crate::coordinates::SphericalCoordinates;
use crate::math::angle;
use crate::math::interval::{check_in_interval, ClosedInterval, Interval, RightOpenInterval};
use crate::sky_errors::SkyError;

const LON_VALID_DEG: RightOpenInterval = RightOpenInterval::from_bounds(-180.0, 180.0);
const LAT_VALID_DEG: ClosedInterval = ClosedInterval::from_bounds(-90.0, 90.0);

/// Position of an observer on Earth.
///
/// Longitude is east-positive in `[-180°, 180°[`, latitude in `[-90°, 90°]`;
/// both are stored in radians.
#[derive(Debug, Clone, Copy)]
pub struct GeographicCoordinates(SphericalCoordinates);

impl GeographicCoordinates {
    /// Build geographic coordinates from degrees.
    pub fn from_deg(lon_deg: Degree, lat_deg: Degree) -> Result<Self, SkyError> {
        let lon_deg = check_in_interval(&LON_VALID_DEG, "geographic longitude", lon_deg)?;
        let lat_deg = check_in_interval(&LAT_VALID_DEG, "geographic latitude", lat_deg)?;
        Ok(Self(SphericalCoordinates::new_unchecked(
            angle::of_deg(lon_deg),
            angle::of_deg(lat_deg),
        )))
    }

    pub fn is_valid_lon_deg(lon_deg: Degree) -> bool {
        LON_VALID_DEG.contains(lon_deg)
    }

    pub fn is_valid_lat_deg(lat_deg: Degree) -> bool {
        LAT_VALID_DEG.contains(lat_deg)
    }

    pub fn lon(&self) -> Radian {
        self.0.lon()
    }

    pub fn lon_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    pub fn lat(&self) -> Radian {
        self.0.lat()
    }

    pub fn lat_deg(&self) -> Degree {
        self.0.lat_deg()
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon={:.4}°, lat={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}
