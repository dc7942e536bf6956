use std::fmt;

use crate::constants::{Degree, Hour, Radian};
use crate::coordinates::SphericalCoordinates;
use crate::math::angle;
use crate::sky_errors::SkyError;

/// Equatorial coordinates: right ascension α ∈ `[0, 2π[` and declination δ ∈ `[-π/2, π/2]`.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialCoordinates(SphericalCoordinates);

impl EquatorialCoordinates {
    pub fn new(ra: Radian, dec: Radian) -> Result<Self, SkyError> {
        SphericalCoordinates::full_turn("right ascension", ra, "declination", dec).map(Self)
    }

    pub fn ra(&self) -> Radian {
        self.0.lon()
    }

    pub fn ra_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    pub fn ra_hr(&self) -> Hour {
        angle::to_hr(self.0.lon())
    }

    pub fn dec(&self) -> Radian {
        self.0.lat()
    }

    pub fn dec_deg(&self) -> Degree {
        self.0.lat_deg()
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra={:.4}h, dec={:.4}°)", self.ra_hr(), self.dec_deg())
    }
}
