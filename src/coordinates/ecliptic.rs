use std::fmt;

use crate::constants::{Degree, Radian};
use crate::coordinates::SphericalCoordinates;
use crate::sky_errors::SkyError;

/// Ecliptic coordinates: longitude λ ∈ `[0, 2π[` and latitude β ∈ `[-π/2, π/2]`.
#[derive(Debug, Clone, Copy)]
pub struct EclipticCoordinates(SphericalCoordinates);

impl EclipticCoordinates {
    pub fn new(lon: Radian, lat: Radian) -> Result<Self, SkyError> {
        SphericalCoordinates::full_turn("ecliptic longitude", lon, "ecliptic latitude", lat)
            .map(Self)
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

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(λ={:.4}°, β={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}
