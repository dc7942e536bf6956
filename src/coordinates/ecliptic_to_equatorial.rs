//! Conversion between ecliptic and equatorial coordinates.
//!
//! Both frames share the vernal equinox as origin of longitudes and differ by a rotation
//! about that axis by the **obliquity of the ecliptic** ε, computed once for the instant
//! of the conversion:
//!
//! ```text
//! ε(T) = 23°26'21.45" + (0.00181·T³ - 0.0006·T² - 46.815·T)"
//! ```
//!
//! with `T` the number of Julian centuries since J2000.
use hifitime::Epoch;
use nalgebra::{Rotation3, Vector3};

use crate::constants::Radian;
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::math::{angle, Polynomial};
use crate::sky_errors::SkyError;
use crate::time::ReferenceEpoch;

/// Obliquity correction in arcseconds, highest degree first.
const OBLIQUITY_ARCSEC: Polynomial = Polynomial::from_static(&[0.00181, -0.0006, -46.815, 0.0]);

/// Unit vector pointing towards a (longitude, latitude) direction.
pub(crate) fn unit_vector(lon: Radian, lat: Radian) -> Vector3<f64> {
    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Ecliptic → equatorial conversion operator for a given instant.
#[derive(Debug, Clone)]
pub struct EclipticToEquatorialConversion {
    obliquity: Radian,
    cos_obliquity: f64,
    sin_obliquity: f64,
}

impl EclipticToEquatorialConversion {
    /// Precompute the obliquity of the ecliptic at `when`.
    pub fn new(when: &Epoch) -> Self {
        let t = ReferenceEpoch::J2000.julian_centuries_until(when);
        Self::from_julian_centuries(t)
    }

    pub(crate) fn from_julian_centuries(t: f64) -> Self {
        // 23°26'21.45"
        let base = angle::of_deg(23.0) + angle::of_arcsec(26.0 * 60.0 + 21.45);
        let obliquity = angle::of_arcsec(OBLIQUITY_ARCSEC.at(t)) + base;

        Self {
            obliquity,
            cos_obliquity: obliquity.cos(),
            sin_obliquity: obliquity.sin(),
        }
    }

    /// Obliquity of the ecliptic, in radians.
    pub fn obliquity(&self) -> Radian {
        self.obliquity
    }

    /// Convert ecliptic coordinates (λ, β) into equatorial coordinates (α, δ).
    ///
    /// ```text
    /// δ = asin(sin β·cos ε + cos β·sin ε·sin λ)
    /// α = atan2(sin λ·cos ε − tan β·sin ε, cos λ)
    /// ```
    /// The right ascension is normalized to `[0, 2π)`.
    pub fn apply(&self, ecl: &EclipticCoordinates) -> Result<EquatorialCoordinates, SkyError> {
        let (lon, lat) = (ecl.lon(), ecl.lat());
        let sin_lon = lon.sin();

        let dec = (lat.sin() * self.cos_obliquity
            + lat.cos() * self.sin_obliquity * sin_lon)
            .asin();
        let ra = (sin_lon * self.cos_obliquity - lat.tan() * self.sin_obliquity).atan2(lon.cos());

        EquatorialCoordinates::new(angle::normalize_positive(ra), dec)
    }

    /// Convert equatorial coordinates back to the ecliptic frame.
    ///
    /// The equatorial direction is turned into a unit vector and rotated by `-ε` about
    /// the equinox axis, the transpose of the rotation performed by [`Self::apply`].
    pub fn inverse_apply(
        &self,
        equ: &EquatorialCoordinates,
    ) -> Result<EclipticCoordinates, SkyError> {
        let to_ecliptic = Rotation3::from_axis_angle(&Vector3::x_axis(), -self.obliquity);
        let v = to_ecliptic * unit_vector(equ.ra(), equ.dec());

        let lat = v.z.clamp(-1.0, 1.0).asin();
        let lon = angle::normalize_positive(v.y.atan2(v.x));
        EclipticCoordinates::new(lon, lat)
    }
}
