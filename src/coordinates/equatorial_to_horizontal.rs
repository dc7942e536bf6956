use hifitime::Epoch;

use crate::constants::Radian;
use crate::coordinates::{EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates};
use crate::math::angle;
use crate::sky_errors::SkyError;
use crate::time::local_sidereal_time;

/// Equatorial → horizontal conversion operator for an observer at a given instant.
///
/// The local sidereal time and the trigonometry of the observer latitude φ are computed
/// once; each conversion then only depends on the hour angle `H = sidereal time − α`:
///
/// ```text
/// alt = asin(sin δ·sin φ + cos δ·cos φ·cos H)
/// az  = atan2(−cos δ·cos φ·sin H, sin δ − sin φ·sin alt)
/// ```
#[derive(Debug, Clone)]
pub struct EquatorialToHorizontalConversion {
    sidereal_time: Radian,
    cos_latitude: f64,
    sin_latitude: f64,
}

impl EquatorialToHorizontalConversion {
    pub fn new(when: &Epoch, where_: &GeographicCoordinates) -> Self {
        Self::from_sidereal_time(local_sidereal_time(when, where_), where_.lat())
    }

    pub(crate) fn from_sidereal_time(sidereal_time: Radian, latitude: Radian) -> Self {
        Self {
            sidereal_time,
            cos_latitude: latitude.cos(),
            sin_latitude: latitude.sin(),
        }
    }

    /// Local sidereal time used by the conversion, in radians.
    pub fn sidereal_time(&self) -> Radian {
        self.sidereal_time
    }

    pub fn apply(&self, equ: &EquatorialCoordinates) -> Result<HorizontalCoordinates, SkyError> {
        let hour_angle = self.sidereal_time - equ.ra();
        let (sin_dec, cos_dec) = equ.dec().sin_cos();

        let alt = (sin_dec * self.sin_latitude
            + cos_dec * self.cos_latitude * hour_angle.cos())
        .asin();
        let az = (-cos_dec * self.cos_latitude * hour_angle.sin())
            .atan2(sin_dec - self.sin_latitude * alt.sin());

        HorizontalCoordinates::new(angle::normalize_positive(az), alt)
    }
}
