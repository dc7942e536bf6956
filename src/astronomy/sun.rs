use crate::astronomy::celestial_object::{CelestialBody, CelestialObject};
use crate::astronomy::{check_days, CelestialObjectModel};
use crate::constants::{Degree, Radian, TAU, TROPICAL_YEAR};
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates};
use crate::math::angle;
use crate::sky_errors::SkyError;

/// Apparent magnitude of the Sun.
const SUN_MAGNITUDE: f64 = -26.7;

/// The Sun seen from the Earth at a given instant.
#[derive(Debug, Clone)]
pub struct Sun {
    body: CelestialBody,
    ecliptic_pos: EclipticCoordinates,
    mean_anomaly: Radian,
}

impl Sun {
    pub fn new(
        ecliptic_pos: EclipticCoordinates,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        mean_anomaly: Radian,
    ) -> Result<Self, SkyError> {
        Ok(Self {
            body: CelestialBody::new("Sun", equatorial_pos, angular_size, SUN_MAGNITUDE)?,
            ecliptic_pos,
            mean_anomaly,
        })
    }

    pub fn ecliptic_pos(&self) -> &EclipticCoordinates {
        &self.ecliptic_pos
    }

    /// Mean anomaly of the apparent solar orbit, in `[0, 2π[`.
    pub fn mean_anomaly(&self) -> Radian {
        self.mean_anomaly
    }
}

impl CelestialObject for Sun {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

/// Orbit of the Earth around the Sun, seen as the Sun orbiting the Earth.
///
/// Elements are given at epoch J2010.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunModel;

impl SunModel {
    /// Ecliptic longitude at J2010.
    const LONGITUDE_J2010: Degree = 279.557208;
    /// Ecliptic longitude of the perigee.
    const LONGITUDE_PERIGEE: Degree = 283.112438;
    const ECCENTRICITY: f64 = 0.016705;
    /// Angular diameter at a distance of one semi-major axis.
    const THETA0: Degree = 0.533128;
}

impl CelestialObjectModel for SunModel {
    type Object = Sun;

    /// Position of the Sun `days_since_j2010` days after J2010.
    ///
    /// ```text
    /// M = 2π/365.242191·D + ε_g − ϖ_g
    /// ν = M + 2e·sin M
    /// λ = ν + ϖ_g,  β = 0
    /// θ = θ0·(1 + e·cos ν) / (1 − e²)
    /// ```
    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Sun, SkyError> {
        check_days(days_since_j2010)?;
        let longitude_perigee = angle::of_deg(Self::LONGITUDE_PERIGEE);
        let e = Self::ECCENTRICITY;

        let mean_anomaly = TAU / TROPICAL_YEAR * days_since_j2010
            + angle::of_deg(Self::LONGITUDE_J2010)
            - longitude_perigee;
        let true_anomaly = mean_anomaly + 2.0 * e * mean_anomaly.sin();

        let ecliptic_pos = EclipticCoordinates::new(
            angle::normalize_positive(true_anomaly + longitude_perigee),
            0.0,
        )?;
        let equatorial_pos = conversion.apply(&ecliptic_pos)?;
        let angular_size =
            angle::of_deg(Self::THETA0) * ((1.0 + e * true_anomaly.cos()) / (1.0 - e * e));

        Sun::new(
            ecliptic_pos,
            equatorial_pos,
            angular_size,
            angle::normalize_positive(mean_anomaly),
        )
    }
}
