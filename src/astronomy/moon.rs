use std::fmt;

use crate::astronomy::celestial_object::{CelestialBody, CelestialObject};
use crate::astronomy::sun::{Sun, SunModel};
use crate::astronomy::{check_days, CelestialObjectModel};
use crate::constants::Degree;
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates};
use crate::math::angle;
use crate::math::interval::{check_in_interval, ClosedInterval};
use crate::sky_errors::SkyError;

const PHASE: ClosedInterval = ClosedInterval::from_bounds(0.0, 1.0);

/// The Moon, with the illuminated fraction of its disc.
#[derive(Debug, Clone)]
pub struct Moon {
    body: CelestialBody,
    phase: f64,
}

impl Moon {
    /// Return
    /// ------
    /// * [`SkyError::OutOfDomain`] when `phase` is outside `[0, 1]`.
    pub fn new(
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
        phase: f64,
    ) -> Result<Self, SkyError> {
        Ok(Self {
            body: CelestialBody::new("Moon", equatorial_pos, angular_size, magnitude)?,
            phase: check_in_interval(&PHASE, "phase", phase)?,
        })
    }

    /// Illuminated fraction, `0` at new moon and `1` at full moon.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl CelestialObject for Moon {
    fn body(&self) -> &CelestialBody {
        &self.body
    }

    fn info(&self) -> String {
        format!("{} ({:.1}%)", self.name(), self.phase * 100.0)
    }
}

impl fmt::Display for Moon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

/// Lunar orbit model: a mean orbit corrected by the main solar perturbations
/// (evection, annual equation, equation of the centre and variation).
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonModel;

impl MoonModel {
    const MEAN_LONGITUDE: Degree = 91.929336;
    const PERIGEE_MEAN_LONGITUDE: Degree = 130.143076;
    const ASCENDING_NODE_LONGITUDE: Degree = 291.682547;
    const ORBIT_INCLINATION: Degree = 5.145396;
    const ECCENTRICITY: f64 = 0.0549;
    const THETA0: Degree = 0.5181;

    /// Evaluate the model with an already computed Sun for the same instant.
    ///
    /// The perturbation terms need the Sun's mean anomaly and ecliptic longitude;
    /// passing the [`Sun`] avoids evaluating [`SunModel`] twice when the caller
    /// already holds it.
    pub fn at_with_sun(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
        sun: &Sun,
    ) -> Result<Moon, SkyError> {
        check_days(days_since_j2010)?;
        let d = days_since_j2010;
        let e = Self::ECCENTRICITY;
        let sun_mean_anomaly = sun.mean_anomaly();
        let sun_lon = sun.ecliptic_pos().lon();
        let sin_sun_mean_anomaly = sun_mean_anomaly.sin();

        // Mean orbit
        let mean_lon = angle::of_deg(13.1763966) * d + angle::of_deg(Self::MEAN_LONGITUDE);
        let mean_anomaly = mean_lon
            - angle::of_deg(0.1114041) * d
            - angle::of_deg(Self::PERIGEE_MEAN_LONGITUDE);

        // Evection, annual equation and third correction
        let evection = angle::of_deg(1.2739) * (2.0 * (mean_lon - sun_lon) - mean_anomaly).sin();
        let annual_equation = angle::of_deg(0.1858) * sin_sun_mean_anomaly;
        let a3 = angle::of_deg(0.37) * sin_sun_mean_anomaly;
        let corrected_anomaly = mean_anomaly + evection - annual_equation - a3;

        // Equation of the centre and fourth correction
        let center_equation = angle::of_deg(6.2886) * corrected_anomaly.sin();
        let a4 = angle::of_deg(0.214) * (2.0 * corrected_anomaly).sin();
        let corrected_lon = mean_lon + evection + center_equation - annual_equation + a4;

        let variation = angle::of_deg(0.6583) * (2.0 * (corrected_lon - sun_lon)).sin();
        let true_lon = corrected_lon + variation;

        // Ascending node and projection on the ecliptic
        let node = angle::of_deg(Self::ASCENDING_NODE_LONGITUDE) - angle::of_deg(0.0529539) * d;
        let corrected_node = node - angle::of_deg(0.16) * sin_sun_mean_anomaly;
        let (sin_inclination, cos_inclination) =
            angle::of_deg(Self::ORBIT_INCLINATION).sin_cos();
        let sin_arg = (true_lon - corrected_node).sin();

        let ecl_lon = (sin_arg * cos_inclination).atan2((true_lon - corrected_node).cos())
            + corrected_node;
        let ecl_lat = (sin_arg * sin_inclination).asin();

        let ecliptic_pos = EclipticCoordinates::new(angle::normalize_positive(ecl_lon), ecl_lat)?;
        let equatorial_pos = conversion.apply(&ecliptic_pos)?;

        let phase = (1.0 - (true_lon - sun_lon).cos()) / 2.0;
        let distance = (1.0 - e * e) / (1.0 + e * (corrected_anomaly + center_equation).cos());
        let angular_size = angle::of_deg(Self::THETA0) / distance;

        Moon::new(equatorial_pos, angular_size, 0.0, phase)
    }
}

impl CelestialObjectModel for MoonModel {
    type Object = Moon;

    /// Evaluates [`SunModel`] first, then [`MoonModel::at_with_sun`].
    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Moon, SkyError> {
        let sun = SunModel.at(days_since_j2010, conversion)?;
        self.at_with_sun(days_since_j2010, conversion, &sun)
    }
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use crate::time::ReferenceEpoch;
    use approx::assert_relative_eq;
    use hifitime::Epoch;

    #[test]
    fn test_moon_textbook_example() {
        // 2003-09-01 00:00 UTC
        let when = Epoch::from_gregorian_utc_at_midnight(2003, 9, 1);
        let days = ReferenceEpoch::J2010.days_until(&when);
        let moon = MoonModel
            .at(days, &EclipticToEquatorialConversion::new(&when))
            .unwrap();
        assert_relative_eq!(moon.equatorial_pos().ra_hr(), 14.211456462003504, epsilon = 1e-8);
        assert_relative_eq!(moon.equatorial_pos().dec(), -0.20114171387374752, epsilon = 1e-9);
    }

    #[test]
    fn test_moon_at_2020_06_01() {
        let when = Epoch::from_gregorian_utc_at_midnight(2020, 6, 1);
        let days = ReferenceEpoch::J2010.days_until(&when);
        let conv = EclipticToEquatorialConversion::new(&when);

        let moon = MoonModel.at(days, &conv).unwrap();
        assert_relative_eq!(moon.phase(), 0.7078047995572377, epsilon = 1e-9);
        assert_relative_eq!(moon.angular_size(), 0.009562822009010555, epsilon = 1e-12);
        assert_relative_eq!(moon.equatorial_pos().ra(), 3.2662766449954295, epsilon = 1e-9);
        assert_relative_eq!(moon.equatorial_pos().dec(), 0.04346077467725791, epsilon = 1e-9);
        assert_eq!(moon.magnitude(), 0.0);
        assert_eq!(moon.info(), "Moon (70.8%)");

        let sun = SunModel.at(days, &conv).unwrap();
        let same = MoonModel.at_with_sun(days, &conv, &sun).unwrap();
        assert_eq!(same.phase(), moon.phase());
        assert_eq!(same.equatorial_pos().ra(), moon.equatorial_pos().ra());
    }

    #[test]
    fn test_phase_domain() {
        let pos = EquatorialCoordinates::new(0.0, 0.0).unwrap();
        assert!(Moon::new(pos, 0.01, 0.0, 1.0).is_ok());
        assert!(matches!(
            Moon::new(pos, 0.01, 0.0, 1.01),
            Err(SkyError::OutOfDomain { field: "phase", .. })
        ));
        assert_eq!(Moon::new(pos, 0.01, 0.0, 0.0376).unwrap().info(), "Moon (3.8%)");
    }
}
