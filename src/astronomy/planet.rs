//! # Planets of the solar system
//!
//! Geocentric positions of the planets from their J2010 osculating elements.
//!
//! ## Overview
//!
//! [`PlanetModel`] enumerates the eight planets, the Earth included because the
//! geocentric position of any other planet needs the heliocentric position of the
//! Earth at the same instant. Evaluating the Earth itself is rejected with
//! [`SkyError::EarthNotObservable`].
//!
//! ## Algorithm
//!
//! For a planet and for the Earth, with `D` the days since J2010 and `Tp` the
//! orbital period in tropical years:
//!
//! ```text
//! M  = 2π/365.242191 · D/Tp + ε − ϖ        mean anomaly
//! ν  = M + 2e·sin M                        true anomaly
//! r  = a(1 − e²) / (1 + e·cos ν)           heliocentric radius
//! l  = ν + ϖ                               heliocentric longitude
//! ψ  = asin(sin(l − Ω)·sin i)              heliocentric ecliptic latitude
//! r' = r·cos ψ
//! l' = atan2(sin(l − Ω)·cos i, cos(l − Ω)) + Ω
//! ```
//!
//! The Earth gives `R = r` and `L = l`. Then:
//!
//! * inner planets: `λ = π + L + atan2(r'·sin(L − l'), R − r'·cos(L − l'))`
//! * outer planets: `λ = l' + atan2(R·sin(l' − L), r' − R·cos(l' − L))`
//! * `β = atan(r'·tan ψ·sin(λ − l') / (R·sin(l' − L)))`
//!
//! The distance to the Earth `ρ = √(R² + r² − 2Rr·cos(l − L)·cos ψ)` scales the
//! angular size `θ0/ρ`, and the magnitude is `V0 + 5·log10(r·ρ/√F)` with the phase
//! `F = (1 + cos(λ − l))/2`.
use std::f64::consts::PI;

use crate::astronomy::celestial_object::{CelestialBody, CelestialObject};
use crate::astronomy::{check_days, CelestialObjectModel};
use crate::constants::{ArcSec, Degree, Radian, TAU, TROPICAL_YEAR};
use crate::coordinates::{EclipticCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates};
use crate::math::angle;
use crate::sky_errors::SkyError;

/// A planet seen from the Earth at a given instant.
#[derive(Debug, Clone)]
pub struct Planet {
    body: CelestialBody,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
    ) -> Result<Self, SkyError> {
        Ok(Self {
            body: CelestialBody::new(name, equatorial_pos, angular_size, magnitude)?,
        })
    }
}

impl CelestialObject for Planet {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

/// Orbital elements of a planet at epoch J2010.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    name: &'static str,
    /// Orbital period, in tropical years
    period: f64,
    /// Longitude at J2010
    longitude_j2010: Degree,
    /// Longitude of the perihelion
    longitude_perihelion: Degree,
    eccentricity: f64,
    /// Semi-major axis, in AU
    semi_major_axis: f64,
    inclination: Degree,
    longitude_ascending_node: Degree,
    /// Angular diameter at 1 AU
    theta0: ArcSec,
    /// Magnitude at 1 AU
    v0: f64,
}

#[rustfmt::skip]
const ELEMENTS: [OrbitalElements; 8] = [
    OrbitalElements { name: "Mercury", period: 0.24085, longitude_j2010: 75.5671, longitude_perihelion: 77.612, eccentricity: 0.205627, semi_major_axis: 0.387098, inclination: 7.0051, longitude_ascending_node: 48.449, theta0: 6.74, v0: -0.42 },
    OrbitalElements { name: "Venus", period: 0.615207, longitude_j2010: 272.30044, longitude_perihelion: 131.54, eccentricity: 0.006812, semi_major_axis: 0.723329, inclination: 3.3947, longitude_ascending_node: 76.769, theta0: 16.92, v0: -4.40 },
    OrbitalElements { name: "Earth", period: 0.999996, longitude_j2010: 99.556772, longitude_perihelion: 103.2055, eccentricity: 0.016671, semi_major_axis: 0.999985, inclination: 0.0, longitude_ascending_node: 0.0, theta0: 0.0, v0: 0.0 },
    OrbitalElements { name: "Mars", period: 1.880765, longitude_j2010: 109.09646, longitude_perihelion: 336.217, eccentricity: 0.093348, semi_major_axis: 1.523689, inclination: 1.8497, longitude_ascending_node: 49.632, theta0: 9.36, v0: -1.52 },
    OrbitalElements { name: "Jupiter", period: 11.857911, longitude_j2010: 337.917132, longitude_perihelion: 14.6633, eccentricity: 0.048907, semi_major_axis: 5.20278, inclination: 1.3035, longitude_ascending_node: 100.595, theta0: 196.74, v0: -9.40 },
    OrbitalElements { name: "Saturn", period: 29.310579, longitude_j2010: 172.398316, longitude_perihelion: 89.567, eccentricity: 0.053853, semi_major_axis: 9.51134, inclination: 2.4873, longitude_ascending_node: 113.752, theta0: 165.60, v0: -8.88 },
    OrbitalElements { name: "Uranus", period: 84.039492, longitude_j2010: 356.1354, longitude_perihelion: 172.884833, eccentricity: 0.046321, semi_major_axis: 19.21814, inclination: 0.773059, longitude_ascending_node: 73.926961, theta0: 65.80, v0: -7.19 },
    OrbitalElements { name: "Neptune", period: 165.84539, longitude_j2010: 326.895127, longitude_perihelion: 23.07, eccentricity: 0.010483, semi_major_axis: 30.1985, inclination: 1.7673, longitude_ascending_node: 131.879, theta0: 62.20, v0: -6.87 },
];

/// Heliocentric quantities of a planet at a given instant.
#[derive(Debug, Clone, Copy)]
struct HeliocentricPosition {
    /// Radius projected on the ecliptic (r')
    projected_radius: f64,
    /// Longitude projected on the ecliptic (l')
    projected_longitude: Radian,
    /// Heliocentric ecliptic latitude (ψ)
    latitude: Radian,
    /// Radius in the orbital plane (r)
    radius: f64,
    /// Longitude in the orbital plane (l)
    longitude: Radian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetModel {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetModel {
    /// Every planet, ordered by distance to the Sun.
    pub const ALL: [PlanetModel; 8] = [
        PlanetModel::Mercury,
        PlanetModel::Venus,
        PlanetModel::Earth,
        PlanetModel::Mars,
        PlanetModel::Jupiter,
        PlanetModel::Saturn,
        PlanetModel::Uranus,
        PlanetModel::Neptune,
    ];

    /// Every planet observable from the Earth.
    pub fn observable() -> impl Iterator<Item = PlanetModel> {
        Self::ALL.into_iter().filter(|p| *p != PlanetModel::Earth)
    }

    pub fn name(&self) -> &'static str {
        self.elements().name
    }

    /// True for the planets whose orbit lies inside the Earth's.
    pub fn is_inner(&self) -> bool {
        matches!(self, PlanetModel::Mercury | PlanetModel::Venus)
    }

    fn elements(&self) -> &'static OrbitalElements {
        &ELEMENTS[*self as usize]
    }

    fn heliocentric_position(&self, days_since_j2010: f64) -> HeliocentricPosition {
        let el = self.elements();
        let e = el.eccentricity;
        let perihelion = angle::of_deg(el.longitude_perihelion);
        let node = angle::of_deg(el.longitude_ascending_node);
        let (sin_i, cos_i) = angle::of_deg(el.inclination).sin_cos();

        let mean_anomaly = TAU / TROPICAL_YEAR * days_since_j2010 / el.period
            + angle::of_deg(el.longitude_j2010)
            - perihelion;
        let true_anomaly = mean_anomaly + 2.0 * e * mean_anomaly.sin();

        let radius = el.semi_major_axis * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());
        let longitude = true_anomaly + perihelion;
        let latitude = ((longitude - node).sin() * sin_i).asin();

        HeliocentricPosition {
            projected_radius: radius * latitude.cos(),
            projected_longitude: ((longitude - node).sin() * cos_i)
                .atan2((longitude - node).cos())
                + node,
            latitude,
            radius,
            longitude,
        }
    }
}

impl CelestialObjectModel for PlanetModel {
    type Object = Planet;

    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Planet, SkyError> {
        check_days(days_since_j2010)?;
        if *self == PlanetModel::Earth {
            return Err(SkyError::EarthNotObservable);
        }

        let planet = self.heliocentric_position(days_since_j2010);
        let earth = PlanetModel::Earth.heliocentric_position(days_since_j2010);
        let (r_p, l_p) = (planet.projected_radius, planet.projected_longitude);
        let (big_r, big_l) = (earth.radius, earth.longitude);

        let ecl_lon = if self.is_inner() {
            PI + big_l + (r_p * (big_l - l_p).sin()).atan2(big_r - r_p * (big_l - l_p).cos())
        } else {
            l_p + (big_r * (l_p - big_l).sin()).atan2(r_p - big_r * (l_p - big_l).cos())
        };
        let ecl_lat = (r_p * planet.latitude.tan() * (ecl_lon - l_p).sin()
            / (big_r * (l_p - big_l).sin()))
        .atan();

        let ecliptic_pos = EclipticCoordinates::new(angle::normalize_positive(ecl_lon), ecl_lat)?;
        let equatorial_pos = conversion.apply(&ecliptic_pos)?;

        let r = planet.radius;
        let distance = (big_r * big_r + r * r
            - 2.0 * big_r * r * (planet.longitude - big_l).cos() * planet.latitude.cos())
        .sqrt();
        let el = self.elements();
        let angular_size = angle::of_arcsec(el.theta0) / distance;
        let phase = (1.0 + (ecl_lon - planet.longitude).cos()) / 2.0;
        let magnitude = el.v0 + 5.0 * (r * distance / phase.sqrt()).log10();

        Planet::new(el.name, equatorial_pos, angular_size, magnitude)
    }
}

#[cfg(test)]
mod planet_test {
    use super::*;
    use crate::time::ReferenceEpoch;
    use approx::assert_relative_eq;
    use hifitime::Epoch;

    #[test]
    fn test_textbook_examples() {
        // 2003-11-22 00:00 UTC
        let when = Epoch::from_gregorian_utc_at_midnight(2003, 11, 22);
        let days = ReferenceEpoch::J2010.days_until(&when);
        let conv = EclipticToEquatorialConversion::new(&when);

        let jupiter = PlanetModel::Jupiter.at(days, &conv).unwrap();
        assert_eq!(jupiter.name(), "Jupiter");
        assert_relative_eq!(jupiter.equatorial_pos().ra_hr(), 11.187154934709676, epsilon = 1e-8);
        assert_relative_eq!(jupiter.equatorial_pos().dec_deg(), 6.356635506685776, epsilon = 1e-8);
        assert_relative_eq!(jupiter.angular_size(), 0.0001702249348317251, epsilon = 1e-13);
        assert_relative_eq!(jupiter.magnitude(), -1.9885659552778367, epsilon = 1e-8);

        let mercury = PlanetModel::Mercury.at(days, &conv).unwrap();
        assert_relative_eq!(mercury.equatorial_pos().ra_hr(), 16.82007456589715, epsilon = 1e-8);
        assert_relative_eq!(mercury.equatorial_pos().dec_deg(), -24.500872462861217, epsilon = 1e-8);
    }

    #[test]
    fn test_earth_is_not_observable() {
        let conv = EclipticToEquatorialConversion::from_julian_centuries(0.0);
        assert_eq!(
            PlanetModel::Earth.at(0.0, &conv).unwrap_err(),
            SkyError::EarthNotObservable
        );
    }

    #[test]
    fn test_classification() {
        let observable: Vec<_> = PlanetModel::observable().map(|p| p.name()).collect();
        assert_eq!(
            observable,
            ["Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        let inner: Vec<_> = PlanetModel::ALL.iter().filter(|p| p.is_inner()).collect();
        assert_eq!(inner, [&PlanetModel::Mercury, &PlanetModel::Venus]);
    }

    #[test]
    fn test_every_planet_at_2020_06_01() {
        let when = Epoch::from_gregorian_utc_at_midnight(2020, 6, 1);
        let days = ReferenceEpoch::J2010.days_until(&when);
        let conv = EclipticToEquatorialConversion::new(&when);

        // (model, ra, dec, magnitude)
        let expected = [
            (PlanetModel::Mercury, 1.6518046754307925, 0.4419076517642115, -1.7704987233552092),
            (PlanetModel::Venus, 1.2967932102269784, 0.41515701077103634, -1.5614536420688228),
            (PlanetModel::Mars, 6.031724710505712, -0.15215373893598289, -0.5540898891324949),
            (PlanetModel::Jupiter, 5.215224503995154, -0.3668213190344366, -2.602060087245798),
            (PlanetModel::Saturn, 5.305692922604759, -0.34790081815947105, 0.9518428464828759),
            (PlanetModel::Uranus, 0.6314313350389866, 0.2422762723227948, 5.876068229587074),
            (PlanetModel::Neptune, 6.142062657189865, -0.08097125006713507, 7.903410023018146),
        ];
        for (model, ra, dec, magnitude) in expected {
            let planet = model.at(days, &conv).unwrap();
            assert_relative_eq!(planet.equatorial_pos().ra(), ra, epsilon = 1e-9);
            assert_relative_eq!(planet.equatorial_pos().dec(), dec, epsilon = 1e-9);
            assert_relative_eq!(planet.magnitude(), magnitude, epsilon = 1e-8);
            assert!(planet.angular_size() > 0.0);
        }
    }
}
