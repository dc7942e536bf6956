//! # Celestial coordinate systems
//!
//! Spherical coordinate pairs specialised for each frame of the observation chain,
//! the planar coordinates produced by the projection, and the operators converting
//! from one frame to the next.
//!
//! ## Frames & domains
//!
//! | Type                          | longitude component        | latitude component        |
//! |-------------------------------|----------------------------|---------------------------|
//! | [`EclipticCoordinates`]       | λ ∈ `[0, 2π[`              | β ∈ `[-π/2, π/2]`         |
//! | [`EquatorialCoordinates`]     | α (right ascension) `[0, 2π[` | δ (declination) `[-π/2, π/2]` |
//! | [`HorizontalCoordinates`]     | azimuth `[0, 2π[`          | altitude `[-π/2, π/2]`    |
//! | [`GeographicCoordinates`]     | longitude `[-π, π[`        | latitude `[-π/2, π/2]`    |
//!
//! Every constructor validates both components and fails with
//! [`SkyError::OutOfDomain`](crate::sky_errors::SkyError::OutOfDomain) otherwise.
//!
//! ## Conversion chain
//!
//! ```text
//! Ecliptic --(obliquity)--> Equatorial --(sidereal time, latitude)--> Horizontal --(stereographic)--> Cartesian
//! ```
//!
//! * [`EclipticToEquatorialConversion`] – rotation by the obliquity of the ecliptic at a given instant.
//! * [`EquatorialToHorizontalConversion`] – hour angle and observer latitude.
//! * [`StereographicProjection`] – conformal projection centered on a horizontal direction.
//!
//! ## Equality
//!
//! None of these types implement `PartialEq`: their components are floating-point
//! values produced by trigonometry, and structural equality on them is not meaningful.
//! Compare components with a tolerance instead.

use crate::constants::{Degree, Radian, TAU};
use crate::math::angle;
use crate::math::interval::{check_in_interval, ClosedInterval, RightOpenInterval};
use crate::sky_errors::SkyError;

pub mod cartesian;
pub mod ecliptic;
pub mod ecliptic_to_equatorial;
pub mod equatorial;
pub mod equatorial_to_horizontal;
pub mod geographic;
pub mod horizontal;
pub mod stereographic;

pub use cartesian::CartesianCoordinates;
pub use ecliptic::EclipticCoordinates;
pub use ecliptic_to_equatorial::EclipticToEquatorialConversion;
pub use equatorial::EquatorialCoordinates;
pub use equatorial_to_horizontal::EquatorialToHorizontalConversion;
pub use geographic::GeographicCoordinates;
pub use horizontal::HorizontalCoordinates;
pub use stereographic::StereographicProjection;

/// `[0, 2π[`, domain of right ascension, ecliptic longitude and azimuth.
pub(crate) const FULL_TURN: RightOpenInterval = RightOpenInterval::from_bounds(0.0, TAU);

/// `[-π/2, π/2]`, domain of every latitude-like component.
pub(crate) const HALF_TURN_LATITUDE: ClosedInterval = ClosedInterval::from_bounds(
    -std::f64::consts::FRAC_PI_2,
    std::f64::consts::FRAC_PI_2,
);

/// Longitude/latitude pair in radians shared by every spherical frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SphericalCoordinates {
    lon: Radian,
    lat: Radian,
}

impl SphericalCoordinates {
    /// Validate a pair whose longitude lives in `[0, 2π[`.
    pub(crate) fn full_turn(
        lon_field: &'static str,
        lon: Radian,
        lat_field: &'static str,
        lat: Radian,
    ) -> Result<Self, SkyError> {
        Ok(Self {
            lon: check_in_interval(&FULL_TURN, lon_field, lon)?,
            lat: check_in_interval(&HALF_TURN_LATITUDE, lat_field, lat)?,
        })
    }

    pub(crate) fn new_unchecked(lon: Radian, lat: Radian) -> Self {
        Self { lon, lat }
    }

    pub(crate) fn lon(&self) -> Radian {
        self.lon
    }

    pub(crate) fn lat(&self) -> Radian {
        self.lat
    }

    pub(crate) fn lon_deg(&self) -> Degree {
        angle::to_deg(self.lon)
    }

    pub(crate) fn lat_deg(&self) -> Degree {
        angle::to_deg(self.lat)
    }
}
