//! # Celestial objects and their models
//!
//! Everything that can be seen in the sky, and the analytic models placing the
//! moving bodies at a given instant.
//!
//! ## Overview
//!
//! - [`CelestialObject`]: common view (name, position, angular size, magnitude)
//!   over [`Sun`], [`Moon`], [`Planet`] and [`Star`].
//! - [`CelestialObjectModel`]: `at(days since J2010, ecliptic → equatorial conversion)`,
//!   implemented by [`SunModel`], [`MoonModel`] and [`PlanetModel`].
//! - [`StarCatalogue`] and [`Asterism`]: fixed stars and the figures drawn between them,
//!   filled by the [`loaders`].
//! - [`ObservedSky`]: every object projected on the plane for one observer and one instant.
//!
//! ## Evaluation order
//!
//! The Moon perturbations depend on the Sun at the same instant. [`MoonModel::at`]
//! evaluates the Sun itself; callers that already hold it use
//! [`MoonModel::at_with_sun`] instead. The planets need the heliocentric position of the
//! Earth, which [`PlanetModel`] computes internally.
use crate::coordinates::EclipticToEquatorialConversion;
use crate::sky_errors::SkyError;

pub mod asterism;
pub mod catalogue;
pub mod celestial_object;
pub mod loaders;
pub mod moon;
pub mod observed_sky;
pub mod planet;
pub mod star;
pub mod sun;

pub use asterism::Asterism;
pub use catalogue::{Loader, StarCatalogue, StarCatalogueBuilder};
pub use celestial_object::{CelestialBody, CelestialObject};
pub use moon::{Moon, MoonModel};
pub use observed_sky::{ObservedSky, SkyObject};
pub use planet::{Planet, PlanetModel};
pub use star::Star;
pub use sun::{Sun, SunModel};

/// Analytic model of a moving body.
pub trait CelestialObjectModel {
    type Object;

    /// Evaluate the model.
    ///
    /// Arguments
    /// ---------
    /// * `days_since_j2010`: days elapsed since [`ReferenceEpoch::J2010`](crate::time::ReferenceEpoch::J2010), must be finite.
    /// * `conversion`: ecliptic → equatorial conversion built for the same instant.
    ///
    /// Return
    /// ------
    /// * The object as seen from the Earth at that instant.
    fn at(
        &self,
        days_since_j2010: f64,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Self::Object, SkyError>;
}

pub(crate) fn check_days(days_since_j2010: f64) -> Result<(), SkyError> {
    if days_since_j2010.is_finite() {
        Ok(())
    } else {
        Err(SkyError::NonFiniteValue {
            field: "days since J2010",
            value: days_since_j2010,
        })
    }
}
