use std::fmt;

use crate::coordinates::EquatorialCoordinates;
use crate::sky_errors::SkyError;

/// State shared by every object of the sky: a name, an equatorial position,
/// an angular diameter (radians) and an apparent magnitude.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    name: String,
    equatorial_pos: EquatorialCoordinates,
    angular_size: f64,
    magnitude: f64,
}

impl CelestialBody {
    /// Arguments
    /// ---------
    /// * `name`: non-empty display name.
    /// * `equatorial_pos`: apparent position.
    /// * `angular_size`: angular diameter in radians, must be `≥ 0`.
    /// * `magnitude`: apparent magnitude (any sign).
    ///
    /// Return
    /// ------
    /// * [`SkyError::EmptyName`] or [`SkyError::NegativeAngularSize`] when an invariant is broken.
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f64,
        magnitude: f64,
    ) -> Result<Self, SkyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SkyError::EmptyName);
        }
        if angular_size.is_nan() || angular_size < 0.0 {
            return Err(SkyError::NegativeAngularSize(angular_size));
        }
        Ok(Self {
            name,
            equatorial_pos,
            angular_size,
            magnitude,
        })
    }
}

/// Common view over the Sun, the Moon, the planets and the stars.
pub trait CelestialObject {
    fn body(&self) -> &CelestialBody;

    fn name(&self) -> &str {
        &self.body().name
    }

    /// Angular diameter, in radians.
    fn angular_size(&self) -> f64 {
        self.body().angular_size
    }

    fn magnitude(&self) -> f64 {
        self.body().magnitude
    }

    fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.body().equatorial_pos
    }

    /// Short human-readable description, used as tooltip text.
    fn info(&self) -> String {
        self.name().to_string()
    }
}

impl CelestialObject for CelestialBody {
    fn body(&self) -> &CelestialBody {
        self
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}
