use std::fmt;

use crate::astronomy::celestial_object::{CelestialBody, CelestialObject};
use crate::coordinates::EquatorialCoordinates;
use crate::math::interval::{check_in_interval, ClosedInterval};
use crate::sky_errors::SkyError;

/// Domain of the B−V color index.
const COLOR_INDEX: ClosedInterval = ClosedInterval::from_bounds(-0.5, 5.5);

/// A catalogue star. Stars are point-like: their angular size is always `0`.
#[derive(Debug, Clone)]
pub struct Star {
    body: CelestialBody,
    hipparcos_id: u32,
    color_index: f64,
    color_temperature: u32,
}

impl Star {
    /// Arguments
    /// ---------
    /// * `hipparcos_id`: Hipparcos catalogue number, `0` when the star has none.
    /// * `name`: display name.
    /// * `equatorial_pos`: position at epoch J2000.
    /// * `magnitude`: apparent visual magnitude.
    /// * `color_index`: B−V color index, must lie in `[-0.5, 5.5]`.
    pub fn new(
        hipparcos_id: u32,
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        magnitude: f64,
        color_index: f64,
    ) -> Result<Self, SkyError> {
        let color_index = check_in_interval(&COLOR_INDEX, "color index", color_index)?;
        Ok(Self {
            body: CelestialBody::new(name, equatorial_pos, 0.0, magnitude)?,
            hipparcos_id,
            color_index,
            color_temperature: color_temperature(color_index),
        })
    }

    pub fn hipparcos_id(&self) -> u32 {
        self.hipparcos_id
    }

    pub fn color_index(&self) -> f64 {
        self.color_index
    }

    /// Color temperature in kelvins, truncated to an integer.
    pub fn color_temperature(&self) -> u32 {
        self.color_temperature
    }
}

/// Ballesteros' formula: `T = 4600·(1/(0.92·c + 1.7) + 1/(0.92·c + 0.62))`.
fn color_temperature(color_index: f64) -> u32 {
    let c = 0.92 * color_index;
    (4600.0 * (1.0 / (c + 1.7) + 1.0 / (c + 0.62))) as u32
}

impl CelestialObject for Star {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HIP {})", self.name(), self.hipparcos_id)
    }
}
