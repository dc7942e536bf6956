//! # Viewing parameters
//!
//! Where the observer stands and where they look: the inputs of an
//! [`ObservedSky`](crate::astronomy::ObservedSky) besides the instant and the catalogue.
use crate::constants::Degree;
use crate::coordinates::{GeographicCoordinates, HorizontalCoordinates, StereographicProjection};
use crate::math::angle;
use crate::math::interval::{ClosedInterval, RightOpenInterval};
use crate::sky_errors::SkyError;

const CENTER_ALTITUDE_DEG: ClosedInterval = ClosedInterval::from_bounds(5.0, 90.0);
const CENTER_AZIMUTH_DEG: RightOpenInterval = RightOpenInterval::from_bounds(0.0, 360.0);
const FIELD_OF_VIEW_DEG: ClosedInterval = ClosedInterval::from_bounds(30.0, 300.0);

/// Observer location and viewing direction, in degrees.
///
/// Defaults
/// -----------------
/// * `observer_lon_deg`: 6.57 (Lausanne)
/// * `observer_lat_deg`: 46.52
/// * `center_az_deg`: 160.0
/// * `center_alt_deg`: 15.0
/// * `field_of_view_deg`: 100.0
///
/// Notes & Validation
/// -----------------
/// [`ViewingParamsBuilder::build`] rejects observer coordinates outside
/// `[-180°, 180°[ × [-90°, 90°]`, clips the center altitude into `[5°, 90°]`,
/// wraps the center azimuth into `[0°, 360°[` and clips the field of view into `[30°, 300°]`.
#[derive(Debug, Clone)]
pub struct ViewingParams {
    pub observer_lon_deg: Degree,
    pub observer_lat_deg: Degree,
    /// Azimuth of the projection center
    pub center_az_deg: Degree,
    /// Altitude of the projection center
    pub center_alt_deg: Degree,
    /// Horizontal field of view
    pub field_of_view_deg: Degree,
}

impl ViewingParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent builder starting from the default values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use skydome::config::ViewingParams;
    ///
    /// let params = ViewingParams::builder()
    ///     .observer_deg(2.35, 48.85)
    ///     .center_deg(-20.0, 2.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.center_az_deg, 340.0);
    /// assert_eq!(params.center_alt_deg, 5.0);
    /// ```
    pub fn builder() -> ViewingParamsBuilder {
        ViewingParamsBuilder::new()
    }

    pub fn observer(&self) -> Result<GeographicCoordinates, SkyError> {
        GeographicCoordinates::from_deg(self.observer_lon_deg, self.observer_lat_deg)
    }

    pub fn center(&self) -> Result<HorizontalCoordinates, SkyError> {
        HorizontalCoordinates::from_deg(self.center_az_deg, self.center_alt_deg)
    }

    /// Stereographic projection centered on the viewing direction.
    pub fn projection(&self) -> Result<StereographicProjection, SkyError> {
        Ok(StereographicProjection::new(self.center()?))
    }

    /// Width, on the projection plane, covered by the field of view.
    pub fn planar_field_width(&self) -> Result<f64, SkyError> {
        Ok(self
            .projection()?
            .apply_to_angle(angle::of_deg(self.field_of_view_deg)))
    }
}

impl Default for ViewingParams {
    fn default() -> Self {
        ViewingParams {
            observer_lon_deg: 6.57,
            observer_lat_deg: 46.52,
            center_az_deg: 160.0,
            center_alt_deg: 15.0,
            field_of_view_deg: 100.0,
        }
    }
}

/// Builder for [`ViewingParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct ViewingParamsBuilder {
    params: ViewingParams,
}

impl ViewingParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: ViewingParams::default(),
        }
    }

    pub fn observer_deg(mut self, lon: Degree, lat: Degree) -> Self {
        self.params.observer_lon_deg = lon;
        self.params.observer_lat_deg = lat;
        self
    }
    pub fn center_deg(mut self, az: Degree, alt: Degree) -> Self {
        self.params.center_az_deg = az;
        self.params.center_alt_deg = alt;
        self
    }
    pub fn field_of_view_deg(mut self, v: Degree) -> Self {
        self.params.field_of_view_deg = v;
        self
    }

    fn finite(field: &'static str, value: f64) -> Result<f64, SkyError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(SkyError::NonFiniteValue { field, value })
        }
    }

    /// Validate and normalize the parameters.
    ///
    /// Return
    /// ------
    /// * [`SkyError::NonFiniteValue`] when a value is NaN or infinite.
    /// * [`SkyError::OutOfDomain`] when the observer coordinates are invalid.
    pub fn build(self) -> Result<ViewingParams, SkyError> {
        let p = self.params;
        let observer_lon_deg = Self::finite("observer longitude", p.observer_lon_deg)?;
        let observer_lat_deg = Self::finite("observer latitude", p.observer_lat_deg)?;
        // validated, never normalized
        GeographicCoordinates::from_deg(observer_lon_deg, observer_lat_deg)?;

        Ok(ViewingParams {
            observer_lon_deg,
            observer_lat_deg,
            center_az_deg: CENTER_AZIMUTH_DEG
                .reduce(Self::finite("center azimuth", p.center_az_deg)?),
            center_alt_deg: CENTER_ALTITUDE_DEG
                .clip(Self::finite("center altitude", p.center_alt_deg)?),
            field_of_view_deg: FIELD_OF_VIEW_DEG
                .clip(Self::finite("field of view", p.field_of_view_deg)?),
        })
    }
}
