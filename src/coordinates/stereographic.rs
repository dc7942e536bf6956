//! # Stereographic projection
//!
//! Conformal projection of the celestial sphere onto the plane tangent to a chosen
//! horizontal direction (the **center**). The center maps to the origin, the `x` axis
//! points towards increasing azimuth and the `y` axis towards increasing altitude.
//!
//! ## Formulas
//!
//! For a point `(az, alt)` and a center `(az_c, alt_c)`, with `Δλ = az − az_c`:
//!
//! ```text
//! d = 1 / (1 + sin alt·sin alt_c + cos alt·cos alt_c·cos Δλ)
//! x = d·cos alt·sin Δλ
//! y = d·(sin alt·cos alt_c − cos alt·sin alt_c·cos Δλ)
//! ```
//!
//! The point diametrically opposed to the center is sent to infinity (`d` diverges).
//!
//! ## Circles
//!
//! Parallels (constant altitude) and meridians (constant azimuth) project to circles.
//! The helpers [`StereographicProjection::circle_center_for_parallel`],
//! [`StereographicProjection::circle_radius_for_parallel`],
//! [`StereographicProjection::circle_center_for_meridian`] and
//! [`StereographicProjection::circle_radius_for_meridian`] return their geometry. When the
//! circle passes through the antipode of the center it degenerates into a straight line:
//! the denominators vanish and the returned values are infinite or NaN, so callers drawing
//! grids must handle near-zero denominators themselves.
use std::fmt;

use crate::constants::Radian;
use crate::coordinates::{CartesianCoordinates, HorizontalCoordinates};
use crate::math::angle;
use crate::sky_errors::SkyError;

#[derive(Debug, Clone)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    cos_center_alt: f64,
    sin_center_alt: f64,
    tan_center_alt: f64,
}

impl StereographicProjection {
    pub fn new(center: HorizontalCoordinates) -> Self {
        let (sin_center_alt, cos_center_alt) = center.alt().sin_cos();
        Self {
            center,
            cos_center_alt,
            sin_center_alt,
            tan_center_alt: sin_center_alt / cos_center_alt,
        }
    }

    pub fn center(&self) -> &HorizontalCoordinates {
        &self.center
    }

    /// Project a horizontal direction onto the plane.
    pub fn apply(&self, hor: &HorizontalCoordinates) -> CartesianCoordinates {
        let delta_lon = hor.az() - self.center.az();
        let (sin_delta, cos_delta) = delta_lon.sin_cos();
        let (sin_alt, cos_alt) = hor.alt().sin_cos();

        let d = 1.0
            / (1.0 + sin_alt * self.sin_center_alt + cos_alt * self.cos_center_alt * cos_delta);
        let x = d * cos_alt * sin_delta;
        let y = d * (sin_alt * self.cos_center_alt - cos_alt * self.sin_center_alt * cos_delta);

        CartesianCoordinates::new(x, y)
    }

    /// Recover the horizontal direction projected at `xy`.
    ///
    /// The origin maps back to the center exactly.
    pub fn inverse_apply(&self, xy: &CartesianCoordinates) -> Result<HorizontalCoordinates, SkyError> {
        let (x, y) = (xy.x(), xy.y());
        if x == 0.0 && y == 0.0 {
            return Ok(self.center);
        }

        let rho2 = x * x + y * y;
        let rho = rho2.sqrt();
        let sin_c = 2.0 * rho / (rho2 + 1.0);
        let cos_c = (1.0 - rho2) / (rho2 + 1.0);

        let az = (x * sin_c).atan2(rho * self.cos_center_alt * cos_c - y * self.sin_center_alt * sin_c)
            + self.center.az();
        let alt = (cos_c * self.sin_center_alt + y * sin_c * self.cos_center_alt / rho)
            .clamp(-1.0, 1.0)
            .asin();

        HorizontalCoordinates::new(angle::normalize_positive(az), alt)
    }

    /// Center of the circle onto which the parallel of altitude `parallel.alt()` projects.
    pub fn circle_center_for_parallel(&self, parallel: &HorizontalCoordinates) -> CartesianCoordinates {
        let y = self.cos_center_alt / (parallel.alt().sin() + self.sin_center_alt);
        CartesianCoordinates::new(0.0, y)
    }

    /// Radius of the circle onto which the parallel of altitude `parallel.alt()` projects.
    ///
    /// The result is signed: it is negative when the parallel encloses the antipode of
    /// the center.
    pub fn circle_radius_for_parallel(&self, parallel: &HorizontalCoordinates) -> f64 {
        parallel.alt().cos() / (parallel.alt().sin() + self.sin_center_alt)
    }

    /// Center of the circle onto which the meridian of azimuth `meridian.az()` projects.
    pub fn circle_center_for_meridian(&self, meridian: &HorizontalCoordinates) -> CartesianCoordinates {
        let (sin_lambda, cos_lambda) = (meridian.az() - self.center.az()).sin_cos();
        let x = -cos_lambda / (self.cos_center_alt * sin_lambda);
        CartesianCoordinates::new(x, -self.tan_center_alt)
    }

    /// Radius of the circle onto which the meridian of azimuth `meridian.az()` projects.
    pub fn circle_radius_for_meridian(&self, meridian: &HorizontalCoordinates) -> f64 {
        let lambda = meridian.az() - self.center.az();
        1.0 / (self.cos_center_alt * lambda.sin())
    }

    /// Diameter on the plane of an object of angular diameter `rad` seen at the center.
    pub fn apply_to_angle(&self, rad: Radian) -> f64 {
        2.0 * (rad / 4.0).tan()
    }
}

impl fmt::Display for StereographicProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StereographicProjection centered in {}", self.center)
    }
}

#[cfg(test)]
mod stereographic_test {
    use super::*;
    use approx::assert_relative_eq;

    fn projection(az_deg: f64, alt_deg: f64) -> StereographicProjection {
        StereographicProjection::new(HorizontalCoordinates::from_deg(az_deg, alt_deg).unwrap())
    }

    #[test]
    fn test_apply() {
        let proj = projection(45.0, 45.0);
        let xy = proj.apply(&HorizontalCoordinates::from_deg(45.0, 30.0).unwrap());
        assert_relative_eq!(xy.x(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(xy.y(), -0.13165249758739583, epsilon = 1e-12);

        let center = proj.apply(proj.center());
        assert_relative_eq!(center.x(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(center.y(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_inverse_apply() {
        let proj = projection(45.0, 45.0);
        let hor = proj
            .inverse_apply(&CartesianCoordinates::new(10.0, 0.0))
            .unwrap();
        assert_relative_eq!(hor.az(), 3.648704634091643, epsilon = 1e-12);
        assert_relative_eq!(hor.alt(), -0.7657872146885684, epsilon = 1e-12);

        let origin = proj.inverse_apply(&CartesianCoordinates::new(0.0, 0.0)).unwrap();
        assert_eq!(origin.az(), proj.center().az());
        assert_eq!(origin.alt(), proj.center().alt());
    }

    #[test]
    fn test_round_trip() {
        for (caz, calt) in [(160.0, 15.0), (0.0, 0.0), (271.0, 89.0), (90.0, -30.0)] {
            let proj = projection(caz, calt);
            for az in [0.0, 33.0, 158.0, 180.0, 260.5, 359.0] {
                for alt in [-60.0, -10.0, 0.0, 14.0, 45.0, 80.0] {
                    let hor = HorizontalCoordinates::from_deg(az, alt).unwrap();
                    // skip directions close to the antipode of the center
                    if hor.angular_distance_to(proj.center()) > 2.5 {
                        continue;
                    }
                    let back = proj.inverse_apply(&proj.apply(&hor)).unwrap();
                    assert_relative_eq!(back.alt(), hor.alt(), epsilon = 1e-9);
                    let gap = (back.az() - hor.az()).abs();
                    assert!(gap.min(std::f64::consts::TAU - gap) < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_circles() {
        let proj = projection(45.0, 45.0);
        let parallel = HorizontalCoordinates::from_deg(0.0, 27.0).unwrap();
        let c = proj.circle_center_for_parallel(&parallel);
        assert_eq!(c.x(), 0.0);
        assert_relative_eq!(c.y(), 0.6089987400733187, epsilon = 1e-12);
        assert_relative_eq!(
            proj.circle_radius_for_parallel(&parallel),
            0.767383180397855,
            epsilon = 1e-12
        );

        let meridian = HorizontalCoordinates::from_deg(100.0, 0.0).unwrap();
        let c = proj.circle_center_for_meridian(&meridian);
        assert_relative_eq!(c.y(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(c.x(), -0.9902429970120489, epsilon = 1e-12);
        assert_relative_eq!(
            proj.circle_radius_for_meridian(&meridian),
            1.726435980026889,
            epsilon = 1e-12
        );

        // a point of the parallel lies on its projected circle
        let on_parallel = proj.apply(&HorizontalCoordinates::from_deg(200.0, 27.0).unwrap());
        assert_relative_eq!(
            on_parallel.distance_to(&proj.circle_center_for_parallel(&parallel)),
            proj.circle_radius_for_parallel(&parallel).abs(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_apply_to_angle() {
        let proj = projection(0.0, 0.0);
        assert_relative_eq!(
            proj.apply_to_angle(0.5f64.to_radians()),
            2.0 * (0.5f64.to_radians() / 4.0).tan(),
            epsilon = 1e-15
        );
        assert_relative_eq!(proj.apply_to_angle(std::f64::consts::PI), 2.0, epsilon = 1e-12);
    }
}
