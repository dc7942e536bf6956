//! # Observed sky
//!
//! A snapshot of the whole sky for one instant, one observer and one projection:
//! the Sun, the Moon, the seven planets and the catalogue stars, each paired with
//! its position on the projection plane.
//!
//! ## Layout
//!
//! Objects are stored in a fixed order, the **arena order**:
//!
//! ```text
//! [ Sun | Moon | Mercury Venus Mars Jupiter Saturn Uranus Neptune | stars in catalogue order ]
//! ```
//!
//! and the projected positions live in a vector aligned on that order. Flat coordinate
//! arrays for renderers ([`ObservedSky::planet_positions`], [`ObservedSky::star_positions`])
//! follow the order of [`ObservedSky::planets`] and [`ObservedSky::stars`].
//!
//! ## Nearest object
//!
//! [`ObservedSky::object_closest_to`] scans the positions inside the square of half-side
//! `max_distance` around the query point and keeps the smallest squared distance.
//! An object exactly at `max_distance` is accepted. When several objects are at the same
//! distance, the first one in arena order wins.
//!
//! A snapshot is immutable: a new one is computed whenever the instant, the observer,
//! the projection or the catalogue changes.
use std::fmt;
use std::sync::Arc;

use hifitime::Epoch;
use itertools::Itertools;
use log::trace;

use crate::astronomy::asterism::Asterism;
use crate::astronomy::catalogue::StarCatalogue;
use crate::astronomy::celestial_object::{CelestialBody, CelestialObject};
use crate::astronomy::moon::{Moon, MoonModel};
use crate::astronomy::planet::{Planet, PlanetModel};
use crate::astronomy::star::Star;
use crate::astronomy::sun::{Sun, SunModel};
use crate::astronomy::CelestialObjectModel;
use crate::config::ViewingParams;
use crate::coordinates::{
    CartesianCoordinates, EclipticToEquatorialConversion, EquatorialCoordinates,
    EquatorialToHorizontalConversion, GeographicCoordinates, StereographicProjection,
};
use crate::sky_errors::SkyError;
use crate::time::ReferenceEpoch;

const SUN_INDEX: usize = 0;
const MOON_INDEX: usize = 1;
const FIRST_PLANET_INDEX: usize = 2;

/// Borrowed view on any object of an [`ObservedSky`].
#[derive(Debug, Clone, Copy)]
pub enum SkyObject<'a> {
    Sun(&'a Sun),
    Moon(&'a Moon),
    Planet(&'a Planet),
    Star(&'a Arc<Star>),
}

impl CelestialObject for SkyObject<'_> {
    fn body(&self) -> &CelestialBody {
        match self {
            SkyObject::Sun(sun) => sun.body(),
            SkyObject::Moon(moon) => moon.body(),
            SkyObject::Planet(planet) => planet.body(),
            SkyObject::Star(star) => star.body(),
        }
    }

    fn info(&self) -> String {
        match self {
            SkyObject::Sun(sun) => sun.info(),
            SkyObject::Moon(moon) => moon.info(),
            SkyObject::Planet(planet) => planet.info(),
            SkyObject::Star(star) => star.info(),
        }
    }
}

impl fmt::Display for SkyObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

#[derive(Debug, Clone)]
pub struct ObservedSky {
    when: Epoch,
    observer: GeographicCoordinates,
    projection: StereographicProjection,
    catalogue: Arc<StarCatalogue>,
    sun: Sun,
    moon: Moon,
    planets: Vec<Planet>,
    /// Projected positions in arena order
    positions: Vec<CartesianCoordinates>,
}

impl ObservedSky {
    /// Compute the sky seen from `observer` at `when`.
    ///
    /// Arguments
    /// ---------
    /// * `when`: instant of the observation.
    /// * `observer`: geographic position of the observer.
    /// * `projection`: projection of the horizontal coordinates onto the plane.
    /// * `catalogue`: stars and asterisms, shared between snapshots.
    ///
    /// Return
    /// ------
    /// * The snapshot, or the first [`SkyError`] raised by a model or a conversion.
    pub fn new(
        when: &Epoch,
        observer: &GeographicCoordinates,
        projection: StereographicProjection,
        catalogue: Arc<StarCatalogue>,
    ) -> Result<Self, SkyError> {
        let days = ReferenceEpoch::J2010.days_until(when);
        let ecl_to_equ = EclipticToEquatorialConversion::new(when);
        let equ_to_hor = EquatorialToHorizontalConversion::new(when, observer);
        let to_plane = |equ: &EquatorialCoordinates| -> Result<CartesianCoordinates, SkyError> {
            Ok(projection.apply(&equ_to_hor.apply(equ)?))
        };

        let sun = SunModel.at(days, &ecl_to_equ)?;
        let moon = MoonModel.at_with_sun(days, &ecl_to_equ, &sun)?;
        let planets = PlanetModel::observable()
            .map(|model| model.at(days, &ecl_to_equ))
            .collect::<Result<Vec<_>, _>>()?;

        let mut positions =
            Vec::with_capacity(FIRST_PLANET_INDEX + planets.len() + catalogue.stars().len());
        positions.push(to_plane(sun.equatorial_pos())?);
        positions.push(to_plane(moon.equatorial_pos())?);
        for planet in &planets {
            positions.push(to_plane(planet.equatorial_pos())?);
        }
        for star in catalogue.stars() {
            positions.push(to_plane(star.equatorial_pos())?);
        }

        trace!(
            "Observed sky computed at {when} from {observer}: {} objects projected",
            positions.len()
        );

        Ok(Self {
            when: *when,
            observer: *observer,
            projection,
            catalogue,
            sun,
            moon,
            planets,
            positions,
        })
    }

    /// Compute the sky for the observer and projection described by `params`.
    pub fn observe(
        params: &ViewingParams,
        when: &Epoch,
        catalogue: Arc<StarCatalogue>,
    ) -> Result<Self, SkyError> {
        Self::new(when, &params.observer()?, params.projection()?, catalogue)
    }

    pub fn when(&self) -> &Epoch {
        &self.when
    }

    pub fn observer(&self) -> &GeographicCoordinates {
        &self.observer
    }

    pub fn projection(&self) -> &StereographicProjection {
        &self.projection
    }

    pub fn catalogue(&self) -> &Arc<StarCatalogue> {
        &self.catalogue
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn sun_position(&self) -> &CartesianCoordinates {
        &self.positions[SUN_INDEX]
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn moon_position(&self) -> &CartesianCoordinates {
        &self.positions[MOON_INDEX]
    }

    /// The seven planets other than the Earth, ordered by distance to the Sun.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// `[x0, y0, x1, y1, …]` for the planets, in the order of [`Self::planets`].
    pub fn planet_positions(&self) -> Vec<f64> {
        flatten(&self.positions[FIRST_PLANET_INDEX..self.first_star_index()])
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        self.catalogue.stars()
    }

    /// `[x0, y0, x1, y1, …]` for the stars, in the order of [`Self::stars`].
    pub fn star_positions(&self) -> Vec<f64> {
        flatten(&self.positions[self.first_star_index()..])
    }

    pub fn asterisms(&self) -> &[Asterism] {
        self.catalogue.asterisms()
    }

    /// Indices in [`Self::stars`] of the stars of `asterism`.
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize], SkyError> {
        self.catalogue.asterism_indices(asterism)
    }

    /// Star index pairs of the line segments of `asterism`.
    pub fn asterism_segments(&self, asterism: &Asterism) -> Result<Vec<(usize, usize)>, SkyError> {
        Ok(self
            .asterism_indices(asterism)?
            .iter()
            .copied()
            .tuple_windows()
            .collect())
    }

    /// Every object with its projected position, in arena order.
    pub fn objects(&self) -> impl Iterator<Item = (SkyObject<'_>, &CartesianCoordinates)> + '_ {
        (0..self.positions.len()).map(move |i| (self.object_at(i), &self.positions[i]))
    }

    /// Object whose projection is nearest to `point`, if it lies within `max_distance`.
    ///
    /// Ties resolve to the first object in arena order (Sun, Moon, planets, stars).
    pub fn object_closest_to(
        &self,
        point: &CartesianCoordinates,
        max_distance: f64,
    ) -> Option<SkyObject<'_>> {
        closest_index(&self.positions, point, max_distance).map(|i| self.object_at(i))
    }

    fn first_star_index(&self) -> usize {
        FIRST_PLANET_INDEX + self.planets.len()
    }

    fn object_at(&self, index: usize) -> SkyObject<'_> {
        let first_star = self.first_star_index();
        match index {
            SUN_INDEX => SkyObject::Sun(&self.sun),
            MOON_INDEX => SkyObject::Moon(&self.moon),
            i if i < first_star => SkyObject::Planet(&self.planets[i - FIRST_PLANET_INDEX]),
            i => SkyObject::Star(&self.catalogue.stars()[i - first_star]),
        }
    }
}

fn flatten(positions: &[CartesianCoordinates]) -> Vec<f64> {
    positions.iter().flat_map(|p| [p.x(), p.y()]).collect()
}

/// Index of the position nearest to `point` within `max_distance`, first one on ties.
///
/// Positions outside the axis-aligned square of half-side `max_distance` centered on
/// `point` are skipped before any distance is computed.
pub(crate) fn closest_index(
    positions: &[CartesianCoordinates],
    point: &CartesianCoordinates,
    max_distance: f64,
) -> Option<usize> {
    let max_distance2 = max_distance * max_distance;
    let mut best: Option<(usize, f64)> = None;

    for (i, p) in positions.iter().enumerate() {
        if (p.x() - point.x()).abs() > max_distance || (p.y() - point.y()).abs() > max_distance {
            continue;
        }
        let d2 = point.distance_squared_to(p);
        if best.map_or(true, |(_, best_d2)| d2 < best_d2) {
            best = Some((i, d2));
        }
    }

    best.filter(|&(_, d2)| d2 <= max_distance2).map(|(i, _)| i)
}
