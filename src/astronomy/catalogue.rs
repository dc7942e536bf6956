//! # Star catalogue
//!
//! An immutable list of [`Star`]s together with the [`Asterism`]s drawn between them.
//!
//! ## Overview
//!
//! A catalogue is assembled with a [`StarCatalogueBuilder`], either star by star or by
//! running a [`Loader`] over a byte stream (see [`crate::astronomy::loaders`]). Building
//! the catalogue resolves every asterism member to its index in the star list, once;
//! renderers then only manipulate indices.
//!
//! Stars are shared as `Arc<Star>` and matched **by identity**: an asterism referencing
//! a star that was never added to the builder, even one equal field by field to a
//! catalogue star, makes [`StarCatalogueBuilder::build`] fail with
//! [`SkyError::StarNotInCatalogue`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use camino::Utf8Path;
//! use skydome::astronomy::catalogue::StarCatalogue;
//! use skydome::astronomy::loaders::{AsterismLoader, HygDatabaseLoader};
//!
//! # fn demo() -> Result<(), skydome::sky_errors::SkyError> {
//! let catalogue = StarCatalogue::builder()
//!     .load_from_path(Utf8Path::new("data/hygdata_v3.csv"), &HygDatabaseLoader)?
//!     .load_from_path(Utf8Path::new("data/asterisms.txt"), &AsterismLoader)?
//!     .build()?;
//! # Ok(())
//! # }
//! ```
use std::fs::File;
use std::io::{BufReader, Read};
use std::sync::Arc;

use ahash::AHashMap;
use camino::Utf8Path;
use log::debug;

use crate::astronomy::asterism::Asterism;
use crate::astronomy::star::Star;
use crate::astronomy::CelestialObject;
use crate::sky_errors::SkyError;

/// A source of stars and asterisms in a given file format.
pub trait Loader {
    /// Read `reader` to the end and append its content to `builder`.
    fn load<R: Read>(&self, reader: R, builder: &mut StarCatalogueBuilder) -> Result<(), SkyError>;
}

#[derive(Debug, Clone)]
pub struct StarCatalogue {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
    /// `asterism_indices[i]` holds the star indices of `asterisms[i]`
    asterism_indices: Vec<Vec<usize>>,
}

impl StarCatalogue {
    /// Build a catalogue, resolving the stars of every asterism in `stars`.
    ///
    /// Return
    /// ------
    /// * [`SkyError::StarNotInCatalogue`] for the first asterism member that is not one of `stars`.
    pub fn new(stars: Vec<Arc<Star>>, asterisms: Vec<Asterism>) -> Result<Self, SkyError> {
        let index_of: AHashMap<*const Star, usize> = stars
            .iter()
            .enumerate()
            .map(|(i, s)| (Arc::as_ptr(s), i))
            .collect();

        let asterism_indices = asterisms
            .iter()
            .map(|asterism| {
                asterism
                    .stars()
                    .iter()
                    .map(|s| {
                        index_of.get(&Arc::as_ptr(s)).copied().ok_or_else(|| {
                            SkyError::StarNotInCatalogue {
                                hipparcos_id: s.hipparcos_id(),
                                name: s.name().to_string(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Star catalogue built with {} stars and {} asterisms",
            stars.len(),
            asterisms.len()
        );

        Ok(Self {
            stars,
            asterisms,
            asterism_indices,
        })
    }

    pub fn builder() -> StarCatalogueBuilder {
        StarCatalogueBuilder::new()
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Indices in [`Self::stars`] of the stars of `asterism`, in drawing order.
    ///
    /// `asterism` must be one of [`Self::asterisms`] (compared by address), otherwise
    /// [`SkyError::UnknownAsterism`] is returned.
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize], SkyError> {
        self.asterisms
            .iter()
            .position(|a| std::ptr::eq(a, asterism))
            .map(|i| self.asterism_indices[i].as_slice())
            .ok_or(SkyError::UnknownAsterism)
    }

    /// Every asterism with its star indices.
    pub fn asterisms_with_indices(&self) -> impl Iterator<Item = (&Asterism, &[usize])> + '_ {
        self.asterisms
            .iter()
            .zip(self.asterism_indices.iter().map(Vec::as_slice))
    }
}

/// Incremental construction of a [`StarCatalogue`].
#[derive(Debug, Default)]
pub struct StarCatalogueBuilder {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
}

impl StarCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_star(&mut self, star: impl Into<Arc<Star>>) -> &mut Self {
        self.stars.push(star.into());
        self
    }

    pub fn add_asterism(&mut self, asterism: Asterism) -> &mut Self {
        self.asterisms.push(asterism);
        self
    }

    /// Stars added so far, in insertion order.
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Append the content of `reader`, decoded by `loader`.
    pub fn load_from<R: Read, L: Loader>(
        &mut self,
        reader: R,
        loader: &L,
    ) -> Result<&mut Self, SkyError> {
        loader.load(reader, self)?;
        Ok(self)
    }

    /// Append the content of the file at `path`, decoded by `loader`.
    ///
    /// Return
    /// ------
    /// * [`SkyError::Io`] when the file cannot be opened, or the loader error.
    pub fn load_from_path<L: Loader>(
        &mut self,
        path: &Utf8Path,
        loader: &L,
    ) -> Result<&mut Self, SkyError> {
        let file = File::open(path)?;
        debug!("Loading catalogue data from {path}");
        self.load_from(BufReader::new(file), loader)
    }

    /// Freeze the builder into a [`StarCatalogue`]; the builder is left empty.
    pub fn build(&mut self) -> Result<StarCatalogue, SkyError> {
        StarCatalogue::new(
            std::mem::take(&mut self.stars),
            std::mem::take(&mut self.asterisms),
        )
    }
}

#[cfg(test)]
mod catalogue_test {
    use super::*;
    use crate::coordinates::EquatorialCoordinates;

    fn star(hip: u32, name: &str) -> Arc<Star> {
        Arc::new(
            Star::new(hip, name, EquatorialCoordinates::new(0.5, 0.1).unwrap(), 1.0, 0.5).unwrap(),
        )
    }

    #[test]
    fn test_asterism_indices() {
        let (a, b, c) = (star(1, "A"), star(2, "B"), star(3, "C"));
        let mut builder = StarCatalogue::builder();
        builder
            .add_star(a.clone())
            .add_star(b.clone())
            .add_star(c.clone())
            .add_asterism(Asterism::new(vec![c.clone(), a.clone()]).unwrap())
            .add_asterism(Asterism::new(vec![b.clone()]).unwrap());
        let catalogue = builder.build().unwrap();

        assert_eq!(catalogue.stars().len(), 3);
        assert_eq!(catalogue.asterisms().len(), 2);
        assert_eq!(
            catalogue.asterism_indices(&catalogue.asterisms()[0]).unwrap(),
            &[2, 0]
        );
        assert_eq!(
            catalogue.asterism_indices(&catalogue.asterisms()[1]).unwrap(),
            &[1]
        );

        let all: Vec<_> = catalogue
            .asterisms_with_indices()
            .map(|(_, indices)| indices.to_vec())
            .collect();
        assert_eq!(all, vec![vec![2, 0], vec![1]]);
    }

    #[test]
    fn test_star_identity_is_required() {
        let a = star(1, "A");
        let twin = star(1, "A");
        let mut builder = StarCatalogueBuilder::new();
        builder
            .add_star(a)
            .add_asterism(Asterism::new(vec![twin]).unwrap());

        assert_eq!(
            builder.build().unwrap_err(),
            SkyError::StarNotInCatalogue {
                hipparcos_id: 1,
                name: "A".into()
            }
        );
    }

    #[test]
    fn test_unknown_asterism() {
        let a = star(1, "A");
        let catalogue = StarCatalogue::new(
            vec![a.clone()],
            vec![Asterism::new(vec![a.clone()]).unwrap()],
        )
        .unwrap();

        let foreign = Asterism::new(vec![a]).unwrap();
        assert_eq!(
            catalogue.asterism_indices(&foreign).unwrap_err(),
            SkyError::UnknownAsterism
        );
    }

    #[test]
    fn test_missing_file() {
        let err = StarCatalogue::builder()
            .load_from_path(Utf8Path::new("does/not/exist.csv"), &NoopLoader)
            .unwrap_err();
        assert!(matches!(err, SkyError::Io(_)));
    }

    struct NoopLoader;

    impl Loader for NoopLoader {
        fn load<R: Read>(&self, _: R, _: &mut StarCatalogueBuilder) -> Result<(), SkyError> {
            Ok(())
        }
    }
}
