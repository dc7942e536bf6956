//! # Catalogue loaders
//!
//! [`Loader`] implementations for the two text formats the sky is usually built from.
//!
//! ## HYG database
//!
//! [`HygDatabaseLoader`] reads the CSV export of the HYG database (v3). The header line
//! names the columns, only `hip`, `proper`, `rarad`, `decrad`, `mag`, `ci`, `bayer` and
//! `con` are used and the others are ignored. Lines starting with `#` are skipped.
//!
//! * a missing Hipparcos number becomes `0`;
//! * a star without a proper name is named after its Bayer designation and
//!   constellation, `"? Ori"` when the Bayer designation is missing too;
//! * a missing magnitude or color index becomes `0`.
//!
//! ## Asterisms
//!
//! [`AsterismLoader`] reads one asterism per line, as comma separated Hipparcos numbers:
//!
//! ```text
//! 24436,27366,26727,26311,25930,25336,27989
//! 26727,27989
//! ```
//!
//! Every number must match a star already added to the builder, so the asterism file is
//! loaded **after** the star file.
use std::io::Read;
use std::sync::Arc;

use ahash::AHashMap;
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;

use crate::astronomy::asterism::Asterism;
use crate::astronomy::catalogue::{Loader, StarCatalogueBuilder};
use crate::astronomy::star::Star;
use crate::coordinates::EquatorialCoordinates;
use crate::sky_errors::SkyError;

/// Columns of the HYG database read by [`HygDatabaseLoader`].
#[derive(Debug, Deserialize)]
struct HygRecord {
    hip: Option<u32>,
    proper: Option<String>,
    rarad: f64,
    decrad: f64,
    mag: Option<f64>,
    ci: Option<f64>,
    bayer: Option<String>,
    con: Option<String>,
}

impl HygRecord {
    fn name(&self) -> String {
        match &self.proper {
            Some(proper) => proper.clone(),
            None => format!(
                "{} {}",
                self.bayer.as_deref().unwrap_or("?"),
                self.con.as_deref().unwrap_or_default()
            ),
        }
    }

    fn into_star(self) -> Result<Star, SkyError> {
        let name = self.name();
        Star::new(
            self.hip.unwrap_or(0),
            name,
            EquatorialCoordinates::new(self.rarad, self.decrad)?,
            self.mag.unwrap_or(0.0),
            self.ci.unwrap_or(0.0),
        )
    }
}

/// Loader for the CSV export of the HYG stellar database.
#[derive(Debug, Clone, Copy, Default)]
pub struct HygDatabaseLoader;

impl Loader for HygDatabaseLoader {
    fn load<R: Read>(&self, reader: R, builder: &mut StarCatalogueBuilder) -> Result<(), SkyError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut count = 0usize;
        for record in rdr.deserialize::<HygRecord>() {
            builder.add_star(record?.into_star()?);
            count += 1;
        }
        debug!("HYG loader: {count} stars added");
        Ok(())
    }
}

/// Loader for asterisms given as lines of Hipparcos numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsterismLoader;

impl Loader for AsterismLoader {
    fn load<R: Read>(&self, reader: R, builder: &mut StarCatalogueBuilder) -> Result<(), SkyError> {
        let by_hip: AHashMap<u32, Arc<Star>> = builder
            .stars()
            .iter()
            .map(|s| (s.hipparcos_id(), Arc::clone(s)))
            .collect();

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut count = 0usize;
        for record in rdr.records() {
            let ids: Vec<u32> = record?.deserialize(None)?;
            let stars = ids
                .into_iter()
                .map(|hip| {
                    by_hip
                        .get(&hip)
                        .cloned()
                        .ok_or(SkyError::UnknownHipparcosId(hip))
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder.add_asterism(Asterism::new(stars)?);
            count += 1;
        }
        debug!("Asterism loader: {count} asterisms added");
        Ok(())
    }
}
