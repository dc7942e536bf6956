//! Print the Sun, the Moon and the planets seen from the default location, using the
//! sample catalogue shipped with the tests.
//!
//! ```text
//! RUST_LOG=debug cargo run --example observe_sky
//! ```
use std::sync::Arc;

use camino::Utf8Path;
use hifitime::Epoch;
use log::info;

use skydome::astronomy::loaders::{AsterismLoader, HygDatabaseLoader};
use skydome::astronomy::{CelestialObject, ObservedSky, SkyObject, StarCatalogue};
use skydome::config::ViewingParams;
use skydome::coordinates::EquatorialToHorizontalConversion;
use skydome::sky_errors::SkyError;

fn main() -> Result<(), SkyError> {
    env_logger::init();

    let when = Epoch::from_gregorian_utc(2020, 6, 1, 21, 30, 0, 0);
    let catalogue = StarCatalogue::builder()
        .load_from_path(Utf8Path::new("tests/data/hygdata_sample.csv"), &HygDatabaseLoader)?
        .load_from_path(Utf8Path::new("tests/data/asterisms_sample.txt"), &AsterismLoader)?
        .build()?;

    let params = ViewingParams::default();
    let sky = ObservedSky::observe(&params, &when, Arc::new(catalogue))?;
    let to_horizontal = EquatorialToHorizontalConversion::new(&when, sky.observer());
    info!("Sky computed for {when} at {}", sky.observer());

    println!("{:<14} {:<36} {:<28} {:>7}", "object", "horizontal", "plane", "mag");
    for (object, position) in sky.objects() {
        if matches!(object, SkyObject::Star(_)) {
            continue;
        }
        let hor = to_horizontal.apply(object.equatorial_pos())?;
        println!(
            "{:<14} {:<36} {:<28} {:>7.2}",
            object.info(),
            hor.to_string(),
            position.to_string(),
            object.magnitude()
        );
    }

    let probe = *sky.moon_position();
    if let Some(object) = sky.object_closest_to(&probe, 0.1) {
        println!("closest to the Moon's position: {object}");
    }
    Ok(())
}
