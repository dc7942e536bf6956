mod common;

use std::sync::Arc;

use camino::Utf8Path;
use skydome::astronomy::loaders::{AsterismLoader, HygDatabaseLoader};
use skydome::astronomy::{Asterism, CelestialObject, StarCatalogue};
use skydome::sky_errors::SkyError;

use crate::common::{sample_catalogue, HYG_SAMPLE};

#[test]
fn test_load_sample_catalogue() {
    let catalogue = sample_catalogue();
    let stars = catalogue.stars();
    assert_eq!(stars.len(), 11);

    let names: Vec<_> = stars.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        [
            "Sol",
            "? Psc",
            "Polaris",
            "Pi-3 Ori",
            "Rigel",
            "Bellatrix",
            "Mintaka",
            "Alnilam",
            "Alnitak",
            "Saiph",
            "Betelgeuse"
        ]
    );

    // no Hipparcos number for the Sun
    assert_eq!(stars[0].hipparcos_id(), 0);
    assert_eq!(stars[0].magnitude(), -26.7);
    assert_eq!(stars[10].hipparcos_id(), 27989);
    assert_eq!(stars[10].color_temperature(), 3793);
    assert!(stars.iter().all(|s| s.angular_size() == 0.0));
}

#[test]
fn test_sample_asterisms() {
    let catalogue = sample_catalogue();
    let asterisms = catalogue.asterisms();
    assert_eq!(asterisms.len(), 3);

    assert_eq!(
        catalogue.asterism_indices(&asterisms[0]).unwrap(),
        &[4, 9, 8, 7, 6, 5, 10, 8]
    );
    assert_eq!(catalogue.asterism_indices(&asterisms[1]).unwrap(), &[6, 4]);
    assert_eq!(catalogue.asterism_indices(&asterisms[2]).unwrap(), &[2]);

    let belt: Vec<_> = asterisms[0]
        .segments()
        .map(|(a, b)| format!("{}-{}", a.name(), b.name()))
        .collect();
    assert_eq!(belt[2], "Alnitak-Alnilam");
    assert_eq!(belt.len(), 7);
}

#[test]
fn test_asterism_with_foreign_star() {
    let mut builder = StarCatalogue::builder();
    builder
        .load_from_path(Utf8Path::new(HYG_SAMPLE), &HygDatabaseLoader)
        .unwrap();

    // a copy of Rigel is not Rigel
    let rigel_copy = Arc::new((*builder.stars()[4]).clone());
    let polaris = Arc::clone(&builder.stars()[2]);
    builder.add_asterism(Asterism::new(vec![polaris, rigel_copy]).unwrap());

    assert_eq!(
        builder.build().unwrap_err(),
        SkyError::StarNotInCatalogue {
            hipparcos_id: 24436,
            name: "Rigel".into()
        }
    );
}

#[test]
fn test_asterisms_before_stars() {
    let err = StarCatalogue::builder()
        .load_from_path(Utf8Path::new("tests/data/asterisms_sample.txt"), &AsterismLoader)
        .unwrap_err();
    assert_eq!(err, SkyError::UnknownHipparcosId(24436));
}

#[test]
fn test_malformed_hyg_line() {
    let data = "id,hip,proper,rarad,decrad,mag,ci,bayer,con\n1,12,Bad,7.5,0.1,1.0,0.2,,Ori\n";
    let err = StarCatalogue::builder()
        .load_from(data.as_bytes(), &HygDatabaseLoader)
        .unwrap_err();
    assert!(matches!(
        err,
        SkyError::OutOfDomain {
            field: "right ascension",
            ..
        }
    ));
}
