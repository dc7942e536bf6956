use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hifitime::Epoch;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use skydome::astronomy::{ObservedSky, Star, StarCatalogue};
use skydome::config::ViewingParams;
use skydome::coordinates::{CartesianCoordinates, EquatorialCoordinates};

/// Catalogue of `n` stars spread uniformly on the sphere.
fn random_catalogue(rng: &mut StdRng, n: usize) -> Arc<StarCatalogue> {
    let mut builder = StarCatalogue::builder();
    for hip in 0..n {
        let ra = rng.random::<f64>() * std::f64::consts::TAU;
        let dec = (rng.random_range(-1.0..=1.0f64)).asin();
        let star = Star::new(
            hip as u32,
            format!("HIP {hip}"),
            EquatorialCoordinates::new(ra, dec).unwrap(),
            rng.random_range(-1.5..6.5),
            rng.random_range(-0.5..=2.0),
        )
        .unwrap();
        builder.add_star(star);
    }
    Arc::new(builder.build().unwrap())
}

fn bench_observe(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let catalogue = random_catalogue(&mut rng, 5_000);
    let params = ViewingParams::default();
    let when = Epoch::from_gregorian_utc(2020, 6, 1, 21, 30, 0, 0);

    c.bench_function("observed_sky/observe_5000_stars", |b| {
        b.iter(|| {
            ObservedSky::observe(black_box(&params), black_box(&when), Arc::clone(&catalogue))
                .unwrap()
        })
    });
}

fn bench_closest(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let catalogue = random_catalogue(&mut rng, 5_000);
    let when = Epoch::from_gregorian_utc(2020, 6, 1, 21, 30, 0, 0);
    let sky = ObservedSky::observe(&ViewingParams::default(), &when, catalogue).unwrap();
    let samples = 1_000usize;

    c.bench_function("observed_sky/object_closest_to", |b| {
        b.iter_batched(
            || {
                // Pre-generate query points to keep the RNG out of the timed section
                (0..samples)
                    .map(|_| {
                        CartesianCoordinates::new(
                            rng.random_range(-2.0..2.0),
                            rng.random_range(-2.0..2.0),
                        )
                    })
                    .collect::<Vec<_>>()
            },
            |points| {
                for p in &points {
                    black_box(sky.object_closest_to(p, 0.05));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_observe, bench_closest);
criterion_main!(benches);
