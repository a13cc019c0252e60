//! Performance measurement for per-cell mask construction and candidate search

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use autotile::algorithm::constraint::{ConstraintEngine, MatchMask};
use autotile::algorithm::generator::MapGenerator;
use autotile::terrain::TerrainCatalog;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn scenario_catalog() -> Option<TerrainCatalog> {
    let rows = vec![
        vec!["grass".to_string(), "water".to_string()],
        vec!["grass".to_string(), "sand".to_string()],
        vec!["sand".to_string(), "rock".to_string()],
    ];
    TerrainCatalog::from_rows(&rows).ok()
}

/// Measures a single constrained pick against a fully placed interior
fn bench_pick_tile(c: &mut Criterion) {
    let Some(catalog) = scenario_catalog() else {
        return;
    };

    let mut generator = MapGenerator::new(catalog, 12345);
    let Ok(grid) = generator.generate(32, 32) else {
        return;
    };
    let engine = generator.engine().clone();

    c.bench_function("pick_tile_interior", |b| {
        let mut rng = StdRng::seed_from_u64(777);
        b.iter(|| {
            let tile = engine.pick_tile(&grid, black_box(16), black_box(16), &mut rng);
            black_box(tile.ok());
        });
    });
}

/// Measures candidate enumeration over the whole tileset with no constraints
fn bench_unconstrained_enumeration(c: &mut Criterion) {
    let Some(catalog) = scenario_catalog() else {
        return;
    };
    let engine = ConstraintEngine::new(catalog);
    let mask = MatchMask::unconstrained();

    c.bench_function("matching_tiles_unconstrained", |b| {
        b.iter(|| {
            let candidates = engine.matching_tiles(black_box(&mask));
            black_box(candidates.ok());
        });
    });
}

criterion_group!(benches, bench_pick_tile, bench_unconstrained_enumeration);
criterion_main!(benches);
