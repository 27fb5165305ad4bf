//! Performance measurement for the placement slot scan

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use crossweave::algorithm::placement::{Direction, find_slot, write_word};
use crossweave::spatial::LetterGrid;
use std::hint::black_box;

/// Measures the row-major validity scan on a partially filled grid
fn bench_find_slot(c: &mut Criterion) {
    let mut grid = LetterGrid::new(20);
    write_word(&mut grid, "MITOCHONDRIA", 10, 4, Direction::Across);
    // Crosses the C of MITOCHONDRIA at (10, 8)
    write_word(&mut grid, "CHROMOSOME", 10, 8, Direction::Down);

    c.bench_function("find_slot_20x20", |b| {
        b.iter(|| {
            let slot = find_slot(black_box(&grid), black_box("RIBOSOME"), Direction::Down);
            black_box(slot);
        });
    });
}

criterion_group!(benches, bench_find_slot);
criterion_main!(benches);
