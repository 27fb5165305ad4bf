//! Performance measurement for complete puzzle generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use crossweave::PuzzleGenerator;
use crossweave::io::records::SourceRecord;
use std::hint::black_box;

fn study_records() -> Vec<SourceRecord> {
    [
        ("Powerhouse of the cell", "mitochondria"),
        ("Carries genetic information", "chromosome"),
        ("Green pigment in plants", "chlorophyll"),
        ("Fluid inside cells", "cytoplasm"),
        ("Protein factory", "ribosome"),
        ("Control center of the cell", "nucleus"),
        ("Outer boundary of a cell", "membrane"),
        ("Energy currency molecule", "adenosine"),
        ("Sugar made by plants", "glucose"),
        ("Cell division process", "mitosis"),
        ("Basic unit of life", "cell"),
        ("Genetic code carrier", "dna"),
    ]
    .into_iter()
    .map(|(question, answer)| SourceRecord::new(question, answer))
    .collect()
}

/// Measures a full generation run over a twelve-record input set
fn bench_generate_full_puzzle(c: &mut Criterion) {
    let records = study_records();
    c.bench_function("generate_full_puzzle", |b| {
        b.iter(|| {
            let mut generator = PuzzleGenerator::new(12345);
            let puzzle = generator.generate(black_box(&records));
            black_box(puzzle.words.len());
        });
    });
}

criterion_group!(benches, bench_generate_full_puzzle);
criterion_main!(benches);
