// Criterion benchmarks for the edit-distance utility and the
// suggestion ranker over a synthetic word list.
//
// Run:
//   cargo bench -p spelt

use criterion::{Criterion, criterion_group, criterion_main};

use spelt::dictionary::Dictionary;
use spelt::suggest::{SuggestConfig, suggest};
use spelt_core::distance::edit_distance;

/// Deterministic synthetic word list: every 3- and 4-letter combination
/// over a small alphabet, roughly 4.7k entries.
fn synthetic_words() -> Vec<String> {
    let alphabet = ['a', 'e', 'i', 'n', 'r', 's', 't', 'd'];
    let mut words = Vec::new();
    for &a in &alphabet {
        for &b in &alphabet {
            for &c in &alphabet {
                words.push(format!("{a}{b}{c}"));
                for &d in &alphabet {
                    words.push(format!("{a}{b}{c}{d}"));
                }
            }
        }
    }
    words
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("edit_distance/kitten_sitting", |b| {
        b.iter(|| edit_distance(std::hint::black_box("kitten"), std::hint::black_box("sitting")))
    });

    c.bench_function("edit_distance/long_words", |b| {
        b.iter(|| {
            edit_distance(
                std::hint::black_box("antidisestablishmentarianism"),
                std::hint::black_box("antidisestablishmentarianisms"),
            )
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let words = synthetic_words();
    let dictionary = Dictionary::from_words(words.iter().map(String::as_str));
    let config = SuggestConfig::default();

    c.bench_function("suggest/4k_dictionary", |b| {
        b.iter(|| suggest(std::hint::black_box("tesd"), &dictionary, &config))
    });
}

criterion_group!(benches, bench_edit_distance, bench_suggest);
criterion_main!(benches);
