use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_native_typegen::Translator;
use rand::{rngs::StdRng, Rng, SeedableRng};

// Helper to build a nested encoded signature of a given template depth.
fn nested_signature(depth: usize) -> String {
    let mut encoded = String::from("double");
    for _ in 0..depth {
        encoded = format!("std::vector&lt;({})>", encoded);
    }
    format!("r.q(const).{}", encoded)
}

// Helper to build a batch of mixed signatures resembling extractor output.
fn signature_batch(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let shapes = [
        "double",
        "r.bool",
        "r.q(const).string",
        "utilities::CommandLineParser",
        "r.std::vector&lt;(double)>",
        "std::map&lt;(string,std::vector&lt;(size_t)>)>",
        "int128_t",
    ];
    (0..count)
        .map(|_| shapes[rng.gen_range(0..shapes.len())].to_string())
        .collect()
}

fn benchmark_single_signatures(c: &mut Criterion) {
    let translator = Translator::default();
    let mut group = c.benchmark_group("Translate");

    let cases = [
        ("primitive", "double".to_string()),
        ("qualified primitive", "r.q(const).double".to_string()),
        ("namespaced identifier", "utilities::CommandLineParser".to_string()),
        ("template depth 1", nested_signature(1)),
        ("template depth 4", nested_signature(4)),
        ("fallback", "int128_t".to_string()),
    ];

    for (name, encoded) in &cases {
        group.bench_with_input(format!("Translate {}", name), encoded, |bencher, encoded| {
            bencher.iter(|| black_box(translator.translate_type(encoded)));
        });
    }
    group.finish();
}

fn benchmark_batches(c: &mut Criterion) {
    let translator = Translator::default();
    let mut group = c.benchmark_group("Batch");

    for &count in &[64usize, 1024] {
        let batch = signature_batch(count, 0);
        group.bench_with_input(format!("Batch of {}", count), &batch, |bencher, batch| {
            bencher.iter(|| {
                for encoded in batch {
                    black_box(translator.translate_type(encoded));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_single_signatures, benchmark_batches);
criterion_main!(benches);
