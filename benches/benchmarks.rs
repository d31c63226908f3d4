use std::iter;

use bloomset::hash::DoubleHash;
use bloomset::BloomFilter;
use criterion::{BenchmarkId, Criterion};

/// A random URL-shaped item, as raw bytes.
fn url() -> Vec<u8> {
    let rng = fastrand::Rng::new();
    let host: String = iter::repeat_with(|| rng.alphanumeric()).take(12).collect();

    format!("http://{}.com/{}", host.to_ascii_lowercase(), rng.u32(..)).into_bytes()
}

fn blocklist(n: usize, fp_rate: f64) -> BloomFilter {
    let mut bf = BloomFilter::with_rate(n, fp_rate).expect("parameters are valid");
    for _ in 0..n {
        bf.insert(url());
    }
    bf
}

fn bench_indices(c: &mut Criterion) {
    let item = url();

    for k in [7, 13] {
        c.bench_with_input(BenchmarkId::new("indices", k), &k, |b, &k| {
            b.iter(|| DoubleHash::new(&item).indices(k, 3835).sum::<usize>());
        });
    }
}

fn bench_insert(c: &mut Criterion) {
    for (n, fp_rate) in [(200, 0.0001), (10_000, 0.01)] {
        let mut bf = BloomFilter::with_rate(n, fp_rate).expect("parameters are valid");
        let items: Vec<_> = iter::repeat_with(url).take(1024).collect();

        c.bench_with_input(BenchmarkId::new("insert", n), &n, |b, _| {
            let mut next = items.iter().cycle();
            b.iter(|| bf.insert(next.next().expect("cycle is endless")));
        });
    }
}

fn bench_contains(c: &mut Criterion) {
    for (n, fp_rate) in [(200, 0.0001), (10_000, 0.01)] {
        let bf = blocklist(n, fp_rate);
        let absent: Vec<_> = iter::repeat_with(url).take(1024).collect();

        c.bench_with_input(BenchmarkId::new("contains-absent", n), &n, |b, _| {
            let mut next = absent.iter().cycle();
            b.iter(|| bf.contains(next.next().expect("cycle is endless")));
        });
    }
}

criterion::criterion_group!(benches, bench_indices, bench_insert, bench_contains);
criterion::criterion_main!(benches);
