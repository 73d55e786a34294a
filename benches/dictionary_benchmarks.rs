use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use tagdict::Dictionary;
use tagdict::TypeTag;
use tagdict::Verdict;

const SIZES: &[usize] = &[100, 1000];

fn filled(size: usize) -> Dictionary {
    let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::Integer);
    for i in 0..size {
        dict.add(format!("key-{i}"), i as i64).unwrap();
    }
    dict
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("tail_append", size), &size, |b, &size| {
            b.iter(|| {
                let mut dict = Dictionary::with_types(TypeTag::String, TypeTag::Integer);
                for i in 0..size {
                    dict.add(black_box(format!("key-{i}")), black_box(i as i64))
                        .unwrap();
                }
                dict
            })
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for &size in SIZES {
        group.bench_with_input(BenchmarkId::new("last_key", size), &size, |b, &size| {
            let mut dict = filled(size);
            let key = format!("key-{}", size - 1);
            b.iter(|| dict.get(black_box(key.as_str())).unwrap().clone())
        });
    }

    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    for &size in SIZES {
        group.bench_with_input(BenchmarkId::new("keep_all", size), &size, |b, &size| {
            let mut dict = filled(size);
            b.iter(|| dict.map(|_| black_box(Verdict::Emit)).unwrap())
        });
    }

    group.finish();
}

fn bench_to_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_array");

    for &size in SIZES {
        group.bench_with_input(BenchmarkId::new("materialize", size), &size, |b, &size| {
            let mut dict = filled(size);
            b.iter(|| dict.to_array())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_get, bench_map, bench_to_array);
criterion_main!(benches);
