use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_index::Tree;

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("tree_insert", |b| {
        let mut tree = Tree::new();
        b.iter(|| {
            for value in &values {
                tree.insert(*value);
            }
        })
    });

    c.bench_function("tree_insert_sorted", |b| {
        b.iter(|| {
            let mut tree = Tree::new();
            for value in 0..N as i32 {
                tree.insert(value);
            }
            tree
        })
    });

    let mut tree = Tree::new();
    for value in &values {
        tree.insert(*value);
    }

    c.bench_function("tree_contains", |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.contains(value));
            }
        })
    });

    c.bench_function("tree_remove", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for value in &values {
                    tree.remove(value);
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
