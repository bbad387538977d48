use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gat_lending_iterator::LendingIterator;
use spazio::{
    domain::Domain,
    iterators::{OrderKind, TraversableRange},
    partition::{broadcast, Partitioner},
};

fn nested_loops(c: &mut Criterion) {
    c.bench_function("nested loops 256x256", |b| {
        b.iter(|| {
            let mut sum = 0isize;
            for j in 0..256isize {
                for i in 0..256isize {
                    sum += black_box(i) ^ j;
                }
            }
            sum
        })
    });
}

fn cursor_traversal(c: &mut Criterion) {
    let range = TraversableRange::linear(Domain::new(&[0, 256, 0, 256]).unwrap());

    c.bench_function("cursor 256x256", |b| {
        b.iter(|| {
            let mut sum = 0isize;
            let end = range.end();
            let mut cursor = range.begin();
            while cursor != end {
                let c = cursor.read();
                sum += black_box(c[0]) ^ c[1];
                cursor.advance().unwrap();
            }
            sum
        })
    });

    c.bench_function("lending 256x256", |b| {
        b.iter(|| {
            let mut sum = 0isize;
            let mut traversal = range.lend();
            while let Some(c) = traversal.next() {
                sum += black_box(c[0]) ^ c[1];
            }
            sum
        })
    });

    c.bench_function("owned 256x256", |b| {
        b.iter(|| {
            range
                .iter()
                .map(|c| black_box(c[0]) ^ c[1])
                .sum::<isize>()
        })
    });
}

fn partitioned(c: &mut Criterion) {
    let domain = Domain::new(&[0, 1024, 0, 1024]).unwrap();

    c.bench_function("partitions 1024x1024 / 64", |b| {
        b.iter(|| Partitioner::partitions(black_box(&domain), 1, 64).unwrap())
    });

    c.bench_function("broadcast 1024x1024", |b| {
        b.iter(|| {
            broadcast(&domain, 1, OrderKind::Linear, |_, range| {
                let mut sum = 0isize;
                let mut traversal = range.lend();
                while let Some(c) = traversal.next() {
                    sum += black_box(c[0]) ^ c[1];
                }
                sum
            })
            .unwrap()
        })
    });
}

criterion_group!(benches, nested_loops, cursor_traversal, partitioned);
criterion_main!(benches);
