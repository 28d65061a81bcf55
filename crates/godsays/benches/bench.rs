use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use godsays::{DEFAULT_AMOUNT, PhraseGenerator, RandSource, WordCorpus};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

/// Walks the corpus in order so runs are comparable.
struct CyclingRandom {
    next: usize,
}

impl RandSource for CyclingRandom {
    fn rand_index(&mut self, upper: usize) -> usize {
        let index = self.next % upper;
        self.next = self.next.wrapping_add(1);
        index
    }
}

// Number of phrases generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_PHRASES: usize = 1024;

fn bench_single_thread(c: &mut Criterion) {
    let corpus = Arc::new(WordCorpus::load().unwrap());
    let mut group = c.benchmark_group("speak");
    group.throughput(Throughput::Elements(TOTAL_PHRASES as u64));

    for amount in [1_i64, DEFAULT_AMOUNT as i64, 1000] {
        let generator = PhraseGenerator::with_rng(
            Arc::clone(&corpus),
            amount,
            CyclingRandom { next: 0 },
        )
        .unwrap();

        group.bench_function(format!("amount/{amount}"), |b| {
            b.iter(|| {
                for _ in 0..TOTAL_PHRASES {
                    black_box(generator.speak());
                }
            });
        });
    }
    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let generator = PhraseGenerator::new(DEFAULT_AMOUNT as i64).unwrap();
    let mut group = c.benchmark_group("speak/contended");

    for threads in [2, 4, 8] {
        group.throughput(Throughput::Elements((TOTAL_PHRASES * threads) as u64));
        group.bench_function(format!("threads/{threads}"), |b| {
            b.iter_custom(|iters| {
                let barrier = Barrier::new(threads + 1);
                let start = scope(|s| {
                    for _ in 0..threads {
                        s.spawn(|| {
                            barrier.wait();
                            for _ in 0..iters {
                                for _ in 0..TOTAL_PHRASES {
                                    black_box(generator.speak());
                                }
                            }
                        });
                    }
                    barrier.wait();
                    Instant::now()
                });
                start.elapsed()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_thread, bench_contended);
criterion_main!(benches);
