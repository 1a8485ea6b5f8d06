use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::time::Duration;

use shogi_mate1::board::Board;
use shogi_mate1::solver;

// A mix of puzzle-shaped and cluttered positions so the bench reflects both
// the fast checkmate-found-early path and the full legal-move sweep.
const POSITIONS: &[&str] = &[
    "8k/9/9/9/9/9/9/9/K8 b G 1",
    "8k/6G2/7S1/9/9/9/9/9/K8 b P 1",
    "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
    "ln1g5/1r2S1k2/p2pppn2/2ps2p2/1p7/2P6/PPSPPPPLP/2G2K1pr/LN4G1b w BGSLPnp 62",
];

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let positions: Vec<Board> = POSITIONS.iter().map(|pos| pos.parse().unwrap()).collect();

    criterion
        .benchmark_group("solve")
        .throughput(Throughput::Elements(positions.len() as u64))
        .bench_function("verify", |b| {
            b.iter(|| {
                for board in &positions {
                    black_box(solver::verify(board));
                }
            })
        });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100).measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
