use arcade_core::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn warnsdorff_walk(size: Coord) -> CellCount {
    let mut tour = KnightTour::new(size).unwrap();
    tour.start((0, 0)).unwrap();
    while let Ok(hint) = tour.suggest_next_move() {
        if tour.move_to(hint).unwrap() == MoveOutcome::Completed {
            break;
        }
    }
    tour.visited_count()
}

fn bench_warnsdorff(c: &mut Criterion) {
    let mut group = c.benchmark_group("warnsdorff");
    for size in BOARD_SIZES {
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| warnsdorff_walk(black_box(size)))
        });
    }
    group.finish();
}

fn bench_monty_hall(c: &mut Criterion) {
    c.bench_function("monty_hall_1000_rounds", |b| {
        b.iter(|| {
            let mut engine = MontyHall::new();
            simulate(
                &mut engine,
                black_box(Strategy::Random),
                1_000,
                &mut seeded_rng(1),
            )
            .unwrap()
        })
    });
}

fn bench_gomoku(c: &mut Criterion) {
    c.bench_function("gomoku_fill_board", |b| {
        b.iter(|| {
            let mut game = Gomoku::default();
            let size = game.size();
            'outer: for row in 0..size {
                for col in 0..size {
                    // stagger columns so neither colour lines up quickly
                    let col = (col + row * 2) % size;
                    if game.place(black_box((row, col))).is_err() || game.is_finished() {
                        break 'outer;
                    }
                }
            }
            game.stones_placed()
        })
    });
}

criterion_group!(benches, bench_warnsdorff, bench_monty_hall, bench_gomoku);
criterion_main!(benches);
