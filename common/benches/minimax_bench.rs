use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::engine::tictactoe::{
    Board, BotInput, Difficulty, FULL_SEARCH_DEPTH, Mark, calculate_move, evaluate,
};

fn bench_full_search_empty_board() {
    let input = BotInput {
        board: Board::new(),
        current_mark: Mark::Computer,
    };
    black_box(calculate_move(FULL_SEARCH_DEPTH, input).ok());
}

fn bench_full_search_mid_game() {
    let mut board = Board::new();
    for (index, mark) in [(0, Mark::Human), (4, Mark::Computer), (8, Mark::Human)] {
        board.place(index, mark).unwrap();
    }
    let input = BotInput {
        board,
        current_mark: Mark::Computer,
    };
    black_box(calculate_move(FULL_SEARCH_DEPTH, input).ok());
}

fn bench_self_play(max_depth: usize) {
    let mut board = Board::new();
    let mut current_mark = Mark::Human;

    while !evaluate(&board).is_over() {
        let input = BotInput {
            board,
            current_mark,
        };
        let Ok(index) = calculate_move(max_depth, input) else {
            break;
        };
        if board.place(index, current_mark).is_err() {
            break;
        }
        current_mark = match current_mark.opponent() {
            Some(next) => next,
            None => break,
        };
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_full_search_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_full_search_mid_game)
    });

    for difficulty in Difficulty::ALL {
        group.bench_function(format!("self_play_{}", difficulty), |b| {
            b.iter(|| bench_self_play(difficulty.max_depth()))
        });
    }

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
