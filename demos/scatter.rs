//! Scatter random obstacles on a board and run the search to completion.
//!
//! Run: cargo run --bin scatter [size] [density]

use gridwave_core::{Board, Point};
use gridwave_demos::render;
use gridwave_search::{StepResult, StepSearch};
use rand::RngExt;

fn main() {
    let mut args = std::env::args().skip(1);
    let size: i32 = args
        .next()
        .map(|s| s.parse().expect("size must be an integer"))
        .unwrap_or(20);
    let density: f64 = args
        .next()
        .map(|s| s.parse().expect("density must be a number in 0..1"))
        .unwrap_or(0.3);

    let start = Point::new(0, 0);
    let stop = Point::new(size - 1, size - 1);

    let mut rng = rand::rng();
    let mut walls = Vec::new();
    for y in 0..size {
        for x in 0..size {
            if rng.random_bool(density) {
                walls.push(Point::new(x, y));
            }
        }
    }

    let board = match Board::new(size, size, &walls, start, stop) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut search = StepSearch::new(&board);
    match search.run_to_completion() {
        StepResult::Succeeded(path) => {
            println!("{}", render(&board, &search));
            let cost = search
                .distance_at(board.stop())
                .expect("stop cell has a distance after success");
            println!(
                "path found: {} cells, cost {:.3}, {} rounds",
                path.len(),
                cost,
                search.rounds(),
            );
        }
        StepResult::Exhausted => {
            println!("{}", render(&board, &search));
            println!("no path exists ({} rounds)", search.rounds());
        }
        StepResult::Running => unreachable!("run_to_completion only returns terminal results"),
    }
}
