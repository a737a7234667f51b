//! Step the search through a fixed map, printing every frontier wave.
//!
//! Run: cargo run --bin stepper

use gridwave_demos::{parse_board, render};
use gridwave_search::{StepResult, StepSearch};

const MAP: &str = "\
@....#........
.....#........
.....#...####.
.....#...#....
.....#...#.X..
.....#...#....
.....#...####.
.....#........
..............";

fn main() {
    let board = match parse_board(MAP) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut search = StepSearch::new(&board);
    println!("round 0\n{}", render(&board, &search));

    loop {
        let result = search.advance();
        println!("round {}\n{}", search.rounds(), render(&board, &search));
        match result {
            StepResult::Running => {}
            StepResult::Succeeded(path) => {
                let cost = search
                    .distance_at(board.stop())
                    .expect("stop cell has a distance after success");
                println!(
                    "path found: {} cells, cost {:.3}, {} rounds",
                    path.len(),
                    cost,
                    search.rounds(),
                );
                break;
            }
            StepResult::Exhausted => {
                println!("no path exists ({} rounds)", search.rounds());
                break;
            }
        }
    }
}
