//! Shared helpers for the terminal demos: ASCII map parsing and rendering.
//!
//! The demos stand in for the presentation layer the search engine is
//! designed to be driven by: build a [`Board`], call
//! [`StepSearch::advance`](gridwave_search::StepSearch::advance) once per
//! frame, and redraw from the observation interface.

use std::collections::HashSet;

use gridwave_core::{Board, BoardError, Point};
use gridwave_search::StepSearch;

/// Map legend shared by parsing and rendering.
pub const START: char = '@';
pub const STOP: char = 'X';
pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const FRONTIER: char = '*';
pub const VISITED: char = 'o';
pub const PATH: char = '+';

/// Parse an ASCII template into a [`Board`].
///
/// Rows are newline-separated; `@` marks the start, `X` the stop, `#` an
/// obstacle, and any other character an open cell. The template must contain
/// exactly one `@` and one `X` and have rows of equal width.
pub fn parse_board(template: &str) -> Result<Board, BoardError> {
    let mut walls = Vec::new();
    let mut start = None;
    let mut stop = None;
    let mut width = 0i32;
    let mut height = 0i32;

    for (y, line) in template.trim().lines().enumerate() {
        let y = y as i32;
        height = height.max(y + 1);
        for (x, ch) in line.trim().chars().enumerate() {
            let x = x as i32;
            width = width.max(x + 1);
            let p = Point::new(x, y);
            match ch {
                WALL => walls.push(p),
                START => start = Some(p),
                STOP => stop = Some(p),
                _ => {}
            }
        }
    }

    let start = start.expect("template has a start cell");
    let stop = stop.expect("template has a stop cell");
    Board::new(width, height, &walls, start, stop)
}

/// Render the board and the search's current observation state as ASCII.
pub fn render(board: &Board, search: &StepSearch<'_>) -> String {
    let frontier: HashSet<Point> = search.frontier().collect();
    let visited: HashSet<Point> = search.visited().collect();
    let path: HashSet<Point> = search
        .path()
        .map(|p| p.iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::with_capacity(board.len() + board.height() as usize);
    for y in 0..board.height() {
        for x in 0..board.width() {
            let p = Point::new(x, y);
            let ch = if p == board.start() {
                START
            } else if p == board.stop() {
                STOP
            } else if board.obstacle(p) {
                WALL
            } else if path.contains(&p) {
                PATH
            } else if frontier.contains(&p) {
                FRONTIER
            } else if visited.contains(&p) {
                VISITED
            } else {
                OPEN
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
