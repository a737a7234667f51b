//! Step-wise shortest-path search on 2D grids.
//!
//! This crate implements an incremental grid search that advances one
//! frontier wave per call instead of running to completion behind a single
//! blocking entry point. That makes every intermediate state — the frontier,
//! the visited set, tentative distances — observable between steps, which is
//! what a driver that renders the search as it unfolds needs.
//!
//! The algorithm is a frontier-wave variant of Dijkstra on the 8-connected
//! neighbourhood: orthogonal steps cost 1, diagonal steps cost √2, and
//! already-visited cells are re-relaxed whenever a later wave finds a
//! strictly shorter route to them.
//!
//! # Usage
//!
//! ```
//! use gridwave_core::{Board, Point};
//! use gridwave_search::{StepResult, StepSearch};
//!
//! let board = Board::new(3, 3, &[], Point::new(0, 0), Point::new(2, 2)).unwrap();
//! let mut search = StepSearch::new(&board);
//! loop {
//!     match search.advance() {
//!         StepResult::Running => continue, // render frontier/visited here
//!         StepResult::Succeeded(path) => {
//!             assert_eq!(path[0], board.stop());
//!             break;
//!         }
//!         StepResult::Exhausted => unreachable!("open 3x3 board"),
//!     }
//! }
//! ```

mod cost;
mod engine;
mod node;

pub use cost::{DIAG_COST, ORTHO_COST, edge_cost};
pub use engine::{StepResult, StepSearch};
