//! The [`StepSearch`] engine — one frontier wave per [`advance`] call.
//!
//! [`advance`]: StepSearch::advance

use gridwave_core::{Board, Point};

use crate::cost::edge_cost;
use crate::node::{NO_PARENT, Node, UNVISITED};

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Outcome of a single [`StepSearch::advance`] call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepResult {
    /// The frontier is still expanding; call [`StepSearch::advance`] again.
    Running,
    /// The stop cell was reached. The path is ordered stop → start.
    Succeeded(Vec<Point>),
    /// The frontier drained without reaching the stop cell; no path exists.
    Exhausted,
}

/// Internal engine state. Terminal variants cache their result so repeated
/// `advance` calls can return it without re-running anything.
enum Status {
    Running,
    Succeeded(Vec<Point>),
    Exhausted,
}

// ---------------------------------------------------------------------------
// StepSearch
// ---------------------------------------------------------------------------

/// Step-wise shortest-path search over a [`Board`].
///
/// Each [`advance`](Self::advance) call expands exactly one frontier wave:
/// the live frontier is swapped out, every member's 8-neighbourhood is
/// relaxed, and newly improved cells form the next frontier. The stop cell
/// entering the new frontier ends the search with a reconstructed path; an
/// empty new frontier ends it with [`StepResult::Exhausted`].
///
/// The engine borrows its `Board` for its whole lifetime, so the snapshot
/// cannot change under a running search. Editing the grid means building a
/// new `Board` and a new engine.
///
/// Frontier and visited cells are observable between steps (for rendering)
/// via [`frontier`](Self::frontier), [`visited`](Self::visited) and
/// [`distance_at`](Self::distance_at); these never affect the search itself.
pub struct StepSearch<'a> {
    board: &'a Board,
    nodes: Vec<Node>,
    /// Live frontier as flat indices; replaced wholesale each round.
    frontier: Vec<usize>,
    /// Spare buffer the frontier is swapped against, to reuse capacity.
    scratch: Vec<usize>,
    status: Status,
    rounds: u32,
    start_idx: usize,
    stop_idx: usize,
}

impl<'a> StepSearch<'a> {
    /// Create an engine bound to `board`, with the frontier seeded at the
    /// board's start cell.
    pub fn new(board: &'a Board) -> Self {
        // Board construction guarantees both endpoints are in bounds.
        let start_idx = board.idx(board.start()).expect("start cell in bounds");
        let stop_idx = board.idx(board.stop()).expect("stop cell in bounds");

        let mut nodes = vec![Node::default(); board.len()];
        nodes[start_idx].g = 0.0;
        nodes[start_idx].enqueued = true;

        Self {
            board,
            nodes,
            frontier: vec![start_idx],
            scratch: Vec::new(),
            status: Status::Running,
            rounds: 0,
            start_idx,
            stop_idx,
        }
    }

    /// Expand one frontier wave.
    ///
    /// Calling this after a terminal result is an idempotent no-op: the same
    /// terminal [`StepResult`] is returned and no search state is mutated.
    pub fn advance(&mut self) -> StepResult {
        match &self.status {
            Status::Succeeded(path) => {
                log::trace!("advance() after success is a no-op");
                return StepResult::Succeeded(path.clone());
            }
            Status::Exhausted => {
                log::trace!("advance() after exhaustion is a no-op");
                return StepResult::Exhausted;
            }
            Status::Running => {}
        }

        // Swap the live frontier out; the next wave accumulates in its place.
        let current = std::mem::replace(&mut self.frontier, std::mem::take(&mut self.scratch));

        // `enqueued` means "member of the accumulating frontier", so the
        // outgoing wave's flags are stale now. Clearing them lets a cell from
        // this wave re-enter the next one if a neighbour relaxes it.
        for &ci in &current {
            self.nodes[ci].enqueued = false;
        }

        for &ci in &current {
            self.explore_around(ci);
        }

        self.rounds += 1;
        self.scratch = current;
        self.scratch.clear();

        if self.nodes[self.stop_idx].enqueued {
            let path = self.reconstruct_path();
            log::debug!(
                "reached {} after {} rounds, cost {:.3}",
                self.board.stop(),
                self.rounds,
                self.nodes[self.stop_idx].g,
            );
            self.status = Status::Succeeded(path.clone());
            return StepResult::Succeeded(path);
        }

        if self.frontier.is_empty() {
            log::debug!(
                "frontier drained after {} rounds without reaching {}",
                self.rounds,
                self.board.stop(),
            );
            self.status = Status::Exhausted;
            return StepResult::Exhausted;
        }

        StepResult::Running
    }

    /// Keep calling [`advance`](Self::advance) until the search terminates.
    ///
    /// Termination is bounded: every round either improves some cell's
    /// tentative distance or drains the frontier.
    pub fn run_to_completion(&mut self) -> StepResult {
        loop {
            match self.advance() {
                StepResult::Running => {}
                terminal => return terminal,
            }
        }
    }

    /// Relax the 8-neighbourhood of the cell at flat index `ci`.
    fn explore_around(&mut self, ci: usize) {
        let cp = self.board.point(ci);
        let cg = self.nodes[ci].g;

        for np in cp.neighbors_8() {
            let Some(ni) = self.board.idx(np) else {
                continue;
            };
            if self.board.obstacle(np) {
                self.nodes[ni].rejected = true;
                continue;
            }

            let tentative = cg + edge_cost(cp, np);
            let n = &mut self.nodes[ni];
            // Covers first visits too: an unvisited `g` is the infinite
            // sentinel, so any finite candidate wins.
            if tentative < n.g {
                n.g = tentative;
                n.parent = ci;
                if !n.enqueued {
                    n.enqueued = true;
                    self.frontier.push(ni);
                }
            }
        }
    }

    /// Walk predecessor links from the stop cell back to the start.
    ///
    /// Panics if the chain does not terminate at the start cell — a broken
    /// chain means relaxation corrupted the arena, and a malformed path must
    /// never be returned as if it were valid.
    fn reconstruct_path(&self) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = self.stop_idx;
        loop {
            path.push(self.board.point(ci));
            if ci == self.start_idx {
                return path;
            }
            let parent = self.nodes[ci].parent;
            if parent == NO_PARENT || path.len() > self.nodes.len() {
                panic!(
                    "predecessor chain from {} does not terminate at the start cell {}",
                    self.board.stop(),
                    self.board.start(),
                );
            }
            ci = parent;
        }
    }

    // -----------------------------------------------------------------------
    // Observation interface (read-only, for rendering)
    // -----------------------------------------------------------------------

    /// Whether the search can still make progress.
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.status, Status::Running)
    }

    /// Number of completed [`advance`](Self::advance) rounds.
    #[inline]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The cells in the current frontier, in insertion order.
    pub fn frontier(&self) -> impl Iterator<Item = Point> + '_ {
        self.frontier.iter().map(|&i| self.board.point(i))
    }

    /// Every cell with a finite tentative distance, in row-major order.
    /// Includes the start cell; never includes obstacles.
    pub fn visited(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.g != UNVISITED)
            .map(|(i, _)| self.board.point(i))
    }

    /// The tentative distance of `p`, or `None` if `p` is out of bounds,
    /// unvisited, or a dismissed obstacle.
    pub fn distance_at(&self, p: Point) -> Option<f64> {
        let i = self.board.idx(p)?;
        let g = self.nodes[i].g;
        (g != UNVISITED).then_some(g)
    }

    /// The reconstructed path (stop → start) once the search has succeeded.
    pub fn path(&self) -> Option<&[Point]> {
        match &self.status {
            Status::Succeeded(path) => Some(path),
            _ => None,
        }
    }
}



#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_result_round_trip() {
        let r = StepResult::Succeeded(vec![Point::new(2, 2), Point::new(1, 1), Point::new(0, 0)]);
        let json = serde_json::to_string(&r).unwrap();
        let back: StepResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);

        let json = serde_json::to_string(&StepResult::Exhausted).unwrap();
        let back: StepResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StepResult::Exhausted);
    }
}
