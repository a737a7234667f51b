//! The [`Board`] type — an immutable snapshot of the caller's grid.
//!
//! A `Board` freezes the search-relevant topology (dimensions, obstacle
//! mask, start/stop cells) at construction time. Search engines borrow it;
//! any topology change means building a new `Board` and a new engine.

use std::fmt;

use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Which endpoint cell a [`BoardError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    Stop,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Stop => write!(f, "stop"),
        }
    }
}

/// Errors that can occur when building a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// One of the dimensions is zero or negative.
    EmptyBoard { width: i32, height: i32 },
    /// The start or stop cell lies outside the board.
    OutOfBounds { role: Role, pos: Point },
    /// Start and stop name the same cell.
    StartIsStop(Point),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard { width, height } => {
                write!(f, "board dimensions must be positive, got {width}x{height}")
            }
            Self::OutOfBounds { role, pos } => {
                write!(f, "{role} cell {pos} is outside the board")
            }
            Self::StartIsStop(pos) => {
                write!(f, "start and stop are both {pos}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// An immutable grid snapshot: bounds, obstacle mask and start/stop cells.
///
/// Obstacles are stored as a flat row-major mask indexed by [`Board::idx`].
/// Exactly one start and one stop cell exist by construction, and neither is
/// ever an obstacle: if the obstacle list names one of them, that entry is
/// ignored (start/stop take precedence, as in the interactive editor this
/// snapshot is built from).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    bounds: Range,
    width: usize,
    blocked: Vec<bool>,
    start: Point,
    stop: Point,
}

impl Board {
    /// Build a snapshot from dimensions, obstacle positions and endpoints.
    ///
    /// Out-of-bounds obstacle positions are silently clipped. Start/stop
    /// constraints are validated and reported as [`BoardError`].
    pub fn new(
        width: i32,
        height: i32,
        obstacles: &[Point],
        start: Point,
        stop: Point,
    ) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        if !bounds.contains(start) {
            return Err(BoardError::OutOfBounds {
                role: Role::Start,
                pos: start,
            });
        }
        if !bounds.contains(stop) {
            return Err(BoardError::OutOfBounds {
                role: Role::Stop,
                pos: stop,
            });
        }
        if start == stop {
            return Err(BoardError::StartIsStop(start));
        }

        let w = width as usize;
        let mut blocked = vec![false; bounds.len()];
        for &p in obstacles {
            if !bounds.contains(p) || p == start || p == stop {
                continue;
            }
            blocked[(p.y as usize) * w + (p.x as usize)] = true;
        }

        Ok(Self {
            bounds,
            width: w,
            blocked,
            start,
            stop,
        })
    }

    /// The bounding range of the board.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether the board has no cells. Never true for a built board.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The stop cell.
    #[inline]
    pub fn stop(&self) -> Point {
        self.stop
    }

    /// Whether `p` is an in-bounds obstacle cell.
    #[inline]
    pub fn obstacle(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.blocked[i])
    }

    /// Whether `p` is in bounds and not an obstacle.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| !self.blocked[i])
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.bounds.min.x;
        let y = (idx / self.width) as i32 + self.bounds.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_query() {
        let walls = [Point::new(1, 1), Point::new(2, 0)];
        let b = Board::new(3, 3, &walls, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(b.width(), 3);
        assert_eq!(b.height(), 3);
        assert_eq!(b.len(), 9);
        assert!(b.obstacle(Point::new(1, 1)));
        assert!(b.obstacle(Point::new(2, 0)));
        assert!(b.passable(Point::new(0, 1)));
        assert!(b.passable(b.start()));
        assert!(b.passable(b.stop()));
    }

    #[test]
    fn rejects_empty_board() {
        let err = Board::new(0, 3, &[], Point::ZERO, Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            BoardError::EmptyBoard {
                width: 0,
                height: 3
            }
        );
        assert!(Board::new(3, -1, &[], Point::ZERO, Point::new(1, 1)).is_err());
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let err = Board::new(3, 3, &[], Point::new(3, 0), Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            BoardError::OutOfBounds {
                role: Role::Start,
                pos: Point::new(3, 0)
            }
        );
        let err = Board::new(3, 3, &[], Point::ZERO, Point::new(0, -1)).unwrap_err();
        assert_eq!(
            err,
            BoardError::OutOfBounds {
                role: Role::Stop,
                pos: Point::new(0, -1)
            }
        );
    }

    #[test]
    fn rejects_coincident_endpoints() {
        let err = Board::new(3, 3, &[], Point::new(1, 1), Point::new(1, 1)).unwrap_err();
        assert_eq!(err, BoardError::StartIsStop(Point::new(1, 1)));
    }

    #[test]
    fn endpoints_shadow_obstacles() {
        // Listing the start or stop cell as an obstacle is ignored.
        let walls = [Point::new(0, 0), Point::new(2, 2)];
        let b = Board::new(3, 3, &walls, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert!(b.passable(Point::new(0, 0)));
        assert!(b.passable(Point::new(2, 2)));
        assert!(!b.obstacle(Point::new(0, 0)));
    }

    #[test]
    fn out_of_bounds_obstacles_are_clipped() {
        let walls = [Point::new(-1, 0), Point::new(5, 5), Point::new(1, 0)];
        let b = Board::new(3, 3, &walls, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert!(b.obstacle(Point::new(1, 0)));
        assert!(!b.obstacle(Point::new(-1, 0)));
        assert!(!b.passable(Point::new(-1, 0)));
    }

    #[test]
    fn idx_point_round_trip() {
        let b = Board::new(4, 3, &[], Point::ZERO, Point::new(3, 2)).unwrap();
        for p in b.bounds() {
            let i = b.idx(p).unwrap();
            assert_eq!(b.point(i), p);
        }
        assert_eq!(b.idx(Point::new(4, 0)), None);
        assert_eq!(b.idx(Point::new(0, 3)), None);
    }

    #[test]
    fn error_display() {
        let err = Board::new(3, 3, &[], Point::new(1, 1), Point::new(1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "start and stop are both (1, 1)");
    }
}
