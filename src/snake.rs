use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical tile coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one tile towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body plus its facing and single-slot direction buffer.
///
/// The body is stored tail first, head last. `target_len` is the logical
/// length the body is trimmed back to after every move; it is decoupled from
/// the body size so that growth can happen before trimming.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    target_len: usize,
    facing: Direction,
    pending_facing: Direction,
}

impl Snake {
    /// Creates a one-tile snake at `start` facing `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);

        Self {
            body,
            target_len: 1,
            facing: direction,
            pending_facing: direction,
        }
    }

    /// Creates a snake from explicit body segments, ordered tail to head.
    ///
    /// The target length equals the number of segments.
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            target_len: segments.len(),
            body: VecDeque::from(segments),
            facing: direction,
            pending_facing: direction,
        }
    }

    /// Records `direction` for the next move unless it reverses the current
    /// facing. Later calls overwrite earlier ones until the next move.
    ///
    /// Returns whether the direction was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.facing, direction) {
            return false;
        }

        self.pending_facing = direction;
        true
    }

    /// Commits the pending direction and appends the new head.
    ///
    /// The tail is left in place; call [`Snake::trim`] afterwards.
    pub fn push_head(&mut self) -> Position {
        self.facing = self.pending_facing;
        let next_head = self.head().step(self.facing);
        self.body.push_back(next_head);
        next_head
    }

    /// Raises the target length by one tile.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Drops tail segments until the body matches the target length.
    pub fn trim(&mut self) {
        while self.body.len() > self.target_len {
            let _ = self.body.pop_front();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .take(self.body.len() - 1)
            .any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the logical length the body is trimmed to.
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Returns the direction of the last move.
    #[must_use]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Returns the direction the next move will take.
    #[must_use]
    pub fn pending_facing(&self) -> Direction {
        self.pending_facing
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.body.iter()
    }
}
