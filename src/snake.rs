use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::Direction;

/// Per-tick displacement of the snake head.
///
/// Exactly one axis is non-zero while the snake is moving; both are zero
/// only before the first move of a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    /// Zero velocity, the pre-first-move state.
    pub const STILL: Velocity = Velocity { dx: 0, dy: 0 };

    /// Rightward unit velocity, the direction every game starts in.
    pub const RIGHT: Velocity = Velocity { dx: 1, dy: 0 };

    /// Returns true when both components are zero.
    #[must_use]
    pub fn is_still(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Velocity { dx: 0, dy: -1 },
            Direction::Down => Velocity { dx: 0, dy: 1 },
            Direction::Left => Velocity { dx: -1, dy: 0 },
            Direction::Right => Velocity { dx: 1, dy: 0 },
        }
    }
}

/// Mutable snake state: ordered body cells (head first) plus velocity.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    velocity: Velocity,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided velocity.
    #[must_use]
    pub fn new(start: Cell, velocity: Velocity) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, velocity }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, velocity: Velocity) -> Self {
        Self {
            body: VecDeque::from(segments),
            velocity,
        }
    }

    /// Requests a direction change, applied immediately when legal.
    ///
    /// A request is accepted only when the current velocity is zero along
    /// the requested axis, which rules out reversing into oneself (and
    /// redundant same-direction requests). Rejected requests are a silent
    /// no-op. Requests between ticks overwrite each other; there is no
    /// queue.
    pub fn steer(&mut self, direction: Direction) {
        let requested = Velocity::from(direction);
        let legal = (requested.dx != 0 && self.velocity.dx == 0)
            || (requested.dy != 0 && self.velocity.dy == 0);
        if legal {
            self.velocity = requested;
        }
    }

    /// Returns the cell the head would occupy after one tick.
    #[must_use]
    pub fn candidate_head(&self) -> Cell {
        let head = self.head();
        Cell {
            x: head.x + self.velocity.dx,
            y: head.y + self.velocity.dy,
        }
    }

    /// Commits a move: the head advances to `head`, and unless `grow` is
    /// set the tail cell is dropped.
    pub fn advance_to(&mut self, head: Cell, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
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

    /// Returns the current velocity.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
