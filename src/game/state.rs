use serde::{Deserialize, Serialize};

use super::board::Board;
use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step one cell in a direction, wrapping at the board edges
    pub fn stepped(&self, direction: Direction, board: &Board) -> Self {
        let (dx, dy) = direction.delta();
        board.wrap(self.x + dx, self.y + dy)
    }
}

/// The snake in the game.
///
/// The body is ordered head first and, once a tick has finished, holds
/// exactly `target_length` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    heading: Direction,
    pending_heading: Option<Direction>,
    last_removed_cell: Option<Cell>,
    target_length: usize,
    start: Cell,
}

impl Snake {
    pub const START_HEADING: Direction = Direction::Right;

    /// Create a one-cell snake at the board center, heading right
    pub fn new(board: &Board) -> Self {
        Self::at(board.center())
    }

    /// Create a one-cell snake at `start`; [`Snake::reset`] returns here
    pub fn at(start: Cell) -> Self {
        Self {
            body: vec![start],
            heading: Self::START_HEADING,
            pending_heading: None,
            last_removed_cell: None,
            target_length: 1,
            start,
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Used to set up positions directly; the target length is the body
    /// length and a reset still goes back to the board center.
    pub fn from_body(board: &Board, body: Vec<Cell>, heading: Direction) -> Self {
        assert!(!body.is_empty(), "snake body needs at least one cell");
        Self {
            target_length: body.len(),
            body,
            heading,
            pending_heading: None,
            last_removed_cell: None,
            start: board.center(),
        }
    }

    /// Buffer a turn for the next tick.
    ///
    /// A turn back into the neck is dropped. A later call before the next
    /// tick replaces an earlier one.
    pub fn set_pending_heading(&mut self, direction: Direction) {
        if self.heading.is_opposite(direction) {
            return;
        }
        self.pending_heading = Some(direction);
    }

    /// Promote the buffered turn, if any, to the current heading
    pub fn apply_pending_heading(&mut self) {
        if let Some(direction) = self.pending_heading.take() {
            self.heading = direction;
        }
    }

    /// Advance one cell in the current heading
    pub fn move_forward(&mut self, board: &Board) {
        let new_head = self.head_position().stepped(self.heading, board);
        self.body.insert(0, new_head);

        self.last_removed_cell = if self.body.len() > self.target_length {
            self.body.pop()
        } else {
            None
        };
    }

    /// Lengthen the snake by one.
    ///
    /// If the last move dropped a tail cell, it is put back, so the growth
    /// shows on the tick the food was eaten. Otherwise the next move keeps
    /// its tail.
    pub fn grow(&mut self) {
        self.target_length += 1;
        if let Some(tail) = self.last_removed_cell.take() {
            self.body.push(tail);
        }
    }

    pub fn head_position(&self) -> Cell {
        self.body[0]
    }

    /// True if the head shares a cell with any other segment
    pub fn collides_with_self(&self) -> bool {
        let head = self.head_position();
        self.body[1..].contains(&head)
    }

    pub fn reset(&mut self) {
        *self = Self::at(self.start);
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    /// Tail cell dropped by the most recent move; `None` when the snake grew
    pub fn last_removed_cell(&self) -> Option<Cell> {
        self.last_removed_cell
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; the body holds at least the head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}
