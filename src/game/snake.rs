use super::direction::Direction;
use super::grid::{Cell, Grid};
use crate::consts;
use std::collections::VecDeque;

/// Snake state.
///
/// The snake always has a head, so its length can never drop below one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the cells behind the head, nearest to the head first
    pub(super) body: VecDeque<Cell>,

    /// The length the snake grows toward; the tail is dropped whenever the
    /// snake is longer than this
    pub(super) target_len: usize,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// The tail cell dropped by the most recent move, if any
    pub(super) vacated: Option<Cell>,
}

impl Snake {
    /// Create a one-cell snake at `head` facing in `direction`
    pub(super) fn new(head: Cell, direction: Direction) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            target_len: consts::INITIAL_SNAKE_LENGTH,
            direction,
            vacated: None,
        }
    }

    pub(super) fn head(&self) -> Cell {
        self.head
    }

    /// Iterate over all of the snake's cells, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(super) fn occupies(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Change the snake's direction to `direction` unless that would send it
    /// straight back into its neck.  Returns `false` if the turn was refused.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the head one cell forwards within `grid`, keeping the old head
    /// as the first body cell.  The tail is left in place; call
    /// [`Snake::trim()`] once any growth has been applied.
    pub(super) fn advance(&mut self, grid: Grid) -> Cell {
        let new_head = self.direction.advance(self.head, grid);
        self.body.push_front(self.head);
        self.head = new_head;
        new_head
    }

    /// Extend the snake's target length in response to eating food
    pub(super) fn grow(&mut self) {
        self.target_len += consts::SNAKE_GROWTH;
    }

    /// Drop tail cells until the snake is no longer than its target length
    pub(super) fn trim(&mut self) {
        self.vacated = None;
        while self.len() > self.target_len {
            match self.body.pop_back() {
                Some(tail) => self.vacated = Some(tail),
                None => break,
            }
        }
    }

    /// Has the head run into the rest of the snake?
    pub(super) fn collided(&self) -> bool {
        self.body.contains(&self.head)
    }
}
