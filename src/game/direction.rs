use super::grid::{Cell, Grid};
use enum_map::Enum;

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction, wrapping
    /// around the edges of `grid`
    pub(crate) fn advance(self, cell: Cell, grid: Grid) -> Cell {
        let Cell { mut x, mut y } = cell;
        match self {
            Direction::Up => y = decrement_wrapping(y, grid.height),
            Direction::Down => y = increment_wrapping(y, grid.height),
            Direction::Left => x = decrement_wrapping(x, grid.width),
            Direction::Right => x = increment_wrapping(x, grid.width),
        }
        Cell { x, y }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

fn decrement_wrapping(x: u16, max: u16) -> u16 {
    x.checked_sub(1).unwrap_or_else(|| max.saturating_sub(1))
}

fn increment_wrapping(x: u16, max: u16) -> u16 {
    x.checked_add(1).filter(|&xx| xx < max).unwrap_or(0)
}
