use crate::field::Field;
use std::{error::Error, fmt};

/// Facing direction of the ant, with a fixed numeric encoding: the menu
/// encoding plus the turn arithmetic (`+1` right, `-1` left, mod 4) both
/// depend on this exact order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    West = 1,
    South = 2,
    East = 3,
}

impl Direction {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::North),
            1 => Some(Direction::West),
            2 => Some(Direction::South),
            3 => Some(Direction::East),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// `(index + 1) mod 4`.
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// `(index - 1) mod 4`, with the non-negative modulo convention.
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::West => Direction::North,
            Direction::South => Direction::West,
            Direction::East => Direction::South,
        }
    }

    /// Displacement as (row delta, col delta). Rows grow downward, so
    /// North decreases the row.
    pub fn displacement(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::West => "west",
            Direction::South => "south",
            Direction::East => "east",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    InvalidState {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::InvalidState {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "ant position ({row}, {col}) is out of bounds for a {width}x{height} field"
            ),
        }
    }
}

impl Error for StepError {}

/// The single mobile agent. Holds only its own position and facing; the
/// driving loop owns the field and lends it to each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Ant {
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }

    /// One application of the update rule, in this exact order: scan the cell
    /// under the ant, turn (1 → right, 0 → left), flip the scanned cell, then
    /// move one cell in the new facing with both coordinates wrapping
    /// independently (toroidal).
    ///
    /// Fails with `InvalidState` before any mutation if the position does not
    /// index into `field`; under correct construction that cannot happen, as
    /// the wrap keeps the position in bounds after every move.
    pub fn step(&mut self, field: &mut Field) -> Result<(), StepError> {
        if !field.contains(self.row, self.col) {
            return Err(StepError::InvalidState {
                row: self.row,
                col: self.col,
                width: field.width(),
                height: field.height(),
            });
        }

        let value = field.get(self.row, self.col);
        self.direction = if value == 1 {
            self.direction.turn_right()
        } else {
            self.direction.turn_left()
        };
        field.set(self.row, self.col, 1 - value);

        let (dr, dc) = self.direction.displacement();
        let height = field.height() as isize;
        let width = field.width() as isize;
        self.row = (self.row as isize + dr).rem_euclid(height) as usize;
        self.col = (self.col as isize + dc).rem_euclid(width) as usize;
        Ok(())
    }
}
