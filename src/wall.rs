use std::ops::RangeInclusive;

use rand::Rng;

use crate::config::{GridSize, WALL_RESAMPLE_ONE_IN, WALL_SPEED, WALL_STEPS_PER_CELL};
use crate::grid::Position;

/// Oscillation heading of a movable wall.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum VerticalDirection {
    Up,
    Down,
}

/// One cell-sized obstacle.
///
/// The column is fixed. The vertical position is kept in sub-cell steps
/// (`WALL_STEPS_PER_CELL` per row) so a movable wall can glide between rows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Wall {
    column: i32,
    offset: i32,
    movable: bool,
    direction: VerticalDirection,
}

impl Wall {
    /// Creates a wall aligned to `row`.
    #[must_use]
    pub fn at_row(column: i32, row: i32, movable: bool, direction: VerticalDirection) -> Self {
        Self {
            column,
            offset: row * WALL_STEPS_PER_CELL,
            movable,
            direction,
        }
    }

    #[must_use]
    pub fn column(self) -> i32 {
        self.column
    }

    /// Top edge in sub-cell steps.
    #[must_use]
    pub fn offset(self) -> i32 {
        self.offset
    }

    #[must_use]
    pub fn is_movable(self) -> bool {
        self.movable
    }

    #[must_use]
    pub fn direction(self) -> VerticalDirection {
        self.direction
    }

    /// Rows the wall currently covers: one when aligned, two mid-glide.
    #[must_use]
    pub fn rows(self) -> RangeInclusive<i32> {
        let top = self.offset.div_euclid(WALL_STEPS_PER_CELL);
        let bottom = (self.offset + WALL_STEPS_PER_CELL - 1).div_euclid(WALL_STEPS_PER_CELL);
        top..=bottom
    }

    /// Returns true when the wall rectangle intersects the cell at `position`.
    #[must_use]
    pub fn overlaps(self, position: Position) -> bool {
        if position.x != self.column {
            return false;
        }

        let cell_top = position.y * WALL_STEPS_PER_CELL;
        let cell_bottom = cell_top + WALL_STEPS_PER_CELL;
        let wall_bottom = self.offset + WALL_STEPS_PER_CELL;
        self.offset < cell_bottom && cell_top < wall_bottom
    }

    /// Moves a movable wall one tick along its heading.
    ///
    /// The wall stops at the top or bottom row and turns around on the same
    /// tick it reaches the bound. Static walls are left untouched.
    pub fn advance(&mut self, bounds: GridSize) {
        if !self.movable {
            return;
        }

        let lowest = (i32::from(bounds.height) - 1) * WALL_STEPS_PER_CELL;
        match self.direction {
            VerticalDirection::Up => {
                self.offset = (self.offset - WALL_SPEED).max(0);
                if self.offset <= 0 {
                    self.direction = VerticalDirection::Down;
                }
            }
            VerticalDirection::Down => {
                self.offset = (self.offset + WALL_SPEED).min(lowest);
                if self.offset >= lowest {
                    self.direction = VerticalDirection::Up;
                }
            }
        }
    }
}

/// Builds a jagged band of walls, one per column.
///
/// The band starts on a random row heading up. At each column it jumps to a
/// fresh random row and heading with odds of one in `WALL_RESAMPLE_ONE_IN`,
/// otherwise it continues the previous column's row and heading.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, movable: bool) -> Vec<Wall> {
    let height = i32::from(bounds.height);
    let mut row = rng.gen_range(0..height);
    let mut direction = VerticalDirection::Up;

    (0..i32::from(bounds.width))
        .map(|column| {
            if rng.gen_ratio(1, WALL_RESAMPLE_ONE_IN) {
                row = rng.gen_range(0..height);
                direction = if rng.gen_bool(0.5) {
                    VerticalDirection::Up
                } else {
                    VerticalDirection::Down
                };
            }

            Wall::at_row(column, row, movable, direction)
        })
        .collect()
}

/// Advances every movable wall by one tick.
pub fn advance_all(walls: &mut [Wall], bounds: GridSize) {
    for wall in walls.iter_mut() {
        wall.advance(bounds);
    }
}

/// Returns true if any wall intersects `position`.
#[must_use]
pub fn any_overlaps(walls: &[Wall], position: Position) -> bool {
    walls.iter().any(|wall| wall.overlaps(position))
}
