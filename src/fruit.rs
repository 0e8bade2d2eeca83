use rand::Rng;
use thiserror::Error;

use crate::config::{FRUIT_PLACEMENT_MAX_ATTEMPTS, GridSize};
use crate::grid::{self, Position};
use crate::snake::Snake;
use crate::wall::{self, Wall};

/// Fruit placement failures.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    #[error("no free cell available on the {width}x{height} board")]
    NoFreeCellAvailable { width: u16, height: u16 },
}

/// The single fruit currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Position,
}

impl Fruit {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places a fruit on a cell free of snake and walls.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        walls: &[Wall],
    ) -> Result<Self, PlacementError> {
        place(rng, bounds, snake, walls).map(Self::new)
    }
}

/// Picks a uniformly random cell that neither the snake nor a wall touches.
///
/// Random draws are tried first. After `FRUIT_PLACEMENT_MAX_ATTEMPTS` misses
/// the free cells are enumerated and one is drawn from them, so a crowded
/// board still resolves; only a board with no free cell at all fails.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    walls: &[Wall],
) -> Result<Position, PlacementError> {
    for _ in 0..FRUIT_PLACEMENT_MAX_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if is_free(candidate, snake, walls) {
            return Ok(candidate);
        }
    }

    let candidates: Vec<Position> = grid::cells(bounds)
        .filter(|position| is_free(*position, snake, walls))
        .collect();

    if candidates.is_empty() {
        return Err(PlacementError::NoFreeCellAvailable {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

/// Returns true when `position` is clear of the snake and every wall.
#[must_use]
pub fn is_free(position: Position, snake: &Snake, walls: &[Wall]) -> bool {
    !snake.occupies(position) && !wall::any_overlaps(walls, position)
}
