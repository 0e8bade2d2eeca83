use crate::snake::Snake;
use crate::wall::{self, Wall};

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    SelfCollision,
    WallCollision,
    /// No free cell was left for the next fruit.
    BoardFull,
}

impl EndReason {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::SelfCollision => "hit yourself",
            Self::WallCollision => "hit a wall",
            Self::BoardFull => "filled the board",
        }
    }
}

/// Classifies the board after a move.
///
/// Both rules are evaluated; self-collision is reported when both hold.
#[must_use]
pub fn detect(snake: &Snake, walls: &[Wall]) -> Option<EndReason> {
    let hit_self = snake.head_overlaps_body();
    let hit_wall = hits_wall(snake, walls);

    if hit_self {
        Some(EndReason::SelfCollision)
    } else if hit_wall {
        Some(EndReason::WallCollision)
    } else {
        None
    }
}

/// Boolean form of [`detect`].
#[must_use]
pub fn is_over(snake: &Snake, walls: &[Wall]) -> bool {
    detect(snake, walls).is_some()
}

/// Returns true when any segment, head included, intersects any wall.
#[must_use]
pub fn hits_wall(snake: &Snake, walls: &[Wall]) -> bool {
    snake
        .segments()
        .any(|segment| wall::any_overlaps(walls, *segment))
}

#[cfg(test)]
mod tests {
    use crate::grid::Position;
    use crate::input::Direction;
    use crate::snake::Snake;
    use crate::wall::{VerticalDirection, Wall};

    use super::{EndReason, detect, hits_wall, is_over};

    fn coiled_snake() -> Snake {
        Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
                Position::new(2, 2),
            ],
            Direction::Up,
        )
    }

    fn straight_snake() -> Snake {
        Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
                Position::new(2, 5),
            ],
            Direction::Right,
        )
    }

    #[test]
    fn head_on_body_is_self_collision() {
        assert_eq!(detect(&coiled_snake(), &[]), Some(EndReason::SelfCollision));
        assert!(is_over(&coiled_snake(), &[]));
    }

    #[test]
    fn clear_snake_is_not_over() {
        let walls = [Wall::at_row(5, 9, false, VerticalDirection::Up)];

        assert_eq!(detect(&straight_snake(), &walls), None);
        assert!(!is_over(&straight_snake(), &walls));
    }

    #[test]
    fn wall_on_head_ends_game() {
        let walls = [Wall::at_row(5, 5, false, VerticalDirection::Up)];

        assert_eq!(
            detect(&straight_snake(), &walls),
            Some(EndReason::WallCollision)
        );
    }

    #[test]
    fn wall_on_tail_ends_game() {
        let walls = [Wall::at_row(2, 5, true, VerticalDirection::Down)];

        assert!(hits_wall(&straight_snake(), &walls));
        assert!(is_over(&straight_snake(), &walls));
    }

    #[test]
    fn self_collision_reported_before_wall() {
        let walls = [Wall::at_row(2, 2, false, VerticalDirection::Up)];

        assert_eq!(detect(&coiled_snake(), &walls), Some(EndReason::SelfCollision));
        assert!(hits_wall(&coiled_snake(), &walls));
    }
}
