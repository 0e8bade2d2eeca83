use std::collections::VecDeque;

use crate::config::GridSize;
use crate::grid::Position;
use crate::input::{Direction, direction_change_is_valid};

/// Snake body plus its current and pending heading.
///
/// The body is ordered head first. Every tick pushes exactly one new head;
/// the caller decides whether the tail is dropped, so growth is driven from
/// outside by whatever the head landed on.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a snake of `length` segments stacked on `start`.
    ///
    /// The stacked segments unfold behind the head over the first moves.
    #[must_use]
    pub fn new(start: Position, length: usize, direction: Direction) -> Self {
        Self {
            body: std::iter::repeat(start).take(length.max(1)).collect(),
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Records a requested turn for the next tick.
    ///
    /// A request that reverses the current direction is ignored. Among
    /// several accepted requests before a tick, the last one wins.
    pub fn queue_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.pending_direction = direction;
        }
    }

    /// Adopts the pending direction unless it reverses the current one.
    pub fn resolve_direction(&mut self) {
        if direction_change_is_valid(self.direction, self.pending_direction) {
            self.direction = self.pending_direction;
        }
    }

    /// Moves the head one cell in the current direction, wrapping at edges.
    ///
    /// Returns the new head. The tail is left in place.
    pub fn push_head(&mut self, bounds: GridSize) -> Position {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next_head = self.head().stepped(self.direction).wrapped(bounds);
        self.body.push_front(next_head);
        next_head
    }

    /// Removes the last segment, keeping the length unchanged across a move.
    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
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

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::grid::Position;
    use crate::input::Direction;

    use super::Snake;

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    fn step(snake: &mut Snake) {
        snake.resolve_direction();
        snake.push_head(BOUNDS);
        snake.drop_tail();
    }

    #[test]
    fn new_snake_stacks_segments_on_start() {
        let snake = Snake::new(Position::new(0, 0), 4, Direction::Right);

        assert_eq!(snake.len(), 4);
        assert!(snake.segments().all(|segment| *segment == Position::new(0, 0)));
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(Position::new(5, 5), 1, Direction::Right);

        step(&mut snake);

        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn keeping_the_tail_grows_by_one() {
        let mut snake = Snake::new(Position::new(5, 5), 3, Direction::Right);

        snake.resolve_direction();
        snake.push_head(BOUNDS);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(6, 5));
    }

    #[test]
    fn stacked_segments_unfold_behind_head() {
        let mut snake = Snake::new(Position::new(0, 0), 4, Direction::Right);

        for _ in 0..4 {
            step(&mut snake);
        }

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position::new(4, 0),
                Position::new(3, 0),
                Position::new(2, 0),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn head_wraps_across_left_edge() {
        let mut snake = Snake::new(Position::new(0, 7), 1, Direction::Left);

        step(&mut snake);

        assert_eq!(snake.head(), Position::new(19, 7));
    }

    #[test]
    fn queue_rejects_reverse_of_current_direction() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::new(Position::new(5, 5), 4, direction);

            snake.queue_direction(direction.opposite());
            snake.resolve_direction();

            assert_eq!(snake.direction(), direction);
            assert_eq!(snake.pending_direction(), direction);
        }
    }

    #[test]
    fn last_accepted_request_wins_within_a_tick() {
        let mut snake = Snake::new(Position::new(5, 5), 4, Direction::Right);

        snake.queue_direction(Direction::Up);
        snake.queue_direction(Direction::Left);
        snake.queue_direction(Direction::Down);
        step(&mut snake);

        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.head(), Position::new(5, 6));
    }

    #[test]
    fn second_turn_is_checked_against_new_direction() {
        let mut snake = Snake::new(Position::new(5, 5), 4, Direction::Right);

        snake.queue_direction(Direction::Up);
        step(&mut snake);
        assert_eq!(snake.direction(), Direction::Up);

        snake.queue_direction(Direction::Down);
        step(&mut snake);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Position::new(5, 3));
    }

    #[test]
    fn head_overlap_detects_self_intersection() {
        let snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(2, 2),
            ],
            Direction::Left,
        );

        assert!(snake.head_overlaps_body());
    }

    #[test]
    fn drop_tail_never_empties_the_body() {
        let mut snake = Snake::new(Position::new(1, 1), 1, Direction::Up);

        snake.drop_tail();

        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }
}
