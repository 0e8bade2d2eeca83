use std::time::Duration;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::{self, EndReason};
use crate::config::{GridSize, INITIAL_SNAKE_LENGTH, INITIAL_SPEED};
use crate::difficulty::{Difficulty, WallLayout};
use crate::fruit::{Fruit, PlacementError};
use crate::grid::Position;
use crate::input::Direction;
use crate::snake::Snake;
use crate::wall::{self, Wall};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// A replay never reuses an instance; the controller builds a new one.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub walls: Vec<Wall>,
    pub fruit: Fruit,
    pub score: u32,
    /// Ticks per second.
    pub speed: u32,
    pub difficulty: Difficulty,
    pub tick_count: u64,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game seeded from system entropy.
    pub fn new(difficulty: Difficulty, bounds: GridSize) -> Result<Self, PlacementError> {
        Self::with_rng(difficulty, bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(
        difficulty: Difficulty,
        bounds: GridSize,
        seed: u64,
    ) -> Result<Self, PlacementError> {
        Self::with_rng(difficulty, bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        difficulty: Difficulty,
        bounds: GridSize,
        mut rng: StdRng,
    ) -> Result<Self, PlacementError> {
        let walls = match difficulty.wall_layout() {
            WallLayout::Open => Vec::new(),
            WallLayout::Fixed => wall::generate(&mut rng, bounds, false),
            WallLayout::Moving => wall::generate(&mut rng, bounds, true),
        };
        let snake = Snake::new(Position::new(0, 0), INITIAL_SNAKE_LENGTH, Direction::Right);
        let fruit = Fruit::spawn(&mut rng, bounds, &snake, &walls)?;

        info!(
            "new {} game: {} walls, fruit at ({}, {})",
            difficulty.label(),
            walls.len(),
            fruit.position.x,
            fruit.position.y
        );

        Ok(Self {
            snake,
            walls,
            fruit,
            score: 0,
            speed: INITIAL_SPEED,
            difficulty,
            tick_count: 0,
            status: GameStatus::Playing,
            end_reason: None,
            bounds,
            rng,
        })
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Order: resolve the pending turn, move the snake (eating and regrowing
    /// fruit), move the walls, then check for collisions.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;
        self.snake.resolve_direction();
        let head = self.snake.push_head(self.bounds);

        if head == self.fruit.position {
            self.eat_fruit();
        } else {
            self.snake.drop_tail();
        }

        wall::advance_all(&mut self.walls, self.bounds);

        if let Some(reason) = collision::detect(&self.snake, &self.walls) {
            self.finish(reason);
        }
    }

    /// Queues a turn for the next tick.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.snake.queue_direction(direction);
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Time between two ticks at the current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    fn eat_fruit(&mut self) {
        self.score += 1;
        let speed = (self.speed + 1).min(self.difficulty.max_speed());
        if speed != self.speed {
            debug!("speed {} -> {speed}", self.speed);
        }
        self.speed = speed;

        match Fruit::spawn(&mut self.rng, self.bounds, &self.snake, &self.walls) {
            Ok(fruit) => {
                debug!(
                    "fruit eaten, score {}, next fruit at ({}, {})",
                    self.score, fruit.position.x, fruit.position.y
                );
                self.fruit = fruit;
            }
            Err(error) => {
                warn!("{error}");
                self.finish(EndReason::BoardFull);
            }
        }
    }

    fn finish(&mut self, reason: EndReason) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
        info!(
            "game over after {} ticks: {}, score {}, length {}",
            self.tick_count,
            reason.describe(),
            self.score,
            self.snake.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::collision::EndReason;
    use crate::config::{GRID_SIZE, GridSize};
    use crate::difficulty::Difficulty;
    use crate::fruit::Fruit;
    use crate::grid::Position;
    use crate::input::Direction;
    use crate::snake::Snake;
    use crate::wall::{VerticalDirection, Wall};

    use super::{GameState, GameStatus};

    fn easy_state(seed: u64) -> GameState {
        GameState::new_with_seed(Difficulty::Easy, GRID_SIZE, seed).expect("empty board")
    }

    #[test]
    fn new_game_matches_difficulty() {
        let easy = easy_state(1);
        let medium = GameState::new_with_seed(Difficulty::Medium, GRID_SIZE, 1).expect("board");
        let hard = GameState::new_with_seed(Difficulty::Hard, GRID_SIZE, 1).expect("board");

        assert!(easy.walls.is_empty());
        assert_eq!(medium.walls.len(), 20);
        assert!(medium.walls.iter().all(|wall| !wall.is_movable()));
        assert!(hard.walls.iter().all(|wall| wall.is_movable()));

        for state in [&easy, &medium, &hard] {
            assert_eq!(state.speed, 5);
            assert_eq!(state.score, 0);
            assert_eq!(state.snake.len(), 4);
            assert_eq!(state.snake.head(), Position::new(0, 0));
            assert_eq!(state.snake.direction(), Direction::Right);
            assert!(!state.snake.occupies(state.fruit.position));
            assert!(state.walls.iter().all(|wall| !wall.overlaps(state.fruit.position)));
        }
    }

    #[test]
    fn snake_grows_after_eating_fruit() {
        let mut state = easy_state(2);
        state.snake = Snake::new(Position::new(1, 1), 2, Direction::Right);
        state.fruit = Fruit::new(Position::new(3, 1));

        state.tick();
        assert_eq!(state.snake.len(), 2);

        state.tick();
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 1);
        assert_eq!(state.speed, 6);
    }

    #[test]
    fn new_fruit_is_placed_on_a_free_cell_the_same_tick() {
        let mut state = easy_state(3);
        state.snake = Snake::new(Position::new(5, 5), 4, Direction::Right);
        state.fruit = Fruit::new(Position::new(6, 5));

        state.tick();

        assert_ne!(state.fruit.position, Position::new(6, 5));
        assert!(!state.snake.occupies(state.fruit.position));
    }

    #[test]
    fn speed_is_capped_per_difficulty() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut state = GameState::new_with_seed(difficulty, GRID_SIZE, 4).expect("board");
            state.walls.clear();

            for _ in 0..60 {
                state.snake = Snake::new(Position::new(5, 5), 1, Direction::Right);
                state.fruit = Fruit::new(Position::new(6, 5));
                state.tick();
                assert!(state.speed <= difficulty.max_speed());
            }

            assert_eq!(state.score, 60);

            assert_eq!(state.speed, difficulty.max_speed());
        }
    }

    #[test]
    fn colliding_with_self_sets_game_over() {
        let mut state = easy_state(5);
        state.snake = Snake::from_segments(
            vec![
                Position::new(2, 2),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
                Position::new(3, 1),
            ],
            Direction::Down,
        );
        state.fruit = Fruit::new(Position::new(10, 10));

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
    }

    #[test]
    fn colliding_with_wall_sets_game_over() {
        let mut state = easy_state(6);
        state.snake = Snake::new(Position::new(4, 4), 1, Direction::Right);
        state.walls = vec![Wall::at_row(5, 4, false, VerticalDirection::Up)];
        state.fruit = Fruit::new(Position::new(10, 10));

        state.tick();

        assert!(state.is_over());
        assert_eq!(state.end_reason, Some(EndReason::WallCollision));
    }

    #[test]
    fn moving_wall_catches_snake_between_rows() {
        let mut state = easy_state(7);
        state.snake = Snake::new(Position::new(8, 6), 1, Direction::Up);
        state.walls = vec![Wall::at_row(8, 3, true, VerticalDirection::Down)];
        state.fruit = Fruit::new(Position::new(10, 10));

        state.tick();
        assert!(!state.is_over());

        state.tick();
        assert!(state.is_over());
    }

    #[test]
    fn game_over_state_ignores_ticks_and_turns() {
        let mut state = easy_state(8);
        state.snake = Snake::new(Position::new(4, 4), 1, Direction::Right);
        state.walls = vec![Wall::at_row(5, 4, false, VerticalDirection::Up)];
        state.tick();
        let head = state.snake.head();

        state.queue_direction(Direction::Up);
        state.tick();

        assert_eq!(state.snake.head(), head);
        assert_eq!(state.snake.pending_direction(), Direction::Right);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        let bounds = GridSize {
            width: 3,
            height: 1,
        };
        let mut state =
            GameState::new_with_seed(Difficulty::Easy, bounds, 9).expect("board has room");
        state.snake = Snake::from_segments(
            vec![Position::new(1, 0), Position::new(0, 0)],
            Direction::Right,
        );
        state.fruit = Fruit::new(Position::new(2, 0));

        state.tick();

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.end_reason, Some(EndReason::BoardFull));
    }

    #[test]
    fn tick_interval_tracks_speed() {
        let mut state = easy_state(10);
        assert_eq!(state.tick_interval().as_millis(), 200);

        state.speed = 20;
        assert_eq!(state.tick_interval().as_millis(), 50);
    }
}
