use std::time::{Duration, Instant};

use log::info;

use crate::config::{GAME_OVER_FREEZE, GridSize, MAX_IDLE_POLL};
use crate::difficulty::Difficulty;
use crate::fruit::PlacementError;
use crate::game::GameState;
use crate::input::GameInput;

/// Top-level lifecycle of the program.
#[derive(Debug)]
pub enum Phase {
    /// Waiting for E, M or H.
    SelectingDifficulty,
    /// A game is running; the next tick fires at `next_tick_at`.
    Playing {
        game: GameState,
        next_tick_at: Instant,
    },
    /// The final board is frozen, then the Y/N prompt is shown.
    GameOver { game: GameState, ended_at: Instant },
    Terminated,
}

/// Drives phases, tick pacing and replays.
///
/// All timing is passed in as `now` so the whole lifecycle can be stepped
/// deterministically.
#[derive(Debug)]
pub struct App {
    phase: Phase,
    bounds: GridSize,
    seed: Option<u64>,
    games_started: u64,
}

impl App {
    /// Creates a controller sitting at the difficulty prompt.
    ///
    /// With a seed, game `n` of the session is seeded with `seed + n`.
    #[must_use]
    pub fn new(bounds: GridSize, seed: Option<u64>) -> Self {
        Self {
            phase: Phase::SelectingDifficulty,
            bounds,
            seed,
            games_started: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated)
    }

    /// Returns the game on screen, if any.
    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        match &self.phase {
            Phase::Playing { game, .. } | Phase::GameOver { game, .. } => Some(game),
            Phase::SelectingDifficulty | Phase::Terminated => None,
        }
    }

    /// Returns true once the game-over freeze has elapsed and Y/N is accepted.
    #[must_use]
    pub fn awaiting_replay(&self, now: Instant) -> bool {
        self.replay_difficulty(now).is_some()
    }

    /// Applies one input event.
    ///
    /// Inputs that mean nothing in the current phase are dropped.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Result<(), PlacementError> {
        match input {
            GameInput::Quit => self.terminate("quit requested"),
            GameInput::Select(difficulty) => {
                if matches!(self.phase, Phase::SelectingDifficulty) {
                    self.start_game(difficulty, now)?;
                }
            }
            GameInput::Direction(direction) => {
                if let Phase::Playing { game, .. } = &mut self.phase {
                    game.queue_direction(direction);
                }
            }
            GameInput::Replay => {
                if let Some(difficulty) = self.replay_difficulty(now) {
                    info!("replaying on {}", difficulty.label());
                    self.start_game(difficulty, now)?;
                }
            }
            GameInput::Decline => {
                if self.awaiting_replay(now) {
                    self.terminate("replay declined");
                }
            }
        }

        Ok(())
    }

    /// Runs the tick that is due at `now`, if any.
    ///
    /// At most one tick runs per call, and the next one is scheduled one
    /// interval after `now` at the possibly updated speed.
    pub fn update(&mut self, now: Instant) {
        self.phase = match std::mem::replace(&mut self.phase, Phase::Terminated) {
            Phase::Playing {
                mut game,
                next_tick_at,
            } if now >= next_tick_at => {
                game.tick();
                if game.is_over() {
                    Phase::GameOver {
                        game,
                        ended_at: now,
                    }
                } else {
                    let next_tick_at = now + game.tick_interval();
                    Phase::Playing { game, next_tick_at }
                }
            }
            other => other,
        };
    }

    /// How long the loop may wait for input before `update` has work to do.
    #[must_use]
    pub fn time_until_next_event(&self, now: Instant) -> Duration {
        match &self.phase {
            Phase::SelectingDifficulty => MAX_IDLE_POLL,
            Phase::Playing { next_tick_at, .. } => next_tick_at.saturating_duration_since(now),
            Phase::GameOver { ended_at, .. } => {
                let prompt_at = *ended_at + GAME_OVER_FREEZE;
                if now >= prompt_at {
                    MAX_IDLE_POLL
                } else {
                    (prompt_at - now).min(MAX_IDLE_POLL)
                }
            }
            Phase::Terminated => Duration::ZERO,
        }
    }

    fn replay_difficulty(&self, now: Instant) -> Option<Difficulty> {
        match &self.phase {
            Phase::GameOver { game, ended_at }
                if now.saturating_duration_since(*ended_at) >= GAME_OVER_FREEZE =>
            {
                Some(game.difficulty)
            }
            _ => None,
        }
    }

    fn start_game(&mut self, difficulty: Difficulty, now: Instant) -> Result<(), PlacementError> {
        let game = match self.seed {
            Some(seed) => {
                let game_seed = seed.wrapping_add(self.games_started);
                info!("game {} seeded with {game_seed}", self.games_started + 1);
                GameState::new_with_seed(difficulty, self.bounds, game_seed)?
            }
            None => GameState::new(difficulty, self.bounds)?,
        };
        self.games_started += 1;

        let next_tick_at = now + game.tick_interval();
        self.phase = Phase::Playing { game, next_tick_at };
        Ok(())
    }

    fn terminate(&mut self, cause: &str) {
        info!("terminating: {cause}");
        self.phase = Phase::Terminated;
    }
}
