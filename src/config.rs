use std::time::Duration;

use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// The fixed board every game is played on.
pub const GRID_SIZE: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Ticks per second at the start of every game.
pub const INITIAL_SPEED: u32 = 5;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Vertical resolution of wall movement: one cell is this many steps tall.
pub const WALL_STEPS_PER_CELL: i32 = 15;

/// Steps a movable wall travels per tick.
pub const WALL_SPEED: i32 = 1;

/// A wall band changes row on average once every this many columns.
pub const WALL_RESAMPLE_ONE_IN: u32 = 11;

/// Random draws tried before fruit placement falls back to a full scan.
pub const FRUIT_PLACEMENT_MAX_ATTEMPTS: u32 = 1_000;

/// How long the final board stays frozen before the replay prompt appears.
pub const GAME_OVER_FREEZE: Duration = Duration::from_secs(1);

/// Upper bound on how long the main loop blocks waiting for input.
pub const MAX_IDLE_POLL: Duration = Duration::from_millis(100);

/// Log file name, created in the system temp directory unless overridden.
pub const DEFAULT_LOG_FILE_NAME: &str = "wall-snake.log";

/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph for one occupied grid cell, `CELL_WIDTH` columns wide.
pub const GLYPH_CELL: &str = "██";

/// Glyph for the fruit cell.
pub const GLYPH_FRUIT: &str = "◖◗";
