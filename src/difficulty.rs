/// How obstacle walls behave for a difficulty.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WallLayout {
    /// No walls at all.
    Open,
    /// A band of walls that never moves.
    Fixed,
    /// A band of walls that oscillates vertically every tick.
    Moving,
}

/// Difficulty tier chosen at the prompt.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Highest speed, in ticks per second, the snake can reach.
    #[must_use]
    pub fn max_speed(self) -> u32 {
        match self {
            Self::Easy => 15,
            Self::Medium => 20,
            Self::Hard => 30,
        }
    }

    #[must_use]
    pub fn wall_layout(self) -> WallLayout {
        match self {
            Self::Easy => WallLayout::Open,
            Self::Medium => WallLayout::Fixed,
            Self::Hard => WallLayout::Moving,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}
