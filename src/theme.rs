use ratatui::style::Color;

/// Colors applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    /// Solid block color for the snake head.
    pub snake_head: Color,
    /// Solid block color for body segments.
    pub snake_body: Color,
    pub fruit: Color,
    pub wall: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_text: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
    /// Score color on the game-over popup.
    pub game_over: Color,
}

/// Yellow-headed green snake, red fruit and white walls on black.
pub const THEME_ARCADE: Theme = Theme {
    snake_head: Color::Yellow,
    snake_body: Color::Green,
    fruit: Color::Red,
    wall: Color::White,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    border_bg: Color::Black,
    hud_text: Color::Gray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
    game_over: Color::Red,
};
