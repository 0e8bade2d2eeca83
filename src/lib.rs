pub mod app;
pub mod collision;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod fruit;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
pub mod wall;
