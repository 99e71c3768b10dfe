//! Navigation between the start menu, the game and the pause menu

pub mod menu;

pub use menu::{Menu, MenuAction, Overlay, Screen};
