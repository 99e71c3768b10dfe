//! Menu state machine
//!
//! Four screens: the start menu, the running game, the pause menu and the
//! closed application. A Close button is available on every open screen.
//! Escape pauses a running game and quits from either menu.

use serde::{Deserialize, Serialize};

/// Which screen is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    StartMenu,
    Playing,
    Paused,
    Closed,
}

impl Screen {
    /// Whether the game ticks on this screen
    pub fn is_active(&self) -> bool {
        matches!(self, Screen::Playing)
    }

    /// Menu drawn over the field, if any
    pub fn overlay(&self) -> Option<Overlay> {
        match self {
            Screen::StartMenu => Some(Overlay::START),
            Screen::Paused => Some(Overlay::PAUSE),
            Screen::Playing | Screen::Closed => None,
        }
    }

    /// The play field is shown once the game has started
    pub fn shows_field(&self) -> bool {
        matches!(self, Screen::Playing | Screen::Paused)
    }
}

/// User actions that move between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Start,
    Pause,
    Resume,
    Close,
    Escape,
}

/// Title and button caption of a menu overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub button: &'static str,
    pub action: MenuAction,
}

impl Overlay {
    pub const START: Overlay = Overlay {
        title: "QPong",
        button: "Start",
        action: MenuAction::Start,
    };

    pub const PAUSE: Overlay = Overlay {
        title: "Game Paused",
        button: "Resume",
        action: MenuAction::Resume,
    };

    /// Caption of the always-present close button
    pub const CLOSE_BUTTON: &'static str = "Close";
}

/// Current screen plus the transition table
#[derive(Debug, Clone, Default)]
pub struct Menu {
    screen: Screen,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_closed(&self) -> bool {
        self.screen == Screen::Closed
    }

    /// Apply an action; returns false and stays put when it does not apply
    pub fn apply(&mut self, action: MenuAction) -> bool {
        match self.next_screen(action) {
            Some(next) => {
                log::debug!("Menu {:?} --{:?}--> {:?}", self.screen, action, next);
                self.screen = next;
                true
            }
            None => {
                log::debug!("Menu ignored {:?} on {:?}", action, self.screen);
                false
            }
        }
    }

    fn next_screen(&self, action: MenuAction) -> Option<Screen> {
        match (self.screen, action) {
            (Screen::StartMenu, MenuAction::Start) => Some(Screen::Playing),
            (Screen::Playing, MenuAction::Pause) => Some(Screen::Paused),
            (Screen::Paused, MenuAction::Resume) => Some(Screen::Playing),

            (Screen::Playing, MenuAction::Escape) => Some(Screen::Paused),
            (Screen::StartMenu | Screen::Paused, MenuAction::Escape) => Some(Screen::Closed),

            (Screen::Closed, _) => None,
            (_, MenuAction::Close) => Some(Screen::Closed),

            _ => None,
        }
    }
}
