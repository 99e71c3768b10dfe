//! Everything a host needs for one running game
//!
//! The host forwards button presses and key events as [`MenuAction`]s,
//! reports resizes, feeds elapsed time with the latest cursor y, and paints
//! [`Session::scene`].

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::renderer::Scene;
use crate::settings::Settings;
use crate::sim::{FieldError, GameRng, Pong, Rect, RenderState, TickInput, TickTimer, step};
use crate::ui::{Menu, MenuAction, Screen};

/// Seed from the wall clock, for runs without a configured seed
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct Session {
    pong: Pong,
    menu: Menu,
    timer: TickTimer,
    rng: GameRng,
    font_pixel_size: f32,
    hide_cursor: bool,
    last: RenderState,
}

impl Session {
    pub fn new(settings: &Settings) -> Result<Self, FieldError> {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        let field = settings.field();
        let pong = Pong::new(field)?;
        log::info!(
            "New game on {}x{} field with seed {}",
            field.width,
            field.height,
            seed
        );
        Ok(Self {
            last: pong.snapshot(),
            pong,
            menu: Menu::new(),
            timer: TickTimer::new(),
            rng: GameRng::new(seed),
            font_pixel_size: settings.font_pixel_size as f32,
            hide_cursor: settings.hide_cursor,
        })
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn screen(&self) -> Screen {
        self.menu.screen()
    }

    pub fn is_closed(&self) -> bool {
        self.menu.is_closed()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Whether the host should blank the pointer over the play field
    pub fn hides_cursor(&self) -> bool {
        self.hide_cursor && self.menu.screen() == Screen::Playing
    }

    /// Apply a menu action and start or stop ticks to match the new screen
    pub fn apply(&mut self, action: MenuAction) -> bool {
        let changed = self.menu.apply(action);
        if changed {
            self.timer.set_active(self.menu.screen().is_active());
            if self.menu.is_closed() {
                log::info!(
                    "Closed at {} - {} after {} ticks",
                    self.pong.score.comp,
                    self.pong.score.user,
                    self.pong.time_ticks
                );
            }
        }
        changed
    }

    pub fn start(&mut self) -> bool {
        self.apply(MenuAction::Start)
    }

    pub fn pause(&mut self) -> bool {
        self.apply(MenuAction::Pause)
    }

    pub fn resume(&mut self) -> bool {
        self.apply(MenuAction::Resume)
    }

    pub fn close(&mut self) -> bool {
        self.apply(MenuAction::Close)
    }

    pub fn escape(&mut self) -> bool {
        self.apply(MenuAction::Escape)
    }

    /// New play field bounds from the host window
    pub fn resize(&mut self, field: Rect) -> Result<(), FieldError> {
        self.pong.reset_for_bounds(field)?;
        self.last = self.pong.snapshot();
        Ok(())
    }

    /// Run every tick that `elapsed` makes due
    ///
    /// Returns the latest state when at least one tick ran; `None` while
    /// paused or between intervals.
    pub fn advance(&mut self, elapsed: Duration, cursor_y: f32) -> Option<RenderState> {
        let ticks = self.timer.advance(elapsed);
        if ticks == 0 {
            return None;
        }

        let input = TickInput::new(cursor_y, self.pong.field());
        for _ in 0..ticks {
            let out = step(&mut self.pong, &input, &mut self.rng);
            if let Some(side) = out.events.scored {
                log::info!(
                    "Point to {:?}: {} - {}",
                    side,
                    out.comp_score,
                    out.user_score
                );
            }
            self.last = out;
        }
        Some(self.last)
    }

    pub fn snapshot(&self) -> RenderState {
        self.last
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.last, self.menu.screen(), self.font_pixel_size)
    }
}
