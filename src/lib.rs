//! QPong - a minimal two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring, tick timer)
//! - `ui`: Start/pause/close navigation
//! - `renderer`: Display list and GPU vertices for the host to draw
//! - `session`: Ties simulation, menus and timer together for a host
//! - `settings`: Host presentation settings

pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Margin around the field: paddle inset and wall bounce distance
    pub const MARGIN_WIDTH_PX: f32 = 16.0;
    /// Ticks per second
    pub const REFRESH_RATE_HZ: u32 = 60;
    /// Timer interval in whole milliseconds
    pub const TICK_INTERVAL_MS: u64 = 1000 / REFRESH_RATE_HZ as u64;
    /// Maximum ticks run for one host frame
    pub const MAX_SUBSTEPS: u32 = 8;

    pub const PADDLE_WIDTH_PX: f32 = 10.0;
    pub const PADDLE_HEIGHT_PX: f32 = 100.0;
    pub const NET_WIDTH_PX: f32 = 4.0;
    pub const BALL_WIDTH_PX: f32 = 10.0;
}
