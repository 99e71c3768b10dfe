//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod activity;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;

pub use activity::{Activity, TickTimer};
pub use rect::Rect;
pub use rng::{GameRng, SignFn, SignSource};
pub use state::{Ball, FieldError, Paddle, Pong, RenderState, Score, Side, TickEvents};
pub use tick::{TickInput, step};
