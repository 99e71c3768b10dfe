//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`Pong`]. Hosts never borrow into
//! it; they read a copied [`RenderState`] after each tick.

use std::fmt;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which player a paddle or a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Cursor-driven paddle on the right
    User,
    /// Ball-chasing paddle on the left
    Computer,
}

/// A paddle; only its centre moves, the size is fixed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub center: Vec2,
}

impl Paddle {
    pub const SIZE: Vec2 = Vec2::new(PADDLE_WIDTH_PX, PADDLE_HEIGHT_PX);

    pub fn new(center: Vec2) -> Self {
        Self { center }
    }

    /// Centre of the paddle for `side` when placed on `field`
    pub fn home(side: Side, field: &Rect) -> Vec2 {
        let inset = MARGIN_WIDTH_PX + PADDLE_WIDTH_PX / 2.0;
        let x = match side {
            Side::User => field.right() - inset,
            Side::Computer => field.left + inset,
        };
        Vec2::new(x, field.center().y)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, Self::SIZE)
    }

    /// Move vertically only
    pub fn set_y(&mut self, y: f32) {
        self.center.y = y;
    }
}

/// The ball: a point position and an integer direction
///
/// `dir.x` is always -1 or +1. `dir.y` is 0 after a serve and ±2 after a
/// paddle hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: IVec2,
}

impl Ball {
    pub fn new(pos: Vec2, dir: IVec2) -> Self {
        Self { pos, dir }
    }

    /// Square drawn around the ball position
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, Vec2::splat(BALL_WIDTH_PX))
    }

    /// Back to the centre travelling horizontally; `dir.x` is kept
    pub fn serve_from(&mut self, center: Vec2) {
        self.pos = center;
        self.dir.y = 0;
    }
}

/// Points per player; counters only ever go up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub user: u32,
    pub comp: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::User => self.user += 1,
            Side::Computer => self.comp += 1,
        }
    }
}

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvents {
    pub paddle_bounce: bool,
    pub wall_bounce: bool,
    pub scored: Option<Side>,
}

/// Read-only view handed to the renderer after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub field: Rect,
    pub ball: Vec2,
    pub user_paddle: Vec2,
    pub comp_paddle: Vec2,
    pub user_score: u32,
    pub comp_score: u32,
    pub events: TickEvents,
}

/// Bounds that cannot host a game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldError {
    /// Width or height is zero or negative
    Degenerate { width: f32, height: f32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Degenerate { width, height } => {
                write!(f, "play field must have positive size, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for FieldError {}

fn check_field(field: Rect) -> Result<Rect, FieldError> {
    if field.is_playable() {
        Ok(field)
    } else {
        Err(FieldError::Degenerate {
            width: field.width,
            height: field.height,
        })
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pong {
    pub(crate) field: Rect,
    pub user_paddle: Paddle,
    pub comp_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Events of the most recent tick
    #[serde(skip)]
    pub(crate) last_events: TickEvents,
}

impl Pong {
    /// Place paddles and ball on `field`; the ball starts heading right
    pub fn new(field: Rect) -> Result<Self, FieldError> {
        let field = check_field(field)?;
        Ok(Self {
            field,
            user_paddle: Paddle::new(Paddle::home(Side::User, &field)),
            comp_paddle: Paddle::new(Paddle::home(Side::Computer, &field)),
            ball: Ball::new(field.center(), IVec2::new(1, 0)),
            score: Score::default(),
            time_ticks: 0,
            last_events: TickEvents::default(),
        })
    }

    pub fn field(&self) -> Rect {
        self.field
    }

    /// Adopt new bounds and recentre paddles and ball
    ///
    /// Scores and ball direction are untouched. Degenerate bounds are
    /// rejected and the previous field is kept.
    pub fn reset_for_bounds(&mut self, field: Rect) -> Result<(), FieldError> {
        let field = check_field(field)?;
        self.field = field;
        self.user_paddle.center = Paddle::home(Side::User, &field);
        self.comp_paddle.center = Paddle::home(Side::Computer, &field);
        self.ball.pos = field.center();
        self.last_events = TickEvents::default();
        Ok(())
    }

    /// Horizontal pixels the ball covers per tick: a third of the field
    /// width per second at the fixed refresh rate
    pub fn travel_per_tick(&self) -> f32 {
        (self.field.width / 3.0) / REFRESH_RATE_HZ as f32
    }

    pub fn snapshot(&self) -> RenderState {
        RenderState {
            field: self.field,
            ball: self.ball.pos,
            user_paddle: self.user_paddle.center,
            comp_paddle: self.comp_paddle.center,
            user_score: self.score.user,
            comp_score: self.score.comp,
            events: self.last_events,
        }
    }
}
