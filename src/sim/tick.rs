//! Fixed-rate simulation tick
//!
//! One call advances paddles and ball by exactly one timer interval.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::rng::SignSource;
use super::state::{Pong, RenderState, Side, TickEvents};
use crate::consts::*;

/// Input sampled by the host for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Cursor y relative to the play field
    pub cursor_y: f32,
    /// Current play field bounds
    pub field: Rect,
}

impl TickInput {
    pub fn new(cursor_y: f32, field: Rect) -> Self {
        Self { cursor_y, field }
    }
}

/// Advance the game by one tick and return the state to draw
///
/// A changed field is applied first, as a resize would. Degenerate bounds
/// are ignored and the previous field stays in effect.
pub fn step(state: &mut Pong, input: &TickInput, rng: &mut impl SignSource) -> RenderState {
    if input.field != state.field {
        match state.reset_for_bounds(input.field) {
            Ok(()) => log::debug!("Field resized to {}x{}", input.field.width, input.field.height),
            Err(e) => log::warn!("Ignoring field bounds: {e}"),
        }
    }

    let mut events = TickEvents::default();
    state.time_ticks += 1;

    // Paddles
    state.user_paddle.set_y(input.cursor_y);
    chase_ball(state);

    // Paddle hits take priority over the walls
    let ball_pos = state.ball.pos;
    if state.user_paddle.rect().contains(ball_pos) || state.comp_paddle.rect().contains(ball_pos) {
        state.ball.dir.x = -state.ball.dir.x;
        state.ball.dir.y = 2 * rng.next_sign();
        events.paddle_bounce = true;
    } else if ball_pos.y - MARGIN_WIDTH_PX < state.field.top
        || ball_pos.y + MARGIN_WIDTH_PX > state.field.bottom()
    {
        state.ball.dir.y = -state.ball.dir.y;
        events.wall_bounce = true;
    }

    // Past a paddle's far edge is a point for the other side
    let scorer = if state.ball.pos.x < state.comp_paddle.rect().left {
        Some(Side::User)
    } else if state.ball.pos.x > state.user_paddle.rect().right() {
        Some(Side::Computer)
    } else {
        None
    };
    if let Some(side) = scorer {
        state.score.award(side);
        state.ball.serve_from(state.field.center());
        events.scored = Some(side);
        log::debug!(
            "{:?} scored ({} - {})",
            side,
            state.score.comp,
            state.score.user
        );
    }

    let travel = state.travel_per_tick();
    state.ball.pos += state.ball.dir.as_vec2() * travel;

    state.last_events = events;
    state.snapshot()
}

/// Step the computer paddle half a ball width toward the ball
fn chase_ball(state: &mut Pong) {
    let delta = BALL_WIDTH_PX / 2.0;
    let paddle_y = state.comp_paddle.center.y;
    let ball_y = state.ball.pos.y;

    if paddle_y + delta < ball_y {
        state.comp_paddle.set_y(paddle_y + delta);
    } else if paddle_y - delta > ball_y {
        state.comp_paddle.set_y(paddle_y - delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{GameRng, SignFn};
    use crate::sim::state::{Ball, Paddle};
    use glam::{IVec2, Vec2};
    use proptest::prelude::*;

    const FIELD: Rect = Rect::from_size(800.0, 600.0);

    fn new_game() -> Pong {
        Pong::new(FIELD).unwrap()
    }

    /// Cursor that keeps the user paddle where it already is
    fn idle_input(state: &Pong) -> TickInput {
        TickInput::new(state.user_paddle.center.y, FIELD)
    }

    fn travel() -> f32 {
        (800.0 / 3.0) / 60.0
    }

    #[test]
    fn test_free_flight_scenario() {
        let mut state = new_game();
        let mut rng = GameRng::new(1);
        let n = 30;
        for _ in 0..n {
            let input = idle_input(&state);
            let out = step(&mut state, &input, &mut rng);
            assert_eq!(out.events, TickEvents::default());
        }
        let expected_x = 400.0 + n as f32 * travel();
        assert!((state.ball.pos.x - expected_x).abs() < 1e-2);
        assert_eq!(state.ball.pos.y, 300.0);
    }

    #[test]
    fn test_per_tick_displacement() {
        for width in [320.0, 800.0, 1920.0] {
            let field = Rect::from_size(width, 600.0);
            let mut state = Pong::new(field).unwrap();
            state.ball.dir = IVec2::new(-1, 0);
            let before = state.ball.pos.x;
            let input = TickInput::new(300.0, field);
            step(&mut state, &input, &mut GameRng::new(3));
            let dx = state.ball.pos.x - before;
            assert!((dx - -(width / 3.0) / REFRESH_RATE_HZ as f32).abs() < 1e-3);
        }
    }

    #[test]
    fn test_user_paddle_follows_cursor_unclamped() {
        let mut state = new_game();
        let input = TickInput::new(-250.0, FIELD);
        let out = step(&mut state, &input, &mut GameRng::new(3));
        assert_eq!(out.user_paddle, Vec2::new(779.0, -250.0));
        // x never changes
        assert_eq!(state.user_paddle.center.x, 779.0);
    }

    #[test]
    fn test_ball_inside_computer_paddle_bounces() {
        for sign in [-1, 1] {
            let mut state = new_game();
            state.ball = Ball::new(state.comp_paddle.center, IVec2::new(-1, 0));
            let input = idle_input(&state);
            let out = step(&mut state, &input, &mut SignFn(move || sign));
            assert_eq!(state.ball.dir, IVec2::new(1, 2 * sign));
            assert!(out.events.paddle_bounce);
            assert!(!out.events.wall_bounce);
            assert_eq!(out.events.scored, None);
        }
    }

    #[test]
    fn test_ball_inside_user_paddle_bounces() {
        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(776.0, 320.0), IVec2::new(1, -2));
        let input = idle_input(&state);
        step(&mut state, &input, &mut GameRng::new(99));
        assert_eq!(state.ball.dir.x, -1);
        assert_eq!(state.ball.dir.y.abs(), 2);
    }

    #[test]
    fn test_paddle_hit_beats_wall_hit() {
        let mut state = new_game();
        // Paddle parked against the top wall with the ball on it
        state.ball = Ball::new(Vec2::new(779.0, 5.0), IVec2::new(1, -2));
        let input = TickInput::new(40.0, FIELD);
        let mut calls = 0;
        let out = step(
            &mut state,
            &input,
            &mut SignFn(|| {
                calls += 1;
                -1
            }),
        );
        assert!(out.events.paddle_bounce);
        assert!(!out.events.wall_bounce);
        assert_eq!(state.ball.dir, IVec2::new(-1, -2));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_wall_bounce_flips_vertical_only() {
        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(400.0, 10.0), IVec2::new(-1, -2));
        let input = idle_input(&state);
        let out = step(
            &mut state,
            &input,
            &mut SignFn(|| -> i32 { panic!("wall bounce must not draw a sign") }),
        );
        assert!(out.events.wall_bounce);
        assert_eq!(state.ball.dir, IVec2::new(-1, 2));

        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(400.0, 590.0), IVec2::new(1, 2));
        let input = idle_input(&state);
        step(&mut state, &input, &mut GameRng::new(0));
        assert_eq!(state.ball.dir, IVec2::new(1, -2));
    }

    #[test]
    fn test_wall_margin_is_exclusive() {
        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(400.0, MARGIN_WIDTH_PX), IVec2::new(1, -2));
        let input = idle_input(&state);
        let out = step(&mut state, &input, &mut GameRng::new(0));
        assert!(!out.events.wall_bounce);
        assert_eq!(state.ball.dir, IVec2::new(1, -2));
    }

    #[test]
    fn test_user_scores_past_computer_paddle() {
        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(12.0, 580.0), IVec2::new(-1, 2));
        state.comp_paddle = Paddle::new(Vec2::new(21.0, 100.0));
        let input = idle_input(&state);
        let out = step(&mut state, &input, &mut GameRng::new(5));

        assert_eq!(out.events.scored, Some(Side::User));
        assert_eq!(out.user_score, 1);
        assert_eq!(out.comp_score, 0);
        // Reset to centre, then one tick of travel to the left
        assert_eq!(state.ball.dir, IVec2::new(-1, 0));
        assert!((state.ball.pos.x - (400.0 - travel())).abs() < 1e-4);
        assert_eq!(state.ball.pos.y, 300.0);
    }

    #[test]
    fn test_computer_scores_past_user_paddle() {
        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(790.0, 150.0), IVec2::new(1, 2));
        let input = TickInput::new(500.0, FIELD);
        let out = step(&mut state, &input, &mut GameRng::new(5));

        assert_eq!(out.events.scored, Some(Side::Computer));
        assert_eq!(out.comp_score, 1);
        assert_eq!(state.ball.dir, IVec2::new(1, 0));
        assert_eq!(state.ball.pos.y, 300.0);
    }

    #[test]
    fn test_ball_on_goal_line_is_not_a_point() {
        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(16.0, 580.0), IVec2::new(-1, 0));
        state.comp_paddle = Paddle::new(Vec2::new(21.0, 100.0));
        let input = idle_input(&state);
        let out = step(&mut state, &input, &mut GameRng::new(5));
        assert_eq!(out.events.scored, None);
    }

    #[test]
    fn test_computer_chases_in_half_ball_steps() {
        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(400.0, 400.0), IVec2::new(1, 0));
        let input = idle_input(&state);
        step(&mut state, &input, &mut GameRng::new(0));
        assert_eq!(state.comp_paddle.center.y, 305.0);

        state.ball.pos.y = 100.0;
        let input = idle_input(&state);
        step(&mut state, &input, &mut GameRng::new(0));
        assert_eq!(state.comp_paddle.center.y, 300.0);
    }

    #[test]
    fn test_computer_holds_within_margin() {
        let mut state = new_game();
        state.ball = Ball::new(Vec2::new(400.0, 304.0), IVec2::new(1, 0));
        let input = idle_input(&state);
        step(&mut state, &input, &mut GameRng::new(0));
        assert_eq!(state.comp_paddle.center.y, 300.0);
    }

    #[test]
    fn test_resize_in_input_recenters() {
        let mut state = new_game();
        state.score.award(Side::User);
        let bigger = Rect::from_size(1200.0, 900.0);
        let out = step(&mut state, &TickInput::new(450.0, bigger), &mut GameRng::new(0));
        assert_eq!(out.field, bigger);
        assert_eq!(out.comp_paddle.x, 21.0);
        assert_eq!(out.user_paddle.x, 1179.0);
        assert!((out.ball.x - (600.0 + 400.0 / 60.0)).abs() < 1e-3);
        assert_eq!(out.user_score, 1);
    }

    #[test]
    fn test_degenerate_input_field_is_ignored() {
        let mut state = new_game();
        let out = step(
            &mut state,
            &TickInput::new(300.0, Rect::from_size(0.0, 0.0)),
            &mut GameRng::new(0),
        );
        assert_eq!(out.field, FIELD);
        assert!((out.ball.x - (400.0 + travel())).abs() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        let mut a = new_game();
        let mut b = new_game();
        let mut rng_a = GameRng::new(2024);
        let mut rng_b = GameRng::new(2024);
        for i in 0..2000 {
            let cursor = 300.0 + (i as f32 * 0.05).sin() * 280.0;
            let out_a = step(&mut a, &TickInput::new(cursor, FIELD), &mut rng_a);
            let out_b = step(&mut b, &TickInput::new(cursor, FIELD), &mut rng_b);
            assert_eq!(out_a, out_b);
        }
    }

    proptest! {
        #[test]
        fn prop_scores_monotonic(seed in any::<u64>(), cursors in prop::collection::vec(-100.0f32..700.0, 1..400)) {
            let mut state = new_game();
            let mut rng = GameRng::new(seed);
            let mut prev = (0u32, 0u32);
            for cursor in cursors {
                let out = step(&mut state, &TickInput::new(cursor, FIELD), &mut rng);
                let total_gain = (out.user_score - prev.0) + (out.comp_score - prev.1);
                prop_assert!(out.user_score >= prev.0 && out.comp_score >= prev.1);
                prop_assert_eq!(total_gain, u32::from(out.events.scored.is_some()));
                if out.events.scored.is_some() {
                    prop_assert_eq!(state.ball.dir.y, 0);
                    prop_assert_eq!(state.ball.pos.y, 300.0);
                }
                prev = (out.user_score, out.comp_score);
            }
        }

        #[test]
        fn prop_computer_chase_bounded(paddle_y in 0.0f32..600.0, ball_y in 0.0f32..600.0) {
            let mut state = new_game();
            state.comp_paddle.set_y(paddle_y);
            state.ball = Ball::new(Vec2::new(400.0, ball_y), IVec2::new(1, 0));
            let input = idle_input(&state);
            step(&mut state, &input, &mut GameRng::new(0));
            let moved = state.comp_paddle.center.y - paddle_y;
            prop_assert!(moved.abs() <= BALL_WIDTH_PX / 2.0 + 1e-4);
            if moved != 0.0 {
                prop_assert_eq!(moved.signum(), (ball_y - paddle_y).signum());
            }
        }

        #[test]
        fn prop_paddle_bounce_sets_unit_vertical(offset in -50.0f32..50.0, seed in any::<u64>()) {
            let mut state = new_game();
            let center = state.comp_paddle.center;
            state.ball = Ball::new(Vec2::new(center.x, center.y + offset), IVec2::new(-1, 0));
            let input = idle_input(&state);
            step(&mut state, &input, &mut GameRng::new(seed));
            prop_assert_eq!(state.ball.dir.x, 1);
            prop_assert!(state.ball.dir.y == 2 || state.ball.dir.y == -2);
        }
    }
}
