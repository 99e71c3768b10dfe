//! Display list for one frame
//!
//! Built from a [`RenderState`] snapshot and the current [`Screen`]. The
//! host draws the quads (or uploads [`Scene::vertices`]) and renders the
//! labels with its own font at the given pixel size.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{Paddle, Rect, RenderState};
use crate::ui::{Overlay, Screen};

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    pub color: [f32; 4],
}

/// Text to draw, horizontally centred on `anchor.x` with its top at `anchor.y`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Vec2,
    pub pixel_size: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: [f32; 4],
    pub quads: Vec<Quad>,
    pub labels: Vec<Label>,
    pub overlay: Option<Overlay>,
}

/// Scores are shown with at least two digits
pub fn score_text(score: u32) -> String {
    format!("{score:02}")
}

impl Scene {
    /// Lay out the frame; `font_pixel_size` sizes the menu button captions
    pub fn build(state: &RenderState, screen: Screen, font_pixel_size: f32) -> Self {
        let mut scene = Scene {
            background: colors::BACKGROUND,
            quads: Vec::new(),
            labels: Vec::new(),
            overlay: screen.overlay(),
        };

        if screen == Screen::Playing {
            scene.push_field(state);
        }
        if let Some(overlay) = scene.overlay {
            scene.push_overlay(&state.field, overlay, font_pixel_size);
        }
        if screen != Screen::Closed {
            scene.push_close_button(&state.field, font_pixel_size);
        }
        scene
    }

    fn push_field(&mut self, state: &RenderState) {
        let field = &state.field;
        let fg = colors::FOREGROUND;

        for center in [state.user_paddle, state.comp_paddle] {
            self.quads.push(Quad {
                rect: Rect::from_center_size(center, Paddle::SIZE),
                color: fg,
            });
        }

        // Scores: computer on the left quarter, user on the right quarter
        let score_size = field.height / 10.0;
        let score_y = field.top + MARGIN_WIDTH_PX;
        self.labels.push(Label {
            text: score_text(state.user_score),
            anchor: Vec2::new(field.right() - field.width / 4.0, score_y),
            pixel_size: score_size,
            color: fg,
        });
        self.labels.push(Label {
            text: score_text(state.comp_score),
            anchor: Vec2::new(field.left + field.width / 4.0, score_y),
            pixel_size: score_size,
            color: fg,
        });

        self.quads.push(Quad {
            rect: Rect::from_center_size(state.ball, Vec2::splat(BALL_WIDTH_PX)),
            color: fg,
        });

        let net_top = Vec2::new(field.center().x, field.top + NET_WIDTH_PX);
        let dashes = shapes::dashed_vline(
            net_top,
            field.bottom(),
            NET_WIDTH_PX,
            4.0 * NET_WIDTH_PX,
            2.0 * NET_WIDTH_PX,
        );
        self.quads
            .extend(dashes.into_iter().map(|rect| Quad { rect, color: fg }));
    }

    fn push_overlay(&mut self, field: &Rect, overlay: Overlay, font_pixel_size: f32) {
        let center = field.center();
        let title_size = font_pixel_size * 4.0;
        // Title sits just above the centre line, the button just below
        self.labels.push(Label {
            text: overlay.title.to_string(),
            anchor: Vec2::new(center.x, center.y - title_size),
            pixel_size: title_size,
            color: colors::FOREGROUND,
        });
        self.labels.push(Label {
            text: overlay.button.to_string(),
            anchor: Vec2::new(center.x, center.y + MARGIN_WIDTH_PX / 2.0),
            pixel_size: font_pixel_size,
            color: colors::FOREGROUND,
        });
    }

    /// Close caption in the bottom-right corner, right-aligned to the margin
    fn push_close_button(&mut self, field: &Rect, font_pixel_size: f32) {
        let text = Overlay::CLOSE_BUTTON;
        // No font metrics here; assume glyphs half as wide as the pixel size
        let half_width = text.len() as f32 * font_pixel_size / 4.0;
        self.labels.push(Label {
            text: text.to_string(),
            anchor: Vec2::new(
                field.right() - MARGIN_WIDTH_PX - half_width,
                field.bottom() - MARGIN_WIDTH_PX - font_pixel_size,
            ),
            pixel_size: font_pixel_size,
            color: colors::FOREGROUND,
        });
    }

    /// Triangle list for every quad, in draw order
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(self.quads.len() * 6);
        for quad in &self.quads {
            vertices.extend_from_slice(&shapes::rect(&quad.rect, quad.color));
        }
        vertices
    }
}
