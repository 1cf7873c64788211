//! Tomato timer icon composition

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::Canvas;
use crate::constants::*;
use crate::primitives::{draw_circle, draw_stroke, fill_rect};
use crate::types::{Direction, Rgba};

/// Colors used to paint the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Tomato body
    pub body: Rgba,
    /// Semi-transparent highlight on the upper left of the body
    pub highlight: Rgba,
    pub stem: Rgba,
    /// Clock hands and center cap
    pub hands: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            body: Rgba::opaque(255, 107, 90),
            highlight: Rgba::new(255, 139, 122, 120),
            stem: Rgba::opaque(82, 183, 136),
            hands: Rgba::opaque(255, 255, 255),
        }
    }
}

/// Render the icon at `size` x `size` with the default palette
pub fn compose(size: u32) -> Canvas {
    compose_with(size, &Palette::default())
}

/// Render the icon at `size` x `size`
///
/// Layers are painted back to front: body, highlight, stem, hour hand,
/// minute hand, center cap.
pub fn compose_with(size: u32, palette: &Palette) -> Canvas {
    let mut canvas = Canvas::square(size);

    let size_f = size as f32;
    let center = size_f / 2.0;
    let radius = size_f * BODY_RADIUS_RATIO;
    debug!("compose: size={}, center={:.2}, radius={:.2}", size, center, radius);

    draw_circle(&mut canvas, center, center, radius, palette.body);

    let highlight_center = center - radius * HIGHLIGHT_OFFSET_RATIO;
    draw_circle(
        &mut canvas,
        highlight_center,
        highlight_center,
        radius * HIGHLIGHT_RADIUS_RATIO,
        palette.highlight,
    );

    let stem_width = stem_width(size);
    let stem_x = (center - stem_width as f32 / 2.0).trunc() as i32;
    let stem_top = (center - radius - size_f * STEM_RISE_RATIO).trunc() as i32;
    let stem_bottom = (center - radius + size_f * STEM_OVERLAP_RATIO).trunc() as i32;
    fill_rect(
        &mut canvas,
        stem_x..stem_x + stem_width,
        stem_top..stem_bottom,
        palette.stem,
    );

    let hour_steps = (radius * HOUR_HAND_RATIO).trunc() as u32;
    let minute_steps = (radius * MINUTE_HAND_RATIO).trunc() as u32;
    draw_stroke(&mut canvas, (center, center), Direction::Up, hour_steps, palette.hands);
    draw_stroke(&mut canvas, (center, center), Direction::Right, minute_steps, palette.hands);

    let cap_radius = (size / CAP_RADIUS_DIVISOR).max(1) as f32;
    draw_circle(&mut canvas, center, center, cap_radius, palette.hands);

    canvas
}

fn stem_width(size: u32) -> i32 {
    let width = (size as f32 * STEM_WIDTH_RATIO).trunc() as i32;
    width.max(1)
}
