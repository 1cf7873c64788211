//! Fill primitives: disks, clamped rectangles and 2px axis-aligned strokes
//!
//! Every primitive writes unconditionally, so the composition of several
//! calls depends only on their order. Each returns the number of pixels that
//! landed inside the canvas.

use std::ops::Range;

use tracing::debug;

use crate::canvas::Canvas;
use crate::types::{Direction, Rgba};

/// Fill every integer coordinate with `(x - cx)^2 + (y - cy)^2 <= radius^2`.
///
/// The scan covers the bounding box `[cx - radius, cx + radius]` on both axes,
/// each bound truncated toward zero. Coordinates outside the canvas are left
/// to the canvas to discard.
pub fn draw_circle(canvas: &mut Canvas, cx: f32, cy: f32, radius: f32, color: Rgba) -> usize {
    debug!(
        "draw_circle: center=({:.2}, {:.2}), radius={:.2}, color={:?}",
        cx, cy, radius, color
    );

    if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) || radius <= 0.0 {
        debug!("  -> skipped: degenerate circle");
        return 0;
    }

    let x_min = (cx - radius).trunc() as i32;
    let x_max = (cx + radius).trunc() as i32;
    let y_min = (cy - radius).trunc() as i32;
    let y_max = (cy + radius).trunc() as i32;
    let radius_sq = radius * radius;

    let mut written = 0;
    for x in x_min..=x_max {
        for y in y_min..=y_max {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius_sq && canvas.put(x, y, color) {
                written += 1;
            }
        }
    }
    written
}

/// Fill the half-open region `xs` x `ys`, clamped to the canvas first.
pub fn fill_rect(canvas: &mut Canvas, xs: Range<i32>, ys: Range<i32>, color: Rgba) -> usize {
    debug!("fill_rect: x={:?}, y={:?}, color={:?}", xs, ys, color);

    let width = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(canvas.height()).unwrap_or(i32::MAX);
    let xs = xs.start.max(0)..xs.end.min(width);
    let ys = ys.start.max(0)..ys.end.min(height);

    if xs.is_empty() || ys.is_empty() {
        debug!("  -> skipped: region outside canvas");
        return 0;
    }

    for x in xs.clone() {
        for y in ys.clone() {
            canvas.put(x, y, color);
        }
    }
    xs.len() * ys.len()
}

/// Draw a 2px-wide stroke of `steps` unit steps from `origin`.
///
/// Step `i` sets the pixel `i` units along `direction`; every step after the
/// first also sets its neighbour one unit along the negative perpendicular
/// axis. A step whose advancing coordinate falls off the canvas is skipped.
pub fn draw_stroke(
    canvas: &mut Canvas,
    origin: (f32, f32),
    direction: Direction,
    steps: u32,
    color: Rgba,
) -> usize {
    debug!(
        "draw_stroke: origin=({:.2}, {:.2}), direction={:?}, steps={}, color={:?}",
        origin.0, origin.1, direction, steps, color
    );

    let (step_x, step_y) = direction.step();
    let (thick_x, thick_y) = direction.thickening_offset();
    let limit = if direction.is_vertical() {
        canvas.height()
    } else {
        canvas.width()
    };

    let mut written = 0;
    for i in 0..steps {
        let offset = i as f32;
        let x = (origin.0 + step_x as f32 * offset).trunc() as i32;
        let y = (origin.1 + step_y as f32 * offset).trunc() as i32;

        let advancing = if direction.is_vertical() { y } else { x };
        if !matches!(u32::try_from(advancing), Ok(a) if a < limit) {
            continue;
        }

        written += usize::from(canvas.put(x, y, color));
        if i > 0 {
            written += usize::from(canvas.put(x + thick_x, y + thick_y, color));
        }
    }
    written
}
