//! Tomato timer icon rasterizer
//!
//! This crate paints the icon into an in-memory canvas:
//! - [`types::Rgba`] - 8-bit RGBA color (bytemuck-compatible)
//! - [`types::Coord`] - In-canvas coordinate
//! - [`canvas`] - Canvas with an explicit "absent" state per coordinate
//! - [`primitives`] - Filled circles, clamped rectangles and 2px strokes
//! - [`compose`] - The icon itself, layered back to front

pub mod canvas;
pub mod compose;
pub mod constants;
pub mod primitives;
pub mod types;

pub use canvas::*;
pub use compose::*;
pub use constants::*;
pub use primitives::*;
pub use types::*;
