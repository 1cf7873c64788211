use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color
///
/// Laid out as four consecutive bytes so a pixel can be handed to the
/// encoder with `bytemuck::bytes_of` in R, G, B, A order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Color resolved for coordinates nothing has been drawn to
    pub const TRANSPARENT_WHITE: Self = Self::new(255, 255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT_WHITE
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

/// A coordinate known to lie inside a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    /// Convert a signed coordinate, returning None outside `[0, width) x [0, height)`
    #[inline]
    pub fn within(x: i32, y: i32, width: u32, height: u32) -> Option<Self> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < width && y < height).then_some(Self { x, y })
    }

    /// Row-major index into a buffer of the given width
    #[inline]
    pub fn index(self, width: u32) -> usize {
        (self.y as usize) * (width as usize) + (self.x as usize)
    }
}

/// Direction a stroke advances from its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step along the stroke
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Offset of the second pixel that thickens the stroke to 2px.
    /// Always one unit in the negative perpendicular direction.
    pub fn thickening_offset(self) -> (i32, i32) {
        match self {
            Self::Up | Self::Down => (-1, 0),
            Self::Left | Self::Right => (0, -1),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}
