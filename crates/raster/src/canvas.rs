//! Canvas for icon rasterization - dense storage with an explicit "absent" state

use crate::types::{Coord, Rgba};

/// An RGBA canvas where every coordinate is either painted or absent
///
/// Absent coordinates resolve to [`Rgba::TRANSPARENT_WHITE`] when read
/// through [`Canvas::pixel`]. Writes outside the canvas are dropped, so
/// nothing out of range ever reaches the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Row-major, `None` where nothing has been drawn
    pixels: Vec<Option<Rgba>>,
}

impl Canvas {
    /// Create a canvas with every coordinate absent
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![None; pixel_count],
        }
    }

    /// Square canvas
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write a color, replacing whatever was there
    /// Returns false (and writes nothing) if the coordinate is outside the canvas
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) -> bool {
        match Coord::within(x, y, self.width, self.height) {
            Some(coord) => {
                self.pixels[coord.index(self.width)] = Some(color);
                true
            }
            None => false,
        }
    }

    /// The color drawn at a coordinate
    /// Returns None if nothing was drawn there or the coordinate is out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        let coord = Coord::within(x, y, self.width, self.height)?;
        self.pixels[coord.index(self.width)]
    }

    /// Resolved color at a coordinate, falling back to transparent white
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::TRANSPARENT_WHITE;
        }
        let index = Coord { x, y }.index(self.width);
        self.pixels[index].unwrap_or(Rgba::TRANSPARENT_WHITE)
    }

    /// Number of coordinates that have been drawn to
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    /// Iterate painted coordinates in row-major order
    pub fn painted(&self) -> impl Iterator<Item = (Coord, Rgba)> + '_ {
        let width = self.width.max(1);
        self.pixels.iter().enumerate().filter_map(move |(i, p)| {
            p.map(|color| {
                let coord = Coord {
                    x: (i % width as usize) as u32,
                    y: (i / width as usize) as u32,
                };
                (coord, color)
            })
        })
    }
}
