//! Whole-image encoding: signature, IHDR, IDAT, IEND

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use raster::{Canvas, Rgba};
use tracing::debug;

use crate::chunk::{Chunk, ChunkType, payload_len};
use crate::consts::{FILTER_TYPE_NONE, SIGNATURE};
use crate::error::EncodeError;
use crate::header::Header;

/// Anything that can answer "what color is pixel (x, y)?"
///
/// Only called with in-range coordinates, row by row from the top left.
pub trait PixelSource {
    fn pixel(&self, x: u32, y: u32) -> Rgba;
}

impl<F> PixelSource for F
where
    F: Fn(u32, u32) -> Rgba,
{
    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Rgba {
        self(x, y)
    }
}

/// Unpainted coordinates resolve to transparent white
impl PixelSource for Canvas {
    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Rgba {
        Canvas::pixel(self, x, y)
    }
}

/// Encode a `width` x `height` RGBA image as PNG bytes.
///
/// Dimensions, including the size of the raw scanline buffer, are checked
/// before any pixel is read. The result is the signature followed by the
/// IHDR, IDAT and IEND chunks.
pub fn encode<S>(width: i64, height: i64, source: &S) -> Result<Vec<u8>, EncodeError>
where
    S: PixelSource + ?Sized,
{
    let header = Header::new(width, height)?;

    let raw = raw_scanlines(&header, source)?;
    let compressed = compress(&raw)?;
    payload_len(compressed.len())?;
    debug!(
        "encode: {}x{}, raw={} bytes, compressed={} bytes",
        header.width(),
        header.height(),
        raw.len(),
        compressed.len()
    );

    let chunks = [
        Chunk::new(ChunkType::IHDR, header.to_bytes().to_vec()),
        Chunk::new(ChunkType::IDAT, compressed),
        Chunk::end(),
    ];

    let total = SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();
    let mut output = Vec::with_capacity(total);
    output.extend_from_slice(&SIGNATURE);
    for chunk in &chunks {
        chunk.write_to(&mut output)?;
    }
    Ok(output)
}

/// Unfiltered scanlines: per row one filter byte (0) then R, G, B, A per pixel.
///
/// Fails with [`EncodeError::InvalidDimensions`] if the buffer size overflows.
pub fn raw_scanlines<S>(header: &Header, source: &S) -> Result<Vec<u8>, EncodeError>
where
    S: PixelSource + ?Sized,
{
    let raw_len = header.raw_len().ok_or(EncodeError::InvalidDimensions {
        width: header.width().into(),
        height: header.height().into(),
    })?;
    let mut raw = Vec::with_capacity(raw_len);
    for y in 0..header.height() {
        raw.push(FILTER_TYPE_NONE);
        for x in 0..header.width() {
            let color = source.pixel(x, y);
            raw.extend_from_slice(bytemuck::bytes_of(&color));
        }
    }
    Ok(raw)
}

/// Zlib-wrap `raw` at the best compression level
fn compress(raw: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 2), Compression::best());
    encoder.write_all(raw).map_err(EncodeError::EncodingFailure)?;
    encoder.finish().map_err(EncodeError::EncodingFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    use raster::{compose, draw_circle};

    /// Split an encoded image into (tag, payload, stored crc) triples
    fn parse_chunks(bytes: &[u8]) -> Vec<([u8; 4], Vec<u8>, u32)> {
        assert_eq!(&bytes[..8], &SIGNATURE);
        let mut chunks = Vec::new();
        let mut pos = 8;
        while pos < bytes.len() {
            let len = u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap()) as usize;
            let tag: [u8; 4] = bytes[pos + 4..pos + 8].try_into().unwrap();
            let data = bytes[pos + 8..pos + 8 + len].to_vec();
            let crc_pos = pos + 8 + len;
            let crc = u32::from_be_bytes(bytes[crc_pos..crc_pos + 4].try_into().unwrap());
            chunks.push((tag, data, crc));
            pos = crc_pos + 4;
        }
        assert_eq!(pos, bytes.len());
        chunks
    }

    fn checker(x: u32, y: u32) -> Rgba {
        if (x + y) % 2 == 0 {
            Rgba::new(x as u8, y as u8, 200, 255)
        } else {
            Rgba::new(0, 50, (x * y) as u8, 17)
        }
    }

    #[test]
    fn test_signature_and_end_chunk() {
        for (w, h) in [(1, 1), (3, 7), (64, 2)] {
            let bytes = encode(w, h, &checker).unwrap();
            assert_eq!(&bytes[..8], &SIGNATURE);

            let chunks = parse_chunks(&bytes);
            let (tag, data, _) = chunks.last().unwrap();
            assert_eq!(tag, b"IEND");
            assert!(data.is_empty());
        }
    }

    #[test]
    fn test_chunk_order_and_header() {
        let bytes = encode(5, 3, &checker).unwrap();
        let chunks = parse_chunks(&bytes);

        let tags: Vec<_> = chunks.iter().map(|(tag, _, _)| tag).collect();
        assert_eq!(tags, [b"IHDR", b"IDAT", b"IEND"]);
        assert_eq!(chunks[0].1, [0, 0, 0, 5, 0, 0, 0, 3, 8, 6, 0, 0, 0]);
    }

    #[test]
    fn test_stored_crcs_match() {
        let bytes = encode(16, 9, &checker).unwrap();
        for (tag, data, stored) in parse_chunks(&bytes) {
            assert_eq!(stored, crate::chunk::crc(&ChunkType(tag), &data));
        }
    }

    #[test]
    fn test_corrupted_payload_changes_crc() {
        let bytes = encode(8, 8, &checker).unwrap();
        let (tag, mut data, stored) = parse_chunks(&bytes).swap_remove(1);
        assert_eq!(&tag, b"IDAT");

        data[0] ^= 0xFF;
        assert_ne!(stored, crate::chunk::crc(&ChunkType(tag), &data));
    }

    #[test]
    fn test_raw_scanlines_layout() {
        let header = Header::new(2, 2).unwrap();
        let source = |x: u32, y: u32| Rgba::new(x as u8, y as u8, 9, 255);
        let raw = raw_scanlines(&header, &source).unwrap();

        assert_eq!(
            raw,
            [
                0, 0, 0, 9, 255, 1, 0, 9, 255, // row 0
                0, 0, 1, 9, 255, 1, 1, 9, 255, // row 1
            ]
        );
    }

    #[test]
    fn test_round_trip_decodes() {
        let (w, h) = (23u32, 11u32);
        let bytes = encode(w.into(), h.into(), &checker).unwrap();

        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.dimensions(), (w, h));
        for y in 0..h {
            for x in 0..w {
                assert_eq!(decoded.get_pixel(x, y).0, <[u8; 4]>::from(checker(x, y)));
            }
        }
    }

    #[test]
    fn test_canvas_defaults_to_transparent_white() {
        let mut canvas = Canvas::square(20);
        let color = Rgba::opaque(12, 34, 56);
        draw_circle(&mut canvas, 10.0, 10.0, 4.0, color);

        let bytes = encode(20, 20, &canvas).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

        assert_eq!(decoded.get_pixel(10, 10).0, [12, 34, 56, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 0]);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            encode(0, 5, &checker),
            Err(EncodeError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(
            encode(5, -1, &checker),
            Err(EncodeError::InvalidDimensions { width: 5, height: -1 })
        ));
    }

    #[test]
    fn test_invalid_dimensions_reads_no_pixels() {
        let source = |_: u32, _: u32| -> Rgba { panic!("pixel read before validation") };
        assert!(encode(0, 0, &source).is_err());
    }

    #[test]
    fn test_rejects_dimensions_past_png_limit() {
        let source = |_: u32, _: u32| -> Rgba { panic!("pixel read before validation") };
        let max = i64::from(u32::MAX);
        assert!(matches!(
            encode(max, max, &source),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode(1 << 31, 1, &source),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_raw_buffer_overflow_is_invalid_dimensions() {
        // Both dimensions at the PNG limit: a valid header, but no buffer can hold it
        let source = |_: u32, _: u32| -> Rgba { panic!("pixel read before validation") };
        let max = i64::from(crate::consts::MAX_PNG_VALUE);
        assert!(matches!(
            encode(max, max, &source),
            Err(EncodeError::InvalidDimensions { width, height }) if width == max && height == max
        ));
    }

    #[test]
    fn test_composed_icons() {
        for size in [16u32, 32, 48, 128] {
            let canvas = compose(size);
            let bytes = encode(size.into(), size.into(), &canvas).unwrap();
            assert!(!bytes.is_empty());
            assert_eq!(&bytes[..8], &SIGNATURE);

            let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
            assert_eq!(decoded.dimensions(), (size, size));
            let center = size / 2;
            assert_eq!(decoded.get_pixel(center, center).0, [255, 255, 255, 255]);
        }
    }
}
