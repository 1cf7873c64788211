//! PNG chunk framing: length, tag, payload, CRC

use crate::consts::MAX_PNG_VALUE;
use crate::error::EncodeError;

/// A 4-byte chunk type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    pub const IHDR: Self = Self(*b"IHDR");
    pub const IDAT: Self = Self(*b"IDAT");
    pub const IEND: Self = Self(*b"IEND");

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl std::fmt::Display for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A chunk ready to be written
///
/// Length and CRC are always derived from the current payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: ChunkType,
    pub data: Vec<u8>,
}

impl Chunk {
    pub fn new(kind: ChunkType, data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    /// An IEND chunk
    pub fn end() -> Self {
        Self::new(ChunkType::IEND, Vec::new())
    }

    /// Payload length as stored in the length field
    #[inline]
    pub fn len(&self) -> Result<u32, EncodeError> {
        payload_len(self.data.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// CRC-32 over the type tag followed by the payload
    pub fn crc(&self) -> u32 {
        crc(&self.kind, &self.data)
    }

    /// Bytes this chunk occupies in the file
    pub fn encoded_len(&self) -> usize {
        self.data.len().saturating_add(4 + 4 + 4)
    }

    /// Append the framed chunk to `out`
    /// Fails without writing anything if the payload is too long for a chunk.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        let len = self.len()?;
        out.reserve(self.encoded_len());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(self.kind.as_bytes());
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.crc().to_be_bytes());
        Ok(())
    }
}

/// Length field for a payload of `len` bytes
///
/// PNG caps chunk payloads at 2^31 - 1 bytes; anything longer is an
/// [`EncodeError::EncodingFailure`].
pub fn payload_len(len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len)
        .ok()
        .filter(|&n| n <= MAX_PNG_VALUE)
        .ok_or_else(|| {
            EncodeError::EncodingFailure(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("chunk payload of {len} bytes exceeds {MAX_PNG_VALUE}"),
            ))
        })
}

/// CRC-32 (ISO-HDLC polynomial, as used by PNG) of `kind || data`
pub fn crc(kind: &ChunkType, data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind.as_bytes());
    hasher.update(data);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iend_bytes() {
        let mut out = Vec::new();
        Chunk::end().write_to(&mut out).unwrap();
        // Well-known IEND encoding
        assert_eq!(
            out,
            [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn test_framing() {
        let chunk = Chunk::new(ChunkType::IDAT, vec![1, 2, 3]);
        let mut out = Vec::new();
        chunk.write_to(&mut out).unwrap();

        assert_eq!(out.len(), chunk.encoded_len());
        assert_eq!(&out[0..4], &[0, 0, 0, 3]);
        assert_eq!(&out[4..8], b"IDAT");
        assert_eq!(&out[8..11], &[1, 2, 3]);
        assert_eq!(&out[11..15], &chunk.crc().to_be_bytes());
    }

    #[test]
    fn test_crc_tracks_payload() {
        let mut chunk = Chunk::new(ChunkType::IDAT, vec![10, 20, 30, 40]);
        let before = chunk.crc();

        chunk.data[2] ^= 0x01;
        assert_ne!(chunk.crc(), before);
        assert_eq!(chunk.len().unwrap(), 4);

        chunk.data.push(50);
        assert_eq!(chunk.len().unwrap(), 5);
    }

    #[test]
    fn test_crc_covers_type_tag() {
        let a = Chunk::new(ChunkType::IDAT, vec![7; 8]);
        let b = Chunk::new(ChunkType::IHDR, vec![7; 8]);
        assert_ne!(a.crc(), b.crc());
    }

    #[test]
    fn test_payload_len_limit() {
        assert_eq!(payload_len(0).unwrap(), 0);
        assert_eq!(payload_len(MAX_PNG_VALUE as usize).unwrap(), MAX_PNG_VALUE);
        assert!(matches!(
            payload_len(MAX_PNG_VALUE as usize + 1),
            Err(EncodeError::EncodingFailure(_))
        ));
        assert!(matches!(
            payload_len(usize::MAX),
            Err(EncodeError::EncodingFailure(_))
        ));
    }

    #[test]
    fn test_chunk_type_display() {
        assert_eq!(ChunkType::IHDR.to_string(), "IHDR");
    }
}
