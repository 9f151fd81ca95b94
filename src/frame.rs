//! Length-prefixed framing of a text payload.
//!
//! A frame is a 32 bit big endian count of payload bits followed by one
//! byte per payload character, every byte emitted most significant bit
//! first. The header counts only the payload bits, never itself, which
//! makes extraction self-delimiting.

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::StegoError;
use crate::result::Result;

/// Number of bits in the big endian length prefix.
pub const LENGTH_HEADER_BITS: usize = 32;

/// A framed payload, ready for bit-wise embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
}

impl Frame {
    /// Frames `payload` for embedding.
    ///
    /// Every character must be a single byte code point (0-255), the
    /// Latin-1 range. Anything above that cannot be expressed in 8 bits
    /// and fails with [`StegoError::InvalidPayload`].
    pub fn new(payload: &str) -> Result<Self> {
        let mut body = Vec::with_capacity(payload.len());
        for c in payload.chars() {
            let code = c as u32;
            if code > u8::MAX as u32 {
                return Err(StegoError::InvalidPayload(c));
            }
            body.push(code as u8);
        }

        let mut bytes = Vec::with_capacity(LENGTH_HEADER_BITS / 8 + body.len());
        bytes.write_u32::<BigEndian>((body.len() * 8) as u32)?;
        bytes.extend_from_slice(&body);

        Ok(Self { bytes })
    }

    /// Total number of bits this frame occupies, header included.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Iterates all frame bits, most significant bit of each byte first.
    pub fn iter_bits(&self) -> BitIterator<'_> {
        BitIterator::new(&self.bytes)
    }
}

/// Walks the bits of a byte slice, most significant bit first.
pub struct BitIterator<'a> {
    bytes: &'a [u8],
    i: usize,
}

impl<'a> BitIterator<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, i: 0 }
    }
}

impl Iterator for BitIterator<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = self.bytes.get(self.i / 8)?;
        let shift = 7 - (self.i % 8);
        self.i += 1;

        Some((byte >> shift) & 1)
    }
}

/// Checks that a frame of `frame_bits` fits a carrier of `capacity_bits`.
pub fn validate_capacity(frame_bits: usize, capacity_bits: usize) -> Result<()> {
    if frame_bits > capacity_bits {
        return Err(StegoError::PayloadTooLarge {
            required: frame_bits,
            capacity: capacity_bits,
        });
    }

    Ok(())
}

/// Folds the first 32 extracted bits into the payload bit count they announce.
pub fn parse_length_header<I>(mut bits: I) -> Result<usize>
where
    I: Iterator<Item = u8>,
{
    let mut length: u32 = 0;
    for available in 0..LENGTH_HEADER_BITS {
        match bits.next() {
            Some(bit) => length = (length << 1) | u32::from(bit & 1),
            None => return Err(StegoError::BufferTooSmall(available)),
        }
    }

    Ok(length as usize)
}

/// Checks a parsed header against the capacity left after the header.
pub fn validate_payload_length(length: usize, capacity_bits: usize) -> Result<()> {
    if length == 0 || length > capacity_bits.saturating_sub(LENGTH_HEADER_BITS) {
        return Err(StegoError::CorruptPayload(length));
    }

    Ok(())
}

/// Regroups extracted payload bits into the original text.
///
/// Bits are consumed 8 at a time, most significant first, and each byte
/// becomes the character with that code point. The character check is
/// defensive: every value 0-255 maps to a `char`, but a decoder must not
/// return garbage silently if that ever stops holding.
pub fn bits_to_payload(bits: &[u8]) -> Result<String> {
    if bits.len() % 8 != 0 {
        return Err(StegoError::InvalidPayloadLength(bits.len()));
    }

    let mut payload = String::with_capacity(bits.len() / 8);
    for chunk in bits.chunks_exact(8) {
        let code = chunk
            .iter()
            .fold(0u32, |acc, bit| (acc << 1) | u32::from(bit & 1));
        let c = char::from_u32(code).ok_or(StegoError::InvalidCharacterCode(code))?;
        payload.push(c);
    }

    Ok(payload)
}
