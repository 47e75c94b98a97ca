//! Byte codec between raw host buffers and weight sequences.
//!
//! The wire layout is tightly packed 4-byte little-endian unsigned integers.
//! Decoding never fails: a buffer whose length is not a multiple of 4 simply
//! loses its trailing 1-3 bytes.
//!
//! The encoder is *not* the inverse of the decoder. It writes only the two
//! least-significant bytes of every element, so values above `u16::MAX` are
//! truncated and the output is half the width `decode` expects. It is kept
//! under a name that says so.

/// Width in bytes of one encoded weight.
pub const WORD_BYTES: usize = 4;

/// Number of bytes [`encode_truncated`] emits per element.
pub const TRUNCATED_WORD_BYTES: usize = 2;

/// Decode `floor(bytes.len() / 4)` little-endian `u32` values.
pub fn decode(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(WORD_BYTES)
        .map(|w| {
            u32::from(w[0]) | u32::from(w[1]) << 8 | u32::from(w[2]) << 16 | u32::from(w[3]) << 24
        })
        .collect()
}

/// Encode each value as its two low bytes, least-significant first.
///
/// Lossy: bits 16-31 are dropped, and `decode(&encode_truncated(xs))` packs
/// pairs of truncated values into single words.
pub fn encode_truncated(values: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * TRUNCATED_WORD_BYTES);
    for &v in values {
        out.push(v as u8);
        out.push((v >> 8) as u8);
    }
    out
}
