//! BC2/DXT3 block compression.
//!
//! BC2 compresses 4×4 blocks of RGBA pixels to 16 bytes:
//! - 8 bytes: explicit alpha, 16 4-bit values (one per pixel)
//! - 8 bytes: RGB compression (same layout as an opaque BC1 block)

use crate::bc1::Bc1Encoder;

/// BC2 block encoder.
pub struct Bc2Encoder;

impl Bc2Encoder {
    /// Compress a 4×4 RGBA block to 16 bytes.
    ///
    /// Alpha is quantized to 4 bits per pixel by truncation; the color half
    /// is always written in the opaque 4-color mode.
    ///
    /// # Arguments
    ///
    /// * `pixels` - 16 RGBA pixels in row-major order (64 bytes total)
    ///
    /// # Returns
    ///
    /// 16-byte compressed block (8 bytes alpha + 8 bytes RGB)
    pub fn compress_block(pixels: &[[u8; 4]; 16]) -> [u8; 16] {
        let mut output = [0u8; 16];

        // Explicit alpha (first 8 bytes)
        let alpha_block = Self::compress_alpha(pixels);
        output[0..8].copy_from_slice(&alpha_block);

        // Compress RGB channels (last 8 bytes)
        let rgb_block = Bc1Encoder::compress_color_block(pixels);
        output[8..16].copy_from_slice(&rgb_block);

        output
    }

    /// Pack 16 alpha samples into 4-bit nibbles, pixel 0 in the low nibble
    /// of the first byte.
    fn compress_alpha(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        let mut bits = 0u64;
        for (i, pixel) in pixels.iter().enumerate() {
            bits |= ((pixel[3] >> 4) as u64) << (4 * i);
        }
        bits.to_le_bytes()
    }
}
