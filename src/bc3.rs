//! BC3/DXT5 block compression.
//!
//! BC3 compresses 4×4 blocks of RGBA pixels to 16 bytes:
//! - 8 bytes: Alpha channel compression
//!   - 1 byte: alpha0
//!   - 1 byte: alpha1
//!   - 6 bytes: 16 3-bit indices (one per pixel)
//! - 8 bytes: RGB compression (same layout as an opaque BC1 block)

use crate::bc1::Bc1Encoder;

/// BC3 block encoder.
pub struct Bc3Encoder;

impl Bc3Encoder {
    /// Compress a 4×4 RGBA block to 16 bytes.
    ///
    /// The color half is always written in the opaque 4-color mode; alpha
    /// lives entirely in the interpolated alpha block.
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

        // Compress alpha channel (first 8 bytes)
        let alpha_block = Self::compress_alpha(pixels);
        output[0..8].copy_from_slice(&alpha_block);

        // Compress RGB channels (last 8 bytes)
        let rgb_block = Bc1Encoder::compress_color_block(pixels);
        output[8..16].copy_from_slice(&rgb_block);

        output
    }

    /// Compress alpha channel to 8 bytes.
    ///
    /// Uses 8-alpha interpolation mode:
    /// - alpha0, alpha1 (2 bytes)
    /// - 6 interpolated values
    /// - 16 3-bit indices (6 bytes)
    fn compress_alpha(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        // Find min/max alpha values
        let mut min_alpha = 255u8;
        let mut max_alpha = 0u8;

        for pixel in pixels {
            min_alpha = min_alpha.min(pixel[3]);
            max_alpha = max_alpha.max(pixel[3]);
        }

        // Use max as alpha0, min as alpha1 for 8-alpha mode
        let (alpha0, alpha1) = (max_alpha, min_alpha);

        // Generate alpha palette
        let palette = Self::build_alpha_palette(alpha0, alpha1);

        // Generate 3-bit indices
        let indices = Self::generate_alpha_indices(pixels, &palette);

        // Pack into 8 bytes
        let mut output = [0u8; 8];
        output[0] = alpha0;
        output[1] = alpha1;
        output[2..8].copy_from_slice(&indices[0..6]);

        output
    }

    /// Build 8-value alpha palette from two endpoints.
    fn build_alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
        let a0 = alpha0 as u16;
        let a1 = alpha1 as u16;

        [
            alpha0,
            alpha1,
            ((6 * a0 + a1) / 7) as u8,     // 6/7 a0, 1/7 a1
            ((5 * a0 + 2 * a1) / 7) as u8, // 5/7 a0, 2/7 a1
            ((4 * a0 + 3 * a1) / 7) as u8, // 4/7 a0, 3/7 a1
            ((3 * a0 + 4 * a1) / 7) as u8, // 3/7 a0, 4/7 a1
            ((2 * a0 + 5 * a1) / 7) as u8, // 2/7 a0, 5/7 a1
            ((a0 + 6 * a1) / 7) as u8,     // 1/7 a0, 6/7 a1
        ]
    }

    /// Generate 3-bit indices for alpha values.
    fn generate_alpha_indices(pixels: &[[u8; 4]; 16], palette: &[u8; 8]) -> [u8; 8] {
        let mut indices = 0u64;

        for (i, pixel) in pixels.iter().enumerate() {
            let alpha = pixel[3];

            // Find closest palette value
            let mut best_dist = u32::MAX;
            let mut best_index = 0u8;

            for (idx, &pal_alpha) in palette.iter().enumerate() {
                let dist = (alpha as i32 - pal_alpha as i32).unsigned_abs();
                if dist < best_dist {
                    best_dist = dist;
                    best_index = idx as u8;
                }
            }

            // Pack 3-bit index
            indices |= (best_index as u64) << (i * 3);
        }

        // Only the first 6 bytes (48 bits) are used
        indices.to_le_bytes()
    }
}
