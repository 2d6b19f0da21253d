//! BC1/DXT1 block compression.
//!
//! BC1 compresses 4×4 blocks of RGB(A) pixels to 8 bytes:
//! - 2 bytes: color0 (RGB565)
//! - 2 bytes: color1 (RGB565)
//! - 4 bytes: 16 2-bit indices (one per pixel)
//!
//! The block has two modes, selected by the endpoint ordering. With
//! color0 > color1 the 2-bit indices address a 4-color palette:
//! - 00: color0
//! - 01: color1
//! - 10: (2*color0 + color1) / 3
//! - 11: (color0 + 2*color1) / 3
//!
//! With color0 <= color1 index 10 is the midpoint and index 11 decodes as
//! fully transparent black; this mode carries 1-bit punch-through alpha.

use crate::color::*;

/// BC1 block encoder.
pub struct Bc1Encoder;

impl Bc1Encoder {
    /// Compress a 4×4 RGBA block to 8 bytes.
    ///
    /// If any pixel has alpha below 128 the block is written in the
    /// transparent (3-color) mode and those pixels decode as transparent
    /// black; otherwise the opaque 4-color mode is used.
    ///
    /// # Arguments
    ///
    /// * `pixels` - 16 RGBA pixels in row-major order (64 bytes total)
    ///
    /// # Returns
    ///
    /// 8-byte compressed block
    pub fn compress_block(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        if pixels.iter().any(|p| p[3] < 128) {
            Self::compress_transparent_block(pixels)
        } else {
            Self::compress_color_block(pixels)
        }
    }

    /// Compress a 4×4 block in the opaque 4-color mode, ignoring alpha.
    ///
    /// BC2 and BC3 blocks embed their color half in this mode regardless of
    /// the alpha samples, so this is shared with those encoders.
    pub fn compress_color_block(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        // Find color bounding box
        let (c0, c1) = Self::find_endpoints(pixels);

        // Ensure c0 > c1 for 4-color mode
        let (c0, c1) = if c0 > c1 { (c0, c1) } else { (c1, c0) };

        // Generate indices
        let indices = Self::generate_indices(pixels, c0, c1);

        // Pack into 8 bytes
        let mut output = [0u8; 8];
        output[0..2].copy_from_slice(&c0.to_le_bytes());
        output[2..4].copy_from_slice(&c1.to_le_bytes());
        output[4..8].copy_from_slice(&indices.to_le_bytes());
        output
    }

    /// Compress a 4×4 block in the transparent 3-color mode.
    ///
    /// Endpoints are ordered c0 <= c1 to select the mode; pixels with alpha
    /// below 128 get the reserved transparent index.
    fn compress_transparent_block(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        let (max, min) = Self::find_endpoints(pixels);

        // c0 <= c1 selects the 3-color + transparent palette
        let (c0, c1) = (min, max);

        let palette = [
            rgb565_to_rgb888(c0),
            rgb565_to_rgb888(c1),
            midpoint_rgb565(c0, c1),
        ];

        let mut indices: u32 = 0;
        for (i, pixel) in pixels.iter().enumerate() {
            let index = if pixel[3] < 128 {
                3u8
            } else {
                let mut best_dist = u32::MAX;
                let mut best_index = 0u8;
                for (idx, pal_color) in palette.iter().enumerate() {
                    let dist = color_distance_squared(pixel, pal_color);
                    if dist < best_dist {
                        best_dist = dist;
                        best_index = idx as u8;
                    }
                }
                best_index
            };
            indices |= (index as u32) << (i * 2);
        }

        let mut output = [0u8; 8];
        output[0..2].copy_from_slice(&c0.to_le_bytes());
        output[2..4].copy_from_slice(&c1.to_le_bytes());
        output[4..8].copy_from_slice(&indices.to_le_bytes());
        output
    }

    /// Find optimal color endpoints using bounding box method.
    ///
    /// Returns (max_color, min_color) as RGB565 values.
    fn find_endpoints(pixels: &[[u8; 4]; 16]) -> (u16, u16) {
        let mut min_r = 255u8;
        let mut min_g = 255u8;
        let mut min_b = 255u8;
        let mut max_r = 0u8;
        let mut max_g = 0u8;
        let mut max_b = 0u8;

        for pixel in pixels {
            min_r = min_r.min(pixel[0]);
            min_g = min_g.min(pixel[1]);
            min_b = min_b.min(pixel[2]);
            max_r = max_r.max(pixel[0]);
            max_g = max_g.max(pixel[1]);
            max_b = max_b.max(pixel[2]);
        }

        let c0 = rgb888_to_rgb565(max_r, max_g, max_b);
        let c1 = rgb888_to_rgb565(min_r, min_g, min_b);

        (c0, c1)
    }

    /// Generate 2-bit indices for each pixel in the opaque 4-color mode.
    ///
    /// Finds the closest color in the 4-color palette for each pixel.
    fn generate_indices(pixels: &[[u8; 4]; 16], c0: u16, c1: u16) -> u32 {
        // Build 4-color palette
        let palette = [
            rgb565_to_rgb888(c0),
            rgb565_to_rgb888(c1),
            interpolate_rgb565(c0, c1, 1), // 2/3 c0, 1/3 c1
            interpolate_rgb565(c0, c1, 2), // 1/3 c0, 2/3 c1
        ];

        let mut indices: u32 = 0;

        for (i, pixel) in pixels.iter().enumerate() {
            // Find closest palette color
            let mut best_dist = u32::MAX;
            let mut best_index = 0u8;

            for (idx, pal_color) in palette.iter().enumerate() {
                let dist = color_distance_squared(pixel, pal_color);
                if dist < best_dist {
                    best_dist = dist;
                    best_index = idx as u8;
                }
            }

            // Pack 2-bit index
            indices |= (best_index as u32) << (i * 2);
        }

        indices
    }
}
