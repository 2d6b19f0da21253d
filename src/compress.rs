//! Block compression of whole surfaces and mip chains.
//!
//! Splits a surface into 4×4 texel blocks, replicating the last row and
//! column into partial blocks, and feeds each block to the selected encoder.

use crate::bc1::Bc1Encoder;
use crate::bc2::Bc2Encoder;
use crate::bc3::Bc3Encoder;
use crate::config::BlockFormat;
use crate::convert::decode_texel;
use crate::surface::ChannelDepth;

/// Number of bytes the compressed form of a `width` × `height` level takes.
pub(crate) fn compressed_size(width: u32, height: u32, format: BlockFormat) -> usize {
    let bw = (width as usize + 3) / 4;
    let bh = (height as usize + 3) / 4;
    bw * bh * format.block_bytes()
}

/// Compress a contiguous mip chain of `levels` levels.
///
/// `chain` holds the levels back to back in the source channel layout, base
/// level first, each level's dimensions halving (clamped to 1).
pub(crate) fn compress_chain(
    chain: &[u8],
    width: u32,
    height: u32,
    channels: ChannelDepth,
    levels: u32,
    format: BlockFormat,
) -> Vec<u8> {
    let mut out = Vec::new();
    let mut offset = 0usize;
    for level in 0..levels {
        let w = (width >> level).max(1);
        let h = (height >> level).max(1);
        let len = w as usize * h as usize * channels.bytes();
        compress_level(&chain[offset..offset + len], w, h, channels, format, &mut out);
        offset += len;
    }
    out
}

/// Compress one level, appending the blocks to `out` in row-major block
/// order.
pub(crate) fn compress_level(
    src: &[u8],
    width: u32,
    height: u32,
    channels: ChannelDepth,
    format: BlockFormat,
    out: &mut Vec<u8>,
) {
    let blocks_x = (width + 3) / 4;
    let blocks_y = (height + 3) / 4;

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let block = extract_block(src, width, height, channels, bx, by);
            match format {
                BlockFormat::Bc1 => out.extend_from_slice(&Bc1Encoder::compress_block(&block)),
                BlockFormat::Bc2 => out.extend_from_slice(&Bc2Encoder::compress_block(&block)),
                BlockFormat::Bc3 => out.extend_from_slice(&Bc3Encoder::compress_block(&block)),
            }
        }
    }
}

/// Gather a 4×4 block of canonical RGBA texels, clamping coordinates so the
/// last row and column replicate into partial blocks.
fn extract_block(
    src: &[u8],
    width: u32,
    height: u32,
    channels: ChannelDepth,
    bx: u32,
    by: u32,
) -> [[u8; 4]; 16] {
    let mut block = [[0u8; 4]; 16];
    for y in 0..4 {
        let py = (by * 4 + y).min(height - 1);
        for x in 0..4 {
            let px = (bx * 4 + x).min(width - 1);
            let i = (py * width + px) as usize;
            block[(y * 4 + x) as usize] = decode_texel(src, i, channels);
        }
    }
    block
}
