//! Mipmap chain planning and box-filtered chain generation.
//!
//! The planning functions here are the sole source of truth for level counts
//! and byte sizes; every buffer allocation and payload offset in the crate
//! derives from them.

use crate::config::Compression;

/// Number of mip levels in a full chain, including the base level.
///
/// Each dimension halves independently per level (clamped to 1) until both
/// reach 1: `level_count(4, 4) == 3`, `level_count(8, 4) == 4`.
///
/// Dimensions must be non-zero.
pub fn level_count(width: u32, height: u32) -> u32 {
    debug_assert!(width > 0 && height > 0);
    let mut w = width << 1;
    let mut h = height << 1;
    let mut n = 0;

    while w != 1 || h != 1 {
        if w > 1 {
            w >>= 1;
        }
        if h > 1 {
            h >>= 1;
        }
        n += 1;
    }

    n
}

/// Byte size of `count` consecutive mip levels starting at `level`.
///
/// Level dimensions are `width >> level` and `height >> level`, clamped to a
/// minimum of 1. Uncompressed levels occupy `w * h * bytes_per_texel` bytes;
/// block-compressed levels occupy `ceil(w/4) * ceil(h/4)` blocks of 8 bytes
/// (BC1) or 16 bytes (BC2/BC3), in which case `bytes_per_texel` is unused.
pub fn mipmap_byte_size(
    width: u32,
    height: u32,
    bytes_per_texel: u32,
    level: u32,
    count: u32,
    compression: Compression,
) -> usize {
    let mut w = (width >> level).max(1) << 1;
    let mut h = (height >> level).max(1) << 1;
    let mut n = 0;
    let mut size: usize = 0;

    while n < count && (w != 1 || h != 1) {
        if w > 1 {
            w >>= 1;
        }
        if h > 1 {
            h >>= 1;
        }
        size += match compression.block_format() {
            None => w as usize * h as usize,
            Some(_) => ((w as usize + 3) >> 2) * ((h as usize + 3) >> 2),
        };
        n += 1;
    }

    size * match compression.block_format() {
        None => bytes_per_texel as usize,
        Some(block) => block.block_bytes(),
    }
}

/// Volume variant of [`mipmap_byte_size`]: the depth also halves per level
/// (clamped to 1) and each level's size is multiplied by the depth at that
/// level.
pub fn volume_mipmap_byte_size(
    width: u32,
    height: u32,
    depth: u32,
    bytes_per_texel: u32,
    level: u32,
    count: u32,
    compression: Compression,
) -> usize {
    let mut w = (width >> level).max(1) << 1;
    let mut h = (height >> level).max(1) << 1;
    let mut d = (depth >> level).max(1);
    let mut n = 0;
    let mut size: usize = 0;

    while n < count && (w != 1 || h != 1) {
        if w > 1 {
            w >>= 1;
        }
        if h > 1 {
            h >>= 1;
        }
        size += match compression.block_format() {
            None => w as usize * h as usize * d as usize,
            Some(_) => ((w as usize + 3) >> 2) * ((h as usize + 3) >> 2) * d as usize,
        };
        d = (d >> 1).max(1);
        n += 1;
    }

    size * match compression.block_format() {
        None => bytes_per_texel as usize,
        Some(block) => block.block_bytes(),
    }
}

/// Generate a full mip chain from a base level into one contiguous buffer.
///
/// `src` holds the base level in the source channel layout (`bpp` bytes per
/// texel, row-major). Level `k+1` is produced from level `k` by averaging
/// each 2×2 neighborhood per channel; when a dimension is already 1 the edge
/// texel is replicated. The result holds `count` levels back to back.
pub fn generate_chain(src: &[u8], width: u32, height: u32, bpp: usize, count: u32) -> Vec<u8> {
    let total = mipmap_byte_size(width, height, bpp as u32, 0, count, Compression::None);
    let mut chain = Vec::with_capacity(total);
    chain.extend_from_slice(&src[..width as usize * height as usize * bpp]);

    let mut prev_start = 0usize;
    for level in 1..count {
        let sw = (width >> (level - 1)).max(1) as usize;
        let sh = (height >> (level - 1)).max(1) as usize;
        let dw = (width >> level).max(1) as usize;
        let dh = (height >> level).max(1) as usize;

        let mut dst = vec![0u8; dw * dh * bpp];
        downsample_2x(
            &chain[prev_start..prev_start + sw * sh * bpp],
            sw,
            sh,
            bpp,
            &mut dst,
            dw,
            dh,
        );
        prev_start = chain.len();
        chain.extend_from_slice(&dst);
    }

    debug_assert_eq!(chain.len(), total);
    chain
}

/// Generate a volume mip chain: like [`generate_chain`] but averaging 2×2×2
/// neighborhoods, with the depth axis clamped the same way. `src` holds all
/// `depth` slices of the base level back to back.
pub fn generate_volume_chain(
    src: &[u8],
    width: u32,
    height: u32,
    depth: u32,
    bpp: usize,
    count: u32,
) -> Vec<u8> {
    let total = volume_mipmap_byte_size(width, height, depth, bpp as u32, 0, count, Compression::None);
    let base = width as usize * height as usize * depth as usize * bpp;
    let mut chain = Vec::with_capacity(total);
    chain.extend_from_slice(&src[..base]);

    let mut prev_start = 0usize;
    for level in 1..count {
        let sw = (width >> (level - 1)).max(1) as usize;
        let sh = (height >> (level - 1)).max(1) as usize;
        let sd = (depth >> (level - 1)).max(1) as usize;
        let dw = (width >> level).max(1) as usize;
        let dh = (height >> level).max(1) as usize;
        let dd = (depth >> level).max(1) as usize;

        let mut dst = vec![0u8; dw * dh * dd * bpp];
        downsample_2x2x2(
            &chain[prev_start..prev_start + sw * sh * sd * bpp],
            sw,
            sh,
            sd,
            bpp,
            &mut dst,
            dw,
            dh,
            dd,
        );
        prev_start = chain.len();
        chain.extend_from_slice(&dst);
    }

    debug_assert_eq!(chain.len(), total);
    chain
}

/// Average each 2×2 source neighborhood per channel, clamping coordinates at
/// the edges.
fn downsample_2x(src: &[u8], sw: usize, sh: usize, bpp: usize, dst: &mut [u8], dw: usize, dh: usize) {
    for y in 0..dh {
        let sy0 = (2 * y).min(sh - 1);
        let sy1 = (2 * y + 1).min(sh - 1);
        for x in 0..dw {
            let sx0 = (2 * x).min(sw - 1);
            let sx1 = (2 * x + 1).min(sw - 1);
            for c in 0..bpp {
                let sum = src[(sy0 * sw + sx0) * bpp + c] as u32
                    + src[(sy0 * sw + sx1) * bpp + c] as u32
                    + src[(sy1 * sw + sx0) * bpp + c] as u32
                    + src[(sy1 * sw + sx1) * bpp + c] as u32;
                dst[(y * dw + x) * bpp + c] = (sum / 4) as u8;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn downsample_2x2x2(
    src: &[u8],
    sw: usize,
    sh: usize,
    sd: usize,
    bpp: usize,
    dst: &mut [u8],
    dw: usize,
    dh: usize,
    dd: usize,
) {
    for z in 0..dd {
        let sz0 = (2 * z).min(sd - 1);
        let sz1 = (2 * z + 1).min(sd - 1);
        for y in 0..dh {
            let sy0 = (2 * y).min(sh - 1);
            let sy1 = (2 * y + 1).min(sh - 1);
            for x in 0..dw {
                let sx0 = (2 * x).min(sw - 1);
                let sx1 = (2 * x + 1).min(sw - 1);
                for c in 0..bpp {
                    let mut sum = 0u32;
                    for &(zz, yy, xx) in &[
                        (sz0, sy0, sx0),
                        (sz0, sy0, sx1),
                        (sz0, sy1, sx0),
                        (sz0, sy1, sx1),
                        (sz1, sy0, sx0),
                        (sz1, sy0, sx1),
                        (sz1, sy1, sx0),
                        (sz1, sy1, sx1),
                    ] {
                        sum += src[((zz * sh + yy) * sw + xx) * bpp + c] as u32;
                    }
                    dst[((z * dh + y) * dw + x) * bpp + c] = (sum / 8) as u8;
                }
            }
        }
    }
}
