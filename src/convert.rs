//! Pixel format conversion and texel bit packing.
//!
//! Every target encoding is composed with explicit shifts and masks and
//! emitted in little-endian byte order, so the output is identical on any
//! host. Packed formats keep the top bits of each channel (truncation, not
//! rounding), matching the container's historical behavior.

use crate::config::PixelFormat;
use crate::surface::ChannelDepth;

/// Byte layout of one target texel: size, alpha/luminance classification and
/// the RGBA bit masks recorded in the container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexelLayout {
    pub bytes_per_texel: u32,
    pub has_alpha: bool,
    pub luminance: bool,
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
}

/// Resolve a target pixel format against the source channel depth.
///
/// `PixelFormat::Default` derives the layout directly from the source:
/// gray → 8-bit luminance, gray+alpha → 8+8, RGB(A) → BGR(A) byte order.
pub fn texel_layout(format: PixelFormat, channels: ChannelDepth) -> TexelLayout {
    match format {
        PixelFormat::Default => match channels {
            ChannelDepth::Gray => TexelLayout {
                bytes_per_texel: 1,
                has_alpha: false,
                luminance: true,
                r_mask: 0x0000_00ff,
                g_mask: 0,
                b_mask: 0,
                a_mask: 0,
            },
            ChannelDepth::GrayAlpha => TexelLayout {
                bytes_per_texel: 2,
                has_alpha: true,
                luminance: false,
                r_mask: 0x0000_00ff,
                g_mask: 0,
                b_mask: 0,
                a_mask: 0x0000_ff00,
            },
            ChannelDepth::Rgb => TexelLayout {
                bytes_per_texel: 3,
                has_alpha: false,
                luminance: false,
                r_mask: 0x00ff_0000,
                g_mask: 0x0000_ff00,
                b_mask: 0x0000_00ff,
                a_mask: 0,
            },
            ChannelDepth::Rgba => TexelLayout {
                bytes_per_texel: 4,
                has_alpha: true,
                luminance: false,
                r_mask: 0x00ff_0000,
                g_mask: 0x0000_ff00,
                b_mask: 0x0000_00ff,
                a_mask: 0xff00_0000,
            },
        },
        PixelFormat::Rgb8 => TexelLayout {
            bytes_per_texel: 3,
            has_alpha: false,
            luminance: false,
            r_mask: 0x00ff_0000,
            g_mask: 0x0000_ff00,
            b_mask: 0x0000_00ff,
            a_mask: 0xff00_0000,
        },
        PixelFormat::Rgba8 => TexelLayout {
            bytes_per_texel: 4,
            has_alpha: true,
            luminance: false,
            r_mask: 0x00ff_0000,
            g_mask: 0x0000_ff00,
            b_mask: 0x0000_00ff,
            a_mask: 0xff00_0000,
        },
        PixelFormat::Bgr8 => TexelLayout {
            bytes_per_texel: 4,
            has_alpha: false,
            luminance: false,
            r_mask: 0x0000_00ff,
            g_mask: 0x0000_ff00,
            b_mask: 0x00ff_0000,
            a_mask: 0,
        },
        PixelFormat::Abgr8 => TexelLayout {
            bytes_per_texel: 4,
            has_alpha: true,
            luminance: false,
            r_mask: 0x0000_00ff,
            g_mask: 0x0000_ff00,
            b_mask: 0x00ff_0000,
            a_mask: 0xff00_0000,
        },
        PixelFormat::R5g6b5 => TexelLayout {
            bytes_per_texel: 2,
            has_alpha: false,
            luminance: false,
            r_mask: 0x0000_f800,
            g_mask: 0x0000_07e0,
            b_mask: 0x0000_001f,
            a_mask: 0,
        },
        PixelFormat::Rgba4 => TexelLayout {
            bytes_per_texel: 2,
            has_alpha: true,
            luminance: false,
            r_mask: 0x0000_0f00,
            g_mask: 0x0000_00f0,
            b_mask: 0x0000_000f,
            a_mask: 0x0000_f000,
        },
        PixelFormat::Rgb5a1 => TexelLayout {
            bytes_per_texel: 2,
            has_alpha: true,
            luminance: false,
            r_mask: 0x0000_7c00,
            g_mask: 0x0000_03e0,
            b_mask: 0x0000_001f,
            a_mask: 0x0000_8000,
        },
        PixelFormat::Rgb10a2 => TexelLayout {
            bytes_per_texel: 4,
            has_alpha: true,
            luminance: false,
            r_mask: 0x3ff0_0000,
            g_mask: 0x000f_fc00,
            b_mask: 0x0000_03ff,
            a_mask: 0xc000_0000,
        },
        PixelFormat::L8 => TexelLayout {
            bytes_per_texel: 1,
            has_alpha: false,
            luminance: true,
            r_mask: 0x0000_00ff,
            g_mask: 0,
            b_mask: 0,
            a_mask: 0,
        },
        PixelFormat::L8a8 => TexelLayout {
            bytes_per_texel: 2,
            has_alpha: true,
            luminance: true,
            r_mask: 0x0000_00ff,
            g_mask: 0,
            b_mask: 0,
            a_mask: 0x0000_ff00,
        },
    }
}

/// Decode texel `i` of a source buffer to canonical (r, g, b, a).
///
/// Gray sources replicate the gray value into r, g and b; alpha defaults to
/// 255 when the source carries none.
pub(crate) fn decode_texel(src: &[u8], i: usize, channels: ChannelDepth) -> [u8; 4] {
    match channels {
        ChannelDepth::Gray => {
            let v = src[i];
            [v, v, v, 255]
        }
        ChannelDepth::GrayAlpha => {
            let v = src[2 * i];
            [v, v, v, src[2 * i + 1]]
        }
        ChannelDepth::Rgb => [src[3 * i], src[3 * i + 1], src[3 * i + 2], 255],
        ChannelDepth::Rgba => [
            src[4 * i],
            src[4 * i + 1],
            src[4 * i + 2],
            src[4 * i + 3],
        ],
    }
}

pub fn pack_r5g6b5(r: u8, g: u8, b: u8) -> u16 {
    (((r as u16 >> 3) & 0x1f) << 11) | (((g as u16 >> 2) & 0x3f) << 5) | ((b as u16 >> 3) & 0x1f)
}

pub fn pack_rgba4(r: u8, g: u8, b: u8, a: u8) -> u16 {
    (((a as u16 >> 4) & 0x0f) << 12)
        | (((r as u16 >> 4) & 0x0f) << 8)
        | (((g as u16 >> 4) & 0x0f) << 4)
        | ((b as u16 >> 4) & 0x0f)
}

pub fn pack_rgb5a1(r: u8, g: u8, b: u8, a: u8) -> u16 {
    (((a as u16 >> 7) & 0x01) << 15)
        | (((r as u16 >> 3) & 0x1f) << 10)
        | (((g as u16 >> 3) & 0x1f) << 5)
        | ((b as u16 >> 3) & 0x1f)
}

/// The 10-bit channels are left-shifted 8-bit values, not rounded.
pub fn pack_rgb10a2(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (((a as u32 >> 6) & 0x003) << 30)
        | ((((r as u32) << 2) & 0x3ff) << 20)
        | ((((g as u32) << 2) & 0x3ff) << 10)
        | (((b as u32) << 2) & 0x3ff)
}

/// Rec. 601 luminance with truncation. The fractional result is cut off, not
/// rounded.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (r as f32 * 0.3 + g as f32 * 0.59 + b as f32 * 0.11) as u8
}

/// Convert `num_texels` texels from the source channel layout into the
/// target encoding.
///
/// `dst` must hold `num_texels * layout.bytes_per_texel` bytes. The pass is
/// strictly forward over a flat texel index, so it applies unchanged to a
/// single level, a whole mip chain, or a volume chain.
pub fn convert_texels(
    dst: &mut [u8],
    src: &[u8],
    format: PixelFormat,
    channels: ChannelDepth,
    num_texels: usize,
) {
    if format == PixelFormat::Default {
        convert_default(dst, src, channels, num_texels);
        return;
    }

    for i in 0..num_texels {
        let [r, g, b, a] = decode_texel(src, i, channels);
        match format {
            PixelFormat::Rgb8 => {
                dst[3 * i] = b;
                dst[3 * i + 1] = g;
                dst[3 * i + 2] = r;
            }
            PixelFormat::Rgba8 => {
                dst[4 * i] = b;
                dst[4 * i + 1] = g;
                dst[4 * i + 2] = r;
                dst[4 * i + 3] = a;
            }
            PixelFormat::Bgr8 => {
                dst[4 * i] = r;
                dst[4 * i + 1] = g;
                dst[4 * i + 2] = b;
                dst[4 * i + 3] = 255;
            }
            PixelFormat::Abgr8 => {
                dst[4 * i] = r;
                dst[4 * i + 1] = g;
                dst[4 * i + 2] = b;
                dst[4 * i + 3] = a;
            }
            PixelFormat::R5g6b5 => {
                dst[2 * i..2 * i + 2].copy_from_slice(&pack_r5g6b5(r, g, b).to_le_bytes());
            }
            PixelFormat::Rgba4 => {
                dst[2 * i..2 * i + 2].copy_from_slice(&pack_rgba4(r, g, b, a).to_le_bytes());
            }
            PixelFormat::Rgb5a1 => {
                dst[2 * i..2 * i + 2].copy_from_slice(&pack_rgb5a1(r, g, b, a).to_le_bytes());
            }
            PixelFormat::Rgb10a2 => {
                dst[4 * i..4 * i + 4].copy_from_slice(&pack_rgb10a2(r, g, b, a).to_le_bytes());
            }
            PixelFormat::L8 => {
                dst[i] = luminance(r, g, b);
            }
            PixelFormat::L8a8 => {
                dst[2 * i] = luminance(r, g, b);
                dst[2 * i + 1] = a;
            }
            PixelFormat::Default => unreachable!(),
        }
    }
}

/// The default encoding copies source samples without arithmetic: gray data
/// stays as-is, RGB(A) is reordered to BGR(A).
fn convert_default(dst: &mut [u8], src: &[u8], channels: ChannelDepth, num_texels: usize) {
    match channels {
        ChannelDepth::Gray => dst[..num_texels].copy_from_slice(&src[..num_texels]),
        ChannelDepth::GrayAlpha => {
            dst[..2 * num_texels].copy_from_slice(&src[..2 * num_texels]);
        }
        ChannelDepth::Rgb => {
            for i in 0..num_texels {
                dst[3 * i] = src[3 * i + 2];
                dst[3 * i + 1] = src[3 * i + 1];
                dst[3 * i + 2] = src[3 * i];
            }
        }
        ChannelDepth::Rgba => {
            for i in 0..num_texels {
                dst[4 * i] = src[4 * i + 2];
                dst[4 * i + 1] = src[4 * i + 1];
                dst[4 * i + 2] = src[4 * i];
                dst[4 * i + 3] = src[4 * i + 3];
            }
        }
    }
}

/// Swap the red and alpha samples of a 4-channel buffer in place.
pub(crate) fn swap_red_alpha(data: &mut [u8]) {
    for texel in data.chunks_exact_mut(4) {
        texel.swap(0, 3);
    }
}
