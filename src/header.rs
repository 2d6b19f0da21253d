//! DDS header construction.

use crate::compress::compressed_size;
use crate::config::BlockFormat;
use crate::convert::TexelLayout;
use crate::surface::Layout;
use crate::types::*;

/// Everything the header depends on, resolved by the encoder.
#[derive(Debug, Clone)]
pub(crate) struct HeaderParams {
    pub width: u32,
    pub height: u32,
    /// Number of volume slices; 0 for flat and cube-map containers.
    pub depth: u32,
    pub mipmap_count: u32,
    /// Whether mipmaps were requested. The mipmap flags follow the request,
    /// so even a 1×1 surface gets them when mipmaps are enabled.
    pub mipmaps: bool,
    pub layout: Layout,
    /// `None` writes an uncompressed pixel format with explicit masks.
    pub block_format: Option<BlockFormat>,
    pub texel: TexelLayout,
}

impl DdsHeader {
    /// Build the header for a container.
    ///
    /// Uncompressed containers record a row pitch, compressed ones the
    /// linear size of the base level. The channel masks and bit count are
    /// always filled in from the texel layout, even alongside a FourCC.
    pub(crate) fn new(params: &HeaderParams) -> Self {
        let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
        let pitch_or_linear_size = match params.block_format {
            Some(format) => {
                flags |= DDSD_LINEARSIZE;
                compressed_size(params.width, params.height, format) as u32
            }
            None => {
                flags |= DDSD_PITCH;
                params.width * params.texel.bytes_per_texel
            }
        };
        if params.mipmaps {
            flags |= DDSD_MIPMAPCOUNT;
        }
        if params.layout == Layout::Volume {
            flags |= DDSD_DEPTH;
        }

        let mut pf_flags = match params.block_format {
            Some(_) => DDPF_FOURCC,
            None if params.texel.luminance => DDPF_LUMINANCE,
            None => DDPF_RGB,
        };
        if params.block_format.is_none() && params.texel.has_alpha {
            pf_flags |= DDPF_ALPHAPIXELS;
        }
        let fourcc = match params.block_format {
            Some(format) => format.fourcc(),
            None => [0; 4],
        };

        let mut caps = DDSCAPS_TEXTURE;
        if params.mipmaps {
            caps |= DDSCAPS_COMPLEX | DDSCAPS_MIPMAP;
        }
        let caps2 = match params.layout {
            Layout::Flat => 0,
            Layout::CubeMap => {
                caps |= DDSCAPS_COMPLEX;
                DDSCAPS2_CUBEMAP | DDSCAPS2_CUBEMAP_ALL_FACES
            }
            Layout::Volume => {
                caps |= DDSCAPS_COMPLEX;
                DDSCAPS2_VOLUME
            }
        };

        DdsHeader {
            magic: *b"DDS ",
            size: 124,
            flags,
            height: params.height,
            width: params.width,
            pitch_or_linear_size,
            depth: params.depth,
            mipmap_count: params.mipmap_count,
            reserved1: [0; 11],
            pixel_format: DdsPixelFormat {
                size: 32,
                flags: pf_flags,
                fourcc,
                rgb_bit_count: params.texel.bytes_per_texel * 8,
                r_bit_mask: params.texel.r_mask,
                g_bit_mask: params.texel.g_mask,
                b_bit_mask: params.texel.b_mask,
                a_bit_mask: params.texel.a_mask,
            },
            caps,
            caps2,
            caps3: 0,
            caps4: 0,
            reserved2: 0,
        }
    }

    /// Convert header to byte array for writing to file.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(128);

        // Magic
        bytes.extend_from_slice(&self.magic);

        // Header fields
        bytes.extend_from_slice(&self.size.to_le_bytes());
        bytes.extend_from_slice(&self.flags.to_le_bytes());
        bytes.extend_from_slice(&self.height.to_le_bytes());
        bytes.extend_from_slice(&self.width.to_le_bytes());
        bytes.extend_from_slice(&self.pitch_or_linear_size.to_le_bytes());
        bytes.extend_from_slice(&self.depth.to_le_bytes());
        bytes.extend_from_slice(&self.mipmap_count.to_le_bytes());

        // Reserved1 (11 × u32)
        for &val in &self.reserved1 {
            bytes.extend_from_slice(&val.to_le_bytes());
        }

        // Pixel format (32 bytes)
        bytes.extend_from_slice(&self.pixel_format.size.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.flags.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.fourcc);
        bytes.extend_from_slice(&self.pixel_format.rgb_bit_count.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.r_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.g_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.b_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.a_bit_mask.to_le_bytes());

        // Caps
        bytes.extend_from_slice(&self.caps.to_le_bytes());
        bytes.extend_from_slice(&self.caps2.to_le_bytes());
        bytes.extend_from_slice(&self.caps3.to_le_bytes());
        bytes.extend_from_slice(&self.caps4.to_le_bytes());
        bytes.extend_from_slice(&self.reserved2.to_le_bytes());

        bytes
    }
}
