//! DDS encoder - main API for encoding surface sets into containers.

use std::io::Write;

use crate::compress::compress_chain;
use crate::config::{Compression, OutputConfig};
use crate::convert::{convert_texels, swap_red_alpha, texel_layout, TexelLayout};
use crate::error::{DdsError, EncodeWarning};
use crate::header::HeaderParams;
use crate::mipmap::{
    generate_chain, generate_volume_chain, level_count, mipmap_byte_size, volume_mipmap_byte_size,
};
use crate::surface::{ChannelDepth, Layout, Surface, SurfaceSet};
use crate::types::DdsHeader;

/// Result of one encode pass: the container bytes plus any conditions the
/// encoder degraded under.
#[derive(Debug)]
pub struct EncodeReport {
    data: Vec<u8>,
    warnings: Vec<EncodeWarning>,
}

impl EncodeReport {
    /// The complete container: 128-byte header followed by the payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Non-fatal conditions under which encoding continued.
    pub fn warnings(&self) -> &[EncodeWarning] {
        &self.warnings
    }
}

/// DDS container encoder.
///
/// Stateless apart from its configuration; one encoder can serve any number
/// of encode calls.
pub struct DdsEncoder {
    config: OutputConfig,
}

impl DdsEncoder {
    /// Create an encoder with the given output configuration.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Encode a surface set into a complete DDS container.
    ///
    /// Block compression on a non-power-of-two base surface is downgraded to
    /// uncompressed output and reported in the returned warnings; the
    /// container stays valid.
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::VolumeCompressionUnsupported`] when block
    /// compression is requested for a volume layout. Surface set
    /// construction has already validated everything else.
    pub fn encode(&self, set: &SurfaceSet) -> Result<EncodeReport, DdsError> {
        let base = set.base();
        let width = base.width();
        let height = base.height();
        let channels = base.channels();

        let requested = self.config.compression();
        if set.layout() == Layout::Volume && requested.is_compressed() {
            return Err(DdsError::VolumeCompressionUnsupported);
        }

        let mut warnings = Vec::new();
        let mut compression = requested;
        if requested.is_compressed() && !(width.is_power_of_two() && height.is_power_of_two()) {
            tracing::warn!(
                width,
                height,
                "cannot compress non power-of-two sized image; writing uncompressed"
            );
            warnings.push(EncodeWarning::CompressionDisabled { width, height });
            compression = Compression::None;
        }

        tracing::debug!(
            width,
            height,
            layout = ?set.layout(),
            compression = %compression,
            "encoding surface set"
        );

        let texel = texel_layout(self.config.format(), channels);
        let num_mipmaps = if self.config.mipmaps() {
            level_count(width, height)
        } else {
            1
        };

        let params = HeaderParams {
            width,
            height,
            depth: match set.layout() {
                Layout::Volume => set.surfaces().len() as u32,
                _ => 0,
            },
            mipmap_count: num_mipmaps,
            mipmaps: self.config.mipmaps(),
            layout: set.layout(),
            block_format: compression.block_format(),
            texel,
        };
        let mut data = DdsHeader::new(&params).to_bytes();
        data.reserve(self.payload_size(set, &texel, num_mipmaps, compression));

        match set.layout() {
            Layout::Flat => {
                self.write_surface(&mut data, base, &texel, num_mipmaps, compression);
            }
            Layout::CubeMap => {
                for &face in set.cube_faces() {
                    self.write_surface(
                        &mut data,
                        &set.surfaces()[face],
                        &texel,
                        num_mipmaps,
                        compression,
                    );
                }
            }
            Layout::Volume => {
                self.write_volume(&mut data, set.surfaces(), &texel, num_mipmaps);
            }
        }

        Ok(EncodeReport { data, warnings })
    }

    /// Encode and write the container to a sink.
    ///
    /// # Errors
    ///
    /// Encoding errors as for [`encode`](Self::encode), plus
    /// [`DdsError::Io`] when the sink rejects the write.
    pub fn encode_to<W: Write>(
        &self,
        set: &SurfaceSet,
        sink: &mut W,
    ) -> Result<Vec<EncodeWarning>, DdsError> {
        let report = self.encode(set)?;
        sink.write_all(report.data())?;
        Ok(report.warnings)
    }

    /// Payload bytes after the header, for pre-allocation.
    fn payload_size(
        &self,
        set: &SurfaceSet,
        texel: &TexelLayout,
        num_mipmaps: u32,
        compression: Compression,
    ) -> usize {
        let base = set.base();
        match set.layout() {
            Layout::Flat => mipmap_byte_size(
                base.width(),
                base.height(),
                texel.bytes_per_texel,
                0,
                num_mipmaps,
                compression,
            ),
            Layout::CubeMap => {
                6 * mipmap_byte_size(
                    base.width(),
                    base.height(),
                    texel.bytes_per_texel,
                    0,
                    num_mipmaps,
                    compression,
                )
            }
            Layout::Volume => volume_mipmap_byte_size(
                base.width(),
                base.height(),
                set.surfaces().len() as u32,
                texel.bytes_per_texel,
                0,
                num_mipmaps,
                compression,
            ),
        }
    }

    /// Append one surface's full mip chain, compressed or converted.
    fn write_surface(
        &self,
        out: &mut Vec<u8>,
        surface: &Surface,
        texel: &TexelLayout,
        num_mipmaps: u32,
        compression: Compression,
    ) {
        let width = surface.width();
        let height = surface.height();
        let channels = surface.channels();
        let bpp = channels.bytes();

        let mut src = surface.data().to_vec();
        if self.config.swap_red_alpha() && channels == ChannelDepth::Rgba {
            swap_red_alpha(&mut src);
        }

        let chain = if num_mipmaps > 1 {
            generate_chain(&src, width, height, bpp, num_mipmaps)
        } else {
            src
        };

        match compression.block_format() {
            Some(format) => {
                out.extend_from_slice(&compress_chain(
                    &chain,
                    width,
                    height,
                    channels,
                    num_mipmaps,
                    format,
                ));
            }
            None => {
                let num_texels = chain.len() / bpp;
                let start = out.len();
                out.resize(start + num_texels * texel.bytes_per_texel as usize, 0);
                convert_texels(
                    &mut out[start..],
                    &chain,
                    self.config.format(),
                    channels,
                    num_texels,
                );
            }
        }
    }

    /// Append the volume payload: every base slice, then the shrinking slice
    /// stacks of each further mip level.
    fn write_volume(
        &self,
        out: &mut Vec<u8>,
        slices: &[Surface],
        texel: &TexelLayout,
        num_mipmaps: u32,
    ) {
        let width = slices[0].width();
        let height = slices[0].height();
        let depth = slices.len() as u32;
        let channels = slices[0].channels();
        let bpp = channels.bytes();

        let mut stack = Vec::with_capacity(width as usize * height as usize * depth as usize * bpp);
        for slice in slices {
            stack.extend_from_slice(slice.data());
        }
        if self.config.swap_red_alpha() && channels == ChannelDepth::Rgba {
            swap_red_alpha(&mut stack);
        }

        let chain = if num_mipmaps > 1 {
            generate_volume_chain(&stack, width, height, depth, bpp, num_mipmaps)
        } else {
            stack
        };

        let num_texels = chain.len() / bpp;
        let start = out.len();
        out.resize(start + num_texels * texel.bytes_per_texel as usize, 0);
        convert_texels(
            &mut out[start..],
            &chain,
            self.config.format(),
            channels,
            num_texels,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PixelFormat;
    use crate::types::{DDPF_FOURCC, DDSD_MIPMAPCOUNT};

    fn rgba_surface(label: &str, width: u32, height: u32, fill: [u8; 4]) -> Surface {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&fill);
        }
        Surface::new(label, width, height, ChannelDepth::Rgba, data).unwrap()
    }

    #[test]
    fn test_encode_flat_uncompressed() {
        let set = SurfaceSet::flat(rgba_surface("base", 4, 4, [10, 20, 30, 40]));
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::None));

        let report = encoder.encode(&set).unwrap();
        assert!(report.warnings().is_empty());

        let data = report.data();
        assert_eq!(data.len(), 128 + 64);
        assert_eq!(&data[0..4], b"DDS ");
        // BGRA byte order in the payload
        assert_eq!(&data[128..132], &[30, 20, 10, 40]);
    }

    #[test]
    fn test_encode_flat_with_mipmaps() {
        let set = SurfaceSet::flat(rgba_surface("base", 4, 4, [1, 2, 3, 4]));
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::None).with_mipmaps(true));

        let data = encoder.encode(&set).unwrap().into_data();
        // 64 + 16 + 4 payload bytes for the 3-level chain
        assert_eq!(data.len(), 128 + 84);

        let mips = u32::from_le_bytes([data[28], data[29], data[30], data[31]]);
        assert_eq!(mips, 3);
        let flags = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        assert!(flags & DDSD_MIPMAPCOUNT != 0);
    }

    #[test]
    fn test_mipmap_flags_set_for_single_level_chain() {
        // 1×1 base: the chain has one level, but requesting mipmaps still
        // marks the container as mipmapped
        let set = SurfaceSet::flat(rgba_surface("base", 1, 1, [1, 2, 3, 4]));
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::None).with_mipmaps(true));

        let data = encoder.encode(&set).unwrap().into_data();
        let flags = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        assert!(flags & DDSD_MIPMAPCOUNT != 0);
        let mips = u32::from_le_bytes([data[28], data[29], data[30], data[31]]);
        assert_eq!(mips, 1);
    }

    #[test]
    fn test_encode_flat_bc1() {
        let set = SurfaceSet::flat(rgba_surface("base", 4, 4, [255, 0, 0, 255]));
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::Bc1));

        let data = encoder.encode(&set).unwrap().into_data();
        assert_eq!(data.len(), 128 + 8);
        assert_eq!(&data[84..88], b"DXT1");

        // Solid red block: both endpoints are red in RGB565
        let c0 = u16::from_le_bytes([data[128], data[129]]);
        assert_eq!(c0, 0xF800);
    }

    #[test]
    fn test_encode_bc3_with_mipmaps() {
        let set = SurfaceSet::flat(rgba_surface("base", 8, 8, [0, 0, 0, 255]));
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::Bc3).with_mipmaps(true));

        let data = encoder.encode(&set).unwrap().into_data();
        // Levels 8×8, 4×4, 2×2, 1×1 → 4 + 1 + 1 + 1 blocks of 16 bytes
        assert_eq!(data.len(), 128 + 7 * 16);
        assert_eq!(&data[84..88], b"DXT5");
    }

    #[test]
    fn test_npot_compression_degrades() {
        let set = SurfaceSet::flat(rgba_surface("base", 6, 4, [1, 2, 3, 4]));
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::Bc1));

        let report = encoder.encode(&set).unwrap();
        assert_eq!(
            report.warnings(),
            &[EncodeWarning::CompressionDisabled {
                width: 6,
                height: 4
            }]
        );

        // Written uncompressed: 6×4 texels × 4 bytes, no FourCC flag
        let data = report.data();
        assert_eq!(data.len(), 128 + 96);
        let pf_flags = u32::from_le_bytes([data[80], data[81], data[82], data[83]]);
        assert_eq!(pf_flags & DDPF_FOURCC, 0);
    }

    #[test]
    fn test_volume_compression_is_fatal() {
        let slices = vec![
            rgba_surface("a", 4, 4, [0; 4]),
            rgba_surface("b", 4, 4, [0; 4]),
        ];
        let set = SurfaceSet::volume(slices).unwrap();
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::Bc1));

        assert!(matches!(
            encoder.encode(&set),
            Err(DdsError::VolumeCompressionUnsupported)
        ));
    }

    #[test]
    fn test_volume_compression_fatal_even_for_npot() {
        // The layout check fires before the power-of-two downgrade
        let slices = vec![
            rgba_surface("a", 6, 4, [0; 4]),
            rgba_surface("b", 6, 4, [0; 4]),
        ];
        let set = SurfaceSet::volume(slices).unwrap();
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::Bc3));

        assert!(matches!(
            encoder.encode(&set),
            Err(DdsError::VolumeCompressionUnsupported)
        ));
    }

    #[test]
    fn test_encode_volume_with_mipmaps() {
        let slices: Vec<_> = (0..4)
            .map(|i| rgba_surface(&format!("slice {i}"), 4, 4, [i as u8, 0, 0, 255]))
            .collect();
        let set = SurfaceSet::volume(slices).unwrap();
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::None).with_mipmaps(true));

        let data = encoder.encode(&set).unwrap().into_data();
        // 4 base slices (64 texels each) + 2 slices of 2×2 + 1 of 1×1 = 292 bytes
        assert_eq!(data.len(), 128 + 292);

        let depth = u32::from_le_bytes([data[24], data[25], data[26], data[27]]);
        assert_eq!(depth, 4);
    }

    #[test]
    fn test_encode_cube_map() {
        let faces = ["+x", "-x", "+y", "-y", "+z", "-z"]
            .iter()
            .map(|name| rgba_surface(name, 4, 4, [9, 9, 9, 9]))
            .collect();
        let set = SurfaceSet::cube_map(faces).unwrap();
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::None));

        let data = encoder.encode(&set).unwrap().into_data();
        // Six uncompressed 4×4 faces
        assert_eq!(data.len(), 128 + 6 * 64);

        let caps2 = u32::from_le_bytes([data[112], data[113], data[114], data[115]]);
        assert!(caps2 & crate::types::DDSCAPS2_CUBEMAP != 0);
    }

    #[test]
    fn test_cube_map_faces_written_in_face_order() {
        // Surfaces arrive shuffled; payload must follow +x..-z order
        let labels = ["-z", "+x", "-y", "+z", "-x", "+y"];
        let fills: Vec<[u8; 4]> = (0..6).map(|i| [100 + i as u8, 0, 0, 255]).collect();
        let faces = labels
            .iter()
            .zip(&fills)
            .map(|(name, fill)| rgba_surface(name, 1, 1, *fill))
            .collect();
        let set = SurfaceSet::cube_map(faces).unwrap();
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::None));

        let data = encoder.encode(&set).unwrap().into_data();
        // One BGRA texel per face; red sample lands at byte 2
        let face_reds: Vec<u8> = (0..6).map(|i| data[128 + i * 4 + 2]).collect();
        // +x is surface 1 (fill 101), -x surface 4 (104), ...
        assert_eq!(face_reds, vec![101, 104, 105, 102, 103, 100]);
    }

    #[test]
    fn test_swap_red_alpha_applies_to_rgba() {
        let set = SurfaceSet::flat(rgba_surface("base", 1, 1, [10, 20, 30, 40]));
        let encoder =
            DdsEncoder::new(OutputConfig::new(Compression::None).with_swap_red_alpha(true));

        let data = encoder.encode(&set).unwrap().into_data();
        // Swapped source is [40, 20, 30, 10]; BGRA output
        assert_eq!(&data[128..132], &[30, 20, 40, 10]);
    }

    #[test]
    fn test_swap_red_alpha_ignores_three_channel() {
        let surface =
            Surface::new("base", 1, 1, ChannelDepth::Rgb, vec![10, 20, 30]).unwrap();
        let set = SurfaceSet::flat(surface);
        let encoder =
            DdsEncoder::new(OutputConfig::new(Compression::None).with_swap_red_alpha(true));

        let data = encoder.encode(&set).unwrap().into_data();
        assert_eq!(&data[128..131], &[30, 20, 10]);
    }

    #[test]
    fn test_encode_packed_format() {
        let set = SurfaceSet::flat(rgba_surface("base", 2, 2, [255, 0, 0, 255]));
        let encoder = DdsEncoder::new(
            OutputConfig::new(Compression::None).with_format(PixelFormat::R5g6b5),
        );

        let data = encoder.encode(&set).unwrap().into_data();
        assert_eq!(data.len(), 128 + 4 * 2);
        assert_eq!(u16::from_le_bytes([data[128], data[129]]), 0xF800);
    }

    #[test]
    fn test_encode_to_writes_container() {
        let set = SurfaceSet::flat(rgba_surface("base", 4, 4, [0, 0, 0, 255]));
        let encoder = DdsEncoder::new(OutputConfig::new(Compression::Bc1));

        let mut sink = Vec::new();
        let warnings = encoder.encode_to(&set, &mut sink).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(sink.len(), 136);
        assert_eq!(&sink[0..4], b"DDS ");
    }
}
