//! Encoder configuration: compression, target pixel format, flags.

use std::fmt;

/// Block compression applied to the output payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// No compression; texels are written in the configured pixel format.
    None,
    /// BC1/DXT1: 8 bytes per 4×4 block, opaque or 1-bit alpha.
    Bc1,
    /// BC2/DXT3: 16 bytes per 4×4 block, explicit 4-bit alpha.
    Bc2,
    /// BC3/DXT5: 16 bytes per 4×4 block, interpolated alpha.
    Bc3,
}

impl Compression {
    /// Returns the block format, or `None` for uncompressed output.
    pub fn block_format(self) -> Option<BlockFormat> {
        match self {
            Compression::None => None,
            Compression::Bc1 => Some(BlockFormat::Bc1),
            Compression::Bc2 => Some(BlockFormat::Bc2),
            Compression::Bc3 => Some(BlockFormat::Bc3),
        }
    }

    pub fn is_none(self) -> bool {
        self == Compression::None
    }

    pub fn is_compressed(self) -> bool {
        self != Compression::None
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::None => write!(f, "None"),
            Compression::Bc1 => write!(f, "BC1"),
            Compression::Bc2 => write!(f, "BC2"),
            Compression::Bc3 => write!(f, "BC3"),
        }
    }
}

/// One of the three 4×4-block compressed formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    Bc1,
    Bc2,
    Bc3,
}

impl BlockFormat {
    /// Compressed bytes per 4×4 block.
    pub fn block_bytes(self) -> usize {
        match self {
            BlockFormat::Bc1 => 8,
            BlockFormat::Bc2 | BlockFormat::Bc3 => 16,
        }
    }

    /// FourCC tag stored in the container header.
    pub fn fourcc(self) -> [u8; 4] {
        match self {
            BlockFormat::Bc1 => *b"DXT1",
            BlockFormat::Bc2 => *b"DXT3",
            BlockFormat::Bc3 => *b"DXT5",
        }
    }
}

/// Target texel encoding for uncompressed output.
///
/// `Default` derives the encoding directly from the source channel depth:
/// gray → 8-bit luminance, gray+alpha → luminance+alpha, RGB(A) → the
/// standard BGR(A) byte order with the matching bit masks. The named formats
/// re-pack every texel; packed formats truncate to the top bits of each
/// channel rather than rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Default,
    Rgb8,
    Rgba8,
    Bgr8,
    Abgr8,
    R5g6b5,
    Rgba4,
    Rgb5a1,
    Rgb10a2,
    L8,
    L8a8,
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelFormat::Default => "Default",
            PixelFormat::Rgb8 => "RGB8",
            PixelFormat::Rgba8 => "RGBA8",
            PixelFormat::Bgr8 => "BGR8",
            PixelFormat::Abgr8 => "ABGR8",
            PixelFormat::R5g6b5 => "R5G6B5",
            PixelFormat::Rgba4 => "RGBA4",
            PixelFormat::Rgb5a1 => "RGB5A1",
            PixelFormat::Rgb10a2 => "RGB10A2",
            PixelFormat::L8 => "L8",
            PixelFormat::L8a8 => "L8A8",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for one encode operation.
///
/// Immutable once built; thread the same value through every call of an
/// encode pass. The pixel format only affects uncompressed payloads (block
/// compression has its own texel layout), but it still determines the bit
/// masks recorded in the header.
///
/// # Example
///
/// ```
/// use ddstex::{Compression, OutputConfig, PixelFormat};
///
/// let config = OutputConfig::new(Compression::None)
///     .with_format(PixelFormat::R5g6b5)
///     .with_mipmaps(true);
/// assert_eq!(config.format(), PixelFormat::R5g6b5);
/// assert!(config.mipmaps());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    compression: Compression,
    format: PixelFormat,
    mipmaps: bool,
    swap_red_alpha: bool,
}

impl OutputConfig {
    /// Create a configuration with the given compression, default pixel
    /// format, no mipmaps and no channel swapping.
    pub fn new(compression: Compression) -> Self {
        Self {
            compression,
            format: PixelFormat::Default,
            mipmaps: false,
            swap_red_alpha: false,
        }
    }

    /// Set the target pixel encoding for uncompressed output.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable mipmap chain generation.
    pub fn with_mipmaps(mut self, mipmaps: bool) -> Self {
        self.mipmaps = mipmaps;
        self
    }

    /// Swap the red and alpha channels of 4-channel sources before encoding.
    pub fn with_swap_red_alpha(mut self, swap: bool) -> Self {
        self.swap_red_alpha = swap;
        self
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn mipmaps(&self) -> bool {
        self.mipmaps
    }

    pub fn swap_red_alpha(&self) -> bool {
        self.swap_red_alpha
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(Compression::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_format_bytes() {
        assert_eq!(BlockFormat::Bc1.block_bytes(), 8);
        assert_eq!(BlockFormat::Bc2.block_bytes(), 16);
        assert_eq!(BlockFormat::Bc3.block_bytes(), 16);
    }

    #[test]
    fn test_block_format_fourcc() {
        assert_eq!(&BlockFormat::Bc1.fourcc(), b"DXT1");
        assert_eq!(&BlockFormat::Bc2.fourcc(), b"DXT3");
        assert_eq!(&BlockFormat::Bc3.fourcc(), b"DXT5");
    }

    #[test]
    fn test_compression_block_format() {
        assert_eq!(Compression::None.block_format(), None);
        assert_eq!(Compression::Bc1.block_format(), Some(BlockFormat::Bc1));
        assert!(Compression::Bc3.is_compressed());
        assert!(Compression::None.is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.compression(), Compression::None);
        assert_eq!(config.format(), PixelFormat::Default);
        assert!(!config.mipmaps());
        assert!(!config.swap_red_alpha());
    }

    #[test]
    fn test_config_builder() {
        let config = OutputConfig::new(Compression::Bc3)
            .with_mipmaps(true)
            .with_swap_red_alpha(true);
        assert_eq!(config.compression(), Compression::Bc3);
        assert!(config.mipmaps());
        assert!(config.swap_red_alpha());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(PixelFormat::R5g6b5.to_string(), "R5G6B5");
        assert_eq!(PixelFormat::Rgb10a2.to_string(), "RGB10A2");
        assert_eq!(Compression::Bc2.to_string(), "BC2");
    }
}
