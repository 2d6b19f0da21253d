//! DDS (DirectDraw Surface) texture container encoding.
//!
//! This crate encodes decoded 8-bit-per-channel pixel surfaces into DDS
//! format, with optional BC1/BC2/BC3 (DXT1/DXT3/DXT5) block compression and
//! mipmap chain generation. Input may be a single flat surface, a six-face
//! cube map, or a depth-sliced volume; output goes to any `io::Write` sink.
//!
//! # Features
//!
//! - **Block compression**: BC1 (8 bytes per 4×4 block, 1-bit alpha), BC2
//!   (explicit 4-bit alpha) and BC3 (interpolated alpha), both 16 bytes
//! - **Uncompressed formats**: RGB8, RGBA8, BGR8, ABGR8, R5G6B5, RGBA4,
//!   RGB5A1, RGB10A2, L8, L8A8, or a default derived from the source
//! - **Mipmap generation**: full chain down to 1×1 via box filtering, for
//!   flat, cube-map and volume surfaces
//! - **Layout validation**: cube-map face detection by layer label, volume
//!   slice consistency checks
//!
//! # Example
//!
//! ```no_run
//! use ddstex::{Compression, DdsEncoder, OutputConfig, Surface, SurfaceSet};
//!
//! let pixels = vec![0u8; 256 * 256 * 4];
//! let surface = Surface::new("base", 256, 256, ddstex::ChannelDepth::Rgba, pixels)?;
//! let set = SurfaceSet::flat(surface);
//!
//! let config = OutputConfig::new(Compression::Bc1).with_mipmaps(true);
//! let report = DdsEncoder::new(config).encode(&set)?;
//! assert!(report.warnings().is_empty());
//! std::fs::write("texture.dds", report.data())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Container layout
//!
//! Every file starts with a 128-byte header (4-byte `"DDS "` magic plus the
//! 124-byte header structure, all fields little-endian). The payload follows
//! in a fixed traversal order:
//!
//! - flat: base level, then successively halved mip levels
//! - cube map: six faces in +X, −X, +Y, −Y, +Z, −Z order, each fully
//!   mip-chained
//! - volume: all depth slices at base resolution, then a separately built
//!   mip chain that also averages across slices (compression is not
//!   available for volumes)
//!
//! # Degraded conditions
//!
//! Compression requested for a non-power-of-two surface is silently disabled;
//! the encode continues uncompressed and the condition is reported through
//! [`EncodeReport::warnings`] as well as a `tracing` warning. Fatal
//! conditions (unsupported channel depth, failed cube-map/volume
//! classification, volume with compression, sink errors) abort before or
//! during the write with a descriptive [`DdsError`].

mod bc1;
mod bc2;
mod bc3;
mod color;
mod compress;
mod config;
mod convert;
mod encoder;
mod error;
mod header;
mod layout;
mod mipmap;
mod surface;
mod types;

// Public API
pub use config::{BlockFormat, Compression, OutputConfig, PixelFormat};
pub use encoder::{DdsEncoder, EncodeReport};
pub use error::{DdsError, EncodeWarning};
pub use surface::{ChannelDepth, Layout, Surface, SurfaceSet};
pub use types::{DdsHeader, DdsPixelFormat};

// Re-exported for advanced usage and size planning
pub use bc1::Bc1Encoder;
pub use bc2::Bc2Encoder;
pub use bc3::Bc3Encoder;
pub use convert::{texel_layout, TexelLayout};
pub use layout::{detect_cube_faces, validate_volume};
pub use mipmap::{
    generate_chain, generate_volume_chain, level_count, mipmap_byte_size,
    volume_mipmap_byte_size,
};
