//! DDS container structures and format constants.

/// DDS file header (124 bytes plus the 4-byte magic).
///
/// Based on Microsoft DDS specification:
/// https://docs.microsoft.com/en-us/windows/win32/direct3ddds/dds-header
#[repr(C)]
#[derive(Debug, Clone)]
pub struct DdsHeader {
    /// Magic number: "DDS " (0x20534444)
    pub magic: [u8; 4],
    /// Size of structure (124 bytes)
    pub size: u32,
    /// Flags indicating which fields are valid
    pub flags: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Surface width in pixels
    pub width: u32,
    /// Pitch (uncompressed) or linear size of the base level (compressed)
    pub pitch_or_linear_size: u32,
    /// Depth for volume textures
    pub depth: u32,
    /// Number of mipmap levels
    pub mipmap_count: u32,
    /// Reserved
    pub reserved1: [u32; 11],
    /// Pixel format structure (32 bytes)
    pub pixel_format: DdsPixelFormat,
    /// Surface complexity capabilities
    pub caps: u32,
    /// Additional capabilities (cube-map faces, volume)
    pub caps2: u32,
    /// Unused
    pub caps3: u32,
    /// Unused
    pub caps4: u32,
    /// Unused
    pub reserved2: u32,
}

/// DDS pixel format structure (32 bytes).
#[repr(C)]
#[derive(Debug, Clone)]
pub struct DdsPixelFormat {
    /// Size of structure (32 bytes)
    pub size: u32,
    /// Pixel format flags
    pub flags: u32,
    /// FourCC code (e.g., "DXT1", "DXT5"); zero for uncompressed
    pub fourcc: [u8; 4],
    /// Bits per texel
    pub rgb_bit_count: u32,
    /// Red bit mask
    pub r_bit_mask: u32,
    /// Green bit mask
    pub g_bit_mask: u32,
    /// Blue bit mask
    pub b_bit_mask: u32,
    /// Alpha bit mask
    pub a_bit_mask: u32,
}

// DDS header flags (DDSD_*)
pub const DDSD_CAPS: u32 = 0x1;
pub const DDSD_HEIGHT: u32 = 0x2;
pub const DDSD_WIDTH: u32 = 0x4;
pub const DDSD_PITCH: u32 = 0x8;
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
pub const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub const DDSD_LINEARSIZE: u32 = 0x80000;
pub const DDSD_DEPTH: u32 = 0x800000;

// DDS pixel format flags (DDPF_*)
pub const DDPF_ALPHAPIXELS: u32 = 0x1;
pub const DDPF_FOURCC: u32 = 0x4;
pub const DDPF_RGB: u32 = 0x40;
pub const DDPF_LUMINANCE: u32 = 0x20000;

// DDS caps flags (DDSCAPS_*)
pub const DDSCAPS_COMPLEX: u32 = 0x8;
pub const DDSCAPS_TEXTURE: u32 = 0x1000;
pub const DDSCAPS_MIPMAP: u32 = 0x400000;

// DDS caps2 flags (DDSCAPS2_*)
pub const DDSCAPS2_CUBEMAP: u32 = 0x200;
pub const DDSCAPS2_CUBEMAP_POSITIVEX: u32 = 0x400;
pub const DDSCAPS2_CUBEMAP_NEGATIVEX: u32 = 0x800;
pub const DDSCAPS2_CUBEMAP_POSITIVEY: u32 = 0x1000;
pub const DDSCAPS2_CUBEMAP_NEGATIVEY: u32 = 0x2000;
pub const DDSCAPS2_CUBEMAP_POSITIVEZ: u32 = 0x4000;
pub const DDSCAPS2_CUBEMAP_NEGATIVEZ: u32 = 0x8000;
pub const DDSCAPS2_VOLUME: u32 = 0x200000;

/// All six cube-map face bits.
pub const DDSCAPS2_CUBEMAP_ALL_FACES: u32 = DDSCAPS2_CUBEMAP_POSITIVEX
    | DDSCAPS2_CUBEMAP_NEGATIVEX
    | DDSCAPS2_CUBEMAP_POSITIVEY
    | DDSCAPS2_CUBEMAP_NEGATIVEY
    | DDSCAPS2_CUBEMAP_POSITIVEZ
    | DDSCAPS2_CUBEMAP_NEGATIVEZ;
