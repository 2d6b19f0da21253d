//! Input surfaces and surface sets.

use crate::error::DdsError;
use crate::layout;
use image::RgbaImage;

/// Number of 8-bit channels per source texel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelDepth {
    /// Single gray channel.
    Gray,
    /// Gray plus alpha.
    GrayAlpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ChannelDepth {
    /// Map a raw channel count to a depth; anything outside 1..=4 is
    /// rejected before any processing.
    pub fn from_count(count: u8) -> Result<Self, DdsError> {
        match count {
            1 => Ok(ChannelDepth::Gray),
            2 => Ok(ChannelDepth::GrayAlpha),
            3 => Ok(ChannelDepth::Rgb),
            4 => Ok(ChannelDepth::Rgba),
            other => Err(DdsError::UnsupportedChannelDepth(other)),
        }
    }

    /// Bytes per source texel.
    pub fn bytes(self) -> usize {
        match self {
            ChannelDepth::Gray => 1,
            ChannelDepth::GrayAlpha => 2,
            ChannelDepth::Rgb => 3,
            ChannelDepth::Rgba => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelDepth::GrayAlpha | ChannelDepth::Rgba)
    }
}

/// One encodable unit: a flat image, one cube-map face, or one volume slice.
///
/// Pixel data is row-major, one 8-bit sample per channel. The label is used
/// only for cube-map face classification.
#[derive(Debug, Clone)]
pub struct Surface {
    label: String,
    width: u32,
    height: u32,
    channels: ChannelDepth,
    data: Vec<u8>,
}

impl Surface {
    /// Create a surface from raw pixel bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::InvalidDimensions`] for zero-sized surfaces and
    /// [`DdsError::DataSizeMismatch`] when the buffer length does not equal
    /// `width * height * channels`.
    pub fn new(
        label: impl Into<String>,
        width: u32,
        height: u32,
        channels: ChannelDepth,
        data: Vec<u8>,
    ) -> Result<Self, DdsError> {
        if width == 0 || height == 0 {
            return Err(DdsError::InvalidDimensions(width, height));
        }
        let expected = width as usize * height as usize * channels.bytes();
        if data.len() != expected {
            return Err(DdsError::DataSizeMismatch {
                width,
                height,
                channels: channels.bytes() as u8,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            label: label.into(),
            width,
            height,
            channels,
            data,
        })
    }

    /// Create an RGBA surface from an [`image::RgbaImage`].
    pub fn from_rgba(label: impl Into<String>, image: &RgbaImage) -> Result<Self, DdsError> {
        Self::new(
            label,
            image.width(),
            image.height(),
            ChannelDepth::Rgba,
            image.as_raw().clone(),
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> ChannelDepth {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// How a surface set maps onto the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A single 2D surface.
    Flat,
    /// Six same-size faces in +X, −X, +Y, −Y, +Z, −Z order.
    CubeMap,
    /// N equal-size depth slices of a 3D texture.
    Volume,
}

/// An ordered collection of surfaces with a validated layout.
///
/// All surfaces in a set share width, height and channel depth; the
/// constructors enforce this before any encoding begins.
#[derive(Debug, Clone)]
pub struct SurfaceSet {
    surfaces: Vec<Surface>,
    layout: Layout,
    // For cube maps: index into `surfaces` for each face, in face order.
    cube_faces: [usize; 6],
}

impl SurfaceSet {
    /// A single flat surface.
    pub fn flat(surface: Surface) -> Self {
        Self {
            surfaces: vec![surface],
            layout: Layout::Flat,
            cube_faces: [0; 6],
        }
    }

    /// Classify exactly six surfaces as a cube map by matching their labels
    /// against the face naming vocabularies.
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::NotACubeMap`] when a face cannot be resolved or
    /// the faces differ in size or channel depth.
    pub fn cube_map(surfaces: Vec<Surface>) -> Result<Self, DdsError> {
        let cube_faces = layout::detect_cube_faces(&surfaces)?;
        Ok(Self {
            surfaces,
            layout: Layout::CubeMap,
            cube_faces,
        })
    }

    /// Treat the surfaces as depth slices of a volume, in index order.
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::NotAVolume`] when the slices differ in size or
    /// channel depth.
    pub fn volume(surfaces: Vec<Surface>) -> Result<Self, DdsError> {
        layout::validate_volume(&surfaces)?;
        Ok(Self {
            surfaces,
            layout: Layout::Volume,
            cube_faces: [0; 6],
        })
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// The surface whose dimensions define the container header.
    pub fn base(&self) -> &Surface {
        match self.layout {
            Layout::CubeMap => &self.surfaces[self.cube_faces[0]],
            _ => &self.surfaces[0],
        }
    }

    pub(crate) fn cube_faces(&self) -> &[usize; 6] {
        &self.cube_faces
    }
}
