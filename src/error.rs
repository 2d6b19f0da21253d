//! Error and warning types for DDS encoding.

use std::io;
use thiserror::Error;

/// Errors that can occur while building a surface set or encoding it.
#[derive(Debug, Error)]
pub enum DdsError {
    /// Source channel depth outside 1..=4.
    #[error("unsupported channel depth {0}; only grayscale and RGB sources with 1-4 channels are accepted")]
    UnsupportedChannelDepth(u8),

    /// Surface dimensions are zero.
    #[error("invalid dimensions: {0}×{1}")]
    InvalidDimensions(u32, u32),

    /// Pixel buffer length does not match width × height × channels.
    #[error("surface data is {actual} bytes, expected {expected} for {width}×{height}×{channels}")]
    DataSizeMismatch {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },

    /// Cube-map layout was requested but could not be confirmed.
    #[error("cannot save image as cube map: {0}")]
    NotACubeMap(String),

    /// Volume layout was requested but could not be confirmed.
    #[error("cannot save image as volume map: {0}")]
    NotAVolume(String),

    /// Volume layout and block compression are mutually exclusive.
    #[error("cannot save volume map with compression")]
    VolumeCompressionUnsupported,

    /// Sink write failure; the output is not valid.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Non-fatal conditions under which encoding degraded but continued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeWarning {
    /// Compression was requested for a non-power-of-two surface and has been
    /// disabled; the output is written uncompressed.
    #[error("cannot compress non power-of-two sized image ({width}×{height}); saved image will not be compressed")]
    CompressionDisabled { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DdsError::UnsupportedChannelDepth(5);
        assert!(err.to_string().contains("channel depth 5"));

        let err = DdsError::InvalidDimensions(0, 64);
        assert_eq!(err.to_string(), "invalid dimensions: 0×64");

        let err = DdsError::NotACubeMap("not all layers are the same size".to_string());
        assert!(err.to_string().contains("cube map"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DdsError = io_err.into();
        assert!(matches!(err, DdsError::Io(_)));
    }

    #[test]
    fn test_warning_display() {
        let warning = EncodeWarning::CompressionDisabled {
            width: 100,
            height: 100,
        };
        assert!(warning.to_string().contains("100×100"));
    }
}
