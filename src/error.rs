//! Error types for the converter
//!
//! This module defines all error types used throughout the crate,
//! providing detailed error information for different failure scenarios.

use thiserror::Error;

/// Main error type for the converter
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input data validation errors
    #[error("Input data error: {0}")]
    InputData(#[from] InputDataError),

    /// Encoding process errors
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file exceeds the addressable size ceiling
    #[error("Could not completely read file {path} as it is too long ({len} bytes, max supported {max})")]
    SourceTooLarge { path: String, len: u64, max: u64 },

    /// Source file yielded fewer bytes than its reported length
    #[error("Could not completely read file {path}: expected {expected} bytes, got {actual}")]
    TruncatedRead {
        path: String,
        expected: u64,
        actual: u64,
    },
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unsupported sample rate
    #[error("Unsupported sample rate: {0} Hz")]
    UnsupportedSampleRate(u32),

    /// Unsupported bitrate
    #[error("Unsupported bitrate: {0} kbps")]
    UnsupportedBitrate(u32),

    /// Unsupported sample bit depth
    #[error("Unsupported bit depth: {0} bits per sample")]
    UnsupportedBitDepth(u8),

    /// Incompatible sample rate and bitrate combination
    #[error("Incompatible sample rate ({sample_rate} Hz) and bitrate ({bitrate} kbps) combination")]
    IncompatibleRateCombination { sample_rate: u32, bitrate: u32 },

    /// Unsupported input/output channel mapping
    #[error("Unsupported channel mapping: {input} channel(s) in, {output} channel(s) out")]
    UnsupportedChannelMapping { input: u8, output: u8 },

    /// Variable bitrate requested on a constant-bitrate encoder
    #[error("Variable bitrate encoding is not supported")]
    VbrUnsupported,

    /// The encoder backend could not be initialized for this configuration
    #[error("Encoder initialization failed: {0}")]
    Backend(String),
}

/// Input data validation errors
#[derive(Debug, Error)]
pub enum InputDataError {
    /// PCM byte length is not a whole number of sample frames
    #[error("Misaligned PCM data: {len} bytes is not a multiple of the {frame_bytes}-byte sample frame")]
    MisalignedPcm { len: usize, frame_bytes: usize },
}

/// Encoding process errors
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The LAME backend rejected an encode call
    #[error("LAME encode error: {0}")]
    Lame(String),

    /// The LAME backend rejected the final flush
    #[error("LAME flush error: {0}")]
    Flush(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Specialized result types for different modules
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type EncodingResult<T> = std::result::Result<T, EncodingError>;
