//! PCM data processing utilities
//!
//! This module provides helpers for working with raw 16-bit signed
//! big-endian PCM byte buffers.

use crate::config::EncoderConfig;

/// Convert big-endian PCM bytes into host-order samples
///
/// The input must be a whole number of 16-bit samples; callers validate
/// alignment before conversion.
pub fn samples_from_be_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

/// Duration in seconds of a PCM byte buffer under the given format
pub fn duration_secs(byte_len: usize, config: &EncoderConfig) -> f64 {
    let byte_rate = config.sample_rate as usize * config.frame_bytes();
    byte_len as f64 / byte_rate as f64
}
