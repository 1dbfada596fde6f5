//! Configuration management for the encoder
//!
//! This module provides the configuration structure and validation logic
//! for all encoding parameters: sample rate, bit depth, channel layout,
//! bitrate and quality.

use crate::error::{ConfigError, ConfigResult};

/// Supported sample rates (Hz)
pub const SUPPORTED_SAMPLE_RATES: &[u32] = &[
    8000, 11025, 12000, // MPEG-2.5
    16000, 22050, 24000, // MPEG-2
    32000, 44100, 48000, // MPEG-1
];

/// Supported constant bitrates (kbps)
pub const SUPPORTED_BITRATES: &[u32] = &[
    8, 16, 24, 32, 40, 48, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320,
];

/// Bytes per 16-bit sample
pub const BYTES_PER_SAMPLE: usize = 2;

/// Number of audio channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Mono audio (1 channel)
    Mono = 1,
    /// Stereo audio (2 channels)
    Stereo = 2,
}

impl Channels {
    /// Channel count as a number
    pub fn count(self) -> usize {
        self as usize
    }
}

/// Encoder speed/quality trade-off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// Fastest encoding, lowest quality
    Fastest,
    /// The encoder's default balance
    Standard,
    /// Slowest encoding, best quality
    Best,
}

/// MPEG version, determined by the sample rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpegVersion {
    /// MPEG-1 (32/44.1/48 kHz)
    Mpeg1,
    /// MPEG-2 (16/22.05/24 kHz)
    Mpeg2,
    /// MPEG-2.5 (8/11.025/12 kHz)
    Mpeg25,
}

/// Encoder configuration
///
/// Defaults describe the fixed format this converter handles: 8000 Hz
/// 16-bit signed big-endian mono PCM in, 64 kbps constant-bitrate stereo
/// MP3 out, fastest encoder preset.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Input sample rate (Hz)
    pub sample_rate: u32,
    /// Input bit depth; only 16-bit samples are supported
    pub bits_per_sample: u8,
    /// Input channel layout
    pub channels: Channels,
    /// Output channel layout
    pub output_mode: Channels,
    /// Constant bitrate (kbps)
    pub bitrate: u32,
    /// Speed/quality preset
    pub quality: Quality,
    /// Variable bitrate flag; must stay `false`, the encoder is CBR-only
    pub vbr: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 8000,
            bits_per_sample: 16,
            channels: Channels::Mono,
            output_mode: Channels::Stereo,
            bitrate: 64,
            quality: Quality::Fastest,
            vbr: false,
        }
    }
}

impl EncoderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sample rate
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the input channel layout
    pub fn channels(mut self, channels: Channels) -> Self {
        self.channels = channels;
        self
    }

    /// Set the output channel layout
    pub fn output_mode(mut self, output_mode: Channels) -> Self {
        self.output_mode = output_mode;
        self
    }

    /// Set the bitrate
    pub fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = bitrate;
        self
    }

    /// Set the quality preset
    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(ConfigError::UnsupportedSampleRate(self.sample_rate));
        }

        if self.bits_per_sample != 16 {
            return Err(ConfigError::UnsupportedBitDepth(self.bits_per_sample));
        }

        if !SUPPORTED_BITRATES.contains(&self.bitrate) {
            return Err(ConfigError::UnsupportedBitrate(self.bitrate));
        }

        if self.vbr {
            return Err(ConfigError::VbrUnsupported);
        }

        // Downmixing stereo input to mono output is not implemented
        if self.channels == Channels::Stereo && self.output_mode == Channels::Mono {
            return Err(ConfigError::UnsupportedChannelMapping {
                input: self.channels as u8,
                output: self.output_mode as u8,
            });
        }

        // Each MPEG version caps the bitrate range
        let compatible = match self.mpeg_version() {
            MpegVersion::Mpeg25 => self.bitrate <= 64,
            MpegVersion::Mpeg2 => self.bitrate <= 160,
            MpegVersion::Mpeg1 => (32..=320).contains(&self.bitrate),
        };
        if !compatible {
            return Err(ConfigError::IncompatibleRateCombination {
                sample_rate: self.sample_rate,
                bitrate: self.bitrate,
            });
        }

        Ok(())
    }

    /// Get the MPEG version for the configured sample rate
    pub fn mpeg_version(&self) -> MpegVersion {
        match self.sample_rate {
            32000 | 44100 | 48000 => MpegVersion::Mpeg1,
            16000 | 22050 | 24000 => MpegVersion::Mpeg2,
            _ => MpegVersion::Mpeg25,
        }
    }

    /// Number of PCM samples per channel consumed by one MP3 frame
    pub fn samples_per_frame(&self) -> usize {
        match self.mpeg_version() {
            MpegVersion::Mpeg1 => 1152,
            MpegVersion::Mpeg2 | MpegVersion::Mpeg25 => 576,
        }
    }

    /// Size in bytes of one interleaved input sample frame
    pub fn frame_bytes(&self) -> usize {
        BYTES_PER_SAMPLE * self.channels.count()
    }
}
