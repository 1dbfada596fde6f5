//! Encoder session handling
//!
//! An [`EncoderSession`] is the stateful, single-use handle to the block
//! encoder. It accepts raw PCM in chunks, buffers partial frames
//! internally, and emits compressed bytes as whole MP3 frames become
//! available. [`LameSession`] is the production implementation, backed by
//! libmp3lame through the `mp3lame-encoder` crate; the native handle is
//! released by `Drop` on every exit path.

use mp3lame_encoder::{
    max_required_buffer_size, Bitrate, Builder, DualPcm, Encoder, FlushNoGap, InterleavedPcm,
    Mode, MonoPcm, Quality as LameQuality,
};

use crate::config::{Channels, EncoderConfig, Quality, BYTES_PER_SAMPLE};
use crate::error::{ConfigError, EncodingError, EncodingResult, Error};
use crate::pcm;

/// Single-use handle to a block encoder
///
/// `push` accepts chunks no larger than [`pcm_chunk_size`] and returns
/// whatever bytes the encoder emitted for that chunk, possibly none while
/// it is still buffering. `finish` consumes the session, flushing any
/// internally buffered audio.
///
/// [`pcm_chunk_size`]: EncoderSession::pcm_chunk_size
pub trait EncoderSession {
    /// Recommended maximum number of PCM bytes per `push`
    fn pcm_chunk_size(&self) -> usize;

    /// Submit one chunk of raw PCM, returning any encoded bytes
    fn push(&mut self, chunk: &[u8]) -> EncodingResult<Vec<u8>>;

    /// Flush the encoder and release it, returning trailing encoded bytes
    fn finish(self) -> EncodingResult<Vec<u8>>
    where
        Self: Sized;
}

/// LAME-backed encoder session
pub struct LameSession {
    encoder: Encoder,
    input_channels: Channels,
    output_mode: Channels,
    chunk_size: usize,
}

impl LameSession {
    /// Open a session for the given configuration
    ///
    /// Fails with a configuration error if LAME cannot be initialized for
    /// the requested format combination.
    pub fn open(config: &EncoderConfig) -> Result<Self, Error> {
        config.validate()?;

        let mut builder =
            Builder::new().ok_or_else(|| ConfigError::Backend("could not allocate LAME context".into()))?;
        builder
            .set_sample_rate(config.sample_rate)
            .map_err(|e| ConfigError::Backend(format!("set_sample_rate: {:?}", e)))?;
        // LAME forces mono mode for one-channel input, so stereo output
        // from a mono source is produced by feeding the duplicated channel
        // as two-channel audio.
        builder
            .set_num_channels(config.output_mode.count() as u8)
            .map_err(|e| ConfigError::Backend(format!("set_num_channels: {:?}", e)))?;
        builder
            .set_mode(match config.output_mode {
                Channels::Mono => Mode::Mono,
                Channels::Stereo => Mode::Stereo,
            })
            .map_err(|e| ConfigError::Backend(format!("set_mode: {:?}", e)))?;
        builder
            .set_brate(lame_bitrate(config.bitrate)?)
            .map_err(|e| ConfigError::Backend(format!("set_brate: {:?}", e)))?;
        builder
            .set_quality(lame_quality(config.quality))
            .map_err(|e| ConfigError::Backend(format!("set_quality: {:?}", e)))?;

        let encoder = builder
            .build()
            .map_err(|e| ConfigError::Backend(format!("build: {:?}", e)))?;

        log::debug!(
            "opened LAME session: {} Hz, {} kbps, {:?} in, {:?} out",
            config.sample_rate,
            config.bitrate,
            config.channels,
            config.output_mode
        );

        Ok(Self {
            encoder,
            input_channels: config.channels,
            output_mode: config.output_mode,
            chunk_size: config.samples_per_frame() * config.channels.count() * BYTES_PER_SAMPLE,
        })
    }
}

impl EncoderSession for LameSession {
    fn pcm_chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn push(&mut self, chunk: &[u8]) -> EncodingResult<Vec<u8>> {
        if chunk.is_empty() {
            return Ok(Vec::new());
        }

        let samples = pcm::samples_from_be_bytes(chunk);
        let mut out = Vec::with_capacity(max_required_buffer_size(samples.len()));

        match (self.input_channels, self.output_mode) {
            (Channels::Mono, Channels::Stereo) => self.encoder.encode_to_vec(
                DualPcm {
                    left: &samples,
                    right: &samples,
                },
                &mut out,
            ),
            (Channels::Mono, Channels::Mono) => {
                self.encoder.encode_to_vec(MonoPcm(&samples), &mut out)
            }
            (Channels::Stereo, _) => self
                .encoder
                .encode_to_vec(InterleavedPcm(&samples), &mut out),
        }
        .map_err(|e| EncodingError::Lame(format!("{:?}", e)))?;

        Ok(out)
    }

    fn finish(mut self) -> EncodingResult<Vec<u8>> {
        // from lame.h, worst-case flush output
        let mut out = Vec::with_capacity(7200);
        self.encoder
            .flush_to_vec::<FlushNoGap>(&mut out)
            .map_err(|e| EncodingError::Flush(format!("{:?}", e)))?;
        Ok(out)
    }
}

/// Map a kbps value onto the backend's bitrate table
fn lame_bitrate(kbps: u32) -> Result<Bitrate, ConfigError> {
    Ok(match kbps {
        8 => Bitrate::Kbps8,
        16 => Bitrate::Kbps16,
        24 => Bitrate::Kbps24,
        32 => Bitrate::Kbps32,
        40 => Bitrate::Kbps40,
        48 => Bitrate::Kbps48,
        64 => Bitrate::Kbps64,
        80 => Bitrate::Kbps80,
        96 => Bitrate::Kbps96,
        112 => Bitrate::Kbps112,
        128 => Bitrate::Kbps128,
        160 => Bitrate::Kbps160,
        192 => Bitrate::Kbps192,
        224 => Bitrate::Kbps224,
        256 => Bitrate::Kbps256,
        320 => Bitrate::Kbps320,
        other => return Err(ConfigError::UnsupportedBitrate(other)),
    })
}

/// Map the quality preset onto LAME's 0-9 scale
fn lame_quality(quality: Quality) -> LameQuality {
    match quality {
        Quality::Fastest => LameQuality::SecondWorst,
        Quality::Standard => LameQuality::Good,
        Quality::Best => LameQuality::Best,
    }
}
