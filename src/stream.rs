//! Streaming PCM to MP3 encoding
//!
//! The encode loop at the heart of the converter: walk the PCM buffer in
//! chunks no larger than the session's recommended size, append whatever
//! the encoder emits per chunk, then flush. The cursor always advances by
//! the full requested chunk length; partial frames stay buffered inside
//! the session, and a push that yields no bytes just means the encoder is
//! still filling a frame. The whole input is always consumed and the
//! session is always flushed, so no trailing audio is dropped.

use crate::config::EncoderConfig;
use crate::error::{Error, InputDataError, Result};
use crate::session::{EncoderSession, LameSession};

/// Converts an in-memory PCM buffer into an in-memory MP3 buffer
///
/// Each `encode` call opens its own single-use encoder session, so
/// independent calls may run on separate threads.
pub struct StreamingEncoder {
    config: EncoderConfig,
}

impl StreamingEncoder {
    /// Create an encoder, validating the configuration up front
    pub fn new(config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the encoder configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a complete PCM buffer into a complete MP3 buffer
    ///
    /// `pcm` may be empty; the result is then whatever the encoder emits
    /// on flush (nothing, or a bare header frame).
    pub fn encode(&self, pcm: &[u8]) -> Result<Vec<u8>> {
        let session = LameSession::open(&self.config)?;
        self.encode_with(session, pcm)
    }

    /// Run the chunk loop against any session implementation
    fn encode_with<S: EncoderSession>(&self, mut session: S, pcm: &[u8]) -> Result<Vec<u8>> {
        let frame_bytes = self.config.frame_bytes();
        if pcm.len() % frame_bytes != 0 {
            return Err(Error::InputData(InputDataError::MisalignedPcm {
                len: pcm.len(),
                frame_bytes,
            }));
        }

        let chunk_size = session.pcm_chunk_size();
        let mut mp3 = Vec::new();
        let mut cursor = 0;

        while cursor < pcm.len() {
            let chunk_len = chunk_size.min(pcm.len() - cursor);
            let emitted = session.push(&pcm[cursor..cursor + chunk_len])?;
            mp3.extend_from_slice(&emitted);
            cursor += chunk_len;
        }

        let tail = session.finish()?;
        mp3.extend_from_slice(&tail);

        log::debug!("encoded {} PCM bytes into {} MP3 bytes", pcm.len(), mp3.len());
        Ok(mp3)
    }
}

/// Convenience function: encode a whole PCM buffer in one call
pub fn encode_pcm_to_mp3(config: EncoderConfig, pcm: &[u8]) -> Result<Vec<u8>> {
    StreamingEncoder::new(config)?.encode(pcm)
}
