//! # pcm2mp3
//!
//! A small library for converting raw headerless PCM audio into MP3,
//! backed by the LAME encoder. It provides a streaming encode loop that
//! feeds fixed-size PCM chunks through a single-use encoder session and
//! collects the compressed output, plus the file helpers used by the
//! converter binary.

pub mod config;
pub mod error;
pub mod io;
pub mod pcm;
pub mod session;
pub mod stream;

pub use config::{Channels, EncoderConfig, MpegVersion, Quality};
pub use error::{ConfigError, EncodingError, Error, InputDataError, Result};
pub use session::{EncoderSession, LameSession};
pub use stream::{encode_pcm_to_mp3, StreamingEncoder};
