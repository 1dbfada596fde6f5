//! Integration tests for the PCM to MP3 pipeline
//!
//! These run the real LAME backend end to end with various inputs and
//! configurations.

use pcm2mp3::{encode_pcm_to_mp3, Channels, ConfigError, EncoderConfig, Error, StreamingEncoder};

/// One second of silence at 8000 Hz, 16-bit mono
fn one_second_of_silence() -> Vec<u8> {
    vec![0u8; 16000]
}

#[test]
fn test_silence_produces_mp3_frames() {
    let mp3 = encode_pcm_to_mp3(EncoderConfig::new(), &one_second_of_silence()).unwrap();

    assert!(!mp3.is_empty(), "one second of audio must produce output");
    // MPEG frame sync: first 11 bits set
    assert_eq!(mp3[0], 0xFF);
    assert_eq!(mp3[1] & 0xE0, 0xE0);
}

#[test]
fn test_silence_output_size_matches_cbr() {
    // 1 s at 64 kbps CBR is about 8000 bytes; allow generous slack for
    // encoder delay padding and the header frame.
    let mp3 = encode_pcm_to_mp3(EncoderConfig::new(), &one_second_of_silence()).unwrap();
    assert!(
        mp3.len() > 4000 && mp3.len() < 20000,
        "unexpected output size {} for 1s at 64 kbps",
        mp3.len()
    );
}

#[test]
fn test_empty_input_does_not_error() {
    let mp3 = encode_pcm_to_mp3(EncoderConfig::new(), &[]).unwrap();
    // Empty or header-only output is acceptable
    if !mp3.is_empty() {
        assert_eq!(mp3[0], 0xFF);
    }
}

#[test]
fn test_input_of_exactly_one_chunk() {
    // 576 samples = one MPEG-2.5 frame = the recommended chunk size
    let pcm = vec![0u8; 576 * 2];
    let mp3 = encode_pcm_to_mp3(EncoderConfig::new(), &pcm).unwrap();
    assert!(!mp3.is_empty(), "flush must emit the buffered frame");
}

#[test]
fn test_longer_input_yields_more_output() {
    let short = encode_pcm_to_mp3(EncoderConfig::new(), &vec![0u8; 16000]).unwrap();
    let long = encode_pcm_to_mp3(EncoderConfig::new(), &vec![0u8; 48000]).unwrap();
    assert!(long.len() > short.len());
}

#[test]
fn test_non_silent_input_encodes() {
    // 440 Hz tone, big-endian samples
    let mut pcm = Vec::with_capacity(16000);
    for i in 0..8000u32 {
        let t = i as f32 / 8000.0;
        let sample = ((2.0 * std::f32::consts::PI * 440.0 * t).sin() * 16000.0) as i16;
        pcm.extend_from_slice(&sample.to_be_bytes());
    }

    let mp3 = encode_pcm_to_mp3(EncoderConfig::new(), &pcm).unwrap();
    assert!(!mp3.is_empty());
    assert_eq!(mp3[0], 0xFF);
}

#[test]
fn test_mono_output_mode() {
    let config = EncoderConfig::new().output_mode(Channels::Mono);
    let mp3 = encode_pcm_to_mp3(config, &one_second_of_silence()).unwrap();
    assert!(!mp3.is_empty());
    assert_eq!(mp3[0], 0xFF);
}

#[test]
fn test_stereo_input() {
    // Interleaved stereo at 44.1 kHz / 128 kbps
    let config = EncoderConfig::new()
        .sample_rate(44100)
        .channels(Channels::Stereo)
        .bitrate(128);
    let pcm = vec![0u8; 44100 * 4];
    let mp3 = encode_pcm_to_mp3(config, &pcm).unwrap();
    assert!(!mp3.is_empty());
    assert_eq!(mp3[0], 0xFF);
}

#[test]
fn test_misaligned_input_is_rejected() {
    let err = encode_pcm_to_mp3(EncoderConfig::new(), &[0u8; 15999]).unwrap_err();
    assert!(matches!(err, Error::InputData(_)));
}

#[test]
fn test_incompatible_config_is_rejected() {
    // 128 kbps is out of range for MPEG-2.5
    let config = EncoderConfig::new().sample_rate(8000).bitrate(128);
    assert!(matches!(
        StreamingEncoder::new(config),
        Err(Error::Config(ConfigError::IncompatibleRateCombination { .. }))
    ));
}

#[test]
fn test_sessions_are_independent() {
    // Two encodes of the same input through separate sessions agree
    let pcm = one_second_of_silence();
    let first = encode_pcm_to_mp3(EncoderConfig::new(), &pcm).unwrap();
    let second = encode_pcm_to_mp3(EncoderConfig::new(), &pcm).unwrap();
    assert_eq!(first, second);
}
