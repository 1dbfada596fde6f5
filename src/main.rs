//! Raw PCM to MP3 converter
//!
//! Reads `audio.raw` (16-bit signed big-endian mono PCM at 8000 Hz) from
//! the working directory, encodes it to a constant-bitrate stereo MP3,
//! and writes `audio.mp3` next to it. No command line options.

use std::path::Path;
use std::process;

use pcm2mp3::{pcm, EncoderConfig, StreamingEncoder};

/// Fixed input path
const INPUT_PATH: &str = "audio.raw";
/// Fixed output path
const OUTPUT_PATH: &str = "audio.mp3";

fn print_name() {
    println!("pcm2mp3 (LAME backend)");
}

fn convert() -> pcm2mp3::Result<()> {
    print_name();

    let config = EncoderConfig::new();
    let pcm_data = pcm2mp3::io::read_bytes(Path::new(INPUT_PATH))?;

    let duration = pcm::duration_secs(pcm_data.len(), &config);
    let channel_str = match config.channels {
        pcm2mp3::Channels::Mono => "mono",
        pcm2mp3::Channels::Stereo => "stereo",
    };
    println!(
        "Raw PCM data, {} {}Hz {}bit, duration: {:02}:{:02}:{:02}",
        channel_str,
        config.sample_rate,
        config.bits_per_sample,
        (duration as u32) / 3600,
        ((duration as u32) % 3600) / 60,
        (duration as u32) % 60
    );
    println!(
        "Bitrate: {} kbps  Output: {:?}  Quality: {:?}",
        config.bitrate, config.output_mode, config.quality
    );
    println!("Encoding \"{}\" to \"{}\"", INPUT_PATH, OUTPUT_PATH);

    let start_time = std::time::Instant::now();

    let encoder = StreamingEncoder::new(config)?;
    let mp3_data = encoder.encode(&pcm_data)?;

    pcm2mp3::io::write_bytes(Path::new(OUTPUT_PATH), &mp3_data)?;

    let elapsed = start_time.elapsed();
    println!(
        "Finished in {:02}:{:02}:{:02}",
        elapsed.as_secs() / 3600,
        (elapsed.as_secs() % 3600) / 60,
        elapsed.as_secs() % 60
    );
    if !mp3_data.is_empty() {
        println!(
            "Input size:  {} bytes\nOutput size: {} bytes\nCompression: {:.1}:1",
            pcm_data.len(),
            mp3_data.len(),
            pcm_data.len() as f64 / mp3_data.len() as f64
        );
    }

    Ok(())
}

fn main() {
    // Only show errors by default
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Error)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    if let Err(err) = convert() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
