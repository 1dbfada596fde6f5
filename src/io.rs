//! Whole-file byte I/O
//!
//! Source and sink helpers for the converter: read a file fully into
//! memory, rejecting files too large to address or truncated mid-read,
//! and write a buffer back out with an explicit flush before close.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Largest source file the converter will read, in bytes
///
/// Buffer sizes downstream are treated as 32-bit signed quantities, so
/// the source is capped there too.
pub const MAX_SOURCE_BYTES: u64 = i32::MAX as u64;

/// Read a file completely into a byte buffer
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let expected = file.metadata()?.len();

    if expected > MAX_SOURCE_BYTES {
        return Err(Error::SourceTooLarge {
            path: path.display().to_string(),
            len: expected,
            max: MAX_SOURCE_BYTES,
        });
    }

    let mut bytes = Vec::with_capacity(expected as usize);
    let actual = file.read_to_end(&mut bytes)? as u64;
    if actual < expected {
        return Err(Error::TruncatedRead {
            path: path.display().to_string(),
            expected,
            actual,
        });
    }

    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Write a byte buffer to a file, flushing before close
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
