//! Console rendering of a load result.

use std::io::{self, Write};

use crate::buffer::SoundBuffer;

/// The single line printed when a file cannot be decoded.
pub const FAILURE_MESSAGE: &str = "Failed to load audio file";

/// How many leading samples the report previews.
pub const PREVIEW_LEN: usize = 10;

/// Write the four-line success report for `buffer`.
///
/// ```text
/// Total samples: 5
/// Channels: 1
/// Sample rate: 8000 Hz
/// 10 -20 30 -40 50
/// ```
pub fn write_report<W: Write>(buffer: &SoundBuffer, mut out: W) -> io::Result<()> {
    writeln!(out, "Total samples: {}", buffer.sample_count())?;
    writeln!(out, "Channels: {}", buffer.channel_count())?;
    writeln!(out, "Sample rate: {} Hz", buffer.sample_rate())?;

    let preview: Vec<String> = buffer
        .first_samples(PREVIEW_LEN)
        .iter()
        .map(|s| s.to_string())
        .collect();
    writeln!(out, "{}", preview.join(" "))?;
    out.flush()
}

/// Write the failure line.
pub fn write_failure<W: Write>(mut out: W) -> io::Result<()> {
    writeln!(out, "{FAILURE_MESSAGE}")?;
    out.flush()
}
