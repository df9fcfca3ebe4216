//! Decode an audio file into interleaved signed 16-bit PCM and inspect it.
//!
//! Container parsing and codecs are provided by `symphonia`: MP3, WAV, FLAC,
//! Ogg/Vorbis and raw PCM/ADPCM are supported.
//!
//! # Example
//!
//! ```no_run
//! use pcmprobe::SoundBuffer;
//!
//! let buffer = SoundBuffer::open("song.mp3").unwrap();
//! println!("{}ch, {}Hz, {} samples", buffer.channel_count(), buffer.sample_rate(), buffer.sample_count());
//! println!("first 10: {:?}", buffer.first_samples(10));
//! ```

mod buffer;
mod decode;
pub mod error;
pub mod report;

use std::io::Read;
use std::path::Path;

pub use buffer::SoundBuffer;
pub use error::LoadError;

/// Metadata about a decoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g. 44100).
    pub sample_rate: u32,
    /// Total interleaved samples across all channels.
    pub sample_count: usize,
}

impl SoundBuffer {
    /// Decode the audio file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        decode::decode_file(path.as_ref())
    }

    /// Decode audio from any `Read` source. The format is detected by probing.
    pub fn from_reader<R: Read + Send + Sync + 'static>(reader: R) -> Result<Self, LoadError> {
        decode::decode_reader(reader)
    }

    /// Decode an encoded audio file held in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, LoadError> {
        decode::decode_bytes(bytes.into())
    }
}
