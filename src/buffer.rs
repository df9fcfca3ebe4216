use std::time::Duration;

use crate::error::LoadError;
use crate::SoundInfo;

/// Fully decoded audio held in memory as interleaved signed 16-bit PCM.
///
/// For multi-channel audio the samples alternate between channels:
/// `[ch0_s0, ch1_s0, ch0_s1, ch1_s1, ...]`. The buffer is never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundBuffer {
    samples: Vec<i16>,
    channels: u16,
    sample_rate: u32,
}

impl SoundBuffer {
    /// Build a buffer from raw interleaved samples.
    ///
    /// Fails if `channels` or `sample_rate` is zero, or if the sample count
    /// does not divide evenly into frames.
    pub fn from_samples(samples: Vec<i16>, channels: u16, sample_rate: u32) -> Result<Self, LoadError> {
        if channels == 0 {
            return Err(LoadError::InvalidLayout("channel count must be positive".into()));
        }
        if sample_rate == 0 {
            return Err(LoadError::InvalidLayout("sample rate must be positive".into()));
        }
        if samples.len() % usize::from(channels) != 0 {
            return Err(LoadError::InvalidLayout(format!(
                "{} samples do not fill whole frames of {} channels",
                samples.len(),
                channels
            )));
        }
        Ok(SoundBuffer {
            samples,
            channels,
            sample_rate,
        })
    }

    /// All decoded samples, interleaved.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Total number of samples across all channels.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn channel_count(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames (one sample per channel).
    pub fn frame_count(&self) -> usize {
        self.samples.len() / usize::from(self.channels)
    }

    /// Playback length at the buffer's sample rate.
    pub fn duration(&self) -> Duration {
        let frames = self.frame_count() as u64;
        let rate = u64::from(self.sample_rate);
        Duration::from_secs(frames / rate) + Duration::from_nanos((frames % rate) * 1_000_000_000 / rate)
    }

    /// The first `min(n, sample_count)` samples.
    pub fn first_samples(&self, n: usize) -> &[i16] {
        &self.samples[..n.min(self.samples.len())]
    }

    pub fn info(&self) -> SoundInfo {
        SoundInfo {
            channels: self.channels,
            sample_rate: self.sample_rate,
            sample_count: self.samples.len(),
        }
    }
}
