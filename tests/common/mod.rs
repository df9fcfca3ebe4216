use std::path::{Path, PathBuf};

/// Write a 16-bit integer PCM WAV file with the given interleaved samples.
pub fn write_wav(dir: &Path, name: &str, channels: u16, sample_rate: u32, samples: &[i16]) -> PathBuf {
    let path = dir.join(name);
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).expect("failed to create WAV");
    for &s in samples {
        writer.write_sample(s).expect("failed to write sample");
    }
    writer.finalize().expect("failed to finalize WAV");
    path
}

/// A deterministic sawtooth-ish signal spanning the i16 range.
pub fn ramp(len: usize) -> Vec<i16> {
    (0..len).map(|i| ((i as i32 * 1237) % 65536 - 32768) as i16).collect()
}
