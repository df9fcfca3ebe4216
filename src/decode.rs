use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{
    Decoder as CodecDecoder, DecoderOptions, CODEC_TYPE_MP1, CODEC_TYPE_MP2, CODEC_TYPE_MP3, CODEC_TYPE_NULL,
};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::{MediaSource, MediaSourceStream, ReadOnlySource};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::buffer::SoundBuffer;
use crate::error::LoadError;

/// State for decoding one track of a probed container into interleaved i16.
pub(crate) struct Decoder {
    format: Box<dyn FormatReader>,
    codec: Box<dyn CodecDecoder>,
    track_id: u32,

    /// Channel count, from the codec parameters or the first decoded frame.
    channels: Option<u16>,
    /// Sample rate in Hz, from the codec parameters or the first decoded frame.
    sample_rate: Option<u32>,
    /// Frame count the container header declares, when it declares one.
    declared_frames: Option<u64>,
    /// Interleaved samples decoded so far.
    samples: Vec<i16>,
    /// Whether the container reported end of stream.
    finished: bool,
    /// Packets that decoded successfully.
    decoded_packets: usize,
    /// Packets dropped because the codec reported them corrupt.
    skipped_packets: usize,
    /// Frames covered by the dropped packets.
    skipped_frames: u64,
}

impl Decoder {
    /// Probe `source` and prepare a codec for its first audio track.
    pub(crate) fn new(source: Box<dyn MediaSource>, hint: &Hint) -> Result<Self, LoadError> {
        let stream = MediaSourceStream::new(source, Default::default());
        let probed = symphonia::default::get_probe().format(
            hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;
        let format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or(LoadError::NoTrack)?;
        let track_id = track.id;
        let params = track.codec_params.clone();

        let codec = symphonia::default::get_codecs().make(&params, &DecoderOptions::default())?;
        let channels = params.channels.map(|c| c.count() as u16);
        let sample_rate = params.sample_rate;
        // Without a Xing/VBRI tag the MPEG audio length is a bitrate estimate.
        let declared_frames = match params.codec {
            CODEC_TYPE_MP1 | CODEC_TYPE_MP2 | CODEC_TYPE_MP3 => None,
            _ => params.n_frames,
        };

        log::debug!(
            "selected track {track_id}: codec={:?} channels={channels:?} rate={sample_rate:?} frames={:?}",
            params.codec,
            params.n_frames
        );

        Ok(Decoder {
            format,
            codec,
            track_id,
            channels,
            sample_rate,
            declared_frames,
            samples: Vec::new(),
            finished: false,
            decoded_packets: 0,
            skipped_packets: 0,
            skipped_frames: 0,
        })
    }

    /// Read and decode the next packet of the selected track.
    ///
    /// Returns `Ok(false)` once the container is exhausted. Packets from other
    /// tracks and packets the codec flags as corrupt are skipped.
    pub(crate) fn decode_next_packet(&mut self) -> Result<bool, LoadError> {
        if self.finished {
            return Ok(false);
        }

        let packet = match self.format.next_packet() {
            Ok(packet) => packet,
            // End of stream surfaces as an unexpected EOF.
            Err(SymphoniaError::IoError(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                self.finished = true;
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != self.track_id {
            return Ok(true);
        }

        match self.codec.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                if self.channels.is_none() {
                    self.channels = Some(spec.channels.count() as u16);
                }
                if self.sample_rate.is_none() {
                    self.sample_rate = Some(spec.rate);
                }

                let mut converted = SampleBuffer::<i16>::new(decoded.capacity() as u64, spec);
                converted.copy_interleaved_ref(decoded);
                self.samples.extend_from_slice(converted.samples());
                self.decoded_packets += 1;
                Ok(true)
            }
            Err(SymphoniaError::DecodeError(msg)) => {
                log::warn!("skipping corrupt packet at ts {}: {msg}", packet.ts());
                self.skipped_packets += 1;
                self.skipped_frames += packet.dur();
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Consume the decoder and assemble the final buffer.
    pub(crate) fn finish(self) -> Result<SoundBuffer, LoadError> {
        if self.decoded_packets == 0 && self.skipped_packets > 0 {
            return Err(LoadError::Decode(format!(
                "all {} packets were corrupt",
                self.skipped_packets
            )));
        }

        let channels = self.channels.ok_or(LoadError::MissingParameter("channel count"))?;
        let sample_rate = self.sample_rate.ok_or(LoadError::MissingParameter("sample rate"))?;

        if let Some(declared) = self.declared_frames {
            let present = (self.samples.len() / usize::from(channels.max(1))) as u64 + self.skipped_frames;
            if present < declared {
                return Err(LoadError::Decode(format!(
                    "stream truncated: {present} of {declared} frames present"
                )));
            }
        }

        log::debug!(
            "decoded {} samples ({} packets, {} skipped)",
            self.samples.len(),
            self.decoded_packets,
            self.skipped_packets
        );

        SoundBuffer::from_samples(self.samples, channels, sample_rate)
    }
}

/// Decode the audio file at `path`, using its extension as a format hint.
pub(crate) fn decode_file(path: &Path) -> Result<SoundBuffer, LoadError> {
    let file = File::open(path)?;

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    log::debug!("decoding {}", path.display());
    decode_source(Box::new(file), &hint)
}

/// Decode from an arbitrary byte stream. The container is detected by probing.
pub(crate) fn decode_reader<R: Read + Send + Sync + 'static>(reader: R) -> Result<SoundBuffer, LoadError> {
    decode_source(Box::new(ReadOnlySource::new(reader)), &Hint::new())
}

/// Decode an encoded file already held in memory.
pub(crate) fn decode_bytes(bytes: Vec<u8>) -> Result<SoundBuffer, LoadError> {
    decode_source(Box::new(Cursor::new(bytes)), &Hint::new())
}

fn decode_source(source: Box<dyn MediaSource>, hint: &Hint) -> Result<SoundBuffer, LoadError> {
    let mut decoder = Decoder::new(source, hint)?;
    while decoder.decode_next_packet()? {}
    decoder.finish()
}
