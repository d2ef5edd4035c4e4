//! Sequential ADTS frame extraction.

use std::io::{self, Read};

use bytes::{Bytes, BytesMut};
use tracing::debug;

use flv::aac::AacPacketType;
use flv::audio::{SoundFormat, SoundRate, SoundSize, SoundType, audio_tag_header};

use crate::config::AudioSpecificConfig;
use crate::error::AdtsError;
use crate::header::{AdtsHeader, HEADER_LEN};

/// Lead byte of every emitted FLV audio tag body. For AAC the rate, size
/// and type bits are informational only; players take the real parameters
/// from the AudioSpecificConfig.
const AAC_AUDIO_TAG_HEADER: u8 = audio_tag_header(
    SoundFormat::Aac,
    SoundRate::Hz44100,
    SoundSize::Bits16,
    SoundType::Stereo,
);

/// One demuxed ADTS frame, re-packaged as an FLV AAC audio tag body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdtsFrame {
    /// Cumulative stream time in milliseconds, including this frame's own
    /// duration
    pub timestamp_ms: u32,
    /// `[sound format byte][AAC raw marker]` followed by the frame's raw
    /// AAC payload (the ADTS header is stripped)
    pub data: Bytes,
}

/// Reads ADTS frames one at a time from a byte source.
///
/// The demuxer owns the stream's running timestamp: every call to
/// [`next_frame`](Self::next_frame) advances it by the frame's duration
/// before the frame is surfaced, so frame N carries the summed duration of
/// frames 1..=N. The accumulator wraps at the 32-bit boundary.
pub struct AdtsDemuxer<R: Read> {
    reader: R,
    /// Cumulative timestamp in milliseconds
    ts: u32,
    /// Frames surfaced so far; names the failing frame in errors
    frame_index: u64,
    /// Header bytes read ahead by `audio_specific_config`
    peeked: Option<[u8; HEADER_LEN]>,
}

impl<R: Read> AdtsDemuxer<R> {
    /// Creates a demuxer over the given byte source. Wrap files in a
    /// [`std::io::BufReader`]; the demuxer issues small reads.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            ts: 0,
            frame_index: 0,
            peeked: None,
        }
    }

    /// The running timestamp in milliseconds: the summed duration of all
    /// frames surfaced so far. Wraps on 32-bit overflow.
    pub fn timestamp_ms(&self) -> u32 {
        self.ts
    }

    /// Derives the stream's FLV sequence-header blob from the first frame
    /// header without consuming it: `[sound format byte][0x00]` followed
    /// by the 2-byte packed AudioSpecificConfig.
    ///
    /// The header bytes are read ahead and stashed, so the first
    /// [`next_frame`](Self::next_frame) call still returns the first
    /// frame.
    pub fn audio_specific_config(&mut self) -> Result<Bytes, AdtsError> {
        let header_bytes = match &self.peeked {
            Some(bytes) => *bytes,
            None => {
                let mut bytes = [0u8; HEADER_LEN];
                let filled = read_full(&mut self.reader, &mut bytes)?;
                if filled < HEADER_LEN {
                    return Err(AdtsError::UnexpectedEof {
                        frame_index: self.frame_index,
                        context: "ADTS header",
                    });
                }
                self.peeked = Some(bytes);
                bytes
            }
        };

        let header = self.parse_header(&header_bytes)?;
        let config = AudioSpecificConfig::from_adts(&header);
        debug!(
            sample_rate = header.sample_rate(),
            channels = header.channel_configuration,
            "derived stream configuration"
        );

        let packed = config.to_bytes();
        Ok(Bytes::copy_from_slice(&[
            AAC_AUDIO_TAG_HEADER,
            AacPacketType::SequenceHeader as u8,
            packed[0],
            packed[1],
        ]))
    }

    /// Reads the next frame.
    ///
    /// Returns `Ok(None)` on clean end-of-stream, i.e. when the source is
    /// exhausted exactly at a frame boundary. An EOF inside a header or
    /// payload is an [`AdtsError::UnexpectedEof`].
    pub fn next_frame(&mut self) -> Result<Option<AdtsFrame>, AdtsError> {
        let header_bytes = match self.peeked.take() {
            Some(bytes) => bytes,
            None => {
                let mut bytes = [0u8; HEADER_LEN];
                match read_full(&mut self.reader, &mut bytes)? {
                    0 => return Ok(None),
                    filled if filled < HEADER_LEN => {
                        return Err(AdtsError::UnexpectedEof {
                            frame_index: self.frame_index,
                            context: "ADTS header",
                        });
                    }
                    _ => {}
                }
                bytes
            }
        };

        let header = self.parse_header(&header_bytes)?;

        // The timestamp advances before the frame is surfaced: frame N
        // carries the cumulative duration of frames 1..=N.
        self.ts = self.ts.wrapping_add(header.frame_duration_ms());

        let payload_len = header.payload_len();
        let mut data = BytesMut::zeroed(2 + payload_len);
        data[0] = AAC_AUDIO_TAG_HEADER;
        data[1] = AacPacketType::Raw as u8;

        let filled = read_full(&mut self.reader, &mut data[2..])?;
        if filled < payload_len {
            return Err(AdtsError::UnexpectedEof {
                frame_index: self.frame_index,
                context: "frame payload",
            });
        }

        self.frame_index += 1;
        debug!(
            frame = self.frame_index,
            payload_len,
            timestamp_ms = self.ts,
            "demuxed ADTS frame"
        );

        Ok(Some(AdtsFrame {
            timestamp_ms: self.ts,
            data: data.freeze(),
        }))
    }

    fn parse_header(&self, bytes: &[u8; HEADER_LEN]) -> Result<AdtsHeader, AdtsError> {
        AdtsHeader::parse(bytes).map_err(|source| AdtsError::Malformed {
            frame_index: self.frame_index,
            source,
        })
    }
}

/// Reads until `buf` is full or the source reports end-of-stream, retrying
/// partial and interrupted reads. Returns the number of bytes obtained; a
/// short count means EOF.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeaderError;
    use std::io::Cursor;

    /// One synthetic ADTS frame: 44.1 kHz stereo header unless overridden,
    /// one raw data block, followed by the given payload.
    fn frame(freq_index: u8, channels: u8, payload: &[u8]) -> Vec<u8> {
        let frame_length = (HEADER_LEN + payload.len()) as u16;
        let mut bytes = Vec::with_capacity(frame_length as usize);
        bytes.extend_from_slice(&[
            0xFF,
            0xF1,
            0x40 | (freq_index & 0x0F) << 2 | (channels >> 2) & 0x01,
            (channels & 0x03) << 6 | ((frame_length >> 11) & 0x03) as u8,
            (frame_length >> 3) as u8,
            ((frame_length & 0x07) as u8) << 5 | 0x1F,
            0xFC,
        ]);
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn test_round_trip_framing() {
        let payloads: [&[u8]; 3] = [&[0x21, 0x00, 0x49], &[0x55; 10], &[0x01]];
        let mut stream = Vec::new();
        for payload in payloads {
            stream.extend_from_slice(&frame(4, 2, payload));
        }

        let mut demuxer = AdtsDemuxer::new(Cursor::new(stream));
        for payload in payloads {
            let got = demuxer.next_frame().unwrap().unwrap();
            assert_eq!(got.data[0], 0xAF);
            assert_eq!(got.data[1], 0x01);
            assert_eq!(&got.data[2..], payload);
        }
        assert!(demuxer.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_timestamps_accumulate_with_own_duration() {
        // 1024 samples at 44100 Hz = 23ms truncated; frame i (0-based)
        // carries (i + 1) * 23.
        let mut stream = Vec::new();
        for _ in 0..4 {
            stream.extend_from_slice(&frame(4, 2, &[0x00; 8]));
        }

        let mut demuxer = AdtsDemuxer::new(Cursor::new(stream));
        assert_eq!(demuxer.timestamp_ms(), 0);
        for i in 0..4u32 {
            let got = demuxer.next_frame().unwrap().unwrap();
            assert_eq!(got.timestamp_ms, (i + 1) * 23);
        }
        assert_eq!(demuxer.timestamp_ms(), 92);
    }

    #[test]
    fn test_audio_specific_config_blob() {
        let stream = frame(4, 2, &[0x0A, 0x0B]);
        let mut demuxer = AdtsDemuxer::new(Cursor::new(stream));

        let config = demuxer.audio_specific_config().unwrap();
        assert_eq!(&config[..], &[0xAF, 0x00, 0x12, 0x10]);
    }

    #[test]
    fn test_audio_specific_config_does_not_consume() {
        let stream = frame(4, 2, &[0x0A, 0x0B]);
        let mut demuxer = AdtsDemuxer::new(Cursor::new(stream));

        demuxer.audio_specific_config().unwrap();
        // Peeking twice is idempotent.
        demuxer.audio_specific_config().unwrap();

        let got = demuxer.next_frame().unwrap().unwrap();
        assert_eq!(&got.data[2..], &[0x0A, 0x0B]);
        assert!(demuxer.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_empty_stream_is_clean_eof() {
        let mut demuxer = AdtsDemuxer::new(Cursor::new(Vec::new()));
        assert!(demuxer.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        let mut demuxer = AdtsDemuxer::new(Cursor::new(vec![0xFF, 0xF1, 0x50]));
        let err = demuxer.next_frame().unwrap_err();
        assert!(matches!(
            err,
            AdtsError::UnexpectedEof {
                frame_index: 0,
                context: "ADTS header"
            }
        ));
    }

    #[test]
    fn test_truncated_payload_is_an_error() {
        let mut stream = frame(4, 2, &[0x0A, 0x0B, 0x0C]);
        stream.truncate(stream.len() - 2);

        let mut demuxer = AdtsDemuxer::new(Cursor::new(stream));
        let err = demuxer.next_frame().unwrap_err();
        assert!(matches!(
            err,
            AdtsError::UnexpectedEof {
                frame_index: 0,
                context: "frame payload"
            }
        ));
    }

    #[test]
    fn test_error_names_failing_frame() {
        let mut stream = frame(4, 2, &[0x0A, 0x0B]);
        stream.extend_from_slice(&frame(13, 2, &[0x0C]));

        let mut demuxer = AdtsDemuxer::new(Cursor::new(stream));
        demuxer.next_frame().unwrap().unwrap();
        let err = demuxer.next_frame().unwrap_err();
        assert!(matches!(
            err,
            AdtsError::Malformed {
                frame_index: 1,
                source: HeaderError::ReservedSampleFrequencyIndex(13)
            }
        ));
    }

    #[test]
    fn test_bad_syncword_is_malformed() {
        let mut stream = frame(4, 2, &[0x0A]);
        stream[0] = 0x00;

        let mut demuxer = AdtsDemuxer::new(Cursor::new(stream));
        assert!(matches!(
            demuxer.next_frame().unwrap_err(),
            AdtsError::Malformed {
                source: HeaderError::BadSyncWord(_),
                ..
            }
        ));
    }
}
