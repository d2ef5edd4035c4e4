//! # FLV Writer Module
//!
//! Serializes the FLV container: the 9-byte file header followed by a
//! sequence of tags, each framed as
//!
//! ```text
//! +---------+-------------+--------------------+--------------+---------+-----------------+
//! | Type(1) | DataSize(3) | Timestamp(3 low +1 high) | StreamID(3) | Data(N) | PrevTagSize(4) |
//! +---------+-------------+--------------------+--------------+---------+-----------------+
//! ```
//!
//! The writer is append-only and performs no retries: any I/O failure on
//! the sink aborts the current tag emission and is surfaced to the caller.
//!
//! ## Usage
//!
//! ```no_run
//! use bytes::Bytes;
//! use flv::header::FlvHeader;
//! use flv::tag::FlvTagType;
//! use flv::writer::FlvWriter;
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! fn main() -> Result<(), flv::FlvError> {
//!     let file = BufWriter::new(File::create("output.flv")?);
//!     let mut writer = FlvWriter::new(file);
//!
//!     writer.write_header(&FlvHeader::new(true, false))?;
//!     let frame = Bytes::from_static(&[0xAF, 0x01, 0x21, 0x00]);
//!     writer.write_tag(FlvTagType::Audio, frame, 0)?;
//!
//!     writer.close()?;
//!     Ok(())
//! }
//! ```

use crate::error::FlvError;
use crate::header::FlvHeader;
use crate::tag::{FlvTagType, TAG_HEADER_SIZE};
use byteorder::{BigEndian, WriteBytesExt};
use bytes::Bytes;
use std::io::{self, Write};
use tracing::debug;

/// Largest payload representable by the 24-bit data size field.
const MAX_TAG_DATA_SIZE: usize = 0xFF_FFFF;

/// FLV Writer for serializing FLV streams to any byte sink
pub struct FlvWriter<W: Write> {
    writer: W,
    timestamp: u32,
    previous_tag_size: u32,
}

impl<W: Write> FlvWriter<W> {
    /// Creates a new FLV writer over the given output sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            timestamp: 0,
            previous_tag_size: 0,
        }
    }

    /// Writes the FLV file header and the initial previous-tag-size word.
    pub fn write_header(&mut self, header: &FlvHeader) -> io::Result<()> {
        // Write FLV signature ("FLV")
        self.writer.write_all(&[0x46, 0x4C, 0x56])?;

        // Write version (0x01)
        self.writer.write_u8(header.version)?;

        // Write flags (bit 2 for audio, bit 0 for video)
        self.writer.write_u8(header.flags())?;

        // Write data offset (always 9 for standard FLV header)
        self.writer.write_u32::<BigEndian>(9)?;

        // Write initial previous tag size (0 before first tag)
        self.writer.write_u32::<BigEndian>(0)?;

        debug!(
            has_audio = header.has_audio,
            has_video = header.has_video,
            "wrote FLV file header"
        );
        Ok(())
    }

    /// Writes an FLV tag header to the output
    ///
    /// # Arguments
    ///
    /// * `tag_type` - The type of the tag (audio, video, script)
    /// * `data_size` - The size of the tag data in bytes
    /// * `timestamp_ms` - The timestamp in milliseconds
    fn write_tag_header(
        &mut self,
        tag_type: FlvTagType,
        data_size: u32,
        timestamp_ms: u32,
    ) -> io::Result<()> {
        // Write tag type
        self.writer.write_u8(tag_type.into())?;

        // Write data size (3 bytes)
        self.writer.write_u24::<BigEndian>(data_size)?;

        // The timestamp is 24 bits, extended by a separate high byte to
        // form a 32-bit value. The low 24 bits come first.
        self.writer
            .write_u24::<BigEndian>(timestamp_ms & 0xFFFFFF)?;
        self.writer.write_u8((timestamp_ms >> 24) as u8)?;

        // Write stream ID (always 0)
        self.writer.write_u24::<BigEndian>(0)?;

        Ok(())
    }

    /// Writes an FLV tag to the output
    ///
    /// # Arguments
    ///
    /// * `tag_type` - The type of the tag (audio, video, script)
    /// * `data` - The tag data
    /// * `timestamp_ms` - The timestamp in milliseconds
    pub fn write_tag(
        &mut self,
        tag_type: FlvTagType,
        data: Bytes,
        timestamp_ms: u32,
    ) -> Result<(), FlvError> {
        if data.len() > MAX_TAG_DATA_SIZE {
            return Err(FlvError::TagTooLarge(data.len()));
        }
        let data_size = data.len() as u32;

        // Write tag header
        self.write_tag_header(tag_type, data_size, timestamp_ms)?;

        // Write tag data
        self.writer.write_all(&data)?;

        // Update previous tag size
        self.previous_tag_size = data_size + TAG_HEADER_SIZE;

        // Write previous tag size
        self.writer.write_u32::<BigEndian>(self.previous_tag_size)?;

        // Update timestamp for sequential writing
        if timestamp_ms > self.timestamp {
            self.timestamp = timestamp_ms;
        }

        Ok(())
    }

    /// Flushes any buffered data to the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Returns the highest timestamp written so far
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// Closes the writer, ensuring all data is flushed
    ///
    /// This method flushes any buffered data and returns the inner writer.
    pub fn close(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    /// Consumes the `FlvWriter`, returning the wrapped writer.
    ///
    /// Note that any leftover data in internal buffers will be written to
    /// the underlying writer before returning it.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}
