//! The remux driver loop.

use std::io::{Read, Write};

use adts::AdtsDemuxer;
use flv::{FlvHeader, FlvTagType, FlvWriter};
use tracing::debug;

use crate::error::AppError;

/// Totals reported after a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub frames: u64,
    pub duration_ms: u32,
}

/// Drives the demuxer/muxer pair to completion: the FLV file header, one
/// AAC sequence-header tag at timestamp zero, then one audio tag per ADTS
/// frame until the demuxer reports end-of-stream. The sink is flushed
/// before returning.
pub fn convert<R: Read, W: Write>(
    demuxer: &mut AdtsDemuxer<R>,
    writer: &mut FlvWriter<W>,
) -> Result<ConvertSummary, AppError> {
    writer.write_header(&FlvHeader::new(true, false))?;

    let config = demuxer.audio_specific_config()?;
    writer.write_tag(FlvTagType::Audio, config, 0)?;

    let mut frames = 0u64;
    while let Some(frame) = demuxer.next_frame()? {
        writer.write_tag(FlvTagType::Audio, frame.data, frame.timestamp_ms)?;
        frames += 1;
    }

    writer.flush()?;
    debug!(frames, "demuxer reached end of stream");

    Ok(ConvertSummary {
        frames,
        duration_ms: demuxer.timestamp_ms(),
    })
}
