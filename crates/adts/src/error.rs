use thiserror::Error;

/// Field-level failures while parsing a 7-byte ADTS header.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    #[error("bad ADTS syncword: {0:#05x}")]
    BadSyncWord(u16),
    #[error("reserved sampling frequency index: {0}")]
    ReservedSampleFrequencyIndex(u8),
    #[error("ADTS frame length {0} shorter than the 7-byte header")]
    InvalidFrameLength(u16),
}

/// Errors surfaced by [`crate::AdtsDemuxer`].
///
/// Clean end-of-stream is not an error; it is reported as `Ok(None)` from
/// [`crate::AdtsDemuxer::next_frame`]. Everything here is fatal to the
/// conversion.
#[derive(Error, Debug)]
pub enum AdtsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stream ended inside frame {frame_index} while reading {context}")]
    UnexpectedEof {
        frame_index: u64,
        context: &'static str,
    },

    #[error("malformed ADTS header in frame {frame_index}: {source}")]
    Malformed {
        frame_index: u64,
        #[source]
        source: HeaderError,
    },
}
