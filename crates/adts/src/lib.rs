//! ADTS elementary stream demuxing.
//!
//! ADTS (Audio Data Transport Stream) is the self-contained framing format
//! for raw AAC audio: each frame is prefixed by a 7-byte header carrying
//! the sample rate, channel configuration and total frame length.
//!
//! [`AdtsDemuxer`] walks such a stream one frame at a time, deriving a
//! running millisecond timestamp and re-packaging each frame's payload as
//! the body of an FLV AAC audio tag. The stream's out-of-band codec
//! parameters are exposed as an FLV sequence-header blob via
//! [`AdtsDemuxer::audio_specific_config`].
//!
//! Header field layout is defined by ISO/IEC 14496-3:2019(E) - 1.7.2
//! (adts_fixed_header / adts_variable_header).

pub mod config;
pub mod demuxer;
pub mod error;
pub mod header;

pub use config::AudioSpecificConfig;
pub use demuxer::{AdtsDemuxer, AdtsFrame};
pub use error::{AdtsError, HeaderError};
pub use header::{AdtsHeader, SampleFrequencyIndex};
