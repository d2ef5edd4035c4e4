//! FLV container serialization.
//!
//! This crate covers the subset of the FLV file format needed to mux an
//! audio-only stream: the 9-byte file header and the sequence of
//! length-prefixed, timestamped tags that follows it.
//!
//! Defined by:
//! - video_file_format_spec_v10.pdf (Chapter 1 - The FLV File Format)
//! - video_file_format_spec_v10_1.pdf (Annex E - The FLV File Format)

pub mod aac;
pub mod audio;
pub mod error;
pub mod header;
pub mod tag;
pub mod writer;

pub use aac::AacPacketType;
pub use audio::{SoundFormat, SoundRate, SoundSize, SoundType};
pub use error::FlvError;
pub use header::FlvHeader;
pub use tag::FlvTagType;
pub use writer::FlvWriter;
