/// FLV Tag Type
///
/// Defined by:
/// - video_file_format_spec_v10.pdf (Chapter 1 - The FLV File Format - FLV tags)
/// - video_file_format_spec_v10_1.pdf (Annex E.4.1 - FLV Tag)
///
/// The 3 defined types are:
/// - Audio(8)
/// - Video(9)
/// - ScriptData(18)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlvTagType {
    Audio = 8,
    Video = 9,
    ScriptData = 18,
}

impl From<FlvTagType> for u8 {
    fn from(value: FlvTagType) -> Self {
        value as u8
    }
}

/// Size of the tag header preceding the tag data: type (1), data size (3),
/// timestamp (3 + 1 extended), stream id (3).
pub const TAG_HEADER_SIZE: u32 = 11;
