/// The FLV file header, 9 bytes on the wire.
///
/// Layout: the signature `"FLV"`, a version byte (always 0x01), a flags
/// byte advertising which media types the file carries, and a 4-byte data
/// offset that is always 9 for an unextended header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlvHeader {
    /// The version of the FLV file format, usually 0x01
    pub version: u8,
    /// Whether the file contains audio tags
    pub has_audio: bool,
    /// Whether the file contains video tags
    pub has_video: bool,
}

impl FlvHeader {
    /// Creates a version-1 header advertising the given media types.
    pub fn new(has_audio: bool, has_video: bool) -> Self {
        FlvHeader {
            version: 0x01,
            has_audio,
            has_video,
        }
    }

    /// The flags byte: bit 2 for audio, bit 0 for video.
    pub fn flags(&self) -> u8 {
        let mut flags = 0_u8;
        if self.has_audio {
            flags |= 0b0000_0100;
        }
        if self.has_video {
            flags |= 0b0000_0001;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_composition() {
        assert_eq!(FlvHeader::new(true, false).flags(), 0x04);
        assert_eq!(FlvHeader::new(false, true).flags(), 0x01);
        assert_eq!(FlvHeader::new(true, true).flags(), 0x05);
        assert_eq!(FlvHeader::new(false, false).flags(), 0x00);
    }
}
