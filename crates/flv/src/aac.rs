use std::{fmt, io};

/// AAC packet type marker, the second byte of an AAC audio tag body.
///
/// Defined in the FLV specification, Chapter 1 - AACAUDIODATA.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AacPacketType {
    /// AAC Sequence Header (the body carries an AudioSpecificConfig)
    SequenceHeader = 0x00,
    /// AAC Raw frame data
    Raw = 0x01,
}

impl TryFrom<u8> for AacPacketType {
    type Error = io::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(AacPacketType::SequenceHeader),
            0x01 => Ok(AacPacketType::Raw),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid AAC packet type: {}", value),
            )),
        }
    }
}

impl fmt::Display for AacPacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AacPacketType::SequenceHeader => write!(f, "Sequence Header"),
            AacPacketType::Raw => write!(f, "Raw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_values() {
        assert_eq!(AacPacketType::SequenceHeader as u8, 0x00);
        assert_eq!(AacPacketType::Raw as u8, 0x01);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(
            AacPacketType::try_from(0x00).unwrap(),
            AacPacketType::SequenceHeader
        );
        assert_eq!(AacPacketType::try_from(0x01).unwrap(), AacPacketType::Raw);
        assert!(AacPacketType::try_from(0x02).is_err());
    }
}
