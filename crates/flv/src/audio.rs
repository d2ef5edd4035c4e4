//! # FLV Audio Tag Fields
//!
//! The first byte of every FLV audio tag packs four fields describing the
//! payload:
//!
//! ```text
//! +------------+-----------+-----------+-----------+
//! | SoundFormat| SoundRate | SoundSize | SoundType | AudioData...
//! | (4 bits)   | (2 bits)  | (1 bit)   | (1 bit)   |
//! +------------+-----------+-----------+-----------+
//! ```
//!
//! For AAC the lead byte is informational only; players derive the real
//! codec parameters from the AudioSpecificConfig carried in the sequence
//! header packet.
//!
//! Defined by:
//! - video_file_format_spec_v10.pdf (Chapter 1 - The FLV File Format - Audio tags)
//! - video_file_format_spec_v10_1.pdf (Annex E.4.2.1 - AUDIODATA)

use std::io;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundFormat {
    /// Uncompressed PCM audio
    Pcm = 0,
    /// ADPCM compressed audio
    AdPcm = 1,
    Mp3 = 2,
    PcmLe = 3,
    Nellymoser16khzMono = 4,
    Nellymoser8khzMono = 5,
    Nellymoser = 6,
    G711ALaw = 7,
    G711MuLaw = 8,
    Aac = 10,
    Speex = 11,
    Mp38k = 14,
    DeviceSpecific = 15,
}

impl TryFrom<u8> for SoundFormat {
    type Error = io::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => SoundFormat::Pcm,
            1 => SoundFormat::AdPcm,
            2 => SoundFormat::Mp3,
            3 => SoundFormat::PcmLe,
            4 => SoundFormat::Nellymoser16khzMono,
            5 => SoundFormat::Nellymoser8khzMono,
            6 => SoundFormat::Nellymoser,
            7 => SoundFormat::G711ALaw,
            8 => SoundFormat::G711MuLaw,
            10 => SoundFormat::Aac,
            11 => SoundFormat::Speex,
            14 => SoundFormat::Mp38k,
            15 => SoundFormat::DeviceSpecific,
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Invalid sound format: {}", value),
                ));
            }
        })
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundRate {
    Hz5512 = 0,
    Hz11025 = 1,
    Hz22050 = 2,
    Hz44100 = 3,
}

impl TryFrom<u8> for SoundRate {
    type Error = io::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => SoundRate::Hz5512,
            1 => SoundRate::Hz11025,
            2 => SoundRate::Hz22050,
            3 => SoundRate::Hz44100,
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Invalid sound rate: {}", value),
                ));
            }
        })
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundSize {
    Bits8 = 0,
    Bits16 = 1,
}

impl TryFrom<u8> for SoundSize {
    type Error = io::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => SoundSize::Bits8,
            1 => SoundSize::Bits16,
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Invalid sound size: {}", value),
                ));
            }
        })
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundType {
    Mono = 0,
    Stereo = 1,
}

impl TryFrom<u8> for SoundType {
    type Error = io::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => SoundType::Mono,
            1 => SoundType::Stereo,
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Invalid sound type: {}", value),
                ));
            }
        })
    }
}

const SOUND_FORMAT_SHIFT: u8 = 4;
const SOUND_RATE_SHIFT: u8 = 2;
const SOUND_SIZE_SHIFT: u8 = 1;

/// Packs the four audio tag fields into the lead byte of an FLV audio tag.
pub const fn audio_tag_header(
    format: SoundFormat,
    rate: SoundRate,
    size: SoundSize,
    sound_type: SoundType,
) -> u8 {
    (format as u8) << SOUND_FORMAT_SHIFT
        | (rate as u8) << SOUND_RATE_SHIFT
        | (size as u8) << SOUND_SIZE_SHIFT
        | sound_type as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aac_lead_byte() {
        let byte = audio_tag_header(
            SoundFormat::Aac,
            SoundRate::Hz44100,
            SoundSize::Bits16,
            SoundType::Stereo,
        );
        assert_eq!(byte, 0xAF);
    }

    #[test]
    fn test_lead_byte_fields_decode() {
        // 0xAF = AAC, 44.1 kHz, 16-bit, stereo
        let byte = 0xAF_u8;
        assert_eq!(SoundFormat::try_from(byte >> 4).unwrap(), SoundFormat::Aac);
        assert_eq!(
            SoundRate::try_from((byte >> 2) & 0x03).unwrap(),
            SoundRate::Hz44100
        );
        assert_eq!(
            SoundSize::try_from((byte >> 1) & 0x01).unwrap(),
            SoundSize::Bits16
        );
        assert_eq!(SoundType::try_from(byte & 0x01).unwrap(), SoundType::Stereo);
    }

    #[test]
    fn test_invalid_sound_format() {
        assert!(SoundFormat::try_from(9).is_err());
        assert!(SoundFormat::try_from(12).is_err());
        assert!(SoundRate::try_from(4).is_err());
        assert!(SoundType::try_from(2).is_err());
    }
}
