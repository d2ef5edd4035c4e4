//! MPEG-4 AudioSpecificConfig.
//!
//! The out-of-band structure describing codec parameters, carried once per
//! stream ahead of the first audio frame. Only the top fields are modeled:
//!
//! ```text
//! audioObjectType          u5
//! samplingFrequencyIndex   u4
//! channelConfiguration     u4
//! (AOT specific config follows; all-zero for the profiles handled here)
//! ```
//!
//! ISO/IEC 14496-3:2019(E) - 1.6.2.1 (Table 1.19).

use std::io;

use crate::header::{AdtsHeader, SampleFrequencyIndex};

/// Audio object type for AAC LC (Low Complexity), the only profile this
/// stream model carries.
pub const AAC_LC_AUDIO_OBJECT_TYPE: u8 = 2;

/// The top fields of an MPEG-4 AudioSpecificConfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpecificConfig {
    /// Audio Object Type
    pub audio_object_type: u8,
    /// Sampling Frequency Index
    pub sample_frequency_index: SampleFrequencyIndex,
    /// Channel Configuration
    pub channel_configuration: u8,
}

impl AudioSpecificConfig {
    /// Derives the stream configuration from an ADTS frame header.
    ///
    /// The audio object type is pinned to AAC LC; the frequency index and
    /// channel configuration are carried over from the header. Invariant:
    /// the configuration is constant for the whole stream, so this is
    /// derived once, from the first frame.
    pub fn from_adts(header: &AdtsHeader) -> Self {
        AudioSpecificConfig {
            audio_object_type: AAC_LC_AUDIO_OBJECT_TYPE,
            sample_frequency_index: header.sample_frequency_index,
            channel_configuration: header.channel_configuration,
        }
    }

    /// Packs the configuration into its 2-byte wire form:
    /// 5 bits object type, 4 bits frequency index, 4 bits channel
    /// configuration, 3 bits of padding.
    pub fn to_bytes(&self) -> [u8; 2] {
        let packed = ((self.audio_object_type as u16 & 0x1F) << 11)
            | (self.sample_frequency_index as u16) << 7
            | (self.channel_configuration as u16 & 0x0F) << 3;
        [(packed >> 8) as u8, packed as u8]
    }

    /// Parses the 2-byte wire form back into its fields.
    ///
    /// The escape-coded explicit sampling frequency of ISO/IEC 14496-3 is
    /// not supported; the reserved indices are rejected.
    pub fn parse(data: &[u8]) -> io::Result<Self> {
        if data.len() < 2 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "AudioSpecificConfig shorter than 2 bytes",
            ));
        }

        let audio_object_type = data[0] >> 3;
        let index = (data[0] & 0x07) << 1 | data[1] >> 7;
        let sample_frequency_index = SampleFrequencyIndex::from_u8(index).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "Invalid sampling frequency index")
        })?;
        let channel_configuration = (data[1] >> 3) & 0x0F;

        Ok(AudioSpecificConfig {
            audio_object_type,
            sample_frequency_index,
            channel_configuration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_aac_lc_44100_stereo() {
        let config = AudioSpecificConfig {
            audio_object_type: 2,
            sample_frequency_index: SampleFrequencyIndex::Freq44100,
            channel_configuration: 2,
        };
        assert_eq!(config.to_bytes(), [0x12, 0x10]);
    }

    #[test]
    fn test_pack_48000_mono() {
        // obj=2, freq_idx=3, ch=1:
        // b0 = (2 << 3) | (3 >> 1) = 0x11, b1 = ((3 & 1) << 7) | (1 << 3) = 0x88
        let config = AudioSpecificConfig {
            audio_object_type: 2,
            sample_frequency_index: SampleFrequencyIndex::Freq48000,
            channel_configuration: 1,
        };
        assert_eq!(config.to_bytes(), [0x11, 0x88]);
    }

    #[test]
    fn test_parse_recovers_fields() {
        let config = AudioSpecificConfig::parse(&[0x12, 0x10]).unwrap();
        assert_eq!(config.audio_object_type, 2);
        assert_eq!(
            config.sample_frequency_index,
            SampleFrequencyIndex::Freq44100
        );
        assert_eq!(config.channel_configuration, 2);
    }

    #[test]
    fn test_parse_too_short() {
        assert!(AudioSpecificConfig::parse(&[0x12]).is_err());
    }
}
