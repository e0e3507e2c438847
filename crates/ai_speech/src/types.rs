//! Audio payload types

use bytes::Bytes;

/// Media type of all synthesized audio
pub const AUDIO_MEDIA_TYPE: &str = "audio/mpeg";

/// Synthesized audio, passed through to the caller untransformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    bytes: Bytes,
}

impl AudioData {
    /// Wrap raw audio bytes
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Declared media type of the payload
    pub const fn media_type(&self) -> &'static str {
        AUDIO_MEDIA_TYPE
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume into the raw bytes
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_data_reports_length() {
        let audio = AudioData::new(vec![0u8; 1024]);
        assert_eq!(audio.len(), 1024);
        assert!(!audio.is_empty());
    }

    #[test]
    fn media_type_is_mpeg() {
        let audio = AudioData::new(Vec::new());
        assert_eq!(audio.media_type(), "audio/mpeg");
    }

    #[test]
    fn into_bytes_preserves_content() {
        let audio = AudioData::new(vec![1u8, 2, 3]);
        assert_eq!(audio.into_bytes().as_ref(), &[1, 2, 3]);
    }
}
