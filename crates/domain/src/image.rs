//! Image: an opaque camera frame handed to the classifier port.

/// Minimum confidence, in percent, a classifier must reach before reporting
/// that an image contains a cat.
pub const CAT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Raw encoded image bytes. The controller never decodes them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    /// Wrap encoded image bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Image {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}
