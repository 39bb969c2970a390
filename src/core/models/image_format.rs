use serde::{Deserialize, Serialize};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    PNG,
    JPEG,
}

impl ImageFormat {
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_SIGNATURE) {
            Some(ImageFormat::PNG)
        } else if bytes.starts_with(JPEG_SIGNATURE) {
            Some(ImageFormat::JPEG)
        } else {
            None
        }
    }

    pub fn to_image_crate_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::PNG => image::ImageFormat::Png,
            ImageFormat::JPEG => image::ImageFormat::Jpeg,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::PNG => write!(f, "PNG"),
            ImageFormat::JPEG => write!(f, "JPEG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_recognizes_png_signature() {
        let bytes = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n', 0, 0];
        assert_eq!(ImageFormat::detect(&bytes), Some(ImageFormat::PNG));
    }

    #[test]
    fn test_detect_recognizes_jpeg_signature() {
        let bytes = [0xFF, 0xD8, 0xFF, 0xE0, 0x00];
        assert_eq!(ImageFormat::detect(&bytes), Some(ImageFormat::JPEG));
    }

    #[test]
    fn test_detect_rejects_gif_and_short_input() {
        assert_eq!(ImageFormat::detect(b"GIF89a"), None);
        assert_eq!(ImageFormat::detect(&[0xFF]), None);
        assert_eq!(ImageFormat::detect(&[]), None);
    }
}
