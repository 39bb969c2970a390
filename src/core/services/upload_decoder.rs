use image::DynamicImage;

use crate::core::models::{ExtractionError, ImageFormat};
use crate::global_constants;

/// Decodes a complete uploaded file. Only PNG and JPEG are accepted.
pub fn decode_uploaded_image(bytes: &[u8]) -> Result<DynamicImage, ExtractionError> {
    let format = ImageFormat::detect(bytes).ok_or_else(|| {
        log::warn!(
            "{} Rejected upload of {} bytes with unknown signature",
            global_constants::LOG_TAG_UPLOAD,
            bytes.len()
        );
        ExtractionError::UnsupportedFormat
    })?;

    log::debug!(
        "{} Decoding {} upload ({} bytes)",
        global_constants::LOG_TAG_UPLOAD,
        format,
        bytes.len()
    );

    let image = image::load_from_memory_with_format(bytes, format.to_image_crate_format())
        .map_err(|error| {
            log::warn!(
                "{} Failed to decode {} upload: {}",
                global_constants::LOG_TAG_UPLOAD,
                format,
                error
            );
            ExtractionError::Decode(error.to_string())
        })?;

    log::debug!(
        "{} Decoded image: {}x{}",
        global_constants::LOG_TAG_UPLOAD,
        image.width(),
        image.height()
    );

    Ok(image)
}
