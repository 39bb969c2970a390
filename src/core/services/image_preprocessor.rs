use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use imageproc::contrast::otsu_level;
use imageproc::filter::separable_filter_equal;

use crate::core::models::ExtractionError;
use crate::global_constants;

// Gaussian taps used for a 5x5 kernel when sigma is derived from the size.
const GAUSSIAN_KERNEL_5: [f32; global_constants::GAUSSIAN_KERNEL_SIZE] =
    [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Image handed to an OCR engine. `fallback_reason` is set when
/// preprocessing failed and `image` is the untouched input.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub image: DynamicImage,
    pub fallback_reason: Option<ExtractionError>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImagePreprocessor;

impl ImagePreprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Grayscale, 5x5 Gaussian blur, then Otsu binarization. The output keeps
    /// the input dimensions and only holds 0 and 255.
    pub fn binarize(&self, image: &DynamicImage) -> Result<GrayImage, ExtractionError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(ExtractionError::Preprocessing(format!(
                "image has no pixels ({}x{})",
                width, height
            )));
        }

        log::debug!(
            "{} Binarizing {}x{} image",
            global_constants::LOG_TAG_PREPROCESS,
            width,
            height
        );

        let gray = image.to_luma8();
        let blurred: GrayImage = separable_filter_equal(&gray, &GAUSSIAN_KERNEL_5[..]);
        let threshold_value = otsu_level(&blurred);

        log::debug!(
            "{} Otsu threshold: {}",
            global_constants::LOG_TAG_PREPROCESS,
            threshold_value
        );

        let binary = ImageBuffer::from_fn(width, height, |x, y| {
            if blurred.get_pixel(x, y)[0] > threshold_value {
                Luma([global_constants::BINARY_FOREGROUND])
            } else {
                Luma([global_constants::BINARY_BACKGROUND])
            }
        });

        Ok(binary)
    }

    pub fn prepare_for_ocr(&self, image: &DynamicImage) -> PreparedImage {
        match self.binarize(image) {
            Ok(binary) => PreparedImage {
                image: DynamicImage::ImageLuma8(binary),
                fallback_reason: None,
            },
            Err(error) => {
                log::warn!(
                    "{} {}, using original image",
                    global_constants::LOG_TAG_PREPROCESS,
                    error
                );
                PreparedImage {
                    image: image.clone(),
                    fallback_reason: Some(error),
                }
            }
        }
    }
}
