use std::sync::Arc;

use async_trait::async_trait;
use image::DynamicImage;

use crate::core::interfaces::adapters::OcrService;
use crate::core::interfaces::ports::ExtractionStrategy;
use crate::core::models::{ExtractionError, ExtractionMethod, ExtractionOutcome, ExtractionReport};
use crate::core::services::ImagePreprocessor;
use crate::global_constants::LOG_TAG_TRADITIONAL;

pub struct TraditionalExtractionStrategy {
    preprocessor: ImagePreprocessor,
    ocr_service: Arc<dyn OcrService>,
}

impl TraditionalExtractionStrategy {
    pub fn new(preprocessor: ImagePreprocessor, ocr_service: Arc<dyn OcrService>) -> Self {
        Self {
            preprocessor,
            ocr_service,
        }
    }
}

#[async_trait]
impl ExtractionStrategy for TraditionalExtractionStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::Traditional
    }

    async fn extract(&self, image: &DynamicImage) -> ExtractionReport {
        let prepared = self.preprocessor.prepare_for_ocr(image);
        let warnings: Vec<ExtractionError> = prepared.fallback_reason.into_iter().collect();

        let outcome = match self.ocr_service.extract_text_from_image(&prepared.image).await {
            Ok(result) => ExtractionOutcome::from_engine_text(&result.full_text),
            Err(error) => {
                log::error!(
                    "{} Error in traditional OCR: {:#}",
                    LOG_TAG_TRADITIONAL,
                    error
                );
                ExtractionOutcome::Failed(ExtractionError::traditional_engine(&error))
            }
        };

        ExtractionReport::new(outcome, warnings)
    }
}
