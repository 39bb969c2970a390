use async_trait::async_trait;
use image::DynamicImage;

use crate::core::interfaces::ports::ExtractionStrategy;
use crate::core::models::{ExtractionError, ExtractionMethod, ExtractionOutcome, ExtractionReport};
use crate::core::services::{ImagePreprocessor, SharedOcrEngine};
use crate::global_constants::{self, LOG_TAG_NEURAL};

pub struct NeuralExtractionStrategy {
    preprocessor: ImagePreprocessor,
    engine: SharedOcrEngine,
}

impl NeuralExtractionStrategy {
    pub fn new(preprocessor: ImagePreprocessor, engine: SharedOcrEngine) -> Self {
        Self {
            preprocessor,
            engine,
        }
    }

    async fn run(&self, image: &DynamicImage) -> anyhow::Result<String> {
        if !self.engine.is_initialized() {
            log::info!("{} Initializing AI model", LOG_TAG_NEURAL);
        }
        let ocr_service = self.engine.get_or_init().await?;

        let result = ocr_service.extract_text_from_image(image).await?;
        log::debug!(
            "{} Engine returned {} text regions",
            LOG_TAG_NEURAL,
            result.text_blocks.len()
        );

        // Detection order, not re-sorted by position.
        Ok(result.joined_block_text())
    }
}

#[async_trait]
impl ExtractionStrategy for NeuralExtractionStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::Neural
    }

    fn progress_message(&self) -> &'static str {
        if self.engine.is_initialized() {
            self.method().progress_message()
        } else {
            global_constants::USER_MESSAGE_INITIALIZING_NEURAL
        }
    }

    async fn extract(&self, image: &DynamicImage) -> ExtractionReport {
        let prepared = self.preprocessor.prepare_for_ocr(image);
        let warnings: Vec<ExtractionError> = prepared.fallback_reason.into_iter().collect();

        let outcome = match self.run(&prepared.image).await {
            Ok(text) => ExtractionOutcome::from_engine_text(&text),
            Err(error) => {
                log::error!("{} Error in AI OCR: {:#}", LOG_TAG_NEURAL, error);
                ExtractionOutcome::Failed(ExtractionError::neural_engine(&error))
            }
        };

        ExtractionReport::new(outcome, warnings)
    }
}
