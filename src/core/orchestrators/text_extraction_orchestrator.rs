use std::sync::Arc;

use image::DynamicImage;

use crate::core::interfaces::ports::ExtractionStrategy;
use crate::core::models::{ExtractionMethod, ExtractionReport};
use crate::core::services::decode_uploaded_image;
use crate::global_constants;

/// Routes a request to the strategy picked by the method selector.
pub struct TextExtractionOrchestrator {
    traditional_strategy: Arc<dyn ExtractionStrategy>,
    neural_strategy: Arc<dyn ExtractionStrategy>,
}

impl TextExtractionOrchestrator {
    pub fn build(
        traditional_strategy: Arc<dyn ExtractionStrategy>,
        neural_strategy: Arc<dyn ExtractionStrategy>,
    ) -> Self {
        Self {
            traditional_strategy,
            neural_strategy,
        }
    }

    pub fn strategy_for(&self, method: ExtractionMethod) -> &Arc<dyn ExtractionStrategy> {
        match method {
            ExtractionMethod::Traditional => &self.traditional_strategy,
            ExtractionMethod::Neural => &self.neural_strategy,
        }
    }

    pub fn progress_message(&self, selector: &str) -> &'static str {
        self.strategy_for(ExtractionMethod::from_selector(selector))
            .progress_message()
    }

    pub async fn extract(&self, image: &DynamicImage, selector: &str) -> ExtractionReport {
        let method = ExtractionMethod::from_selector(selector);
        log::info!(
            "{} Selector '{}' resolved to {}",
            global_constants::LOG_TAG_ORCHESTRATOR,
            selector,
            method
        );

        let strategy = self.strategy_for(method);
        let report = strategy.extract(image).await;

        log::info!(
            "{} {} finished with {:?} outcome and {} warning(s)",
            global_constants::LOG_TAG_ORCHESTRATOR,
            strategy.method(),
            report.outcome.tone(),
            report.warnings.len()
        );
        report
    }

    /// Same as [`extract`](Self::extract) for a raw upload; an unreadable
    /// file becomes a failed report instead of an error.
    pub async fn extract_from_bytes(&self, bytes: &[u8], selector: &str) -> ExtractionReport {
        match decode_uploaded_image(bytes) {
            Ok(image) => self.extract(&image, selector).await,
            Err(error) => {
                log::error!(
                    "{} Could not read upload: {}",
                    global_constants::LOG_TAG_ORCHESTRATOR,
                    error
                );
                ExtractionReport::failed(error)
            }
        }
    }
}
