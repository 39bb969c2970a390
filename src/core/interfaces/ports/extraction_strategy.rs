use async_trait::async_trait;
use image::DynamicImage;

use crate::core::models::{ExtractionMethod, ExtractionReport};

/// One way of turning an image into text. Implementations never fail: every
/// problem is folded into the returned report.
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    fn method(&self) -> ExtractionMethod;

    /// Status line to show while the next `extract` runs.
    fn progress_message(&self) -> &'static str {
        self.method().progress_message()
    }

    async fn extract(&self, image: &DynamicImage) -> ExtractionReport;
}
