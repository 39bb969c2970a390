use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;

use crate::core::models::OcrResult;

#[async_trait]
pub trait OcrService: Send + Sync {
    async fn extract_text_from_image(&self, image: &DynamicImage) -> Result<OcrResult>;
}

/// Builds an engine that is expensive to construct (model loading). Used by
/// holders that construct the engine once and share it afterwards.
#[async_trait]
pub trait OcrServiceFactory: Send + Sync {
    async fn build_service(&self) -> Result<Arc<dyn OcrService>>;
}
