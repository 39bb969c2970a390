use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::DynamicImage;
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use rten_imageproc::BoundingRect;

use crate::core::interfaces::adapters::{OcrService, OcrServiceFactory};
use crate::core::models::{DetectedText, DetectedWord, OcrResult, UserSettings};
use crate::global_constants::{self, LOG_TAG_OCRS};

// ocrs does not score its output.
const RECOGNITION_CONFIDENCE: f32 = 1.0;

pub struct OcrsService {
    engine: Arc<OcrEngine>,
}

impl OcrsService {
    pub async fn new(model_source: &OcrsModelSource) -> Result<Self> {
        log::info!("{} Initializing OCRS service", LOG_TAG_OCRS);

        model_source.ensure_language_supported()?;

        let models_dir = &model_source.models_directory;
        log::debug!("{} Models directory: {:?}", LOG_TAG_OCRS, models_dir);

        tokio::fs::create_dir_all(models_dir)
            .await
            .context("Failed to create models directory")?;

        let detection_model_path = models_dir.join(global_constants::DETECTION_MODEL_FILE_NAME);
        let recognition_model_path =
            models_dir.join(global_constants::RECOGNITION_MODEL_FILE_NAME);

        Self::ensure_model_exists(&detection_model_path, &model_source.detection_model_url).await?;
        Self::ensure_model_exists(
            &recognition_model_path,
            &model_source.recognition_model_url,
        )
        .await?;

        log::debug!("{} Loading models...", LOG_TAG_OCRS);
        let detection_model = Model::load_file(&detection_model_path)
            .context("Failed to load text detection model")?;
        let recognition_model = Model::load_file(&recognition_model_path)
            .context("Failed to load text recognition model")?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .context("Failed to create OCR engine")?;

        log::info!("{} Service initialized successfully", LOG_TAG_OCRS);
        Ok(Self {
            engine: Arc::new(engine),
        })
    }

    async fn ensure_model_exists(path: &Path, url: &str) -> Result<()> {
        if !path.exists() {
            log::info!(
                "{} Downloading model from {} to {:?}",
                LOG_TAG_OCRS,
                url,
                path
            );
            let response = reqwest::get(url)
                .await
                .context("Failed to download model")?
                .error_for_status()
                .context("Model download was rejected")?;
            let bytes = response.bytes().await.context("Failed to get model bytes")?;
            tokio::fs::write(path, bytes)
                .await
                .context("Failed to write model file")?;
            log::info!("{} Model downloaded successfully", LOG_TAG_OCRS);
        }
        Ok(())
    }

    fn detect_text_blocks(engine: &OcrEngine, image: &DynamicImage) -> Result<Vec<DetectedText>> {
        let rgb_image = image.to_rgb8();
        let (width, height) = rgb_image.dimensions();
        log::debug!("{} Image dimensions: {}x{}", LOG_TAG_OCRS, width, height);

        let image_source = ImageSource::from_bytes(rgb_image.as_raw(), rgb_image.dimensions())
            .map_err(|error| anyhow::anyhow!("Unsupported image layout: {:?}", error))?;
        let ocr_input = engine
            .prepare_input(image_source)
            .context("Failed to prepare OCR input")?;

        let word_rects = engine
            .detect_words(&ocr_input)
            .context("Failed to detect words")?;
        let line_rects = engine.find_text_lines(&ocr_input, &word_rects);
        let line_texts = engine
            .recognize_text(&ocr_input, &line_rects)
            .context("Failed to recognize text")?;

        let mut detected_texts = Vec::new();

        for (words_in_line, line_opt) in line_rects.iter().zip(line_texts.iter()) {
            let Some(line) = line_opt else {
                continue;
            };
            let text = line.to_string();
            if text.trim().is_empty() {
                continue;
            }
            let Some(first_word) = words_in_line.first() else {
                continue;
            };

            let mut bbox = first_word.bounding_rect();
            for word in words_in_line.iter().skip(1) {
                bbox = bbox.union(word.bounding_rect());
            }

            let detected_words: Vec<DetectedWord> = words_in_line
                .iter()
                .zip(text.split_whitespace())
                .map(|(word_rect, word_text)| {
                    let word_bbox = word_rect.bounding_rect();
                    DetectedWord::new(
                        word_text.to_string(),
                        word_bbox.left(),
                        word_bbox.top(),
                        word_bbox.width(),
                        word_bbox.height(),
                    )
                })
                .collect();

            log::debug!(
                "{} Text block {}: '{}' at ({},{}) {}x{} with {} words",
                LOG_TAG_OCRS,
                detected_texts.len(),
                text,
                bbox.left(),
                bbox.top(),
                bbox.width(),
                bbox.height(),
                detected_words.len()
            );

            detected_texts.push(DetectedText::new(
                text,
                bbox.left(),
                bbox.top(),
                bbox.width(),
                bbox.height(),
                RECOGNITION_CONFIDENCE,
                detected_words,
            ));
        }

        Ok(detected_texts)
    }
}

#[async_trait]
impl OcrService for OcrsService {
    async fn extract_text_from_image(&self, image: &DynamicImage) -> Result<OcrResult> {
        log::info!("{} Starting text extraction", LOG_TAG_OCRS);

        let engine = Arc::clone(&self.engine);
        let image = image.clone();
        let detected_texts =
            tokio::task::spawn_blocking(move || Self::detect_text_blocks(&engine, &image))
                .await
                .context("OCR inference task panicked")??;

        log::info!(
            "{} Extraction complete. Found {} text blocks",
            LOG_TAG_OCRS,
            detected_texts.len()
        );

        Ok(OcrResult::from_text_blocks(detected_texts))
    }
}

/// Where the ocrs models come from and which language they must serve.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrsModelSource {
    pub language: String,
    pub models_directory: PathBuf,
    pub detection_model_url: String,
    pub recognition_model_url: String,
}

impl OcrsModelSource {
    pub fn from_settings(settings: &UserSettings) -> Result<Self> {
        Ok(Self {
            language: settings.neural_language.clone(),
            models_directory: settings.resolve_models_directory()?,
            detection_model_url: settings.detection_model_url.clone(),
            recognition_model_url: settings.recognition_model_url.clone(),
        })
    }

    fn ensure_language_supported(&self) -> Result<()> {
        if global_constants::SUPPORTED_NEURAL_LANGUAGES.contains(&self.language.as_str()) {
            return Ok(());
        }
        anyhow::bail!(
            "Language '{}' is not supported by the OCRS models (supported: {})",
            self.language,
            global_constants::SUPPORTED_NEURAL_LANGUAGES.join(", ")
        )
    }
}

#[async_trait]
impl OcrServiceFactory for OcrsModelSource {
    async fn build_service(&self) -> Result<Arc<dyn OcrService>> {
        let service = OcrsService::new(self).await?;
        Ok(Arc::new(service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn build_source(language: &str, models_directory: PathBuf) -> OcrsModelSource {
        OcrsModelSource {
            language: language.to_string(),
            models_directory,
            detection_model_url: global_constants::DETECTION_MODEL_URL.to_string(),
            recognition_model_url: global_constants::RECOGNITION_MODEL_URL.to_string(),
        }
    }

    #[test]
    fn test_model_source_from_settings_uses_configured_directory() {
        let settings = UserSettings {
            models_directory: Some(PathBuf::from("/srv/ocrs")),
            ..UserSettings::default()
        };

        let source = OcrsModelSource::from_settings(&settings).unwrap();

        assert_eq!(source.language, "en");
        assert_eq!(source.models_directory, PathBuf::from("/srv/ocrs"));
        assert_eq!(
            source.detection_model_url,
            global_constants::DETECTION_MODEL_URL
        );
    }

    #[test]
    fn test_english_is_supported() {
        let source = build_source("en", PathBuf::from("."));
        assert!(source.ensure_language_supported().is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_language_fails_before_loading_models() {
        let temp_dir = tempfile::tempdir().unwrap();
        let models_directory = temp_dir.path().join("models");
        let source = build_source("ja", models_directory.clone());

        let error = source.build_service().await.err().unwrap();

        assert!(error.to_string().contains("not supported"));
        assert!(!models_directory.exists());
    }

    #[tokio::test]
    async fn test_corrupt_model_file_fails_initialization() {
        let temp_dir = tempfile::tempdir().unwrap();
        let models_directory = temp_dir.path().to_path_buf();
        std::fs::write(
            models_directory.join(global_constants::DETECTION_MODEL_FILE_NAME),
            b"not a model",
        )
        .unwrap();
        std::fs::write(
            models_directory.join(global_constants::RECOGNITION_MODEL_FILE_NAME),
            b"not a model",
        )
        .unwrap();
        let source = build_source("en", models_directory);

        let error = source.build_service().await.err().unwrap();

        assert!(format!("{:#}", error).contains("Failed to load text detection model"));
    }

    #[tokio::test]
    #[ignore] // downloads the OCRS models
    async fn test_blank_image_has_no_text_blocks() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = build_source("en", temp_dir.path().to_path_buf());
        let service = source.build_service().await.unwrap();
        let blank = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 100, Rgb([255, 255, 255])));

        let result = service.extract_text_from_image(&blank).await.unwrap();

        assert!(result.joined_block_text().trim().is_empty());
    }

    #[tokio::test]
    #[ignore] // downloads the OCRS models
    async fn test_recognizes_hello_fixture() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hello.png");
        let image = image::open(&path).expect("fixture image should be readable");
        let settings = UserSettings::default();
        let source = OcrsModelSource::from_settings(&settings).unwrap();
        let service = source.build_service().await.unwrap();

        let result = service.extract_text_from_image(&image).await.unwrap();

        assert!(result.joined_block_text().to_uppercase().contains("HELLO"));
    }
}
