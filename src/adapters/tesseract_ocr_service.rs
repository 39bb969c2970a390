use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::DynamicImage;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{OcrResult, UserSettings};
use crate::global_constants::LOG_TAG_TESSERACT;

/// Runs the Tesseract executable as a child process. The image goes in on
/// stdin as PNG and plain text comes back on stdout.
pub struct TesseractOcrService {
    command: PathBuf,
    language: String,
    page_segmentation_mode: Option<u8>,
}

impl TesseractOcrService {
    pub fn build(settings: &UserSettings) -> Self {
        log::info!(
            "{} Initializing Tesseract OCR service with {:?}",
            LOG_TAG_TESSERACT,
            settings.tesseract_command
        );
        Self {
            command: settings.tesseract_command.clone(),
            language: settings.tesseract_language.clone(),
            page_segmentation_mode: settings.tesseract_page_segmentation_mode,
        }
    }

    fn convert_to_tesseract_compatible_format(image: &DynamicImage) -> Result<Vec<u8>> {
        log::debug!(
            "{} Converting image to compatible format",
            LOG_TAG_TESSERACT
        );
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .context("Failed to convert image to PNG format")?;
        Ok(buffer)
    }

    fn build_arguments(&self) -> Vec<String> {
        let mut arguments = vec![
            "stdin".to_string(),
            "stdout".to_string(),
            "-l".to_string(),
            self.language.clone(),
        ];
        if let Some(page_segmentation_mode) = self.page_segmentation_mode {
            arguments.push("--psm".to_string());
            arguments.push(page_segmentation_mode.to_string());
        }
        arguments
    }
}

#[async_trait]
impl OcrService for TesseractOcrService {
    async fn extract_text_from_image(&self, image: &DynamicImage) -> Result<OcrResult> {
        log::info!("{} Starting text extraction", LOG_TAG_TESSERACT);
        log::debug!(
            "{} Image dimensions: {}x{}",
            LOG_TAG_TESSERACT,
            image.width(),
            image.height()
        );

        let image_data = Self::convert_to_tesseract_compatible_format(image)
            .context("Failed to prepare image for OCR")?;

        let mut child = Command::new(&self.command)
            .args(self.build_arguments())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start tesseract at {:?}", self.command))?;

        let mut stdin = child
            .stdin
            .take()
            .context("Failed to open tesseract stdin")?;
        let write_result = stdin.write_all(&image_data).await;
        drop(stdin);

        // Tesseract may exit before reading its input; its stderr says why.
        let output = child
            .wait_with_output()
            .await
            .context("Failed to wait for tesseract")?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        if let Err(error) = write_result {
            let reason = format!(
                "Failed to send image to tesseract ({}): {}",
                output.status,
                stderr.trim()
            );
            return Err(anyhow::Error::new(error).context(reason));
        }

        if !output.status.success() {
            anyhow::bail!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }

        let extracted_text =
            String::from_utf8(output.stdout).context("Tesseract returned invalid UTF-8")?;

        log::info!(
            "{} Text extraction complete. Extracted {} characters",
            LOG_TAG_TESSERACT,
            extracted_text.len()
        );
        log::debug!("{} Extracted text: {}", LOG_TAG_TESSERACT, extracted_text);

        Ok(OcrResult::from_plain_text(extracted_text))
    }
}
