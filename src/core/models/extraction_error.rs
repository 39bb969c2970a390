use thiserror::Error;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("unsupported image format, expected JPG or PNG")]
    UnsupportedFormat,

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("preprocessing failed: {0}")]
    Preprocessing(String),

    #[error("traditional OCR failed: {0}")]
    TraditionalEngine(String),

    #[error("AI OCR failed: {0}")]
    NeuralEngine(String),
}

impl ExtractionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractionError::UnsupportedFormat | ExtractionError::Decode(_) => {
                global_constants::DECODE_FAILURE_MESSAGE
            }
            ExtractionError::Preprocessing(_) => {
                "Image preprocessing failed, the original image was used instead."
            }
            ExtractionError::TraditionalEngine(_) => global_constants::TRADITIONAL_FAILURE_MESSAGE,
            ExtractionError::NeuralEngine(_) => global_constants::NEURAL_FAILURE_MESSAGE,
        }
    }

    pub fn traditional_engine(error: &anyhow::Error) -> Self {
        ExtractionError::TraditionalEngine(format!("{:#}", error))
    }

    pub fn neural_engine(error: &anyhow::Error) -> Self {
        ExtractionError::NeuralEngine(format!("{:#}", error))
    }
}
