#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "AI Text Extractor";
pub const APPLICATION_SUBTITLE: &str = "Transform your images into text with advanced AI technology";
pub const CONFIG_DIRECTORY_NAME: &str = "ai-text-extractor";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_CLI: &str = "[CLI]";
pub const LOG_TAG_OCR_VIEW: &str = "[OCR_VIEW]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_PREPROCESS: &str = "[PREPROCESS]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_TESSERACT: &str = "[TESSERACT_OCR]";
pub const LOG_TAG_OCRS: &str = "[OCRS]";
pub const LOG_TAG_TRADITIONAL: &str = "[TRADITIONAL]";
pub const LOG_TAG_NEURAL: &str = "[NEURAL]";
pub const LOG_TAG_UPLOAD: &str = "[UPLOAD]";

pub const METHOD_LABEL_NEURAL: &str = "AI-Powered OCR";
pub const METHOD_LABEL_TRADITIONAL: &str = "Traditional OCR";
pub const METHOD_SELECTOR_TRADITIONAL_MARKER: &str = "Traditional";

pub const NO_TEXT_DETECTED: &str = "No text detected";
pub const TRADITIONAL_FAILURE_MESSAGE: &str = "Error occurred during text extraction.";
pub const NEURAL_FAILURE_MESSAGE: &str =
    "Error occurred during text extraction. Please try again or use traditional OCR.";
pub const DECODE_FAILURE_MESSAGE: &str =
    "Error occurred while reading the image. Please upload a valid JPG or PNG file.";

pub const USER_MESSAGE_SUCCESS: &str = "✨ Text extracted successfully!";
pub const USER_MESSAGE_NO_TEXT: &str = "⚠️ No text was detected in the image.";
pub const USER_MESSAGE_ERROR_PREFIX: &str = "❌";
pub const USER_MESSAGE_WARNING_PREFIX: &str = "⚠️";
pub const USER_MESSAGE_PROCESSING_TRADITIONAL: &str = "⚙️ Processing with traditional OCR...";
pub const USER_MESSAGE_PROCESSING_NEURAL: &str = "🤖 Processing with AI...";
pub const USER_MESSAGE_INITIALIZING_NEURAL: &str = "🤖 Initializing AI model...";

pub const GAUSSIAN_KERNEL_SIZE: usize = 5;
pub const BINARY_FOREGROUND: u8 = 255;
pub const BINARY_BACKGROUND: u8 = 0;

pub const DEFAULT_TESSERACT_COMMAND: &str = "tesseract";
pub const DEFAULT_TESSERACT_LANGUAGE: &str = "eng";
pub const DEFAULT_NEURAL_LANGUAGE: &str = "en";
pub const SUPPORTED_NEURAL_LANGUAGES: &[&str] = &["en"];

pub const DETECTION_MODEL_URL: &str =
    "https://huggingface.co/robertknight/ocrs/resolve/main/text-detection-ssfbcj81.rten";
pub const RECOGNITION_MODEL_URL: &str =
    "https://huggingface.co/robertknight/ocrs/resolve/main/text-rec-checkpoint-s52qdbqt.rten";
pub const DETECTION_MODEL_FILE_NAME: &str = "text-detection.rten";
pub const RECOGNITION_MODEL_FILE_NAME: &str = "text-recognition.rten";
pub const MODELS_SUBDIRECTORY: &str = "models/ocrs";

pub const PROGRESS_TICK_MILLIS: u64 = 120;
