mod extraction_error;
mod extraction_method;
mod extraction_outcome;
mod image_format;
mod ocr;
mod user_settings;

pub use extraction_error::ExtractionError;
pub use extraction_method::ExtractionMethod;
pub use extraction_outcome::{ExtractionOutcome, ExtractionReport};
pub use image_format::ImageFormat;
pub use ocr::{DetectedText, DetectedWord, OcrResult};
pub use user_settings::UserSettings;
