mod ocr_service;

pub use ocr_service::{OcrService, OcrServiceFactory};
