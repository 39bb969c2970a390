mod ocrs_service;
mod tesseract_ocr_service;

pub use ocrs_service::OcrsModelSource;
pub use tesseract_ocr_service::TesseractOcrService;
