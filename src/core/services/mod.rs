mod image_preprocessor;
mod neural_extraction_strategy;
mod shared_ocr_engine;
mod traditional_extraction_strategy;
mod upload_decoder;

pub use image_preprocessor::ImagePreprocessor;
pub use neural_extraction_strategy::NeuralExtractionStrategy;
pub use shared_ocr_engine::SharedOcrEngine;
pub use traditional_extraction_strategy::TraditionalExtractionStrategy;
pub use upload_decoder::decode_uploaded_image;
