mod ocr_results_view;
mod progress_indicator;

pub use ocr_results_view::OcrResultsView;
pub use progress_indicator::ProgressIndicator;
