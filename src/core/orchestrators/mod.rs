mod text_extraction_orchestrator;

pub use text_extraction_orchestrator::TextExtractionOrchestrator;
