use crate::core::models::ExtractionError;
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeTone {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Text(String),
    NoTextDetected,
    Failed(ExtractionError),
}

impl ExtractionOutcome {
    /// Trims engine output; an all-whitespace result means the engine ran but
    /// found nothing.
    pub fn from_engine_text(raw_text: &str) -> Self {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            ExtractionOutcome::NoTextDetected
        } else {
            ExtractionOutcome::Text(trimmed.to_string())
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            ExtractionOutcome::Text(text) => text,
            ExtractionOutcome::NoTextDetected => global_constants::NO_TEXT_DETECTED,
            ExtractionOutcome::Failed(error) => error.user_message(),
        }
    }

    pub fn tone(&self) -> OutcomeTone {
        match self {
            ExtractionOutcome::Text(_) => OutcomeTone::Success,
            ExtractionOutcome::NoTextDetected => OutcomeTone::Warning,
            ExtractionOutcome::Failed(_) => OutcomeTone::Error,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed(_))
    }
}

/// Outcome of one request together with the non-fatal problems hit on the
/// way, such as a preprocessing fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub outcome: ExtractionOutcome,
    pub warnings: Vec<ExtractionError>,
}

impl ExtractionReport {
    pub fn new(outcome: ExtractionOutcome, warnings: Vec<ExtractionError>) -> Self {
        Self { outcome, warnings }
    }

    pub fn failed(error: ExtractionError) -> Self {
        Self::new(ExtractionOutcome::Failed(error), vec![])
    }
}
