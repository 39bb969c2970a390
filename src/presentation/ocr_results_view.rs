use std::io::Write;

use crate::core::models::{ExtractionOutcome, ExtractionReport};
use crate::global_constants;

pub struct OcrResultsView<'a> {
    report: &'a ExtractionReport,
}

impl<'a> OcrResultsView<'a> {
    pub fn build_with_report(report: &'a ExtractionReport) -> Self {
        log::debug!(
            "{} Rendering {:?} outcome with {} warning(s)",
            global_constants::LOG_TAG_OCR_VIEW,
            report.outcome.tone(),
            report.warnings.len()
        );
        Self { report }
    }

    /// Warnings first, then a status line in the outcome's tone, then the
    /// extracted text verbatim when there is any.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .report
            .warnings
            .iter()
            .map(|warning| {
                format!(
                    "{} {}",
                    global_constants::USER_MESSAGE_WARNING_PREFIX,
                    warning.user_message()
                )
            })
            .collect();

        match &self.report.outcome {
            ExtractionOutcome::Text(text) => {
                lines.push(global_constants::USER_MESSAGE_SUCCESS.to_string());
                lines.push(String::new());
                lines.push(text.clone());
            }
            ExtractionOutcome::NoTextDetected => {
                lines.push(global_constants::USER_MESSAGE_NO_TEXT.to_string());
            }
            outcome @ ExtractionOutcome::Failed(_) => {
                lines.push(format!(
                    "{} {}",
                    global_constants::USER_MESSAGE_ERROR_PREFIX,
                    outcome.display_text()
                ));
            }
        }

        lines
    }

    pub fn render_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        for line in self.render_lines() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ExtractionError;

    #[test]
    fn test_success_renders_status_then_verbatim_text() {
        let report = ExtractionReport::new(
            ExtractionOutcome::Text("HELLO\n  world".to_string()),
            vec![],
        );

        let lines = OcrResultsView::build_with_report(&report).render_lines();

        assert_eq!(
            lines,
            vec![
                "✨ Text extracted successfully!".to_string(),
                String::new(),
                "HELLO\n  world".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_text_renders_warning() {
        let report = ExtractionReport::new(ExtractionOutcome::NoTextDetected, vec![]);

        let lines = OcrResultsView::build_with_report(&report).render_lines();

        assert_eq!(lines, vec!["⚠️ No text was detected in the image.".to_string()]);
    }

    #[test]
    fn test_failure_renders_error_message() {
        let report =
            ExtractionReport::failed(ExtractionError::NeuralEngine("model missing".to_string()));

        let lines = OcrResultsView::build_with_report(&report).render_lines();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("❌"));
        assert!(lines[0].contains("Please try again or use traditional OCR."));
    }

    #[test]
    fn test_warnings_are_rendered_before_outcome() {
        let report = ExtractionReport::new(
            ExtractionOutcome::Text("text".to_string()),
            vec![ExtractionError::Preprocessing("no pixels".to_string())],
        );

        let lines = OcrResultsView::build_with_report(&report).render_lines();

        assert!(lines[0].starts_with("⚠️"));
        assert!(lines[0].contains("preprocessing failed"));
        assert_eq!(lines[1], "✨ Text extracted successfully!");
    }

    #[test]
    fn test_render_to_writes_one_line_per_entry() {
        let report = ExtractionReport::new(ExtractionOutcome::NoTextDetected, vec![]);
        let mut buffer = Vec::new();

        OcrResultsView::build_with_report(&report)
            .render_to(&mut buffer)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "⚠️ No text was detected in the image.\n"
        );
    }
}
