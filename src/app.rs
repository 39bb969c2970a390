use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use crate::adapters::{OcrsModelSource, TesseractOcrService};
use crate::core::models::UserSettings;
use crate::core::orchestrators::TextExtractionOrchestrator;
use crate::core::services::{
    ImagePreprocessor, NeuralExtractionStrategy, SharedOcrEngine, TraditionalExtractionStrategy,
};
use crate::global_constants;
use crate::presentation::{OcrResultsView, ProgressIndicator};

/// Extract text from a JPG or PNG image with traditional or AI-powered OCR
#[derive(Debug, Parser)]
#[command(name = "ai-text-extractor")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Image file to read (JPG, JPEG or PNG)
    pub image: PathBuf,

    /// Extraction method; anything containing "Traditional" uses Tesseract,
    /// everything else the AI model
    #[arg(short, long)]
    pub method: Option<String>,

    /// Tesseract executable, overrides the settings file
    #[arg(long)]
    pub tesseract_cmd: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

pub struct ExtractorApp {
    orchestrator: TextExtractionOrchestrator,
    settings: UserSettings,
}

impl ExtractorApp {
    pub fn build(settings: UserSettings) -> anyhow::Result<Self> {
        log::info!(
            "{} Initializing {}",
            global_constants::LOG_TAG_CLI,
            global_constants::APPLICATION_NAME
        );

        let preprocessor = ImagePreprocessor::new();
        let tesseract_service = Arc::new(TesseractOcrService::build(&settings));
        let model_source = Arc::new(OcrsModelSource::from_settings(&settings)?);

        let orchestrator = TextExtractionOrchestrator::build(
            Arc::new(TraditionalExtractionStrategy::new(
                preprocessor,
                tesseract_service,
            )),
            Arc::new(NeuralExtractionStrategy::new(
                preprocessor,
                SharedOcrEngine::new(model_source),
            )),
        );

        Ok(Self {
            orchestrator,
            settings,
        })
    }

    pub fn load_settings(args: &CliArgs) -> anyhow::Result<UserSettings> {
        let mut settings = match &args.settings {
            Some(path) => UserSettings::load_from_path(path)?,
            None => UserSettings::load().unwrap_or_else(|error| {
                log::warn!(
                    "{} Failed to load settings: {:#}, using defaults",
                    global_constants::LOG_TAG_CLI,
                    error
                );
                UserSettings::default()
            }),
        };

        if let Some(tesseract_cmd) = &args.tesseract_cmd {
            settings.tesseract_command = tesseract_cmd.clone();
        }

        Ok(settings)
    }

    pub async fn run(&self, args: &CliArgs) -> anyhow::Result<ExitCode> {
        let selector = args
            .method
            .as_deref()
            .unwrap_or(&self.settings.default_method);
        let bytes = tokio::fs::read(&args.image)
            .await
            .with_context(|| format!("Failed to read {}", args.image.display()))?;

        let progress = ProgressIndicator::start(self.orchestrator.progress_message(selector));
        let report = self.orchestrator.extract_from_bytes(&bytes, selector).await;
        progress.finish();

        let mut stdout = std::io::stdout().lock();
        OcrResultsView::build_with_report(&report).render_to(&mut stdout)?;

        if report.outcome.is_failure() {
            Ok(ExitCode::FAILURE)
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_method_and_overrides() {
        let args = CliArgs::parse_from([
            "ai-text-extractor",
            "scan.png",
            "--method",
            "Traditional OCR",
            "--tesseract-cmd",
            "/usr/local/bin/tesseract",
            "-vv",
        ]);

        assert_eq!(args.image, PathBuf::from("scan.png"));
        assert_eq!(args.method.as_deref(), Some("Traditional OCR"));
        assert_eq!(
            args.tesseract_cmd,
            Some(PathBuf::from("/usr/local/bin/tesseract"))
        );
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn test_cli_defaults_to_quiet_logging_without_method() {
        let args = CliArgs::parse_from(["ai-text-extractor", "scan.jpg"]);

        assert_eq!(args.method, None);
        assert_eq!(args.log_filter(), "warn");
    }

    #[test]
    fn test_load_settings_applies_tesseract_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        let args = CliArgs::parse_from([
            "ai-text-extractor".to_string(),
            "scan.png".to_string(),
            "--settings".to_string(),
            settings_path.display().to_string(),
            "--tesseract-cmd".to_string(),
            "/opt/tesseract".to_string(),
        ]);

        let settings = ExtractorApp::load_settings(&args).unwrap();

        assert_eq!(settings.tesseract_command, PathBuf::from("/opt/tesseract"));
        assert!(settings_path.exists());
    }

    #[tokio::test]
    async fn test_run_reports_unreadable_upload_as_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image_path = temp_dir.path().join("broken.png");
        std::fs::write(&image_path, b"not an image").unwrap();
        let settings = UserSettings {
            models_directory: Some(temp_dir.path().join("models")),
            ..UserSettings::default()
        };
        let app = ExtractorApp::build(settings).unwrap();
        let args = CliArgs::parse_from([
            "ai-text-extractor".to_string(),
            image_path.display().to_string(),
        ]);

        let exit_code = app.run(&args).await.unwrap();

        assert_eq!(exit_code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_run_fails_for_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings = UserSettings {
            models_directory: Some(temp_dir.path().join("models")),
            ..UserSettings::default()
        };
        let app = ExtractorApp::build(settings).unwrap();
        let args = CliArgs::parse_from([
            "ai-text-extractor".to_string(),
            temp_dir.path().join("missing.png").display().to_string(),
        ]);

        let error = app.run(&args).await.unwrap_err();

        assert!(error.to_string().contains("Failed to read"));
    }
}
