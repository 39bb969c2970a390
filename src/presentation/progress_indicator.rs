use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::global_constants;

/// Spinner shown on stderr while an engine is busy.
pub struct ProgressIndicator {
    spinner: ProgressBar,
}

impl ProgressIndicator {
    pub fn start(message: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(
            global_constants::PROGRESS_TICK_MILLIS,
        ));
        Self { spinner }
    }

    pub fn finish(self) {
        self.spinner.finish_and_clear();
    }
}
