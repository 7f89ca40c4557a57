//! Spinner shown while a pattern is generated and written

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Stage-by-stage activity indicator
pub struct ProgressManager {
    spinner: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a ticking spinner on stderr
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { spinner }
    }

    /// Create a spinner that never draws
    pub fn hidden() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
        }
    }

    /// Announce the stage currently running
    pub fn stage(&self, message: &str) {
        debug!("{message}");
        self.spinner.set_message(message.to_string());
    }

    /// Stop and remove the spinner
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
