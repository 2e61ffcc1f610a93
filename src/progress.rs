//! Spinner display for in-flight API requests

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is in flight
pub struct ApiSpinner {
    pb: ProgressBar,
}

impl ApiSpinner {
    /// Start a spinner with a message (hidden when stderr is not a tty)
    pub fn start(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Stop and clear the spinner
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error, leaving the message visible
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
