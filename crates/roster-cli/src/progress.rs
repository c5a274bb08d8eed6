//! Terminal progress reporting for import runs.

use indicatif::{ProgressBar, ProgressStyle};
use roster_import::ProgressSink;

/// A [`ProgressSink`] backed by an indicatif bar. Batch-level messages
/// print above the bar so they survive it.
pub struct BarSink {
    bar: ProgressBar,
}

impl BarSink {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rows ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for BarSink {
    fn on_progress(&self, processed: usize, _total: usize) {
        self.bar.set_position(processed as u64);
    }

    fn notify(&self, message: &str, is_error: bool) {
        if is_error {
            self.bar.println(format!("error: {message}"));
        } else {
            self.bar.println(message);
        }
    }
}
