//! Progress reporting seam. The CLI plugs a progress bar in here; tests
//! and library callers use [`NullSink`].

pub trait ProgressSink {
    /// Called after each batch with cumulative counts.
    fn on_progress(&self, processed: usize, total: usize);

    /// Fire-and-forget status messages (batch failures, key ranges).
    fn notify(&self, message: &str, is_error: bool);
}

#[derive(Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_progress(&self, _processed: usize, _total: usize) {}

    fn notify(&self, _message: &str, _is_error: bool) {}
}
