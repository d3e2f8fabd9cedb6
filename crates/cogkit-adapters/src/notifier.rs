//! Notifier adapters.

use std::sync::{Arc, Mutex};

use cogkit_core::application::ports::Notifier;
use tracing::info;

/// Emits every notice as an `info` event on the `cogkit::notice` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notice(&self, message: &str) {
        info!(target: "cogkit::notice", "{message}");
    }
}

/// Keeps notices in memory for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notice(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
