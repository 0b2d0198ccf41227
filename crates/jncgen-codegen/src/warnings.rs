//! Deduplicated warning channel.

use std::collections::HashSet;
use tracing::warn;

/// Collects generator warnings, emitting each key at most once.
///
/// Every accepted warning is logged through `tracing` and kept so callers
/// can inspect or report them after generation.
#[derive(Debug, Default)]
pub struct WarningLog {
    seen: HashSet<String>,
    messages: Vec<String>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` under `key`. Returns `false` if the key was already
    /// warned about.
    pub fn warn(&mut self, key: impl Into<String>, message: impl Into<String>) -> bool {
        if !self.seen.insert(key.into()) {
            return false;
        }
        let message = message.into();
        warn!("{message}");
        self.messages.push(message);
        true
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
