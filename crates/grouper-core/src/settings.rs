use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback receiving diagnostic messages from the grouping engine.
pub type LogCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Settings for controlling grouping behavior.
#[derive(Clone, Serialize, Deserialize)]
pub struct GroupingSettings {
    /// Number of distinct keys to reserve room for before scanning.
    /// Purely a sizing hint; 0 lets the bucket index grow on demand.
    pub capacity_hint: usize,

    /// Optional callback for logging.
    #[serde(skip)]
    pub log_callback: Option<LogCallback>,
}

impl Default for GroupingSettings {
    fn default() -> Self {
        Self {
            capacity_hint: 0,
            log_callback: None,
        }
    }
}

impl fmt::Debug for GroupingSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupingSettings")
            .field("capacity_hint", &self.capacity_hint)
            .field("log_callback", &self.log_callback.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl GroupingSettings {
    /// Creates a new instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected number of distinct keys.
    pub fn with_capacity_hint(mut self, capacity: usize) -> Self {
        self.capacity_hint = capacity;
        self
    }

    /// Sets the log callback.
    pub fn with_log_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.log_callback = Some(Arc::new(callback));
        self
    }

    /// Logs a message if a callback is configured.
    pub fn log(&self, message: &str) {
        if let Some(ref callback) = self.log_callback {
            callback(message);
        }
    }

    pub fn is_logging(&self) -> bool {
        self.log_callback.is_some()
    }
}
