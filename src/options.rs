//! Options controlling a single generation call.
use chrono::{DateTime, Utc};

/// Application name recorded in `docProps/app.xml` by default.
pub const DEFAULT_APPLICATION: &str = "testament-docx";

/// Options for [`crate::generate`] and [`crate::build_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Mark the document as a sample (watermark, notice, filename prefix)
    pub sample: bool,
    /// Creation time written to `docProps/core.xml`; `None` uses the current time
    pub timestamp: Option<DateTime<Utc>>,
    /// Application name written to `docProps/app.xml`
    pub application: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            sample: false,
            timestamp: None,
            application: DEFAULT_APPLICATION.to_string(),
        }
    }
}

impl GenerateOptions {
    /// Options for a sample document.
    pub fn sample() -> Self {
        Self {
            sample: true,
            ..Self::default()
        }
    }

    /// Pin the metadata timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn timestamp_or_now(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or_else(Utc::now)
    }
}
