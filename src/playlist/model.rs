use chrono::{DateTime, Local};

/// One playable manifest entry. Identity is its position in the sorted playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub url: String,
    pub timestamp: DateTime<Local>,
}

impl Track {
    /// Format the timestamp for display using a strftime-style `format`.
    pub fn formatted_time(&self, format: &str) -> String {
        self.timestamp.format(format).to_string()
    }
}
