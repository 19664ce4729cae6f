//! Grid configuration.

/// Per-grid settings.
///
/// The defaults reproduce the markers the grid has always written; override
/// them when the host renders placeholders or empty cells differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Log skipped operations at `warn` level.
    pub debug: bool,

    /// `data-key` given to placeholder cells created by `set_empty_column`.
    pub placeholder_key: String,

    /// Number of non-breaking spaces in a placeholder cell.
    pub placeholder_width: usize,

    /// `data-content` marker for body cells with empty or absent values.
    pub empty_marker: String,

    /// Value written for extra row attributes missing from a record.
    pub missing_attribute_marker: String,

    /// Column used by `copy`/`paste` when no index is given.
    pub default_clip_index: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            debug: false,
            placeholder_key: "__loading__".to_string(),
            placeholder_width: 20,
            empty_marker: "!".to_string(),
            missing_attribute_marker: "not found".to_string(),
            default_clip_index: 1,
        }
    }
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn placeholder(mut self, key: impl Into<String>, width: usize) -> Self {
        self.placeholder_key = key.into();
        self.placeholder_width = width;
        self
    }

    pub fn empty_marker(mut self, marker: impl Into<String>) -> Self {
        self.empty_marker = marker.into();
        self
    }

    pub fn missing_attribute_marker(mut self, marker: impl Into<String>) -> Self {
        self.missing_attribute_marker = marker.into();
        self
    }

    pub fn default_clip_index(mut self, index: usize) -> Self {
        self.default_clip_index = index;
        self
    }

    /// Text of a placeholder cell.
    pub fn placeholder_text(&self) -> String {
        "\u{a0}".repeat(self.placeholder_width)
    }
}
