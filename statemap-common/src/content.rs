use crate::paths::{content_path, content_viewer_src};
use crate::RegionRecord;

/// What the content modal shows for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    pub title: String,
    /// Resource path, also shown to the user when loading fails.
    pub path: String,
    /// Frame source with the viewer fragment attached.
    pub src: String,
}

impl ContentView {
    /// `None` for a missing record or one without an id.
    pub fn for_record(public_url: &str, record: Option<&RegionRecord>) -> Option<Self> {
        let record = record.filter(|r| !r.id.is_empty())?;
        let path = content_path(public_url, &record.name);
        Some(Self {
            title: record.name.clone(),
            src: content_viewer_src(&path),
            path,
        })
    }

    pub fn error_lines(&self) -> [String; 2] {
        [
            format!("Could not load content for {}.", self.title),
            format!("Path attempted: {}", self.path),
        ]
    }
}

/// Load-failure flag of the content frame. Only the watched path can fail,
/// so a late result for an earlier record never touches the current one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadError {
    watching: Option<String>,
    failed: bool,
}

impl LoadError {
    /// Track `path` from now on, dropping any earlier failure.
    pub fn watch(&mut self, path: Option<&str>) {
        self.watching = path.map(str::to_string);
        self.failed = false;
    }

    /// Returns whether the failure was recorded.
    pub fn fail(&mut self, path: &str) -> bool {
        if self.watching.as_deref() != Some(path) {
            return false;
        }
        self.failed = true;
        true
    }

    pub fn reset(&mut self) {
        self.failed = false;
    }

    pub fn watching(&self) -> Option<&str> {
        self.watching.as_deref()
    }

    pub fn is_failed(&self, path: &str) -> bool {
        self.failed && self.watching.as_deref() == Some(path)
    }
}
