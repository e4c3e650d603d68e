//! Picks the pushed files that get a summary.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::PushEvent;
use crate::config::WatchConfig;

/// Path filter for the watched directory.
///
/// Both checks are literal and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFilter {
    prefix: String,
    skip_suffix: String,
}

impl UploadFilter {
    pub fn new(prefix: impl Into<String>, skip_suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            skip_suffix: skip_suffix.into(),
        }
    }

    pub fn from_config(watch: &WatchConfig) -> Self {
        Self::new(watch.prefix.clone(), watch.skip_suffix.clone())
    }

    /// `true` if a repository-relative path should be rendered.
    ///
    /// An empty skip suffix excludes nothing.
    pub fn matches(&self, path: &str) -> bool {
        let skipped = !self.skip_suffix.is_empty() && path.ends_with(&self.skip_suffix);
        path.starts_with(&self.prefix) && !skipped
    }
}

impl Default for UploadFilter {
    fn default() -> Self {
        Self::from_config(&WatchConfig::default())
    }
}

/// A pushed file chosen for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Path as it appears in the event (repository-relative).
    pub relative: String,
    /// `relative` resolved against the working root.
    pub path: PathBuf,
}

/// Resolve the files to process for one run.
///
/// Returns files in push order, first occurrence wins.
/// Paths missing from disk are skipped silently.
pub fn select_uploads(event: &PushEvent, root: &Path, filter: &UploadFilter) -> Vec<SelectedFile> {
    let mut processed: HashSet<PathBuf> = HashSet::new();
    let mut selected = Vec::new();

    for path in event.changed_paths() {
        if !filter.matches(path) {
            continue;
        }
        let file_path = root.join(path);
        if !file_path.exists() || processed.contains(&file_path) {
            continue;
        }
        processed.insert(file_path.clone());
        selected.push(SelectedFile {
            relative: path.to_string(),
            path: file_path,
        });
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(json: &str) -> PushEvent {
        PushEvent::parse(json).unwrap()
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "x").unwrap();
    }

    #[test]
    fn filter_requires_uploads_prefix() {
        let filter = UploadFilter::default();
        assert!(filter.matches("uploads/readme.txt"));
        assert!(filter.matches("uploads/nested/data.csv"));
        assert!(!filter.matches("src/app/x.py"));
        assert!(!filter.matches("docs/uploads/readme.txt"));
        assert!(!filter.matches("uploads"));
        assert!(!filter.matches("Uploads/readme.txt"));
    }

    #[test]
    fn filter_rejects_pdfs() {
        let filter = UploadFilter::default();
        assert!(!filter.matches("uploads/report.pdf"));
        assert!(!filter.matches("uploads/nested/x.pdf"));
        // Case-sensitive, as is the prefix.
        assert!(filter.matches("uploads/report.PDF"));
        assert!(filter.matches("uploads/report.pdf.txt"));
    }

    #[test]
    fn custom_filter() {
        let filter = UploadFilter::new("inbox/", ".bin");
        assert!(filter.matches("inbox/a.txt"));
        assert!(!filter.matches("inbox/a.bin"));
        assert!(!filter.matches("uploads/a.txt"));
    }

    #[test]
    fn empty_skip_suffix_excludes_nothing() {
        let filter = UploadFilter::new("uploads/", "");
        assert!(filter.matches("uploads/a.txt"));
        assert!(filter.matches("uploads/report.pdf"));
        assert!(!filter.matches("src/a.txt"));
    }

    #[test]
    fn empty_commits_select_nothing() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "uploads/a.txt");
        let selected = select_uploads(&PushEvent::default(), dir.path(), &UploadFilter::default());
        assert!(selected.is_empty());
    }

    #[test]
    fn selects_existing_matching_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "uploads/b.txt");
        touch(dir.path(), "uploads/a.txt");
        touch(dir.path(), "src/app/x.py");
        touch(dir.path(), "uploads/old.pdf");

        let ev = event(
            r#"{"commits": [
                {"added": ["uploads/b.txt", "src/app/x.py"], "modified": ["uploads/old.pdf"]},
                {"added": ["uploads/gone.txt"], "modified": ["uploads/a.txt"]}
            ]}"#,
        );
        let selected = select_uploads(&ev, dir.path(), &UploadFilter::default());
        let relative: Vec<_> = selected.iter().map(|f| f.relative.as_str()).collect();
        assert_eq!(relative, vec!["uploads/b.txt", "uploads/a.txt"]);
        assert_eq!(selected[0].path, dir.path().join("uploads/b.txt"));
    }

    #[test]
    fn duplicates_across_commits_are_selected_once() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "uploads/a.txt");
        touch(dir.path(), "uploads/b.txt");

        let ev = event(
            r#"{"commits": [
                {"added": ["uploads/a.txt"]},
                {"added": ["uploads/b.txt"], "modified": ["uploads/a.txt"]},
                {"modified": ["uploads/a.txt", "uploads/b.txt"]}
            ]}"#,
        );
        let selected = select_uploads(&ev, dir.path(), &UploadFilter::default());
        let paths: Vec<_> = selected.into_iter().map(|f| f.path).collect();
        assert_eq!(
            paths,
            vec![dir.path().join("uploads/a.txt"), dir.path().join("uploads/b.txt")]
        );
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let ev = event(r#"{"commits": [{"added": ["uploads/never-written.txt"]}]}"#);
        assert!(select_uploads(&ev, dir.path(), &UploadFilter::default()).is_empty());
    }
}
