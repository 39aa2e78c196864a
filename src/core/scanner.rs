use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A source file found under the scanned root.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Full path, used for reading the file's content.
    pub path: PathBuf,
    /// Path relative to the scanned root; the file's node identifier.
    pub relative: String,
}

pub struct FileScanner {
    extension: String,
}

impl FileScanner {
    pub fn new() -> Self {
        Self::with_extension("java")
    }

    pub fn with_extension(extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
        }
    }

    /// Recursively collects all files under `root` with the target
    /// extension, sorted by relative path so downstream output is
    /// reproducible across runs.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<SourceFile>> {
        if !root.is_dir() {
            bail!("project directory not found: {}", root.display());
        }

        let mut files: Vec<SourceFile> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == self.extension)
            })
            .map(|entry| {
                let path = entry.path().to_path_buf();
                let relative = path
                    .strip_prefix(root)
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .replace('\\', "/");
                SourceFile { path, relative }
            })
            .collect();

        files.sort_by(|a, b| a.relative.cmp(&b.relative));

        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}
