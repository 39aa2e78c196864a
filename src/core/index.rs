use log::warn;
use std::collections::HashMap;

use super::extractor::ExtractedFile;

/// Mapping from declared package name to the root-relative path of the one
/// file that declares it. Built once, read-only afterward.
#[derive(Debug, Default)]
pub struct PackageIndex {
    by_name: HashMap<String, String>,
}

impl PackageIndex {
    /// Records every package declaration in file order. Files without a
    /// package declaration contribute no entry.
    pub fn build(files: &[ExtractedFile]) -> Self {
        let mut index = Self::default();
        for file in files {
            if let Some(package) = &file.declarations.package {
                index.insert(package, &file.relative);
            }
        }
        index
    }

    /// Last-write-wins on duplicate package names. The tool has no notion
    /// of multiple compilation units sharing one package, so the collision
    /// is logged rather than treated as an error.
    pub fn insert(&mut self, package: &str, file: &str) {
        if let Some(previous) = self
            .by_name
            .insert(package.to_string(), file.to_string())
        {
            if previous != file {
                warn!(
                    "package '{}' declared by both {} and {}; keeping {}",
                    package, previous, file, file
                );
            }
        }
    }

    pub fn resolve(&self, package: &str) -> Option<&str> {
        self.by_name.get(package).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
