use anyhow::Result;
use log::info;
use std::path::Path;

use super::extractor::{DeclarationExtractor, ExtractedFile};
use super::graph::DependencyGraph;
use super::index::PackageIndex;
use super::resolver::{IgnoredPrefixes, ImportResolver};
use super::scanner::FileScanner;

/// Orchestrates one analysis run: scan the tree, extract each file's
/// declarations once, build the package index, then resolve imports into
/// the dependency graph.
pub struct ProjectAnalyzer {
    scanner: FileScanner,
    extractor: DeclarationExtractor,
    resolver: ImportResolver,
}

impl ProjectAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_ignored(IgnoredPrefixes::standard())
    }

    pub fn with_ignored(ignored: IgnoredPrefixes) -> Result<Self> {
        Ok(Self {
            scanner: FileScanner::new(),
            extractor: DeclarationExtractor::new()?,
            resolver: ImportResolver::with_ignored(ignored),
        })
    }

    pub fn analyze(&self, root: &Path) -> Result<DependencyGraph> {
        let files = self.scanner.scan_directory(root)?;
        info!("found {} Java files under {}", files.len(), root.display());

        // Extract once per file; index building and resolution are two
        // read-only passes over the cached declarations.
        let extracted: Vec<ExtractedFile> = files
            .iter()
            .map(|file| ExtractedFile {
                relative: file.relative.clone(),
                declarations: self.extractor.extract_file(&file.path),
            })
            .collect();

        let index = PackageIndex::build(&extracted);
        info!("indexed {} declared packages", index.len());

        Ok(self.resolver.resolve(&extracted, &index))
    }
}
