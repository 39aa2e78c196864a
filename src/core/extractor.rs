use anyhow::Result;
use log::warn;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// The declarations extracted from one file: at most one package name and
/// the set of distinct imported names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub package: Option<String>,
    pub imports: BTreeSet<String>,
}

/// A file's declarations paired with its root-relative path.
#[derive(Debug, Clone)]
pub struct ExtractedFile {
    pub relative: String,
    pub declarations: Declarations,
}

/// Line-anchored extraction of `package` and `import` statements.
///
/// This is deliberately not a Java parser: statements spanning multiple
/// lines, `import static`, wildcard imports, and anything preceded by
/// non-whitespace tokens on the same line are skipped.
pub struct DeclarationExtractor {
    package_re: Regex,
    import_re: Regex,
}

impl DeclarationExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            package_re: Regex::new(r"^\s*package\s+([\w.]+)\s*;")?,
            import_re: Regex::new(r"^\s*import\s+([\w.]+)\s*;")?,
        })
    }

    /// Extracts declarations from in-memory source text. Only the first
    /// matching package line is kept; every matching import line
    /// contributes, deduplicated via set semantics.
    pub fn extract_source(&self, source: &str) -> Declarations {
        let mut declarations = Declarations::default();

        for line in source.lines() {
            if declarations.package.is_none() {
                if let Some(captures) = self.package_re.captures(line) {
                    declarations.package = Some(captures[1].to_string());
                }
            }
            if let Some(captures) = self.import_re.captures(line) {
                declarations.imports.insert(captures[1].to_string());
            }
        }

        declarations
    }

    /// Reads and extracts one file. Undecodable bytes are replaced rather
    /// than raised, and an unreadable file yields empty declarations so a
    /// single bad file never aborts the run.
    pub fn extract_file(&self, path: &Path) -> Declarations {
        match fs::read(path) {
            Ok(bytes) => self.extract_source(&String::from_utf8_lossy(&bytes)),
            Err(err) => {
                warn!("failed to read {}: {}", path.display(), err);
                Declarations::default()
            }
        }
    }
}
