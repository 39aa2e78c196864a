use log::debug;

use super::extractor::ExtractedFile;
use super::graph::{DependencyGraph, GraphBuilder, NodeKind};
use super::index::PackageIndex;

/// Namespace prefixes whose imports are excluded from the graph entirely,
/// standard library and common framework namespaces by default.
#[derive(Debug, Clone)]
pub struct IgnoredPrefixes {
    prefixes: Vec<String>,
}

impl IgnoredPrefixes {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new([
            "java.",
            "javax.",
            "jakarta.",
            "org.apache.",
            "org.springframework.",
        ])
    }

    pub fn matches(&self, import: &str) -> bool {
        self.prefixes.iter().any(|prefix| import.starts_with(prefix))
    }
}

impl Default for IgnoredPrefixes {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolves each file's imports into graph edges against the package
/// index.
///
/// Precedence per import: ignored-prefix filter, then exact package-name
/// match, then first-segment fallback, then the import string kept
/// verbatim as an external reference. The fallback is a best-effort
/// heuristic for imports of sub-symbols whose root segment coincides with
/// an indexed package; it can produce false positives when segment names
/// collide across unrelated packages.
pub struct ImportResolver {
    ignored: IgnoredPrefixes,
}

impl ImportResolver {
    pub fn new() -> Self {
        Self::with_ignored(IgnoredPrefixes::standard())
    }

    pub fn with_ignored(ignored: IgnoredPrefixes) -> Self {
        Self { ignored }
    }

    pub fn resolve(&self, files: &[ExtractedFile], index: &PackageIndex) -> DependencyGraph {
        let mut builder = GraphBuilder::new();

        for file in files {
            for import in &file.declarations.imports {
                if self.ignored.matches(import) {
                    continue;
                }

                if let Some(target) = index.resolve(import) {
                    builder.add_dependency(&file.relative, target, NodeKind::File);
                    continue;
                }

                let root_segment = import.split('.').next().unwrap_or(import);
                if let Some(target) = index.resolve(root_segment) {
                    debug!(
                        "{}: resolved '{}' to {} via first-segment fallback",
                        file.relative, import, target
                    );
                    builder.add_dependency(&file.relative, target, NodeKind::File);
                    continue;
                }

                builder.add_dependency(&file.relative, import, NodeKind::External);
            }
        }

        builder.build()
    }
}

impl Default for ImportResolver {
    fn default() -> Self {
        Self::new()
    }
}
