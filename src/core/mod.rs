pub mod analyzer;
pub mod extractor;
pub mod graph;
pub mod index;
pub mod resolver;
pub mod scanner;

pub use analyzer::ProjectAnalyzer;
pub use extractor::{DeclarationExtractor, Declarations, ExtractedFile};
pub use graph::{DependencyGraph, Edge, GraphBuilder, Node, NodeKind};
pub use index::PackageIndex;
pub use resolver::{IgnoredPrefixes, ImportResolver};
pub use scanner::{FileScanner, SourceFile};
