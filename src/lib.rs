//! # jdepgraph
//!
//! Static Java import dependency graph extractor.
//!
//! jdepgraph scans a Java source tree, reads each file's `package` and
//! `import` declarations with line-anchored matching (no compilation, no
//! symbol resolution), and resolves every import to either another file in
//! the tree or an opaque external reference.
//!
//! ## Output
//!
//! A `graph.json` document with a flat `nodes` list (string ids) and a
//! `links` list of `source`/`target` pairs, suitable for visualization
//! tools that consume node/link graphs.

pub mod core;
pub mod formatters;
