//! Yangtree Core Library
//!
//! Renders resolved YANG schema module graphs as compact, aligned
//! ASCII trees, one line per node.
//!
//! # Features
//!
//! - Load pre-resolved module documents in JSON or YAML
//! - Resolve includes, config inheritance, list keys and augment
//!   targets at load time
//! - Render data nodes, augments, rpcs and notifications with status,
//!   access flags, cardinality markers, types, keys and features
//! - Compact leafref target paths to minimize prefix repetition
//! - Optional depth limiting and subtree-path filtering
//!
//! # Example
//!
//! ```no_run
//! use yangtree_core::{ModuleLoader, RenderConfig, TreeRenderer};
//! use std::path::PathBuf;
//!
//! let loader = ModuleLoader::new().with_search_dir("modules");
//! let modules = loader.load(&[PathBuf::from("example.json")]).unwrap();
//!
//! let renderer = TreeRenderer::new(RenderConfig::new().with_depth(3));
//! print!("{}", renderer.render(&modules));
//! ```

pub mod config;
pub mod engine;
pub mod models;
pub mod output;

// Re-exports for convenience
pub use config::RenderConfig;
pub use engine::{
    access_flags, compact_target, status_marker, LoadError, Mode, ModuleLoader, TreeRenderer,
};
pub use models::*;
pub use output::{legend, write_tree};
