//! # classreach
//!
//! Transitive Java class reachability analysis for server build pruning.
//!
//! Given a project root and one entry-point source file, classreach parses
//! import declarations and method-invocation qualifiers to compute the full
//! set of classes the entry point can reach. Matching is syntactic on
//! purpose: the result over-approximates, keeping external library
//! references and even call-qualifier variable names as unresolved leaves
//! instead of attempting semantic resolution.
//!
//! A peripheral scanner lists deployed assets never referenced from the
//! sources, for trimming server packages.

pub mod assets;
pub mod core;
pub mod error;
pub mod formatters;
pub mod parsers;

pub use crate::core::{
    extract_dependencies, DependencyRecord, ModuleIndex, ReachabilityResolver, Resolution,
};
pub use crate::error::{Error, Result};
pub use crate::parsers::{JavaSource, ParseCache};
