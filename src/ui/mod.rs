//! ui
//!
//! User-facing output for the `gitobj` binary.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing and object formatting

pub mod output;
