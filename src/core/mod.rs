//! core
//!
//! Engine-independent domain types for gitobj.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Oid, ObjectKind, Pointer, PointerTo
//! - [`object`] - Loaded objects: Blob, Commit, Tag, Tree
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Nothing here touches the native engine; see [`crate::git`]

pub mod config;
pub mod object;
pub mod types;
