//! git
//!
//! Single interface to the native engine.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to libgit2. No other module imports
//! `git2`; everything outside sees the owned types from [`crate::core`].
//!
//! # Responsibilities
//!
//! - Opening repositories and resolving their working directory
//! - Typed object lookups (blob, commit, tag, tree)
//! - Pointer dispatch to the matching lookup
//!
//! # Invariants
//!
//! - Every native object handle is released before the lookup returns
//! - The repository session is released exactly once, when the
//!   [`Repository`] is dropped
//! - Lookups for one kind never return an object of another kind
//!
//! # Example
//!
//! ```ignore
//! use gitobj::core::types::{Oid, Pointer};
//! use gitobj::git::Repository;
//! use std::path::Path;
//!
//! let repo = Repository::open(Path::new("."))?;
//! let oid = Oid::new("c0ffee...")?;
//!
//! let commit = repo.commit(oid)?;
//! let tree = repo.object_at(commit.tree)?;
//! let object = repo.resolve(Pointer::Commit(oid))?;
//! ```

mod interface;
mod native;

pub use interface::{GitError, LookupFailure, OpenOptions, Repository};
pub use native::Loadable;
