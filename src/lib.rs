//! gitobj - Typed repository and object lookups over libgit2
//!
//! gitobj opens git repositories and loads blobs, commits, tags and trees
//! by OID, returning owned values and typed errors. libgit2 does the
//! storage work; this crate manages handle lifetimes and makes sure a lookup
//! for one kind of object never yields another.
//!
//! # Architecture
//!
//! - [`core`] - Engine-independent types: OIDs, pointers, loaded objects, config
//! - [`git`] - The only module that talks to libgit2
//! - [`cli`] - Command-line interface for the `gitobj` binary
//! - [`ui`] - User-facing output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use gitobj::core::types::{Oid, Pointer};
//! use gitobj::git::Repository;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = Repository::open(Path::new("."))?;
//! let oid = Oid::new("c0ffee0000000000000000000000000000000000")?;
//!
//! let commit = repo.commit(oid)?;
//! let tree = repo.object_at(commit.tree)?;
//! for entry in &tree.entries {
//!     println!("{}", entry.name());
//! }
//!
//! // A blob lookup on a commit OID fails with a kind mismatch.
//! assert!(repo.resolve(Pointer::Blob(oid)).is_err());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
