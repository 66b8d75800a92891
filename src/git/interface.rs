//! git::interface
//!
//! Repository handle and object lookups using git2.
//!
//! # Architecture
//!
//! [`Repository`] owns a libgit2 session for its whole lifetime. Every
//! lookup borrows the session, obtains a native object handle, hands it to a
//! transform that copies what it needs into an owned value, and drops the
//! handle before returning. Handles never escape this module.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::Open`]: the repository could not be opened
//! - [`GitError::Lookup`]: an object could not be loaded as the requested
//!   kind, with a [`LookupFailure`] saying why
//! - [`GitError::PointerMismatch`]: a dynamic pointer did not match the
//!   statically requested kind
//!
//! # Example
//!
//! ```ignore
//! use gitobj::git::Repository;
//! use std::path::Path;
//!
//! let repo = Repository::open(Path::new("."))?;
//! let commit = repo.commit(oid)?;
//! println!("{}", commit.summary());
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::native::{self, Loadable};
use crate::core::config::Config;
use crate::core::object::{Blob, Commit, Object, Tag, Tree};
use crate::core::types::{ObjectKind, Oid, Pointer, PointerTo, TypeError};

/// Why an object lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    /// No object with this OID is stored.
    #[error("object not found")]
    NotFound,

    /// An object with this OID is stored, but it is a different kind.
    #[error("object is a {actual}")]
    KindMismatch {
        /// The kind actually stored
        actual: ObjectKind,
    },

    /// The engine failed for another reason (corrupt object, I/O error).
    #[error("{0}")]
    Engine(String),
}

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The repository could not be opened.
    #[error("failed to open repository at {path}: {message}")]
    Open {
        /// The path that was opened
        path: PathBuf,
        /// Engine message
        message: String,
    },

    /// An object could not be loaded.
    #[error(
        "failed to look up {} {oid}: {reason}",
        .kind.map_or("object", |k| k.as_str())
    )]
    Lookup {
        /// The OID that was requested
        oid: Oid,
        /// The kind that was requested, or `None` for an untyped lookup
        kind: Option<ObjectKind>,
        /// Why the lookup failed
        reason: LookupFailure,
    },

    /// A pointer's kind did not match the requested object type.
    #[error("pointer kind mismatch: expected {expected}, found {actual}")]
    PointerMismatch {
        /// Kind required by the caller
        expected: ObjectKind,
        /// Kind carried by the pointer
        actual: ObjectKind,
    },

    /// Invalid object id format.
    #[error("invalid object id: {oid}")]
    InvalidOid {
        /// Description of the invalid OID
        oid: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Check if this error came from opening a repository.
    pub fn is_open(&self) -> bool {
        matches!(self, GitError::Open { .. })
    }

    /// Check if this error came from an object lookup.
    pub fn is_lookup(&self) -> bool {
        matches!(self, GitError::Lookup { .. })
    }

    /// The lookup failure reason, if this is a lookup error.
    pub fn lookup_failure(&self) -> Option<&LookupFailure> {
        match self {
            GitError::Lookup { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<TypeError> for GitError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidOid(msg) => GitError::InvalidOid { oid: msg },
            TypeError::PointerMismatch { expected, actual } => {
                GitError::PointerMismatch { expected, actual }
            }
            TypeError::InvalidKind(msg) => GitError::Internal {
                message: format!("invalid object kind: {msg}"),
            },
        }
    }
}

/// Options controlling how a repository is opened.
///
/// The default matches [`Repository::open`]: the path must name the
/// repository itself (its working directory or git directory), and bare
/// repositories are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenOptions {
    /// Search parent directories for a repository
    pub discover: bool,
    /// Directories at which the upward search stops
    pub ceiling_dirs: Vec<PathBuf>,
    /// Reject bare repositories
    pub require_workdir: bool,
}

impl OpenOptions {
    /// Build options from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            discover: config.discover(),
            ceiling_dirs: config.ceiling_dirs().to_vec(),
            require_workdir: config.require_workdir(),
        }
    }

    /// Enable or disable upward search.
    pub fn discover(mut self, discover: bool) -> Self {
        self.discover = discover;
        self
    }

    /// Add a directory at which the upward search stops.
    pub fn ceiling_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ceiling_dirs.push(dir.into());
        self
    }

    /// Reject bare repositories.
    pub fn require_workdir(mut self, require: bool) -> Self {
        self.require_workdir = require;
        self
    }
}

/// A git repository.
///
/// Owns the native session; dropping the `Repository` releases it. The
/// working directory is resolved once at open time.
///
/// # Example
///
/// ```ignore
/// use gitobj::core::types::Pointer;
/// use gitobj::git::Repository;
///
/// let repo = Repository::open(Path::new("."))?;
/// match repo.directory() {
///     Some(dir) => println!("working directory: {}", dir.display()),
///     None => println!("bare repository"),
/// }
///
/// let object = repo.resolve(Pointer::Tree(oid))?;
/// ```
pub struct Repository {
    /// The underlying git2 repository
    repo: git2::Repository,
    /// Working directory, `None` if bare
    directory: Option<PathBuf>,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.repo.path())
            .field("directory", &self.directory)
            .finish()
    }
}

impl Repository {
    // =========================================================================
    // Opening
    // =========================================================================

    /// Open the repository at the given path.
    ///
    /// `path` may be a working directory or a git directory. Parent
    /// directories are not searched; use [`Repository::open_with`] for that.
    ///
    /// # Errors
    ///
    /// - [`GitError::Open`] if the engine cannot open a repository there
    pub fn open(path: &Path) -> Result<Self, GitError> {
        Self::open_with(path, &OpenOptions::default())
    }

    /// Open a repository with explicit options.
    ///
    /// # Errors
    ///
    /// - [`GitError::Open`] if no repository is found, or the repository is
    ///   bare and `require_workdir` is set
    pub fn open_with(path: &Path, options: &OpenOptions) -> Result<Self, GitError> {
        let flags = if options.discover {
            git2::RepositoryOpenFlags::empty()
        } else {
            git2::RepositoryOpenFlags::NO_SEARCH
        };

        let repo = git2::Repository::open_ext(path, flags, &options.ceiling_dirs).map_err(
            |e| {
                tracing::debug!(path = %path.display(), error = %e.message(), "open failed");
                GitError::Open {
                    path: path.to_path_buf(),
                    message: e.message().to_string(),
                }
            },
        )?;

        if options.require_workdir && repo.is_bare() {
            return Err(GitError::Open {
                path: path.to_path_buf(),
                message: "bare repository has no working directory".to_string(),
            });
        }

        Ok(Self::from_git2(repo))
    }

    /// Wrap an already opened git2 repository.
    pub fn from_git2(repo: git2::Repository) -> Self {
        let directory = repo.workdir().map(Path::to_path_buf);
        tracing::debug!(
            git_dir = %repo.path().display(),
            bare = directory.is_none(),
            "opened repository"
        );
        Self { repo, directory }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// The working directory, or `None` if the repository is bare.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Check if the repository is bare.
    pub fn is_bare(&self) -> bool {
        self.directory.is_none()
    }

    /// Path to the git directory (`.git` or the bare repository itself).
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    // =========================================================================
    // Object Lookups
    // =========================================================================

    /// Load a native object and transform it into something else.
    ///
    /// The native handle is dropped before returning, whether or not
    /// `transform` succeeds.
    fn with_object<T>(
        &self,
        oid: Oid,
        kind: Option<ObjectKind>,
        transform: impl FnOnce(&git2::Object<'_>) -> Result<T, GitError>,
    ) -> Result<T, GitError> {
        tracing::debug!(%oid, kind = kind.map_or("any", |k| k.as_str()), "looking up object");

        let object = self
            .repo
            .find_object(native::oid(oid)?, Some(native::object_type(kind)))
            .map_err(|e| self.lookup_error(oid, kind, e))?;

        let value = transform(&object);
        drop(object);
        tracing::trace!(%oid, "released object handle");
        value
    }

    /// Categorize a failed `find_object`.
    ///
    /// libgit2 reports a kind mismatch as "not found", so the object
    /// database is consulted to tell the two apart.
    fn lookup_error(&self, oid: Oid, kind: Option<ObjectKind>, err: git2::Error) -> GitError {
        let reason = match (kind, self.stored_kind(oid)) {
            (_, None) if err.code() == git2::ErrorCode::NotFound => LookupFailure::NotFound,
            (Some(expected), Some(Some(actual))) if actual != expected => {
                LookupFailure::KindMismatch { actual }
            }
            _ => LookupFailure::Engine(err.message().to_string()),
        };

        tracing::debug!(%oid, %reason, "lookup failed");
        GitError::Lookup { oid, kind, reason }
    }

    /// The kind stored under `oid` according to the object database.
    ///
    /// Outer `None` means the object does not exist; inner `None` means it
    /// exists with a kind this crate does not model.
    fn stored_kind(&self, oid: Oid) -> Option<Option<ObjectKind>> {
        let odb = self.repo.odb().ok()?;
        let (_, object_type) = odb.read_header(native::oid(oid).ok()?).ok()?;
        Some(native::object_kind(object_type))
    }

    /// Load an object of the type `T`.
    pub fn lookup<T: Loadable>(&self, oid: Oid) -> Result<T, GitError> {
        self.with_object(oid, Some(T::KIND), T::from_native)
    }

    /// Load the blob with the given OID.
    ///
    /// # Errors
    ///
    /// - [`GitError::Lookup`] if no blob with this OID exists
    pub fn blob(&self, oid: Oid) -> Result<Blob, GitError> {
        self.lookup(oid)
    }

    /// Load the commit with the given OID.
    ///
    /// # Errors
    ///
    /// - [`GitError::Lookup`] if no commit with this OID exists
    pub fn commit(&self, oid: Oid) -> Result<Commit, GitError> {
        self.lookup(oid)
    }

    /// Load the tag with the given OID.
    ///
    /// # Errors
    ///
    /// - [`GitError::Lookup`] if no annotated tag with this OID exists
    pub fn tag(&self, oid: Oid) -> Result<Tag, GitError> {
        self.lookup(oid)
    }

    /// Load the tree with the given OID.
    ///
    /// # Errors
    ///
    /// - [`GitError::Lookup`] if no tree with this OID exists
    pub fn tree(&self, oid: Oid) -> Result<Tree, GitError> {
        self.lookup(oid)
    }

    /// Load the object a typed pointer refers to.
    pub fn object_at<T: Loadable>(&self, pointer: PointerTo<T>) -> Result<T, GitError> {
        self.lookup(pointer.oid())
    }

    /// Load the object a pointer refers to.
    ///
    /// # Errors
    ///
    /// - [`GitError::Lookup`] if the object is missing or is not the kind
    ///   the pointer names
    pub fn resolve(&self, pointer: Pointer) -> Result<Object, GitError> {
        match pointer {
            Pointer::Blob(oid) => self.blob(oid).map(Object::Blob),
            Pointer::Commit(oid) => self.commit(oid).map(Object::Commit),
            Pointer::Tag(oid) => self.tag(oid).map(Object::Tag),
            Pointer::Tree(oid) => self.tree(oid).map(Object::Tree),
        }
    }

    /// Load an object of whatever kind is stored under `oid`.
    ///
    /// # Errors
    ///
    /// - [`GitError::Lookup`] if no object with this OID exists
    pub fn object(&self, oid: Oid) -> Result<Object, GitError> {
        self.with_object(oid, None, |object| {
            let kind = object.kind().and_then(native::object_kind).ok_or_else(|| {
                GitError::Lookup {
                    oid,
                    kind: None,
                    reason: LookupFailure::Engine("unsupported object type".to_string()),
                }
            })?;

            match kind {
                ObjectKind::Blob => Blob::from_native(object).map(Object::Blob),
                ObjectKind::Commit => Commit::from_native(object).map(Object::Commit),
                ObjectKind::Tag => Tag::from_native(object).map(Object::Tag),
                ObjectKind::Tree => Tree::from_native(object).map(Object::Tree),
            }
        })
    }

    /// Check whether an object with this OID is stored, of any kind.
    pub fn contains(&self, oid: Oid) -> bool {
        self.stored_kind(oid).is_some()
    }
}

impl Drop for Repository {
    fn drop(&mut self) {
        tracing::trace!(git_dir = %self.repo.path().display(), "closing repository");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid() -> Oid {
        Oid::new("c0ffee0000000000000000000000000000000000").unwrap()
    }

    mod git_error {
        use super::*;

        #[test]
        fn open_display() {
            let err = GitError::Open {
                path: PathBuf::from("/nowhere"),
                message: "could not find repository".to_string(),
            };
            assert!(err.is_open());
            assert!(!err.is_lookup());
            assert_eq!(
                err.to_string(),
                "failed to open repository at /nowhere: could not find repository"
            );
        }

        #[test]
        fn lookup_display_typed() {
            let err = GitError::Lookup {
                oid: oid(),
                kind: Some(ObjectKind::Blob),
                reason: LookupFailure::KindMismatch {
                    actual: ObjectKind::Commit,
                },
            };
            assert!(err.is_lookup());
            assert_eq!(
                err.to_string(),
                format!("failed to look up blob {}: object is a commit", oid())
            );
        }

        #[test]
        fn lookup_display_untyped() {
            let err = GitError::Lookup {
                oid: oid(),
                kind: None,
                reason: LookupFailure::NotFound,
            };
            assert_eq!(
                err.to_string(),
                format!("failed to look up object {}: object not found", oid())
            );
            assert_eq!(err.lookup_failure(), Some(&LookupFailure::NotFound));
        }

        #[test]
        fn from_type_error() {
            let err = GitError::from(TypeError::PointerMismatch {
                expected: ObjectKind::Tag,
                actual: ObjectKind::Tree,
            });
            assert!(matches!(
                err,
                GitError::PointerMismatch {
                    expected: ObjectKind::Tag,
                    actual: ObjectKind::Tree
                }
            ));

            let err = GitError::from(TypeError::InvalidOid("xyz".to_string()));
            assert!(matches!(err, GitError::InvalidOid { .. }));
            assert!(err.lookup_failure().is_none());
        }
    }

    mod open_options {
        use super::*;
        use crate::core::config::{FileConfig, OpenDefaults};

        #[test]
        fn default_does_not_search() {
            let options = OpenOptions::default();
            assert!(!options.discover);
            assert!(options.ceiling_dirs.is_empty());
            assert!(!options.require_workdir);
        }

        #[test]
        fn builder() {
            let options = OpenOptions::default()
                .discover(true)
                .ceiling_dir("/home")
                .require_workdir(true);
            assert!(options.discover);
            assert_eq!(options.ceiling_dirs, vec![PathBuf::from("/home")]);
            assert!(options.require_workdir);
        }

        #[test]
        fn from_config() {
            let config = Config::from_file(FileConfig {
                open: Some(OpenDefaults {
                    discover: Some(true),
                    ceiling_dirs: Some(vec![PathBuf::from("/srv")]),
                    require_workdir: None,
                }),
                output: None,
            });

            let options = OpenOptions::from_config(&config);
            assert!(options.discover);
            assert_eq!(options.ceiling_dirs, vec![PathBuf::from("/srv")]);
            assert!(!options.require_workdir);
        }
    }
}
