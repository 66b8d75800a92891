//! git::native
//!
//! Conversions between git2 handles and the owned object model.
//!
//! Every function here borrows a native handle and copies out what it
//! needs; none of them keep a reference past their return.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use super::interface::{GitError, LookupFailure};
use crate::core::object::{Blob, Commit, GitObject, Signature, Tag, Tree, TreeEntry};
use crate::core::types::{ObjectKind, Oid, Pointer, PointerTo};

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::core::object::Blob {}
    impl Sealed for crate::core::object::Commit {}
    impl Sealed for crate::core::object::Tag {}
    impl Sealed for crate::core::object::Tree {}
}

/// An object type that can be built from a native object handle.
///
/// Implemented for [`Blob`], [`Commit`], [`Tag`] and [`Tree`] only.
pub trait Loadable: GitObject + sealed::Sealed {
    /// Copy a native object into an owned value.
    #[doc(hidden)]
    fn from_native(object: &git2::Object<'_>) -> Result<Self, GitError>;
}

pub(super) fn oid(oid: Oid) -> Result<git2::Oid, GitError> {
    git2::Oid::from_bytes(oid.as_bytes()).map_err(|e| GitError::Internal {
        message: e.message().to_string(),
    })
}

pub(super) fn from_oid(oid: git2::Oid) -> Result<Oid, GitError> {
    Ok(Oid::from_bytes(oid.as_bytes())?)
}

pub(super) fn object_type(kind: Option<ObjectKind>) -> git2::ObjectType {
    match kind {
        None => git2::ObjectType::Any,
        Some(ObjectKind::Blob) => git2::ObjectType::Blob,
        Some(ObjectKind::Commit) => git2::ObjectType::Commit,
        Some(ObjectKind::Tag) => git2::ObjectType::Tag,
        Some(ObjectKind::Tree) => git2::ObjectType::Tree,
    }
}

pub(super) fn object_kind(object_type: git2::ObjectType) -> Option<ObjectKind> {
    match object_type {
        git2::ObjectType::Blob => Some(ObjectKind::Blob),
        git2::ObjectType::Commit => Some(ObjectKind::Commit),
        git2::ObjectType::Tag => Some(ObjectKind::Tag),
        git2::ObjectType::Tree => Some(ObjectKind::Tree),
        git2::ObjectType::Any => None,
    }
}

fn pointer(oid: git2::Oid, object_type: Option<git2::ObjectType>) -> Result<Pointer, GitError> {
    let oid = from_oid(oid)?;
    let kind = object_type
        .and_then(object_kind)
        .ok_or_else(|| GitError::Lookup {
            oid,
            kind: None,
            reason: LookupFailure::Engine("pointer to object of unknown type".to_string()),
        })?;
    Ok(Pointer::new(kind, oid))
}

/// The handle did not hold the kind `expected`.
fn mismatch(object: &git2::Object<'_>, expected: ObjectKind) -> GitError {
    let oid = match from_oid(object.id()) {
        Ok(oid) => oid,
        Err(err) => return err,
    };
    let reason = match object.kind().and_then(object_kind) {
        Some(actual) => LookupFailure::KindMismatch { actual },
        None => LookupFailure::Engine("object of unknown type".to_string()),
    };
    GitError::Lookup {
        oid,
        kind: Some(expected),
        reason,
    }
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn signature(signature: &git2::Signature<'_>) -> Signature {
    let when = signature.when();
    let offset = FixedOffset::east_opt(when.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
    let time = DateTime::from_timestamp(when.seconds(), 0)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&offset);

    Signature {
        name: text(signature.name_bytes()),
        email: text(signature.email_bytes()),
        time,
    }
}

impl Loadable for Blob {
    fn from_native(object: &git2::Object<'_>) -> Result<Self, GitError> {
        let blob = object
            .as_blob()
            .ok_or_else(|| mismatch(object, ObjectKind::Blob))?;

        Ok(Blob {
            oid: from_oid(blob.id())?,
            data: blob.content().to_vec(),
        })
    }
}

impl Loadable for Commit {
    fn from_native(object: &git2::Object<'_>) -> Result<Self, GitError> {
        let commit = object
            .as_commit()
            .ok_or_else(|| mismatch(object, ObjectKind::Commit))?;

        let parents = commit
            .parent_ids()
            .map(|id| from_oid(id).map(PointerTo::new))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Commit {
            oid: from_oid(commit.id())?,
            tree: PointerTo::new(from_oid(commit.tree_id())?),
            parents,
            author: signature(&commit.author()),
            committer: signature(&commit.committer()),
            message: text(commit.message_bytes()),
        })
    }
}

impl Loadable for Tag {
    fn from_native(object: &git2::Object<'_>) -> Result<Self, GitError> {
        let tag = object
            .as_tag()
            .ok_or_else(|| mismatch(object, ObjectKind::Tag))?;

        Ok(Tag {
            oid: from_oid(tag.id())?,
            target: pointer(tag.target_id(), tag.target_type())?,
            name: text(tag.name_bytes()),
            tagger: tag.tagger().as_ref().map(signature),
            message: tag.message_bytes().map(text).unwrap_or_default(),
        })
    }
}

impl Loadable for Tree {
    fn from_native(object: &git2::Object<'_>) -> Result<Self, GitError> {
        let tree = object
            .as_tree()
            .ok_or_else(|| mismatch(object, ObjectKind::Tree))?;

        let entries = tree
            .iter()
            .map(|entry| {
                Ok(TreeEntry {
                    attributes: entry.filemode(),
                    object: pointer(entry.id(), entry.kind())?,
                    name_bytes: entry.name_bytes().to_vec(),
                })
            })
            .collect::<Result<Vec<_>, GitError>>()?;

        Ok(Tree {
            oid: from_oid(tree.id())?,
            entries,
        })
    }
}
