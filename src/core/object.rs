//! core::object
//!
//! In-memory object model.
//!
//! These are the values produced by a lookup. Each one is built from a
//! native engine handle while the handle is held, and owns all of its data
//! afterwards, so it can outlive both the lookup and the repository.
//!
//! # Types
//!
//! - [`Blob`], [`Commit`], [`Tag`], [`Tree`] - loaded objects
//! - [`TreeEntry`] - a named entry in a tree
//! - [`Signature`] - author/committer/tagger identity and time
//! - [`Object`] - any loaded object
//! - [`GitObject`] - implemented by the four loaded object types

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

use crate::core::types::{ObjectKind, Oid, Pointer, PointerTo};

/// A loaded object of a statically known kind.
pub trait GitObject: Sized {
    /// The kind every value of this type has.
    const KIND: ObjectKind;

    /// The OID of this object.
    fn oid(&self) -> Oid;
}

/// The identity and time attached to a commit or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// Name of the person
    pub name: String,
    /// Email of the person
    pub email: String,
    /// When the signature was made, in the signer's timezone
    pub time: DateTime<FixedOffset>,
}

impl Signature {
    /// Format the signature the way it appears in a raw object:
    /// `Name <email> 1700000000 +0100`.
    pub fn to_raw(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.time.timestamp(),
            self.time.format("%z")
        )
    }
}

/// A blob: the contents of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blob {
    /// The OID of the blob
    pub oid: Oid,
    /// Raw contents
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl Blob {
    /// Contents as UTF-8, if they are valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// Size of the contents in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl GitObject for Blob {
    const KIND: ObjectKind = ObjectKind::Blob;

    fn oid(&self) -> Oid {
        self.oid
    }
}

/// A commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// The OID of the commit
    pub oid: Oid,
    /// The root tree of the commit
    pub tree: PointerTo<Tree>,
    /// Parent commits; empty for a root commit
    pub parents: Vec<PointerTo<Commit>>,
    /// Who wrote the change
    pub author: Signature,
    /// Who recorded the commit
    pub committer: Signature,
    /// Full commit message
    pub message: String,
}

impl Commit {
    /// First line of the message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Check if this is a merge commit.
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

impl GitObject for Commit {
    const KIND: ObjectKind = ObjectKind::Commit;

    fn oid(&self) -> Oid {
        self.oid
    }
}

/// An annotated tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// The OID of the tag object
    pub oid: Oid,
    /// The tagged object
    pub target: Pointer,
    /// Tag name, without `refs/tags/`
    pub name: String,
    /// Who created the tag; absent for some old tags
    pub tagger: Option<Signature>,
    /// Tag message
    pub message: String,
}

impl GitObject for Tag {
    const KIND: ObjectKind = ObjectKind::Tag;

    fn oid(&self) -> Oid {
        self.oid
    }
}

/// An entry in a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    /// File mode bits (e.g. `0o100644`, `0o040000`)
    pub attributes: i32,
    /// The object the entry names; submodules are commit pointers
    pub object: Pointer,
    /// File name exactly as stored, which need not be UTF-8
    #[serde(rename = "name", serialize_with = "serialize_lossy")]
    pub name_bytes: Vec<u8>,
}

impl TreeEntry {
    /// File name with invalid UTF-8 replaced.
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name_bytes)
    }

    /// Mode formatted as six octal digits, as in `git ls-tree`.
    pub fn mode(&self) -> String {
        format!("{:06o}", self.attributes)
    }
}

/// A tree: a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tree {
    /// The OID of the tree
    pub oid: Oid,
    /// Entries in stored order
    pub entries: Vec<TreeEntry>,
}

impl Tree {
    /// Look up an entry by its raw name.
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&TreeEntry> {
        let name = name.as_ref();
        self.entries.iter().find(|entry| entry.name_bytes == name)
    }
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

impl GitObject for Tree {
    const KIND: ObjectKind = ObjectKind::Tree;

    fn oid(&self) -> Oid {
        self.oid
    }
}

/// Any loaded object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Object {
    Blob(Blob),
    Commit(Commit),
    Tag(Tag),
    Tree(Tree),
}

impl Object {
    /// The kind of the loaded object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Blob(_) => ObjectKind::Blob,
            Object::Commit(_) => ObjectKind::Commit,
            Object::Tag(_) => ObjectKind::Tag,
            Object::Tree(_) => ObjectKind::Tree,
        }
    }

    /// The OID of the loaded object.
    pub fn oid(&self) -> Oid {
        match self {
            Object::Blob(blob) => blob.oid,
            Object::Commit(commit) => commit.oid,
            Object::Tag(tag) => tag.oid,
            Object::Tree(tree) => tree.oid,
        }
    }

    /// A pointer back to this object.
    pub fn pointer(&self) -> Pointer {
        Pointer::new(self.kind(), self.oid())
    }
}

impl From<Blob> for Object {
    fn from(blob: Blob) -> Self {
        Object::Blob(blob)
    }
}

impl From<Commit> for Object {
    fn from(commit: Commit) -> Self {
        Object::Commit(commit)
    }
}

impl From<Tag> for Object {
    fn from(tag: Tag) -> Self {
        Object::Tag(tag)
    }
}

impl From<Tree> for Object {
    fn from(tree: Tree) -> Self {
        Object::Tree(tree)
    }
}
