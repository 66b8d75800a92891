//! core::types
//!
//! Strong types for addressing objects in a repository.
//!
//! # Types
//!
//! - [`Oid`] - Git object identifier (SHA-1, 20 bytes)
//! - [`ObjectKind`] - The four kinds of stored objects
//! - [`Pointer`] - An OID tagged with the kind it is expected to be
//! - [`PointerTo`] - An OID whose kind is fixed by a type parameter
//!
//! # Validation
//!
//! These types enforce validity at construction time. An `Oid` is always
//! exactly 20 bytes, and a `PointerTo<T>` can never name a kind other than
//! `T`'s.
//!
//! # Examples
//!
//! ```
//! use gitobj::core::types::{ObjectKind, Oid, Pointer};
//!
//! let oid = Oid::new("abc123def4567890abc123def4567890abc12345").unwrap();
//! let pointer = Pointer::Commit(oid);
//! assert_eq!(pointer.kind(), ObjectKind::Commit);
//!
//! assert!(Oid::new("not-a-sha").is_err());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::core::object::GitObject;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid object id: {0}")]
    InvalidOid(String),

    #[error("invalid object kind: {0}")]
    InvalidKind(String),

    #[error("pointer kind mismatch: expected {expected}, found {actual}")]
    PointerMismatch {
        expected: ObjectKind,
        actual: ObjectKind,
    },
}

/// A Git object identifier.
///
/// Stored as the raw 20-byte SHA-1 digest. Parsing accepts upper or lower
/// case hex; display is always lowercase.
///
/// # Example
///
/// ```
/// use gitobj::core::types::Oid;
///
/// let oid = Oid::new("ABC123DEF4567890ABC123DEF4567890ABC12345").unwrap();
/// assert_eq!(oid.to_string(), "abc123def4567890abc123def4567890abc12345");
/// assert_eq!(oid.short(7), "abc123d");
///
/// let zero = Oid::zero();
/// assert!(zero.is_zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oid([u8; Oid::LEN]);

impl Oid {
    /// Length of a raw OID in bytes.
    pub const LEN: usize = 20;

    /// Length of a hex-encoded OID.
    pub const HEX_LEN: usize = Self::LEN * 2;

    /// Parse an object id from its hex form.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidOid` if the string is not exactly 40 hex
    /// characters.
    pub fn new(hex: impl AsRef<str>) -> Result<Self, TypeError> {
        let hex = hex.as_ref();
        if hex.len() != Self::HEX_LEN {
            return Err(TypeError::InvalidOid(format!(
                "expected {} hex characters, got {}",
                Self::HEX_LEN,
                hex.len()
            )));
        }

        let mut bytes = [0u8; Self::LEN];
        hex::decode_to_slice(hex, &mut bytes)
            .map_err(|_| TypeError::InvalidOid(format!("{hex} is not hexadecimal")))?;
        Ok(Self(bytes))
    }

    /// Create an object id from its raw digest.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidOid` if `bytes` is not 20 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        let raw: [u8; Self::LEN] = bytes.try_into().map_err(|_| {
            TypeError::InvalidOid(format!(
                "expected {} bytes, got {}",
                Self::LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }

    /// The zero/null OID.
    pub const fn zero() -> Self {
        Self([0; Self::LEN])
    }

    /// Check if this is the zero/null OID.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// The raw digest.
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Get an abbreviated hex form of the OID.
    ///
    /// Returns the first `len` hex characters, or the full OID if `len`
    /// exceeds its length.
    pub fn short(&self, len: usize) -> String {
        let mut hex = self.to_string();
        hex.truncate(len);
        hex
    }
}

impl FromStr for Oid {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Oid {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Oid> for String {
    fn from(oid: Oid) -> Self {
        oid.to_string()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({self})")
    }
}

/// The kind of a stored object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Blob,
    Commit,
    Tag,
    Tree,
}

impl ObjectKind {
    /// All object kinds, in declaration order.
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::Blob,
        ObjectKind::Commit,
        ObjectKind::Tag,
        ObjectKind::Tree,
    ];

    /// The name git uses for this kind (`git cat-file -t`).
    ///
    /// # Example
    ///
    /// ```
    /// use gitobj::core::types::ObjectKind;
    ///
    /// assert_eq!(ObjectKind::Tree.as_str(), "tree");
    /// assert_eq!("tag".parse::<ObjectKind>().unwrap(), ObjectKind::Tag);
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Blob => "blob",
            ObjectKind::Commit => "commit",
            ObjectKind::Tag => "tag",
            ObjectKind::Tree => "tree",
        }
    }
}

impl FromStr for ObjectKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TypeError::InvalidKind(s.to_string()))
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to an object whose kind is known but which has not been
/// loaded.
///
/// Resolving a pointer loads exactly the kind named by its variant; a
/// stored object of any other kind is a lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "oid", rename_all = "lowercase")]
pub enum Pointer {
    Blob(Oid),
    Commit(Oid),
    Tag(Oid),
    Tree(Oid),
}

impl Pointer {
    /// Create a pointer of the given kind.
    pub fn new(kind: ObjectKind, oid: Oid) -> Self {
        match kind {
            ObjectKind::Blob => Pointer::Blob(oid),
            ObjectKind::Commit => Pointer::Commit(oid),
            ObjectKind::Tag => Pointer::Tag(oid),
            ObjectKind::Tree => Pointer::Tree(oid),
        }
    }

    /// The OID this pointer refers to.
    pub fn oid(&self) -> Oid {
        match self {
            Pointer::Blob(oid) | Pointer::Commit(oid) | Pointer::Tag(oid) | Pointer::Tree(oid) => {
                *oid
            }
        }
    }

    /// The kind of object this pointer expects.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Pointer::Blob(_) => ObjectKind::Blob,
            Pointer::Commit(_) => ObjectKind::Commit,
            Pointer::Tag(_) => ObjectKind::Tag,
            Pointer::Tree(_) => ObjectKind::Tree,
        }
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.oid())
    }
}

/// A pointer whose kind is fixed by the object type `T`.
///
/// # Example
///
/// ```
/// use gitobj::core::object::{Blob, Tree};
/// use gitobj::core::types::{ObjectKind, Oid, Pointer, PointerTo};
///
/// let oid = Oid::new("abc123def4567890abc123def4567890abc12345").unwrap();
/// let tree: PointerTo<Tree> = PointerTo::new(oid);
/// assert_eq!(tree.kind(), ObjectKind::Tree);
///
/// // Narrowing a dynamic pointer is checked.
/// assert!(PointerTo::<Blob>::try_from(Pointer::Tree(oid)).is_err());
/// ```
pub struct PointerTo<T> {
    oid: Oid,
    marker: PhantomData<fn() -> T>,
}

impl<T: GitObject> PointerTo<T> {
    /// Create a typed pointer to `oid`.
    pub fn new(oid: Oid) -> Self {
        Self {
            oid,
            marker: PhantomData,
        }
    }

    /// The OID this pointer refers to.
    pub fn oid(&self) -> Oid {
        self.oid
    }

    /// The kind of object this pointer expects (always `T::KIND`).
    pub fn kind(&self) -> ObjectKind {
        T::KIND
    }

    /// Widen into an untyped pointer.
    pub fn pointer(&self) -> Pointer {
        Pointer::new(T::KIND, self.oid)
    }
}

impl<T: GitObject> TryFrom<Pointer> for PointerTo<T> {
    type Error = TypeError;

    fn try_from(pointer: Pointer) -> Result<Self, Self::Error> {
        if pointer.kind() != T::KIND {
            return Err(TypeError::PointerMismatch {
                expected: T::KIND,
                actual: pointer.kind(),
            });
        }
        Ok(Self::new(pointer.oid()))
    }
}

impl<T: GitObject> From<PointerTo<T>> for Pointer {
    fn from(pointer: PointerTo<T>) -> Self {
        pointer.pointer()
    }
}

impl<T> Clone for PointerTo<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PointerTo<T> {}

impl<T> PartialEq for PointerTo<T> {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
    }
}

impl<T> Eq for PointerTo<T> {}

impl<T> Hash for PointerTo<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.oid.hash(state);
    }
}

impl<T: GitObject> fmt::Debug for PointerTo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointerTo<{}>({})", T::KIND, self.oid)
    }
}

impl<T> Serialize for PointerTo<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.oid.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::object::{Blob, Commit, Tag, Tree};

    const SHA: &str = "abc123def4567890abc123def4567890abc12345";

    fn oid() -> Oid {
        Oid::new(SHA).unwrap()
    }

    mod oid {
        use super::*;

        #[test]
        fn valid_sha1() {
            assert!(Oid::new(SHA).is_ok());
        }

        #[test]
        fn sha256_length_rejected() {
            let sha256 = "abc123def4567890abc123def4567890abc123def4567890abc123def456789a";
            assert!(Oid::new(sha256).is_err());
        }

        #[test]
        fn normalizes_to_lowercase() {
            let oid = Oid::new("ABC123DEF4567890ABC123DEF4567890ABC12345").unwrap();
            assert_eq!(oid.to_string(), SHA);
            assert_eq!(oid, super::oid());
        }

        #[test]
        fn zero_oid() {
            let zero = Oid::zero();
            assert!(zero.is_zero());
            assert_eq!(zero.to_string(), "0".repeat(40));
        }

        #[test]
        fn non_zero_is_not_zero() {
            assert!(!oid().is_zero());
        }

        #[test]
        fn short_form() {
            assert_eq!(oid().short(7), "abc123d");
            assert_eq!(oid().short(4), "abc1");
            assert_eq!(oid().short(100), SHA);
        }

        #[test]
        fn invalid_length() {
            assert!(Oid::new("").is_err());
            assert!(Oid::new("tooshort").is_err());
            assert!(Oid::new("abc123").is_err());
        }

        #[test]
        fn non_hex_rejected() {
            let err = Oid::new("xyz123def4567890abc123def4567890abc12345").unwrap_err();
            assert!(matches!(err, TypeError::InvalidOid(_)));
        }

        #[test]
        fn from_bytes_checks_length() {
            assert_eq!(Oid::from_bytes(oid().as_bytes()).unwrap(), oid());
            assert!(Oid::from_bytes(&[1, 2, 3]).is_err());
        }

        #[test]
        fn debug_shows_hex() {
            assert_eq!(format!("{:?}", oid()), format!("Oid({SHA})"));
        }

        #[test]
        fn serializes_as_hex_string() {
            let json = serde_json::to_string(&oid()).unwrap();
            assert_eq!(json, format!("\"{SHA}\""));
            let parsed: Oid = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, oid());
        }

        #[test]
        fn deserialize_rejects_garbage() {
            assert!(serde_json::from_str::<Oid>("\"nope\"").is_err());
        }
    }

    mod object_kind {
        use super::*;

        #[test]
        fn names_parse_back() {
            for kind in ObjectKind::ALL {
                assert_eq!(kind.as_str().parse::<ObjectKind>().unwrap(), kind);
            }
        }

        #[test]
        fn unknown_name_rejected() {
            assert_eq!(
                "tag-ish".parse::<ObjectKind>(),
                Err(TypeError::InvalidKind("tag-ish".to_string()))
            );
        }

        #[test]
        fn display_matches_git() {
            assert_eq!(ObjectKind::Commit.to_string(), "commit");
        }
    }

    mod pointer {
        use super::*;

        #[test]
        fn new_matches_kind() {
            for kind in ObjectKind::ALL {
                let pointer = Pointer::new(kind, oid());
                assert_eq!(pointer.kind(), kind);
                assert_eq!(pointer.oid(), oid());
            }
        }

        #[test]
        fn display() {
            assert_eq!(Pointer::Tag(oid()).to_string(), format!("tag {SHA}"));
        }

        #[test]
        fn serde_shape() {
            let json = serde_json::to_value(Pointer::Tree(oid())).unwrap();
            assert_eq!(json, serde_json::json!({ "kind": "tree", "oid": SHA }));
            let parsed: Pointer = serde_json::from_value(json).unwrap();
            assert_eq!(parsed, Pointer::Tree(oid()));
        }
    }

    mod pointer_to {
        use super::*;

        #[test]
        fn kind_follows_type() {
            assert_eq!(PointerTo::<Blob>::new(oid()).kind(), ObjectKind::Blob);
            assert_eq!(PointerTo::<Commit>::new(oid()).kind(), ObjectKind::Commit);
            assert_eq!(PointerTo::<Tag>::new(oid()).kind(), ObjectKind::Tag);
            assert_eq!(PointerTo::<Tree>::new(oid()).kind(), ObjectKind::Tree);
        }

        #[test]
        fn narrowing_matching_pointer() {
            let typed = PointerTo::<Commit>::try_from(Pointer::Commit(oid())).unwrap();
            assert_eq!(typed.oid(), oid());
            assert_eq!(Pointer::from(typed), Pointer::Commit(oid()));
        }

        #[test]
        fn narrowing_mismatched_pointer_is_an_error() {
            let err = PointerTo::<Blob>::try_from(Pointer::Tree(oid())).unwrap_err();
            assert_eq!(
                err,
                TypeError::PointerMismatch {
                    expected: ObjectKind::Blob,
                    actual: ObjectKind::Tree,
                }
            );
        }

        #[test]
        fn serializes_as_oid() {
            let json = serde_json::to_string(&PointerTo::<Tree>::new(oid())).unwrap();
            assert_eq!(json, format!("\"{SHA}\""));
        }
    }
}
