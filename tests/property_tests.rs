//! Property-based tests for core domain types.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use gitobj::core::types::{ObjectKind, Oid, Pointer};

/// Strategy for generating valid hex OIDs, in mixed case.
fn valid_oid_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'A',
            'B', 'C', 'D', 'E', 'F',
        ]),
        40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for generating object kinds.
fn object_kind() -> impl Strategy<Value = ObjectKind> {
    prop::sample::select(ObjectKind::ALL.to_vec())
}

proptest! {
    /// Parsing then displaying an OID yields the lowercased input.
    #[test]
    fn oid_display_is_lowercase_input(hex in valid_oid_string()) {
        let oid = Oid::new(&hex).unwrap();
        prop_assert_eq!(oid.to_string(), hex.to_ascii_lowercase());
    }

    /// Raw bytes and hex agree.
    #[test]
    fn oid_bytes_agree_with_hex(bytes in prop::array::uniform20(any::<u8>())) {
        let oid = Oid::from_bytes(&bytes).unwrap();
        prop_assert_eq!(Oid::new(oid.to_string()).unwrap(), oid);
        prop_assert_eq!(oid.is_zero(), bytes.iter().all(|b| *b == 0));
    }

    /// Any string that is not 40 characters long is rejected.
    #[test]
    fn oid_wrong_length_rejected(hex in "[0-9a-f]{0,80}") {
        prop_assume!(hex.len() != 40);
        prop_assert!(Oid::new(&hex).is_err());
    }

    /// Abbreviations are prefixes of the full OID.
    #[test]
    fn oid_short_is_prefix(hex in valid_oid_string(), len in 0usize..50) {
        let oid = Oid::new(&hex).unwrap();
        let full = oid.to_string();
        let short = oid.short(len);
        prop_assert!(full.starts_with(&short));
        prop_assert_eq!(short.len(), len.min(40));
    }

    /// A pointer reports exactly the kind and OID it was built from.
    #[test]
    fn pointer_keeps_kind_and_oid(hex in valid_oid_string(), kind in object_kind()) {
        let oid = Oid::new(&hex).unwrap();
        let pointer = Pointer::new(kind, oid);
        prop_assert_eq!(pointer.kind(), kind);
        prop_assert_eq!(pointer.oid(), oid);
    }
}
