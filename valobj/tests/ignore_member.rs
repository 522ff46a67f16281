use valobj::prelude::*;
use valobj_derive::ValueObject;

#[derive(Debug, ValueObject)]
struct CachedEntry {
    key: String,
    #[value_object(ignore)]
    hits: u64,
    #[value_object(ignore)]
    last_access: Option<u64>,
}

#[derive(Debug, ValueObject)]
struct Tagged(String, #[value_object(ignore)] u32);

fn entry(key: &str, hits: u64, last_access: Option<u64>) -> CachedEntry {
    CachedEntry {
        key: key.to_string(),
        hits,
        last_access,
    }
}

#[test]
fn ignored_field_does_not_affect_equality() {
    let a = entry("alpha", 2, None);
    let b = entry("alpha", 3, Some(77));
    assert!(a == b);
    assert!(a.structural_eq(&b));
}

#[test]
fn ignored_field_does_not_affect_hash() {
    let a = entry("alpha", 2, None);
    let b = entry("alpha", 9000, Some(77));
    assert_eq!(a.structural_hash(), b.structural_hash());
}

#[test]
fn considered_field_still_changes_equality_and_hash() {
    let a = entry("alpha", 2, None);
    let b = entry("beta", 2, None);
    assert!(a != b);
    assert_ne!(a.structural_hash(), b.structural_hash());
}

#[test]
fn hash_folds_only_considered_members() {
    let value = entry("alpha", 41, Some(12));
    let expected = fold_member(HASH_SEED, member_hash(&value.key));
    assert_eq!(value.structural_hash(), expected);
}

#[test]
fn tuple_struct_positions_can_be_ignored() {
    assert!(Tagged("x".to_string(), 1) == Tagged("x".to_string(), 2));
    assert!(Tagged("x".to_string(), 1) != Tagged("y".to_string(), 1));
    assert_eq!(
        Tagged("x".to_string(), 1).structural_hash(),
        Tagged("x".to_string(), 2).structural_hash()
    );
}
