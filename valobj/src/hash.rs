//! Hash-fold primitives shared by derived and hand-written implementations.
//!
//! Role
//! - Fix the seed/multiplier constants so every implementation folds members
//!   the same way, keeping hash codes consistent with structural equality.
//! - Compute per-member hash codes through the member's own [`Hash`] impl.
//!
//! The fold is `hash * 23 + member`, seeded with 17 and wrapping on
//! overflow. Overflow is expected for any non-trivial member count and must
//! never trap.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Initial accumulator value for a structural hash.
pub const HASH_SEED: u64 = 17;

/// Multiplier applied to the accumulator before each member is folded in.
pub const HASH_MULTIPLIER: u64 = 23;

/// One fold step: `hash * 23 + member`, wrapping.
#[inline]
pub fn fold_member(hash: u64, member: u64) -> u64 {
    hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(member)
}

/// A member's own hash code.
///
/// Runs the value through [`DefaultHasher`]. Stable for the life of the
/// process; nothing outside the process depends on the exact values.
pub fn member_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash code of an optional member: an absent member contributes 0.
pub fn optional_member_hash<T: Hash>(value: Option<&T>) -> u64 {
    match value {
        Some(value) => member_hash(value),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_wraps_instead_of_trapping() {
        // (2^64 - 1) * 23 + (2^64 - 1) modulo 2^64
        assert_eq!(fold_member(u64::MAX, u64::MAX), u64::MAX - 23);
    }

    #[test]
    fn absent_member_contributes_zero() {
        assert_eq!(optional_member_hash::<String>(None), 0);
        let name = String::from("a");
        assert_eq!(optional_member_hash(Some(&name)), member_hash(&name));
    }

    #[test]
    fn member_hash_is_stable_within_the_process() {
        assert_eq!(member_hash("value"), member_hash("value"));
        assert_eq!(member_hash(&42i32), member_hash(&42i32));
    }
}
