//! The structural equality and hashing contract.

/// Structural equality and hashing over a type's considered members.
///
/// Role
/// - `structural_eq` is a conjunction over the considered members in their
///   declared order, each compared with its own `PartialEq` (recursively for
///   nested value objects). Evaluation short-circuits on the first mismatch;
///   member access has no side effects, so short-circuiting is not
///   observable.
/// - `structural_hash` is a left fold over the same members in the same
///   order, seeded with [`HASH_SEED`](crate::hash::HASH_SEED) and folded
///   with [`fold_member`](crate::hash::fold_member).
///
/// Invariant: `a.structural_eq(&b)` implies
/// `a.structural_hash() == b.structural_hash()`. The converse need not hold;
/// collisions between unequal values are acceptable.
///
/// Implementations are usually generated by `#[derive(ValueObject)]`, which
/// also emits matching `PartialEq`, `Eq` and `Hash` impls so `==` and hash
/// containers agree with the structural contract. A hand-written impl must
/// fold the same member list, in the same order, in both methods:
///
/// ```
/// use valobj::hash::{HASH_SEED, fold_member, member_hash};
/// use valobj::object::ValueObject;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl ValueObject for Point {
///     fn structural_eq(&self, other: &Self) -> bool {
///         self.x == other.x && self.y == other.y
///     }
///
///     fn structural_hash(&self) -> u64 {
///         let mut hash = HASH_SEED;
///         hash = fold_member(hash, member_hash(&self.x));
///         hash = fold_member(hash, member_hash(&self.y));
///         hash
///     }
/// }
///
/// let p = Point { x: 1, y: 2 };
/// assert!(p.structural_eq(&Point { x: 1, y: 2 }));
/// assert!(!p.structural_eq(&Point { x: 1, y: 3 }));
/// ```
pub trait ValueObject {
    /// Whether every considered member of `self` equals the corresponding
    /// member of `other`.
    fn structural_eq(&self, other: &Self) -> bool;

    /// Fold the considered members into a single hash code.
    ///
    /// A type with no considered members hashes to the bare seed.
    fn structural_hash(&self) -> u64;
}
