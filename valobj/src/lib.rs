//! Valobj: structural equality and hashing for value object types.
//!
//! A value object is a type whose identity is defined entirely by the values
//! of its members, never by reference identity. This crate provides the
//! comparison contract for such types:
//!
//! - [`ValueObject`](object::ValueObject): structural equality plus a stable
//!   hash code, computed as a seeded left fold over the considered members.
//! - [`AnyValueObject`](any::AnyValueObject): a type-erased view of the same
//!   contract, so values of unrelated runtime types can be compared (an
//!   ordinary "not equal") without faulting.
//! - `#[derive(ValueObject)]` (feature `derive`): derives the whole contract
//!   from the declared field list. Fields tagged `#[value_object(ignore)]`
//!   take part in neither equality nor hashing.
//!
//! Example
//! ```
//! use valobj::prelude::*;
//! use valobj_derive::ValueObject;
//!
//! #[derive(Debug, ValueObject)]
//! struct Customer {
//!     name: String,
//!     age: i32,
//!     #[value_object(ignore)]
//!     last_seen: u64,
//! }
//!
//! let a = Customer { name: "a".into(), age: 1, last_seen: 10 };
//! let b = Customer { name: "a".into(), age: 1, last_seen: 99 };
//! assert!(a == b);
//! assert_eq!(a.structural_hash(), b.structural_hash());
//! ```

/// Type-erased comparison surface over value objects.
pub mod any;
/// Hash-fold primitives: seed, multiplier, and per-member hash codes.
pub mod hash;
/// The structural equality and hashing contract.
pub mod object;

#[cfg(feature = "derive")]
pub use valobj_derive::ValueObject;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `ValueObject` trait (and, with feature `derive`, the derive macro)
    //! - `AnyValueObject` with the absent-operand helpers
    //! - Hash-fold constants and per-member hash functions
    pub use crate::any::{AnyValueObject, option_eq, option_hash, option_ne};
    pub use crate::hash::{
        HASH_MULTIPLIER, HASH_SEED, fold_member, member_hash, optional_member_hash,
    };
    pub use crate::object::ValueObject;

    #[cfg(feature = "derive")]
    pub use valobj_derive::ValueObject;
}
