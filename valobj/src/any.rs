//! Type-erased comparison surface over value objects.
//!
//! Role
//! - Compare two values whose static types are unknown, with the exact
//!   runtime type acting as part of the equality contract: values of
//!   distinct types are never equal, even when all their members would
//!   match.
//! - Carry the absent-operand rules for both operand positions: absent
//!   equals absent, absent never equals present, and neither direction
//!   faults.

use downcast_rs::{Downcast, impl_downcast};
use log::trace;

use crate::object::ValueObject;

/// Object-safe view of the structural contract.
///
/// Implemented for every `'static` [`ValueObject`] through a blanket impl;
/// consumers only ever interact with `dyn AnyValueObject`. `PartialEq`,
/// `Eq` and `Hash` are provided for the trait object itself, so boxed
/// values of mixed concrete types can live in hash containers.
pub trait AnyValueObject: Downcast {
    /// Structural comparison against a value of any runtime type.
    ///
    /// A differing runtime type is an ordinary "not equal", never an error.
    fn value_eq(&self, other: &dyn AnyValueObject) -> bool;

    /// The value's structural hash code.
    fn value_hash(&self) -> u64;
}
impl_downcast!(AnyValueObject);

impl<T: ValueObject + 'static> AnyValueObject for T {
    fn value_eq(&self, other: &dyn AnyValueObject) -> bool {
        match other.downcast_ref::<T>() {
            Some(other) => self.structural_eq(other),
            None => {
                trace!(
                    "comparison across distinct runtime types (left: {}), treating as not equal",
                    std::any::type_name::<T>()
                );
                false
            }
        }
    }

    fn value_hash(&self) -> u64 {
        self.structural_hash()
    }
}

impl PartialEq for dyn AnyValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl Eq for dyn AnyValueObject {}

impl std::hash::Hash for dyn AnyValueObject {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

/// Equality over possibly-absent operands.
///
/// Absent equals absent; absent never equals present, in either position.
pub fn option_eq(a: Option<&dyn AnyValueObject>, b: Option<&dyn AnyValueObject>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.value_eq(b),
        _ => false,
    }
}

/// Negation of [`option_eq`].
pub fn option_ne(a: Option<&dyn AnyValueObject>, b: Option<&dyn AnyValueObject>) -> bool {
    !option_eq(a, b)
}

/// Hash code of a possibly-absent value: an absent value contributes 0.
pub fn option_hash(value: Option<&dyn AnyValueObject>) -> u64 {
    value.map_or(0, |value| value.value_hash())
}
