//! The common contract shared by every validated field.

use std::fmt::Display;

/// A validated, immutable scalar wrapper.
///
/// Construction is the only validation gate: once a value implementing
/// `Field` exists, its contents satisfy the type's rule. There is no
/// mutation after construction; edits build a replacement value.
pub trait Field: Display {
    /// The underlying primitive the field wraps.
    type Value: ?Sized;

    /// Borrow the validated value.
    fn value(&self) -> &Self::Value;
}
