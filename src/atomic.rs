use std::fmt::Debug;

/// Trait for atomic elements that can be used in parsing
///
/// Items are compared for equality by the matching combinators and formatted
/// with `Debug` when a mismatch is reported. Any type that is `Clone`,
/// `PartialEq` and `Debug` qualifies, so bytes, chars and structured tokens
/// from an upstream lexer all work without extra impls.
pub trait Atomic: Clone + PartialEq + Debug {}

impl<T> Atomic for T where T: Clone + PartialEq + Debug {}
