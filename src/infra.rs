//! Testing infrastructure: consistency checks, fuzzing operations and
//! property-based strategies.

pub mod testing;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;

#[cfg(feature = "proptest")]
pub mod proptest;
