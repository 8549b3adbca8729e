//! Raw deserialization structures mirroring PokeAPI JSON bodies.
//!
//! These are deliberately dumb: field-for-field images of what the
//! service returns, with no domain logic. Higher layers flatten them
//! into usable types.


pub mod evolution;
pub mod pokemon;
pub mod species;
pub mod types;
