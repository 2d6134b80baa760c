//! Path expression tokenizer
//!
//! Converts raw expression strings into positioned token sequences.

mod characters;
mod core;
mod literals;
mod operators;

pub use self::core::Tokenizer;
