//! CLI command implementations.

pub mod pick;

pub use pick::PickCommand;
