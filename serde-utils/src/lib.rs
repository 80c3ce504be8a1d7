//! Serialization helpers shared by the token signature crates.

pub mod hex;
