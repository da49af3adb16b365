//! Storage abstraction and implementations for Streakline.
//!
//! This crate provides a trait-based storage interface over JSON-serialized
//! lists kept under fixed keys, with a file-per-key reference implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;

pub use trait_::{Storage, StorageError, Result, TRACKERS_KEY, QUOTES_KEY};
pub use json_storage::JsonStorage;
