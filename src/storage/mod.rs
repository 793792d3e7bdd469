//! Durable key/value storage.
//!
//! This module provides the small persistence layer backing the lookup
//! history and the theme preference: a handful of well-known string keys,
//! each stored as one file under a data directory and overwritten wholesale
//! on every mutation.

mod kv;
mod theme;

pub use kv::{KeyValueStore, StorageError};
pub use theme::{load_theme, save_theme, Theme};
