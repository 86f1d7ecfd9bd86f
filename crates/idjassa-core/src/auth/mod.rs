//! Session management for the signed-in user.
//!
//! This module provides:
//! - `SessionStore`: token + profile pair with read/save/clear
//! - `SessionStorage`: pluggable backends (`MemoryStorage`, `FileStorage`)
//!
//! There is no expiry or refresh here. A stale token surfaces as a
//! remote authorization error on the next protected call.

pub mod session;
pub mod storage;

pub use session::{Session, SessionStore, TOKEN_KEY, USER_KEY};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
