// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the StayBook booking engine.
//!
//! Provides a `SQLite`-backed reservation store and the static hotel
//! catalog. `SQLite` runs in-memory for tests and against a file in
//! production; no external infrastructure is required.
//!
//! Reservations are stored with their full state serialized as JSON,
//! alongside a handful of indexed columns for lookup. The JSON document
//! is the source of truth; the columns exist only for querying.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod sqlite;

#[cfg(test)]
mod tests;

pub use catalog::StaticCatalog;
pub use error::PersistenceError;
pub use sqlite::{SqliteStore, initialize_schema};
