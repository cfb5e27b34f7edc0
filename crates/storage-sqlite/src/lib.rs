//! SQLite storage implementation for Tharwa.
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! It implements the repository traits defined in `tharwa-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor
//! - Repository implementations and their row types
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

pub mod assets;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use tharwa_core::errors::{DatabaseError, Error, Result};
