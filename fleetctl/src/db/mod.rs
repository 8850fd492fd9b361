//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with SQLite. It
//! follows the Repository pattern to provide clean abstractions over database
//! operations.
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for CRUD operations and the
//!   car/driver relationship manager
//! - [`models`]: Database request/response structures matching table schemas
//! - [`errors`]: Database-specific error types
//! - [`pool`]: Connection pool construction and migration
//!
//! # Soft deletes
//!
//! Rows are flagged rather than removed. Every read query composes the shared
//! visibility predicate from [`handlers`], so a deleted row is invisible to
//! `get`, `list`, and lookups while remaining physically present.
//!
//! # Connections
//!
//! Repositories borrow a single connection for their lifetime. Services
//! acquire one from the pool per operation; dropping the guard returns it on
//! every exit path:
//!
//! ```ignore
//! let mut conn = pool.acquire().await.map_err(DbError::from)?;
//! let mut drivers = Drivers::new(&mut conn);
//! let driver = drivers.get_by_id(id).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pool;
