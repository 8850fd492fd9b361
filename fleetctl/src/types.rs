//! Common type definitions.
//!
//! All entity ids are 64-bit surrogate keys (SQLite rowids) wrapped in type
//! aliases for readability at call sites:
//!
//! - [`DriverId`]: driver record identifier
//! - [`CarId`]: car record identifier
//! - [`ManufacturerId`]: manufacturer record identifier

// Type aliases for IDs
pub type DriverId = i64;
pub type CarId = i64;
pub type ManufacturerId = i64;
