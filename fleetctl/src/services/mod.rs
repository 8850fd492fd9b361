//! Entity services layered above the storage gateways.
//!
//! Services own the business invariants the gateways do not: login uniqueness
//! and immutability for drivers, existence checks translated into
//! [`Error::NotFound`](crate::errors::Error::NotFound), and delegation to the
//! relationship manager for car/driver assignments. Invariant checks run
//! before any write and fail fast without side effects.
//!
//! Each service owns a handle to the connection pool and acquires one
//! connection per operation; services are wired by explicit constructor
//! injection.

pub mod cars;
pub mod drivers;
pub mod manufacturers;

pub use cars::CarService;
pub use drivers::DriverService;
pub use manufacturers::ManufacturerService;
