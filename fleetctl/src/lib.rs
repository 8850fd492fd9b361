//! # fleetctl: Taxi Fleet Record Keeping
//!
//! `fleetctl` is the persistence backend for a taxi fleet's records: the
//! drivers on the payroll, the cars they are assigned to, and the
//! manufacturers those cars come from. It owns the state-consistency rules of
//! that data - soft-delete visibility, login uniqueness, and the many-to-many
//! car/driver assignment - and exposes them as a small set of entity
//! services.
//!
//! ## Overview
//!
//! Records are never physically removed through the service surface. Deleting
//! a driver, car, or manufacturer flips a flag; every read filters flagged
//! rows out, so deleted records are invisible to lookups while their history
//! stays in the database. Car/driver assignments live in a join table whose
//! constraints reject duplicate assignments and links to missing records, and
//! a car's driver set is reconstructed on every read against the drivers that
//! are still active.
//!
//! Driver logins are unique among active drivers and immutable once issued.
//! Both rules are enforced in the service layer before any write: creation
//! runs a uniqueness probe, and updates compare the incoming login against
//! the stored one. Authentication is a lookup by login plus a verbatim
//! password comparison, failing on its own channel so callers cannot probe
//! which logins exist.
//!
//! ## Architecture
//!
//! Persistence uses [SQLx](https://github.com/launchbadge/sqlx) over an
//! embedded SQLite database, with migrations applied on startup.
//!
//! The **database layer** ([`db`]) uses the repository pattern. Each table
//! has a repository handling its queries ([`db::handlers`]); the car/driver
//! join has a relationship manager of its own. All soft-delete filtering
//! composes a single shared predicate so entity implementations cannot
//! drift.
//!
//! The **service layer** ([`services`]) sits directly above the
//! repositories, translates absent rows into [`errors::Error::NotFound`],
//! and enforces the driver login invariants. [`auth`] layers credential
//! checking on top of the driver service.
//!
//! Each service operation acquires one pool connection, performs its round
//! trips sequentially, and releases the connection on every exit path. There
//! is no cross-statement transaction demarcation: the uniqueness probe and
//! the insert it guards, like a car insert and its link inserts, can
//! interleave under concurrency.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fleetctl::config::Config;
//! use fleetctl::db::models::drivers::DriverCreateDBRequest;
//! use fleetctl::services::DriverService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     fleetctl::telemetry::init_telemetry()?;
//!
//!     let config = Config::load(std::path::Path::new("config.yaml"))?;
//!     let pool = fleetctl::db::pool::connect(&config.database).await?;
//!
//!     let drivers = DriverService::new(pool);
//!     let driver = drivers
//!         .create(&DriverCreateDBRequest {
//!             name: "Ann".into(),
//!             license_number: "0022".into(),
//!             login: "ann".into(),
//!             password: "2200".into(),
//!         })
//!         .await?;
//!     println!("created driver {}", driver.id);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod services;
pub mod telemetry;
pub mod types;

pub use config::Config;
pub use errors::{Error, Result};
pub use types::{CarId, DriverId, ManufacturerId};

/// Get the fleetctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}
