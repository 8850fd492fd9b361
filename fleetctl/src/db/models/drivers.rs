//! Database models for drivers.

use crate::types::DriverId;
use sqlx::FromRow;

/// Database request for creating a new driver
#[derive(Debug, Clone)]
pub struct DriverCreateDBRequest {
    pub name: String,
    pub license_number: String,
    pub login: String,
    pub password: String,
}

/// Database request for updating a driver.
///
/// Updates replace every mutable field. The login is carried so the service
/// layer can verify it matches the stored one; a driver's login is immutable
/// for the life of the record.
#[derive(Debug, Clone)]
pub struct DriverUpdateDBRequest {
    pub name: String,
    pub license_number: String,
    pub login: String,
    pub password: String,
}

/// Database response for a driver
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DriverDBResponse {
    pub id: DriverId,
    pub name: String,
    pub license_number: String,
    pub login: String,
    pub password: String,
}
