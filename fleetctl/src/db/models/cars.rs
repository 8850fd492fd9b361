//! Database models for cars.

use crate::db::models::drivers::DriverDBResponse;
use crate::types::{CarId, DriverId, ManufacturerId};

/// Database request for creating a new car.
///
/// The supplied drivers are linked into the join table one by one after the
/// car row is inserted; the sequence is not atomic.
#[derive(Debug, Clone)]
pub struct CarCreateDBRequest {
    pub model: String,
    pub manufacturer_id: ManufacturerId,
    pub driver_ids: Vec<DriverId>,
}

/// Database request for updating a car's own row (full replace).
///
/// Driver assignments are managed through the relationship manager, not
/// through update.
#[derive(Debug, Clone)]
pub struct CarUpdateDBRequest {
    pub model: String,
    pub manufacturer_id: ManufacturerId,
}

/// Database response for a car, with its assigned drivers reconstructed from
/// the join table. Links to deleted drivers are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDBResponse {
    pub id: CarId,
    pub model: String,
    pub manufacturer_id: ManufacturerId,
    pub drivers: Vec<DriverDBResponse>,
}
