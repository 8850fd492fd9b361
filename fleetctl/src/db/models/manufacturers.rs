//! Database models for manufacturers.

use crate::types::ManufacturerId;
use sqlx::FromRow;

/// Database request for creating a new manufacturer
#[derive(Debug, Clone)]
pub struct ManufacturerCreateDBRequest {
    pub name: String,
    pub country: String,
}

/// Database request for updating a manufacturer (full replace)
#[derive(Debug, Clone)]
pub struct ManufacturerUpdateDBRequest {
    pub name: String,
    pub country: String,
}

/// Database response for a manufacturer
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ManufacturerDBResponse {
    pub id: ManufacturerId,
    pub name: String,
    pub country: String,
}
