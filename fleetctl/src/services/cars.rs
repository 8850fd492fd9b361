//! Car service: CRUD plus driver assignment management.

use crate::db::{
    errors::DbError,
    handlers::{CarDrivers, Cars, Repository},
    models::cars::{CarCreateDBRequest, CarDBResponse, CarUpdateDBRequest},
};
use crate::errors::{Error, Result};
use crate::types::{CarId, DriverId};
use sqlx::SqlitePool;
use tracing::instrument;

#[derive(Clone)]
pub struct CarService {
    pool: SqlitePool,
}

impl CarService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self, request), fields(model = %request.model), err)]
    pub async fn create(&self, request: &CarCreateDBRequest) -> Result<CarDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Cars::new(&mut conn).create(request).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: CarId) -> Result<CarDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Cars::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound { resource: "car", id })
    }

    #[instrument(skip(self), err)]
    pub async fn get_all(&self) -> Result<Vec<CarDBResponse>> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Cars::new(&mut conn).list().await?)
    }

    /// Update a car's own row. Unlike drivers there is no existence
    /// pre-check: an unknown id is a silent no-op at the storage layer.
    #[instrument(skip(self, request), fields(car_id = id), err)]
    pub async fn update(&self, id: CarId, request: &CarUpdateDBRequest) -> Result<CarDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Cars::new(&mut conn).update(id, request).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: CarId) -> Result<bool> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Cars::new(&mut conn).delete(id).await?)
    }

    /// Assign a driver to a car. Re-assigning an already-assigned driver is
    /// rejected, not ignored.
    #[instrument(skip(self), err)]
    pub async fn add_driver_to_car(&self, driver_id: DriverId, car_id: CarId) -> Result<()> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(CarDrivers::new(&mut conn).link(car_id, driver_id).await?)
    }

    /// Remove a driver from a car. Removing a driver that was never assigned
    /// succeeds as a no-op.
    #[instrument(skip(self), err)]
    pub async fn remove_driver_from_car(&self, driver_id: DriverId, car_id: CarId) -> Result<()> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        CarDrivers::new(&mut conn).unlink(car_id, driver_id).await?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    pub async fn get_all_by_driver(&self, driver_id: DriverId) -> Result<Vec<CarDBResponse>> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Cars::new(&mut conn).get_all_by_driver(driver_id).await?)
    }
}
