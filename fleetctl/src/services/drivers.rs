//! Driver service: CRUD plus the login invariants.

use crate::db::{
    errors::DbError,
    handlers::{Drivers, Repository},
    models::drivers::{DriverCreateDBRequest, DriverDBResponse, DriverUpdateDBRequest},
};
use crate::errors::{Error, Result};
use crate::types::DriverId;
use sqlx::SqlitePool;
use tracing::instrument;

#[derive(Clone)]
pub struct DriverService {
    pool: SqlitePool,
}

impl DriverService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a driver. The login must be free among active drivers; the
    /// probe runs before the insert, so a conflict leaves no row behind.
    ///
    /// The probe and the insert are separate round trips - concurrent creates
    /// with the same login can race past each other.
    #[instrument(skip(self, request), fields(login = %request.login), err)]
    pub async fn create(&self, request: &DriverCreateDBRequest) -> Result<DriverDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        let mut drivers = Drivers::new(&mut conn);

        if drivers.login_exists(&request.login).await? {
            return Err(Error::LoginConflict {
                message: format!("driver with login {:?} already exists", request.login),
            });
        }

        Ok(drivers.create(request).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: DriverId) -> Result<DriverDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Drivers::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                resource: "driver",
                id,
            })
    }

    #[instrument(skip(self), err)]
    pub async fn get_all(&self) -> Result<Vec<DriverDBResponse>> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Drivers::new(&mut conn).list().await?)
    }

    /// Update a driver. The current row is re-fetched first: an unknown id
    /// fails with `NotFound`, and a login differing from the stored one fails
    /// with `LoginConflict` - the login is immutable for the life of the
    /// record.
    #[instrument(skip(self, request), fields(driver_id = id), err)]
    pub async fn update(&self, id: DriverId, request: &DriverUpdateDBRequest) -> Result<DriverDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        let mut drivers = Drivers::new(&mut conn);

        let current = drivers.get_by_id(id).await?.ok_or(Error::NotFound {
            resource: "driver",
            id,
        })?;
        if current.login != request.login {
            return Err(Error::LoginConflict {
                message: "a driver's login cannot be changed".to_string(),
            });
        }

        Ok(drivers.update(id, request).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: DriverId) -> Result<bool> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Drivers::new(&mut conn).delete(id).await?)
    }

    #[instrument(skip(self, login), err)]
    pub async fn find_by_login(&self, login: &str) -> Result<Option<DriverDBResponse>> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Drivers::new(&mut conn).find_by_login(login).await?)
    }
}
