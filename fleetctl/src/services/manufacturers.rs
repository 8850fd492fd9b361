//! Manufacturer service.
//!
//! Thin delegation to the storage gateway: manufacturers carry no invariants
//! of their own beyond soft-delete visibility.

use crate::db::{
    errors::DbError,
    handlers::{Manufacturers, Repository},
    models::manufacturers::{
        ManufacturerCreateDBRequest, ManufacturerDBResponse, ManufacturerUpdateDBRequest,
    },
};
use crate::errors::{Error, Result};
use crate::types::ManufacturerId;
use sqlx::SqlitePool;
use tracing::instrument;

#[derive(Clone)]
pub struct ManufacturerService {
    pool: SqlitePool,
}

impl ManufacturerService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn create(&self, request: &ManufacturerCreateDBRequest) -> Result<ManufacturerDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Manufacturers::new(&mut conn).create(request).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn get(&self, id: ManufacturerId) -> Result<ManufacturerDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Manufacturers::new(&mut conn)
            .get_by_id(id)
            .await?
            .ok_or(Error::NotFound {
                resource: "manufacturer",
                id,
            })
    }

    #[instrument(skip(self), err)]
    pub async fn get_all(&self) -> Result<Vec<ManufacturerDBResponse>> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Manufacturers::new(&mut conn).list().await?)
    }

    /// Update a manufacturer. As with cars, an unknown id is a silent no-op
    /// at the storage layer rather than an error.
    #[instrument(skip(self, request), fields(manufacturer_id = id), err)]
    pub async fn update(
        &self,
        id: ManufacturerId,
        request: &ManufacturerUpdateDBRequest,
    ) -> Result<ManufacturerDBResponse> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Manufacturers::new(&mut conn).update(id, request).await?)
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&self, id: ManufacturerId) -> Result<bool> {
        let mut conn = self.pool.acquire().await.map_err(DbError::from)?;
        Ok(Manufacturers::new(&mut conn).delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, country: &str) -> ManufacturerCreateDBRequest {
        ManufacturerCreateDBRequest {
            name: name.to_string(),
            country: country.to_string(),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn create_and_get_round_trip(pool: SqlitePool) {
        let service = ManufacturerService::new(pool);

        let volvo = service.create(&request("Volvo", "Sweden")).await.unwrap();
        assert!(volvo.id > 0);
        assert_eq!(service.get(volvo.id).await.unwrap(), volvo);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn get_unknown_id_is_not_found(pool: SqlitePool) {
        let service = ManufacturerService::new(pool);

        let err = service.get(-1).await.unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                resource: "manufacturer",
                id: -1
            }
        ));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn get_deleted_manufacturer_is_not_found(pool: SqlitePool) {
        let service = ManufacturerService::new(pool);

        let opel = service.create(&request("Opel", "Germany")).await.unwrap();
        service.delete(opel.id).await.unwrap();

        let err = service.get(opel.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn get_all_reflects_deletions(pool: SqlitePool) {
        let service = ManufacturerService::new(pool);

        service.create(&request("Renault", "France")).await.unwrap();
        service.create(&request("Nissan", "Japan")).await.unwrap();
        for manufacturer in service.get_all().await.unwrap() {
            service.delete(manufacturer.id).await.unwrap();
        }

        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn update_replaces_fields(pool: SqlitePool) {
        let service = ManufacturerService::new(pool);

        let lexus = service.create(&request("Lexus", "USA")).await.unwrap();
        let updated = service
            .update(
                lexus.id,
                &ManufacturerUpdateDBRequest {
                    name: "Lexus".to_string(),
                    country: "Japan".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.country, "Japan");
        assert_eq!(service.get(lexus.id).await.unwrap(), updated);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn update_unknown_id_is_a_silent_noop(pool: SqlitePool) {
        let service = ManufacturerService::new(pool);

        service
            .update(
                -1,
                &ManufacturerUpdateDBRequest {
                    name: "Mazda".to_string(),
                    country: "Japan".to_string(),
                },
            )
            .await
            .unwrap();

        let err = service.get(-1).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn delete_propagates_the_affected_flag(pool: SqlitePool) {
        let service = ManufacturerService::new(pool);

        let dodge = service.create(&request("Dodge", "USA")).await.unwrap();
        assert!(service.delete(dodge.id).await.unwrap());
        assert!(!service.delete(dodge.id).await.unwrap());
        assert!(!service.delete(-1).await.unwrap());
    }
}
