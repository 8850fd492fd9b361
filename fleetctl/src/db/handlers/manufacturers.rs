//! Database repository for manufacturers.

use crate::db::{
    errors::Result,
    handlers::{active, repository::Repository, soft_delete},
    models::manufacturers::{
        ManufacturerCreateDBRequest, ManufacturerDBResponse, ManufacturerUpdateDBRequest,
    },
};
use crate::types::ManufacturerId;
use sqlx::SqliteConnection;
use tracing::instrument;

const COLUMNS: &str = "id, name, country";

pub struct Manufacturers<'c> {
    db: &'c mut SqliteConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Manufacturers<'c> {
    type CreateRequest = ManufacturerCreateDBRequest;
    type UpdateRequest = ManufacturerUpdateDBRequest;
    type Response = ManufacturerDBResponse;
    type Id = ManufacturerId;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let sql = format!(
            "INSERT INTO manufacturers (name, country) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        let manufacturer = sqlx::query_as::<_, ManufacturerDBResponse>(&sql)
            .bind(&request.name)
            .bind(&request.country)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(manufacturer)
    }

    #[instrument(skip(self), fields(manufacturer_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM manufacturers WHERE id = ?1 AND {}",
            active("manufacturers")
        );
        let manufacturer = sqlx::query_as::<_, ManufacturerDBResponse>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(manufacturer)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM manufacturers WHERE {}",
            active("manufacturers")
        );
        let manufacturers = sqlx::query_as::<_, ManufacturerDBResponse>(&sql)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(manufacturers)
    }

    #[instrument(skip(self, request), fields(manufacturer_id = id), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Unknown or deleted ids match nothing; the write is then a no-op.
        let sql = format!(
            "UPDATE manufacturers SET name = ?2, country = ?3 WHERE id = ?1 AND {}",
            active("manufacturers")
        );
        sqlx::query(&sql)
            .bind(id)
            .bind(&request.name)
            .bind(&request.country)
            .execute(&mut *self.db)
            .await?;

        Ok(ManufacturerDBResponse {
            id,
            name: request.name.clone(),
            country: request.country.clone(),
        })
    }

    #[instrument(skip(self), fields(manufacturer_id = id), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query(&soft_delete("manufacturers"))
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl<'c> Manufacturers<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }
}
