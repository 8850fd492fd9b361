//! Database repository for drivers.

use crate::db::{
    errors::Result,
    handlers::{active, repository::Repository, soft_delete},
    models::drivers::{DriverCreateDBRequest, DriverDBResponse, DriverUpdateDBRequest},
};
use crate::types::DriverId;
use sqlx::SqliteConnection;
use tracing::instrument;

const COLUMNS: &str = "id, name, license_number, login, password";

pub struct Drivers<'c> {
    db: &'c mut SqliteConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Drivers<'c> {
    type CreateRequest = DriverCreateDBRequest;
    type UpdateRequest = DriverUpdateDBRequest;
    type Response = DriverDBResponse;
    type Id = DriverId;

    #[instrument(skip(self, request), fields(login = %request.login), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let sql = format!(
            "INSERT INTO drivers (name, license_number, login, password) \
             VALUES (?1, ?2, ?3, ?4) RETURNING {COLUMNS}"
        );
        let driver = sqlx::query_as::<_, DriverDBResponse>(&sql)
            .bind(&request.name)
            .bind(&request.license_number)
            .bind(&request.login)
            .bind(&request.password)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(driver)
    }

    #[instrument(skip(self), fields(driver_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM drivers WHERE id = ?1 AND {}",
            active("drivers")
        );
        let driver = sqlx::query_as::<_, DriverDBResponse>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(driver)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let sql = format!("SELECT {COLUMNS} FROM drivers WHERE {}", active("drivers"));
        let drivers = sqlx::query_as::<_, DriverDBResponse>(&sql)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(drivers)
    }

    #[instrument(skip(self, request), fields(driver_id = id), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Unknown or deleted ids match nothing; the write is then a no-op.
        let sql = format!(
            "UPDATE drivers SET name = ?2, license_number = ?3, login = ?4, password = ?5 \
             WHERE id = ?1 AND {}",
            active("drivers")
        );
        sqlx::query(&sql)
            .bind(id)
            .bind(&request.name)
            .bind(&request.license_number)
            .bind(&request.login)
            .bind(&request.password)
            .execute(&mut *self.db)
            .await?;

        Ok(DriverDBResponse {
            id,
            name: request.name.clone(),
            license_number: request.license_number.clone(),
            login: request.login.clone(),
            password: request.password.clone(),
        })
    }

    #[instrument(skip(self), fields(driver_id = id), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query(&soft_delete("drivers"))
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl<'c> Drivers<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, login), err)]
    pub async fn find_by_login(&mut self, login: &str) -> Result<Option<DriverDBResponse>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM drivers WHERE login = ?1 AND {}",
            active("drivers")
        );
        let driver = sqlx::query_as::<_, DriverDBResponse>(&sql)
            .bind(login)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(driver)
    }

    /// Uniqueness probe backing driver creation: loads every active login and
    /// tests membership. Linear in fleet size, which is acceptable at the
    /// scale this system manages.
    #[instrument(skip(self, login), err)]
    pub async fn login_exists(&mut self, login: &str) -> Result<bool> {
        let sql = format!("SELECT login FROM drivers WHERE {}", active("drivers"));
        let logins: Vec<String> = sqlx::query_scalar(&sql).fetch_all(&mut *self.db).await?;

        Ok(logins.iter().any(|l| l == login))
    }
}
