//! Database repository for cars.

use crate::db::{
    errors::Result,
    handlers::{active, car_drivers::CarDrivers, repository::Repository, soft_delete},
    models::cars::{CarCreateDBRequest, CarDBResponse, CarUpdateDBRequest},
};
use crate::types::{CarId, DriverId, ManufacturerId};
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

const COLUMNS: &str = "id, model, manufacturer_id";

// Database entity model; the driver set is reconstructed separately from the
// join table.
#[derive(Debug, Clone, FromRow)]
struct Car {
    id: CarId,
    model: String,
    manufacturer_id: ManufacturerId,
}

pub struct Cars<'c> {
    db: &'c mut SqliteConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Cars<'c> {
    type CreateRequest = CarCreateDBRequest;
    type UpdateRequest = CarUpdateDBRequest;
    type Response = CarDBResponse;
    type Id = CarId;

    #[instrument(skip(self, request), fields(model = %request.model), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let sql = format!(
            "INSERT INTO cars (model, manufacturer_id) VALUES (?1, ?2) RETURNING {COLUMNS}"
        );
        let car = sqlx::query_as::<_, Car>(&sql)
            .bind(&request.model)
            .bind(request.manufacturer_id)
            .fetch_one(&mut *self.db)
            .await?;

        // Link inserts are independent statements: a failure part-way fails
        // the whole create and leaves the car row without the remaining links.
        {
            let mut links = CarDrivers::new(&mut *self.db);
            for driver_id in &request.driver_ids {
                links.link(car.id, *driver_id).await?;
            }
        }

        self.with_drivers(car).await
    }

    #[instrument(skip(self), fields(car_id = id), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM cars WHERE id = ?1 AND {}",
            active("cars")
        );
        let car = sqlx::query_as::<_, Car>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        match car {
            Some(car) => Ok(Some(self.with_drivers(car).await?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let sql = format!("SELECT {COLUMNS} FROM cars WHERE {}", active("cars"));
        let cars = sqlx::query_as::<_, Car>(&sql)
            .fetch_all(&mut *self.db)
            .await?;

        let mut result = Vec::with_capacity(cars.len());
        for car in cars {
            result.push(self.with_drivers(car).await?);
        }
        Ok(result)
    }

    #[instrument(skip(self, request), fields(car_id = id), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Unknown or deleted ids match nothing; the write is then a no-op.
        let sql = format!(
            "UPDATE cars SET model = ?2, manufacturer_id = ?3 WHERE id = ?1 AND {}",
            active("cars")
        );
        sqlx::query(&sql)
            .bind(id)
            .bind(&request.model)
            .bind(request.manufacturer_id)
            .execute(&mut *self.db)
            .await?;

        let drivers = CarDrivers::new(&mut *self.db).drivers_for_car(id).await?;
        Ok(CarDBResponse {
            id,
            model: request.model.clone(),
            manufacturer_id: request.manufacturer_id,
            drivers,
        })
    }

    #[instrument(skip(self), fields(car_id = id), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query(&soft_delete("cars"))
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl<'c> Cars<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// All active cars whose assignment set contains `driver_id`. A driver id
    /// that was never linked, or never existed, yields an empty list.
    #[instrument(skip(self), err)]
    pub async fn get_all_by_driver(&mut self, driver_id: DriverId) -> Result<Vec<CarDBResponse>> {
        let sql = format!(
            "SELECT c.id, c.model, c.manufacturer_id \
             FROM cars c \
             INNER JOIN cars_drivers cd ON c.id = cd.car_id \
             WHERE cd.driver_id = ?1 AND {}",
            active("c")
        );
        let cars = sqlx::query_as::<_, Car>(&sql)
            .bind(driver_id)
            .fetch_all(&mut *self.db)
            .await?;

        let mut result = Vec::with_capacity(cars.len());
        for car in cars {
            result.push(self.with_drivers(car).await?);
        }
        Ok(result)
    }

    async fn with_drivers(&mut self, car: Car) -> Result<CarDBResponse> {
        let drivers = CarDrivers::new(&mut *self.db)
            .drivers_for_car(car.id)
            .await?;
        Ok(CarDBResponse {
            id: car.id,
            model: car.model,
            manufacturer_id: car.manufacturer_id,
            drivers,
        })
    }
}
