//! Relationship manager for the car/driver join table.

use crate::db::{
    errors::{DbError, Result},
    handlers::active,
    models::drivers::DriverDBResponse,
};
use crate::types::{CarId, DriverId};
use anyhow::anyhow;
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct CarDrivers<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> CarDrivers<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Link a driver to a car.
    ///
    /// The join table's foreign keys reject unknown car or driver ids; its
    /// composite primary key rejects a pair that is already linked. Both
    /// surface as database errors, never as silent no-ops.
    #[instrument(skip(self), err)]
    pub async fn link(&mut self, car_id: CarId, driver_id: DriverId) -> Result<()> {
        sqlx::query("INSERT INTO cars_drivers (car_id, driver_id) VALUES (?1, ?2)")
            .bind(car_id)
            .bind(driver_id)
            .execute(&mut *self.db)
            .await?;

        Ok(())
    }

    /// Remove the link between a driver and a car, reporting whether a link
    /// existed. The car id must resolve to an active car; a driver that was
    /// never linked is a no-op, not an error.
    #[instrument(skip(self), err)]
    pub async fn unlink(&mut self, car_id: CarId, driver_id: DriverId) -> Result<bool> {
        let sql = format!(
            "SELECT COUNT(*) FROM cars WHERE id = ?1 AND {}",
            active("cars")
        );
        let car_exists: i64 = sqlx::query_scalar(&sql)
            .bind(car_id)
            .fetch_one(&mut *self.db)
            .await?;
        if car_exists == 0 {
            return Err(DbError::Other(anyhow!(
                "cannot unlink driver {driver_id}: car {car_id} does not resolve"
            )));
        }

        let result = sqlx::query("DELETE FROM cars_drivers WHERE car_id = ?1 AND driver_id = ?2")
            .bind(car_id)
            .bind(driver_id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Reconstruct a car's driver set from the join table. Links pointing at
    /// deleted drivers are dropped silently.
    #[instrument(skip(self), err)]
    pub async fn drivers_for_car(&mut self, car_id: CarId) -> Result<Vec<DriverDBResponse>> {
        let sql = format!(
            "SELECT d.id, d.name, d.license_number, d.login, d.password \
             FROM drivers d \
             INNER JOIN cars_drivers cd ON d.id = cd.driver_id \
             WHERE cd.car_id = ?1 AND {}",
            active("d")
        );
        let drivers = sqlx::query_as::<_, DriverDBResponse>(&sql)
            .bind(car_id)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(drivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        handlers::{Cars, Drivers, Manufacturers, Repository},
        models::{
            cars::CarCreateDBRequest, drivers::DriverCreateDBRequest,
            manufacturers::ManufacturerCreateDBRequest,
        },
    };
    use sqlx::SqlitePool;

    async fn seed_car(conn: &mut SqliteConnection) -> CarId {
        let manufacturer = Manufacturers::new(&mut *conn)
            .create(&ManufacturerCreateDBRequest {
                name: "Audi".to_string(),
                country: "Germany".to_string(),
            })
            .await
            .unwrap();
        Cars::new(&mut *conn)
            .create(&CarCreateDBRequest {
                model: "A8".to_string(),
                manufacturer_id: manufacturer.id,
                driver_ids: vec![],
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_driver(conn: &mut SqliteConnection, name: &str, login: &str) -> DriverId {
        Drivers::new(&mut *conn)
            .create(&DriverCreateDBRequest {
                name: name.to_string(),
                license_number: "0102".to_string(),
                login: login.to_string(),
                password: "2010".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[sqlx::test]
    #[test_log::test]
    async fn link_rejects_duplicate_pair(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let car_id = seed_car(&mut conn).await;
        let driver_id = seed_driver(&mut conn, "Henry", "henry").await;

        let mut links = CarDrivers::new(&mut conn);
        links.link(car_id, driver_id).await.unwrap();

        let err = links.link(car_id, driver_id).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn link_rejects_unknown_endpoints(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let car_id = seed_car(&mut conn).await;
        let driver_id = seed_driver(&mut conn, "Olga", "olia").await;

        let mut links = CarDrivers::new(&mut conn);

        let err = links.link(-1, driver_id).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        let err = links.link(car_id, -1).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unlink_requires_a_resolvable_car(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let driver_id = seed_driver(&mut conn, "Daniel", "dany").await;

        let mut links = CarDrivers::new(&mut conn);
        let err = links.unlink(-1, driver_id).await.unwrap_err();
        assert!(matches!(err, DbError::Other(_)));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn unlink_of_never_linked_driver_is_a_noop(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let car_id = seed_car(&mut conn).await;
        let driver_id = seed_driver(&mut conn, "Paul", "paul").await;

        let mut links = CarDrivers::new(&mut conn);
        assert!(!links.unlink(car_id, driver_id).await.unwrap());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn drivers_for_car_drops_deleted_drivers(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let car_id = seed_car(&mut conn).await;
        let vick = seed_driver(&mut conn, "Victoria", "vick").await;
        let dany = seed_driver(&mut conn, "Daniel", "dany").await;

        {
            let mut links = CarDrivers::new(&mut conn);
            links.link(car_id, vick).await.unwrap();
            links.link(car_id, dany).await.unwrap();
        }

        Drivers::new(&mut conn).delete(dany).await.unwrap();

        let drivers = CarDrivers::new(&mut conn)
            .drivers_for_car(car_id)
            .await
            .unwrap();
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].id, vick);
    }
}
