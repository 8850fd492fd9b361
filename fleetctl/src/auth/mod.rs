//! Driver authentication.
//!
//! Authentication is a lookup by login among active drivers followed by a
//! verbatim password comparison - the record schema stores passwords as
//! entered. Failures are reported on their own channel
//! ([`Error::AuthenticationFailed`]) rather than as `NotFound`, so callers
//! cannot tell an unknown login apart from a wrong password.

use crate::db::models::drivers::DriverDBResponse;
use crate::errors::{Error, Result};
use crate::services::DriverService;
use tracing::instrument;

#[derive(Clone)]
pub struct AuthenticationService {
    drivers: DriverService,
}

impl AuthenticationService {
    pub fn new(drivers: DriverService) -> Self {
        Self { drivers }
    }

    /// Authenticate a driver, returning the full record on success.
    #[instrument(skip(self, login, password), err)]
    pub async fn login(&self, login: &str, password: &str) -> Result<DriverDBResponse> {
        match self.drivers.find_by_login(login).await? {
            Some(driver) if driver.password == password => Ok(driver),
            _ => Err(Error::AuthenticationFailed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::drivers::DriverCreateDBRequest;
    use sqlx::SqlitePool;

    async fn service_with_denis(pool: SqlitePool) -> (AuthenticationService, DriverDBResponse) {
        let drivers = DriverService::new(pool);
        let denis = drivers
            .create(&DriverCreateDBRequest {
                name: "Denis".to_string(),
                license_number: "0013".to_string(),
                login: "den".to_string(),
                password: "1300".to_string(),
            })
            .await
            .unwrap();
        (AuthenticationService::new(drivers), denis)
    }

    #[sqlx::test]
    #[test_log::test]
    async fn login_with_correct_credentials_returns_the_driver(pool: SqlitePool) {
        let (auth, denis) = service_with_denis(pool).await;

        let driver = auth.login("den", "1300").await.unwrap();
        assert_eq!(driver, denis);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn login_with_wrong_password_fails(pool: SqlitePool) {
        let (auth, _) = service_with_denis(pool).await;

        let err = auth.login("den", "0000").await.unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailed));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn login_is_case_sensitive(pool: SqlitePool) {
        let (auth, _) = service_with_denis(pool).await;

        let err = auth.login("DEN", "1300").await.unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailed));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn login_with_unknown_or_empty_login_fails(pool: SqlitePool) {
        let (auth, _) = service_with_denis(pool).await;

        assert!(matches!(
            auth.login("nobody", "1300").await.unwrap_err(),
            Error::AuthenticationFailed
        ));
        assert!(matches!(
            auth.login("", "1300").await.unwrap_err(),
            Error::AuthenticationFailed
        ));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn login_of_deleted_driver_fails(pool: SqlitePool) {
        let drivers = DriverService::new(pool);
        let denis = drivers
            .create(&DriverCreateDBRequest {
                name: "Denis".to_string(),
                license_number: "0013".to_string(),
                login: "den".to_string(),
                password: "1300".to_string(),
            })
            .await
            .unwrap();
        drivers.delete(denis.id).await.unwrap();

        let auth = AuthenticationService::new(drivers);
        let err = auth.login("den", "1300").await.unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailed));
    }
}
