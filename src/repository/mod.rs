//! Repository layer for database operations

pub mod bookings;
pub mod chemicals;
pub mod equipment;
pub mod locations;
pub mod orders;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub locations: locations::LocationsRepository,
    pub chemicals: chemicals::ChemicalsRepository,
    pub equipment: equipment::EquipmentRepository,
    pub bookings: bookings::BookingsRepository,
    pub orders: orders::OrdersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            locations: locations::LocationsRepository::new(pool.clone()),
            chemicals: chemicals::ChemicalsRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            orders: orders::OrdersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database (readiness probe)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Map a write failure on a table referencing `locations`: an unknown
/// location id is bad input, anything else stays a database error.
pub(crate) fn location_write_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            AppError::Validation("Unknown location".to_string())
        }
        other => AppError::Database(other),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    #[derive(Debug)]
    struct FakeDbError(ErrorKind);

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake database error")
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            None
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match &self.0 {
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    #[test]
    fn test_unknown_location_is_validation_error() {
        let e = sqlx::Error::Database(Box::new(FakeDbError(ErrorKind::ForeignKeyViolation)));
        let mapped = location_write_error(e);
        assert!(matches!(mapped, AppError::Validation(ref msg) if msg == "Unknown location"));
        assert_eq!(mapped.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_database_errors_stay_internal() {
        let e = sqlx::Error::Database(Box::new(FakeDbError(ErrorKind::Other)));
        assert!(matches!(location_write_error(e), AppError::Database(_)));
        assert!(matches!(
            location_write_error(sqlx::Error::PoolTimedOut),
            AppError::Database(_)
        ));
    }
}
