//! Repository implementations for the fleet tables.

pub mod car_drivers;
pub mod cars;
pub mod drivers;
pub mod manufacturers;
pub mod repository;

pub use car_drivers::CarDrivers;
pub use cars::Cars;
pub use drivers::Drivers;
pub use manufacturers::Manufacturers;
pub use repository::Repository;

/// Soft-delete visibility predicate for `table` (or a query alias).
///
/// Every read in every repository composes this one helper, so the entity
/// implementations cannot drift apart in what "visible" means.
pub(crate) fn active(table: &str) -> String {
    format!("{table}.is_deleted = FALSE")
}

/// Soft-delete statement for `table`. Rows already flagged are not matched,
/// so deleting the same id a second time affects zero rows and reports false.
pub(crate) fn soft_delete(table: &str) -> String {
    format!(
        "UPDATE {table} SET is_deleted = TRUE WHERE id = ?1 AND {}",
        active(table)
    )
}
