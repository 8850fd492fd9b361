use crate::db::errors::DbError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Requested entity id does not resolve to an active row
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Driver login invariant violation: duplicate login on create, or an
    /// attempt to change the login on update
    #[error("login conflict: {message}")]
    LoginConflict { message: String },

    /// Unknown login or credential mismatch during authentication
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
