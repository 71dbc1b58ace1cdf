use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Uniqueness violation: {0}")]
    UniquenessViolation(String),

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrityViolation(String),

    #[error("ORM error")]
    OrmError(#[source] DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::UniquenessViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                AppError::ReferentialIntegrityViolation(msg)
            }
            _ => match err {
                DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => AppError::NotFound,
                other => AppError::OrmError(other),
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_records_map_to_not_found() {
        let err: AppError = DbErr::RecordNotUpdated.into();
        assert!(matches!(err, AppError::NotFound));

        let err: AppError = DbErr::RecordNotFound("users".into()).into();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn other_orm_errors_are_kept() {
        let err: AppError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, AppError::OrmError(DbErr::Custom(_))));
    }
}
