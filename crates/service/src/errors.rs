use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("company not found: {0}")]
    CompanyNotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }

    pub fn company_not_found(id: &str) -> Self { Self::CompanyNotFound(format!("company {} does not exist", id)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Model(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::CompanyNotFound(_) => 1004,
            ServiceError::Db(_) => 1200,
        }
    }
}
