use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("invalid advertised start time '{raw}': {source}")]
    InvalidStartTime {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("seeding races store failed: {0}")]
    Seed(#[source] rusqlite::Error),
}

impl From<ServiceError> for tonic::Status {
    fn from(err: ServiceError) -> Self {
        tonic::Status::internal(err.to_string())
    }
}
