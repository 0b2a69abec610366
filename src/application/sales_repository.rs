// Repository trait for sales data access
use crate::domain::sale::SaleRecord;
use async_trait::async_trait;
use std::time::SystemTime;
use thiserror::Error;

/// Identifies one version of the underlying dataset. Two equal identities
/// mean the cached records are still valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIdentity {
    pub location: String,
    pub modified: Option<SystemTime>,
    pub len: u64,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read sales data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sales data is missing required column '{0}'")]
    MissingColumn(String),

    #[error("malformed sales row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("invalid date '{value}' for car {car_id} at line {line}, expected month/day/year")]
    InvalidDate {
        line: u64,
        car_id: String,
        value: String,
    },

    #[error("invalid price '{value}' for car {car_id} at line {line}")]
    InvalidPrice {
        line: u64,
        car_id: String,
        value: String,
    },

    #[error("duplicate car id '{car_id}' at line {line}")]
    DuplicateCarId { line: u64, car_id: String },
}

#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Identity of the current version of the source, used as the cache key
    async fn source_identity(&self) -> Result<SourceIdentity, LoadError>;

    /// Load every record, or fail as a whole
    async fn load(&self) -> Result<Vec<SaleRecord>, LoadError>;
}
