use crate::models::{Person, PersonFields};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid person id: {0}")]
    InvalidId(String),

    #[error("storage call exceeded the {0:?} request deadline")]
    Timeout(Duration),

    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => AppError::BadRequest(anyhow::Error::new(err)),
            StoreError::Timeout(_) => AppError::Timeout(anyhow::Error::new(err)),
            StoreError::Database(e) => AppError::from(e),
        }
    }
}

/// What an upserting update did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// An existing record matched the id and had its fields replaced.
    Matched,
    /// No record matched, so one was created under the requested id.
    Upserted,
    /// Nothing matched and nothing was created.
    Unmatched,
}

/// Single-collection gateway for person records.
///
/// Identifiers cross this boundary as opaque strings; implementations own
/// their parsing and reject malformed ones with [`StoreError::InvalidId`].
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Persists a new record and returns its generated id.
    async fn insert(&self, fields: PersonFields) -> Result<String, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Person>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Person>, StoreError>;

    /// Replaces the four fields of the record with `id`, creating it under
    /// that same id when absent.
    async fn update_by_id(
        &self,
        id: &str,
        fields: PersonFields,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Removes at most one record. Returns the number deleted.
    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

pub fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
