pub mod postgrest;
pub mod relations;

use crate::models;
use async_trait::async_trait;
use derive_more::{Display, Error};
use uuid::Uuid;

/// Any failure returned by the remote store. One taxonomy for the whole
/// data-access layer; no operation retries and none is fatal to the process.
#[derive(Debug, Display, Error)]
pub enum StoreError {
    /// The request never produced a usable response (DNS, TLS, socket).
    #[display("remote store transport failure: {_0}")]
    Transport(#[error(not(source))] String),
    /// The store answered with a non-success status.
    #[display("remote store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The response body did not match the expected row shape.
    #[display("unexpected row payload from remote store: {_0}")]
    Decode(#[error(not(source))] String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Typed access to the four remote relations.
///
/// Reads that look up a single row return `Ok(None)` when the row does not
/// exist; `Err` always means the query itself failed, so callers can tell
/// not-found apart from a transient failure.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait RecordRepo {
    async fn list_pets(&self) -> Result<Vec<models::pet::Pet>, StoreError>;

    async fn get_pet_by_id(&self, pet_id: Uuid) -> Result<Option<models::pet::Pet>, StoreError>;

    /// Returns the created row including the store-assigned `id` and
    /// `created_at`.
    async fn create_pet(
        &self,
        new_pet: &models::pet::NewPet,
    ) -> Result<models::pet::Pet, StoreError>;

    async fn update_pet(
        &self,
        pet_id: Uuid,
        patch: &models::pet::PetPatch,
    ) -> Result<models::pet::Pet, StoreError>;

    async fn delete_pet(&self, pet_id: Uuid) -> Result<(), StoreError>;

    /// The most recently created pet, `None` when the relation is empty.
    async fn most_recent_pet(&self) -> Result<Option<models::pet::Pet>, StoreError>;

    async fn latest_weight(
        &self,
        pet_id: Uuid,
    ) -> Result<Option<models::health::LatestWeight>, StoreError>;

    /// All weight rows for the pet, newest first.
    async fn list_weight_logs(
        &self,
        pet_id: Uuid,
    ) -> Result<Vec<models::health::WeightLog>, StoreError>;

    async fn insert_weight_log(
        &self,
        entry: &models::health::NewWeightLog,
    ) -> Result<models::health::WeightLog, StoreError>;

    async fn latest_vet_visit(
        &self,
        pet_id: Uuid,
    ) -> Result<Option<models::health::LatestVetVisit>, StoreError>;

    async fn list_vet_visit_logs(
        &self,
        pet_id: Uuid,
    ) -> Result<Vec<models::health::VetVisitLog>, StoreError>;

    async fn insert_vet_visit_log(
        &self,
        entry: &models::health::NewVetVisitLog,
    ) -> Result<models::health::VetVisitLog, StoreError>;

    async fn latest_body_condition(
        &self,
        pet_id: Uuid,
    ) -> Result<Option<models::health::LatestBodyCondition>, StoreError>;

    async fn list_body_condition_logs(
        &self,
        pet_id: Uuid,
    ) -> Result<Vec<models::health::BodyConditionLog>, StoreError>;

    async fn insert_body_condition_log(
        &self,
        entry: &models::health::NewBodyConditionLog,
    ) -> Result<models::health::BodyConditionLog, StoreError>;
}

pub type ImplRecordRepo = Box<dyn RecordRepo>;
