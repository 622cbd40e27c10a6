use crate::models;
use async_trait::async_trait;
use postgrest::Postgrest;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use super::{RecordRepo, StoreError, relations};

/// Record access over the hosted store's auto-generated REST interface.
///
/// The query-builder client is an external collaborator; this type only
/// composes queries on it and normalizes the result/error shape.
pub struct PostgrestRepo {
    client: Postgrest,
}

impl PostgrestRepo {
    /// `store_url` is the REST root, e.g. `https://<project>.supabase.co/rest/v1`.
    pub fn new(store_url: &str, api_key: &str) -> Self {
        Self {
            client: Postgrest::new(store_url)
                .insert_header("apikey", api_key)
                .insert_header("Authorization", format!("Bearer {api_key}")),
        }
    }

    async fn rows<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Vec<T>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| StoreError::Decode(err.to_string()))
    }

    async fn one<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        Self::rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("store returned no row".into()))
    }

    async fn accepted(response: reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }

    /// Single-row insert body. PostgREST takes rows as a JSON array.
    fn insert_body<T: Serialize>(row: &T) -> Result<String, StoreError> {
        serde_json::to_string(&[row]).map_err(|err| StoreError::Decode(err.to_string()))
    }

    async fn latest_row<T: DeserializeOwned>(
        &self,
        relation: &str,
        columns: &str,
        pet_id: Uuid,
    ) -> Result<Option<T>, StoreError> {
        let response = self
            .client
            .from(relation)
            .select(columns)
            .eq(relations::COL_PET_ID, pet_id.to_string())
            .order(relations::ORDER_NEWEST_LOG_FIRST)
            .limit(1)
            .execute()
            .await?;

        Ok(Self::rows(response).await?.into_iter().next())
    }

    async fn log_rows<T: DeserializeOwned>(
        &self,
        relation: &str,
        pet_id: Uuid,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .client
            .from(relation)
            .select(relations::ALL_COLUMNS)
            .eq(relations::COL_PET_ID, pet_id.to_string())
            .order(relations::ORDER_NEWEST_LOG_FIRST)
            .execute()
            .await?;

        Self::rows(response).await
    }

    async fn insert_row<T: Serialize, R: DeserializeOwned>(
        &self,
        relation: &str,
        row: &T,
    ) -> Result<R, StoreError> {
        let response = self
            .client
            .from(relation)
            .insert(Self::insert_body(row)?)
            .execute()
            .await?;

        Self::one(response).await
    }
}

#[async_trait]
impl RecordRepo for PostgrestRepo {
    async fn list_pets(&self) -> Result<Vec<models::pet::Pet>, StoreError> {
        let response = self
            .client
            .from(relations::PETS)
            .select(relations::ALL_COLUMNS)
            .execute()
            .await?;

        Self::rows(response).await
    }

    async fn get_pet_by_id(
        &self,
        pet_id: Uuid,
    ) -> Result<Option<models::pet::Pet>, StoreError> {
        let response = self
            .client
            .from(relations::PETS)
            .select(relations::ALL_COLUMNS)
            .eq(relations::COL_ID, pet_id.to_string())
            .limit(1)
            .execute()
            .await?;

        Ok(Self::rows(response).await?.into_iter().next())
    }

    async fn create_pet(
        &self,
        new_pet: &models::pet::NewPet,
    ) -> Result<models::pet::Pet, StoreError> {
        self.insert_row(relations::PETS, new_pet).await
    }

    async fn update_pet(
        &self,
        pet_id: Uuid,
        patch: &models::pet::PetPatch,
    ) -> Result<models::pet::Pet, StoreError> {
        let body = serde_json::to_string(patch).map_err(|err| StoreError::Decode(err.to_string()))?;

        let response = self
            .client
            .from(relations::PETS)
            .update(body)
            .eq(relations::COL_ID, pet_id.to_string())
            .execute()
            .await?;

        Self::one(response).await
    }

    async fn delete_pet(&self, pet_id: Uuid) -> Result<(), StoreError> {
        let response = self
            .client
            .from(relations::PETS)
            .delete()
            .eq(relations::COL_ID, pet_id.to_string())
            .execute()
            .await?;

        Self::accepted(response).await
    }

    async fn most_recent_pet(&self) -> Result<Option<models::pet::Pet>, StoreError> {
        let response = self
            .client
            .from(relations::PETS)
            .select(relations::ALL_COLUMNS)
            .order(relations::ORDER_NEWEST_PET_FIRST)
            .limit(1)
            .execute()
            .await?;

        Ok(Self::rows(response).await?.into_iter().next())
    }

    async fn latest_weight(
        &self,
        pet_id: Uuid,
    ) -> Result<Option<models::health::LatestWeight>, StoreError> {
        self.latest_row(
            relations::WEIGHT_LOGS,
            relations::LATEST_WEIGHT_COLUMNS,
            pet_id,
        )
        .await
    }

    async fn list_weight_logs(
        &self,
        pet_id: Uuid,
    ) -> Result<Vec<models::health::WeightLog>, StoreError> {
        self.log_rows(relations::WEIGHT_LOGS, pet_id).await
    }

    async fn insert_weight_log(
        &self,
        entry: &models::health::NewWeightLog,
    ) -> Result<models::health::WeightLog, StoreError> {
        self.insert_row(relations::WEIGHT_LOGS, entry).await
    }

    async fn latest_vet_visit(
        &self,
        pet_id: Uuid,
    ) -> Result<Option<models::health::LatestVetVisit>, StoreError> {
        self.latest_row(
            relations::VET_VISIT_LOGS,
            relations::LATEST_VET_VISIT_COLUMNS,
            pet_id,
        )
        .await
    }

    async fn list_vet_visit_logs(
        &self,
        pet_id: Uuid,
    ) -> Result<Vec<models::health::VetVisitLog>, StoreError> {
        self.log_rows(relations::VET_VISIT_LOGS, pet_id).await
    }

    async fn insert_vet_visit_log(
        &self,
        entry: &models::health::NewVetVisitLog,
    ) -> Result<models::health::VetVisitLog, StoreError> {
        self.insert_row(relations::VET_VISIT_LOGS, entry).await
    }

    async fn latest_body_condition(
        &self,
        pet_id: Uuid,
    ) -> Result<Option<models::health::LatestBodyCondition>, StoreError> {
        self.latest_row(
            relations::BODY_CONDITION_LOGS,
            relations::LATEST_BODY_CONDITION_COLUMNS,
            pet_id,
        )
        .await
    }

    async fn list_body_condition_logs(
        &self,
        pet_id: Uuid,
    ) -> Result<Vec<models::health::BodyConditionLog>, StoreError> {
        self.log_rows(relations::BODY_CONDITION_LOGS, pet_id).await
    }

    async fn insert_body_condition_log(
        &self,
        entry: &models::health::NewBodyConditionLog,
    ) -> Result<models::health::BodyConditionLog, StoreError> {
        self.insert_row(relations::BODY_CONDITION_LOGS, entry).await
    }
}
