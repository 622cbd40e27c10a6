use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the `pets` relation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    /// Age in years.
    pub age: f64,
    pub image_url: Option<String>,
    pub owner_id: Uuid,
    /// Assigned by the store on insert, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `pets`. Excludes the store-assigned `id`/`created_at`
/// columns; `breed` is written as an explicit null when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: f64,
    /// Must reference a valid owner; enforced by the store, not locally.
    pub owner_id: Uuid,
}

/// Partial update for `pets`, merged server-side. Absent fields are left
/// out of the PATCH body entirely; `id`/`created_at` cannot be expressed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pet_writes_unset_breed_as_null() {
        let payload = serde_json::to_value(NewPet {
            name: "Firulais".into(),
            species: "dog".into(),
            breed: None,
            age: 3.0,
            owner_id: Uuid::new_v4(),
        })
        .unwrap();

        assert!(payload.get("breed").unwrap().is_null());
        assert!(payload.get("id").is_none());
        assert!(payload.get("created_at").is_none());
    }

    #[test]
    fn pet_patch_omits_absent_fields() {
        let payload = serde_json::to_value(PetPatch {
            age: Some(4.5),
            ..PetPatch::default()
        })
        .unwrap();

        let body = payload.as_object().unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body["age"], serde_json::json!(4.5));
    }
}
