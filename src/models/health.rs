//! Row types for the three log relations. Each log row references exactly
//! one pet through `pet_id`; log rows are never updated or deleted once
//! inserted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeightLog {
    pub id: Uuid,
    pub pet_id: Uuid,
    /// Kilograms.
    pub weight: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VetVisitLog {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub notes: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BodyConditionLog {
    pub id: Uuid,
    pub pet_id: Uuid,
    /// Free-text category, e.g. "Ideal", "Overweight".
    pub body_condition: String,
    pub date: DateTime<Utc>,
}

/// Insert payloads. The store assigns `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewWeightLog {
    pub pet_id: Uuid,
    pub weight: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewVetVisitLog {
    pub pet_id: Uuid,
    pub notes: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewBodyConditionLog {
    pub pet_id: Uuid,
    pub body_condition: String,
    pub date: DateTime<Utc>,
}

/// Latest-row projections: only the columns the profile screen displays.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LatestWeight {
    pub weight: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LatestVetVisit {
    pub notes: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LatestBodyCondition {
    pub body_condition: String,
    pub date: DateTime<Utc>,
}
