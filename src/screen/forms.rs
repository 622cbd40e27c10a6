//! Raw state of the add-entry modal forms. Values arrive as the user typed
//! them; the date comes from a picker that may not have been touched yet.
//! `validated` turns a form into the typed insert payload or reports the
//! first violation without ever touching the store.

use crate::{models, screen::errors::ValidationError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WeightForm {
    pub weight: String,
    pub date: Option<NaiveDate>,
}

impl WeightForm {
    pub fn validated(
        &self,
        pet_id: Uuid,
    ) -> Result<models::health::NewWeightLog, ValidationError> {
        let weight = self.weight.trim();
        if weight.is_empty() {
            return Err(ValidationError::MissingField("weight"));
        }

        let weight = weight
            .parse::<f64>()
            .map_err(|_| ValidationError::WeightNotNumeric)?;
        let date = self.date.ok_or(ValidationError::MissingField("date"))?;

        Ok(models::health::NewWeightLog {
            pet_id,
            weight,
            date: date.and_time(NaiveTime::default()).and_utc(),
        })
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VetVisitForm {
    pub notes: String,
    pub date: Option<NaiveDate>,
}

impl VetVisitForm {
    pub fn validated(
        &self,
        pet_id: Uuid,
    ) -> Result<models::health::NewVetVisitLog, ValidationError> {
        let notes = self.notes.trim();
        if notes.is_empty() {
            return Err(ValidationError::MissingField("notes"));
        }

        let date = self.date.ok_or(ValidationError::MissingField("date"))?;

        Ok(models::health::NewVetVisitLog {
            pet_id,
            notes: notes.to_string(),
            date: date.and_time(NaiveTime::default()).and_utc(),
        })
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BodyConditionForm {
    pub condition: String,
    pub date: Option<NaiveDate>,
}

impl BodyConditionForm {
    pub fn validated(
        &self,
        pet_id: Uuid,
    ) -> Result<models::health::NewBodyConditionLog, ValidationError> {
        let condition = self.condition.trim();
        if condition.is_empty() {
            return Err(ValidationError::MissingField("body condition"));
        }

        let date = self.date.ok_or(ValidationError::MissingField("date"))?;

        Ok(models::health::NewBodyConditionLog {
            pet_id,
            body_condition: condition.to_string(),
            date: date.and_time(NaiveTime::default()).and_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_form_rejects_blank_value() {
        let form = WeightForm {
            weight: "   ".into(),
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        };

        assert_eq!(
            form.validated(Uuid::new_v4()),
            Err(ValidationError::MissingField("weight"))
        );
    }

    #[test]
    fn weight_form_rejects_non_numeric_value() {
        let form = WeightForm {
            weight: "heavy".into(),
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        };

        assert_eq!(
            form.validated(Uuid::new_v4()),
            Err(ValidationError::WeightNotNumeric)
        );
    }

    #[test]
    fn weight_form_requires_a_picked_date() {
        let form = WeightForm {
            weight: "24.8".into(),
            date: None,
        };

        assert_eq!(
            form.validated(Uuid::new_v4()),
            Err(ValidationError::MissingField("date"))
        );
    }

    #[test]
    fn weight_form_builds_midnight_utc_entry() {
        let pet_id = Uuid::new_v4();
        let form = WeightForm {
            weight: " 24.8 ".into(),
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        };

        let entry = form.validated(pet_id).unwrap();

        assert_eq!(entry.pet_id, pet_id);
        assert_eq!(entry.weight, 24.8);
        assert_eq!(
            entry.date,
            "2024-01-15T00:00:00Z"
                .parse::<chrono::DateTime<chrono::Utc>>()
                .unwrap()
        );
    }

    #[test]
    fn vet_visit_form_rejects_empty_notes() {
        let form = VetVisitForm {
            notes: String::new(),
            date: Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
        };

        assert_eq!(
            form.validated(Uuid::new_v4()),
            Err(ValidationError::MissingField("notes"))
        );
    }

    #[test]
    fn body_condition_form_trims_the_category() {
        let form = BodyConditionForm {
            condition: " Ideal ".into(),
            date: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        };

        let entry = form.validated(Uuid::new_v4()).unwrap();

        assert_eq!(entry.body_condition, "Ideal");
    }
}
