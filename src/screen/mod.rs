//! # Screen Module
//!
//! Headless view logic for the four screens of the application. Each
//! controller owns its copy of fetched rows and follows the same refresh
//! protocol; rendering and navigation live outside this crate.
//!
//! ## Modules
//!
//! - [`body_condition`] - Body condition history list and add-entry flow
//! - [`errors`] - User-facing validation/submit error taxonomy
//! - [`forms`] - Raw modal-form state and validation
//! - [`profile`] - Single pet profile with its latest record of each kind
//! - [`vet_visit`] - Vet visit history list and add-entry flow
//! - [`weight`] - Weight history list and add-entry flow

pub mod body_condition;
pub mod errors;
pub mod forms;
pub mod profile;
pub mod vet_visit;
pub mod weight;

use crate::{models, repo, utils};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Refresh protocol every screen follows: `Idle → Loading → Ready`, then
/// `Ready → Loading → Ready` on each refresh. There is no separate error
/// phase; a failed read reaches `Ready` with empty or stale rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Monotonically increasing tags for in-flight reads. A response is applied
/// only while its tag is still the newest issued, so rapid focus events
/// cannot let a stale response overwrite fresher rows.
#[derive(Debug, Default)]
pub struct FetchTicket {
    issued: u64,
}

impl FetchTicket {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, tag: u64) -> bool {
        tag == self.issued
    }
}

/// Pet a screen works with when navigation supplied none: the most recently
/// created pet acts as the active profile. `None` when the store holds no
/// pets, in which case callers must not issue dependent queries.
pub async fn resolve_active_pet(repo: &repo::ImplRecordRepo) -> Option<Uuid> {
    match repo.most_recent_pet().await {
        Ok(pet) => pet.map(|pet| pet.id),
        Err(err) => {
            log::error!("active pet resolution failed: {err}");
            None
        }
    }
}

/// Row shape the three log list screens render.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LogEntry {
    /// Row id, used as the list key.
    pub id: Uuid,
    pub value: String,
    pub date: DateTime<Utc>,
    pub fmt_date: String,
}

impl From<models::health::WeightLog> for LogEntry {
    fn from(val: models::health::WeightLog) -> Self {
        LogEntry {
            id: val.id,
            value: format!("{:.2} kg", val.weight),
            date: val.date,
            fmt_date: utils::fmt_display_date(val.date),
        }
    }
}

impl From<models::health::VetVisitLog> for LogEntry {
    fn from(val: models::health::VetVisitLog) -> Self {
        LogEntry {
            id: val.id,
            value: val.notes,
            date: val.date,
            fmt_date: utils::fmt_display_date(val.date),
        }
    }
}

impl From<models::health::BodyConditionLog> for LogEntry {
    fn from(val: models::health::BodyConditionLog) -> Self {
        LogEntry {
            id: val.id,
            value: val.body_condition,
            date: val.date,
            fmt_date: utils::fmt_display_date(val.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_ticket_latest_issued_wins() {
        let mut ticket = FetchTicket::default();

        let first = ticket.issue();
        let second = ticket.issue();

        assert!(!ticket.is_current(first));
        assert!(ticket.is_current(second));
    }

    #[test]
    fn weight_rows_render_with_two_decimals() {
        let entry: LogEntry = models::health::WeightLog {
            id: Uuid::new_v4(),
            pet_id: Uuid::new_v4(),
            weight: 24.8,
            date: "2024-01-15T14:00:00Z".parse().unwrap(),
        }
        .into();

        assert_eq!(entry.value, "24.80 kg");
        assert_eq!(entry.fmt_date, "15/01/2024");
    }
}
