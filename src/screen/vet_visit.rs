use crate::{
    models,
    repo::{ImplRecordRepo, StoreError},
    screen::{
        FetchTicket, LogEntry, Phase,
        errors::{SubmitError, ValidationError},
        forms, resolve_active_pet,
    },
};
use uuid::Uuid;

/// View logic for the vet visit history list and its add-entry modal.
pub struct VetVisitScreen {
    pet_id: Option<Uuid>,
    phase: Phase,
    entries: Vec<models::health::VetVisitLog>,
    ticket: FetchTicket,
}

impl VetVisitScreen {
    pub fn new(pet_id: Uuid) -> Self {
        Self {
            pet_id: Some(pet_id),
            phase: Phase::default(),
            entries: Vec::new(),
            ticket: FetchTicket::default(),
        }
    }

    pub fn detached() -> Self {
        Self {
            pet_id: None,
            phase: Phase::default(),
            entries: Vec::new(),
            ticket: FetchTicket::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pet_id(&self) -> Option<Uuid> {
        self.pet_id
    }

    pub fn entries(&self) -> &[models::health::VetVisitLog] {
        &self.entries
    }

    pub fn rows(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().map(Into::into).collect()
    }

    pub fn begin_refresh(&mut self) -> u64 {
        self.phase = Phase::Loading;
        self.ticket.issue()
    }

    pub fn apply_rows(
        &mut self,
        tag: u64,
        outcome: Result<Vec<models::health::VetVisitLog>, StoreError>,
    ) {
        if !self.ticket.is_current(tag) {
            log::debug!("discarding stale vet visit response (tag {tag})");
            return;
        }

        match outcome {
            Ok(rows) => self.entries = rows,
            Err(err) => log::error!("error fetching vet visit logs: {err}"),
        }
        self.phase = Phase::Ready;
    }

    async fn pet_for_queries(&mut self, repo: &ImplRecordRepo) -> Option<Uuid> {
        if self.pet_id.is_none() {
            self.pet_id = resolve_active_pet(repo).await;
        }
        self.pet_id
    }

    pub async fn refresh(&mut self, repo: &ImplRecordRepo) {
        let tag = self.begin_refresh();

        let Some(pet_id) = self.pet_for_queries(repo).await else {
            self.apply_rows(tag, Ok(Vec::new()));
            return;
        };

        let outcome = repo.list_vet_visit_logs(pet_id).await;
        self.apply_rows(tag, outcome);
    }

    pub async fn submit(
        &mut self,
        repo: &ImplRecordRepo,
        form: &forms::VetVisitForm,
    ) -> Result<(), SubmitError> {
        let Some(pet_id) = self.pet_id else {
            return Err(ValidationError::MissingField("pet").into());
        };
        let entry = form.validated(pet_id)?;

        if let Err(err) = repo.insert_vet_visit_log(&entry).await {
            log::error!("error inserting vet visit log: {err}");
            return Err(SubmitError::Store(err));
        }

        self.refresh(repo).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health::VetVisitLog;
    use crate::repo::MockRecordRepo;
    use chrono::NaiveDate;
    use mockall::predicate::*;

    fn visit_row(pet_id: Uuid, notes: &str, date: &str) -> VetVisitLog {
        VetVisitLog {
            id: Uuid::new_v4(),
            pet_id,
            notes: notes.to_string(),
            date: date.parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn refresh_populates_rows() {
        let pet_id = Uuid::new_v4();
        let rows = vec![
            visit_row(pet_id, "Routine check-up, all good!", "2024-03-05T09:30:00Z"),
            visit_row(pet_id, "Vaccination completed", "2024-02-18T14:15:00Z"),
        ];

        let mut mock_repo = MockRecordRepo::new();
        mock_repo
            .expect_list_vet_visit_logs()
            .with(eq(pet_id))
            .times(1)
            .returning(move |_| {
                let rows = rows.clone();
                Box::pin(async move { Ok(rows) })
            });
        let mock_repo: ImplRecordRepo = Box::new(mock_repo);

        let mut screen = VetVisitScreen::new(pet_id);
        screen.refresh(&mock_repo).await;

        assert_eq!(screen.phase(), Phase::Ready);
        assert_eq!(screen.rows()[0].value, "Routine check-up, all good!");
    }

    #[tokio::test]
    async fn empty_notes_never_reach_the_store() {
        let mut mock_repo = MockRecordRepo::new();
        mock_repo.expect_insert_vet_visit_log().times(0);
        let mock_repo: ImplRecordRepo = Box::new(mock_repo);

        let mut screen = VetVisitScreen::new(Uuid::new_v4());
        let result = screen
            .submit(
                &mock_repo,
                &forms::VetVisitForm {
                    notes: "  ".into(),
                    date: Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::Validation(ValidationError::MissingField(
                "notes"
            )))
        ));
    }

    #[tokio::test]
    async fn submit_inserts_then_rereads_the_list() {
        let pet_id = Uuid::new_v4();
        let refreshed = vec![visit_row(
            pet_id,
            "Minor ear infection treated",
            "2024-03-10T00:00:00Z",
        )];

        let mut mock_repo = MockRecordRepo::new();
        mock_repo
            .expect_insert_vet_visit_log()
            .withf(move |entry| {
                entry.pet_id == pet_id && entry.notes == "Minor ear infection treated"
            })
            .times(1)
            .returning(|entry| {
                let created = VetVisitLog {
                    id: Uuid::new_v4(),
                    pet_id: entry.pet_id,
                    notes: entry.notes.clone(),
                    date: entry.date,
                };
                Box::pin(async move { Ok(created) })
            });
        mock_repo
            .expect_list_vet_visit_logs()
            .times(1)
            .returning(move |_| {
                let rows = refreshed.clone();
                Box::pin(async move { Ok(rows) })
            });
        let mock_repo: ImplRecordRepo = Box::new(mock_repo);

        let mut screen = VetVisitScreen::new(pet_id);
        let result = screen
            .submit(
                &mock_repo,
                &forms::VetVisitForm {
                    notes: "Minor ear infection treated".into(),
                    date: Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()),
                },
            )
            .await;

        assert!(result.is_ok());
        assert_eq!(screen.entries().len(), 1);
    }
}
