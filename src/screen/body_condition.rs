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

/// View logic for the body condition history list and its add-entry modal.
pub struct BodyConditionScreen {
    pet_id: Option<Uuid>,
    phase: Phase,
    entries: Vec<models::health::BodyConditionLog>,
    ticket: FetchTicket,
}

impl BodyConditionScreen {
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

    pub fn entries(&self) -> &[models::health::BodyConditionLog] {
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
        outcome: Result<Vec<models::health::BodyConditionLog>, StoreError>,
    ) {
        if !self.ticket.is_current(tag) {
            log::debug!("discarding stale body condition response (tag {tag})");
            return;
        }

        match outcome {
            Ok(rows) => self.entries = rows,
            Err(err) => log::error!("error fetching body condition logs: {err}"),
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

        let outcome = repo.list_body_condition_logs(pet_id).await;
        self.apply_rows(tag, outcome);
    }

    pub async fn submit(
        &mut self,
        repo: &ImplRecordRepo,
        form: &forms::BodyConditionForm,
    ) -> Result<(), SubmitError> {
        let Some(pet_id) = self.pet_id else {
            return Err(ValidationError::MissingField("pet").into());
        };
        let entry = form.validated(pet_id)?;

        if let Err(err) = repo.insert_body_condition_log(&entry).await {
            log::error!("error inserting body condition log: {err}");
            return Err(SubmitError::Store(err));
        }

        self.refresh(repo).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health::BodyConditionLog;
    use crate::repo::MockRecordRepo;
    use chrono::NaiveDate;
    use mockall::predicate::*;

    fn condition_row(pet_id: Uuid, condition: &str, date: &str) -> BodyConditionLog {
        BodyConditionLog {
            id: Uuid::new_v4(),
            pet_id,
            body_condition: condition.to_string(),
            date: date.parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn refresh_resolves_the_active_pet_when_detached() {
        let pet_id = Uuid::new_v4();
        let rows = vec![condition_row(pet_id, "Ideal", "2024-03-01T10:00:00Z")];

        let mut mock_repo = MockRecordRepo::new();
        mock_repo
            .expect_most_recent_pet()
            .times(1)
            .returning(move || {
                Box::pin(async move {
                    Ok(Some(models::pet::Pet {
                        id: pet_id,
                        name: "Luna".into(),
                        species: "cat".into(),
                        ..models::pet::Pet::default()
                    }))
                })
            });
        mock_repo
            .expect_list_body_condition_logs()
            .with(eq(pet_id))
            .times(1)
            .returning(move |_| {
                let rows = rows.clone();
                Box::pin(async move { Ok(rows) })
            });
        let mock_repo: ImplRecordRepo = Box::new(mock_repo);

        let mut screen = BodyConditionScreen::detached();
        screen.refresh(&mock_repo).await;

        assert_eq!(screen.pet_id(), Some(pet_id));
        assert_eq!(screen.rows()[0].value, "Ideal");
    }

    #[tokio::test]
    async fn later_refresh_reuses_the_resolved_pet() {
        let pet_id = Uuid::new_v4();

        let mut mock_repo = MockRecordRepo::new();
        mock_repo.expect_most_recent_pet().times(0);
        mock_repo
            .expect_list_body_condition_logs()
            .with(eq(pet_id))
            .times(2)
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        let mock_repo: ImplRecordRepo = Box::new(mock_repo);

        let mut screen = BodyConditionScreen::new(pet_id);
        screen.refresh(&mock_repo).await;
        screen.refresh(&mock_repo).await;

        assert_eq!(screen.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn missing_category_never_reaches_the_store() {
        let mut mock_repo = MockRecordRepo::new();
        mock_repo.expect_insert_body_condition_log().times(0);
        let mock_repo: ImplRecordRepo = Box::new(mock_repo);

        let mut screen = BodyConditionScreen::new(Uuid::new_v4());
        let result = screen
            .submit(
                &mock_repo,
                &forms::BodyConditionForm {
                    condition: String::new(),
                    date: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::Validation(ValidationError::MissingField(_)))
        ));
    }
}
