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

/// View logic for the weight history list and its add-entry modal.
pub struct WeightLogScreen {
    pet_id: Option<Uuid>,
    phase: Phase,
    entries: Vec<models::health::WeightLog>,
    ticket: FetchTicket,
}

impl WeightLogScreen {
    /// Screen opened with a pet supplied by navigation.
    pub fn new(pet_id: Uuid) -> Self {
        Self {
            pet_id: Some(pet_id),
            phase: Phase::default(),
            entries: Vec::new(),
            ticket: FetchTicket::default(),
        }
    }

    /// Screen opened without a navigation parameter; the active pet is
    /// resolved on the first refresh.
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

    /// Rows as fetched, newest first.
    pub fn entries(&self) -> &[models::health::WeightLog] {
        &self.entries
    }

    /// Rows in display shape.
    pub fn rows(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().map(Into::into).collect()
    }

    /// Marks the screen loading and returns the tag the matching
    /// [`apply_rows`](Self::apply_rows) call must present.
    pub fn begin_refresh(&mut self) -> u64 {
        self.phase = Phase::Loading;
        self.ticket.issue()
    }

    /// Applies a finished read. An outcome carrying a stale tag is dropped
    /// so an overlapping fetch cannot overwrite fresher rows; a failed read
    /// keeps whatever is on screen and only logs the reason.
    pub fn apply_rows(
        &mut self,
        tag: u64,
        outcome: Result<Vec<models::health::WeightLog>, StoreError>,
    ) {
        if !self.ticket.is_current(tag) {
            log::debug!("discarding stale weight log response (tag {tag})");
            return;
        }

        match outcome {
            Ok(rows) => self.entries = rows,
            Err(err) => log::error!("error fetching weight logs: {err}"),
        }
        self.phase = Phase::Ready;
    }

    async fn pet_for_queries(&mut self, repo: &ImplRecordRepo) -> Option<Uuid> {
        if self.pet_id.is_none() {
            self.pet_id = resolve_active_pet(repo).await;
        }
        self.pet_id
    }

    /// Entered on mount/focus and again after every successful insert.
    pub async fn refresh(&mut self, repo: &ImplRecordRepo) {
        let tag = self.begin_refresh();

        let Some(pet_id) = self.pet_for_queries(repo).await else {
            // no pet to scope by: render empty without touching the store
            self.apply_rows(tag, Ok(Vec::new()));
            return;
        };

        let outcome = repo.list_weight_logs(pet_id).await;
        self.apply_rows(tag, outcome);
    }

    /// Validates the modal form, inserts one row and re-runs the read.
    /// Validation failures never reach the store; a store failure is logged
    /// and handed back so the caller keeps the modal and its state open.
    pub async fn submit(
        &mut self,
        repo: &ImplRecordRepo,
        form: &forms::WeightForm,
    ) -> Result<(), SubmitError> {
        let Some(pet_id) = self.pet_id else {
            return Err(ValidationError::MissingField("pet").into());
        };
        let entry = form.validated(pet_id)?;

        if let Err(err) = repo.insert_weight_log(&entry).await {
            log::error!("error inserting weight log: {err}");
            return Err(SubmitError::Store(err));
        }

        self.refresh(repo).await;
        Ok(())
    }
}
