use crate::{
    config, consts, models,
    repo::ImplRecordRepo,
    screen::{FetchTicket, Phase, resolve_active_pet},
};
use uuid::Uuid;

/// Everything the profile screen renders, fetched in one pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfileData {
    pub pet: Option<models::pet::Pet>,
    pub latest_weight: Option<models::health::LatestWeight>,
    pub latest_vet_visit: Option<models::health::LatestVetVisit>,
    pub latest_body_condition: Option<models::health::LatestBodyCondition>,
}

/// View logic for the single pet profile: the pet's details plus its most
/// recent record of each log kind.
pub struct ProfileScreen {
    pet_id: Option<Uuid>,
    phase: Phase,
    data: ProfileData,
    ticket: FetchTicket,
}

impl ProfileScreen {
    /// Screen opened with a pet supplied by navigation.
    pub fn new(pet_id: Uuid) -> Self {
        Self {
            pet_id: Some(pet_id),
            phase: Phase::default(),
            data: ProfileData::default(),
            ticket: FetchTicket::default(),
        }
    }

    /// Screen opened without a navigation parameter; the active pet is
    /// resolved on the first refresh.
    pub fn detached() -> Self {
        Self {
            pet_id: None,
            phase: Phase::default(),
            data: ProfileData::default(),
            ticket: FetchTicket::default(),
        }
    }

    /// Entry-point constructor: uses the fixed profile pet configured in the
    /// environment, falling back to active-pet resolution when unset.
    pub fn from_app_config() -> Self {
        match config::APP_CONFIG.profile_pet_id {
            Some(pet_id) => Self::new(pet_id),
            None => Self::detached(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pet_id(&self) -> Option<Uuid> {
        self.pet_id
    }

    pub fn data(&self) -> &ProfileData {
        &self.data
    }

    /// Picture to render, substituting the placeholder when the pet has
    /// none.
    pub fn image_url(&self) -> &str {
        self.data
            .pet
            .as_ref()
            .and_then(|pet| pet.image_url.as_deref())
            .unwrap_or(consts::FALLBACK_PET_IMAGE_URL)
    }

    /// Latest weight the way the screen prints it, `None` when no record
    /// exists.
    pub fn latest_weight_display(&self) -> Option<String> {
        self.data
            .latest_weight
            .as_ref()
            .map(|latest| format!("{} kg", latest.weight))
    }

    pub fn begin_refresh(&mut self) -> u64 {
        self.phase = Phase::Loading;
        self.ticket.issue()
    }

    /// Applies a finished fetch pass unless its tag went stale meanwhile.
    pub fn apply_data(&mut self, tag: u64, data: ProfileData) {
        if !self.ticket.is_current(tag) {
            log::debug!("discarding stale profile response (tag {tag})");
            return;
        }

        self.data = data;
        self.phase = Phase::Ready;
    }

    /// One query at a time, the way the screen awaits them; each read
    /// degrades independently so a single failure only blanks its section.
    pub async fn fetch_data(repo: &ImplRecordRepo, pet_id: Uuid) -> ProfileData {
        let pet = match repo.get_pet_by_id(pet_id).await {
            Ok(pet) => pet,
            Err(err) => {
                log::error!("error fetching pet: {err}");
                None
            }
        };

        let latest_weight = repo.latest_weight(pet_id).await.unwrap_or_else(|err| {
            log::error!("error fetching latest weight log: {err}");
            None
        });

        let latest_vet_visit = repo.latest_vet_visit(pet_id).await.unwrap_or_else(|err| {
            log::error!("error fetching latest vet visit log: {err}");
            None
        });

        let latest_body_condition = repo
            .latest_body_condition(pet_id)
            .await
            .unwrap_or_else(|err| {
                log::error!("error fetching latest body condition log: {err}");
                None
            });

        ProfileData {
            pet,
            latest_weight,
            latest_vet_visit,
            latest_body_condition,
        }
    }

    /// Entered on mount/focus. With no resolvable pet the dependent queries
    /// are not issued and the screen renders its no-pets state.
    pub async fn refresh(&mut self, repo: &ImplRecordRepo) {
        let tag = self.begin_refresh();

        let pet_id = match self.pet_id {
            Some(pet_id) => Some(pet_id),
            None => {
                self.pet_id = resolve_active_pet(repo).await;
                self.pet_id
            }
        };

        let Some(pet_id) = pet_id else {
            self.apply_data(tag, ProfileData::default());
            return;
        };

        let data = Self::fetch_data(repo, pet_id).await;
        self.apply_data(tag, data);
    }
}
