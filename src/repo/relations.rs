//! Names and query fragments for the remote relations, kept in one place so
//! the PostgREST implementation stays free of string literals.

pub const PETS: &str = "pets";
pub const WEIGHT_LOGS: &str = "weight_logs";
pub const VET_VISIT_LOGS: &str = "vet_visit_logs";
pub const BODY_CONDITION_LOGS: &str = "body_condition_logs";

pub const COL_ID: &str = "id";
pub const COL_PET_ID: &str = "pet_id";

pub const ALL_COLUMNS: &str = "*";

// Latest-row reads project exactly the columns the profile screen displays.
pub const LATEST_WEIGHT_COLUMNS: &str = "weight,date";
pub const LATEST_VET_VISIT_COLUMNS: &str = "notes,date";
pub const LATEST_BODY_CONDITION_COLUMNS: &str = "body_condition,date";

/// Newest log first. Ties on `date` fall back to `id` so "latest" is
/// deterministic rather than store-dependent.
pub const ORDER_NEWEST_LOG_FIRST: &str = "date.desc,id.desc";

/// Most recently created pet first, same tie-break rule.
pub const ORDER_NEWEST_PET_FIRST: &str = "created_at.desc,id.desc";
