/// Shown when a pet has no picture of its own.
pub const FALLBACK_PET_IMAGE_URL: &str = "https://placedog.net/800/300";

/// How the list screens print log dates.
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";
