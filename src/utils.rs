//! Helper functions used across repo/ and screen/.

use crate::{config, consts, repo};
use chrono::{DateTime, Utc};

/// Builds the PostgREST-backed repository from the environment
/// configuration.
pub fn setup_record_repo() -> repo::ImplRecordRepo {
    let app_config = &*config::APP_CONFIG;

    Box::new(repo::postgrest::PostgrestRepo::new(
        &app_config.store_url,
        &app_config.store_api_key,
    ))
}

/// Log dates the way the list screens print them.
pub fn fmt_display_date(date: DateTime<Utc>) -> String {
    date.format(consts::DATE_DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_is_day_first() {
        let date: DateTime<Utc> = "2024-02-20T12:00:00Z".parse().unwrap();

        assert_eq!(fmt_display_date(date), "20/02/2024");
    }
}
