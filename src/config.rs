//! Application configuration management.
//!
//! All values come from environment variables. Sensitive fields are clearly
//! marked and must never be logged; production deployments should provide
//! them through a secret management system.

use envconfig::Envconfig;
use std::sync::LazyLock;
use uuid::Uuid;

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// REST root of the hosted store (NON-SENSITIVE)
    /// Example: "https://abcdefgh.supabase.co/rest/v1"
    pub store_url: String,

    /// 🔒 SENSITIVE: store service key, sent as the `apikey` and bearer
    /// authorization headers on every request
    pub store_api_key: String,

    /// Pet the profile entry point shows when navigation supplies none
    /// (NON-SENSITIVE). Left unset, the most recently created pet acts as
    /// the active profile.
    pub profile_pet_id: Option<Uuid>,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }
}

/// Global application configuration instance.
///
/// Read on first access; a missing or malformed variable aborts with a
/// descriptive message.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
