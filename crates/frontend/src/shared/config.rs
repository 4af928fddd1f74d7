use contracts::shared::config::AppConfig;
use once_cell::sync::Lazy;

/// Backend base URL baked in at build time, e.g.
/// `CONTABLE_API_BASE_URL=https://api.example.com trunk build --release`.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("CONTABLE_API_BASE_URL");

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::load(BASE_URL_OVERRIDE).unwrap_or_else(|e| {
        log::error!("falling back to built-in defaults: {e}");
        AppConfig::default()
    })
});

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}
