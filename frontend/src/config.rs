use shared::DashboardConfig;

pub struct Config;

impl Config {
    /// Configuration baked in at build time.
    ///
    /// `ADMIN_API_BASE_URL`, `ADMIN_PAGE_SIZE` and `ADMIN_THEME` may be set
    /// in the environment of `trunk build`; anything unset keeps its default.
    pub fn load() -> DashboardConfig {
        DashboardConfig::from_values(
            option_env!("ADMIN_API_BASE_URL"),
            option_env!("ADMIN_PAGE_SIZE"),
            option_env!("ADMIN_THEME"),
        )
    }
}
