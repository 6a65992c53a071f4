pub struct DatabaseSettings {
    pub path: String,
    pub max_pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "flanders_tennis_ranking.db".to_string()),
            max_pool_size: 8,
        }
    }
}

pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
        }
    }
}

// Passed explicitly (dependency injection) rather than held in a global.
