use crate::stats::TourType;

#[derive(Debug, Clone)]
pub struct StatsSettings {
    pub default_tour: TourType,
    pub default_page_size: i64,
    pub default_year: i32,
    pub max_page_size: i64,
    pub ranking_bucket_width: i64,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            default_tour: TourType::Atp,
            default_page_size: 20,
            default_year: 2020,
            max_page_size: 500,
            ranking_bucket_width: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "pbp_stats.db".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub stats: StatsSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            stats: StatsSettings::default(),
            server: ServerSettings::default(),
        }
    }
}
