use serde::{Deserialize, Serialize};

/// SQLite storage for sites, rules, records and request analytics
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file (default: "./sitegate.db")
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_db_path() -> String {
    "./sitegate.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}
