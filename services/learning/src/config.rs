/// Learning service configuration loaded from environment variables.
#[derive(Debug)]
pub struct LearningConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3210). Env var: `LEARNING_PORT`.
    pub learning_port: u16,
    /// Base URL of the external auth provider (e.g. "http://auth:3100").
    pub auth_base_url: String,
}

impl LearningConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            learning_port: std::env::var("LEARNING_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3210),
            auth_base_url: std::env::var("AUTH_BASE_URL").expect("AUTH_BASE_URL"),
        }
    }
}
