#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub version: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            version: std::env::var("APP_VERSION").unwrap_or_else(|_| "v1".to_string()),
        }
    }
}
