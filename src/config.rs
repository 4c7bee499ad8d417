use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Seed the in-memory store and partner directory with demo data on
    /// startup. Defaults to true so a fresh instance is immediately usable.
    pub seed_demo_data: bool,
    pub admin_username: String,
    pub admin_password: String,
    pub admin_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SEED_DEMO_DATA must be true or false"))?,
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".to_string())
                .trim()
                .to_string(),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "adminpass".to_string()),
            admin_name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin User".to_string()),
        };

        if config.admin_username.is_empty() {
            anyhow::bail!("ADMIN_USERNAME cannot be empty");
        }
        if config.admin_password.trim().is_empty() {
            anyhow::bail!("ADMIN_PASSWORD cannot be empty");
        }

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Admin username: {}", config.admin_username);
        if config.seed_demo_data {
            tracing::info!("Demo data seeding enabled");
        }

        Ok(config)
    }
}
