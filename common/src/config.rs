use std::env;

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    #[arg(id = "db-user", long, env = "DB_USER", default_value = "licensedict")]
    pub username: String,
    #[arg(
        id = "db-password",
        long,
        env = "DB_PASSWORD",
        default_value = "licensedict"
    )]
    pub password: String,
    #[arg(id = "db-host", long, env = "DB_HOST", default_value = "localhost")]
    pub host: String,
    #[arg(id = "db-port", long, env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(id = "db-name", long, env = "DB_NAME", default_value = "licensedict")]
    pub name: String,
}

impl Database {
    /// Database configuration from the `DB_*` environment variables alone.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self {
            username: env::var("DB_USER").unwrap_or_else(|_| "licensedict".into()),
            password: env::var("DB_PASSWORD").unwrap_or_else(|_| "licensedict".into()),
            host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port: match env::var("DB_PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 5432,
            },
            name: env::var("DB_NAME").unwrap_or_else(|_| "licensedict".into()),
        })
    }
}
