use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    #[serde(default = "default_token_lifetime_hours")]
    pub token_lifetime_hours: i64,
}

fn default_token_lifetime_hours() -> i64 {
    24
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:3000"

[database]
path = "db/app.db"

[auth]
jwt_secret = "change-me"
token_lifetime_hours = 24
"#;

const DEFAULT_JWT_SECRET: &str = "change-me";

/// Load configuration
///
/// Search order:
/// 1. `$BACKEND_CONFIG`
/// 2. `config.toml` next to the executable
/// 3. `config.toml` in the working directory
/// 4. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(path) = std::env::var("BACKEND_CONFIG") {
        candidates.push(PathBuf::from(path));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(PathBuf::from("config.toml"));

    let config = match candidates.iter().find(|p| p.exists()) {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(config_path)?;
            toml::from_str::<Config>(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str::<Config>(DEFAULT_CONFIG)?
        }
    };

    if config.auth.jwt_secret == DEFAULT_JWT_SECRET {
        tracing::warn!("auth.jwt_secret is the built-in default; set it in config.toml");
    }

    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(db_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.database.path, "db/app.db");
        assert_eq!(config.auth.token_lifetime_hours, 24);
    }

    #[test]
    fn test_token_lifetime_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            bind = "0.0.0.0:8080"
            [database]
            path = "/var/lib/records/app.db"
            [auth]
            jwt_secret = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.token_lifetime_hours, 24);
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/var/lib/records/app.db")
        );
    }
}
