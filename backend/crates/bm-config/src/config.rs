use crate::{
    AuthConfig, BookmarkConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub bookmarks: BookmarkConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BM_CONFIG_DIR env var, else use ./.bm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: BM_CONFIG_DIR env var > ./.bm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.bookmarks.validate()?;

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );

        if self.auth.enabled {
            info!("  auth: enabled (HS256)");
        } else {
            info!(
                "  auth: disabled (development user {} '{}')",
                self.auth.dev_user_id, self.auth.dev_username
            );
        }

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
        info!(
            "  bookmarks: max_name_length={}, untitled_name='{}'",
            self.bookmarks.max_name_length, self.bookmarks.untitled_name
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("BM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "BM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_bool("BM_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("BM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("BM_AUTH_DEV_USER_ID", &mut self.auth.dev_user_id);
        Self::apply_env_string("BM_AUTH_DEV_USERNAME", &mut self.auth.dev_username);

        // Logging
        Self::apply_env_parse("BM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BM_LOG_FILE", &mut self.logging.file);

        // Bookmarks
        Self::apply_env_string(
            "BM_BOOKMARKS_UNTITLED_NAME",
            &mut self.bookmarks.untitled_name,
        );
        Self::apply_env_parse(
            "BM_BOOKMARKS_MAX_NAME_LENGTH",
            &mut self.bookmarks.max_name_length,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
