use crate::error::PetError;
use crate::models::Credentials;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Build-time default injected via build.rs
const DEFAULT_BASE_URL: &str = env!("PETFRIENDS_URL");
const DEFAULT_IMAGES_DIR: &str = "tests/fixtures/images";

pub const ENV_BASE_URL: &str = "PETFRIENDS_URL";
pub const ENV_EMAIL: &str = "PETFRIENDS_EMAIL";
pub const ENV_PASSWORD: &str = "PETFRIENDS_PASSWORD";
pub const ENV_IMAGES: &str = "PETFRIENDS_IMAGES";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    pub email: Option<String>,
    pub password: Option<String>,

    /// Directory holding the fixture images used as pet photos.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_images_dir() -> PathBuf {
    PathBuf::from(DEFAULT_IMAGES_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            email: None,
            password: None,
            images_dir: default_images_dir(),
        }
    }
}

impl Config {
    /// Load from the default path, then apply environment overrides.
    pub fn load() -> Result<Self, PetError> {
        let mut config = Self::load_from_path(&Self::path()?)?;
        config.apply_env();
        Ok(config)
    }

    /// Load config from a specific path. A missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, PetError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(PetError::ConfigRead)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), PetError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PetError::ConfigWrite)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(PetError::ConfigWrite)?;
        Ok(())
    }

    pub fn path() -> Result<PathBuf, PetError> {
        let dirs = ProjectDirs::from("ru", "skillfactory", "petfriends")
            .ok_or_else(|| PetError::Other("Could not determine config directory".to_string()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Environment variables win over the file.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Ok(email) = std::env::var(ENV_EMAIL) {
            self.email = Some(email);
        }
        if let Ok(password) = std::env::var(ENV_PASSWORD) {
            self.password = Some(password);
        }
        if let Ok(dir) = std::env::var(ENV_IMAGES) {
            self.images_dir = PathBuf::from(dir);
        }
    }

    pub fn credentials(&self) -> Result<Credentials, PetError> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Ok(Credentials::new(email.clone(), password.clone())),
            _ => Err(PetError::MissingCredentials),
        }
    }

    pub fn fixture(&self, name: &str) -> PathBuf {
        self.images_dir.join(name)
    }
}
