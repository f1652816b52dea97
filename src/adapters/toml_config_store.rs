//! Profile store persisted as TOML under the user's config directory.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Profile};
use crate::ports::ConfigStore;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "HUC_CONFIG";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_domain: Option<String>,
    profiles: BTreeMap<String, Profile>,
}

#[derive(Debug)]
pub struct TomlConfigStore {
    path: PathBuf,
    file: ConfigFile,
}

impl TomlConfigStore {
    /// `$HUC_CONFIG`, or `$HOME/.config/huc/config.toml`.
    pub fn default_path() -> Result<PathBuf, AppError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let home = std::env::var("HOME")
            .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
        Ok(PathBuf::from(home).join(".config").join("huc").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load_default() -> Result<Self, AppError> {
        Self::load(Self::default_path()?)
    }

    /// Load the store at `path`. A missing file is an empty store.
    pub fn load(path: PathBuf) -> Result<Self, AppError> {
        let file = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| AppError::ConfigParse {
                path: path.display().to_string(),
                details: e.to_string(),
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, starting empty", path.display());
                ConfigFile::default()
            }
            Err(err) => return Err(err.into()),
        };
        debug!("loaded config from {}", path.display());
        Ok(Self { path, file })
    }

    #[cfg(test)]
    fn set_default_domain(&mut self, domain: Option<&str>) {
        self.file.default_domain = domain.map(str::to_string);
    }

    fn write_atomically(&self, content: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut tmp = options.open(&tmp_path)?;
        tmp.write_all(content.as_bytes())?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl ConfigStore for TomlConfigStore {
    fn default_domain(&self) -> Option<&str> {
        self.file.default_domain.as_deref()
    }

    fn has_domain(&self, domain: &str) -> bool {
        self.file.profiles.contains_key(domain)
    }

    fn profile(&self, domain: &str) -> Result<Profile, AppError> {
        self.file
            .profiles
            .get(domain)
            .cloned()
            .ok_or_else(|| AppError::ProfileNotFound(domain.to_string()))
    }

    fn set_profile(&mut self, domain: &str, profile: Profile) {
        self.file.profiles.insert(domain.to_string(), profile);
    }

    fn set_token(&mut self, domain: &str, token: &str) {
        self.file.profiles.entry(domain.to_string()).or_default().token = token.to_string();
    }

    fn save(&self) -> Result<(), AppError> {
        let content = toml::to_string(&self.file)?;
        self.write_atomically(&content)?;
        debug!("saved config to {}", self.path.display());
        Ok(())
    }
}
