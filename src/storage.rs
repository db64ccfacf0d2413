use crate::models::Endpoints;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

const ENDPOINTS_FILE: &str = "endpoints.yaml";

/// Manages the persisted endpoint configuration
pub struct Storage {
    config_dir: PathBuf,
}

impl Storage {
    pub fn new() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sesam");

        Storage { config_dir }
    }

    /// Storage rooted at an explicit directory (used by tests)
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Storage { config_dir }
    }

    /// Ensure config directory exists
    fn ensure_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Load the saved endpoints, falling back to the echo server defaults
    /// when nothing has been saved yet or the file is unreadable
    pub fn load_endpoints(&self) -> Endpoints {
        let path = self.config_dir.join(ENDPOINTS_FILE);
        fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_yaml::from_str::<Endpoints>(&content).ok())
            .unwrap_or_default()
    }

    /// Save the endpoints to file
    pub fn save_endpoints(&self, endpoints: &Endpoints) -> Result<()> {
        self.ensure_dir()?;
        let path = self.config_dir.join(ENDPOINTS_FILE);
        let content = serde_yaml::to_string(endpoints)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_when_nothing_saved() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_dir(dir.path().join("config"));
        assert_eq!(storage.load_endpoints(), Endpoints::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_dir(dir.path().join("config"));

        let endpoints = Endpoints {
            open_url: String::from("http://192.168.1.20/open"),
            close_url: String::from("http://192.168.1.20/close"),
        };
        storage.save_endpoints(&endpoints).unwrap();
        assert_eq!(storage.load_endpoints(), endpoints);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config");
        fs::create_dir_all(&config).unwrap();
        fs::write(config.join(ENDPOINTS_FILE), "{not yaml!: [").unwrap();

        let storage = Storage::with_dir(config);
        assert_eq!(storage.load_endpoints(), Endpoints::default());
    }
}
