use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::ConfigError;

/// Raw storage behind a [`super::ConfigManager`].
///
/// `Ok(None)` means nothing has been stored yet, which callers treat as "use defaults".
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                location: self.file_path.display().to_string(),
                source,
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                location: parent.display().to_string(),
                source,
            })?;
        }
        std::fs::write(&self.file_path, content).map_err(|source| ConfigError::Write {
            location: self.file_path.display().to_string(),
            source,
        })
    }
}

/// Keeps content in memory. Clones share the same storage.
#[derive(Clone, Default)]
pub struct MemoryContentProvider {
    content: Arc<Mutex<Option<String>>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Arc::new(Mutex::new(Some(content.to_string()))),
        }
    }
}

impl ConfigContentProvider for MemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        let content = self.content.lock().map_err(|_| ConfigError::Poisoned)?;
        Ok(content.clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        let mut current = self.content.lock().map_err(|_| ConfigError::Poisoned)?;
        *current = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("tictactoe_provider_test_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_returns_none() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        assert!(provider.get_config_content().unwrap().is_none());
    }

    #[test]
    fn test_file_content_round_trip() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("draws: 3\n").unwrap();
        assert_eq!(
            provider.get_config_content().unwrap().as_deref(),
            Some("draws: 3\n")
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_memory_provider_clones_share_content() {
        let provider = MemoryContentProvider::new();
        let other = provider.clone();
        assert!(provider.get_config_content().unwrap().is_none());

        other.set_config_content("x_wins: 1").unwrap();
        assert_eq!(
            provider.get_config_content().unwrap().as_deref(),
            Some("x_wins: 1")
        );
    }
}
