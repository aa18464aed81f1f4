use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::TasklyError;

/// The single persisted credential slot: one file holding the raw bearer
/// token. Absent file means no session. Last writer wins.
pub struct TokenSlot {
    path: PathBuf,
}

impl TokenSlot {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.token_path(),
        }
    }

    pub fn read(&self) -> Result<Option<String>, TasklyError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn write(&self, token: &str) -> Result<(), TasklyError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    /// Removing an already-absent slot is not an error.
    pub fn clear(&self) -> Result<(), TasklyError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn slot_in(dir: &TempDir) -> TokenSlot {
        let config = Config {
            api_url: "http://localhost:8000".into(),
            config_dir: dir.path().join("taskly"),
        };
        TokenSlot::new(&config)
    }

    #[test]
    fn read_absent_slot_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(slot_in(&dir).read().unwrap(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        slot.write("tok-123").unwrap();
        assert_eq!(slot.read().unwrap(), Some("tok-123".to_string()));
    }

    #[test]
    fn write_creates_missing_config_dir() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        slot.write("tok").unwrap();
        assert!(dir.path().join("taskly").is_dir());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        slot.clear().unwrap();
        slot.write("tok").unwrap();
        slot.clear().unwrap();
        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn whitespace_only_slot_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let slot = slot_in(&dir);
        slot.write("  \n").unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }
}
