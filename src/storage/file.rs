use super::*;

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};

/// Keeps the serialized collection in one JSON file.
pub struct JsonFileSlot {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonFileSlot {
    /// Nothing touches the disk until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("contacts.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StorageSlot for JsonFileSlot {
    fn read(&self) -> Result<Option<Vec<u8>>, AppError> {
        match fs::read(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Write next to the target and rename over it, so a crash mid-write
        // never leaves a truncated collection in place.
        let staging = self.staging_path();
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&staging)?;

            file.write_all(bytes)?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
