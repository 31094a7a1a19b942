//! File-backed state store for the reading core.
//!
//! One JSON document per key in a flat directory, mirroring the key-value
//! store the core owns the semantics of: `lastReadPosition`, `showTafseer`,
//! and `isUrduTranslation`. Writes go through a temp file and rename so a
//! crash mid-write never leaves a torn document behind.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use mushaf_core::settings::{AppSettings, ReadingPosition};
use mushaf_core::store::StateStore;

const POSITION_KEY: &str = "lastReadPosition";
const TAFSEER_KEY: &str = "showTafseer";
const URDU_KEY: &str = "isUrduTranslation";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state store io error: {0}")]
    Io(#[from] io::Error),
    #[error("state store holds malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no usable data directory on this platform")]
    NoDataDir,
}

/// Key-value store over a directory of JSON documents.
#[derive(Debug)]
pub struct FsStateStore {
    dir: PathBuf,
}

impl FsStateStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("state-store: opened {}", dir.display());
        Ok(Self { dir })
    }

    /// Open a store in the platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "mushaf").ok_or(StoreError::NoDataDir)?;
        Self::open(dirs.data_dir())
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, serde_json::to_string(value)?)?;
        fs::rename(&tmp, self.key_path(key))?;
        Ok(())
    }
}

impl StateStore for FsStateStore {
    type Error = StoreError;

    fn load_settings(&mut self) -> Result<Option<AppSettings>, Self::Error> {
        let show_tafseer: Option<bool> = self.read_key(TAFSEER_KEY)?;
        let urdu_translation: Option<bool> = self.read_key(URDU_KEY)?;

        if show_tafseer.is_none() && urdu_translation.is_none() {
            return Ok(None);
        }

        let defaults = AppSettings::default();
        Ok(Some(AppSettings {
            show_tafseer: show_tafseer.unwrap_or(defaults.show_tafseer),
            urdu_translation: urdu_translation.unwrap_or(defaults.urdu_translation),
        }))
    }

    fn save_settings(&mut self, settings: &AppSettings) -> Result<(), Self::Error> {
        self.write_key(TAFSEER_KEY, &settings.show_tafseer)?;
        self.write_key(URDU_KEY, &settings.urdu_translation)?;
        Ok(())
    }

    fn load_position(&mut self) -> Result<Option<ReadingPosition>, Self::Error> {
        self.read_key(POSITION_KEY)
    }

    fn save_position(&mut self, position: &ReadingPosition) -> Result<(), Self::Error> {
        self.write_key(POSITION_KEY, position)
    }
}
