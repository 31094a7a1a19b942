//! Abstract persistence backend for settings and reading position.

use std::convert::Infallible;
use std::fmt::Debug;

use crate::settings::{AppSettings, ReadingPosition};

/// Key-value persistence for the two pieces of durable state.
///
/// Backends are best-effort collaborators: callers log failures and carry on
/// with in-memory state, so an error here never propagates past the reader.
pub trait StateStore {
    type Error: Debug;

    fn load_settings(&mut self) -> Result<Option<AppSettings>, Self::Error>;
    fn save_settings(&mut self, settings: &AppSettings) -> Result<(), Self::Error>;

    fn load_position(&mut self) -> Result<Option<ReadingPosition>, Self::Error>;
    fn save_position(&mut self, position: &ReadingPosition) -> Result<(), Self::Error>;
}

/// In-memory store for tests and embedders without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    settings: Option<AppSettings>,
    position: Option<ReadingPosition>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(position: ReadingPosition) -> Self {
        Self {
            settings: None,
            position: Some(position),
        }
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            settings: Some(settings),
            position: None,
        }
    }

    pub fn position(&self) -> Option<&ReadingPosition> {
        self.position.as_ref()
    }

    pub fn settings(&self) -> Option<&AppSettings> {
        self.settings.as_ref()
    }
}

impl StateStore for MemoryStateStore {
    type Error = Infallible;

    fn load_settings(&mut self) -> Result<Option<AppSettings>, Self::Error> {
        Ok(self.settings)
    }

    fn save_settings(&mut self, settings: &AppSettings) -> Result<(), Self::Error> {
        self.settings = Some(*settings);
        Ok(())
    }

    fn load_position(&mut self) -> Result<Option<ReadingPosition>, Self::Error> {
        Ok(self.position.clone())
    }

    fn save_position(&mut self, position: &ReadingPosition) -> Result<(), Self::Error> {
        self.position = Some(position.clone());
        Ok(())
    }
}
