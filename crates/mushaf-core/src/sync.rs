//! Best-effort persistence of the reading position.

use chrono::Utc;
use log::{debug, warn};

use crate::settings::ReadingPosition;
use crate::store::StateStore;

/// Quiet interval before a changed position is written out.
const POSITION_SAVE_DEBOUNCE_MS: u64 = 100;

/// Pending-write state machine for the last-read position.
///
/// Navigation produces bursts of closely-spaced position changes; tracking
/// them here and flushing after a short quiet window collapses each burst
/// into a single write. A pair equal to the last persisted one never writes,
/// and a failed write is logged and dropped.
#[derive(Clone, Debug)]
pub struct PositionSyncState {
    last_saved: Option<(usize, usize)>,
    pending: Option<((usize, usize), u64)>,
}

impl PositionSyncState {
    pub fn new(last_saved: Option<(usize, usize)>) -> Self {
        Self {
            last_saved,
            pending: None,
        }
    }

    /// Record the engine's current `(surah_index, page)` pair.
    pub fn track_current(&mut self, current: (usize, usize), now_ms: u64) {
        if Some(current) == self.last_saved {
            // Back where we started; whatever was pending is moot.
            self.pending = None;
            return;
        }

        match self.pending.as_mut() {
            Some((pending, changed_at_ms)) => {
                if *pending != current {
                    *pending = current;
                    *changed_at_ms = now_ms;
                }
            }
            None => self.pending = Some((current, now_ms)),
        }
    }

    /// Write the pending pair once it has been stable for the debounce window.
    ///
    /// Returns the persisted position on a successful write. Store failures
    /// are logged and the write is dropped; the reader keeps its in-memory
    /// state either way.
    pub fn flush_if_due<S: StateStore>(
        &mut self,
        store: &mut S,
        now_ms: u64,
    ) -> Option<ReadingPosition> {
        let (pair, changed_at_ms) = self.pending?;
        if now_ms.saturating_sub(changed_at_ms) < POSITION_SAVE_DEBOUNCE_MS {
            return None;
        }

        self.pending = None;
        let position = ReadingPosition {
            surah_index: pair.0,
            page: pair.1,
            saved_at: Utc::now(),
        };

        match store.save_position(&position) {
            Ok(()) => {
                debug!("position: saved surah={} page={}", pair.0, pair.1);
                self.last_saved = Some(pair);
                Some(position)
            }
            Err(err) => {
                warn!("position: save failed, dropping write: {err:?}");
                None
            }
        }
    }

    pub fn last_saved(&self) -> Option<(usize, usize)> {
        self.last_saved
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
