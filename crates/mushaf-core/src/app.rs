//! Reader facade tying content, session, settings, and persistence together.

use log::{debug, warn};

use crate::content::{Ayah, CatalogCache, ContentStore, Surah};
use crate::session::ReadingSession;
use crate::settings::{AppSettings, ReadingPosition};
use crate::store::StateStore;
use crate::sync::PositionSyncState;

/// The owned session object a presentation layer drives.
///
/// Construction loads settings and the stored position, builds the catalog
/// for the selected language, and resumes reading where the user left off.
/// All state changes are applied locally first; persistence is best-effort
/// and never blocks or fails a navigation call. Time-sensitive operations
/// take a caller-supplied `now_ms` timestamp.
pub struct Reader<C: ContentStore, S: StateStore> {
    catalogs: CatalogCache<C>,
    session: ReadingSession,
    settings: AppSettings,
    sync: PositionSyncState,
    last_position: Option<ReadingPosition>,
    store: S,
}

impl<C: ContentStore, S: StateStore> Reader<C, S> {
    pub fn new(content: C, mut store: S, now_ms: u64) -> Self {
        let settings = match store.load_settings() {
            Ok(Some(settings)) => settings,
            Ok(None) => AppSettings::default(),
            Err(err) => {
                warn!("settings: load failed, using defaults: {err:?}");
                AppSettings::default()
            }
        };

        let stored = match store.load_position() {
            Ok(stored) => stored,
            Err(err) => {
                warn!("position: load failed, starting from the beginning: {err:?}");
                None
            }
        };
        debug!("reader: starting with stored position {stored:?}");

        let catalogs = CatalogCache::new(content);
        let session = ReadingSession::new(catalogs.catalog(settings.language()), stored.as_ref());
        let mut sync = PositionSyncState::new(stored.as_ref().map(ReadingPosition::pair));
        sync.track_current(session.position(), now_ms);

        Self {
            catalogs,
            session,
            settings,
            sync,
            last_position: stored,
            store,
        }
    }

    pub fn next_page(&mut self, now_ms: u64) {
        self.session.next_page();
        self.after_navigation(now_ms);
    }

    pub fn previous_page(&mut self, now_ms: u64) {
        self.session.previous_page();
        self.after_navigation(now_ms);
    }

    pub fn next_surah(&mut self, now_ms: u64) {
        self.session.next_surah();
        self.after_navigation(now_ms);
    }

    pub fn previous_surah(&mut self, now_ms: u64) {
        self.session.previous_surah();
        self.after_navigation(now_ms);
    }

    pub fn refresh(&mut self, now_ms: u64) {
        self.session.refresh(now_ms);
        self.after_navigation(now_ms);
    }

    /// Flush any due position write. Call periodically from the host loop.
    pub fn tick(&mut self, now_ms: u64) {
        self.flush(now_ms);
    }

    pub fn toggle_tafseer(&mut self) {
        self.settings.show_tafseer = !self.settings.show_tafseer;
        self.persist_settings();
    }

    /// Switch translation language, keeping the reading position.
    pub fn toggle_language(&mut self, now_ms: u64) {
        self.settings.urdu_translation = !self.settings.urdu_translation;
        self.persist_settings();

        self.session
            .set_catalog(self.catalogs.catalog(self.settings.language()));
        self.after_navigation(now_ms);
    }

    pub fn settings(&self) -> AppSettings {
        self.settings
    }

    /// Last position known to be persisted, as other consumers see it.
    pub fn last_position(&self) -> Option<&ReadingPosition> {
        self.last_position.as_ref()
    }

    pub fn visible_ayahs(&self) -> &[Ayah] {
        self.session.visible_ayahs()
    }

    pub fn current_surah(&self) -> Option<&Surah> {
        self.session.current_surah()
    }

    pub fn current_page(&self) -> usize {
        self.session.page()
    }

    pub fn total_pages(&self) -> usize {
        self.session.total_pages()
    }

    pub fn pagination_label(&self) -> String {
        self.session.pagination_label()
    }

    pub fn is_refreshing(&self, now_ms: u64) -> bool {
        self.session.is_refreshing(now_ms)
    }

    pub fn session(&self) -> &ReadingSession {
        &self.session
    }

    fn after_navigation(&mut self, now_ms: u64) {
        self.sync.track_current(self.session.position(), now_ms);
        self.flush(now_ms);
    }

    fn flush(&mut self, now_ms: u64) {
        if let Some(saved) = self.sync.flush_if_due(&mut self.store, now_ms) {
            self.last_position = Some(saved);
        }
    }

    fn persist_settings(&mut self) {
        if let Err(err) = self.store.save_settings(&self.settings) {
            warn!("settings: save failed: {err:?}");
        }
    }
}
