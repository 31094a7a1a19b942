//! Paginated reading session over a surah catalog.

use std::sync::Arc;

use log::debug;

use crate::content::{Ayah, Surah, SurahCatalog};
use crate::settings::ReadingPosition;

/// Number of ayahs shown per page.
pub const AYAHS_PER_PAGE: usize = 10;

/// How long the pull-to-refresh affordance stays visible.
const REFRESH_HOLD_MS: u64 = 1_000;

/// Tracks the surah and page being read and computes the visible slice.
///
/// Every navigation call is total: out-of-range surah indices wrap modulo the
/// surah count, paging past a surah's end rolls over to the next surah's
/// first page, and paging back from page zero lands on the previous surah's
/// last page. On an empty catalog all navigation is a no-op.
#[derive(Clone, Debug)]
pub struct ReadingSession {
    catalog: Arc<SurahCatalog>,
    surah_index: usize,
    page: usize,
    refresh_until_ms: Option<u64>,
}

impl ReadingSession {
    /// Start a session, resuming from `restored` when given.
    ///
    /// Restored indices are clamped against the catalog: the stored surah may
    /// no longer exist and the stored page may point past the surah's current
    /// ayah count.
    pub fn new(catalog: Arc<SurahCatalog>, restored: Option<&ReadingPosition>) -> Self {
        let mut session = Self {
            catalog,
            surah_index: 0,
            page: 0,
            refresh_until_ms: None,
        };

        if let Some(position) = restored {
            session.restore(position);
        }
        session
    }

    fn restore(&mut self, position: &ReadingPosition) {
        if self.catalog.is_empty() {
            return;
        }

        let surah_index = position.surah_index.min(self.catalog.len() - 1);
        self.surah_index = surah_index;
        self.page = position.page.min(self.last_page(surah_index));
        debug!(
            "session: restored surah={} page={} (requested {}/{})",
            self.surah_index, self.page, position.surah_index, position.page
        );
    }

    /// Swap content while keeping the reading position.
    ///
    /// Used when the translation language changes: the indices carry over and
    /// are re-clamped against the new catalog.
    pub fn set_catalog(&mut self, catalog: Arc<SurahCatalog>) {
        self.catalog = catalog;

        if self.catalog.is_empty() {
            self.surah_index = 0;
            self.page = 0;
            return;
        }

        self.surah_index = self.surah_index.min(self.catalog.len() - 1);
        self.page = self.page.min(self.last_page(self.surah_index));
    }

    /// Jump to `page` of the surah at `surah_index`.
    ///
    /// The surah index is taken modulo the surah count. A page past the
    /// surah's end rolls over to the first page of the following surah.
    pub fn load_page(&mut self, surah_index: usize, page: usize) {
        if self.catalog.is_empty() {
            return;
        }

        let surah_index = surah_index % self.catalog.len();
        if page * AYAHS_PER_PAGE >= self.ayah_count(surah_index) {
            self.surah_index = (surah_index + 1) % self.catalog.len();
            self.page = 0;
            return;
        }

        self.surah_index = surah_index;
        self.page = page;
    }

    /// Advance one page, rolling over at the surah boundary.
    pub fn next_page(&mut self) {
        self.load_page(self.surah_index, self.page + 1);
    }

    /// Go back one page; page zero wraps to the previous surah's last page.
    pub fn previous_page(&mut self) {
        if self.catalog.is_empty() {
            return;
        }

        if self.page > 0 {
            self.load_page(self.surah_index, self.page - 1);
            return;
        }

        let previous = (self.surah_index + self.catalog.len() - 1) % self.catalog.len();
        self.surah_index = previous;
        self.page = self.last_page(previous);
    }

    /// Jump to the first page of the next surah.
    pub fn next_surah(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.load_page(self.surah_index + 1, 0);
    }

    /// Jump to the first page of the previous surah.
    pub fn previous_surah(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.load_page(self.surah_index + self.catalog.len() - 1, 0);
    }

    /// Pull-to-refresh gesture: reveal the previous surah.
    ///
    /// The refreshing flag is purely a presentation affordance; content is
    /// local, so it simply holds for a fixed interval.
    pub fn refresh(&mut self, now_ms: u64) {
        self.refresh_until_ms = Some(now_ms + REFRESH_HOLD_MS);
        self.previous_surah();
    }

    pub fn is_refreshing(&self, now_ms: u64) -> bool {
        self.refresh_until_ms.is_some_and(|until| now_ms < until)
    }

    pub fn surah_index(&self) -> usize {
        self.surah_index
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Current `(surah_index, page)` pair.
    pub fn position(&self) -> (usize, usize) {
        (self.surah_index, self.page)
    }

    pub fn current_surah(&self) -> Option<&Surah> {
        self.catalog.surah_at(self.surah_index)
    }

    /// Page count of the current surah, zero when no surah is selected.
    pub fn total_pages(&self) -> usize {
        self.current_surah()
            .map(|surah| surah.ayahs.len().div_ceil(AYAHS_PER_PAGE))
            .unwrap_or(0)
    }

    /// "Page N of M" label, empty when there are no pages.
    pub fn pagination_label(&self) -> String {
        let total = self.total_pages();
        if total == 0 {
            String::new()
        } else {
            format!("Page {} of {}", self.page + 1, total)
        }
    }

    /// The ayah slice for the current page.
    pub fn visible_ayahs(&self) -> &[Ayah] {
        let Some(surah) = self.current_surah() else {
            return &[];
        };

        let start = self.page * AYAHS_PER_PAGE;
        if start >= surah.ayahs.len() {
            return &[];
        }
        let end = (start + AYAHS_PER_PAGE).min(surah.ayahs.len());
        &surah.ayahs[start..end]
    }

    fn ayah_count(&self, surah_index: usize) -> usize {
        self.catalog
            .surah_at(surah_index)
            .map(|surah| surah.ayahs.len())
            .unwrap_or(0)
    }

    fn last_page(&self, surah_index: usize) -> usize {
        self.ayah_count(surah_index)
            .div_ceil(AYAHS_PER_PAGE)
            .saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RawAyah;
    use chrono::Utc;

    /// Catalog where surah 105 + i has `counts[i]` ayahs.
    fn catalog_with_counts(counts: &[usize]) -> Arc<SurahCatalog> {
        let mut raw = Vec::new();
        for (offset, &count) in counts.iter().enumerate() {
            let number = 105 + offset as u32;
            for ayah_number in 1..=count as u32 {
                raw.push(RawAyah {
                    surah_number: number,
                    surah_name: String::new(),
                    surah_name_english: String::new(),
                    ayah_number,
                    text: format!("{number}:{ayah_number}"),
                    translation: String::new(),
                    tafseer: None,
                });
            }
        }
        Arc::new(SurahCatalog::build(&raw))
    }

    fn position(surah_index: usize, page: usize) -> ReadingPosition {
        ReadingPosition {
            surah_index,
            page,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn starts_at_first_surah_first_page_by_default() {
        let session = ReadingSession::new(catalog_with_counts(&[5, 4, 3]), None);

        assert_eq!(session.position(), (0, 0));
        assert_eq!(session.visible_ayahs().len(), 5);
        assert_eq!(session.visible_ayahs()[0].text, "105:1");
    }

    #[test]
    fn first_page_is_capped_at_page_size() {
        let session = ReadingSession::new(catalog_with_counts(&[23]), None);
        assert_eq!(session.visible_ayahs().len(), AYAHS_PER_PAGE);
    }

    #[test]
    fn restore_clamps_stale_page() {
        // 15 ayahs means 2 pages; a stored page 2 must clamp to page 1.
        let catalog = catalog_with_counts(&[4, 4, 4, 15]);
        let session = ReadingSession::new(catalog, Some(&position(3, 2)));

        assert_eq!(session.position(), (3, 1));
    }

    #[test]
    fn restore_keeps_valid_position() {
        let catalog = catalog_with_counts(&[4, 4, 4, 25]);
        let session = ReadingSession::new(catalog, Some(&position(3, 2)));

        assert_eq!(session.position(), (3, 2));
        assert_eq!(session.visible_ayahs().len(), 5);
    }

    #[test]
    fn restore_clamps_stale_surah_index() {
        let session = ReadingSession::new(catalog_with_counts(&[4, 4]), Some(&position(9, 0)));
        assert_eq!(session.position(), (1, 0));
    }

    #[test]
    fn paging_past_the_end_rolls_over_to_next_surah() {
        let mut session = ReadingSession::new(catalog_with_counts(&[12, 4]), None);

        session.next_page();
        assert_eq!(session.position(), (0, 1));

        session.next_page();
        assert_eq!(session.position(), (1, 0));
    }

    #[test]
    fn last_surah_rolls_over_to_the_first() {
        let counts = [4usize; 10];
        let mut session = ReadingSession::new(catalog_with_counts(&counts), None);

        session.load_page(9, 0);
        assert_eq!(session.position(), (9, 0));

        session.next_page();
        assert_eq!(session.position(), (0, 0));
    }

    #[test]
    fn load_page_takes_surah_index_modulo_count() {
        let mut session = ReadingSession::new(catalog_with_counts(&[4, 4, 4]), None);

        session.load_page(7, 0);
        assert_eq!(session.position(), (1, 0));
    }

    #[test]
    fn previous_page_at_page_zero_lands_on_previous_surah_last_page() {
        let mut session = ReadingSession::new(catalog_with_counts(&[23, 4]), None);

        session.load_page(1, 0);
        session.previous_page();

        // 23 ayahs -> 3 pages, last page index 2.
        assert_eq!(session.position(), (0, 2));
    }

    #[test]
    fn previous_page_from_the_first_surah_wraps_backwards() {
        let mut session = ReadingSession::new(catalog_with_counts(&[4, 4, 11]), None);

        session.previous_page();
        assert_eq!(session.position(), (2, 1));
    }

    #[test]
    fn next_then_previous_page_returns_to_the_same_position() {
        let mut session = ReadingSession::new(catalog_with_counts(&[23, 15]), None);

        session.load_page(0, 1);
        session.next_page();
        session.previous_page();
        assert_eq!(session.position(), (0, 1));
    }

    #[test]
    fn next_then_previous_across_a_boundary_lands_on_the_old_surah_last_page() {
        let mut session = ReadingSession::new(catalog_with_counts(&[15, 4]), None);

        session.load_page(0, 1);
        session.next_page();
        assert_eq!(session.position(), (1, 0));

        session.previous_page();
        assert_eq!(session.position(), (0, 1));
    }

    #[test]
    fn surah_jumps_go_to_page_zero() {
        let mut session = ReadingSession::new(catalog_with_counts(&[23, 4, 4]), None);

        session.load_page(0, 2);
        session.next_surah();
        assert_eq!(session.position(), (1, 0));

        session.previous_surah();
        assert_eq!(session.position(), (0, 0));

        session.previous_surah();
        assert_eq!(session.position(), (2, 0));
    }

    #[test]
    fn refresh_reveals_the_previous_surah_and_holds_the_flag() {
        let mut session = ReadingSession::new(catalog_with_counts(&[4, 4]), None);

        session.refresh(10_000);
        assert_eq!(session.position(), (1, 0));
        assert!(session.is_refreshing(10_500));
        assert!(!session.is_refreshing(11_000));
    }

    #[test]
    fn pagination_label_counts_from_one() {
        let mut session = ReadingSession::new(catalog_with_counts(&[23]), None);

        assert_eq!(session.total_pages(), 3);
        assert_eq!(session.pagination_label(), "Page 1 of 3");

        session.next_page();
        assert_eq!(session.pagination_label(), "Page 2 of 3");
    }

    #[test]
    fn empty_catalog_is_inert() {
        let mut session = ReadingSession::new(Arc::new(SurahCatalog::default()), None);

        session.next_page();
        session.previous_page();
        session.next_surah();
        session.previous_surah();
        session.load_page(3, 7);

        assert_eq!(session.position(), (0, 0));
        assert!(session.visible_ayahs().is_empty());
        assert_eq!(session.total_pages(), 0);
        assert_eq!(session.pagination_label(), "");
        assert!(session.current_surah().is_none());
    }

    #[test]
    fn set_catalog_keeps_position_and_reclamps() {
        let mut session = ReadingSession::new(catalog_with_counts(&[4, 23]), None);
        session.load_page(1, 2);

        session.set_catalog(catalog_with_counts(&[4, 15]));
        assert_eq!(session.position(), (1, 1));

        session.set_catalog(catalog_with_counts(&[4]));
        assert_eq!(session.position(), (0, 0));
    }
}
