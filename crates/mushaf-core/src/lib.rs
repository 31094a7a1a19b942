//! Reading core for the last ten surahs of the Quran.
//!
//! This crate holds everything below the presentation layer: the surah/ayah
//! content model with its fixed ten-surah allow-list, per-language catalog
//! building and caching, the paginated reading session state machine, the
//! persisted settings and last-read position, and the best-effort
//! position-sync machinery. Rendering, navigation chrome, and the raw text
//! corpus all live outside this crate.

pub mod app;
pub mod content;
pub mod session;
pub mod settings;
pub mod store;
pub mod sync;

pub use app::Reader;
pub use content::{
    Ayah, CatalogCache, ContentStore, LAST_TEN_SURAHS, Language, RawAyah, StaticContentStore,
    Surah, SurahCatalog,
};
pub use session::{AYAHS_PER_PAGE, ReadingSession};
pub use settings::{AppSettings, ReadingPosition};
pub use store::{MemoryStateStore, StateStore};
pub use sync::PositionSyncState;
