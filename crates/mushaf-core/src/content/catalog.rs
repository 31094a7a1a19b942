use std::sync::{Arc, OnceLock};

use log::debug;

use super::{Ayah, ContentStore, LAST_TEN_SURAHS, Language, RawAyah, Surah};

/// Ordered surah groups for one language, restricted to the allow-list.
///
/// Group order always follows the allow-list (105 through 114), never the
/// order ayat appear in the source. A surah with no matching ayat yields no
/// group.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SurahCatalog {
    surahs: Vec<Surah>,
}

impl SurahCatalog {
    pub fn build(raw: &[RawAyah]) -> Self {
        let mut surahs = Vec::with_capacity(LAST_TEN_SURAHS.len());

        for surah in &LAST_TEN_SURAHS {
            let ayahs: Vec<Ayah> = raw
                .iter()
                .filter(|ayah| surah.matches(ayah))
                .map(Ayah::project)
                .collect();

            if !ayahs.is_empty() {
                surahs.push(Surah {
                    number: surah.number,
                    name: surah.name,
                    ayahs,
                });
            }
        }

        debug!(
            "catalog: built {} surahs from {} raw ayahs",
            surahs.len(),
            raw.len()
        );
        Self { surahs }
    }

    pub fn surahs(&self) -> &[Surah] {
        &self.surahs
    }

    pub fn surah_at(&self, index: usize) -> Option<&Surah> {
        self.surahs.get(index)
    }

    pub fn len(&self) -> usize {
        self.surahs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.is_empty()
    }
}

/// Lazily built, write-once catalog cache keyed by language.
///
/// Each language is consolidated at most once per cache lifetime; the result
/// is immutable afterwards and handed out by shared reference.
pub struct CatalogCache<C: ContentStore> {
    content: C,
    cache: [OnceLock<Arc<SurahCatalog>>; Language::COUNT],
}

impl<C: ContentStore> CatalogCache<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            cache: [OnceLock::new(), OnceLock::new()],
        }
    }

    /// Catalog for `language`, building it on first access.
    pub fn catalog(&self, language: Language) -> Arc<SurahCatalog> {
        self.cache[language.index()]
            .get_or_init(|| {
                debug!("catalog: consolidating {language:?} content");
                Arc::new(SurahCatalog::build(self.content.ayahs(language)))
            })
            .clone()
    }
}
