//! Surah/ayah content model and content sources.

mod catalog;
mod static_source;

pub use catalog::{CatalogCache, SurahCatalog};
pub use static_source::StaticContentStore;

use serde::Deserialize;

/// Translation language of a content collection.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    English,
    Urdu,
}

impl Language {
    pub const COUNT: usize = 2;

    pub(crate) const fn index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Urdu => 1,
        }
    }
}

/// One ayah record as it appears in the raw per-language collections.
///
/// Field names follow the external corpus schema verbatim; the corpus itself
/// is an input, not something this crate owns.
#[derive(Clone, Debug, Deserialize)]
pub struct RawAyah {
    #[serde(rename = "SurahNumber")]
    pub surah_number: u32,
    #[serde(rename = "SurahName")]
    pub surah_name: String,
    #[serde(rename = "SurahNameEnglish")]
    pub surah_name_english: String,
    #[serde(rename = "AyahNumber")]
    pub ayah_number: u32,
    #[serde(rename = "AyahTextMuhammadi")]
    pub text: String,
    #[serde(rename = "Translation")]
    pub translation: String,
    #[serde(rename = "Tafseer", default)]
    pub tafseer: Option<String>,
}

/// One ayah projected down to the fields the presentation layer shows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ayah {
    pub surah_number: u32,
    pub surah_name: String,
    pub surah_name_english: String,
    pub ayah_number: u32,
    pub text: String,
    pub translation: String,
    pub tafseer: Option<String>,
}

impl Ayah {
    fn project(raw: &RawAyah) -> Self {
        Self {
            surah_number: raw.surah_number,
            surah_name: raw.surah_name.clone(),
            surah_name_english: raw.surah_name_english.clone(),
            ayah_number: raw.ayah_number,
            text: raw.text.clone(),
            translation: raw.translation.clone(),
            tafseer: raw.tafseer.clone(),
        }
    }
}

/// A surah restricted to the ayat found for it, in source order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Surah {
    pub number: u16,
    pub name: &'static str,
    pub ayahs: Vec<Ayah>,
}

/// Allow-list entry: a surah is matched by numeric id or by Latin name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SurahRef {
    pub number: u16,
    pub name: &'static str,
}

impl SurahRef {
    fn matches(&self, ayah: &RawAyah) -> bool {
        ayah.surah_number == u32::from(self.number) || ayah.surah_name == self.name
    }
}

/// The ten surahs this application restricts itself to, in display order.
pub const LAST_TEN_SURAHS: [SurahRef; 10] = [
    SurahRef { number: 105, name: "Al-Fil" },
    SurahRef { number: 106, name: "Quraysh" },
    SurahRef { number: 107, name: "Al-Ma'un" },
    SurahRef { number: 108, name: "Al-Kawthar" },
    SurahRef { number: 109, name: "Al-Kafirun" },
    SurahRef { number: 110, name: "An-Nasr" },
    SurahRef { number: 111, name: "Al-Masad" },
    SurahRef { number: 112, name: "Al-Ikhlas" },
    SurahRef { number: 113, name: "Al-Falaq" },
    SurahRef { number: 114, name: "An-Nas" },
];

/// Read-only source of the raw per-language ayah collections.
pub trait ContentStore {
    fn ayahs(&self, language: Language) -> &[RawAyah];
}
