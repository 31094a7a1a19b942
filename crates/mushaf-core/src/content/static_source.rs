use super::{ContentStore, Language, RawAyah};

/// Static in-memory content source.
///
/// Embedders that ship the corpus as bundled JSON load both collections once
/// at startup and hand them over here; the collections are read-only for the
/// rest of the process lifetime.
#[derive(Clone, Debug, Default)]
pub struct StaticContentStore {
    english: Vec<RawAyah>,
    urdu: Vec<RawAyah>,
}

impl StaticContentStore {
    pub fn new(english: Vec<RawAyah>, urdu: Vec<RawAyah>) -> Self {
        Self { english, urdu }
    }

    /// Parse both collections from their JSON documents.
    pub fn from_json(english: &str, urdu: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            english: serde_json::from_str(english)?,
            urdu: serde_json::from_str(urdu)?,
        })
    }
}

impl ContentStore for StaticContentStore {
    fn ayahs(&self, language: Language) -> &[RawAyah] {
        match language {
            Language::English => &self.english,
            Language::Urdu => &self.urdu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_external_corpus_schema() {
        let document = r#"[
            {
                "SurahNumber": 112,
                "SurahName": "Al-Ikhlas",
                "SurahNameEnglish": "The Sincerity",
                "AyahNumber": 1,
                "AyahTextMuhammadi": "قل هو الله أحد",
                "Translation": "Say: He is Allah, the One.",
                "Tafseer": "Revealed in answer to a question about the lineage of Allah."
            },
            {
                "SurahNumber": 112,
                "SurahName": "Al-Ikhlas",
                "SurahNameEnglish": "The Sincerity",
                "AyahNumber": 2,
                "AyahTextMuhammadi": "الله الصمد",
                "Translation": "Allah, the Eternal."
            }
        ]"#;

        let store = StaticContentStore::from_json(document, "[]").unwrap();
        let ayahs = store.ayahs(Language::English);

        assert_eq!(ayahs.len(), 2);
        assert_eq!(ayahs[0].surah_number, 112);
        assert_eq!(ayahs[0].ayah_number, 1);
        assert!(ayahs[0].tafseer.is_some());
        assert!(ayahs[1].tafseer.is_none());
        assert!(store.ayahs(Language::Urdu).is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(StaticContentStore::from_json("not json", "[]").is_err());
    }
}
