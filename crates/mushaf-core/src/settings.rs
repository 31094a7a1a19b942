//! Persisted user state: settings toggles and the last-read position.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::Language;

/// Process-wide toggles, persisted independently of the reading position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AppSettings {
    pub show_tafseer: bool,
    pub urdu_translation: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_tafseer: true,
            urdu_translation: true,
        }
    }
}

impl AppSettings {
    pub fn language(&self) -> Language {
        if self.urdu_translation {
            Language::Urdu
        } else {
            Language::English
        }
    }
}

/// Last viewed surah and page, used to resume on the next launch.
///
/// `surah_index` is an index into the catalog's surah sequence, not a surah
/// number. Stored values may be stale relative to the catalog in use, so both
/// indices are clamped at restore time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReadingPosition {
    #[serde(rename = "surahIndex")]
    pub surah_index: usize,
    pub page: usize,
    #[serde(rename = "timestamp")]
    pub saved_at: DateTime<Utc>,
}

impl ReadingPosition {
    pub fn pair(&self) -> (usize, usize) {
        (self.surah_index, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_toggles() {
        let settings = AppSettings::default();
        assert!(settings.show_tafseer);
        assert!(settings.urdu_translation);
        assert_eq!(settings.language(), Language::Urdu);
    }

    #[test]
    fn position_round_trips_through_its_wire_format() {
        let position = ReadingPosition {
            surah_index: 3,
            page: 2,
            saved_at: "2024-05-01T10:30:00Z".parse().unwrap(),
        };

        let encoded = serde_json::to_string(&position).unwrap();
        assert!(encoded.contains("\"surahIndex\":3"));
        assert!(encoded.contains("\"page\":2"));
        assert!(encoded.contains("\"timestamp\""));

        let decoded: ReadingPosition = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, position);
    }
}
