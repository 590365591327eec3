use serde::{Serialize, Serializer};
use std::fmt;

/// Часть речи на уровне файлов: у каждой своя пара index.*/data.*
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Порядок обработки файлов при загрузке. Наблюдаемый контракт:
    /// в таком порядке lookup отдаёт записи одной леммы.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    pub fn code(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// `s` (сателлит) живёт в data.adj, поэтому тоже Adjective.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adjective),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            PartOfSpeech::Adjective => 0,
            PartOfSpeech::Adverb => 1,
            PartOfSpeech::Noun => 2,
            PartOfSpeech::Verb => 3,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl Serialize for PartOfSpeech {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_char(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynsetType {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl SynsetType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(SynsetType::Noun),
            "v" => Some(SynsetType::Verb),
            "a" => Some(SynsetType::Adjective),
            "s" => Some(SynsetType::AdjectiveSatellite),
            "r" => Some(SynsetType::Adverb),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SynsetType::Noun => "noun",
            SynsetType::Verb => "verb",
            SynsetType::Adjective => "adjective",
            SynsetType::AdjectiveSatellite => "adjective satellite",
            SynsetType::Adverb => "adverb",
        }
    }

    pub fn pos(self) -> PartOfSpeech {
        match self {
            SynsetType::Noun => PartOfSpeech::Noun,
            SynsetType::Verb => PartOfSpeech::Verb,
            SynsetType::Adjective | SynsetType::AdjectiveSatellite => PartOfSpeech::Adjective,
            SynsetType::Adverb => PartOfSpeech::Adverb,
        }
    }
}

impl fmt::Display for SynsetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SynsetType {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satellite_lives_in_adjective_file() {
        assert_eq!(PartOfSpeech::from_code("s"), Some(PartOfSpeech::Adjective));
        assert_eq!(SynsetType::AdjectiveSatellite.pos(), PartOfSpeech::Adjective);
        assert_eq!(SynsetType::AdjectiveSatellite.name(), "adjective satellite");
    }

    #[test]
    fn file_order_is_adj_adv_noun_verb() {
        let exts: Vec<&str> = PartOfSpeech::ALL.iter().map(|p| p.extension()).collect();
        assert_eq!(exts, ["adj", "adv", "noun", "verb"]);
        for (i, p) in PartOfSpeech::ALL.iter().enumerate() {
            assert_eq!(p.slot(), i);
        }
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(PartOfSpeech::from_code(""), None);
        assert_eq!(SynsetType::from_code("x"), None);
    }
}
