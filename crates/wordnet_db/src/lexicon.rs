// crates/wordnet_db/src/lexicon.rs
use indexmap::IndexMap;

use crate::index::IndexEntry;
use crate::normalizer::{display_lemma, normalize_lemma};

/// Лемма → записи index-файлов в порядке загрузки (adj, adv, noun, verb).
/// IndexMap держит порядок вставки, поэтому `keys()` идёт в порядке файлов.
#[derive(Debug, Default)]
pub struct LexicalIndex {
    by_lemma: IndexMap<String, Vec<IndexEntry>>,
    entries: usize,
}

impl LexicalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: IndexEntry) {
        let key = normalize_lemma(&entry.lemma);
        self.by_lemma.entry(key).or_default().push(entry);
        self.entries += 1;
    }

    /// Все записи по слову (слово нормализуется: пробелы → `_`).
    pub fn get(&self, word: &str) -> &[IndexEntry] {
        self.by_lemma
            .get(&normalize_lemma(word))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        !self.get(word).is_empty()
    }

    /// Леммы для выдачи наружу: `_` заменены обратно на пробелы.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.by_lemma.keys().map(|k| display_lemma(k))
    }

    /// Число различных лемм.
    pub fn len(&self) -> usize {
        self.by_lemma.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_lemma.is_empty()
    }

    /// Число записей по всем частям речи.
    pub fn entry_count(&self) -> usize {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::PartOfSpeech;

    fn entry(lemma: &str, pos: PartOfSpeech, off: u64) -> IndexEntry {
        IndexEntry {
            lemma: lemma.to_string(),
            pos,
            synset_count: 1,
            pointer_symbols: vec![],
            sense_count: 1,
            tag_sense_count: 0,
            synset_offsets: vec![off],
        }
    }

    #[test]
    fn keeps_insertion_order_per_lemma() {
        let mut idx = LexicalIndex::new();
        idx.insert(entry("well", PartOfSpeech::Adjective, 1));
        idx.insert(entry("well", PartOfSpeech::Adverb, 2));
        idx.insert(entry("well", PartOfSpeech::Noun, 3));
        let got: Vec<PartOfSpeech> = idx.get("well").iter().map(|e| e.pos).collect();
        assert_eq!(
            got,
            [PartOfSpeech::Adjective, PartOfSpeech::Adverb, PartOfSpeech::Noun]
        );
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.entry_count(), 3);
    }

    #[test]
    fn multi_word_keys_roundtrip() {
        let mut idx = LexicalIndex::new();
        idx.insert(entry("ice_cream", PartOfSpeech::Noun, 1));
        assert!(idx.contains("ice cream"));
        assert!(idx.contains("ice_cream"));
        assert_eq!(idx.keys().collect::<Vec<_>>(), ["ice cream"]);
    }

    #[test]
    fn keys_are_not_sorted() {
        let mut idx = LexicalIndex::new();
        idx.insert(entry("zebra", PartOfSpeech::Adjective, 1));
        idx.insert(entry("apple", PartOfSpeech::Noun, 2));
        assert_eq!(idx.keys().collect::<Vec<_>>(), ["zebra", "apple"]);
    }

    #[test]
    fn missing_word_is_empty() {
        let idx = LexicalIndex::new();
        assert!(idx.get("zzqxnotaword").is_empty());
        assert!(idx.is_empty());
    }
}
