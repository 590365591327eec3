// crates/wordnet_db/src/database.rs
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::data::{ResolveDepth, Synset};
use crate::error::{DbError, Result};
use crate::index::{IndexEntry, IndexLine, parse_index_line};
use crate::lexicon::LexicalIndex;
use crate::pos::PartOfSpeech;
use crate::reader::read_lines;
use crate::store::SynsetStore;

/// Параметры чтения data-файлов.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbOptions {
    /// Начальное окно чтения записи, байт
    pub read_window: usize,
    /// Потолок окна; запись длиннее даёт `RecordTruncated`
    pub max_record_len: usize,
}

impl Default for DbOptions {
    fn default() -> Self {
        Self {
            read_window: 1024,
            max_record_len: 64 * 1024,
        }
    }
}

pub fn index_path(dir: &Path, pos: PartOfSpeech) -> PathBuf {
    dir.join(format!("index.{}", pos.extension()))
}

/// Прочитать один index-файл в индекс. Возвращает число добавленных записей.
pub fn load_index_file(index: &mut LexicalIndex, path: &Path) -> Result<usize> {
    let mut added = 0usize;
    for line in read_lines(path)? {
        if let IndexLine::Entry(e) = parse_index_line(&line?)? {
            index.insert(e);
            added += 1;
        }
    }
    Ok(added)
}

/// Все четыре index-файла по порядку adj, adv, noun, verb.
pub fn load_index(dir: &Path) -> Result<LexicalIndex> {
    let mut index = LexicalIndex::new();
    for pos in PartOfSpeech::ALL {
        let path = index_path(dir, pos);
        let t0 = Instant::now();
        let n = load_index_file(&mut index, &path)?;
        tracing::debug!(file = %path.display(), entries = n, took_ms = t0.elapsed().as_millis() as u64, "index file loaded");
    }
    Ok(index)
}

/// Загруженная база: лексический индекс + mmap'ы data-файлов.
pub struct Database {
    index: LexicalIndex,
    store: SynsetStore,
}

impl Database {
    pub fn load(dir: impl AsRef<Path>, opts: &DbOptions) -> Result<Self> {
        let dir = dir.as_ref();
        let index = load_index(dir)?;
        let store = SynsetStore::open(dir, opts)?;
        tracing::info!(
            dir = %dir.display(),
            lemmas = index.len(),
            entries = index.entry_count(),
            "wordnet database ready"
        );
        Ok(Self { index, store })
    }

    pub fn from_parts(index: LexicalIndex, store: SynsetStore) -> Self {
        Self { index, store }
    }

    pub fn index(&self) -> &LexicalIndex {
        &self.index
    }

    pub fn store(&self) -> &SynsetStore {
        &self.store
    }

    /// Записи индекса по слову, пустой результат даёт `WordNotFound`.
    pub fn entries(&self, word: &str) -> Result<&[IndexEntry]> {
        let entries = self.index.get(word);
        if entries.is_empty() {
            return Err(DbError::WordNotFound(word.to_string()));
        }
        Ok(entries)
    }

    /// По одному синсету (первое значение) на каждую запись индекса.
    pub fn lookup(&self, word: &str, skip_pointers: bool) -> Result<Vec<Synset>> {
        let depth = ResolveDepth::from_skip(skip_pointers);
        self.entries(word)?
            .iter()
            .map(|e| self.store.fetch(e.pos, e.synset_offset(), depth))
            .collect()
    }

    /// Все значения: каждый оффсет каждой записи, группы в порядке записей.
    pub fn lookup_senses(&self, word: &str, skip_pointers: bool) -> Result<Vec<Synset>> {
        let depth = ResolveDepth::from_skip(skip_pointers);
        let mut out = Vec::new();
        for e in self.entries(word)? {
            for &off in &e.synset_offsets {
                out.push(self.store.fetch(e.pos, off, depth)?);
            }
        }
        Ok(out)
    }

    /// Все леммы (пробелы вместо `_`), в порядке загрузки.
    pub fn list(&self) -> Vec<String> {
        self.index.keys().collect()
    }

    pub fn close(self) {
        self.store.close();
    }
}
