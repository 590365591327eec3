// crates/wordnet_db/src/store.rs
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::SynsetSource;
use crate::data::{ResolveDepth, Synset, parse_data_line};
use crate::database::DbOptions;
use crate::error::{DbError, Result};
use crate::pos::PartOfSpeech;

/// Один открытый data.* файл (read-only mmap).
pub struct DataFile {
    pos: PartOfSpeech,
    map: Mmap,
}

impl DataFile {
    pub fn open(pos: PartOfSpeech, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| DbError::io(path, e))?;
        // SAFETY: файлы базы только читаются, процесс их не меняет
        let map = unsafe { Mmap::map(&f) }.map_err(|e| DbError::io(path, e))?;
        Ok(Self { pos, map })
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    pub fn len(&self) -> u64 {
        self.map.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Хранилище синсетов: по одному data-файлу на часть речи, доступ по байтовому оффсету.
pub struct SynsetStore {
    files: [DataFile; 4],
    read_window: usize,
    max_record_len: usize,
}

pub fn data_path(dir: &Path, pos: PartOfSpeech) -> PathBuf {
    dir.join(format!("data.{}", pos.extension()))
}

impl SynsetStore {
    /// Открыть все четыре data-файла из каталога базы (последовательно).
    pub fn open(dir: impl AsRef<Path>, opts: &DbOptions) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files = Vec::with_capacity(4);
        for pos in PartOfSpeech::ALL {
            files.push(DataFile::open(pos, data_path(dir, pos))?);
        }
        Self::from_files(files, opts)
    }

    /// Собрать хранилище из уже открытых файлов (порядок не важен, нужны все четыре).
    pub fn from_files(files: Vec<DataFile>, opts: &DbOptions) -> Result<Self> {
        let mut slots: [Option<DataFile>; 4] = [None, None, None, None];
        for f in files {
            let slot = f.pos.slot();
            slots[slot] = Some(f);
        }
        let [adj, adv, noun, verb] = slots;
        let missing = |pos: PartOfSpeech| {
            DbError::io(
                format!("data.{}", pos.extension()),
                std::io::Error::new(std::io::ErrorKind::NotFound, "data file not opened"),
            )
        };
        Ok(Self {
            files: [
                adj.ok_or_else(|| missing(PartOfSpeech::Adjective))?,
                adv.ok_or_else(|| missing(PartOfSpeech::Adverb))?,
                noun.ok_or_else(|| missing(PartOfSpeech::Noun))?,
                verb.ok_or_else(|| missing(PartOfSpeech::Verb))?,
            ],
            read_window: opts.read_window.max(1),
            max_record_len: opts.max_record_len.max(opts.read_window.max(1)),
        })
    }

    pub fn file(&self, pos: PartOfSpeech) -> &DataFile {
        &self.files[pos.slot()]
    }

    /// Сырая запись по оффсету: от `offset` до первого `\n` (не включая).
    /// Окно чтения начинается с `read_window` и удваивается до `max_record_len`.
    pub fn record(&self, pos: PartOfSpeech, offset: u64) -> Result<&str> {
        let file = self.file(pos);
        let data: &[u8] = &file.map;
        if offset >= file.len() {
            return Err(DbError::OffsetOutOfRange {
                pos,
                offset,
                len: file.len(),
            });
        }
        let start = offset as usize;
        let mut scanned = start;
        let mut window = self.read_window;
        loop {
            let end = start.saturating_add(window).min(data.len());
            if let Some(nl) = data[scanned..end].iter().position(|&b| b == b'\n') {
                let mut raw = &data[start..scanned + nl];
                if let [rest @ .., b'\r'] = raw {
                    raw = rest;
                }
                return std::str::from_utf8(raw).map_err(|e| DbError::MalformedDataLine {
                    line: String::from_utf8_lossy(raw).into_owned(),
                    reason: format!("not utf-8: {e}"),
                });
            }
            if end == data.len() || window >= self.max_record_len {
                return Err(DbError::RecordTruncated {
                    pos,
                    offset,
                    window: end - start,
                });
            }
            scanned = end;
            window = window.saturating_mul(2).min(self.max_record_len);
        }
    }

    /// Синсет по оффсету; `depth` решает, разыменовывать ли указатели.
    pub fn fetch(&self, pos: PartOfSpeech, offset: u64, depth: ResolveDepth) -> Result<Synset> {
        let line = self.record(pos, offset)?;
        let mut synset = parse_data_line(line)?;
        if synset.offset != offset {
            return Err(DbError::MalformedDataLine {
                line: line.to_string(),
                reason: format!("record offset {} does not match address {offset}", synset.offset),
            });
        }
        synset.resolve_pointers(self, depth)?;
        Ok(synset)
    }

    /// Освободить mmap'ы. После этого хранилище недоступно (self съеден).
    pub fn close(self) {
        drop(self);
    }
}

impl SynsetSource for SynsetStore {
    fn fetch(&self, pos: PartOfSpeech, offset: u64, depth: ResolveDepth) -> Result<Synset> {
        SynsetStore::fetch(self, pos, offset, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_db(dir: &Path, noun: &str) {
        for pos in PartOfSpeech::ALL {
            let body = if pos == PartOfSpeech::Noun { noun } else { "" };
            fs::write(data_path(dir, pos), body).unwrap();
        }
    }

    fn opts(read_window: usize, max_record_len: usize) -> DbOptions {
        DbOptions {
            read_window,
            max_record_len,
        }
    }

    #[test]
    fn grows_window_until_newline() {
        let tmp = tempfile::tempdir().unwrap();
        let gloss = "x".repeat(5000);
        let line = format!("00000000 04 n 01 long 0 000 | {gloss}  \n");
        write_db(tmp.path(), &line);

        let store = SynsetStore::open(tmp.path(), &opts(16, 1 << 16)).unwrap();
        let s = store.fetch(PartOfSpeech::Noun, 0, ResolveDepth::Flat).unwrap();
        assert_eq!(s.glossary.len(), 5000);
    }

    #[test]
    fn truncated_when_no_newline_within_limit() {
        let tmp = tempfile::tempdir().unwrap();
        let line = format!("00000000 04 n 01 long 0 000 | {}\n", "y".repeat(300));
        write_db(tmp.path(), &line);

        let store = SynsetStore::open(tmp.path(), &opts(64, 128)).unwrap();
        let err = store.record(PartOfSpeech::Noun, 0).unwrap_err();
        assert!(matches!(err, DbError::RecordTruncated { window: 128, .. }), "{err:?}");
    }

    #[test]
    fn truncated_at_eof_without_newline() {
        let tmp = tempfile::tempdir().unwrap();
        write_db(tmp.path(), "00000000 04 n 01 last 0 000 | no newline");

        let store = SynsetStore::open(tmp.path(), &DbOptions::default()).unwrap();
        let err = store.record(PartOfSpeech::Noun, 0).unwrap_err();
        assert!(matches!(err, DbError::RecordTruncated { .. }));
    }

    #[test]
    fn offset_past_end() {
        let tmp = tempfile::tempdir().unwrap();
        write_db(tmp.path(), "00000000 04 n 01 a 0 000 | a\n");

        let store = SynsetStore::open(tmp.path(), &DbOptions::default()).unwrap();
        let err = store.record(PartOfSpeech::Noun, 10_000).unwrap_err();
        assert!(matches!(
            err,
            DbError::OffsetOutOfRange { pos: PartOfSpeech::Noun, offset: 10_000, .. }
        ));
        // пустой файл: любой оффсет вне диапазона
        let err = store.record(PartOfSpeech::Verb, 0).unwrap_err();
        assert!(matches!(err, DbError::OffsetOutOfRange { len: 0, .. }));
    }

    #[test]
    fn crlf_is_stripped() {
        let tmp = tempfile::tempdir().unwrap();
        write_db(tmp.path(), "00000000 04 n 01 a 0 000 | a gloss\r\n");

        let store = SynsetStore::open(tmp.path(), &DbOptions::default()).unwrap();
        assert_eq!(
            store.record(PartOfSpeech::Noun, 0).unwrap(),
            "00000000 04 n 01 a 0 000 | a gloss"
        );
    }

    #[test]
    fn misaligned_offset_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        write_db(tmp.path(), "00000000 04 n 01 a 0 000 | a\n00000029 04 n 01 b 0 000 | b\n");

        let store = SynsetStore::open(tmp.path(), &DbOptions::default()).unwrap();
        assert_eq!(store.fetch(PartOfSpeech::Noun, 29, ResolveDepth::Flat).unwrap().words[0].word, "b");
        let err = store.fetch(PartOfSpeech::Noun, 3, ResolveDepth::Flat).unwrap_err();
        assert!(matches!(err, DbError::MalformedDataLine { .. }));
    }

    #[test]
    fn missing_data_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SynsetStore::open(tmp.path(), &DbOptions::default()).err().unwrap();
        assert!(matches!(err, DbError::Io { .. }));
    }
}
