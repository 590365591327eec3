// crates/wordnet_db/src/error.rs
use std::path::PathBuf;

use crate::pos::PartOfSpeech;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("io: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed index line ({reason}): {line:?}")]
    MalformedIndexLine { line: String, reason: String },
    #[error("malformed data line ({reason}): {line:?}")]
    MalformedDataLine { line: String, reason: String },
    #[error("word not found: {0}")]
    WordNotFound(String),
    #[error("offset {offset} out of range for data.{} (len {len})", .pos.extension())]
    OffsetOutOfRange {
        pos: PartOfSpeech,
        offset: u64,
        len: u64,
    },
    #[error("record at data.{}:{offset} has no newline within {window} bytes", .pos.extension())]
    RecordTruncated {
        pos: PartOfSpeech,
        offset: u64,
        window: usize,
    },
}

impl DbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DbError::Io {
            path: path.into(),
            source,
        }
    }

    /// «Слова нет»: не ошибка базы, вызывающий рисует это иначе.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::WordNotFound(_))
    }
}
