pub mod data;
pub mod database;
pub mod error;
pub mod index;
pub mod lexicon;
pub mod normalizer;
pub mod pos;
pub mod reader;
pub mod relation;
pub mod store;
mod tokens;

pub use data::{Pointer, ResolveDepth, Synset, VerbFrame, Word, parse_data_line};
pub use database::{Database, DbOptions, index_path, load_index};
pub use error::{DbError, Result};
pub use index::{IndexEntry, IndexLine, parse_index_line};
pub use lexicon::LexicalIndex;
pub use pos::{PartOfSpeech, SynsetType};
pub use relation::Relation;
pub use store::{DataFile, SynsetStore, data_path};

/// Точка расширения: откуда брать синсеты по (pos, offset).
/// Резолвер указателей ходит только через этот трейт.
pub trait SynsetSource: Send + Sync {
    fn fetch(&self, pos: PartOfSpeech, offset: u64, depth: ResolveDepth) -> Result<Synset>;
}
