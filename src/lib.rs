pub mod render;

pub use wordnet_db::{Database, DbError, DbOptions, PartOfSpeech, Synset};
pub use wordnet_engine::{EngineConfig, EngineError, EngineState, ReadyPolicy, WordNet};
