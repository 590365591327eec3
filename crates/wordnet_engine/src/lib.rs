pub mod config;
pub mod engine;
pub mod error;
mod executor;

pub use config::{EngineConfig, ReadyPolicy};
pub use engine::{EngineState, WordNet};
pub use error::{EngineError, Result};

pub use wordnet_db;
