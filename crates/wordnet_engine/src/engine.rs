// crates/wordnet_engine/src/engine.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;
use tokio::task::JoinSet;

use wordnet_db::{
    DataFile, Database, IndexEntry, PartOfSpeech, ResolveDepth, Synset, SynsetStore, data_path,
    load_index,
};

use crate::config::{EngineConfig, ReadyPolicy};
use crate::error::{EngineError, Result};
use crate::executor::PointerExecutor;

/// Фаза жизненного цикла, публикуется через watch-канал.
#[derive(Clone)]
enum Phase {
    Uninitialized,
    Loading,
    Ready(Arc<Database>),
    Failed(String),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
    Closed,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Loading => "loading",
            EngineState::Ready => "ready",
            EngineState::Failed => "failed",
            EngineState::Closed => "closed",
        };
        f.write_str(s)
    }
}

impl Phase {
    fn state(&self) -> EngineState {
        match self {
            Phase::Uninitialized => EngineState::Uninitialized,
            Phase::Loading => EngineState::Loading,
            Phase::Ready(_) => EngineState::Ready,
            Phase::Failed(_) => EngineState::Failed,
            Phase::Closed => EngineState::Closed,
        }
    }

    fn settled(&self) -> bool {
        !matches!(self, Phase::Uninitialized | Phase::Loading)
    }
}

struct Inner {
    config: EngineConfig,
    phase: watch::Sender<Phase>,
    executor: PointerExecutor,
}

impl Inner {
    async fn load_and_publish(&self, dir: PathBuf) -> Result<()> {
        match self.load(dir).await {
            Ok(db) => {
                let db = Arc::new(db);
                let published = self.phase.send_if_modified(|p| {
                    if matches!(p, Phase::Loading) {
                        *p = Phase::Ready(db.clone());
                        true
                    } else {
                        false
                    }
                });
                if !published {
                    // close() пришёл во время загрузки
                    tracing::info!("engine closed while loading, dropping database");
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "wordnet initialization failed");
                let msg = e.to_string();
                self.phase.send_if_modified(|p| {
                    if matches!(p, Phase::Loading) {
                        *p = Phase::Failed(msg);
                        true
                    } else {
                        false
                    }
                });
                Err(e)
            }
        }
    }

    async fn load(&self, dir: PathBuf) -> Result<Database> {
        let t0 = Instant::now();
        let index_dir = dir.clone();
        let index = tokio::task::spawn_blocking(move || load_index(&index_dir)).await??;
        tracing::info!(
            lemmas = index.len(),
            entries = index.entry_count(),
            took_ms = t0.elapsed().as_millis() as u64,
            "index loaded"
        );

        let t1 = Instant::now();
        let mut opening = JoinSet::new();
        for pos in PartOfSpeech::ALL {
            let path = data_path(&dir, pos);
            opening.spawn_blocking(move || DataFile::open(pos, path));
        }
        let mut files = Vec::with_capacity(PartOfSpeech::ALL.len());
        while let Some(res) = opening.join_next().await {
            files.push(res??);
        }
        let store = SynsetStore::from_files(files, &self.config.db_options())?;
        tracing::info!(
            took_ms = t1.elapsed().as_millis() as u64,
            "data files mapped"
        );

        Ok(Database::from_parts(index, store))
    }
}

/// Асинхронный движок поверх `Database`. Дешёвый `Clone`: все клоны
/// смотрят на одну базу и один сигнал готовности.
#[derive(Clone)]
pub struct WordNet {
    inner: Arc<Inner>,
}

impl Default for WordNet {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl WordNet {
    pub fn new(config: EngineConfig) -> Self {
        let (phase, _) = watch::channel(Phase::Uninitialized);
        let executor = PointerExecutor::new(config.parallelism);
        Self {
            inner: Arc::new(Inner {
                config,
                phase,
                executor,
            }),
        }
    }

    /// `new` + `init` из `config.db_dir`.
    pub async fn init_with(config: EngineConfig) -> Result<Self> {
        let wn = Self::new(config);
        wn.init(None).await?;
        Ok(wn)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    pub fn state(&self) -> EngineState {
        self.inner.phase.borrow().state()
    }

    /// Загрузка базы. `dir` перекрывает `config.db_dir`.
    /// Индекс читается последовательно, data-файлы открываются параллельно.
    pub async fn init(&self, dir: Option<&Path>) -> Result<()> {
        let started = self.inner.phase.send_if_modified(|p| {
            if matches!(p, Phase::Uninitialized) {
                *p = Phase::Loading;
                true
            } else {
                false
            }
        });
        if !started {
            return Err(EngineError::AlreadyInitialized);
        }

        let dir = dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.inner.config.db_dir.clone());
        tracing::info!(dir = %dir.display(), "loading wordnet database");

        // Загрузка идёт отдельной задачей и сама публикует итоговую фазу,
        // даже если вызывающий бросил этот future (timeout, select!).
        let inner = self.inner.clone();
        tokio::spawn(async move { inner.load_and_publish(dir).await }).await?
    }

    /// База, когда готова. Поведение до готовности задаёт `ReadyPolicy`.
    async fn database(&self) -> Result<Arc<Database>> {
        let phase = match self.inner.config.ready_policy {
            ReadyPolicy::FailFast => self.inner.phase.borrow().clone(),
            ReadyPolicy::Wait => {
                let mut rx = self.inner.phase.subscribe();
                let settled = rx
                    .wait_for(Phase::settled)
                    .await
                    .map_err(|_| EngineError::NotReady)?;
                (*settled).clone()
            }
        };
        match phase {
            Phase::Ready(db) => Ok(db),
            Phase::Failed(msg) => Err(EngineError::InitFailed(msg)),
            Phase::Uninitialized | Phase::Loading | Phase::Closed => Err(EngineError::NotReady),
        }
    }

    /// Первое значение слова в каждой части речи.
    pub async fn lookup(&self, word: &str, skip_pointers: bool) -> Result<Vec<Synset>> {
        let db = self.database().await?;
        let targets = addresses(db.entries(word)?, false);
        self.fetch_many(word, &db, targets, skip_pointers).await
    }

    /// Все значения слова, в порядке записей индекса.
    pub async fn lookup_senses(&self, word: &str, skip_pointers: bool) -> Result<Vec<Synset>> {
        let db = self.database().await?;
        let targets = addresses(db.entries(word)?, true);
        self.fetch_many(word, &db, targets, skip_pointers).await
    }

    pub async fn list(&self) -> Result<Vec<String>> {
        let db = self.database().await?;
        Ok(db.list())
    }

    /// Перевести движок в `Closed`. База освобождается, когда текущие
    /// запросы отпустят свои `Arc`.
    pub fn close(&self) {
        let prev = self.inner.phase.send_replace(Phase::Closed);
        tracing::info!(from = %prev.state(), "wordnet engine closed");
    }

    async fn fetch_many(
        &self,
        word: &str,
        db: &Arc<Database>,
        targets: Vec<(PartOfSpeech, u64)>,
        skip_pointers: bool,
    ) -> Result<Vec<Synset>> {
        let t0 = Instant::now();
        let depth = ResolveDepth::from_skip(skip_pointers);
        let mut out = Vec::with_capacity(targets.len());
        for (pos, offset) in targets {
            let head_db = db.clone();
            let mut synset = tokio::task::spawn_blocking(move || {
                head_db.store().fetch(pos, offset, ResolveDepth::Flat)
            })
            .await??;
            self.resolve(db, &mut synset, depth).await?;
            out.push(synset);
        }
        tracing::debug!(
            word,
            synsets = out.len(),
            skip_pointers,
            took_ms = t0.elapsed().as_millis() as u64,
            "lookup"
        );
        Ok(out)
    }

    /// Асинхронный аналог `Synset::resolve_pointers`: цели читаются
    /// параллельно с глубиной `depth.shallower()`.
    async fn resolve(
        &self,
        db: &Arc<Database>,
        synset: &mut Synset,
        depth: ResolveDepth,
    ) -> Result<()> {
        if depth == ResolveDepth::Flat {
            return Ok(());
        }
        let targets = synset
            .pointers
            .iter()
            .map(|p| (p.target_pos, p.target_offset))
            .collect();
        let resolved = self
            .inner
            .executor
            .fetch(db, targets, depth.shallower())
            .await?;
        for (p, target) in synset.pointers.iter_mut().zip(resolved) {
            p.resolved = Some(Box::new(target));
        }
        Ok(())
    }
}

fn addresses(entries: &[IndexEntry], all_senses: bool) -> Vec<(PartOfSpeech, u64)> {
    if all_senses {
        entries
            .iter()
            .flat_map(|e| e.synset_offsets.iter().map(move |&off| (e.pos, off)))
            .collect()
    } else {
        entries.iter().map(|e| (e.pos, e.synset_offset())).collect()
    }
}
