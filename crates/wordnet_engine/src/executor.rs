// crates/wordnet_engine/src/executor.rs
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};

use wordnet_db::{Database, PartOfSpeech, ResolveDepth, Synset};

use crate::error::{EngineError, Result};

/// Параллельное чтение целей указателей: семафор на `parallelism` задач,
/// каждая задача в blocking-пуле читает один синсет с заданной глубиной.
pub(crate) struct PointerExecutor {
    sem: Arc<Semaphore>,
}

impl PointerExecutor {
    pub fn new(parallelism: usize) -> Self {
        Self {
            sem: Arc::new(Semaphore::new(parallelism.max(1))),
        }
    }

    /// Результаты в порядке `targets`. Первая ошибка проваливает весь вызов,
    /// уже запущенные задачи дорабатывают и отбрасываются.
    pub async fn fetch(
        &self,
        db: &Arc<Database>,
        targets: Vec<(PartOfSpeech, u64)>,
        depth: ResolveDepth,
    ) -> Result<Vec<Synset>> {
        if targets.is_empty() {
            return Ok(Vec::new());
        }
        let n = targets.len();
        let (tx, mut rx) = mpsc::unbounded_channel::<(usize, Result<Synset>)>();

        for (i, (pos, offset)) in targets.into_iter().enumerate() {
            let permit = self
                .sem
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| EngineError::Join(e.to_string()))?;
            let db = db.clone();
            let txc = tx.clone();
            tokio::task::spawn_blocking(move || {
                let _g = permit;
                let res = db
                    .store()
                    .fetch(pos, offset, depth)
                    .map_err(EngineError::from);
                let _ = txc.send((i, res));
            });
        }
        drop(tx);

        let mut slots: Vec<Option<Synset>> = (0..n).map(|_| None).collect();
        while let Some((i, res)) = rx.recv().await {
            slots[i] = Some(res?);
        }
        // задача, упавшая с паникой, не отправляет ничего
        slots
            .into_iter()
            .map(|s| s.ok_or_else(|| EngineError::Join("pointer fetch task died".into())))
            .collect()
    }
}
