// crates/wordnet_db/src/reader.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{DbError, Result};

/// Построчное чтение текстового файла базы.
/// Ленивое, конечное, без перезапуска; `\n` (и `\r` перед ним) срезаны.
pub struct Lines {
    path: PathBuf,
    inner: std::io::Lines<BufReader<File>>,
}

pub fn read_lines(path: impl AsRef<Path>) -> Result<Lines> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| DbError::io(path, e))?;
    Ok(Lines {
        path: path.to_path_buf(),
        inner: BufReader::new(f).lines(),
    })
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        Some(line.map_err(|e| DbError::io(&self.path, e)))
    }
}
