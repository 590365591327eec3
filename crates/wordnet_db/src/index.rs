// crates/wordnet_db/src/index.rs
use serde::Serialize;

use crate::error::{DbError, Result};
use crate::pos::PartOfSpeech;
use crate::tokens::Tokens;

/// Запись index-файла: одна лемма в одной части речи.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// Как на диске: пробелы заменены на `_`
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub synset_count: u32,
    /// Символы указателей, порядок как в строке, дубликаты не схлопываем
    pub pointer_symbols: Vec<String>,
    pub sense_count: u32,
    pub tag_sense_count: u32,
    /// Все оффсеты синсетов (минимум один)
    pub synset_offsets: Vec<u64>,
}

impl IndexEntry {
    /// Оффсет первого синсета: по нему lookup берёт «основное» значение.
    pub fn synset_offset(&self) -> u64 {
        self.synset_offsets[0]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexLine {
    /// Лицензионная шапка / пустая строка
    Comment,
    Entry(IndexEntry),
}

pub fn parse_index_line(line: &str) -> Result<IndexLine> {
    if line.is_empty() || line.starts_with(' ') {
        return Ok(IndexLine::Comment);
    }
    parse_entry(line)
        .map(IndexLine::Entry)
        .map_err(|reason| DbError::MalformedIndexLine {
            line: line.to_string(),
            reason,
        })
}

fn parse_entry(line: &str) -> Result<IndexEntry, String> {
    let mut t = Tokens::new(line);

    let lemma = t.next("lemma")?.to_string();
    let pos_tok = t.next("pos")?;
    let pos = PartOfSpeech::from_code(pos_tok).ok_or_else(|| format!("unknown pos {pos_tok:?}"))?;
    let synset_count = count(&mut t, "synset_cnt")?;

    let pointer_count = count(&mut t, "p_cnt")?;
    let mut pointer_symbols = Vec::with_capacity(pointer_count.min(32) as usize);
    for _ in 0..pointer_count {
        pointer_symbols.push(t.next("ptr_symbol")?.to_string());
    }

    let sense_count = count(&mut t, "sense_cnt")?;
    let tag_sense_count = count(&mut t, "tagsense_cnt")?;

    let mut synset_offsets = Vec::with_capacity(synset_count.min(64) as usize);
    while let Some(tok) = t.try_next() {
        let off = crate::tokens::parse_radix(tok, 10)
            .ok_or_else(|| format!("synset_offset is not decimal: {tok:?}"))?;
        synset_offsets.push(off);
    }
    if synset_offsets.is_empty() {
        return Err("no synset offsets".to_string());
    }

    Ok(IndexEntry {
        lemma,
        pos,
        synset_count,
        pointer_symbols,
        sense_count,
        tag_sense_count,
        synset_offsets,
    })
}

fn count(t: &mut Tokens<'_>, what: &str) -> Result<u32, String> {
    let v = t.dec(what)?;
    u32::try_from(v).map_err(|_| format!("{what} too large: {v}"))
}
