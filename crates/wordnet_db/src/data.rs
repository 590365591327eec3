// crates/wordnet_db/src/data.rs
use serde::Serialize;

use crate::SynsetSource;
use crate::error::{DbError, Result};
use crate::pos::{PartOfSpeech, SynsetType};
use crate::relation::Relation;
use crate::tokens::Tokens;

/// Глубина разыменования указателей. Больше одного уровня не бывает:
/// цели всегда читаются с `shallower()`, т.е. `Flat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveDepth {
    Flat,
    OneLevel,
}

impl ResolveDepth {
    pub fn from_skip(skip_pointers: bool) -> Self {
        if skip_pointers {
            ResolveDepth::Flat
        } else {
            ResolveDepth::OneLevel
        }
    }

    pub fn shallower(self) -> Self {
        ResolveDepth::Flat
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub word: String,
    pub lex_id: u32,
}

impl Word {
    /// Синтаксический маркер прилагательного: `(a)`, `(p)`, `(ip)`.
    pub fn marker(&self) -> Option<&str> {
        let open = self.word.rfind('(')?;
        self.word
            .ends_with(')')
            .then(|| &self.word[open + 1..self.word.len() - 1])
    }

    /// Слово без маркера, `_` → пробел.
    pub fn lemma(&self) -> String {
        let base = match self.marker() {
            Some(m) => &self.word[..self.word.len() - m.len() - 2],
            None => self.word.as_str(),
        };
        base.replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pointer {
    #[serde(rename = "pointerSymbol")]
    pub symbol: String,
    #[serde(rename = "synsetOffset")]
    pub target_offset: u64,
    /// Файл, в котором лежит цель
    #[serde(skip)]
    pub target_pos: PartOfSpeech,
    /// Сырой код как в строке (`s` сохраняется)
    #[serde(rename = "pos")]
    pub target_code: char,
    /// 4 hex-символа: номер слова-источника и слова-цели, `0000` значит синсеты целиком
    #[serde(rename = "sourceTargetHex")]
    pub source_target: String,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub resolved: Option<Box<Synset>>,
}

impl Pointer {
    pub fn source_word(&self) -> u8 {
        self.half(0..2)
    }

    pub fn target_word(&self) -> u8 {
        self.half(2..4)
    }

    fn half(&self, range: std::ops::Range<usize>) -> u8 {
        self.source_target
            .get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .unwrap_or(0)
    }

    /// Указатель между конкретными словами, а не синсетами целиком.
    pub fn is_lexical(&self) -> bool {
        self.source_target != "0000"
    }

    pub fn relation(&self, source: PartOfSpeech) -> Relation {
        Relation::from_symbol(&self.symbol, source)
    }
}

/// Рамка глагола: `+ f_num w_num`, w_num == 0 значит все слова синсета.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerbFrame {
    pub frame_number: u8,
    pub word_number: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Synset {
    #[serde(rename = "synsetOffset")]
    pub offset: u64,
    pub lex_filenum: u32,
    pub synset_type: SynsetType,
    pub words: Vec<Word>,
    pub pointers: Vec<Pointer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<VerbFrame>,
    pub glossary: String,
}

impl Synset {
    pub fn pos(&self) -> PartOfSpeech {
        self.synset_type.pos()
    }

    pub fn lemmas(&self) -> impl Iterator<Item = String> + '_ {
        self.words.iter().map(Word::lemma)
    }

    /// Части глоссы без кавычек: определения.
    pub fn definitions(&self) -> Vec<&str> {
        gloss_parts(&self.glossary)
            .into_iter()
            .filter(|p| !p.starts_with('"'))
            .collect()
    }

    /// Части глоссы в кавычках: примеры употребления (кавычки сняты).
    pub fn examples(&self) -> Vec<&str> {
        gloss_parts(&self.glossary)
            .into_iter()
            .filter(|p| p.starts_with('"'))
            .map(|p| p.trim_matches('"'))
            .collect()
    }

    /// Заполняет `resolved` у каждого указателя. Цели читаются плоско,
    /// ошибка любой цели проваливает всю операцию.
    pub fn resolve_pointers<S>(&mut self, source: &S, depth: ResolveDepth) -> Result<()>
    where
        S: SynsetSource + ?Sized,
    {
        if depth == ResolveDepth::Flat {
            return Ok(());
        }
        for p in &mut self.pointers {
            let target = source.fetch(p.target_pos, p.target_offset, depth.shallower())?;
            p.resolved = Some(Box::new(target));
        }
        Ok(())
    }

    /// Максимальная глубина вложенных `resolved` (для проверок инварианта).
    pub fn resolved_depth(&self) -> u8 {
        self.pointers
            .iter()
            .filter_map(|p| p.resolved.as_ref())
            .map(|s| 1 + s.resolved_depth())
            .max()
            .unwrap_or(0)
    }
}

/// Делит глоссу по `;`, не разрывая кавычки.
fn gloss_parts(gloss: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut in_quote = false;
    let mut start = 0;
    for (i, c) in gloss.char_indices() {
        match c {
            '"' => in_quote = !in_quote,
            ';' if !in_quote => {
                out.push(gloss[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(gloss[start..].trim());
    out.retain(|p| !p.is_empty());
    out
}

/// Разбор строки data-файла. Основания счётчиков разные:
/// w_cnt и lex_id в hex, оффсеты и p_cnt в decimal.
pub fn parse_data_line(line: &str) -> Result<Synset> {
    parse_synset(line).map_err(|reason| DbError::MalformedDataLine {
        line: line.to_string(),
        reason,
    })
}

fn parse_synset(line: &str) -> Result<Synset, String> {
    let (meta, glossary) = match line.split_once('|') {
        Some((m, g)) => (m, g.trim().to_string()),
        None => (line, String::new()),
    };
    let mut t = Tokens::new(meta);

    let offset = t.dec("synset_offset")?;
    let lex_filenum = narrow(t.dec("lex_filenum")?, "lex_filenum")?;
    let ss_tok = t.next("ss_type")?;
    let synset_type =
        SynsetType::from_code(ss_tok).ok_or_else(|| format!("unknown ss_type {ss_tok:?}"))?;

    let word_count = t.hex("w_cnt")?;
    let mut words = Vec::with_capacity(word_count.min(64) as usize);
    for _ in 0..word_count {
        let word = t.next("word")?.to_string();
        let lex_id = narrow(t.hex("lex_id")?, "lex_id")?;
        words.push(Word { word, lex_id });
    }

    let pointer_count = t.dec("p_cnt")?;
    let mut pointers = Vec::with_capacity(pointer_count.min(256) as usize);
    for _ in 0..pointer_count {
        pointers.push(parse_pointer(&mut t)?);
    }

    let mut frames = Vec::new();
    if synset_type == SynsetType::Verb {
        if let Some(tok) = t.try_next() {
            let frame_count = crate::tokens::parse_radix(tok, 10)
                .ok_or_else(|| format!("f_cnt is not decimal: {tok:?}"))?;
            for _ in 0..frame_count {
                let plus = t.next("frame marker")?;
                if plus != "+" {
                    return Err(format!("expected '+' before frame, got {plus:?}"));
                }
                let frame_number = narrow(t.dec("f_num")?, "f_num")?;
                let word_number = narrow(t.hex("w_num")?, "w_num")?;
                frames.push(VerbFrame {
                    frame_number,
                    word_number,
                });
            }
        }
    }

    let left = t.remaining();
    if left > 0 {
        return Err(format!("{left} unexpected trailing tokens"));
    }

    Ok(Synset {
        offset,
        lex_filenum,
        synset_type,
        words,
        pointers,
        frames,
        glossary,
    })
}

fn parse_pointer(t: &mut Tokens<'_>) -> Result<Pointer, String> {
    let symbol = t.next("pointer_symbol")?.to_string();
    let target_offset = t.dec("pointer synset_offset")?;
    let pos_tok = t.next("pointer pos")?;
    let target_pos = PartOfSpeech::from_code(pos_tok)
        .ok_or_else(|| format!("unknown pointer pos {pos_tok:?}"))?;
    let source_target = t.next("source/target")?;
    if source_target.len() != 4 || crate::tokens::parse_radix(source_target, 16).is_none() {
        return Err(format!("source/target is not 4 hex digits: {source_target:?}"));
    }
    Ok(Pointer {
        symbol,
        target_offset,
        target_pos,
        target_code: pos_tok.chars().next().unwrap_or('?'),
        source_target: source_target.to_string(),
        resolved: None,
    })
}

fn narrow<T: TryFrom<u64>>(v: u64, what: &str) -> Result<T, String> {
    T::try_from(v).map_err(|_| format!("{what} out of range: {v}"))
}
