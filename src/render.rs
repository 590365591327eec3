// src/render.rs
use std::fmt::Write;

use wordnet_db::{Pointer, Synset};

/// Текстовая выдача для CLI: одна секция на синсет.
pub fn render_lookup(word: &str, synsets: &[Synset]) -> String {
    let mut out = String::new();
    let noun = if synsets.len() == 1 { "sense" } else { "senses" };
    let _ = writeln!(out, "{word}: {} {noun}", synsets.len());
    for (i, s) in synsets.iter().enumerate() {
        render_synset(&mut out, i + 1, s);
    }
    out
}

pub fn render_synset(out: &mut String, n: usize, s: &Synset) {
    let lemmas: Vec<String> = s.lemmas().collect();
    let _ = writeln!(
        out,
        "{n}. ({}) {}  [{:08} lex {:02}]",
        s.synset_type,
        lemmas.join(", "),
        s.offset,
        s.lex_filenum
    );
    let defs = s.definitions();
    if !defs.is_empty() {
        let _ = writeln!(out, "   {}", defs.join("; "));
    }
    for ex in s.examples() {
        let _ = writeln!(out, "   e.g. \"{ex}\"");
    }
    if !s.frames.is_empty() {
        let nums: Vec<String> = s.frames.iter().map(|f| f.frame_number.to_string()).collect();
        let _ = writeln!(out, "   frames: {}", nums.join(", "));
    }
    for p in &s.pointers {
        let _ = writeln!(out, "   {}: {}", p.relation(s.pos()), pointer_target(p));
    }
}

fn pointer_target(p: &Pointer) -> String {
    match &p.resolved {
        Some(t) => {
            let lemmas: Vec<String> = t.lemmas().collect();
            format!("{} ({})", lemmas.join(", "), t.synset_type)
        }
        None => format!("{}@{:08}", p.target_code, p.target_offset),
    }
}
