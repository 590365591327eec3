use std::path::PathBuf;
use wordnet_db::{
    Database, DbError, DbOptions, PartOfSpeech, Relation, ResolveDepth, SynsetType, VerbFrame,
};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/db")
}

fn load() -> Database {
    Database::load(fixture_dir(), &DbOptions::default()).unwrap()
}

#[test]
fn lookup_test_golden() {
    let db = load();
    let res = db.lookup("test", false).unwrap();
    assert_eq!(res.len(), 2);

    // сначала noun (файлы грузятся adj, adv, noun, verb), потом verb
    let noun = &res[0];
    assert_eq!(noun.offset, 436);
    assert_eq!(noun.lex_filenum, 4);
    assert_eq!(noun.synset_type, SynsetType::Noun);
    let words: Vec<&str> = noun.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, ["test", "trial", "run"]);
    assert_eq!(
        noun.glossary,
        r#"the act of testing something; "in the experimental trials the amount of carbon was measured separately"; "he called each flip of the coin a new trial""#
    );
    let ptrs: Vec<(&str, u64, char, &str)> = noun
        .pointers
        .iter()
        .map(|p| (p.symbol.as_str(), p.target_offset, p.target_code, p.source_target.as_str()))
        .collect();
    assert_eq!(
        ptrs,
        [("@", 300, 'n', "0000"), ("~", 957, 'n', "0000"), ("+", 424, 'v', "0101")]
    );

    let hyper = noun.pointers[0].resolved.as_ref().unwrap();
    assert_eq!(hyper.words[0].word, "activity");
    let derived = noun.pointers[2].resolved.as_ref().unwrap();
    assert_eq!(derived.synset_type, SynsetType::Verb);
    assert_eq!(derived.offset, 424);

    let verb = &res[1];
    assert_eq!(verb.offset, 424);
    assert_eq!(verb.lex_filenum, 31);
    assert_eq!(verb.words.len(), 6);
    assert_eq!(verb.words[3].word, "try_out");
    assert_eq!(
        verb.frames,
        [
            VerbFrame { frame_number: 8, word_number: 0 },
            VerbFrame { frame_number: 11, word_number: 1 },
        ]
    );
    assert!(verb.glossary.starts_with("put to the test, as for its quality"));
}

#[test]
fn resolution_stops_after_one_level() {
    let db = load();
    for s in db.lookup("test", false).unwrap() {
        assert_eq!(s.resolved_depth(), 1);
        for p in &s.pointers {
            let target = p.resolved.as_ref().unwrap();
            assert!(target.pointers.iter().all(|tp| tp.resolved.is_none()));
        }
    }
}

#[test]
fn skip_pointers_leaves_them_raw() {
    let db = load();
    let res = db.lookup("test", true).unwrap();
    assert_eq!(res[0].pointers.len(), 3);
    assert!(res.iter().all(|s| s.resolved_depth() == 0));
}

#[test]
fn unknown_word() {
    let db = load();
    let err = db.lookup("zzqxnotaword", false).unwrap_err();
    assert!(matches!(err, DbError::WordNotFound(ref w) if w == "zzqxnotaword"));
    assert!(err.is_not_found());
}

#[test]
fn multi_word_lemma() {
    let db = load();
    let res = db.lookup("ice cream", true).unwrap();
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].offset, 1152);
    assert_eq!(res[0].lemmas().collect::<Vec<_>>(), ["ice cream", "icecream"]);
    // нормализованный ключ тоже находит
    assert_eq!(db.lookup("ice_cream", true).unwrap(), res);
}

#[test]
fn well_in_every_pos_in_file_order() {
    let db = load();
    let res = db.lookup("well", false).unwrap();
    let got: Vec<(PartOfSpeech, u64)> = res.iter().map(|s| (s.pos(), s.offset)).collect();
    assert_eq!(
        got,
        [
            (PartOfSpeech::Adjective, 300),
            (PartOfSpeech::Adverb, 300),
            (PartOfSpeech::Noun, 1376),
            (PartOfSpeech::Verb, 822),
        ]
    );
    // глагол без указателей: резолвить нечего
    assert!(res[3].pointers.is_empty());
}

#[test]
fn adverb_backslash_is_derived_from_adjective() {
    let db = load();
    let adv = &db.lookup("well", false).unwrap()[1];
    let p = &adv.pointers[1];
    assert_eq!(p.relation(adv.pos()), Relation::DerivedFromAdjective);
    let target = p.resolved.as_ref().unwrap();
    assert_eq!(target.synset_type, SynsetType::Adjective);
    assert_eq!(target.offset, 300);

    let sanguine = &db.lookup("sanguine", false).unwrap()[0];
    assert_eq!(sanguine.pointers[0].relation(sanguine.pos()), Relation::Pertainym);
    assert_eq!(sanguine.pointers[0].resolved.as_ref().unwrap().words.len(), 10);
}

#[test]
fn satellite_target_is_read_from_adjective_file() {
    let db = load();
    let ill = &db.lookup("ill", false).unwrap()[0];
    let sim = ill.pointers.iter().find(|p| p.symbol == "&").unwrap();
    assert_eq!(sim.target_code, 's');
    let target = sim.resolved.as_ref().unwrap();
    assert_eq!(target.synset_type, SynsetType::AdjectiveSatellite);
    assert_eq!(target.words[0].word, "sickly");
}

#[test]
fn hex_word_count_and_lex_ids() {
    let db = load();
    let blood = &db.lookup("blood", true).unwrap()[0];
    assert_eq!(blood.words.len(), 10);
    assert_eq!(blood.words[8].lex_id, 10);
    assert_eq!(blood.words[9].lex_id, 11);
}

#[test]
fn lookup_senses_returns_every_offset() {
    let db = load();
    let senses = db.lookup_senses("test", true).unwrap();
    let got: Vec<(PartOfSpeech, u64)> = senses.iter().map(|s| (s.pos(), s.offset)).collect();
    assert_eq!(
        got,
        [
            (PartOfSpeech::Noun, 436),
            (PartOfSpeech::Noun, 687),
            (PartOfSpeech::Verb, 424),
            (PartOfSpeech::Verb, 686),
        ]
    );
}

#[test]
fn list_is_distinct_unsorted_with_spaces() {
    let db = load();
    let all = db.list();
    assert_eq!(all.len(), 41);
    assert_eq!(db.index().entry_count(), 46);
    assert_eq!(all.first().map(String::as_str), Some("ill"));
    assert_eq!(all.last().map(String::as_str), Some("try out"));
    assert!(all.iter().any(|l| l == "ice cream"));
    assert!(all.iter().all(|l| !l.contains('_')));
    assert_eq!(all.iter().filter(|l| *l == "well").count(), 1);
}

#[test]
fn index_entry_matches_disk_line() {
    let db = load();
    let e = &db.index().get("test")[0];
    assert_eq!(e.pointer_symbols, ["@", "~", "+"]);
    assert_eq!(e.synset_offsets, [436, 687]);
    assert_eq!(e.sense_count, 2);
    assert_eq!(e.tag_sense_count, 1);
}

#[test]
fn store_fetch_by_address() {
    let db = load();
    let s = db
        .store()
        .fetch(PartOfSpeech::Adverb, 473, ResolveDepth::Flat)
        .unwrap();
    assert_eq!(s.words[0].word, "badly");
}

#[test]
fn json_shape_of_lookup() {
    let db = load();
    let res = db.lookup("test", false).unwrap();
    let v = serde_json::to_value(&res).unwrap();
    assert_eq!(v[0]["synsetOffset"], 436);
    assert_eq!(v[0]["lexFilenum"], 4);
    assert_eq!(v[0]["synsetType"], "noun");
    assert_eq!(v[0]["pointers"][2]["pos"], "v");
    assert_eq!(v[0]["pointers"][2]["data"]["words"][0]["word"], "test");
    assert_eq!(v[1]["frames"][1]["frameNumber"], 11);
}
