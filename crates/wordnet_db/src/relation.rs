use serde::Serialize;
use std::fmt;

use crate::pos::PartOfSpeech;

/// Именованное отношение по символу указателя.
/// Часть символов зависит от части речи источника (`\`, `+`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelated,
    DomainTopic,
    MemberTopic,
    DomainRegion,
    MemberRegion,
    DomainUsage,
    MemberUsage,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    ParticipleOfVerb,
    Pertainym,
    DerivedFromAdjective,
    Other,
}

impl Relation {
    pub fn from_symbol(symbol: &str, source: PartOfSpeech) -> Relation {
        use Relation::*;
        match symbol {
            "!" => Antonym,
            "@" => Hypernym,
            "@i" => InstanceHypernym,
            "~" => Hyponym,
            "~i" => InstanceHyponym,
            "#m" => MemberHolonym,
            "#s" => SubstanceHolonym,
            "#p" => PartHolonym,
            "%m" => MemberMeronym,
            "%s" => SubstanceMeronym,
            "%p" => PartMeronym,
            "=" => Attribute,
            "+" => DerivationallyRelated,
            ";c" => DomainTopic,
            "-c" => MemberTopic,
            ";r" => DomainRegion,
            "-r" => MemberRegion,
            ";u" => DomainUsage,
            "-u" => MemberUsage,
            "*" => Entailment,
            ">" => Cause,
            "^" => AlsoSee,
            "$" => VerbGroup,
            "&" => SimilarTo,
            "<" => ParticipleOfVerb,
            "\\" if source == PartOfSpeech::Adverb => DerivedFromAdjective,
            "\\" => Pertainym,
            _ => Other,
        }
    }

    pub fn name(self) -> &'static str {
        use Relation::*;
        match self {
            Antonym => "antonym",
            Hypernym => "hypernym",
            InstanceHypernym => "instance hypernym",
            Hyponym => "hyponym",
            InstanceHyponym => "instance hyponym",
            MemberHolonym => "member holonym",
            SubstanceHolonym => "substance holonym",
            PartHolonym => "part holonym",
            MemberMeronym => "member meronym",
            SubstanceMeronym => "substance meronym",
            PartMeronym => "part meronym",
            Attribute => "attribute",
            DerivationallyRelated => "derivationally related form",
            DomainTopic => "domain of synset (topic)",
            MemberTopic => "member of domain (topic)",
            DomainRegion => "domain of synset (region)",
            MemberRegion => "member of domain (region)",
            DomainUsage => "domain of synset (usage)",
            MemberUsage => "member of domain (usage)",
            Entailment => "entailment",
            Cause => "cause",
            AlsoSee => "also see",
            VerbGroup => "verb group",
            SimilarTo => "similar to",
            ParticipleOfVerb => "participle of verb",
            Pertainym => "pertainym",
            DerivedFromAdjective => "derived from adjective",
            Other => "other",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
