use indexmap::IndexMap;

use crate::ids::{FormId, WordId};
use crate::morphology::{Case, FormKind, Gender, Mood, Number, Person, Tense, Voice};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Marker separating alternate spellings that share one attribute row.
pub const ALTERNATE_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct VerbWord {
    /// Absent for infinitives.
    pub person: Option<Person>,
    pub number: Option<Number>,
    pub tense: Tense,
    pub voice: Voice,
    pub mood: Mood,
}

/// Attribute row shared by nouns and adjectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct NominalWord {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PronounWord {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
    pub person: Option<Person>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct ParticipleWord {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
    pub tense: Tense,
    pub voice: Voice,
}

/// Free classification tags for indeclinables (the case a preposition
/// governs, an adverb's degree, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct MiscWord {
    pub tags: Vec<String>,
}

/// The part-specific attribute row of one inflected word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum WordAttributes {
    Verb(VerbWord),
    Noun(NominalWord),
    Adjective(NominalWord),
    Pronoun(PronounWord),
    Participle(ParticipleWord),
    Misc(MiscWord),
}

impl WordAttributes {
    pub fn kind(&self) -> FormKind {
        match self {
            WordAttributes::Verb(_) => FormKind::Verb,
            WordAttributes::Noun(_) => FormKind::Noun,
            WordAttributes::Adjective(_) => FormKind::Adjective,
            WordAttributes::Pronoun(_) => FormKind::Pronoun,
            WordAttributes::Participle(_) => FormKind::Participle,
            WordAttributes::Misc(_) => FormKind::Misc,
        }
    }
}

/// A stored word, as returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct WordRecord {
    pub word_id: WordId,
    pub form_id: FormId,
    pub spelling: String,
    pub unaccented: String,
    pub attributes: WordAttributes,
}

/// Spellings of one entry mapped to their attribute rows, in the order they
/// were first seen. Order matters: it fixes the word ids handed out on insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct WordGroup {
    words: IndexMap<String, Vec<WordAttributes>>,
}

impl WordGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row for `spelling`. Repeating a spelling appends to its rows
    /// (syncretism: one spelling, several readings).
    pub fn push(&mut self, spelling: impl Into<String>, attributes: WordAttributes) {
        self.words.entry(spelling.into()).or_default().push(attributes);
    }

    pub fn get(&self, spelling: &str) -> Option<&[WordAttributes]> {
        self.words.get(spelling).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WordAttributes])> {
        self.words
            .iter()
            .map(|(spelling, rows)| (spelling.as_str(), rows.as_slice()))
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of attribute rows across all spellings.
    pub fn row_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }
}

/// Written-out empty spelling slot, e.g. the missing first person of an imperative.
pub const QUOTED_EMPTY: &str = "\"\"";

/// Splits a spelling field into its non-empty alternates. A `""` alternate
/// marks an absent form and is dropped like a blank one.
pub fn alternates(spelling: &str) -> impl Iterator<Item = &str> {
    spelling
        .split(ALTERNATE_SEPARATOR)
        .map(str::trim)
        .filter(|alt| !alt.is_empty() && *alt != QUOTED_EMPTY)
}
