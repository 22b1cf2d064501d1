use crate::morphology::{FormKind, Gender, Irregularity, PartOfSpeech, Person, PronounKind};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// The six principal parts of a verb, in the traditional order:
/// present, future, aorist, perfect active, perfect middle/passive, aorist passive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PrincipalParts(pub [String; 6]);

impl PrincipalParts {
    pub fn new(parts: [String; 6]) -> Self {
        Self(parts)
    }

    /// Builds from a field list, which must hold exactly six entries.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        <[String; 6]>::try_from(fields).ok().map(Self)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The first principal part, used as the dictionary headword.
    pub fn present(&self) -> &str {
        &self.0[0]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct VerbForm {
    pub principal_parts: PrincipalParts,
    /// Ω or μι verb.
    pub ending: String,
    pub contract: String,
    pub aorist: String,
    pub perfect: String,
    pub irregularity: Irregularity,
    pub origin: String,
    pub definitions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct NounForm {
    pub nominative: String,
    pub genitive: String,
    pub article: String,
    pub gender: Gender,
    /// Major declension group (1st, 2nd, 3rd).
    pub group: String,
    /// Minor subgroup, e.g. the nominative/genitive ending pair.
    pub subgroup: String,
    pub irregular: bool,
    pub origin: String,
    pub definitions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct AdjectiveForm {
    pub masculine: String,
    /// Empty for two-ending adjectives.
    pub feminine: String,
    pub neuter: String,
    pub group: String,
    pub subgroup: String,
    pub irregular: bool,
    pub origin: String,
    pub definitions: Vec<String>,
}

impl AdjectiveForm {
    pub fn is_two_ending(&self) -> bool {
        self.feminine.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PronounForm {
    pub masculine: String,
    pub feminine: String,
    pub neuter: String,
    pub person: Option<Person>,
    pub kind: PronounKind,
    pub origin: String,
    pub definitions: Vec<String>,
}

/// A participle borrows its definitions (and origin) from the verb whose
/// principal parts it shares.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct ParticipleForm {
    pub principal_parts: PrincipalParts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct MiscForm {
    pub part_of_speech: PartOfSpeech,
    pub spelling: String,
    pub origin: String,
    pub definitions: Vec<String>,
}

/// The lemma-level paradigm shared by a family of inflected words.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Form {
    Verb(VerbForm),
    Noun(NounForm),
    Adjective(AdjectiveForm),
    Pronoun(PronounForm),
    Participle(ParticipleForm),
    Misc(MiscForm),
}

impl Form {
    pub fn part_of_speech(&self) -> PartOfSpeech {
        match self {
            Form::Verb(_) => PartOfSpeech::Verb,
            Form::Noun(_) => PartOfSpeech::Noun,
            Form::Adjective(_) => PartOfSpeech::Adjective,
            Form::Pronoun(_) => PartOfSpeech::Pronoun,
            Form::Participle(_) => PartOfSpeech::Participle,
            Form::Misc(misc) => misc.part_of_speech,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.part_of_speech().kind()
    }

    /// Lesson or chapter tag. Participles carry none of their own.
    pub fn origin(&self) -> Option<&str> {
        match self {
            Form::Verb(f) => Some(f.origin.as_str()),
            Form::Noun(f) => Some(f.origin.as_str()),
            Form::Adjective(f) => Some(f.origin.as_str()),
            Form::Pronoun(f) => Some(f.origin.as_str()),
            Form::Participle(_) => None,
            Form::Misc(f) => Some(f.origin.as_str()),
        }
    }

    pub fn definitions(&self) -> &[String] {
        match self {
            Form::Verb(f) => &f.definitions,
            Form::Noun(f) => &f.definitions,
            Form::Adjective(f) => &f.definitions,
            Form::Pronoun(f) => &f.definitions,
            Form::Participle(_) => &[],
            Form::Misc(f) => &f.definitions,
        }
    }

    /// The spelling-bearing fields that identify this paradigm within its
    /// part of speech. Origin and classification tags are not part of it.
    pub fn face(&self) -> Vec<&str> {
        match self {
            Form::Verb(VerbForm {
                principal_parts, ..
            })
            | Form::Participle(ParticipleForm { principal_parts }) => {
                principal_parts.as_slice().iter().map(String::as_str).collect()
            }
            Form::Noun(f) => vec![f.nominative.as_str(), f.genitive.as_str(), f.article.as_str()],
            Form::Adjective(f) => vec![f.masculine.as_str(), f.feminine.as_str(), f.neuter.as_str()],
            Form::Pronoun(f) => vec![f.masculine.as_str(), f.feminine.as_str(), f.neuter.as_str()],
            Form::Misc(f) => vec![f.spelling.as_str()],
        }
    }

    /// Headword used when reporting on the form.
    pub fn headword(&self) -> &str {
        match self {
            Form::Verb(f) => f.principal_parts.present(),
            Form::Participle(f) => f.principal_parts.present(),
            Form::Noun(f) => &f.nominative,
            Form::Adjective(f) => &f.masculine,
            Form::Pronoun(f) => &f.masculine,
            Form::Misc(f) => &f.spelling,
        }
    }
}
