use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A tag in the lexicon source (or a stored column) did not name any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} tag `{value}`")]
pub struct TagError {
    pub kind: &'static str,
    pub value: String,
}

impl TagError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Declares a closed tag enumeration with its canonical spelling and any
/// accepted aliases. Parsing is ASCII case-insensitive and ignores
/// surrounding whitespace; `Display` always writes the canonical spelling.
macro_rules! define_tag {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $($variant:ident = $text:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($text) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Ok($name::$variant);
                    }
                )+
                Err(TagError::new($label, s))
            }
        }

        #[cfg(feature = "rusqlite")]
        impl rusqlite::types::ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
                Ok(rusqlite::types::ToSqlOutput::from(self.as_str()))
            }
        }

        #[cfg(feature = "rusqlite")]
        impl rusqlite::types::FromSql for $name {
            fn column_result(
                value: rusqlite::types::ValueRef<'_>,
            ) -> rusqlite::types::FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|e| rusqlite::types::FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

define_tag! {
    PartOfSpeech ("part of speech") {
        Noun = "Noun",
        Verb = "Verb",
        Adjective = "Adjective" | "Adj",
        Pronoun = "Pronoun",
        Participle = "Participle",
        Adverb = "Adverb" | "Adv",
        Preposition = "Preposition" | "Prep",
        Conjunction = "Conjunction" | "Conj",
        Particle = "Particle",
        Article = "Article",
    }
}

/// Which Form shape (and attribute tables) a part of speech uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum FormKind {
    Verb,
    Noun,
    Adjective,
    Pronoun,
    Participle,
    /// Indeclinable or single-spelling parts of speech.
    Misc,
}

impl PartOfSpeech {
    pub const fn kind(self) -> FormKind {
        match self {
            PartOfSpeech::Verb => FormKind::Verb,
            PartOfSpeech::Noun => FormKind::Noun,
            PartOfSpeech::Adjective => FormKind::Adjective,
            PartOfSpeech::Pronoun => FormKind::Pronoun,
            PartOfSpeech::Participle => FormKind::Participle,
            PartOfSpeech::Adverb
            | PartOfSpeech::Preposition
            | PartOfSpeech::Conjunction
            | PartOfSpeech::Particle
            | PartOfSpeech::Article => FormKind::Misc,
        }
    }
}

define_tag! {
    Case ("case") {
        Nominative = "Nominative" | "Nom",
        Genitive = "Genitive" | "Gen",
        Dative = "Dative" | "Dat",
        Accusative = "Accusative" | "Acc",
        Vocative = "Vocative" | "Voc",
    }
}

define_tag! {
    Number ("number") {
        Singular = "Singular" | "Sg",
        Dual = "Dual" | "Du",
        Plural = "Plural" | "Pl",
    }
}

define_tag! {
    Gender ("gender") {
        Masculine = "Masculine" | "Masc" | "M",
        Feminine = "Feminine" | "Fem" | "F",
        Neuter = "Neuter" | "Neut" | "N",
    }
}

define_tag! {
    Person ("person") {
        First = "First" | "1" | "1st",
        Second = "Second" | "2" | "2nd",
        Third = "Third" | "3" | "3rd",
    }
}

define_tag! {
    Tense ("tense") {
        Present = "Present",
        Imperfect = "Imperfect",
        Future = "Future",
        Aorist = "Aorist",
        Perfect = "Perfect",
        Pluperfect = "Pluperfect",
        FuturePerfect = "FuturePerfect" | "Future Perfect",
    }
}

define_tag! {
    Voice ("voice") {
        Active = "Active",
        Middle = "Middle",
        Passive = "Passive",
        MiddlePassive = "MiddlePassive" | "Middle/Passive" | "MP",
    }
}

define_tag! {
    Mood ("mood") {
        Indicative = "Indicative",
        Subjunctive = "Subjunctive",
        Optative = "Optative",
        Imperative = "Imperative",
        Infinitive = "Infinitive",
        Participle = "Participle",
    }
}

define_tag! {
    PronounKind ("pronoun kind") {
        Demonstrative = "Demonstrative",
        Personal = "Personal",
        Reflexive = "Reflexive",
        Relative = "Relative",
        Interrogative = "Interrogative",
        Indefinite = "Indefinite",
    }
}

define_tag! {
    /// Verb-level flag. An empty field reads as `Regular`.
    Irregularity ("irregularity") {
        Regular = "Regular" | "",
        Deponent = "Deponent",
        Irregular = "Irregular",
    }
}

/// Reads the yes/no irregularity field of noun and adjective type lines.
pub fn parse_flag(field: &str) -> Result<bool, TagError> {
    let field = field.trim();
    const NO: [&str; 5] = ["", "regular", "false", "no", "0"];
    const YES: [&str; 4] = ["irregular", "true", "yes", "1"];
    if NO.iter().any(|t| field.eq_ignore_ascii_case(t)) {
        Ok(false)
    } else if YES.iter().any(|t| field.eq_ignore_ascii_case(t)) {
        Ok(true)
    } else {
        Err(TagError::new("irregularity flag", field))
    }
}

/// Parses a tag that may be structurally absent (empty field).
pub fn parse_optional<T>(field: &str) -> Result<Option<T>, T::Err>
where
    T: FromStr,
{
    if field.trim().is_empty() {
        Ok(None)
    } else {
        field.parse().map(Some)
    }
}
