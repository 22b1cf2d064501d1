//! Plain-text output for `lexis info` and `lexis list`.

use std::fmt::Write;

use lexis_protocol::{Form, FormId, WordAttributes, WordRecord};
use lexis_store::Lookup;

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

pub fn attributes(row: &WordAttributes) -> String {
    let optional = |tag: Option<String>| tag.unwrap_or_else(|| "-".into());
    match row {
        WordAttributes::Verb(v) => format!(
            "{} {} {} {} {}",
            optional(v.person.map(|p| p.to_string())),
            optional(v.number.map(|n| n.to_string())),
            v.tense,
            v.voice,
            v.mood
        ),
        WordAttributes::Noun(n) | WordAttributes::Adjective(n) => {
            format!("{} {} {}", n.case, n.number, n.gender)
        }
        WordAttributes::Pronoun(p) => format!(
            "{} {} {} {}",
            p.case,
            p.number,
            p.gender,
            optional(p.person.map(|p| p.to_string()))
        ),
        WordAttributes::Participle(p) => {
            format!("{} {} {} {} {}", p.case, p.number, p.gender, p.tense, p.voice)
        }
        WordAttributes::Misc(m) if m.tags.is_empty() => "-".into(),
        WordAttributes::Misc(m) => m.tags.join(" "),
    }
}

pub fn form(form: &Form) -> String {
    let face = form
        .face()
        .into_iter()
        .map(or_dash)
        .collect::<Vec<_>>()
        .join(", ");
    let detail = match form {
        Form::Verb(v) => format!(
            " ({}, {}, {}, {}, {})",
            v.ending, v.contract, v.aorist, v.perfect, v.irregularity
        ),
        Form::Noun(n) => format!(
            " ({}, {}, {}{})",
            n.gender,
            n.group,
            n.subgroup,
            if n.irregular { ", irregular" } else { "" }
        ),
        Form::Adjective(a) => format!(
            " ({}, {}{})",
            a.group,
            a.subgroup,
            if a.irregular { ", irregular" } else { "" }
        ),
        Form::Pronoun(p) => match p.person {
            Some(person) => format!(" ({person}, {})", p.kind),
            None => format!(" ({})", p.kind),
        },
        Form::Participle(_) | Form::Misc(_) => String::new(),
    };
    let origin = match form.origin() {
        Some(origin) if !origin.is_empty() => format!(" [{origin}]"),
        _ => String::new(),
    };
    format!("{} {face}{detail}{origin}", form.part_of_speech())
}

pub fn definitions(definitions: &[String]) -> String {
    let mut out = String::new();
    for (i, definition) in definitions.iter().enumerate() {
        let _ = writeln!(out, "{}: {definition}", i + 1);
    }
    out
}

pub fn lookup(lookup: &Lookup) -> String {
    let mut out = String::new();
    let word = &lookup.word;
    let _ = writeln!(
        out,
        "{} (form {}, word {}): {}",
        word.spelling,
        word.form_id,
        word.word_id,
        attributes(&word.attributes)
    );
    if let Some(f) = &lookup.form {
        let _ = writeln!(out, "  {}", form(f));
    }
    if let Some(defs) = &lookup.definitions {
        for line in definitions(defs).lines() {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

/// One line per inflected word of a form, in word id order.
pub fn paradigm(words: &[WordRecord]) -> String {
    let mut out = String::new();
    let width = words
        .iter()
        .map(|w| w.spelling.chars().count())
        .max()
        .unwrap_or(0);
    for word in words {
        let pad = width - word.spelling.chars().count();
        let _ = writeln!(
            out,
            "  {}{}  {}",
            word.spelling,
            " ".repeat(pad),
            attributes(&word.attributes)
        );
    }
    out
}

pub fn listing(forms: &[(FormId, Form)]) -> String {
    let mut out = String::new();
    for (id, f) in forms {
        let _ = writeln!(out, "{:>5}  {}", id.0, form(f));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_protocol::{
        AdjectiveForm, MiscWord, Mood, Number, ParticipleForm, Person, PrincipalParts, Tense,
        VerbWord, Voice, WordId,
    };

    #[test]
    fn test_infinitive_has_no_person() {
        let row = WordAttributes::Verb(VerbWord {
            person: None,
            number: None,
            tense: Tense::Present,
            voice: Voice::Active,
            mood: Mood::Infinitive,
        });
        assert_eq!(attributes(&row), "- - Present Active Infinitive");
        assert_eq!(attributes(&WordAttributes::Misc(MiscWord::default())), "-");
    }

    #[test]
    fn test_two_ending_adjective_shows_gap() {
        let adj = Form::Adjective(AdjectiveForm {
            masculine: "ἀθάνατος".into(),
            feminine: String::new(),
            neuter: "ἀθάνατον".into(),
            group: "Second".into(),
            subgroup: "ος-ον".into(),
            irregular: false,
            origin: "Ch. 7".into(),
            definitions: vec!["immortal".into()],
        });
        assert_eq!(
            form(&adj),
            "Adjective ἀθάνατος, -, ἀθάνατον (Second, ος-ον) [Ch. 7]"
        );
    }

    #[test]
    fn test_participle_has_no_origin() {
        let participle = Form::Participle(ParticipleForm {
            principal_parts: PrincipalParts::new(["a", "b", "c", "d", "e", "f"].map(String::from)),
        });
        assert_eq!(form(&participle), "Participle a, b, c, d, e, f");
    }

    #[test]
    fn test_paradigm_lines_align() {
        let row = |spelling: &str, mood| WordRecord {
            word_id: WordId(0),
            form_id: FormId(0),
            spelling: spelling.into(),
            unaccented: spelling.into(),
            attributes: WordAttributes::Verb(VerbWord {
                person: Some(Person::Second),
                number: Some(Number::Singular),
                tense: Tense::Present,
                voice: Voice::Active,
                mood,
            }),
        };
        let words = [row("λέγε", Mood::Imperative), row("λέγεις", Mood::Indicative)];
        assert_eq!(
            paradigm(&words),
            "  λέγε    Second Singular Present Active Imperative\n  \
             λέγεις  Second Singular Present Active Indicative\n"
        );
    }

    #[test]
    fn test_numbered_definitions() {
        let defs = vec!["in".to_string(), "among".to_string()];
        assert_eq!(definitions(&defs), "1: in\n2: among\n");
    }
}
