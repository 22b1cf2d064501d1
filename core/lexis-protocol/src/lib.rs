pub mod ids;
pub mod morphology;

// Re-export core types for convenience
pub use ids::{FormId, WordId};
pub use morphology::*;

pub mod model;
pub use model::*;

pub mod word;
pub use word::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(list: [&str; 6]) -> PrincipalParts {
        PrincipalParts::new(list.map(String::from))
    }

    #[test]
    fn test_tag_parsing() {
        assert_eq!("Accusative".parse::<Case>().unwrap(), Case::Accusative);
        assert_eq!(" acc ".parse::<Case>().unwrap(), Case::Accusative);
        assert_eq!("PLURAL".parse::<Number>().unwrap(), Number::Plural);
        assert_eq!("Middle/Passive".parse::<Voice>().unwrap(), Voice::MiddlePassive);

        let err = "Ablative".parse::<Case>().unwrap_err();
        assert_eq!(err.kind, "case");
        assert_eq!(err.to_string(), "unknown case tag `Ablative`");
    }

    #[test]
    fn test_person_accepts_numerals() {
        assert_eq!("1".parse::<Person>().unwrap(), Person::First);
        assert_eq!("2nd".parse::<Person>().unwrap(), Person::Second);
        assert_eq!("third".parse::<Person>().unwrap(), Person::Third);
        assert!("4".parse::<Person>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        // Stored columns hold the Display spelling, so it has to parse back.
        for tense in Tense::ALL {
            assert_eq!(tense.to_string().parse::<Tense>().unwrap(), *tense);
        }
        for pos in PartOfSpeech::ALL {
            assert_eq!(pos.as_str().parse::<PartOfSpeech>().unwrap(), *pos);
        }
    }

    #[test]
    fn test_form_kinds() {
        assert_eq!(PartOfSpeech::Verb.kind(), FormKind::Verb);
        assert_eq!(PartOfSpeech::Participle.kind(), FormKind::Participle);
        for pos in [
            PartOfSpeech::Adverb,
            PartOfSpeech::Preposition,
            PartOfSpeech::Conjunction,
            PartOfSpeech::Particle,
            PartOfSpeech::Article,
        ] {
            assert_eq!(pos.kind(), FormKind::Misc);
        }
    }

    #[test]
    fn test_flags_and_optional_tags() {
        assert!(!parse_flag("").unwrap());
        assert!(!parse_flag("Regular").unwrap());
        assert!(parse_flag("irregular").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(parse_flag("maybe").is_err());

        assert_eq!(parse_optional::<Person>("").unwrap(), None);
        assert_eq!(parse_optional::<Person>("3").unwrap(), Some(Person::Third));
        assert_eq!("".parse::<Irregularity>().unwrap(), Irregularity::Regular);
    }

    #[test]
    fn test_face_ignores_classification() {
        let verb = |origin: &str, irregularity| {
            Form::Verb(VerbForm {
                principal_parts: parts(["λέγω", "ἐρῶ", "εἶπον", "εἴρηκα", "εἴρημαι", "ἐρρήθην"]),
                ending: "Omega".into(),
                contract: "None".into(),
                aorist: "Second".into(),
                perfect: "First".into(),
                irregularity,
                origin: origin.into(),
                definitions: vec!["say, speak".into()],
            })
        };
        let a = verb("Ch. 4", Irregularity::Regular);
        let b = verb("Ch. 9", Irregularity::Irregular);
        assert_eq!(a.face(), b.face());
        assert_eq!(a.face().len(), 6);
        assert_eq!(a.headword(), "λέγω");
        assert_eq!(a.origin(), Some("Ch. 4"));

        let participle = Form::Participle(ParticipleForm {
            principal_parts: parts(["λέγω", "ἐρῶ", "εἶπον", "εἴρηκα", "εἴρημαι", "ἐρρήθην"]),
        });
        assert_eq!(participle.face(), a.face());
        assert!(participle.definitions().is_empty());
        assert_eq!(participle.origin(), None);
    }

    #[test]
    fn test_principal_parts_need_six() {
        let five = vec!["a".to_string(); 5];
        assert!(PrincipalParts::from_fields(five).is_none());
        let six = vec!["a".to_string(); 6];
        assert!(PrincipalParts::from_fields(six).is_some());
    }

    #[test]
    fn test_word_group_keeps_insertion_order() {
        let row = |case| {
            WordAttributes::Noun(NominalWord {
                case,
                number: Number::Singular,
                gender: Gender::Feminine,
            })
        };
        let mut group = WordGroup::new();
        group.push("θεά", row(Case::Nominative));
        group.push("θεᾶς", row(Case::Genitive));
        group.push("θεά", row(Case::Vocative));

        let spellings: Vec<&str> = group.iter().map(|(s, _)| s).collect();
        assert_eq!(spellings, ["θεά", "θεᾶς"]);
        assert_eq!(group.get("θεά").unwrap().len(), 2);
        assert_eq!(group.len(), 2);
        assert_eq!(group.row_count(), 3);
    }

    #[test]
    fn test_alternates() {
        let alts: Vec<&str> = alternates("παιδεύουσι|παιδεύουσιν").collect();
        assert_eq!(alts, ["παιδεύουσι", "παιδεύουσιν"]);
        assert_eq!(alternates("").count(), 0);
        assert_eq!(alternates("a||b").count(), 2);
        assert_eq!(alternates("\"\"").count(), 0);
        assert_eq!(alternates("παιδεύει|\"\"").collect::<Vec<_>>(), ["παιδεύει"]);
    }
}
