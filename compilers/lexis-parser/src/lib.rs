pub mod error;
pub mod fields;
pub mod reader;

pub use error::{Malformation, ParseError};
pub use reader::{Entry, EntryReader};

/// Parses a whole in-memory lexicon source.
pub fn parse_entries(source: &str) -> Result<Vec<Entry>, ParseError> {
    EntryReader::new(source.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_protocol::{
        Case, Form, Gender, Irregularity, Mood, Number, PartOfSpeech, Person, PronounKind, Tense,
        Voice, VerbWord, WordAttributes,
    };

    const LEGO: &str = "\
# Chapter 4 verbs
Verb,1,Ch. 4
λέγω,ἐρῶ,εἶπον,εἴρηκα,εἴρημαι,ἐρρήθην
Omega,None,Second,First
say, speak
λέγω
1,Singular,Present,Active,Indicative
!
";

    fn malformed(err: ParseError) -> (usize, Malformation) {
        match err {
            ParseError::Malformed { line, reason } => (line, reason),
            other => panic!("expected malformed encoding, got {other:?}"),
        }
    }

    #[test]
    fn test_verb_entry() {
        let entries = parse_entries(LEGO).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.part_of_speech, PartOfSpeech::Verb);
        assert_eq!(entry.origin, "Ch. 4");
        assert_eq!(entry.line, 2);

        let Form::Verb(verb) = &entry.form else {
            panic!("expected a verb form, got {:?}", entry.form);
        };
        assert_eq!(
            verb.principal_parts.as_slice(),
            ["λέγω", "ἐρῶ", "εἶπον", "εἴρηκα", "εἴρημαι", "ἐρρήθην"]
        );
        assert_eq!(verb.ending, "Omega");
        assert_eq!(verb.aorist, "Second");
        assert_eq!(verb.irregularity, Irregularity::Regular);
        assert_eq!(verb.definitions, ["say, speak"]);

        assert_eq!(
            entry.words.get("λέγω").unwrap(),
            [WordAttributes::Verb(VerbWord {
                person: Some(Person::First),
                number: Some(Number::Singular),
                tense: Tense::Present,
                voice: Voice::Active,
                mood: Mood::Indicative,
            })]
        );
    }

    #[test]
    fn test_syncretic_spellings_accumulate() {
        let source = "\
Noun,1,Ch. 2
θεά,θεᾶς,ἡ
Feminine,First,ᾱ-ᾱς
goddess
θεά
Nominative,Singular,Feminine
θεᾶς
Genitive,Singular,Feminine
θεά
Vocative,Singular,Feminine
";
        let entries = parse_entries(source).unwrap();
        let Form::Noun(noun) = &entries[0].form else {
            panic!("expected a noun");
        };
        assert_eq!(noun.gender, Gender::Feminine);
        assert!(!noun.irregular);

        let words = &entries[0].words;
        assert_eq!(words.len(), 2);
        let cases: Vec<Case> = words
            .get("θεά")
            .unwrap()
            .iter()
            .map(|row| match row {
                WordAttributes::Noun(n) => n.case,
                other => panic!("unexpected row {other:?}"),
            })
            .collect();
        assert_eq!(cases, [Case::Nominative, Case::Vocative]);
    }

    #[test]
    fn test_two_ending_adjective_and_irregular_flag() {
        let source = "\
Adjective,1,Ch. 7
ἀθάνατος,,ἀθάνατον
Second,ος-ον,Irregular
immortal
";
        let entries = parse_entries(source).unwrap();
        let Form::Adjective(adj) = &entries[0].form else {
            panic!("expected an adjective");
        };
        assert!(adj.is_two_ending());
        assert!(adj.irregular);
        assert!(entries[0].words.is_empty());
    }

    #[test]
    fn test_pronoun_person_is_optional() {
        let source = "\
Pronoun,1,Ch. 12
οὗτος,αὕτη,τοῦτο
,Demonstrative
this
οὗτος
Nominative,Singular,Masculine
";
        let entries = parse_entries(source).unwrap();
        let Form::Pronoun(pronoun) = &entries[0].form else {
            panic!("expected a pronoun");
        };
        assert_eq!(pronoun.person, None);
        assert_eq!(pronoun.kind, PronounKind::Demonstrative);
        match &entries[0].words.get("οὗτος").unwrap()[0] {
            WordAttributes::Pronoun(word) => assert_eq!(word.person, None),
            other => panic!("unexpected row {other:?}"),
        }
    }

    #[test]
    fn test_participle_reads_no_definitions() {
        // The line after the principal parts is a spelling, not a definition.
        let source = "\
Participle,0,
παιδεύω,παιδεύσω,ἐπαίδευσα,πεπαίδευκα,πεπαίδευμαι,ἐπαιδεύθην
παιδεύων
Nominative,Singular,Masculine,Present,Active
!
";
        let entries = parse_entries(source).unwrap();
        assert!(matches!(entries[0].form, Form::Participle(_)));
        assert!(entries[0].form.definitions().is_empty());
        assert_eq!(entries[0].words.len(), 1);
    }

    #[test]
    fn test_misc_entry_and_multiple_entries() {
        let source = format!(
            "{LEGO}\
Preposition,2,Ch. 3

ἐν
in
among
ἐν
Dative
"
        );
        let entries = parse_entries(&source).unwrap();
        assert_eq!(entries.len(), 2);
        let Form::Misc(misc) = &entries[1].form else {
            panic!("expected a misc form");
        };
        assert_eq!(misc.part_of_speech, PartOfSpeech::Preposition);
        assert_eq!(misc.spelling, "ἐν");
        assert_eq!(misc.definitions, ["in", "among"]);
        match &entries[1].words.get("ἐν").unwrap()[0] {
            WordAttributes::Misc(word) => assert_eq!(word.tags, ["Dative"]),
            other => panic!("unexpected row {other:?}"),
        }
    }

    #[test]
    fn test_alternates_stay_in_one_spelling() {
        let source = "\
Verb,1,Ch. 1
παιδεύω,παιδεύσω,ἐπαίδευσα,πεπαίδευκα,πεπαίδευμαι,ἐπαιδεύθην
Omega,None,First,First,Regular
teach
παιδεύουσι|παιδεύουσιν
3,Plural,Present,Active,Indicative
";
        let entries = parse_entries(source).unwrap();
        assert!(entries[0].words.get("παιδεύουσι|παιδεύουσιν").is_some());
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_entries("").unwrap().is_empty());
        assert!(parse_entries("# nothing yet\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let source = LEGO.replace('\n', "\r\n");
        let entries = parse_entries(&source).unwrap();
        let Form::Verb(verb) = &entries[0].form else {
            panic!("expected a verb");
        };
        assert_eq!(verb.definitions, ["say, speak"]);
    }

    #[test]
    fn test_bad_header() {
        let (line, reason) = malformed(parse_entries("Verb,1\n").unwrap_err());
        assert_eq!(line, 1);
        assert!(matches!(reason, Malformation::FieldCount { found: 2, .. }));

        let (_, reason) = malformed(parse_entries("Verb,one,Ch. 1\n").unwrap_err());
        assert_eq!(reason, Malformation::DefinitionCount("one".into()));

        let (_, reason) = malformed(parse_entries("Gerund,1,Ch. 1\n").unwrap_err());
        assert!(matches!(reason, Malformation::Tag(_)));
    }

    #[test]
    fn test_truncated_entry_is_an_error() {
        // Header, then nothing: not a clean end of file.
        let (_, reason) = malformed(parse_entries("Noun,1,Ch. 2\n").unwrap_err());
        assert_eq!(reason, Malformation::UnexpectedEof("noun face line"));

        // Fewer definition lines than announced.
        let source = "\
Verb,2,Ch. 4
λέγω,ἐρῶ,εἶπον,εἴρηκα,εἴρημαι,ἐρρήθην
Omega,None,Second,First
say, speak
";
        let (_, reason) = malformed(parse_entries(source).unwrap_err());
        assert_eq!(reason, Malformation::UnexpectedEof("definitions"));

        // A spelling without its attribute line.
        let source = LEGO.replace("1,Singular,Present,Active,Indicative\n!\n", "");
        let (_, reason) = malformed(parse_entries(&source).unwrap_err());
        assert_eq!(reason, Malformation::UnexpectedEof("word attributes"));
    }

    #[test]
    fn test_bad_word_attributes_report_their_line() {
        let source = LEGO.replace("Indicative", "Ablative");
        let (line, reason) = malformed(parse_entries(&source).unwrap_err());
        assert_eq!(line, 7);
        assert!(matches!(reason, Malformation::Tag(ref e) if e.kind == "mood"));
    }

    #[test]
    fn test_quoted_empty_spelling_is_kept_empty() {
        let source = "\
Verb,1,Ch. 1
παιδεύω,παιδεύσω,ἐπαίδευσα,πεπαίδευκα,πεπαίδευμαι,ἐπαιδεύθην
Omega,None,First,First
teach
\"\"
1,Singular,Present,Active,Imperative
παίδευε
2,Singular,Present,Active,Imperative
!
";
        let entries = parse_entries(source).unwrap();
        let words = &entries[0].words;
        let spellings: Vec<&str> = words.iter().map(|(s, _)| s).collect();
        assert_eq!(spellings, ["", "παίδευε"]);
        assert_eq!(words.get("").unwrap().len(), 1);
        assert!(words.get("\"\"").is_none());
        assert_eq!(lexis_protocol::alternates("").count(), 0);
    }

    #[test]
    fn test_huge_definition_count_runs_out_of_input() {
        let (line, reason) =
            malformed(parse_entries("Adverb,4294967295,Ch. 1\nεὖ\nwell\n").unwrap_err());
        assert_eq!(line, 3);
        assert_eq!(reason, Malformation::UnexpectedEof("definitions"));
    }

    #[test]
    fn test_indented_sentinel_ends_word_list() {
        let source = format!("{}  !\n{}", LEGO.replace("!\n", ""), LEGO);
        let entries = parse_entries(&source).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].words.len(), 1);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let source = format!("Verb,1\n{LEGO}");
        let mut reader = EntryReader::new(source.as_bytes());
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }
}
