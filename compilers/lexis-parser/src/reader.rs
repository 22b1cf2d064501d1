use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::mem::take;
use std::ops::RangeInclusive;
use std::path::Path;

use lexis_protocol::{
    parse_flag, parse_optional, AdjectiveForm, Form, FormKind, Gender, Irregularity, MiscForm, MiscWord,
    NominalWord, NounForm, PartOfSpeech, ParticipleForm, ParticipleWord, PrincipalParts,
    Person, PronounForm, PronounKind, PronounWord, TagError, VerbForm, VerbWord, WordAttributes, WordGroup,
};

use crate::error::{Malformation, ParseError};
use crate::fields::{clean_spelling, is_comment, is_sentinel, parse_count, split_fields};

/// One decoded lexicon entry: a Form and the words that realize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub part_of_speech: PartOfSpeech,
    pub origin: String,
    pub form: Form,
    pub words: WordGroup,
    /// Line number of the entry header.
    pub line: usize,
}

struct Header {
    part_of_speech: PartOfSpeech,
    definition_count: usize,
    origin: String,
    line: usize,
}

/// Accepted field counts for one kind of line.
struct Shape {
    what: &'static str,
    fields: RangeInclusive<usize>,
    expected: &'static str,
}

impl Shape {
    fn check(&self, found: usize) -> Result<(), Malformation> {
        if self.fields.contains(&found) {
            Ok(())
        } else {
            Err(Malformation::FieldCount {
                what: self.what,
                expected: self.expected,
                found,
            })
        }
    }
}

const HEADER: Shape = Shape { what: "entry header", fields: 3..=3, expected: "3" };
const PRINCIPAL_PARTS: Shape = Shape { what: "principal parts line", fields: 6..=6, expected: "6" };
const NOUN_FACE: Shape = Shape { what: "noun face line", fields: 3..=3, expected: "3" };
const ADJECTIVE_FACE: Shape = Shape { what: "adjective face line", fields: 3..=3, expected: "3" };
const PRONOUN_FACE: Shape = Shape { what: "pronoun face line", fields: 3..=3, expected: "3" };
const MISC_FACE: Shape = Shape { what: "spelling line", fields: 1..=1, expected: "1" };
const VERB_TYPE: Shape = Shape { what: "verb type line", fields: 4..=5, expected: "4 or 5" };
const NOUN_TYPE: Shape = Shape { what: "noun type line", fields: 3..=4, expected: "3 or 4" };
const ADJECTIVE_TYPE: Shape = Shape { what: "adjective type line", fields: 2..=3, expected: "2 or 3" };
const PRONOUN_TYPE: Shape = Shape { what: "pronoun type line", fields: 2..=2, expected: "2" };
const VERB_WORD: Shape = Shape { what: "verb word attributes", fields: 5..=5, expected: "5" };
const NOMINAL_WORD: Shape = Shape { what: "declined word attributes", fields: 3..=3, expected: "3" };
const PRONOUN_WORD: Shape = Shape { what: "pronoun word attributes", fields: 3..=4, expected: "3 or 4" };
const PARTICIPLE_WORD: Shape = Shape { what: "participle word attributes", fields: 5..=5, expected: "5" };
const MISC_WORD: Shape = Shape { what: "word attributes", fields: 1..=usize::MAX, expected: "at least 1" };

fn at(line: usize) -> impl Fn(TagError) -> ParseError {
    move |e| ParseError::malformed(line, e)
}

/// Streams entries out of the line-oriented lexicon encoding.
///
/// Entry layout (blank and `#` lines are skipped everywhere):
///
/// ```text
/// Verb,1,Ch. 4                          header: part of speech, definition count, origin
/// λέγω,ἐρῶ,εἶπον,εἴρηκα,εἴρημαι,ἐρρήθην  face line
/// Omega,None,Second,First               type line (not for participles and misc)
/// say, speak                            definition lines (never for participles)
/// λέγω                                  spelling line
/// 1,Singular,Present,Active,Indicative  attribute line
/// !                                     end of the word list (or end of input)
/// ```
///
/// End of input before a header is the normal end of the stream. End of input
/// anywhere after a header, other than where a spelling line could start, is
/// reported as malformed rather than silently truncating the lexicon.
pub struct EntryReader<R> {
    lines: Lines<R>,
    line_no: usize,
    finished: bool,
}

impl EntryReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> EntryReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            finished: false,
        }
    }

    /// Reads the next complete entry, `Ok(None)` once the source is exhausted.
    pub fn next_entry(&mut self) -> Result<Option<Entry>, ParseError> {
        let Some(header) = self.read_header()? else {
            return Ok(None);
        };

        let form = match header.part_of_speech.kind() {
            FormKind::Verb => Form::Verb(self.read_verb(&header)?),
            FormKind::Noun => Form::Noun(self.read_noun(&header)?),
            FormKind::Adjective => Form::Adjective(self.read_adjective(&header)?),
            FormKind::Pronoun => Form::Pronoun(self.read_pronoun(&header)?),
            FormKind::Participle => Form::Participle(self.read_participle()?),
            FormKind::Misc => Form::Misc(self.read_misc(&header)?),
        };
        let words = self.read_words(header.part_of_speech.kind())?;

        log::debug!(
            "line {}: {} `{}` with {} spellings",
            header.line,
            header.part_of_speech,
            form.headword(),
            words.len()
        );

        Ok(Some(Entry {
            part_of_speech: header.part_of_speech,
            origin: header.origin,
            form,
            words,
            line: header.line,
        }))
    }

    /// Next data line and its number, skipping comments.
    fn next_line(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        for line in self.lines.by_ref() {
            let mut line = line?;
            self.line_no += 1;
            if line.ends_with('\r') {
                line.pop();
            }
            if !is_comment(&line) {
                return Ok(Some((self.line_no, line)));
            }
        }
        Ok(None)
    }

    fn require_line(&mut self, what: &'static str) -> Result<(usize, String), ParseError> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(ParseError::malformed(
                self.line_no,
                Malformation::UnexpectedEof(what),
            )),
        }
    }

    fn read_fields(&mut self, shape: &Shape) -> Result<(usize, Vec<String>), ParseError> {
        let (line, text) = self.require_line(shape.what)?;
        let fields = split_fields(&text);
        shape
            .check(fields.len())
            .map_err(|reason| ParseError::malformed(line, reason))?;
        Ok((line, fields))
    }

    fn read_header(&mut self) -> Result<Option<Header>, ParseError> {
        let Some((line, text)) = self.next_line()? else {
            return Ok(None);
        };
        let mut fields = split_fields(&text);
        HEADER
            .check(fields.len())
            .map_err(|reason| ParseError::malformed(line, reason))?;

        let part_of_speech: PartOfSpeech = fields[0].parse().map_err(at(line))?;
        let count = &fields[1];
        let definition_count = match (part_of_speech, parse_count(count)) {
            (PartOfSpeech::Participle, _) if count.is_empty() => 0,
            (_, Some(n)) => n,
            (_, None) => {
                return Err(ParseError::malformed(
                    line,
                    Malformation::DefinitionCount(count.clone()),
                ))
            }
        };
        if part_of_speech == PartOfSpeech::Participle && definition_count > 0 {
            log::warn!(
                "line {line}: participles borrow their verb's definitions, ignoring count {definition_count}"
            );
        }

        Ok(Some(Header {
            part_of_speech,
            definition_count,
            origin: take(&mut fields[2]),
            line,
        }))
    }

    fn read_principal_parts(&mut self) -> Result<PrincipalParts, ParseError> {
        let (line, fields) = self.read_fields(&PRINCIPAL_PARTS)?;
        let found = fields.len();
        PrincipalParts::from_fields(fields).ok_or_else(|| {
            ParseError::malformed(
                line,
                Malformation::FieldCount {
                    what: PRINCIPAL_PARTS.what,
                    expected: PRINCIPAL_PARTS.expected,
                    found,
                },
            )
        })
    }

    fn read_definitions(&mut self, count: usize) -> Result<Vec<String>, ParseError> {
        let mut definitions = Vec::new();
        for _ in 0..count {
            let (_, text) = self.require_line("definitions")?;
            definitions.push(text);
        }
        Ok(definitions)
    }

    fn read_verb(&mut self, header: &Header) -> Result<VerbForm, ParseError> {
        let principal_parts = self.read_principal_parts()?;
        let (line, mut ty) = self.read_fields(&VERB_TYPE)?;
        let irregularity = match ty.get(4) {
            Some(field) => field.parse().map_err(at(line))?,
            None => Irregularity::Regular,
        };
        let definitions = self.read_definitions(header.definition_count)?;

        Ok(VerbForm {
            principal_parts,
            ending: take(&mut ty[0]),
            contract: take(&mut ty[1]),
            aorist: take(&mut ty[2]),
            perfect: take(&mut ty[3]),
            irregularity,
            origin: header.origin.clone(),
            definitions,
        })
    }

    fn read_noun(&mut self, header: &Header) -> Result<NounForm, ParseError> {
        let (_, mut face) = self.read_fields(&NOUN_FACE)?;
        let (line, mut ty) = self.read_fields(&NOUN_TYPE)?;
        let gender: Gender = ty[0].parse().map_err(at(line))?;
        let irregular = match ty.get(3) {
            Some(field) => parse_flag(field).map_err(at(line))?,
            None => false,
        };
        let definitions = self.read_definitions(header.definition_count)?;

        Ok(NounForm {
            nominative: take(&mut face[0]),
            genitive: take(&mut face[1]),
            article: take(&mut face[2]),
            gender,
            group: take(&mut ty[1]),
            subgroup: take(&mut ty[2]),
            irregular,
            origin: header.origin.clone(),
            definitions,
        })
    }

    fn read_adjective(&mut self, header: &Header) -> Result<AdjectiveForm, ParseError> {
        let (_, mut face) = self.read_fields(&ADJECTIVE_FACE)?;
        let (line, mut ty) = self.read_fields(&ADJECTIVE_TYPE)?;
        let irregular = match ty.get(2) {
            Some(field) => parse_flag(field).map_err(at(line))?,
            None => false,
        };
        let definitions = self.read_definitions(header.definition_count)?;

        Ok(AdjectiveForm {
            masculine: take(&mut face[0]),
            feminine: take(&mut face[1]),
            neuter: take(&mut face[2]),
            group: take(&mut ty[0]),
            subgroup: take(&mut ty[1]),
            irregular,
            origin: header.origin.clone(),
            definitions,
        })
    }

    fn read_pronoun(&mut self, header: &Header) -> Result<PronounForm, ParseError> {
        let (_, mut face) = self.read_fields(&PRONOUN_FACE)?;
        let (line, ty) = self.read_fields(&PRONOUN_TYPE)?;
        let person = parse_optional::<Person>(&ty[0]).map_err(at(line))?;
        let kind: PronounKind = ty[1].parse().map_err(at(line))?;
        let definitions = self.read_definitions(header.definition_count)?;

        Ok(PronounForm {
            masculine: take(&mut face[0]),
            feminine: take(&mut face[1]),
            neuter: take(&mut face[2]),
            person,
            kind,
            origin: header.origin.clone(),
            definitions,
        })
    }

    fn read_participle(&mut self) -> Result<ParticipleForm, ParseError> {
        let principal_parts = self.read_principal_parts()?;
        Ok(ParticipleForm { principal_parts })
    }

    fn read_misc(&mut self, header: &Header) -> Result<MiscForm, ParseError> {
        let (_, mut face) = self.read_fields(&MISC_FACE)?;
        let definitions = self.read_definitions(header.definition_count)?;

        Ok(MiscForm {
            part_of_speech: header.part_of_speech,
            spelling: take(&mut face[0]),
            origin: header.origin.clone(),
            definitions,
        })
    }

    fn read_words(&mut self, kind: FormKind) -> Result<WordGroup, ParseError> {
        let mut words = WordGroup::new();
        while let Some((_, spelling)) = self.next_line()? {
            if is_sentinel(&spelling) {
                break;
            }
            let (line, text) = self.require_line("word attributes")?;
            let attributes = parse_word(kind, &split_fields(&text))
                .map_err(|reason| ParseError::malformed(line, reason))?;
            words.push(clean_spelling(&spelling), attributes);
        }
        Ok(words)
    }
}

impl<R: BufRead> Iterator for EntryReader<R> {
    type Item = Result<Entry, ParseError>;

    /// Yields entries until the source is exhausted or the first error,
    /// after which it stays exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let next = self.next_entry().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.finished = true;
        }
        next
    }
}

fn nominal(fields: &[String]) -> Result<NominalWord, Malformation> {
    Ok(NominalWord {
        case: fields[0].parse()?,
        number: fields[1].parse()?,
        gender: fields[2].parse()?,
    })
}

/// Decodes one attribute line for a word of the given form kind.
fn parse_word(kind: FormKind, fields: &[String]) -> Result<WordAttributes, Malformation> {
    let shape = match kind {
        FormKind::Verb => &VERB_WORD,
        FormKind::Noun | FormKind::Adjective => &NOMINAL_WORD,
        FormKind::Pronoun => &PRONOUN_WORD,
        FormKind::Participle => &PARTICIPLE_WORD,
        FormKind::Misc => &MISC_WORD,
    };
    shape.check(fields.len())?;

    let attributes = match kind {
        FormKind::Verb => WordAttributes::Verb(VerbWord {
            person: parse_optional(&fields[0])?,
            number: parse_optional(&fields[1])?,
            tense: fields[2].parse()?,
            voice: fields[3].parse()?,
            mood: fields[4].parse()?,
        }),
        FormKind::Noun => WordAttributes::Noun(nominal(fields)?),
        FormKind::Adjective => WordAttributes::Adjective(nominal(fields)?),
        FormKind::Pronoun => WordAttributes::Pronoun(PronounWord {
            case: fields[0].parse()?,
            number: fields[1].parse()?,
            gender: fields[2].parse()?,
            person: match fields.get(3) {
                Some(field) => parse_optional(field)?,
                None => None,
            },
        }),
        FormKind::Participle => WordAttributes::Participle(ParticipleWord {
            case: fields[0].parse()?,
            number: fields[1].parse()?,
            gender: fields[2].parse()?,
            tense: fields[3].parse()?,
            voice: fields[4].parse()?,
        }),
        FormKind::Misc => WordAttributes::Misc(MiscWord {
            tags: fields.iter().filter(|f| !f.is_empty()).cloned().collect(),
        }),
    };
    Ok(attributes)
}
