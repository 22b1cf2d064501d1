//! Row-level reads and writes. Everything here takes a plain `Connection` so
//! it runs the same inside or outside a transaction; the `Lexicon` methods
//! decide the transaction boundaries.

use lexis_protocol::{
    AdjectiveForm, Form, FormId, FormKind, MiscForm, MiscWord, NominalWord, NounForm,
    PartOfSpeech, ParticipleForm, ParticipleWord, PrincipalParts, PronounForm, PronounWord,
    VerbForm, VerbWord, WordAttributes, WordId, WordRecord,
};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};

use crate::schema::TAG_SEPARATOR;

const FIND_VERB: &str = "SELECT FormID FROM VerbForms
    WHERE Part1 = ?1 AND Part2 = ?2 AND Part3 = ?3 AND Part4 = ?4 AND Part5 = ?5 AND Part6 = ?6
    ORDER BY FormID LIMIT 1";
const FIND_PARTICIPLE: &str = "SELECT FormID FROM ParticipleForms
    WHERE Part1 = ?1 AND Part2 = ?2 AND Part3 = ?3 AND Part4 = ?4 AND Part5 = ?5 AND Part6 = ?6
    ORDER BY FormID LIMIT 1";
const FIND_NOUN: &str = "SELECT FormID FROM NounForms
    WHERE Nominative = ?1 AND Genitive = ?2 AND Article = ?3
    ORDER BY FormID LIMIT 1";
const FIND_ADJECTIVE: &str = "SELECT FormID FROM AdjectiveForms
    WHERE Masculine = ?1 AND Feminine = ?2 AND Neuter = ?3
    ORDER BY FormID LIMIT 1";
const FIND_PRONOUN: &str = "SELECT FormID FROM PronounForms
    WHERE Masculine = ?1 AND Feminine = ?2 AND Neuter = ?3
    ORDER BY FormID LIMIT 1";
const FIND_MISC: &str = "SELECT FormID FROM MiscForms
    WHERE PartOfSpeech = ?1 AND Spelling = ?2
    ORDER BY FormID LIMIT 1";

/// Which spelling column a word lookup matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpellingColumn {
    Accented,
    Unaccented,
}

/// Looks a form up by its face attributes only.
pub(crate) fn find_form(conn: &Connection, form: &Form) -> rusqlite::Result<Option<FormId>> {
    let (sql, values) = match form {
        Form::Verb(_) => (FIND_VERB, form.face()),
        Form::Participle(_) => (FIND_PARTICIPLE, form.face()),
        Form::Noun(_) => (FIND_NOUN, form.face()),
        Form::Adjective(_) => (FIND_ADJECTIVE, form.face()),
        Form::Pronoun(_) => (FIND_PRONOUN, form.face()),
        Form::Misc(misc) => {
            let mut values = vec![misc.part_of_speech.as_str()];
            values.extend(form.face());
            (FIND_MISC, values)
        }
    };
    conn.query_row(sql, params_from_iter(values), |row| row.get(0))
        .optional()
}

/// Max existing form id + 1, or 0 on an empty lexicon.
pub(crate) fn next_form_id(conn: &Connection) -> rusqlite::Result<FormId> {
    let max: Option<FormId> = conn.query_row("SELECT MAX(FormID) FROM Forms", [], |row| row.get(0))?;
    Ok(max.map_or(FormId(0), FormId::next))
}

/// Max word id already used under `form_id` + 1, or 0.
pub(crate) fn next_word_id(conn: &Connection, form_id: FormId) -> rusqlite::Result<WordId> {
    let max: Option<WordId> = conn.query_row(
        "SELECT MAX(WordID) FROM Words WHERE FormID = ?1",
        [form_id],
        |row| row.get(0),
    )?;
    Ok(max.map_or(WordId(0), WordId::next))
}

pub(crate) fn insert_form(conn: &Connection, id: FormId, form: &Form) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO Forms (FormID, PartOfSpeech) VALUES (?1, ?2)",
        params![id, form.part_of_speech()],
    )?;

    match form {
        Form::Verb(v) => {
            let p = &v.principal_parts.0;
            conn.execute(
                "INSERT INTO VerbForms (FormID, Part1, Part2, Part3, Part4, Part5, Part6,
                    Ending, Contract, Aorist, Perfect, Irregularity, Origin)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    id, p[0], p[1], p[2], p[3], p[4], p[5], v.ending, v.contract, v.aorist,
                    v.perfect, v.irregularity, v.origin
                ],
            )?;
        }
        Form::Noun(n) => {
            conn.execute(
                "INSERT INTO NounForms (FormID, Nominative, Genitive, Article, Gender,
                    DecGroup, DecSubGroup, Irregular, Origin)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    id, n.nominative, n.genitive, n.article, n.gender, n.group, n.subgroup,
                    n.irregular, n.origin
                ],
            )?;
        }
        Form::Adjective(a) => {
            conn.execute(
                "INSERT INTO AdjectiveForms (FormID, Masculine, Feminine, Neuter,
                    DecGroup, DecSubGroup, Irregular, Origin)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    id, a.masculine, a.feminine, a.neuter, a.group, a.subgroup, a.irregular,
                    a.origin
                ],
            )?;
        }
        Form::Pronoun(p) => {
            conn.execute(
                "INSERT INTO PronounForms (FormID, Masculine, Feminine, Neuter, Person, Kind, Origin)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![id, p.masculine, p.feminine, p.neuter, p.person, p.kind, p.origin],
            )?;
        }
        Form::Participle(pt) => {
            let p = &pt.principal_parts.0;
            conn.execute(
                "INSERT INTO ParticipleForms (FormID, Part1, Part2, Part3, Part4, Part5, Part6)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![id, p[0], p[1], p[2], p[3], p[4], p[5]],
            )?;
        }
        Form::Misc(m) => {
            conn.execute(
                "INSERT INTO MiscForms (FormID, PartOfSpeech, Spelling, Origin)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, m.part_of_speech, m.spelling, m.origin],
            )?;
        }
    }

    for (position, definition) in form.definitions().iter().enumerate() {
        let position = position as i64;
        conn.execute(
            "INSERT INTO Definitions (FormID, Position, Definition) VALUES (?1, ?2, ?3)",
            params![id, position, definition],
        )?;
    }
    Ok(())
}

pub(crate) fn insert_word(
    conn: &Connection,
    part_of_speech: PartOfSpeech,
    record: &WordRecord,
) -> rusqlite::Result<()> {
    let (word_id, form_id) = (record.word_id, record.form_id);
    conn.execute(
        "INSERT INTO Words (WordID, FormID, Spelling, Unaccented, PartOfSpeech)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![word_id, form_id, record.spelling, record.unaccented, part_of_speech],
    )?;

    match &record.attributes {
        WordAttributes::Verb(v) => conn.execute(
            "INSERT INTO VerbWords (WordID, FormID, Person, Number, Tense, Voice, Mood)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![word_id, form_id, v.person, v.number, v.tense, v.voice, v.mood],
        )?,
        WordAttributes::Noun(n) | WordAttributes::Adjective(n) => conn.execute(
            "INSERT INTO NominalWords (WordID, FormID, GrammaticalCase, Number, Gender)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![word_id, form_id, n.case, n.number, n.gender],
        )?,
        WordAttributes::Pronoun(p) => conn.execute(
            "INSERT INTO PronounWords (WordID, FormID, GrammaticalCase, Number, Gender, Person)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![word_id, form_id, p.case, p.number, p.gender, p.person],
        )?,
        WordAttributes::Participle(p) => conn.execute(
            "INSERT INTO ParticipleWords (WordID, FormID, GrammaticalCase, Number, Gender, Tense, Voice)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![word_id, form_id, p.case, p.number, p.gender, p.tense, p.voice],
        )?,
        WordAttributes::Misc(m) => conn.execute(
            "INSERT INTO MiscWords (WordID, FormID, Tags) VALUES (?1, ?2, ?3)",
            params![word_id, form_id, m.tags.join(TAG_SEPARATOR)],
        )?,
    };
    Ok(())
}

pub(crate) fn load_definitions(conn: &Connection, id: FormId) -> rusqlite::Result<Vec<String>> {
    let mut stmt =
        conn.prepare_cached("SELECT Definition FROM Definitions WHERE FormID = ?1 ORDER BY Position")?;
    let definitions = stmt
        .query_map([id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(definitions)
}

fn principal_parts_at(row: &Row<'_>, start: usize) -> rusqlite::Result<PrincipalParts> {
    Ok(PrincipalParts::new([
        row.get(start)?,
        row.get(start + 1)?,
        row.get(start + 2)?,
        row.get(start + 3)?,
        row.get(start + 4)?,
        row.get(start + 5)?,
    ]))
}

/// Reads a form back with its definitions; `None` if the id is unused or the
/// part-specific row is missing.
pub(crate) fn load_form(conn: &Connection, id: FormId) -> rusqlite::Result<Option<Form>> {
    let part_of_speech: Option<PartOfSpeech> = conn
        .query_row(
            "SELECT PartOfSpeech FROM Forms WHERE FormID = ?1",
            [id],
            |row| row.get(0),
        )
        .optional()?;
    let Some(part_of_speech) = part_of_speech else {
        return Ok(None);
    };
    let definitions = load_definitions(conn, id)?;

    let form = match part_of_speech.kind() {
        FormKind::Verb => conn.query_row(
            "SELECT Part1, Part2, Part3, Part4, Part5, Part6,
                Ending, Contract, Aorist, Perfect, Irregularity, Origin
             FROM VerbForms WHERE FormID = ?1",
            [id],
            |row| {
                Ok(Form::Verb(VerbForm {
                    principal_parts: principal_parts_at(row, 0)?,
                    ending: row.get(6)?,
                    contract: row.get(7)?,
                    aorist: row.get(8)?,
                    perfect: row.get(9)?,
                    irregularity: row.get(10)?,
                    origin: row.get(11)?,
                    definitions,
                }))
            },
        ),
        FormKind::Noun => conn.query_row(
            "SELECT Nominative, Genitive, Article, Gender, DecGroup, DecSubGroup, Irregular, Origin
             FROM NounForms WHERE FormID = ?1",
            [id],
            |row| {
                Ok(Form::Noun(NounForm {
                    nominative: row.get(0)?,
                    genitive: row.get(1)?,
                    article: row.get(2)?,
                    gender: row.get(3)?,
                    group: row.get(4)?,
                    subgroup: row.get(5)?,
                    irregular: row.get(6)?,
                    origin: row.get(7)?,
                    definitions,
                }))
            },
        ),
        FormKind::Adjective => conn.query_row(
            "SELECT Masculine, Feminine, Neuter, DecGroup, DecSubGroup, Irregular, Origin
             FROM AdjectiveForms WHERE FormID = ?1",
            [id],
            |row| {
                Ok(Form::Adjective(AdjectiveForm {
                    masculine: row.get(0)?,
                    feminine: row.get(1)?,
                    neuter: row.get(2)?,
                    group: row.get(3)?,
                    subgroup: row.get(4)?,
                    irregular: row.get(5)?,
                    origin: row.get(6)?,
                    definitions,
                }))
            },
        ),
        FormKind::Pronoun => conn.query_row(
            "SELECT Masculine, Feminine, Neuter, Person, Kind, Origin
             FROM PronounForms WHERE FormID = ?1",
            [id],
            |row| {
                Ok(Form::Pronoun(PronounForm {
                    masculine: row.get(0)?,
                    feminine: row.get(1)?,
                    neuter: row.get(2)?,
                    person: row.get(3)?,
                    kind: row.get(4)?,
                    origin: row.get(5)?,
                    definitions,
                }))
            },
        ),
        FormKind::Participle => conn.query_row(
            "SELECT Part1, Part2, Part3, Part4, Part5, Part6
             FROM ParticipleForms WHERE FormID = ?1",
            [id],
            |row| {
                Ok(Form::Participle(ParticipleForm {
                    principal_parts: principal_parts_at(row, 0)?,
                }))
            },
        ),
        FormKind::Misc => conn.query_row(
            "SELECT PartOfSpeech, Spelling, Origin FROM MiscForms WHERE FormID = ?1",
            [id],
            |row| {
                Ok(Form::Misc(MiscForm {
                    part_of_speech: row.get(0)?,
                    spelling: row.get(1)?,
                    origin: row.get(2)?,
                    definitions,
                }))
            },
        ),
    };
    form.optional()
}

/// The verb whose principal parts a participle shares.
pub(crate) fn source_verb(conn: &Connection, participle: FormId) -> rusqlite::Result<Option<FormId>> {
    conn.query_row(
        "SELECT v.FormID FROM VerbForms v
         JOIN ParticipleForms p
           ON v.Part1 = p.Part1 AND v.Part2 = p.Part2 AND v.Part3 = p.Part3
          AND v.Part4 = p.Part4 AND v.Part5 = p.Part5 AND v.Part6 = p.Part6
         WHERE p.FormID = ?1
         ORDER BY v.FormID LIMIT 1",
        [participle],
        |row| row.get(0),
    )
    .optional()
}

pub(crate) fn form_ids(conn: &Connection, part_of_speech: PartOfSpeech) -> rusqlite::Result<Vec<FormId>> {
    let mut stmt = conn.prepare("SELECT FormID FROM Forms WHERE PartOfSpeech = ?1 ORDER BY FormID")?;
    let ids = stmt
        .query_map([part_of_speech], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<FormId>>>()?;
    Ok(ids)
}

fn nominal_at(row: &Row<'_>) -> rusqlite::Result<NominalWord> {
    Ok(NominalWord {
        case: row.get(0)?,
        number: row.get(1)?,
        gender: row.get(2)?,
    })
}

fn load_attributes(
    conn: &Connection,
    word_id: WordId,
    form_id: FormId,
    part_of_speech: PartOfSpeech,
) -> rusqlite::Result<WordAttributes> {
    let key = params![word_id, form_id];
    match part_of_speech.kind() {
        FormKind::Verb => conn.query_row(
            "SELECT Person, Number, Tense, Voice, Mood FROM VerbWords
             WHERE WordID = ?1 AND FormID = ?2",
            key,
            |row| {
                Ok(WordAttributes::Verb(VerbWord {
                    person: row.get(0)?,
                    number: row.get(1)?,
                    tense: row.get(2)?,
                    voice: row.get(3)?,
                    mood: row.get(4)?,
                }))
            },
        ),
        FormKind::Noun => conn.query_row(
            "SELECT GrammaticalCase, Number, Gender FROM NominalWords
             WHERE WordID = ?1 AND FormID = ?2",
            key,
            |row| nominal_at(row).map(WordAttributes::Noun),
        ),
        FormKind::Adjective => conn.query_row(
            "SELECT GrammaticalCase, Number, Gender FROM NominalWords
             WHERE WordID = ?1 AND FormID = ?2",
            key,
            |row| nominal_at(row).map(WordAttributes::Adjective),
        ),
        FormKind::Pronoun => conn.query_row(
            "SELECT GrammaticalCase, Number, Gender, Person FROM PronounWords
             WHERE WordID = ?1 AND FormID = ?2",
            key,
            |row| {
                Ok(WordAttributes::Pronoun(PronounWord {
                    case: row.get(0)?,
                    number: row.get(1)?,
                    gender: row.get(2)?,
                    person: row.get(3)?,
                }))
            },
        ),
        FormKind::Participle => conn.query_row(
            "SELECT GrammaticalCase, Number, Gender, Tense, Voice FROM ParticipleWords
             WHERE WordID = ?1 AND FormID = ?2",
            key,
            |row| {
                Ok(WordAttributes::Participle(ParticipleWord {
                    case: row.get(0)?,
                    number: row.get(1)?,
                    gender: row.get(2)?,
                    tense: row.get(3)?,
                    voice: row.get(4)?,
                }))
            },
        ),
        FormKind::Misc => conn.query_row(
            "SELECT Tags FROM MiscWords WHERE WordID = ?1 AND FormID = ?2",
            key,
            |row| {
                let tags: String = row.get(0)?;
                Ok(WordAttributes::Misc(MiscWord {
                    tags: tags
                        .split(TAG_SEPARATOR)
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect(),
                }))
            },
        ),
    }
}

/// All words spelled `spelling` in the chosen column, lowest form id first,
/// then lowest word id.
pub(crate) fn find_words(
    conn: &Connection,
    column: SpellingColumn,
    spelling: &str,
) -> rusqlite::Result<Vec<WordRecord>> {
    let sql = match column {
        SpellingColumn::Accented => {
            "SELECT WordID, FormID, Spelling, Unaccented, PartOfSpeech FROM Words
             WHERE Spelling = ?1 ORDER BY FormID, WordID"
        }
        SpellingColumn::Unaccented => {
            "SELECT WordID, FormID, Spelling, Unaccented, PartOfSpeech FROM Words
             WHERE Unaccented = ?1 ORDER BY FormID, WordID"
        }
    };
    load_records(conn, sql, spelling)
}

/// Every word filed under one form, by ascending word id.
pub(crate) fn form_words(conn: &Connection, form_id: FormId) -> rusqlite::Result<Vec<WordRecord>> {
    load_records(
        conn,
        "SELECT WordID, FormID, Spelling, Unaccented, PartOfSpeech FROM Words
         WHERE FormID = ?1 ORDER BY WordID",
        form_id,
    )
}

fn load_records(
    conn: &Connection,
    sql: &str,
    key: impl ToSql,
) -> rusqlite::Result<Vec<WordRecord>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let heads = stmt
        .query_map([key], |row| {
            Ok((
                row.get::<_, WordId>(0)?,
                row.get::<_, FormId>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, PartOfSpeech>(4)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    heads
        .into_iter()
        .map(|(word_id, form_id, spelling, unaccented, part_of_speech)| {
            Ok(WordRecord {
                word_id,
                form_id,
                spelling,
                unaccented,
                attributes: load_attributes(conn, word_id, form_id, part_of_speech)?,
            })
        })
        .collect()
}

pub(crate) fn count(conn: &Connection, table: &'static str) -> rusqlite::Result<usize> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let n: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(n as usize)
}
