use std::path::Path;

use lexis_protocol::{alternates, Form, FormId, FormKind, PartOfSpeech, WordGroup, WordRecord};
use rusqlite::Connection;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::error::StoreError;
use crate::rows::{self, SpellingColumn};
use crate::schema::SCHEMA;

/// What a lookup should bring back besides the word row itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SelectOptions {
    /// Also load the owning form.
    pub verbose: bool,
    /// Also load the form's definitions.
    pub definitions: bool,
    /// Match against the accent-stripped spelling.
    pub unaccented: bool,
}

/// One resolved word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Lookup {
    pub word: WordRecord,
    pub form: Option<Form>,
    pub definitions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Counts {
    pub forms: usize,
    pub words: usize,
    pub definitions: usize,
}

/// The lexicon database: forms, their inflected words and definitions.
pub struct Lexicon {
    conn: Connection,
    deaccent: fn(&str) -> String,
}

impl Lexicon {
    /// Opens (creating if needed) a lexicon file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn,
            deaccent: lexis_morph::deaccent,
        })
    }

    /// Replaces the accent-stripping function used for the unaccented column.
    /// Words already stored keep the spelling they were stored with.
    pub fn with_deaccent(mut self, deaccent: fn(&str) -> String) -> Self {
        self.deaccent = deaccent;
        self
    }

    /// Stores a form, or the words of an already stored form.
    ///
    /// With only `form`, the form is added under a fresh id. With `words`
    /// too, the form is looked up by its face and every spelling of the group
    /// is added under it. Either way the id of the form is returned, and
    /// nothing is written if any step fails.
    pub fn insert(
        &mut self,
        part_of_speech: PartOfSpeech,
        words: Option<&WordGroup>,
        form: Option<&Form>,
    ) -> Result<FormId, StoreError> {
        let Some(form) = form else {
            let reason = if words.is_some() {
                "words given without their form"
            } else {
                "neither words nor a form given"
            };
            return Err(StoreError::InvalidArguments(reason.into()));
        };
        if form.part_of_speech() != part_of_speech {
            return Err(StoreError::InvalidArguments(format!(
                "{} form inserted as {part_of_speech}",
                form.part_of_speech()
            )));
        }

        match words {
            None => self.insert_form(form),
            Some(group) => {
                let kind = form.kind();
                for (spelling, attribute_rows) in group.iter() {
                    if let Some(row) = attribute_rows.iter().find(|row| row.kind() != kind) {
                        return Err(StoreError::InvalidArguments(format!(
                            "`{spelling}` has a {:?} row under a {kind:?} form",
                            row.kind()
                        )));
                    }
                }
                self.insert_words(form, group)
            }
        }
    }

    fn insert_form(&mut self, form: &Form) -> Result<FormId, StoreError> {
        let tx = self.conn.transaction()?;
        if let Some(existing) = rows::find_form(&tx, form)? {
            return Err(StoreError::DuplicateForm(describe(form), existing));
        }
        let id = rows::next_form_id(&tx)?;
        rows::insert_form(&tx, id, form)?;
        tx.commit()?;

        log::debug!("stored {} as form {id}", describe(form));
        Ok(id)
    }

    fn insert_words(&mut self, form: &Form, group: &WordGroup) -> Result<FormId, StoreError> {
        let deaccent = self.deaccent;
        let part_of_speech = form.part_of_speech();

        let tx = self.conn.transaction()?;
        let form_id = rows::find_form(&tx, form)?
            .ok_or_else(|| StoreError::FormNotFound(describe(form)))?;

        let mut word_id = rows::next_word_id(&tx, form_id)?;
        let mut stored = 0usize;
        for (spelling, attribute_rows) in group.iter() {
            for alternate in alternates(spelling) {
                let unaccented = deaccent(alternate);
                for attributes in attribute_rows {
                    let record = WordRecord {
                        word_id,
                        form_id,
                        spelling: alternate.to_string(),
                        unaccented: unaccented.clone(),
                        attributes: attributes.clone(),
                    };
                    rows::insert_word(&tx, part_of_speech, &record)?;
                    word_id = word_id.next();
                    stored += 1;
                }
            }
        }
        tx.commit()?;

        log::debug!("stored {stored} words under form {form_id}");
        Ok(form_id)
    }

    /// Looks a spelling up. When several words share it, the one with the
    /// lowest form id wins, then the lowest word id.
    pub fn select(&self, spelling: &str, options: SelectOptions) -> Result<Lookup, StoreError> {
        let word = self
            .candidates(spelling, options)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::WordNotFound(spelling.to_string()))?;
        self.resolve(word, options)
    }

    /// Every word matching a spelling, in the order `select` ranks them.
    pub fn select_all(&self, spelling: &str, options: SelectOptions) -> Result<Vec<Lookup>, StoreError> {
        let words = self.candidates(spelling, options)?;
        if words.is_empty() {
            return Err(StoreError::WordNotFound(spelling.to_string()));
        }
        words
            .into_iter()
            .map(|word| self.resolve(word, options))
            .collect()
    }

    /// The full paradigm behind a spelling: every word of the form `select`
    /// would resolve it to, by ascending word id.
    pub fn paradigm(&self, spelling: &str, options: SelectOptions) -> Result<Vec<WordRecord>, StoreError> {
        let word = self
            .candidates(spelling, options)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::WordNotFound(spelling.to_string()))?;
        Ok(rows::form_words(&self.conn, word.form_id)?)
    }

    fn candidates(&self, spelling: &str, options: SelectOptions) -> Result<Vec<WordRecord>, StoreError> {
        let words = if options.unaccented {
            let key = (self.deaccent)(spelling);
            rows::find_words(&self.conn, SpellingColumn::Unaccented, &key)?
        } else {
            rows::find_words(&self.conn, SpellingColumn::Accented, spelling)?
        };
        Ok(words)
    }

    fn resolve(&self, word: WordRecord, options: SelectOptions) -> Result<Lookup, StoreError> {
        let form = if options.verbose {
            let form = rows::load_form(&self.conn, word.form_id)?
                .ok_or_else(|| StoreError::FormNotFound(format!("form {}", word.form_id)))?;
            Some(form)
        } else {
            None
        };
        let definitions = if options.definitions {
            Some(self.definitions(word.form_id, word.attributes.kind())?)
        } else {
            None
        };
        Ok(Lookup {
            word,
            form,
            definitions,
        })
    }

    /// Participles have no definitions of their own and read those of the
    /// verb sharing their principal parts.
    fn definitions(&self, form_id: FormId, kind: FormKind) -> Result<Vec<String>, StoreError> {
        let source = if kind == FormKind::Participle {
            rows::source_verb(&self.conn, form_id)?
        } else {
            Some(form_id)
        };
        let definitions = match source {
            Some(id) => rows::load_definitions(&self.conn, id)?,
            None => Vec::new(),
        };
        if definitions.is_empty() {
            return Err(StoreError::NoDefinitions(form_id));
        }
        Ok(definitions)
    }

    /// Deletes every form and, by cascade, everything hanging off them.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM Forms", [])?;
        tx.commit()?;
        log::info!("lexicon reset, {removed} forms removed");
        Ok(())
    }

    /// Deletes the forms of one part of speech, leaving the rest of the
    /// lexicon alone. Returns how many forms went.
    pub fn reset_part_of_speech(&mut self, part_of_speech: PartOfSpeech) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM Forms WHERE PartOfSpeech = ?1", [part_of_speech])?;
        tx.commit()?;
        log::info!("removed {removed} {part_of_speech} forms");
        Ok(removed)
    }

    /// Deletes every word spelled exactly `spelling`, under any form. The
    /// forms themselves stay. Returns how many words went.
    pub fn remove_word(&mut self, spelling: &str) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM Words WHERE Spelling = ?1", [spelling])?;
        tx.commit()?;
        if removed > 0 {
            log::debug!("removed {removed} words spelled `{spelling}`");
        }
        Ok(removed)
    }

    /// Deletes one form with its words and definitions. Returns whether it existed.
    pub fn remove_form(&mut self, id: FormId) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM Forms WHERE FormID = ?1", [id])?;
        tx.commit()?;
        if removed > 0 {
            log::debug!("removed form {id}");
        }
        Ok(removed > 0)
    }

    /// All forms of one part of speech, by ascending id.
    pub fn list_forms(&self, part_of_speech: PartOfSpeech) -> Result<Vec<(FormId, Form)>, StoreError> {
        let mut forms = Vec::new();
        for id in rows::form_ids(&self.conn, part_of_speech)? {
            let form = rows::load_form(&self.conn, id)?
                .ok_or_else(|| StoreError::FormNotFound(format!("form {id}")))?;
            forms.push((id, form));
        }
        Ok(forms)
    }

    pub fn counts(&self) -> Result<Counts, StoreError> {
        Ok(Counts {
            forms: rows::count(&self.conn, "Forms")?,
            words: rows::count(&self.conn, "Words")?,
            definitions: rows::count(&self.conn, "Definitions")?,
        })
    }
}

fn describe(form: &Form) -> String {
    format!("{} {}", form.part_of_speech(), form.headword())
}
