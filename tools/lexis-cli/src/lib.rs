use std::io::BufRead;

use lexis_parser::{Entry, EntryReader, ParseError};
use lexis_protocol::PartOfSpeech;
use lexis_store::{Counts, Lexicon, StoreError};
use serde::Serialize;

pub mod render;

#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to store {part_of_speech} entry `{origin}` from line {line}: {source}")]
    Entry {
        part_of_speech: PartOfSpeech,
        origin: String,
        line: usize,
        source: StoreError,
    },

    #[error(transparent)]
    Lexicon(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReloadReport {
    pub entries: usize,
    pub counts: Counts,
}

/// Empties the lexicon and refills it from `entries`, one entry at a time.
///
/// Stops at the first entry that fails to parse or store. Entries stored
/// before the failure stay in the lexicon.
pub fn reload<R: BufRead>(
    lexicon: &mut Lexicon,
    entries: EntryReader<R>,
) -> Result<ReloadReport, ReloadError> {
    lexicon.reset()?;

    let mut stored = 0;
    for entry in entries {
        let entry = entry?;
        store_entry(lexicon, &entry).map_err(|source| ReloadError::Entry {
            part_of_speech: entry.part_of_speech,
            origin: entry.origin.clone(),
            line: entry.line,
            source,
        })?;
        stored += 1;
    }

    let report = ReloadReport {
        entries: stored,
        counts: lexicon.counts()?,
    };
    log::info!(
        "reloaded {} entries: {} forms, {} words, {} definitions",
        report.entries,
        report.counts.forms,
        report.counts.words,
        report.counts.definitions
    );
    Ok(report)
}

/// The form goes in first so its words have something to attach to.
fn store_entry(lexicon: &mut Lexicon, entry: &Entry) -> Result<(), StoreError> {
    let pos = entry.part_of_speech;
    lexicon.insert(pos, None, Some(&entry.form))?;
    if !entry.words.is_empty() {
        lexicon.insert(pos, Some(&entry.words), Some(&entry.form))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_store::SelectOptions;

    fn reload_str(lexicon: &mut Lexicon, source: &str) -> Result<ReloadReport, ReloadError> {
        reload(lexicon, EntryReader::new(source.as_bytes()))
    }

    const ADVERBS: &str = "\
Adverb,1,Ch. 1
εὖ
well
εὖ
Positive
!
Adverb,1,Ch. 2
οὐ|οὐκ|οὐχ
not
οὐ|οὐκ|οὐχ
Negation
";

    #[test]
    fn test_reload_replaces_previous_contents() {
        let mut lexicon = Lexicon::open_in_memory().unwrap();
        let first = reload_str(&mut lexicon, ADVERBS).unwrap();
        assert_eq!(first.entries, 2);
        assert_eq!(first.counts.forms, 2);
        assert_eq!(first.counts.words, 4);

        let second = reload_str(&mut lexicon, ADVERBS).unwrap();
        assert_eq!(second, first);
        let lookup = lexicon.select("οὐκ", SelectOptions::default()).unwrap();
        assert_eq!(lookup.word.form_id.0, 1);
    }

    #[test]
    fn test_duplicate_entry_names_its_source() {
        let source = format!("{ADVERBS}!\n{ADVERBS}");
        let mut lexicon = Lexicon::open_in_memory().unwrap();
        match reload_str(&mut lexicon, &source).unwrap_err() {
            ReloadError::Entry {
                part_of_speech,
                origin,
                line,
                source,
            } => {
                assert_eq!(part_of_speech, PartOfSpeech::Adverb);
                assert_eq!(origin, "Ch. 1");
                assert_eq!(line, 13);
                assert!(matches!(source, StoreError::DuplicateForm(..)));
            }
            other => panic!("expected a store failure, got {other:?}"),
        }
        // Everything before the bad entry was kept.
        assert_eq!(lexicon.counts().unwrap().forms, 2);
    }

    #[test]
    fn test_report_as_json() {
        let mut lexicon = Lexicon::open_in_memory().unwrap();
        let report = reload_str(&mut lexicon, ADVERBS).unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["entries"], 2);
        assert_eq!(json["counts"]["words"], 4);
    }

    #[test]
    fn test_parse_failure_aborts() {
        let mut lexicon = Lexicon::open_in_memory().unwrap();
        let err = reload_str(&mut lexicon, "Adverb,1\n").unwrap_err();
        assert!(matches!(err, ReloadError::Parse(ref e) if e.line() == Some(1)));
    }
}
