use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexis_cli::{reload, render};
use lexis_parser::EntryReader;
use lexis_protocol::PartOfSpeech;
use lexis_store::{Lexicon, SelectOptions};

#[derive(Parser)]
#[command(author, version, about = "Builds and queries a Greek lexicon database")]
struct Cli {
    /// Lexicon database file
    #[arg(long, env = "LEXIS_DB", default_value = "lexicon.db", value_name = "FILE")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Empty the database and load it again from a lexicon source file
    Reload {
        #[arg(short, long, env = "LEXIS_SOURCE", default_value = "Lexicon.txt", value_name = "FILE")]
        source: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Look up an inflected word
    Info {
        word: String,
        /// Show the form the word belongs to
        #[arg(short, long)]
        form: bool,
        /// Show the definitions of that form
        #[arg(short, long)]
        define: bool,
        /// Ignore accents and breathings when matching
        #[arg(short, long)]
        unaccented: bool,
        /// Show every match instead of the first
        #[arg(short, long)]
        all: bool,
        /// Show every inflected word of the matched form
        #[arg(short, long)]
        paradigm: bool,
        #[arg(long)]
        json: bool,
    },
    /// List all forms of one part of speech
    List { part_of_speech: PartOfSpeech },
    /// Remove every form, word and definition, or only those of one part of speech
    Reset { part_of_speech: Option<PartOfSpeech> },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut lexicon = Lexicon::open(&cli.db)
        .with_context(|| format!("failed to open lexicon {}", cli.db.display()))?;

    match cli.command {
        Command::Reload { source, json } => {
            let entries = EntryReader::open(&source)
                .with_context(|| format!("failed to open {}", source.display()))?;
            let report = reload(&mut lexicon, entries)
                .with_context(|| format!("reload from {} stopped", source.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Loaded {} entries: {} forms, {} words, {} definitions",
                    report.entries,
                    report.counts.forms,
                    report.counts.words,
                    report.counts.definitions
                );
            }
        }
        Command::Info {
            word,
            form,
            define,
            unaccented,
            all,
            paradigm,
            json,
        } => {
            let options = SelectOptions {
                verbose: form,
                definitions: define,
                unaccented,
            };
            let lookups = if all {
                lexicon.select_all(&word, options)?
            } else {
                vec![lexicon.select(&word, options)?]
            };

            let paradigm = if paradigm {
                Some(lexicon.paradigm(&word, options)?)
            } else {
                None
            };

            if json {
                let found = if all {
                    serde_json::to_value(&lookups)?
                } else {
                    serde_json::to_value(&lookups[0])?
                };
                let text = match paradigm {
                    Some(words) => serde_json::to_string_pretty(&serde_json::json!({
                        "lookup": found,
                        "paradigm": words,
                    }))?,
                    None => serde_json::to_string_pretty(&found)?,
                };
                println!("{text}");
            } else {
                for lookup in &lookups {
                    print!("{}", render::lookup(lookup));
                }
                if let Some(words) = paradigm {
                    print!("{}", render::paradigm(&words));
                }
            }
        }
        Command::List { part_of_speech } => {
            let forms = lexicon.list_forms(part_of_speech)?;
            if forms.is_empty() {
                println!("No {part_of_speech} forms stored.");
            } else {
                print!("{}", render::listing(&forms));
            }
        }
        Command::Reset { part_of_speech: None } => {
            lexicon.reset()?;
            println!("Lexicon emptied.");
        }
        Command::Reset {
            part_of_speech: Some(part_of_speech),
        } => {
            let removed = lexicon.reset_part_of_speech(part_of_speech)?;
            println!("Removed {removed} {part_of_speech} forms.");
        }
    }
    Ok(())
}
