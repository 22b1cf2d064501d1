//! Table layout of the lexicon database.
//!
//! Every form table hangs off `Forms` and every word attribute table hangs off
//! `Words`, all with `ON DELETE CASCADE`, so deleting from `Forms` is enough to
//! clear a form and everything under it.

pub(crate) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS Forms (
    FormID          INTEGER PRIMARY KEY,
    PartOfSpeech    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS VerbForms (
    FormID          INTEGER PRIMARY KEY REFERENCES Forms(FormID) ON DELETE CASCADE,
    Part1           TEXT NOT NULL,
    Part2           TEXT NOT NULL,
    Part3           TEXT NOT NULL,
    Part4           TEXT NOT NULL,
    Part5           TEXT NOT NULL,
    Part6           TEXT NOT NULL,
    Ending          TEXT NOT NULL,
    Contract        TEXT NOT NULL,
    Aorist          TEXT NOT NULL,
    Perfect         TEXT NOT NULL,
    Irregularity    TEXT NOT NULL,
    Origin          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS NounForms (
    FormID          INTEGER PRIMARY KEY REFERENCES Forms(FormID) ON DELETE CASCADE,
    Nominative      TEXT NOT NULL,
    Genitive        TEXT NOT NULL,
    Article         TEXT NOT NULL,
    Gender          TEXT NOT NULL,
    DecGroup        TEXT NOT NULL,
    DecSubGroup     TEXT NOT NULL,
    Irregular       INTEGER NOT NULL,
    Origin          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS AdjectiveForms (
    FormID          INTEGER PRIMARY KEY REFERENCES Forms(FormID) ON DELETE CASCADE,
    Masculine       TEXT NOT NULL,
    Feminine        TEXT NOT NULL,
    Neuter          TEXT NOT NULL,
    DecGroup        TEXT NOT NULL,
    DecSubGroup     TEXT NOT NULL,
    Irregular       INTEGER NOT NULL,
    Origin          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS PronounForms (
    FormID          INTEGER PRIMARY KEY REFERENCES Forms(FormID) ON DELETE CASCADE,
    Masculine       TEXT NOT NULL,
    Feminine        TEXT NOT NULL,
    Neuter          TEXT NOT NULL,
    Person          TEXT,
    Kind            TEXT NOT NULL,
    Origin          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS ParticipleForms (
    FormID          INTEGER PRIMARY KEY REFERENCES Forms(FormID) ON DELETE CASCADE,
    Part1           TEXT NOT NULL,
    Part2           TEXT NOT NULL,
    Part3           TEXT NOT NULL,
    Part4           TEXT NOT NULL,
    Part5           TEXT NOT NULL,
    Part6           TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS MiscForms (
    FormID          INTEGER PRIMARY KEY REFERENCES Forms(FormID) ON DELETE CASCADE,
    PartOfSpeech    TEXT NOT NULL,
    Spelling        TEXT NOT NULL,
    Origin          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Definitions (
    FormID          INTEGER NOT NULL REFERENCES Forms(FormID) ON DELETE CASCADE,
    Position        INTEGER NOT NULL,
    Definition      TEXT NOT NULL,
    PRIMARY KEY (FormID, Position)
);

CREATE TABLE IF NOT EXISTS Words (
    WordID          INTEGER NOT NULL,
    FormID          INTEGER NOT NULL REFERENCES Forms(FormID) ON DELETE CASCADE,
    Spelling        TEXT NOT NULL,
    Unaccented      TEXT NOT NULL,
    PartOfSpeech    TEXT NOT NULL,
    PRIMARY KEY (WordID, FormID)
);

CREATE INDEX IF NOT EXISTS WordsBySpelling ON Words(Spelling);
CREATE INDEX IF NOT EXISTS WordsByUnaccented ON Words(Unaccented);
CREATE INDEX IF NOT EXISTS WordsByForm ON Words(FormID, WordID);

CREATE TABLE IF NOT EXISTS VerbWords (
    WordID          INTEGER NOT NULL,
    FormID          INTEGER NOT NULL,
    Person          TEXT,
    Number          TEXT,
    Tense           TEXT NOT NULL,
    Voice           TEXT NOT NULL,
    Mood            TEXT NOT NULL,
    PRIMARY KEY (WordID, FormID),
    FOREIGN KEY (WordID, FormID) REFERENCES Words(WordID, FormID) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS NominalWords (
    WordID          INTEGER NOT NULL,
    FormID          INTEGER NOT NULL,
    GrammaticalCase TEXT NOT NULL,
    Number          TEXT NOT NULL,
    Gender          TEXT NOT NULL,
    PRIMARY KEY (WordID, FormID),
    FOREIGN KEY (WordID, FormID) REFERENCES Words(WordID, FormID) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS PronounWords (
    WordID          INTEGER NOT NULL,
    FormID          INTEGER NOT NULL,
    GrammaticalCase TEXT NOT NULL,
    Number          TEXT NOT NULL,
    Gender          TEXT NOT NULL,
    Person          TEXT,
    PRIMARY KEY (WordID, FormID),
    FOREIGN KEY (WordID, FormID) REFERENCES Words(WordID, FormID) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS ParticipleWords (
    WordID          INTEGER NOT NULL,
    FormID          INTEGER NOT NULL,
    GrammaticalCase TEXT NOT NULL,
    Number          TEXT NOT NULL,
    Gender          TEXT NOT NULL,
    Tense           TEXT NOT NULL,
    Voice           TEXT NOT NULL,
    PRIMARY KEY (WordID, FormID),
    FOREIGN KEY (WordID, FormID) REFERENCES Words(WordID, FormID) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS MiscWords (
    WordID          INTEGER NOT NULL,
    FormID          INTEGER NOT NULL,
    Tags            TEXT NOT NULL,
    PRIMARY KEY (WordID, FormID),
    FOREIGN KEY (WordID, FormID) REFERENCES Words(WordID, FormID) ON DELETE CASCADE
);
";

/// Separator for the misc word tag list in `MiscWords.Tags`. Source fields
/// cannot contain it, so joining is lossless.
pub(crate) const TAG_SEPARATOR: &str = ",";
