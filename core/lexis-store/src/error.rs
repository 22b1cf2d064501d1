use lexis_protocol::FormId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The insert call itself was malformed (missing form, mismatched parts of speech).
    #[error("invalid insert arguments: {0}")]
    InvalidArguments(String),

    #[error("{0} already exists as form {1}")]
    DuplicateForm(String, FormId),

    #[error("no form found for {0}")]
    FormNotFound(String),

    #[error("no word spelled `{0}`")]
    WordNotFound(String),

    #[error("form {0} has no definitions")]
    NoDefinitions(FormId),

    #[error("lexicon database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
