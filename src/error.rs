use thiserror::Error;

#[derive(Error, Debug)]
pub enum BedsideError {
    // Response validation, raised before any scoring computation.
    #[error("responses missing category: {category}")]
    MissingCategory { category: String },

    #[error("responses contain unknown category: {category}")]
    UnexpectedCategory { category: String },

    #[error("category '{category}' expects {expected} answers, found {found}")]
    AnswerCountMismatch {
        category: String,
        expected: usize,
        found: usize,
    },

    #[error("answer {value} for question {index} in category '{category}' is outside 0..={max}")]
    AnswerOutOfRange {
        category: String,
        index: usize,
        value: i64,
        max: usize,
    },

    // Catalog and advice data defects, checked once at startup.
    #[error("duplicate category name in catalog: {category}")]
    DuplicateCategory { category: String },

    #[error("no action list configured for category: {category}")]
    MissingActions { category: String },

    #[error("unsupported responses format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("responses file not found: {0}")]
    ResponsesNotFound(String),

    #[error("responses file already exists: {0} (pass --force to start over)")]
    TemplateExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BedsideError>;
