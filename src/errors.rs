use thiserror::Error;

#[derive(Error, Debug)]
pub enum MbtiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("Unknown trait label: {0}")]
    InvalidTrait(String),

    #[error("Unknown dimension: {0}")]
    InvalidDimension(String),

    #[error("Unknown MBTI type: {0}")]
    UnknownType(String),

    #[error("Question index {index} is out of range (expected < {limit})")]
    QuestionOutOfRange { index: usize, limit: usize },

    #[error("Session not completed: {answered} of {required} answers recorded")]
    SessionNotCompleted { answered: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, MbtiError>;
