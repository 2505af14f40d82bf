use crate::exit_code;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("Output file '{}' already exists. Use '-f' to overwrite it.", .0.display())]
    OutputExists(PathBuf),

    #[error("malformed {kind} document {}: {source}", .path.display())]
    MalformedDocument {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{0}` produced output that is not valid UTF-8")]
    CommandOutput(String),

    #[error("io error on {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QaError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OutputExists(_) => exit_code::OUTPUT_EXISTS,
            _ => exit_code::RUNTIME_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, QaError>;
