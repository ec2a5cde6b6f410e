use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Voice synthesis service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Script document error: {0}")]
    ScriptError(String),

    #[error("Table validation error: {0}")]
    TableError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("WAV error: {0}")]
    WavError(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
