use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error reading file {path}: {source}")]
    ReadFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("error deserializing TOML: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unexpected response shape: {source}")]
    ResponseShape { source: serde_json::Error },

    #[error("response contained no results")]
    EmptyResults,

    #[error("error reading event from host: {source}")]
    ReadEvent { source: std::io::Error },

    #[error("error encoding render action: {source}")]
    EncodeRender { source: serde_json::Error },

    #[error("error writing render action to host: {source}")]
    WriteRender { source: std::io::Error },
}
