use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarkError {
    #[error("repository not found: no '{marker}' directory in {} or any parent", .start.display())]
    RepositoryNotFound { start: PathBuf, marker: String },

    #[error("commit log is empty")]
    EmptyLog,

    /// The first log line has no second whitespace-separated token.
    #[error("malformed commit log line: {line:?}")]
    MalformedLogLine { line: String },

    #[error("cannot access working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    #[error("working directory {} has no name to derive a target from", .path.display())]
    NoDirectoryName { path: PathBuf },

    #[error("`{command}` failed ({status}): {stderr}")]
    ExternalCommand {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{which} command is empty in config")]
    EmptyCommand { which: &'static str },

    #[error("failed to get home directory")]
    NoHomeDir,

    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("cannot serialize build report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MarkError>;
