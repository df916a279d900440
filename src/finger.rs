use crate::command;
use crate::config::Settings;
use crate::error::{MarkError, Result};
use serde::Serialize;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

const LOG_FILE_PREFIX: &str = ".markbuild-log-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fingerprint {
    pub root: PathBuf,
    pub commit: String,
}

impl Fingerprint {
    pub fn assignment(&self, key: &str) -> String {
        format!("{key} := \"{}\"", self.commit)
    }
}

/// Runs the log command in `root` and takes the commit identifier from the
/// first line of its output.
///
/// The output is spooled through a temporary file inside `root`, which is
/// removed however this function returns.
pub fn extract(root: &Path, settings: &Settings) -> Result<Fingerprint> {
    let (program, args) = command::split(&settings.log_command, "log")?;

    let log_file = tempfile::Builder::new()
        .prefix(LOG_FILE_PREFIX)
        .tempfile_in(root)?;
    debug!(path = %log_file.path().display(), "spooling commit log");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log_file.reopen()?))
        .stderr(Stdio::piped());
    command::run(&mut cmd)?;

    let commit = read_commit_id(BufReader::new(log_file.reopen()?))?;

    Ok(Fingerprint {
        root: root.to_path_buf(),
        commit,
    })
}

fn read_commit_id(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(MarkError::EmptyLog);
    }
    parse_commit_line(&line)
}

/// `commit abc123 extra` -> `abc123`
fn parse_commit_line(line: &str) -> Result<String> {
    line.split_whitespace()
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| MarkError::MalformedLogLine {
            line: line.trim_end().to_string(),
        })
}
