use crate::error::Result;
use std::fmt::Display;
use std::io::{self, Write};
use std::process::Stdio;

/// Sink for the human-readable progress lines.
///
/// When stdout is reserved for machine-readable output, child process stdout
/// is sent to stderr as well.
pub struct Progress<'a> {
    out: &'a mut dyn Write,
    stdout_reserved: bool,
}

impl<'a> Progress<'a> {
    pub fn to_stdout(out: &'a mut dyn Write) -> Self {
        Progress {
            out,
            stdout_reserved: false,
        }
    }

    pub fn to_stderr(err: &'a mut dyn Write) -> Self {
        Progress {
            out: err,
            stdout_reserved: true,
        }
    }

    pub fn line(&mut self, label: &str, value: impl Display) -> Result<()> {
        writeln!(self.out, "{label}: {value}")?;
        Ok(())
    }

    pub fn child_stdout(&self) -> Stdio {
        if self.stdout_reserved {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        }
    }
}
