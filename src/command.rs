use crate::error::{MarkError, Result};
use std::process::{Command, Output};
use tracing::debug;

pub fn split<'a>(parts: &'a [String], which: &'static str) -> Result<(&'a str, &'a [String])> {
    parts
        .split_first()
        .map(|(program, args)| (program.as_str(), args))
        .ok_or(MarkError::EmptyCommand { which })
}

/// Renders a command the way a shell user would type it, env overrides first.
pub fn describe(cmd: &Command) -> String {
    let mut parts = Vec::new();
    for (key, value) in cmd.get_envs() {
        if let Some(value) = value {
            parts.push(format!("{}={}", key.to_string_lossy(), value.to_string_lossy()));
        }
    }
    parts.push(cmd.get_program().to_string_lossy().to_string());
    parts.extend(cmd.get_args().map(|arg| arg.to_string_lossy().to_string()));
    parts.join(" ")
}

pub fn run(cmd: &mut Command) -> Result<Output> {
    let command = describe(cmd);
    debug!(%command, "running");

    let output = cmd.output().map_err(|source| MarkError::CommandSpawn {
        command: command.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(MarkError::ExternalCommand {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}

/// Runs `cmd` with the terminal's stdio so its output reaches the user directly.
pub fn run_inherited(cmd: &mut Command) -> Result<()> {
    let command = describe(cmd);
    debug!(%command, "running");

    let status = cmd.status().map_err(|source| MarkError::CommandSpawn {
        command: command.clone(),
        source,
    })?;

    if !status.success() {
        return Err(MarkError::ExternalCommand {
            command,
            status,
            stderr: String::new(),
        });
    }

    Ok(())
}
