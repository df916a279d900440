use crate::command;
use crate::config::Settings;
use crate::error::Result;
use crate::platform::BuildEnv;
use crate::progress::Progress;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

pub fn target_file_name(base: &str, settings: &Settings) -> String {
    format!("{base}{}", settings.exe_suffix)
}

fn build_command(target: &str, env: &BuildEnv, settings: &Settings, dir: &Path) -> Result<Command> {
    let (program, args) = command::split(&settings.build_command, "build")?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .arg(&settings.output_flag)
        .arg(target)
        .current_dir(dir)
        .envs(env.overrides());
    Ok(cmd)
}

/// Builds `<base><suffix>` in `dir` and returns the path of the produced file.
pub fn run_build(
    base: &str,
    env: &BuildEnv,
    settings: &Settings,
    dir: &Path,
    progress: &mut Progress<'_>,
) -> Result<PathBuf> {
    let target = target_file_name(base, settings);
    let mut cmd = build_command(&target, env, settings, dir)?;
    cmd.stdout(progress.child_stdout());

    info!(command = %command::describe(&cmd), "building");
    command::run_inherited(&mut cmd)?;

    progress.line("Target", &target)?;
    Ok(dir.join(target))
}
