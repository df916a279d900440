use crate::compile;
use crate::config::{Config, load_config};
use crate::error::{MarkError, Result};
use crate::finger::{self, Fingerprint};
use crate::naming::NamingStrategy;
use crate::platform::{BuildEnv, HostOs};
use crate::progress::Progress;
use crate::repo;
use crate::report::BuildReport;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct BuildRequest<'a> {
    pub strategy: NamingStrategy,
    pub with_fingerprint: bool,
    pub platform: Option<&'a str>,
    pub host: HostOs,
}

pub fn locate_fingerprint(
    cwd: &Path,
    config: &Config,
    progress: &mut Progress<'_>,
) -> Result<Fingerprint> {
    let root = repo::find_repo_root(cwd, &config.settings.marker_dir)?;
    progress.line("Repository root", root.display())?;

    let fingerprint = finger::extract(&root, &config.settings)?;
    let assignment = fingerprint.assignment(&config.settings.fingerprint_key);
    progress.line("Fingerprint", assignment)?;
    Ok(fingerprint)
}

pub fn build_in(
    cwd: &Path,
    request: &BuildRequest,
    config: &Config,
    progress: &mut Progress<'_>,
) -> Result<BuildReport> {
    progress.line("Working directory", cwd.display())?;
    let base = request.strategy.target_name(cwd)?;
    debug!(%base, strategy = ?request.strategy, "target name");

    let fingerprint = if request.with_fingerprint {
        Some(locate_fingerprint(cwd, config, progress)?)
    } else {
        None
    };

    let env = BuildEnv::resolve(request.platform, request.host, &config.cross);
    debug!(platform = ?request.platform, host = ?request.host, ?env, "resolved build environment");

    let target = compile::run_build(&base, &env, &config.settings, cwd, progress)?;
    Ok(BuildReport::new(target, env, fingerprint))
}

/// Runs a build, keeping stdout for the JSON report when `json` is set.
pub fn run_in(
    cwd: &Path,
    request: &BuildRequest,
    config: &Config,
    json: bool,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let report = {
        let mut progress = if json {
            Progress::to_stderr(&mut *stderr)
        } else {
            Progress::to_stdout(&mut *stdout)
        };
        build_in(cwd, request, config, &mut progress)?
    };

    if json {
        writeln!(stdout, "{}", report.to_json()?)?;
    }
    Ok(())
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(MarkError::WorkingDirectory)
}

pub fn build(platform: Option<&str>, json: bool) -> Result<()> {
    let cwd = current_dir()?;
    let config = load_config()?;
    let request = BuildRequest {
        strategy: NamingStrategy::Fixed(config.settings.target_name.clone()),
        with_fingerprint: false,
        platform,
        host: HostOs::detect(),
    };

    let (mut stdout, mut stderr) = (io::stdout(), io::stderr());
    run_in(&cwd, &request, &config, json, &mut stdout, &mut stderr)
}

pub fn mark(platform: Option<&str>, json: bool) -> Result<()> {
    let cwd = current_dir()?;
    let config = load_config()?;
    let request = BuildRequest {
        strategy: NamingStrategy::Derived,
        with_fingerprint: true,
        platform,
        host: HostOs::detect(),
    };

    let (mut stdout, mut stderr) = (io::stdout(), io::stderr());
    run_in(&cwd, &request, &config, json, &mut stdout, &mut stderr)
}

pub fn finger() -> Result<()> {
    let cwd = current_dir()?;
    let config = load_config()?;
    let mut stdout = io::stdout();
    let mut progress = Progress::to_stdout(&mut stdout);

    progress.line("Working directory", cwd.display())?;
    locate_fingerprint(&cwd, &config, &mut progress)?;
    Ok(())
}
