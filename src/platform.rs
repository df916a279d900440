use crate::config::CrossTarget;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Other,
}

impl HostOs {
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    fn from_os_name(os: &str) -> Self {
        if os == "macos" {
            HostOs::MacOs
        } else {
            HostOs::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildEnv {
    /// `GOOS`/`GOARCH` forced to the configured pair.
    Cross { goos: String, goarch: String },
    /// No overrides; the compiler targets the host.
    Native,
}

impl BuildEnv {
    /// Picks the build environment for a platform selector.
    ///
    /// `linux` always cross-compiles and `native` never does. A missing or
    /// empty selector defers to the host: native on macOS, cross elsewhere.
    /// Anything else falls back to the cross build.
    pub fn resolve(selector: Option<&str>, host: HostOs, cross: &CrossTarget) -> Self {
        let cross_env = || BuildEnv::Cross {
            goos: cross.goos.clone(),
            goarch: cross.goarch.clone(),
        };

        match selector.map(str::trim) {
            Some("linux") => cross_env(),
            Some("native") => BuildEnv::Native,
            None | Some("") => match host {
                HostOs::MacOs => BuildEnv::Native,
                HostOs::Other => cross_env(),
            },
            Some(_) => cross_env(),
        }
    }

    pub fn overrides(&self) -> Vec<(&'static str, &str)> {
        match self {
            BuildEnv::Cross { goos, goarch } => {
                vec![("GOOS", goos.as_str()), ("GOARCH", goarch.as_str())]
            }
            BuildEnv::Native => Vec::new(),
        }
    }
}
