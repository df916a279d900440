use crate::error::Result;
use crate::finger::Fingerprint;
use crate::platform::BuildEnv;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use ulid::Ulid;

/// Summary of a finished build, printed as JSON with `--report`.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub id: String,
    pub target: PathBuf,
    pub platform: BuildEnv,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Fingerprint>,
    pub built_at: DateTime<Utc>,
}

impl BuildReport {
    pub fn new(target: PathBuf, platform: BuildEnv, fingerprint: Option<Fingerprint>) -> Self {
        BuildReport {
            id: Ulid::new().to_string(),
            target,
            platform,
            fingerprint,
            built_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
