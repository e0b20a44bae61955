use std::path::PathBuf;

use aiwarn_core::{AiwarnResult, Credit};
use serde::Deserialize;
use tracing::debug;

/// One place the host environment may expose script metadata for the footer
/// credit. Sources are probed in priority order; the first that answers
/// wins. All of this is cosmetic and must never block the warning itself.
pub trait CreditSource {
    fn name(&self) -> &'static str;
    fn lookup(&self) -> Option<Credit>;
}

/// Metadata handed over directly by the hosting runtime, the highest
/// priority source when the host provides one.
pub struct HostScriptInfo {
    credit: Credit,
}

impl HostScriptInfo {
    pub fn new(credit: Credit) -> Self {
        Self { credit }
    }
}

impl CreditSource for HostScriptInfo {
    fn name(&self) -> &'static str {
        "host script info"
    }

    fn lookup(&self) -> Option<Credit> {
        Some(self.credit.clone())
    }
}

#[derive(Deserialize)]
struct Manifest {
    name: Option<String>,
    version: Option<String>,
    homepage_url: Option<String>,
}

/// Reads `name`, `version` and `homepage_url` from an extension-style
/// manifest file on disk. A missing or unreadable manifest just means this
/// source has no answer.
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> AiwarnResult<Credit> {
        let raw = std::fs::read_to_string(&self.path)?;
        let manifest: Manifest = serde_json::from_str(&raw)?;
        Ok(Credit {
            name: manifest.name,
            version: manifest.version,
            homepage: manifest.homepage_url,
        })
    }
}

impl CreditSource for ManifestFile {
    fn name(&self) -> &'static str {
        "manifest file"
    }

    fn lookup(&self) -> Option<Credit> {
        match self.read() {
            Ok(credit) => Some(credit),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "manifest unavailable");
                None
            }
        }
    }
}

/// Last resort: the metadata this crate was compiled with.
pub struct BuiltinPackage;

impl CreditSource for BuiltinPackage {
    fn name(&self) -> &'static str {
        "builtin package"
    }

    fn lookup(&self) -> Option<Credit> {
        Some(Credit {
            name: Some(env!("CARGO_PKG_NAME").to_string()),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            homepage: option_env!("CARGO_PKG_HOMEPAGE")
                .filter(|h| !h.is_empty())
                .map(str::to_string),
        })
    }
}

/// Probes the sources in order and returns the first answer. No source
/// answering degrades to an empty credit, never an error.
pub fn resolve_credit(sources: &[Box<dyn CreditSource>]) -> Credit {
    for source in sources {
        if let Some(credit) = source.lookup() {
            debug!(source = source.name(), "credit metadata resolved");
            return credit;
        }
    }
    Credit::default()
}
