use crate::error::JkernelError;
use serde::{Deserialize, Serialize};
use std::env::consts;
use std::fmt;

/// Operating system family of the current environment.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Linux,
    #[serde(alias = "mac")]
    MacOS,
    Solaris,
    Windows,
}

impl HostOs {
    /// Classify a platform identifier string, either a Rust
    /// [`std::env::consts::OS`] value or a JVM style `os.name` value,
    /// into a supported family.
    pub fn from_identifier(id: &str) -> Option<HostOs> {
        let id = id.to_lowercase();

        if id.contains("mac") || id.contains("darwin") {
            Some(Self::MacOS)
        } else if id.contains("win") {
            Some(Self::Windows)
        } else if id.contains("sunos") || id.contains("solaris") {
            Some(Self::Solaris)
        } else if id.contains("nix") || id.contains("nux") || id.contains("aix") {
            Some(Self::Linux)
        } else {
            None
        }
    }

    /// Return an instance derived from [`std::env::consts::OS`].
    /// Anything outside the supported set is a fatal condition.
    pub fn detect() -> Result<HostOs, JkernelError> {
        Self::from_identifier(consts::OS).ok_or_else(|| JkernelError::UnsupportedOs {
            id: consts::OS.to_owned(),
        })
    }

    /// Return true if Windows.
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}
