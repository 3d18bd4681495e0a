use crate::env::HostOs;
use crate::error::JkernelError;
use starbase_utils::fs;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved installation root, plus whether it pre-existed or had to be
/// created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstallTarget {
    pub root: PathBuf,
    pub created: bool,
}

/// Ordered candidate kernel spec roots for the host OS. On Windows the
/// candidates are derived from the `APPDATA` and `PROGRAMDATA`
/// environment variables; unset variables are skipped.
pub fn installation_roots(os: HostOs, home_dir: &Path) -> miette::Result<Vec<PathBuf>> {
    let roots = match os {
        HostOs::Linux | HostOs::Solaris => vec![
            home_dir.join(".local/share/jupyter/kernels"),
            PathBuf::from("/usr/local/share/jupyter/kernels"),
            PathBuf::from("/usr/share/jupyter/kernels"),
        ],
        HostOs::MacOS => vec![
            home_dir.join("Library/Jupyter/kernels"),
            PathBuf::from("/usr/local/share/jupyter/kernels"),
            PathBuf::from("/usr/share/jupyter/kernels"),
        ],
        HostOs::Windows => ["APPDATA", "PROGRAMDATA"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|root| Path::new(&root).join("jupyter").join("kernels"))
            .collect(),
    };

    if roots.is_empty() {
        return Err(JkernelError::NoInstallRoot.into());
    }

    Ok(roots)
}

/// Only the first candidate is ever written to. A missing first candidate
/// is created recursively rather than falling through to a later one.
pub fn resolve_install_root(candidates: &[PathBuf]) -> miette::Result<InstallTarget> {
    let root = candidates
        .first()
        .ok_or(JkernelError::NoInstallRoot)?
        .to_owned();

    let created = !root.exists();

    if created {
        debug!(dir = ?root, "Installation root does not exist, creating");

        fs::create_dir_all(&root)?;
    }

    Ok(InstallTarget { root, created })
}
