use crate::env::HostOs;
use crate::error::JkernelError;
use starbase_utils::dirs::home_dir;
use std::env;
use std::path::{self, Path, PathBuf};
use tracing::trace;

pub fn get_home_dir() -> miette::Result<PathBuf> {
    Ok(home_dir().ok_or(JkernelError::MissingHomeDir)?)
}

/// Directories searched for launcher executables: the per-user JBang bin
/// directory first, followed by every `PATH` entry.
pub fn command_search_dirs(home_dir: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![home_dir.join(".jbang").join("bin")];

    if let Ok(system_path) = env::var("PATH") {
        dirs.extend(env::split_paths(&system_path));
    }

    dirs
}

/// Return an absolute path to the provided command by searching the given
/// directories in order. On Windows, `<name>.cmd` and `<name>.ps1` are
/// tried before the bare name. The first candidate that exists and is
/// executable wins.
pub fn find_command_in(name: &str, dirs: &[PathBuf], os: HostOs) -> Option<PathBuf> {
    for dir in dirs {
        for file_name in candidate_file_names(name, os) {
            let command = dir.join(file_name);

            if command.exists() && is_executable(&command) {
                trace!(command = name, path = ?command, "Found command");

                return Some(path::absolute(&command).unwrap_or(command));
            }
        }
    }

    None
}

/// Search the JBang bin directory and `PATH` for a command.
pub fn find_command(name: &str, os: HostOs) -> miette::Result<Option<PathBuf>> {
    let home_dir = get_home_dir()?;

    Ok(find_command_in(name, &command_search_dirs(&home_dir), os))
}

/// `python` wins over `python3` when both are installed.
pub fn find_python_in(dirs: &[PathBuf], os: HostOs) -> Option<PathBuf> {
    find_command_in("python", dirs, os).or_else(|| find_command_in("python3", dirs, os))
}

pub fn find_python(os: HostOs) -> miette::Result<Option<PathBuf>> {
    let home_dir = get_home_dir()?;

    Ok(find_python_in(&command_search_dirs(&home_dir), os))
}

fn candidate_file_names(name: &str, os: HostOs) -> Vec<String> {
    if os.is_windows() {
        vec![
            format!("{name}.cmd"),
            format!("{name}.ps1"),
            name.to_owned(),
        ]
    } else {
        vec![name.to_owned()]
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
