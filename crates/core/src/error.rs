use miette::Diagnostic;
use starbase_styles::{Style, Stylize};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum JkernelError {
    #[diagnostic(code(jkernel::env::unsupported_os))]
    #[error(
        "Operating system {} is not recognized, unable to install kernels.",
        .id.style(Style::Id),
    )]
    UnsupportedOs { id: String },

    #[diagnostic(code(jkernel::env::home_dir))]
    #[error("Unable to determine your home directory.")]
    MissingHomeDir,

    #[diagnostic(code(jkernel::env::no_install_root))]
    #[error(
        "No kernel installation directory could be derived. Ensure the {} or {} environment variables are set.",
        "APPDATA".style(Style::Property),
        "PROGRAMDATA".style(Style::Property),
    )]
    NoInstallRoot,

    #[diagnostic(code(jkernel::env::launcher_not_found))]
    #[error(
        "{} executable could not be found. Please ensure it is installed and on {} before installing a kernel.",
        .name.style(Style::Shell),
        "PATH".style(Style::Property),
    )]
    MissingLauncher { name: String },

    #[diagnostic(code(jkernel::proxy::python_not_found))]
    #[error(
        "A python executable could not be found on {}. Python is required to run the IPC proxy kernel.",
        "PATH".style(Style::Property),
    )]
    MissingPython,
}
