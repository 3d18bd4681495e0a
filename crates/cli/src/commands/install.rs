use clap::Args;
use jkernel_core::{
    assemble_descriptor, color, default_display_name, find_command, find_python, get_home_dir,
    installation_roots, resolve_install_root, wrap_with_proxy, write_descriptor, HostOs,
    JkernelError, KernelVariant,
};
use starbase::system;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// Setting this to `ipc` (as Google Colab does) forces proxy mode on.
pub const TRANSPORT_ENV_VAR: &str = "COLAB_JUPYTER_TRANSPORT";

const LAUNCHER_COMMAND: &str = "jbang";
const IPC_POSTFIX: &str = "-tcp";

#[derive(Args, Clone, Debug)]
pub struct InstallArgs {
    #[arg(
        value_enum,
        default_value_t = KernelVariant::IJava,
        ignore_case = true,
        help = "Kernel to install"
    )]
    kernel: KernelVariant,

    #[arg(long, help = "Override the display name of the installed kernel")]
    name: Option<String>,

    #[arg(
        long,
        help = "Directory to install kernel specs into. Defaults to an OS specific location."
    )]
    jupyter_kernel_dir: Option<PathBuf>,

    #[arg(
        long,
        help = "Name of the kernel spec sub directory. Defaults to jbang-<kernel>."
    )]
    kernel_dir: Option<String>,

    #[arg(
        long,
        default_value_t = -1,
        help = "Timeout in milliseconds for kernel execution"
    )]
    timeout: i64,

    #[arg(
        long,
        help = "Also install a proxy kernel spec that runs the kernel over IPC"
    )]
    ipc: bool,

    #[arg(long, default_value = "", help = "Compiler options to pass to the kernel")]
    compiler_options: String,
}

#[system]
pub async fn install(args: ArgsRef<InstallArgs>) {
    let os = HostOs::detect()?;

    let use_ipc = args.ipc
        || env::var(TRANSPORT_ENV_VAR).is_ok_and(|transport| transport == "ipc");
    let postfix = if use_ipc { IPC_POSTFIX } else { "" };

    let candidates = match &args.jupyter_kernel_dir {
        Some(dir) => vec![dir.to_owned()],
        None => installation_roots(os, &get_home_dir()?)?,
    };

    debug!(
        candidates = ?candidates,
        "Considering kernel installation directories"
    );

    let target = resolve_install_root(&candidates)?;

    if target.created {
        info!("Created {}", color::path(&target.root));
    }

    let launcher =
        find_command(LAUNCHER_COMMAND, os)?.ok_or_else(|| JkernelError::MissingLauncher {
            name: LAUNCHER_COMMAND.to_owned(),
        })?;

    let variant = args.kernel.resolve();
    let display_name = args
        .name
        .clone()
        .unwrap_or_else(|| default_display_name(&variant));
    let kernel_dir = args
        .kernel_dir
        .clone()
        .unwrap_or_else(|| format!("jbang-{}", args.kernel.id()));

    let descriptor = assemble_descriptor(
        &variant,
        &launcher,
        format!("{display_name}{postfix}"),
        format!("{kernel_dir}{postfix}"),
        &args.compiler_options,
        args.timeout,
    );

    // The proxy forwards to the suffixed kernel and takes over its
    // canonical name and directory
    let proxy = if use_ipc {
        let python = find_python(os)?.ok_or(JkernelError::MissingPython)?;

        Some(wrap_with_proxy(
            &descriptor,
            &python,
            display_name.clone(),
            kernel_dir.clone(),
        ))
    } else {
        None
    };

    let output = write_descriptor(&target.root, descriptor)?;

    info!(
        "{}{} kernel installed to {}",
        display_name,
        postfix,
        color::path(&output)
    );

    if let Some(proxy) = proxy {
        let output = write_descriptor(&target.root, proxy)?;

        info!(
            "{} proxy kernel installed to {}",
            display_name,
            color::path(&output)
        );
    }

    if let Some(url) = &variant.info_url {
        info!("For more information on this kernel: {}", color::url(url));
    }

    info!(
        "Brought to you by {}",
        color::url("https://github.com/jupyter-java")
    );
}
