use crate::descriptor::{KernelDescriptor, CONNECTION_FILE_TOKEN, KERNEL_DIR_TOKEN};
use indexmap::IndexMap;
use std::path::Path;

pub const PROXY_SCRIPT_NAME: &str = "ipc_proxy_kernel.py";

/// Python proxy that bridges front-ends speaking IPC transports (like
/// Google Colab) to a kernel that only supports TCP. Bundled at compile
/// time and materialized next to the proxy descriptor at install time.
pub const PROXY_SCRIPT: &str = include_str!("../templates/ipc_proxy_kernel.py");

/// Build a second descriptor that launches the transport proxy and
/// forwards to the original kernel. Display name and kernel directory are
/// supplied by the caller; language and interrupt mode are copied from
/// the original.
pub fn wrap_with_proxy(
    original: &KernelDescriptor,
    python: &Path,
    display_name: String,
    kernel_dir: String,
) -> KernelDescriptor {
    KernelDescriptor {
        argv: vec![
            python.to_string_lossy().into_owned(),
            format!("{KERNEL_DIR_TOKEN}/{PROXY_SCRIPT_NAME}"),
            CONNECTION_FILE_TOKEN.to_owned(),
            format!("--kernel={}", original.kernel_dir),
        ],
        display_name,
        language: original.language.clone(),
        interrupt_mode: original.interrupt_mode.clone(),
        env: IndexMap::new(),
        kernel_dir,
        resources: IndexMap::from([(PROXY_SCRIPT_NAME.to_owned(), PROXY_SCRIPT.to_owned())]),
    }
}
