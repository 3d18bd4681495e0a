use crate::descriptor::{KernelDescriptor, DESCRIPTOR_FILE_NAME, KERNEL_DIR_TOKEN};
use starbase_utils::{fs, json};
use std::path::{self, Path, PathBuf};
use tracing::{debug, warn};

/// Persist a descriptor under `<install_root>/<kernel_dir>/kernel.json`,
/// overwriting any previous install, then materialize its resources next
/// to it. A failing resource is reported and skipped; it aborts neither
/// the remaining resources nor the run.
pub fn write_descriptor(
    install_root: &Path,
    descriptor: KernelDescriptor,
) -> miette::Result<PathBuf> {
    let kernel_dir = install_root.join(&descriptor.kernel_dir);
    let kernel_dir = path::absolute(&kernel_dir).unwrap_or(kernel_dir);
    let output = kernel_dir.join(DESCRIPTOR_FILE_NAME);

    // Resource paths are only known once the install location is fixed
    let kernel_dir_value = kernel_dir.to_string_lossy();
    let descriptor = KernelDescriptor {
        argv: descriptor
            .argv
            .iter()
            .map(|arg| arg.replace(KERNEL_DIR_TOKEN, &kernel_dir_value))
            .collect(),
        ..descriptor
    };

    debug!(file = ?output, "Writing kernel spec");

    fs::create_dir_all(&kernel_dir)?;
    fs::write_file(&output, json::format(&descriptor, true)?)?;

    for (relative_path, content) in &descriptor.resources {
        let resource = kernel_dir.join(relative_path);

        debug!(file = ?resource, "Writing additional kernel resource");

        if let Err(error) = write_resource(&resource, content) {
            warn!(file = ?resource, error = %error, "Could not write kernel resource");
        }
    }

    Ok(output)
}

fn write_resource(path: &Path, content: &str) -> miette::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write_file(path, content)?;

    Ok(())
}
