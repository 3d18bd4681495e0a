use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Literal token left in argv for the front-end to expand with the path
/// to the connection file when it actually launches the kernel.
pub const CONNECTION_FILE_TOKEN: &str = "{connection_file}";

/// Placeholder for the descriptor's own installation directory, replaced
/// once the final install location is known.
pub const KERNEL_DIR_TOKEN: &str = "{{KERNEL_DIR}}";

/// All JVM kernels are interrupted with a message, not a signal.
pub const INTERRUPT_MODE: &str = "message";

pub const DESCRIPTOR_FILE_NAME: &str = "kernel.json";

/// An in-memory kernel spec. The serialized shape matches the on-disk
/// `kernel.json` format consumed by Jupyter front-ends: snake_case keys,
/// with an empty `env` map omitted entirely.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct KernelDescriptor {
    pub argv: Vec<String>,

    pub display_name: String,

    pub language: String,

    pub interrupt_mode: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, String>,

    /// Sub directory under the installation root that will hold the
    /// descriptor and its resources.
    #[serde(skip)]
    pub kernel_dir: String,

    /// Relative path -> literal content, materialized next to the
    /// descriptor when it is written.
    #[serde(skip)]
    pub resources: IndexMap<String, String>,
}
