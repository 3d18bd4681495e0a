use crate::descriptor::{KernelDescriptor, INTERRUPT_MODE};
use crate::variant::ResolvedVariant;
use indexmap::IndexMap;
use std::path::Path;

/// Prefix that makes JBang forward an argument to the launched JVM
/// instead of consuming it itself.
const RUNTIME_FORWARD_PREFIX: &str = "-R";

/// Assemble the ordered launch argv for a resolved variant. The ordering
/// is a compatibility contract with JBang and must not change:
/// launcher, java version selector, optional entry point, optional
/// forwarded modules, forwarded JVM args, coordinate, trailing args.
/// Pure and deterministic.
pub fn assemble_launch_command(variant: &ResolvedVariant, launcher: &Path) -> Vec<String> {
    let mut argv = vec![
        launcher.to_string_lossy().into_owned(),
        "--java".to_owned(),
        variant.java_version.clone(),
    ];

    if let Some(main_class) = &variant.main_class {
        argv.push("-m".to_owned());
        argv.push(main_class.to_owned());
    }

    if !variant.modules.is_empty() {
        argv.push(format!("{RUNTIME_FORWARD_PREFIX}--add-modules"));
        argv.push(format!(
            "{RUNTIME_FORWARD_PREFIX}{}",
            variant.modules.join(",")
        ));
    }

    for jvm_arg in &variant.jvm_args {
        argv.push(format!("{RUNTIME_FORWARD_PREFIX}{jvm_arg}"));
    }

    argv.push(variant.coordinate());
    argv.extend(variant.arguments.iter().cloned());

    argv
}

pub fn default_display_name(variant: &ResolvedVariant) -> String {
    format!("{} ({}/j!)", variant.language, variant.short_name)
}

/// Build the complete descriptor for a variant. The connection file token
/// stays unexpanded; the front-end replaces it at launch time.
pub fn assemble_descriptor(
    variant: &ResolvedVariant,
    launcher: &Path,
    display_name: String,
    kernel_dir: String,
    compiler_options: &str,
    timeout_millis: i64,
) -> KernelDescriptor {
    KernelDescriptor {
        argv: assemble_launch_command(variant, launcher),
        display_name,
        language: variant.language.clone(),
        interrupt_mode: INTERRUPT_MODE.to_owned(),
        env: variant.env_options(compiler_options, timeout_millis),
        kernel_dir,
        resources: IndexMap::new(),
    }
}
