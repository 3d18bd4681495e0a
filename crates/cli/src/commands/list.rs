use jkernel_core::{color, KernelVariant};
use starbase::system;

#[system]
pub async fn list() {
    println!("Available kernels:");
    println!();

    for variant in KernelVariant::ALL {
        let resolved = variant.resolve();

        println!(
            "{} - {} ({}), requires Java {}",
            color::id(variant.id()),
            resolved.coordinate(),
            resolved.language,
            resolved.java_version,
        );

        if let Some(url) = &resolved.info_url {
            println!("  {}", color::url(url));
        }
    }
}
