mod app;
mod commands;

use app::{App as CLI, Commands};
use clap::Parser;
use starbase::{tracing::TracingOptions, App, MainResult};
use starbase_utils::string_vec;
use std::env;
use tracing::{debug, metadata::LevelFilter};

#[tokio::main]
async fn main() -> MainResult {
    App::setup_diagnostics();

    let cli = CLI::parse();

    if let Some(level) = cli.log {
        env::set_var("STARBASE_LOG", level.to_string());
    } else if let Ok(level) = env::var("JKERNEL_LOG") {
        env::set_var("STARBASE_LOG", level);
    }

    App::setup_tracing_with_options(TracingOptions {
        default_level: LevelFilter::INFO,
        filter_modules: string_vec!["jkernel", "starbase"],
        log_env: "STARBASE_LOG".into(),
        test_env: "JKERNEL_TEST".into(),
        ..TracingOptions::default()
    });

    debug!(
        args = ?env::args().collect::<Vec<_>>(),
        "Running jkernel v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut app = App::new();

    match cli.command {
        Commands::Install(args) => app.execute_with_args(commands::install, args),
        Commands::List => app.execute(commands::list),
    };

    app.run().await?;

    Ok(())
}
