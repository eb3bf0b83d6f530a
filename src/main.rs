use anyhow::Result;
use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<()> {
    let args = make_day::ui::cli::Cli::parse();

    // Log level and colouring come from flags and the terminal only; no
    // environment variable is consulted.
    #[cfg(feature = "logging")]
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    #[cfg(feature = "colors")]
    {
        use std::io::IsTerminal;
        colored::control::set_override(std::io::stdout().is_terminal());
    }

    make_day::app_controller::run(args)
}
