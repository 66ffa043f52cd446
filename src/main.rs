use std::path::PathBuf;

use clap::Parser;

use wintoggle::logging::init_logging;

#[cfg(target_os = "windows")]
mod windows_main;

#[derive(Parser, Debug)]
#[command(name = "wintoggle")]
#[command(version)]
#[command(about = "Show and hide a group of windows with a hotkey or mouse gestures", long_about = None)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the window list (using the stored list filters) and exit
    #[arg(long)]
    list_windows: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config_path = cli
        .config
        .unwrap_or_else(wintoggle::storage::default_config_path);

    #[cfg(target_os = "windows")]
    {
        let result = if cli.list_windows {
            windows_main::list_windows(&config_path);
            Ok(())
        } else {
            windows_main::run(config_path)
        };
        if let Err(e) = result {
            tracing::error!(error = %e, "Window toggler failed");
            eprintln!("wintoggle error: {e}");
            std::process::exit(1);
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = (config_path, cli.list_windows);
        eprintln!("wintoggle error: only Windows is supported");
        std::process::exit(1);
    }
}
