use std::path::PathBuf;

use clap::Parser;

use taskboard::io::config_io::read_theme;
use taskboard::tui;
use taskboard::tui::theme::Theme;

#[derive(Parser)]
#[command(name = "tb", about = concat!("[+] taskboard v", env!("CARGO_PKG_VERSION"), " - a todo board for one sitting"), version)]
struct Cli {
    /// Theme file with [colors] overrides
    #[arg(long, value_name = "PATH")]
    theme: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => match read_theme(path) {
            Ok(config) => Theme::from_config(&config),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    if let Err(e) = tui::run(theme) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
