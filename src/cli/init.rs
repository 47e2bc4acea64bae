use std::path::PathBuf;
use std::process;

use clap::Args;
use spanfmt::config::{CONFIG_FILE, DEFAULT_CONFIG};

#[derive(Args)]
pub struct InitArgs {
    /// Directory to write spanfmt.toml into (defaults to current directory)
    pub dir: Option<PathBuf>,
}

pub fn cmd_init(args: InitArgs) {
    let dir = args.dir.unwrap_or_else(|| PathBuf::from("."));

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("error: cannot create directory '{}': {}", dir.display(), e);
        process::exit(1);
    }

    let toml_path = dir.join(CONFIG_FILE);
    if toml_path.exists() {
        eprintln!("error: '{}' already exists", toml_path.display());
        process::exit(1);
    }

    if let Err(e) = std::fs::write(&toml_path, DEFAULT_CONFIG) {
        eprintln!("error: cannot write '{}': {}", toml_path.display(), e);
        process::exit(1);
    }

    eprintln!("Created {}", toml_path.display());
}
