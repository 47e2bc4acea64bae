use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Args;
use spanfmt::dump::dump_tree_with;

use super::{load_config, load_tree, parse_node_path};

#[derive(Args)]
pub struct DumpArgs {
    /// Tree file exported by the host parser (JSON)
    pub input: PathBuf,
    /// Dump only the subtree at this child-index path (e.g. 0.2)
    #[arg(long, default_value = "")]
    pub path: String,
    /// Longest text preview per node (default: from spanfmt.toml, else 100)
    #[arg(long)]
    pub width: Option<usize>,
}

pub fn cmd_dump(args: DumpArgs) {
    let DumpArgs { input, path, width } = args;
    let config = load_config(&input);
    let tree = load_tree(&input);

    let path = parse_node_path(&path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(1);
    });
    let Some(node) = tree.root().descend(&path) else {
        eprintln!("error: no node at path {:?} in '{}'", path, input.display());
        process::exit(1);
    };

    let width = width.unwrap_or(config.preview_width);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = dump_tree_with(&node, "", width, &mut out).and_then(|_| out.flush()) {
        eprintln!("error: cannot write dump: {}", e);
        process::exit(1);
    }
}
