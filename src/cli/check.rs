use std::path::PathBuf;
use std::process;

use clap::Args;

#[derive(Args)]
pub struct CheckArgs {
    /// Tree files exported by the host parser (JSON)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

pub fn cmd_check(args: CheckArgs) {
    let mut failed = 0;
    for input in &args.inputs {
        match spanfmt::load_tree_silent(input) {
            Ok(tree) => {
                eprintln!("OK: {} ({} nodes)", input.display(), tree.len());
            }
            Err(err) => {
                err.render();
                eprintln!(
                    "error: '{}' has {} problem(s)",
                    input.display(),
                    err.diagnostics.len()
                );
                failed += 1;
            }
        }
    }

    if failed > 0 {
        process::exit(1);
    }
}
