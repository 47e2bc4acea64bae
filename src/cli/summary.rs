use std::path::PathBuf;
use std::process;

use clap::Args;
use spanfmt::config::parse_kind;
use spanfmt::{format_file_and_line_number, Modification, SummaryRules};

use super::{load_config, load_tree, parse_node_path};

#[derive(Args)]
pub struct SummaryArgs {
    /// Tree file exported by the host parser (JSON)
    pub input: PathBuf,
    /// Summarize the node at this child-index path (e.g. 0.2) instead of the root
    #[arg(long, default_value = "")]
    pub path: String,
    /// Drop every node of this kind (repeatable)
    #[arg(long, value_name = "KIND")]
    pub skip: Vec<String>,
    /// Replace every node of this kind with TEXT (repeatable)
    #[arg(long, value_name = "KIND=TEXT")]
    pub replace: Vec<String>,
    /// Ignore spanfmt.toml and the built-in rules
    #[arg(long)]
    pub no_defaults: bool,
    /// Omit the [file#line] suffix
    #[arg(long)]
    pub bare: bool,
}

pub fn cmd_summary(args: SummaryArgs) {
    let SummaryArgs {
        input,
        path,
        skip,
        replace,
        no_defaults,
        bare,
    } = args;

    let mut rules = if no_defaults {
        SummaryRules::new()
    } else {
        load_config(&input).rules
    };
    if let Err(msg) = apply_overrides(&mut rules, &skip, &replace) {
        eprintln!("error: {}", msg);
        process::exit(1);
    }

    let tree = load_tree(&input);
    let path = parse_node_path(&path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(1);
    });

    let summary = match spanfmt::summarize_at(&tree, &path, &rules) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {}", e.message);
            process::exit(1);
        }
    };

    if bare {
        println!("{}", summary);
    } else if let Some(node) = tree.root().descend(&path) {
        println!("{} {}", summary, format_file_and_line_number(&node));
    }
}

/// Layer `--skip` and `--replace` flags on top of the configured rules.
fn apply_overrides(
    rules: &mut SummaryRules,
    skip: &[String],
    replace: &[String],
) -> Result<(), String> {
    for name in skip {
        let kind = parse_kind(name, "--skip").map_err(|e| e.message)?;
        rules.set(kind, Modification::SkipAll);
    }
    for spec in replace {
        let Some((name, text)) = spec.split_once('=') else {
            return Err(format!("--replace expects KIND=TEXT, got '{}'", spec));
        };
        let kind = parse_kind(name.trim(), "--replace").map_err(|e| e.message)?;
        rules.set(kind, Modification::Replace(text.to_string()));
    }
    Ok(())
}
