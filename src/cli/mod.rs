pub mod check;
pub mod dump;
pub mod flags;
pub mod init;
pub mod summary;

use std::path::Path;
use std::process;

use spanfmt::config::Config;
use spanfmt::SyntaxTree;

/// Load the spanfmt.toml governing `input`, or the defaults if none exists.
pub fn load_config(input: &Path) -> Config {
    let start = match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let Some(toml_path) = Config::find(start) else {
        return Config::default();
    };
    match Config::load(&toml_path) {
        Ok(config) => config,
        Err(e) => {
            match std::fs::read_to_string(&toml_path) {
                Ok(source) => e.render(&toml_path.display().to_string(), &source),
                Err(_) => eprintln!("error: {}", e.message),
            }
            process::exit(1);
        }
    }
}

/// Load and validate a tree file, exiting on error.
pub fn load_tree(input: &Path) -> SyntaxTree {
    match spanfmt::load_tree(input) {
        Ok(tree) => tree,
        Err(_) => {
            eprintln!("error: cannot load '{}'", input.display());
            process::exit(1);
        }
    }
}

/// Parse a `0.3.1` style path of child indices.
pub fn parse_node_path(s: &str) -> Result<Vec<usize>, String> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split('.')
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| format!("invalid child index '{}' in path '{}'", part, s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_path() {
        assert_eq!(parse_node_path(""), Ok(vec![]));
        assert_eq!(parse_node_path("0"), Ok(vec![0]));
        assert_eq!(parse_node_path("2.0.13"), Ok(vec![2, 0, 13]));
        assert!(parse_node_path("1..2").is_err());
        assert!(parse_node_path("a").is_err());
    }
}
