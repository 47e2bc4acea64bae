use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::compose::Modification;
use crate::diagnostic::Diagnostic;
use crate::dump::PREVIEW_WIDTH;
use crate::summary::SummaryRules;
use crate::syntax::{SyntaxKind, TextRange};

pub const CONFIG_FILE: &str = "spanfmt.toml";

/// What `spanfmt init` writes: the built-in settings, spelled out.
pub const DEFAULT_CONFIG: &str = r#"[summary]
# Start from the built-in rules (drop JSDocComment and DeclareKeyword).
defaults = true
skip = []
skip_children = []

[summary.replace]
# Block = "{ ... }"

[dump]
preview_width = 100
"#;

/// Settings from spanfmt.toml.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rules: SummaryRules,
    /// Longest node text printed by the tree dump.
    pub preview_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: SummaryRules::declarations(),
            preview_width: PREVIEW_WIDTH,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    summary: SummarySection,
    #[serde(default)]
    dump: DumpSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SummarySection {
    /// Start from the built-in declaration rules.
    #[serde(default = "default_true")]
    defaults: bool,
    #[serde(default)]
    skip: Vec<String>,
    #[serde(default)]
    skip_children: Vec<String>,
    #[serde(default)]
    replace: BTreeMap<String, String>,
}

impl Default for SummarySection {
    fn default() -> Self {
        Self {
            defaults: true,
            skip: Vec::new(),
            skip_children: Vec::new(),
            replace: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DumpSection {
    preview_width: Option<usize>,
}

fn default_true() -> bool {
    true
}

/// Resolve a kind name from the config, naming the key it came from.
pub fn parse_kind(name: &str, key: &str) -> Result<SyntaxKind, Diagnostic> {
    SyntaxKind::from_name(name).ok_or_else(|| {
        Diagnostic::error(
            format!("unknown node kind '{}' in '{}'", name, key),
            TextRange::empty(),
        )
        .with_help("kind names are case-sensitive, e.g. 'JSDocComment'".to_string())
    })
}

impl Config {
    /// Load a spanfmt.toml file.
    pub fn load(toml_path: &Path) -> Result<Config, Diagnostic> {
        let content = std::fs::read_to_string(toml_path).map_err(|e| {
            Diagnostic::error(
                format!("cannot read '{}': {}", toml_path.display(), e),
                TextRange::empty(),
            )
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config, Diagnostic> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| {
            let range = e
                .span()
                .map(|r| TextRange::new(r.start as u32, r.end as u32))
                .unwrap_or_default();
            Diagnostic::error(format!("invalid {}: {}", CONFIG_FILE, e.message()), range)
        })?;

        let summary = file.summary;
        let mut rules = if summary.defaults {
            SummaryRules::declarations()
        } else {
            SummaryRules::new()
        };
        for name in &summary.skip {
            rules.set(parse_kind(name, "summary.skip")?, Modification::SkipAll);
        }
        for name in &summary.skip_children {
            rules.set(
                parse_kind(name, "summary.skip_children")?,
                Modification::SkipChildren,
            );
        }
        for (name, text) in summary.replace {
            rules.set(
                parse_kind(&name, "summary.replace")?,
                Modification::Replace(text),
            );
        }

        let preview_width = file.dump.preview_width.unwrap_or(PREVIEW_WIDTH);
        if preview_width < 4 {
            return Err(Diagnostic::error(
                format!("dump.preview_width must be at least 4, got {}", preview_width),
                TextRange::empty(),
            ));
        }

        Ok(Config {
            rules,
            preview_width,
        })
    }

    /// Try to find a spanfmt.toml in the given directory or its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}
