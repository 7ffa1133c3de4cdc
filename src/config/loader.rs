//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Language;
use crate::error::{PropConstError, PropConstResult};

use super::types::{Config, Verbosity, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths in the file are resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> PropConstResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PropConstError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (config, warnings) = parse_with_warnings(&content, path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok((config.resolve_relative_to(base), warnings))
}

/// Parse config text; `path` is only used for error and warning locations
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> PropConstResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PropConstError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `propconst.toml` from `dir` if present, defaults otherwise
pub fn load_or_default(dir: &Path) -> PropConstResult<(Config, Vec<ConfigWarning>)> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        load_with_warnings(&candidate)
    } else {
        Ok((Config::default(), Vec::new()))
    }
}

/// Apply environment variable overrides (PROPCONST_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply `PROPCONST_*` overrides read through `lookup`
///
/// Unparseable values are ignored and leave the configured value in place.
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("PROPCONST_DESTDIR") {
        if !dir.trim().is_empty() {
            config.destdir = PathBuf::from(dir);
        }
    }

    if let Some(value) = lookup("PROPCONST_CONVERTTOUPPER") {
        match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => config.converttoupper = true,
            "0" | "false" | "no" | "off" => config.converttoupper = false,
            _ => {}
        }
    }

    if let Some(language) = lookup("PROPCONST_LANGUAGE").and_then(|v| Language::parse(&v)) {
        config.language = language;
    }

    if let Some(verbosity) = lookup("PROPCONST_VERBOSITY").and_then(|v| Verbosity::parse(&v)) {
        config.verbosity = verbosity;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "inputfile",
        "destdir",
        "classname",
        "packagename",
        "converttoupper",
        "language",
        "verbosity",
        "fileset",
        "dir",
        "includes",
        "excludes",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
