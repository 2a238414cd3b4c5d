//! Path pattern expansion
//!
//! Shell-style wildcards (`*`, `?`, `[...]`) plus recursive `**`.

use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::config::ScanConfig;
use crate::error::{PictowhackError, Result};

const RECURSIVE: &str = "**";

/// Expand a path pattern into the paths it matches.
///
/// Hidden entries are only matched when the pattern spells out the leading
/// dot, unless `include_hidden` is set. A pattern that glob cannot parse is
/// taken as a literal path when that path exists. Entries that cannot be
/// read during expansion are skipped. Matches come back sorted.
pub fn expand_pattern(pattern: &str, scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let paths = match glob::glob_with(pattern, options) {
        Ok(paths) => paths,
        Err(e) => {
            let literal = PathBuf::from(pattern);
            if literal.exists() && !is_excluded(&literal, &scan.exclude) {
                return Ok(vec![literal]);
            }
            return Err(PictowhackError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            });
        }
    };

    let mut matches: Vec<PathBuf> = paths
        .filter_map(|entry| entry.ok())
        .filter(|path| scan.include_hidden || !is_hidden_match(pattern, path))
        .filter(|path| !is_excluded(path, &scan.exclude))
        .collect();
    matches.sort();

    Ok(matches)
}

/// Whether `path` reached a hidden entry through a wildcard.
///
/// Pattern and path components are aligned again, with `**` standing for
/// any number of non-hidden components and every other component requiring
/// a literal leading dot to match a hidden name.
fn is_hidden_match(pattern: &str, path: &Path) -> bool {
    let pattern: Vec<Component<'_>> = Path::new(pattern).components().collect();
    let path: Vec<Component<'_>> = path.components().collect();
    !aligns_without_hidden(&pattern, &path)
}

fn aligns_without_hidden(pattern: &[Component<'_>], path: &[Component<'_>]) -> bool {
    let Some((head, rest)) = pattern.split_first() else {
        return path.is_empty();
    };

    let Component::Normal(head_str) = head else {
        return path.first() == Some(head) && aligns_without_hidden(rest, &path[1..]);
    };
    let head_str = head_str.to_string_lossy();

    if head_str == RECURSIVE {
        if aligns_without_hidden(rest, path) {
            return true;
        }
        return match path.split_first() {
            Some((Component::Normal(name), tail)) if !name.to_string_lossy().starts_with('.') => {
                aligns_without_hidden(pattern, tail)
            }
            _ => false,
        };
    }

    let Some((Component::Normal(name), tail)) = path.split_first() else {
        return false;
    };
    let strict = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    let matched = match Pattern::new(&head_str) {
        Ok(p) => p.matches_with(&name.to_string_lossy(), strict),
        Err(_) => head_str == name.to_string_lossy(),
    };
    matched && aligns_without_hidden(rest, tail)
}

fn is_excluded(path: &Path, exclude: &[String]) -> bool {
    if exclude.is_empty() {
        return false;
    }
    path.components().any(|component| match component {
        Component::Normal(name) => exclude.iter().any(|e| name == e.as_str()),
        _ => false,
    })
}
