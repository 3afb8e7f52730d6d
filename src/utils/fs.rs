//! Filesystem helpers: wildcard file search and non-clobbering output paths.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Find files below `root` whose file name matches a shell wildcard `pattern`.
///
/// Supports `*`, `?` and bracket classes (`[abc]`, `[a-z]`, `[!0-9]`).
/// Directories are walked recursively without following symlinks. Results
/// are sorted.
///
/// # Errors
///
/// Returns an I/O error if `root` or a directory below it cannot be read.
pub fn find_files(pattern: &str, root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if entry
                .file_name()
                .to_str()
                .is_some_and(|name| wildcard_match(pattern, name))
            {
                found.push(entry.path());
            }
        }
    }

    found.sort();
    debug!(
        pattern,
        root = %root.display(),
        matches = found.len(),
        "File search complete"
    );
    Ok(found)
}

/// Return `path` if nothing exists there, otherwise the first free
/// `<stem>_<n>.<ext>` next to it, counting from 1.
///
/// ```
/// use sciutil::utils::fs::increment_path;
/// use std::path::Path;
///
/// let free = Path::new("whatever/does-not-exist.py");
/// assert_eq!(increment_path(free), free);
/// ```
#[must_use]
pub fn increment_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let mut n: u64 = 1;
    loop {
        let candidate = parent.join(format!("{stem}_{n}{extension}"));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Match `name` against a shell wildcard `pattern`
#[must_use]
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let mut pi = 0;
    let mut ni = 0;
    // Pattern position after the last '*', and the name position it resumes from
    let mut backtrack: Option<(usize, usize)> = None;

    while ni < name.len() {
        if pattern.get(pi) == Some(&'*') {
            pi += 1;
            backtrack = Some((pi, ni));
            continue;
        }

        if let Some(next) = match_single(&pattern, pi, name[ni]) {
            pi = next;
            ni += 1;
            continue;
        }

        match backtrack {
            Some((star_pi, star_ni)) => {
                pi = star_pi;
                ni = star_ni + 1;
                backtrack = Some((star_pi, star_ni + 1));
            }
            None => return false,
        }
    }

    pattern[pi..].iter().all(|&c| c == '*')
}

/// If the token at `pi` matches `ch`, the pattern index after the token
fn match_single(pattern: &[char], pi: usize, ch: char) -> Option<usize> {
    match *pattern.get(pi)? {
        '?' => Some(pi + 1),
        '[' => match match_class(pattern, pi, ch) {
            Some((true, next)) => Some(next),
            Some((false, _)) => None,
            // Unterminated class: '[' is literal
            None => (ch == '[').then_some(pi + 1),
        },
        c => (c == ch).then_some(pi + 1),
    }
}

/// Evaluate the bracket class starting at `start`.
///
/// Returns whether `ch` is accepted and the index after the closing `]`,
/// or `None` if the class is unterminated.
fn match_class(pattern: &[char], start: usize, ch: char) -> Option<(bool, usize)> {
    let mut i = start + 1;
    let negate = matches!(pattern.get(i), Some('!' | '^'));
    if negate {
        i += 1;
    }

    let mut matched = false;
    let mut first = true;
    loop {
        let c = *pattern.get(i)?;
        if c == ']' && !first {
            return Some((matched != negate, i + 1));
        }
        first = false;

        match (pattern.get(i + 1), pattern.get(i + 2)) {
            (Some('-'), Some(&hi)) if hi != ']' => {
                if (c..=hi).contains(&ch) {
                    matched = true;
                }
                i += 3;
            }
            _ => {
                if c == ch {
                    matched = true;
                }
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_match() {
        assert!(wildcard_match("*.cdf", "mvn_swe_l2_20190407.cdf"));
        assert!(wildcard_match("mvn_*_2019????.cdf", "mvn_swe_l2_20190407.cdf"));
        assert!(!wildcard_match("*.cdf", "data.cdf.gz"));
        assert!(wildcard_match("*", ""));
        assert!(!wildcard_match("?", ""));
        assert!(wildcard_match("a*b*c", "aXXbYYbc"));
        assert!(!wildcard_match("a*b*c", "aXXbYYbd"));
        assert!(wildcard_match("exact.txt", "exact.txt"));
        assert!(!wildcard_match("exact.txt", "exact.txt2"));
    }

    #[test]
    fn test_wildcard_classes() {
        assert!(wildcard_match("file[0-9].txt", "file7.txt"));
        assert!(!wildcard_match("file[0-9].txt", "fileA.txt"));
        assert!(wildcard_match("file[!0-9].txt", "fileA.txt"));
        assert!(wildcard_match("[]x]", "]"));
        assert!(wildcard_match("[ab-]", "-"));
        // Unterminated class is literal
        assert!(wildcard_match("a[b", "a[b"));
    }
}
