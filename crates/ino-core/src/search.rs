//! Search-place expansion and the place-by-item existence scan.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

#[cfg(windows)]
const VAR_PATTERN: &str = r"\$(\w+)|\$\{([^}]*)\}|%(\w+)%";
#[cfg(not(windows))]
const VAR_PATTERN: &str = r"\$(\w+)|\$\{([^}]*)\}";

static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VAR_PATTERN).expect("variable pattern is a valid regex"));

/// What a successful search yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// The full `place/item` path.
    Join,
    /// The place that contains the item.
    Directory,
}

/// Substitute `$NAME` and `${NAME}` references using `lookup`.
/// Unset variables become the empty string.
pub fn expand_vars(input: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
    VAR_RE
        .replace_all(input, |caps: &Captures| {
            let name = (1..caps.len())
                .find_map(|i| caps.get(i))
                .map_or("", |m| m.as_str());
            lookup(name).unwrap_or_default()
        })
        .into_owned()
}

/// Expand every entry of `places` and split it on the platform path-list
/// separator, preserving order.
pub fn expand_places(places: &[&str], lookup: &dyn Fn(&str) -> Option<String>) -> Vec<String> {
    places
        .iter()
        .flat_map(|place| {
            let expanded = expand_vars(place, lookup);
            std::env::split_paths(&expanded)
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Return the first `place/item` that exists, places outer and items inner.
pub fn scan(items: &[&str], places: &[String], mode: JoinMode) -> Option<String> {
    for place in places {
        for item in items {
            let candidate = Path::new(place).join(item);
            tracing::debug!(path = %candidate.display(), "probing");
            if candidate.exists() {
                return Some(match mode {
                    JoinMode::Join => candidate.to_string_lossy().into_owned(),
                    JoinMode::Directory => place.clone(),
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn expand_plain_and_braced() {
        let lookup = vars(&[("HOME", "/home/ada"), ("SDK", "/opt/sdk")]);
        assert_eq!(expand_vars("$HOME/bin", &lookup), "/home/ada/bin");
        assert_eq!(expand_vars("${SDK}tools", &lookup), "/opt/sdktools");
    }

    #[test]
    fn expand_unset_is_empty() {
        let lookup = vars(&[]);
        assert_eq!(expand_vars("$NOPE/bin", &lookup), "/bin");
        assert_eq!(expand_vars("${NOPE}", &lookup), "");
    }

    #[test]
    fn expand_without_references() {
        let lookup = vars(&[]);
        assert_eq!(expand_vars("/usr/bin", &lookup), "/usr/bin");
    }

    #[cfg(unix)]
    #[test]
    fn places_are_split_in_order() {
        let lookup = vars(&[("FOO", "/x:/y")]);
        let places = expand_places(&["/first", "$FOO", "/last"], &lookup);
        assert_eq!(places, vec!["/first", "/x", "/y", "/last"]);
    }

    #[test]
    fn no_places_no_candidates() {
        let lookup = vars(&[]);
        assert!(expand_places(&[], &lookup).is_empty());
    }

    #[test]
    fn scan_prefers_earlier_place() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        std::fs::create_dir_all(&a).unwrap();
        std::fs::create_dir_all(&b).unwrap();
        std::fs::write(a.join("x"), "").unwrap();
        std::fs::write(b.join("y"), "").unwrap();

        let places = vec![
            a.to_string_lossy().into_owned(),
            b.to_string_lossy().into_owned(),
        ];
        let found = scan(&["y", "x"], &places, JoinMode::Join).unwrap();
        assert_eq!(found, a.join("x").to_string_lossy());
    }

    #[test]
    fn scan_directory_mode_returns_place() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("gcc"), "").unwrap();
        let places = vec![dir.path().to_string_lossy().into_owned()];

        let found = scan(&["gcc"], &places, JoinMode::Directory).unwrap();
        assert_eq!(found, places[0]);
    }

    #[test]
    fn scan_nothing_found() {
        let dir = TempDir::new().unwrap();
        let places = vec![dir.path().to_string_lossy().into_owned()];
        assert_eq!(scan(&["missing"], &places, JoinMode::Join), None);
    }
}
