use serde::{Deserialize, Serialize};

pub const DEFAULT_BUILD_DIR: &str = ".build";
pub const DEFAULT_SRC_DIR: &str = "src";
pub const DEFAULT_HEX_FILENAME: &str = "firmware.hex";

/// Install locations probed when no distribution root is configured, in
/// priority order.
pub const ARDUINO_DIST_DIR_GUESSES: &[&str] = &["/usr/local/share/arduino", "/usr/share/arduino"];

/// Default tier of a [`ResourceEnvironment`](crate::ResourceEnvironment).
///
/// These values are consulted only when the explicit tier has no entry for
/// the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub templates_dir: String,
    pub build_dir: String,
    pub src_dir: String,
    pub hex_filename: String,
    #[serde(default)]
    pub arduino_dist_dir: Option<String>,
    pub arduino_dist_dir_guesses: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            build_dir: DEFAULT_BUILD_DIR.to_string(),
            src_dir: DEFAULT_SRC_DIR.to_string(),
            hex_filename: DEFAULT_HEX_FILENAME.to_string(),
            arduino_dist_dir: None,
            arduino_dist_dir_guesses: ARDUINO_DIST_DIR_GUESSES
                .iter()
                .map(|g| (*g).to_string())
                .collect(),
        }
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Overlay `INO_*` variables from `lookup` onto the built-in defaults.
    /// Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            templates_dir: var("INO_TEMPLATES_DIR").unwrap_or(defaults.templates_dir),
            build_dir: var("INO_BUILD_DIR").unwrap_or(defaults.build_dir),
            src_dir: var("INO_SRC_DIR").unwrap_or(defaults.src_dir),
            hex_filename: var("INO_HEX_FILENAME").unwrap_or(defaults.hex_filename),
            arduino_dist_dir: var("INO_ARDUINO_DIST_DIR").or(defaults.arduino_dist_dir),
            arduino_dist_dir_guesses: defaults.arduino_dist_dir_guesses,
        }
    }
}

fn default_templates_dir() -> String {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("templates")
        .to_string_lossy()
        .into_owned()
}
