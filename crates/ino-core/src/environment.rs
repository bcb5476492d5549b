use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::config::EnvironmentConfig;
use crate::error::{Error, Result};
use crate::report::{LogReporter, SearchReporter};
use crate::search::{expand_places, scan, JoinMode};

type VarLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Two-tier key/value store with lazy, memoized resource discovery.
///
/// Lookups check the explicit entries first and fall back to the defaults in
/// [`EnvironmentConfig`]. Successful searches are recorded as explicit
/// entries and are never searched again.
pub struct ResourceEnvironment {
    entries: BTreeMap<String, String>,
    config: EnvironmentConfig,
    reporter: Box<dyn SearchReporter>,
    var_lookup: VarLookup,
}

impl fmt::Debug for ResourceEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceEnvironment")
            .field("entries", &self.entries)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ResourceEnvironment {
    pub fn new(config: EnvironmentConfig) -> Result<Self> {
        Self::with_entries(config, std::iter::empty::<(String, String)>())
    }

    /// Seed the explicit tier, then make sure `build_dir` exists.
    pub fn with_entries<I, K, V>(config: EnvironmentConfig, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env = Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            config,
            reporter: Box::new(LogReporter::default()),
            var_lookup: Box::new(|name| std::env::var(name).ok()),
        };
        env.ensure_build_dir()?;
        Ok(env)
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: impl SearchReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Replace the source used to expand variables in search places.
    #[must_use]
    pub fn with_var_lookup(mut self, lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.var_lookup = Box::new(lookup);
        self
    }

    fn ensure_build_dir(&self) -> Result<()> {
        let build_dir = Path::new(self.build_dir());
        if !build_dir.is_dir() {
            std::fs::create_dir(build_dir)?;
            tracing::debug!(path = %build_dir.display(), "created build directory");
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        if let Some(value) = self.entries.get(key) {
            return Ok(value.clone());
        }
        self.default_value(key)
    }

    fn default_value(&self, key: &str) -> Result<String> {
        let config = &self.config;
        match key {
            "templates_dir" => Ok(config.templates_dir.clone()),
            "build_dir" => Ok(config.build_dir.clone()),
            "src_dir" => Ok(config.src_dir.clone()),
            "hex_filename" => Ok(config.hex_filename.clone()),
            "hex_path" => Ok(self.hex_path()),
            "arduino_dist_dir" => config
                .arduino_dist_dir
                .clone()
                .ok_or_else(|| Error::UnsetKey(key.to_string())),
            _ => Err(Error::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Whether `key` has an explicit or discovered value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn resolve<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map_or(default, String::as_str)
    }

    pub fn templates_dir(&self) -> &str {
        self.resolve("templates_dir", &self.config.templates_dir)
    }

    pub fn build_dir(&self) -> &str {
        self.resolve("build_dir", &self.config.build_dir)
    }

    pub fn src_dir(&self) -> &str {
        self.resolve("src_dir", &self.config.src_dir)
    }

    pub fn hex_filename(&self) -> &str {
        self.resolve("hex_filename", &self.config.hex_filename)
    }

    /// `build_dir/hex_filename`, computed on every call.
    pub fn hex_path(&self) -> String {
        Path::new(self.build_dir())
            .join(self.hex_filename())
            .to_string_lossy()
            .into_owned()
    }

    pub fn arduino_dist_dir_guesses(&self) -> &[String] {
        &self.config.arduino_dist_dir_guesses
    }

    /// Locate the first existing `place/item` and memoize it under `key`.
    ///
    /// A key that already has a value returns it without touching the
    /// filesystem. Places are expanded and split before searching; see
    /// [`expand_places`](crate::search::expand_places).
    pub fn find(
        &mut self,
        key: &str,
        items: &[&str],
        places: &[&str],
        human_name: Option<&str>,
        mode: JoinMode,
    ) -> Result<String> {
        if let Some(cached) = self.entries.get(key) {
            tracing::debug!(key, value = %cached, "using cached resource");
            return Ok(cached.clone());
        }

        let human_name = human_name.unwrap_or(key);
        let places = expand_places(places, &*self.var_lookup);

        self.reporter.searching(human_name);
        if let Some(result) = scan(items, &places, mode) {
            self.reporter.found(&result);
            self.entries.insert(key.to_string(), result.clone());
            return Ok(result);
        }

        self.reporter.failed();
        Err(Error::NotFound {
            human_name: human_name.to_string(),
            places,
        })
    }

    pub fn find_dir(
        &mut self,
        key: &str,
        items: &[&str],
        places: &[&str],
        human_name: Option<&str>,
    ) -> Result<String> {
        self.find(key, items, places, human_name, JoinMode::Directory)
    }

    pub fn find_file(
        &mut self,
        key: &str,
        items: &[&str],
        places: &[&str],
        human_name: Option<&str>,
    ) -> Result<String> {
        self.find(key, items, places, human_name, JoinMode::Join)
    }

    /// Like [`find_file`](Self::find_file), searching `$PATH` when `places`
    /// is `None` or empty.
    pub fn find_tool(
        &mut self,
        key: &str,
        items: &[&str],
        places: Option<&[&str]>,
        human_name: Option<&str>,
    ) -> Result<String> {
        let places = places.filter(|p| !p.is_empty()).unwrap_or(&["$PATH"]);
        self.find_file(key, items, places, human_name)
    }
}
