//! Lookups inside an Arduino distribution tree.

use std::path::PathBuf;

use crate::environment::ResourceEnvironment;
use crate::error::Result;

impl ResourceEnvironment {
    /// Candidate directories for `subpath` inside the distribution.
    ///
    /// For `["hardware", "tools"]` this yields, in order:
    /// ```text
    /// <arduino_dist_dir>/hardware/tools   (only when configured)
    /// /usr/local/share/arduino/hardware/tools
    /// /usr/share/arduino/hardware/tools
    /// ```
    pub fn arduino_dist_places(&self, subpath: &[&str]) -> Vec<String> {
        let configured = self.get("arduino_dist_dir").ok().filter(|d| !d.is_empty());

        configured
            .iter()
            .chain(self.arduino_dist_dir_guesses())
            .map(|root| {
                subpath
                    .iter()
                    .fold(PathBuf::from(root), |path, part| path.join(part))
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    pub fn find_arduino_dir(
        &mut self,
        key: &str,
        subpath: &[&str],
        items: &[&str],
        human_name: Option<&str>,
    ) -> Result<String> {
        let places = self.arduino_dist_places(subpath);
        let places: Vec<&str> = places.iter().map(String::as_str).collect();
        self.find_dir(key, items, &places, human_name)
    }

    /// Find a file named `key` in the distribution.
    pub fn find_arduino_file(
        &mut self,
        key: &str,
        subpath: &[&str],
        human_name: Option<&str>,
    ) -> Result<String> {
        let places = self.arduino_dist_places(subpath);
        let places: Vec<&str> = places.iter().map(String::as_str).collect();
        self.find_file(key, &[key], &places, human_name)
    }

    /// Tools bundled with the distribution are located by file name, not
    /// on `PATH`.
    pub fn find_arduino_tool(
        &mut self,
        key: &str,
        subpath: &[&str],
        human_name: Option<&str>,
    ) -> Result<String> {
        self.find_arduino_file(key, subpath, human_name)
    }
}
