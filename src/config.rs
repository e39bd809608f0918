//! Loading [`GameOptions`] from INI-style configuration sources.
//!
//! The format is line based: `key = value`, with `;` and `#` comments and
//! `[section]` headers ignored. Values may be wrapped in double quotes.
//! Unknown keys and malformed values are skipped, leaving the default.

#[cfg(feature = "std")]
use std::path::Path;

#[cfg(feature = "std")]
use crate::error::ConfigError;
use crate::options::GameOptions;

/// Iterates over the `key = value` pairs of an INI-style source.
fn entries(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with([';', '#', '[']) {
            return None;
        }

        let (key, value) = line.split_once('=')?;
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        Some((key.trim(), value))
    })
}

impl GameOptions {
    /// Builds options from an INI-style source, starting from the defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use zombie_dice::GameOptions;
    ///
    /// let options = GameOptions::from_ini_str("[Game]\nbrains_to_win = 8\n");
    /// assert_eq!(options.brains_to_win, 8);
    /// ```
    #[must_use]
    pub fn from_ini_str(source: &str) -> Self {
        let mut options = Self::default();
        for (key, value) in entries(source) {
            if options.apply(key, value) {
                log::debug!("config: {key} = {value}");
            } else {
                log::warn!("config: ignoring {key} = {value:?}");
            }
        }
        options
    }

    /// Reads options from an `.ini` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no `.ini` extension or the file
    /// cannot be read.
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .ok_or(ConfigError::MissingExtension)?
            .to_string_lossy();
        if extension != "ini" {
            return Err(ConfigError::UnsupportedExtension(extension.into_owned()));
        }

        let source = std::fs::read_to_string(path)?;
        Ok(Self::from_ini_str(&source))
    }
}
