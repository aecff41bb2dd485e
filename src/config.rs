//! Where the startup resources live.

use std::env;
use std::path::PathBuf;

pub const LAYOUT_ENV: &str = "PALETA_LAYOUT";
pub const STYLESHEET_ENV: &str = "PALETA_STYLESHEET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub layout_path: PathBuf,
    pub stylesheet_path: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        Self {
            layout_path: assets.join("layout.json"),
            stylesheet_path: assets.join("style.json"),
        }
    }
}

impl ShellConfig {
    /// Defaults, with each path overridable from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key).map(PathBuf::from))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            layout_path: lookup(LAYOUT_ENV).unwrap_or(defaults.layout_path),
            stylesheet_path: lookup(STYLESHEET_ENV).unwrap_or(defaults.stylesheet_path),
        }
    }
}
