use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Where to find the native move-decision function.
///
/// Every key is optional in TOML:
/// ```toml
/// library = "/opt/2048/lib2048.so"
/// symbol = "find_best_move"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ResolverConfig {
    /// Shared library path, relative paths resolved against the working directory.
    #[serde(default = "defaults::library")]
    pub library: PathBuf,
    /// Exported `extern "C" fn(u64) -> int` to call.
    #[serde(default = "defaults::symbol")]
    pub symbol: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { library: defaults::library(), symbol: defaults::symbol() }
    }
}

impl ResolverConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn library() -> PathBuf { PathBuf::from("./lib2048.so") }
    pub fn symbol() -> String { "find_best_move".to_string() }
}
