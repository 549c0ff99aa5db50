//! Engine configuration.
//!
//! Settings come from the environment, after `.env.local` and `.env` at the
//! repository root have been loaded. Explicit values (such as command-line
//! arguments) override them.

use std::path::{Path, PathBuf};

/// Default tracing filter when `HVA_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "hva_engine=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// File replayed into the hotel on start-up
    pub import_file: Option<PathBuf>,
    /// File loaded on start-up (if present) and saved to on exit
    pub save_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            import_file: None,
            save_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Read the configuration from `HVA_IMPORT_FILE`, `HVA_SAVE_FILE` and `HVA_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            import_file: get("HVA_IMPORT_FILE").map(PathBuf::from),
            save_file: get("HVA_SAVE_FILE").map(PathBuf::from),
            log_filter: get("HVA_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Override the files with positional arguments: import file, then save file.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        let mut args = args.into_iter();
        if let Some(import_file) = args.next() {
            self.import_file = Some(import_file.into());
        }
        if let Some(save_file) = args.next() {
            self.save_file = Some(save_file.into());
        }
        self
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = EngineConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.log_filter, "hva_engine=info");
    }

    #[test]
    fn reads_files_and_filter() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("HVA_IMPORT_FILE", "data/hotel.txt"),
            ("HVA_SAVE_FILE", "hotel.json"),
            ("HVA_LOG", "hva_engine=debug"),
        ]));
        assert_eq!(config.import_file, Some(PathBuf::from("data/hotel.txt")));
        assert_eq!(config.save_file, Some(PathBuf::from("hotel.json")));
        assert_eq!(config.log_filter, "hva_engine=debug");
    }

    #[test]
    fn blank_values_are_unset() {
        let config = EngineConfig::from_lookup(lookup(&[("HVA_SAVE_FILE", "  ")]));
        assert_eq!(config.save_file, None);
    }

    #[test]
    fn arguments_override_environment() {
        let config = EngineConfig::from_lookup(lookup(&[("HVA_IMPORT_FILE", "env.txt")]))
            .with_args(["args.txt"]);
        assert_eq!(config.import_file, Some(PathBuf::from("args.txt")));
        assert_eq!(config.save_file, None);
    }
}
