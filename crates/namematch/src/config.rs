//! Match configuration files
//!
//! A config file is the JSON form of [`MatchConfig`]:
//!
//! ```json
//! {
//!   "aliases": {"bob": "Robert", "bill": "William"},
//!   "strip_prefix_words": ["Doctor", "Dr"],
//!   "strip_suffix_words": ["MD", "PhD", "Jr"]
//! }
//! ```

use crate::error::Result;
use namematch_core::MatchConfig;
use std::path::Path;
use tracing::debug;

/// Read and parse a config file
pub fn load_config(path: &Path) -> Result<MatchConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: MatchConfig = serde_json::from_str(&contents)?;
    debug!(
        path = %path.display(),
        aliases = config.aliases.len(),
        prefix_words = config.strip_prefix_words.len(),
        suffix_words = config.strip_suffix_words.len(),
        "loaded match config"
    );
    Ok(config)
}

/// Load `path` if given, otherwise start from an empty config
pub fn load_optional(path: Option<&Path>) -> Result<MatchConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(MatchConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn loads_json_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"aliases": {{"bob": "Robert"}}, "strip_suffix_words": ["MD"]}}"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.aliases.get("bob"), Some("Robert"));
        assert_eq!(config.strip_suffix_words, vec!["MD"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"aliases": ["not", "a", "map"]}}"#).unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn no_path_gives_default() {
        assert_eq!(load_optional(None).unwrap(), MatchConfig::default());
    }
}
