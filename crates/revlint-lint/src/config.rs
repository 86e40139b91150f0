//! The `.revlint.toml` configuration file.
//!
//! ```toml
//! [config]
//! exclude-merge-commits = true
//! check-summary-length = true
//! summary-length = 50
//!
//! [matchers]
//! all = "(?:ref|feat|test|fix|style)\\(.*?\\) : .*?\\n(?:\\n?(?:\\* .*?\\n)*)?"
//!
//! [examples]
//! a_simple_commit = "[feat|test|ref|fix|style](module) : A commit message"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::matcher::Matcher;
use crate::options::MatchOptions;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".revlint.toml";

/// Linter configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The `[config]` table.
    #[serde(rename = "config")]
    pub options: MatchOptions,
    /// Named templates a message must match, one of them at least.
    pub matchers: BTreeMap<String, String>,
    /// Named sample messages shown when a check fails.
    pub examples: BTreeMap<String, String>,
}

impl Config {
    /// Read and parse a configuration file. The result is not validated.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            matchers = config.matchers.len(),
            examples = config.examples.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Check that the configuration can drive a lint run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.matchers.is_empty() {
            return Err(ConfigError::NoMatchers);
        }
        if self.examples.is_empty() {
            return Err(ConfigError::NoExamples);
        }
        for (name, pattern) in &self.matchers {
            if Matcher::new(name, pattern).is_err() {
                return Err(ConfigError::InvalidMatcher {
                    name: name.clone(),
                    pattern: pattern.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
[config]
exclude-merge-commits = true
check-summary-length = true
summary-length = 72

[matchers]
all = "(?:ref|feat|test|fix|style)\\(.*?\\) : .*?\\n(?:\\n?(?:\\* .*?\\n)*)?"

[examples]
a_simple_commit = "[feat|test|ref|fix|style](module) : A commit message"
"#;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_sample() {
        let file = write_config(SAMPLE);
        let config = Config::load(file.path()).unwrap();
        assert!(config.options.exclude_merge_commits);
        assert!(config.options.check_summary_length);
        assert_eq!(config.options.summary_length, 72);
        assert_eq!(config.matchers.len(), 1);
        assert_eq!(
            config.examples["a_simple_commit"],
            "[feat|test|ref|fix|style](module) : A commit message"
        );
        config.validate().unwrap();
    }

    #[test]
    fn options_default_when_absent() {
        let config: Config = toml::from_str("[matchers]\na = \"a\"\n").unwrap();
        assert_eq!(config.options, MatchOptions::default());
        assert_eq!(config.options.summary_length, 50);
        assert!(config.examples.is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file() {
        let file = write_config("[matchers\n");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn validation_order() {
        let mut config = Config::default();
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "At least one matcher must be defined"
        );

        config.matchers.insert("broken".into(), "**".into());
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "At least one example must be defined"
        );

        config.examples.insert("one".into(), "an example".into());
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "Regexp \"**\" identified by \"broken\" is not a valid regexp, please check the syntax"
        );

        config.matchers.insert("broken".into(), ".*".into());
        config.validate().unwrap();
    }

    #[test]
    fn unbalanced_matcher_is_rejected() {
        let mut config = Config::default();
        config.matchers.insert("escape".into(), "a)|(?:b".into());
        config.examples.insert("one".into(), "an example".into());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMatcher { name, .. }) if name == "escape"
        ));
    }
}
