//! Message templates.
//!
//! A template is a regular expression that must match a whole commit
//! message, from its first byte to its last. A message passes when at least
//! one template of the set matches it.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{LintError, LintResult};

/// A compiled, named template.
#[derive(Clone, Debug)]
pub struct Matcher {
    name: String,
    regex: Regex,
}

impl Matcher {
    /// Compile `pattern`, anchored at the start of the message.
    ///
    /// The pattern must be valid on its own: unbalanced groups could
    /// otherwise close the anchoring group and leave a branch unanchored.
    pub fn new(name: &str, pattern: &str) -> LintResult<Self> {
        let invalid = |source| LintError::InvalidMatcher {
            name: name.to_string(),
            pattern: pattern.to_string(),
            source,
        };
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(invalid)?;
        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the template covers the whole message.
    pub fn matches(&self, message: &str) -> bool {
        self.regex
            .find(message)
            .is_some_and(|m| m.end() == message.len())
    }
}

/// Every template of a configuration, compiled once.
#[derive(Clone, Debug, Default)]
pub struct MatcherSet {
    matchers: Vec<Matcher>,
}

impl MatcherSet {
    /// Compile a `name -> pattern` map.
    ///
    /// Fails on the first pattern, in name order, that is not a valid
    /// regular expression.
    pub fn compile(patterns: &BTreeMap<String, String>) -> LintResult<Self> {
        let matchers = patterns
            .iter()
            .map(|(name, pattern)| Matcher::new(name, pattern))
            .collect::<LintResult<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// The first template matching `message`, if any.
    pub fn find_match(&self, message: &str) -> Option<&Matcher> {
        self.matchers.iter().find(|m| m.matches(message))
    }
}

/// Returns `true` if `summary` is at most `max` characters long.
pub fn summary_length_is_valid(summary: &str, max: usize) -> bool {
    summary.chars().count() <= max
}
