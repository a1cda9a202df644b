// Pattern Matching Utilities
// Shell-style glob patterns for filtering expanded paths

use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::core::error::{Annotate, Result};

/// Check whether a string contains glob metacharacters
pub fn has_glob_meta(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Pattern matcher for excluding paths from glob results
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    patterns: Vec<Pattern>,
    options: MatchOptions,
}

impl PatternMatcher {
    /// Create a new pattern matcher with the given patterns
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self::default();
        for pattern in patterns {
            matcher.add_pattern(pattern.as_ref())?;
        }
        Ok(matcher)
    }

    /// Require `/` to be matched literally, so `*` stays within one component
    pub fn literal_separator(mut self) -> Self {
        self.options.require_literal_separator = true;
        self
    }

    /// Check if a path matches any pattern
    pub fn matches(&self, path: &Path) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_path_with(path, self.options))
    }

    /// Add a pattern
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let compiled =
            Pattern::new(pattern).annotate(|| format!("Invalid glob pattern '{pattern}'"))?;
        self.patterns.push(compiled);
        Ok(())
    }

    /// Get all patterns
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            options: MatchOptions::new(),
        }
    }
}
