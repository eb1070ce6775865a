//! Regex safety guard.
//!
//! User-supplied patterns pass through [`RegexGuard::compile`] before they
//! are ever executed. The guard enforces a length cap and a small heuristic
//! blacklist of catastrophic-backtracking shapes (a quantified group that is
//! itself quantified, or an alternation group under a quantifier). This is a
//! best-effort static check, not a proof of bounded execution time.
//!
//! Compiled patterns are cached by `(pattern, case_sensitive)` for the
//! lifetime of the guard, so a pattern shared by several filters compiles
//! once. The cache is owned by the guard instance; there is no global state,
//! and independent guards never interfere.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::error::{FilterError, Result};

/// Maximum accepted pattern length in characters.
pub const MAX_PATTERN_LEN: usize = 500;

/// Validates, compiles, and caches user-supplied regular expressions.
#[derive(Debug)]
pub struct RegexGuard {
    cache: HashMap<(String, bool), Regex>,
    nested_quantifier: Regex,
    quantified_alternation: Regex,
}

impl RegexGuard {
    /// Creates a guard with an empty cache.
    pub fn new() -> Self {
        RegexGuard {
            cache: HashMap::new(),
            // A group containing a quantifier, itself followed by a
            // quantifier: (a+)+, ([a-z]+)*, (\d*){2,}
            nested_quantifier: Regex::new(r"\([^()]*[+*][^()]*\)[+*{]")
                .expect("static detector pattern"),
            // An alternation group under a quantifier: (a|b)+
            quantified_alternation: Regex::new(r"\([^()]*\|[^()]*\)[+*{]")
                .expect("static detector pattern"),
        }
    }

    /// Validates and compiles a pattern, returning the cached compilation.
    ///
    /// Rejects patterns longer than [`MAX_PATTERN_LEN`] before anything
    /// else, then applies the backtracking heuristics, then compiles. Any
    /// failure is a [`FilterError::Regex`].
    pub fn compile(&mut self, pattern: &str, case_sensitive: bool) -> Result<Regex> {
        let key = (pattern.to_string(), case_sensitive);
        if let Some(compiled) = self.cache.get(&key) {
            return Ok(compiled.clone());
        }

        self.validate(pattern)?;

        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| FilterError::Regex {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        self.cache.insert(key, compiled.clone());
        Ok(compiled)
    }

    /// Returns the number of distinct cached compilations.
    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }

    fn validate(&self, pattern: &str) -> Result<()> {
        let reject = |reason: &str| FilterError::Regex {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if pattern.chars().count() > MAX_PATTERN_LEN {
            return Err(reject("pattern too long"));
        }
        if self.nested_quantifier.is_match(pattern)
            || self.quantified_alternation.is_match(pattern)
        {
            return Err(reject("potentially dangerous pattern (nested quantifiers)"));
        }
        Ok(())
    }
}

impl Default for RegexGuard {
    fn default() -> Self {
        RegexGuard::new()
    }
}
