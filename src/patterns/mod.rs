//! Pattern registry — built-in rules merged with configured custom rules.
//!
//! The registry is a pure function of configuration: same flags and custom
//! list in, same ordered rule sequence out. Built-ins come first in their
//! declared order, then custom rules in supplied order. Name collisions
//! are not deduplicated here; they resolve at match reporting, where the
//! first matcher to claim a name wins.

mod builtin;

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;

/// A named, categorized detection pattern. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionRule {
    /// Unique identifier reported in matches.
    pub name: String,
    /// Human-readable grouping label shared by related rules.
    pub category: String,
    /// Regex source, compiled case-insensitively by the scanner.
    pub pattern: String,
}

/// Number of rules in the built-in table.
pub fn builtin_rule_count() -> usize {
    builtin::BUILTIN_RULES.len()
}

/// The built-in rule set in declaration order.
pub fn builtin_rules() -> Vec<DetectionRule> {
    builtin::BUILTIN_RULES
        .iter()
        .map(|(name, category, pattern)| DetectionRule {
            name: (*name).to_string(),
            category: (*category).to_string(),
            pattern: (*pattern).to_string(),
        })
        .collect()
}

/// Resolve the active rule sequence for the given configuration.
///
/// Built-ins (when enabled) followed by every well-formed custom rule in
/// supplied order. Custom entries missing a name, category, or pattern are
/// dropped here without error — one bad entry never affects the rest.
pub fn active_patterns(config: &FilterConfig) -> Vec<DetectionRule> {
    let mut rules = if config.use_builtin_patterns {
        builtin_rules()
    } else {
        Vec::new()
    };

    for custom in &config.custom_patterns {
        if custom.name.is_empty() || custom.category.is_empty() || custom.pattern.is_empty() {
            tracing::trace!(name = %custom.name, "dropping malformed custom pattern");
            continue;
        }
        rules.push(DetectionRule {
            name: custom.name.clone(),
            category: custom.category.clone(),
            pattern: custom.pattern.clone(),
        });
    }

    rules
}
