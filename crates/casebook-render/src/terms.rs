//! Terminology normalization applied to narrative text before rendering.
//!
//! Rule files group replacement rules into named categories that apply in a
//! fixed order, from disease-eponym conversion down to honorific cleanup,
//! following the conventions used for publication-ready case reports.
//! Normalization touches only narrative fields; identifiers and captions
//! are never rewritten.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use casebook_model::CaseRecord;

/// Category application order. Categories missing from the file are
/// skipped; unknown categories are reported and ignored.
const CATEGORY_ORDER: [&str; 8] = [
    "人名由来病名",
    "検査名変換",
    "薬剤呼称",
    "医学用語表記",
    "ひらがな表記必須",
    "年齢表記",
    "文章表現",
    "敬語表現",
];

/// Errors raised while loading a term-rule file.
#[derive(Debug, Error)]
pub enum TermRulesError {
    #[error("failed to read rule file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid rule file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid pattern {pattern:?} in category {category}: {source}")]
    Pattern {
        category: String,
        pattern: String,
        source: regex::Error,
    },
}

/// One replacement rule as authored in the rule file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRule {
    pattern: String,
    replacement: String,
    #[serde(default)]
    context: Option<Vec<String>>,
    #[serde(default)]
    case_sensitive: Option<bool>,
    #[serde(default)]
    regex: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    rules: Vec<RawRule>,
}

enum Matcher {
    /// Literal substring replacement of every occurrence.
    Plain(String),
    /// Compiled regular expression, replacing every match.
    Pattern(Regex),
}

struct CompiledRule {
    matcher: Matcher,
    replacement: String,
    /// When non-empty, the rule applies only if at least one context
    /// string occurs in the text.
    context: Vec<String>,
}

impl CompiledRule {
    fn applies(&self, text: &str) -> bool {
        self.context.is_empty() || self.context.iter().any(|ctx| text.contains(ctx))
    }

    fn apply(&self, text: &str) -> String {
        if !self.applies(text) {
            return text.to_string();
        }
        match &self.matcher {
            Matcher::Plain(pattern) => text.replace(pattern, &self.replacement),
            Matcher::Pattern(regex) => regex
                .replace_all(text, self.replacement.as_str())
                .into_owned(),
        }
    }
}

/// A loaded, compiled rule set.
pub struct TermRules {
    categories: Vec<(String, Vec<CompiledRule>)>,
}

impl TermRules {
    /// Load and compile a rule file.
    pub fn load(path: &Path) -> Result<Self, TermRulesError> {
        let text = fs::read_to_string(path).map_err(|source| TermRulesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_json(&text)?;
        debug!(
            path = %path.display(),
            category_count = rules.categories.len(),
            rule_count = rules.rule_count(),
            "term rules loaded"
        );
        Ok(rules)
    }

    /// Parse and compile a rule file from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, TermRulesError> {
        let mut file: BTreeMap<String, RawCategory> = serde_json::from_str(text)?;
        let mut categories = Vec::new();
        for name in CATEGORY_ORDER {
            if let Some(category) = file.remove(name) {
                categories.push((name.to_string(), compile_rules(name, category.rules)?));
            }
        }
        for unknown in file.keys() {
            warn!(category = %unknown, "ignoring unknown rule category");
        }
        Ok(Self { categories })
    }

    /// Total number of compiled rules.
    pub fn rule_count(&self) -> usize {
        self.categories.iter().map(|(_, rules)| rules.len()).sum()
    }

    /// Apply every category to `text`, in the fixed order.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (_, rules) in &self.categories {
            for rule in rules {
                result = rule.apply(&result);
            }
        }
        result
    }

    /// Normalize every narrative field of `record` in place.
    pub fn normalize_record(&self, record: &mut CaseRecord) {
        for text in record.narrative_texts_mut() {
            let replaced = self.apply(text);
            *text = replaced;
        }
    }
}

fn compile_rules(
    category: &str,
    rules: Vec<RawRule>,
) -> Result<Vec<CompiledRule>, TermRulesError> {
    rules
        .into_iter()
        .map(|rule| {
            let matcher = if rule.regex.unwrap_or(false) {
                // caseSensitive defaults to true; only an explicit false
                // makes the pattern case-insensitive.
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(!rule.case_sensitive.unwrap_or(true))
                    .build()
                    .map_err(|source| TermRulesError::Pattern {
                        category: category.to_string(),
                        pattern: rule.pattern.clone(),
                        source,
                    })?;
                Matcher::Pattern(regex)
            } else {
                Matcher::Plain(rule.pattern)
            };
            Ok(CompiledRule {
                matcher,
                replacement: rule.replacement,
                context: rule.context.unwrap_or_default(),
            })
        })
        .collect()
}
