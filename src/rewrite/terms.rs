//! Case-preserving whole-word term substitution
//!
//! Scans text for whole-word occurrences of a target term and replaces each
//! with the replacement term in the matching canonical casing. The casing
//! policy is a fixed ordered rule table with exactly three entries:
//! `UPPER`, `Capitalized`, `lower`. A match that equals none of the three
//! canonical target forms (e.g. `YaLe`) is left unchanged.

use regex::Regex;

/// One entry of the casing rule table: an exact canonical form of the
/// target paired with the replacement in the same canonical casing.
#[derive(Debug, Clone)]
struct CaseRule {
    target_form: String,
    replacement_form: String,
}

/// Whole-word, case-variant-preserving term rewriter
///
/// Pure: output depends only on the input text and the fixed term pair.
#[derive(Debug, Clone)]
pub struct TermRewriter {
    pattern: Regex,
    rules: Vec<CaseRule>,
}

impl TermRewriter {
    /// Create a rewriter for a target/replacement term pair.
    ///
    /// Terms must be non-empty; `ServerConfig::validate` enforces this
    /// before a rewriter is ever constructed.
    pub fn new(target: &str, replacement: &str) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(target)))
            .expect("Failed to build term pattern");

        // Rule order matters: for a single-letter term the UPPER and
        // Capitalized forms coincide and the first rule wins.
        let rules = vec![
            CaseRule {
                target_form: target.to_uppercase(),
                replacement_form: replacement.to_uppercase(),
            },
            CaseRule {
                target_form: capitalize(target),
                replacement_form: capitalize(replacement),
            },
            CaseRule {
                target_form: target.to_lowercase(),
                replacement_form: replacement.to_lowercase(),
            },
        ];

        Self { pattern, rules }
    }

    /// Replace every qualifying whole-word occurrence of the target term.
    ///
    /// Matches are evaluated independently against the original text, so
    /// word boundaries never shift with earlier substitutions. Text with no
    /// matches comes back unchanged; no trimming, no whitespace changes.
    pub fn rewrite(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        self.pattern
            .replace_all(input, |caps: &regex::Captures| {
                let matched = &caps[0];
                for rule in &self.rules {
                    if matched == rule.target_form {
                        return rule.replacement_form.clone();
                    }
                }
                // Mixed/irregular casing is outside the three canonical
                // variants and stays as-is.
                matched.to_string()
            })
            .into_owned()
    }
}

/// First letter uppercased, the rest lowercased
fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
