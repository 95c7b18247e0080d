//! Keyword fields: delimited lists of automation tags and emoji held in a
//! single cell.
//!
//! Two operations run over them:
//! - normalization, which strips skin-tone modifiers from emoji tokens
//! - reconciliation, which appends the master's keywords that a localized
//!   field is missing
//!
//! Existing sheets mix two delimiters: normalization splits and joins on `,`
//! while reconciliation splits and joins on `", "`. [`SeparatorPolicy::Legacy`]
//! reproduces that byte for byte; [`SeparatorPolicy::Canonical`] trims tokens
//! and always renders `", "`.

use serde::{Deserialize, Serialize};

use super::emoji::canonical_token;

/// Delimiter used to split a raw field into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `,`
    Comma,
    /// `, `
    CommaSpace,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::CommaSpace => ", ",
        }
    }
}

/// How keyword fields are split and rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeparatorPolicy {
    /// Normalize on `,`, reconcile on `", "`, untrimmed.
    #[default]
    Legacy,
    /// Split on `,`, trim, drop empty tokens, render with `", "`.
    Canonical,
}

impl std::fmt::Display for SeparatorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeparatorPolicy::Legacy => write!(f, "legacy"),
            SeparatorPolicy::Canonical => write!(f, "canonical"),
        }
    }
}

/// An ordered list of keyword tokens.
///
/// Tokens may be empty and duplicates are kept, so
/// `KeywordField::parse(raw, d).render(d) == raw` for every input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordField {
    tokens: Vec<String>,
}

impl KeywordField {
    /// Split `raw` on `delimiter`. A field without delimiters is a single token.
    pub fn parse(raw: &str, delimiter: Delimiter) -> Self {
        Self {
            tokens: raw.split(delimiter.as_str()).map(String::from).collect(),
        }
    }

    /// Split `raw` on `,`, trimming whitespace and dropping empty tokens.
    pub fn parse_trimmed(raw: &str) -> Self {
        Self {
            tokens: raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn render(&self, delimiter: Delimiter) -> String {
        self.tokens.join(delimiter.as_str())
    }

    /// Strip skin-tone modifiers from every emoji token.
    pub fn normalize_emoji(self) -> Self {
        Self {
            tokens: self.tokens.iter().map(|t| canonical_token(t)).collect(),
        }
    }

    /// Tokens of `self` (in order) that do not appear in `other`.
    pub fn missing_from(&self, other: &KeywordField) -> KeywordField {
        Self {
            tokens: self
                .tokens
                .iter()
                .filter(|t| !other.contains(t))
                .cloned()
                .collect(),
        }
    }

    /// Append the tokens of `other` after the tokens of `self`.
    pub fn extend(mut self, other: KeywordField) -> Self {
        self.tokens.extend(other.tokens);
        self
    }
}

impl SeparatorPolicy {
    /// Canonicalize the emoji tokens of a raw keyword field.
    pub fn normalize_field(&self, raw: &str) -> String {
        match self {
            SeparatorPolicy::Legacy => KeywordField::parse(raw, Delimiter::Comma)
                .normalize_emoji()
                .render(Delimiter::Comma),
            SeparatorPolicy::Canonical => KeywordField::parse_trimmed(raw)
                .normalize_emoji()
                .render(Delimiter::CommaSpace),
        }
    }

    /// Append the keywords of `english` missing from `target`.
    ///
    /// Returns `target` unchanged when nothing is missing. Target-only
    /// keywords are never removed.
    pub fn reconcile(&self, target: &str, english: &str) -> String {
        match self {
            SeparatorPolicy::Legacy => {
                let target_field = KeywordField::parse(target, Delimiter::CommaSpace);
                let english_field = KeywordField::parse(english, Delimiter::CommaSpace);
                let missing = english_field
                    .missing_from(&target_field)
                    .render(Delimiter::CommaSpace);
                if missing.is_empty() {
                    target.to_string()
                } else {
                    format!("{}, {}", target, missing)
                }
            }
            SeparatorPolicy::Canonical => {
                let target_field = KeywordField::parse_trimmed(target);
                let english_field = KeywordField::parse_trimmed(english);
                let missing = english_field.missing_from(&target_field);
                if missing.is_empty() {
                    target.to_string()
                } else {
                    target_field.extend(missing).render(Delimiter::CommaSpace)
                }
            }
        }
    }
}

/// Normalize a raw keyword field with the legacy `,` delimiter.
pub fn normalize_keywords(raw: &str) -> String {
    SeparatorPolicy::Legacy.normalize_field(raw)
}

/// Reconcile two `", "`-joined keyword fields with legacy semantics.
pub fn reconcile(target: &str, english: &str) -> String {
    SeparatorPolicy::Legacy.reconcile(target, english)
}
