//! Named matching rules evaluated over a normalized utterance.
//!
//! A rule is plain data: a [`Matcher`] describing what must be present and an
//! optional [`Exclusion`] describing what must not be. Rules never allocate
//! and can be declared as `const`.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the pattern is a compile-time constant.
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("Invalid regex: non-alphanumeric pattern"));

/// A user message prepared for matching.
#[derive(Debug, Clone)]
pub struct Utterance<'a> {
    raw: &'a str,
    lower: String,
    compact: String,
}

impl<'a> Utterance<'a> {
    /// Trims the text, lowercases it and folds typographic apostrophes to `'`.
    pub fn new(text: &'a str) -> Self {
        let raw = text.trim();
        let lower = raw.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
        let compact = NON_ALPHANUMERIC.replace_all(&lower, "").into_owned();
        Self { raw, lower, compact }
    }

    /// The trimmed text exactly as typed.
    pub fn raw(&self) -> &str {
        self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Lowercase text with everything but `[a-z0-9]` removed.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower.contains(n))
    }
}

/// What a rule looks for.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// The trimmed raw text equals this string exactly.
    Exact(&'static str),
    /// Any of the phrases appears in the lowercase text.
    AnyPhrase(&'static [&'static str]),
    /// Any trigger appears together with any qualifier.
    CoOccurs {
        triggers: &'static [&'static str],
        qualifiers: &'static [&'static str],
    },
    /// Like `CoOccurs`, but triggers are searched in the alphanumeric-only text
    /// so "a.h.i.b" or "ahib's" still count.
    CompactCoOccurs {
        triggers: &'static [&'static str],
        qualifiers: &'static [&'static str],
    },
}

impl Matcher {
    pub fn matches(&self, utterance: &Utterance<'_>) -> bool {
        match *self {
            Matcher::Exact(text) => utterance.raw() == text,
            Matcher::AnyPhrase(phrases) => utterance.contains_any(phrases),
            Matcher::CoOccurs { triggers, qualifiers } => {
                utterance.contains_any(triggers) && utterance.contains_any(qualifiers)
            }
            Matcher::CompactCoOccurs { triggers, qualifiers } => {
                triggers.iter().any(|t| utterance.compact().contains(t))
                    && utterance.contains_any(qualifiers)
            }
        }
    }
}

/// Vetoes a match when any of `any_of` is present, unless one of `unless` is too.
#[derive(Debug, Clone, Copy)]
pub struct Exclusion {
    pub any_of: &'static [&'static str],
    pub unless: &'static [&'static str],
}

impl Exclusion {
    pub const fn any_of(words: &'static [&'static str]) -> Self {
        Self {
            any_of: words,
            unless: &[],
        }
    }

    pub const fn unless(self, words: &'static [&'static str]) -> Self {
        Self {
            any_of: self.any_of,
            unless: words,
        }
    }

    pub fn applies(&self, utterance: &Utterance<'_>) -> bool {
        utterance.contains_any(self.any_of) && !utterance.contains_any(self.unless)
    }
}

/// A named predicate over an utterance.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub exclusion: Option<Exclusion>,
}

impl Rule {
    pub const fn new(name: &'static str, matcher: Matcher) -> Self {
        Self {
            name,
            matcher,
            exclusion: None,
        }
    }

    pub const fn phrases(name: &'static str, phrases: &'static [&'static str]) -> Self {
        Self::new(name, Matcher::AnyPhrase(phrases))
    }

    pub const fn co_occurs(
        name: &'static str,
        triggers: &'static [&'static str],
        qualifiers: &'static [&'static str],
    ) -> Self {
        Self::new(name, Matcher::CoOccurs { triggers, qualifiers })
    }

    pub const fn excluding(self, exclusion: Exclusion) -> Self {
        Self {
            name: self.name,
            matcher: self.matcher,
            exclusion: Some(exclusion),
        }
    }

    pub fn matches(&self, utterance: &Utterance<'_>) -> bool {
        if let Some(exclusion) = &self.exclusion {
            if exclusion.applies(utterance) {
                return false;
            }
        }
        self.matcher.matches(utterance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_normalization() {
        let u = Utterance::new("  What\u{2019}s Ahib's EMAIL?  ");
        assert_eq!(u.raw(), "What\u{2019}s Ahib's EMAIL?");
        assert_eq!(u.lower(), "what's ahib's email?");
        assert_eq!(u.compact(), "whatsahibsemail");
    }

    #[test]
    fn test_exact_is_case_sensitive_on_trimmed_text() {
        let m = Matcher::Exact("Me😄");
        assert!(m.matches(&Utterance::new(" Me😄 ")));
        assert!(!m.matches(&Utterance::new("me😄")));
    }

    #[test]
    fn test_co_occurrence_needs_both_sides() {
        let rule = Rule::co_occurs("t", &["contact"], &["email"]);
        assert!(rule.matches(&Utterance::new("contact by email")));
        assert!(!rule.matches(&Utterance::new("contact")));
        assert!(!rule.matches(&Utterance::new("email")));
    }

    #[test]
    fn test_compact_triggers_ignore_punctuation() {
        let m = Matcher::CompactCoOccurs {
            triggers: &["ahib"],
            qualifiers: &["who"],
        };
        assert!(m.matches(&Utterance::new("who is a-h-i-b")));
        assert!(!m.matches(&Utterance::new("a-h-i-b")));
    }

    #[test]
    fn test_exclusion_with_waiver() {
        let exclusion = Exclusion::any_of(&["project"]).unless(&["ahib"]);
        assert!(exclusion.applies(&Utterance::new("your project")));
        assert!(!exclusion.applies(&Utterance::new("ahib's project")));
        assert!(!exclusion.applies(&Utterance::new("hello")));

        let rule = Rule::phrases("me", &["me"]).excluding(exclusion);
        assert!(rule.matches(&Utterance::new("tell me")));
        assert!(!rule.matches(&Utterance::new("show me the project")));
    }
}
