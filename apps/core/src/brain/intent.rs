//! Intent classification for the portfolio chat.
//!
//! Routes a free-text message to one of the fixed answer panels using ordered
//! keyword rules. Categories are tried in precedence order and the first rule
//! that matches wins; anything unmatched goes to the remote assistant.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::*;
use super::rules::{Exclusion, Matcher, Rule, Utterance};

/// Response category chosen for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Who the portfolio owner is
    Identity,
    /// Work history
    Experience,
    /// Technical skills
    Skills,
    /// Built projects
    Projects,
    /// How to get in touch
    Contact,
    /// Research work and blog posts
    Research,
    /// Nothing matched; ask the remote assistant
    Fallback,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Identity,
        Category::Experience,
        Category::Skills,
        Category::Projects,
        Category::Contact,
        Category::Research,
        Category::Fallback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Identity => "identity",
            Category::Experience => "experience",
            Category::Skills => "skills",
            Category::Projects => "projects",
            Category::Contact => "contact",
            Category::Research => "research",
            Category::Fallback => "fallback",
        }
    }

    /// Whether the answer is a canned panel rather than a remote reply.
    pub fn is_panel(&self) -> bool {
        !matches!(self, Category::Fallback)
    }
}

/// Result of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Name of the rule that fired; `None` for [`Category::Fallback`].
    pub rule: Option<&'static str>,
}

/// The ordered rules of one category.
#[derive(Debug)]
pub struct CategoryRules {
    pub category: Category,
    pub rules: &'static [Rule],
}

impl CategoryRules {
    /// Returns the first matching rule of this category.
    pub fn first_match(&self, utterance: &Utterance<'_>) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| rule.matches(utterance))
    }

    pub fn rule(&self, name: &str) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

/// Identity rules that must not fire on project questions about someone else.
const NOT_A_PROJECT_QUESTION: Exclusion = Exclusion::any_of(PROJECT).unless(&["ahib"]);

/// Skills phrases and qualifiers that also mention projects are left to other rules.
const MENTIONS_PROJECTS: Exclusion = Exclusion::any_of(PROJECT);

/// Project qualifiers that also mention skills are left to other rules.
const MENTIONS_SKILLS: Exclusion = Exclusion::any_of(SKILLS);

static EXPERIENCE_RULES: [Rule; 4] = [
    Rule::phrases("experience_phrase", EXPERIENCE_PHRASES),
    Rule::co_occurs("experience_qualified", EXPERIENCE, EXPERIENCE_QUALIFIERS),
    Rule::co_occurs("experience_tell_me_about", TELL_ME_ABOUT, EXPERIENCE),
    Rule::co_occurs("experience_what_is", &["what is"], EXPERIENCE),
];

static SKILLS_RULES: [Rule; 4] = [
    Rule::phrases("skills_phrase", SKILLS_PHRASES).excluding(MENTIONS_PROJECTS),
    Rule::co_occurs("skills_qualified", SKILLS, SKILLS_QUALIFIERS).excluding(MENTIONS_PROJECTS),
    Rule::co_occurs("expertise_qualified", EXPERTISE, EXPERTISE_QUALIFIERS),
    Rule::co_occurs("skills_open_question", SKILLS_OPENERS, SKILLS),
];

static RESEARCH_RULES: [Rule; 4] = [
    Rule::phrases("research_phrase", RESEARCH_PHRASES),
    Rule::co_occurs("research_work", RESEARCH, WORK),
    Rule::co_occurs("blog_writing", BLOG, WRITING),
    Rule::co_occurs("research_open_question", RESEARCH_OPENERS, RESEARCH_TOPICS),
];

static IDENTITY_RULES: [Rule; 7] = [
    Rule::new("identity_trigger", Matcher::Exact(IDENTITY_TRIGGER)),
    Rule::co_occurs("identity_question", IDENTITY_KEYWORDS, QUESTION_PATTERNS)
        .excluding(NOT_A_PROJECT_QUESTION),
    Rule::phrases("identity_direct", DIRECT_QUESTIONS).excluding(NOT_A_PROJECT_QUESTION),
    Rule::co_occurs("identity_special_case", SPECIAL_CASE_PHRASES, IDENTITY_KEYWORDS)
        .excluding(NOT_A_PROJECT_QUESTION),
    Rule::new(
        "identity_compact_name",
        Matcher::CompactCoOccurs {
            triggers: COMPACT_NAME,
            qualifiers: COMPACT_NAME_QUALIFIERS,
        },
    )
    .excluding(NOT_A_PROJECT_QUESTION),
    Rule::co_occurs("identity_tell_me_about_you", TELL_ME_ABOUT, YOU),
    Rule::phrases("identity_self_introduction", SELF_INTRODUCTION),
];

static PROJECT_RULES: [Rule; 4] = [
    Rule::phrases("projects_phrase", PROJECT_PHRASES),
    Rule::phrases("projects_demonstrating_skills", PROJECTS_DEMONSTRATING_SKILLS)
        .excluding(Exclusion::any_of(&["what skills"])),
    Rule::co_occurs("projects_qualified", PROJECT, PROJECT_QUALIFIERS).excluding(MENTIONS_SKILLS),
    Rule::co_occurs("projects_open_question", PROJECT_OPENERS, PROJECT),
];

static CONTACT_RULES: [Rule; 5] = [
    Rule::phrases("contact_phrase", CONTACT_PHRASES),
    Rule::co_occurs("contact_qualified", CONTACT, CONTACT_QUALIFIERS),
    Rule::co_occurs("contact_how_can_i", HOW_CAN_I, CONTACT_VERBS),
    Rule::co_occurs("contact_how", HOW, CONTACT),
    Rule::co_occurs("contact_details", CONTACT, CONTACT_DETAILS),
];

/// Category precedence. Experience and Skills come before Identity because
/// "tell me about your experience" would otherwise read as an identity question.
static PRECEDENCE: [CategoryRules; 6] = [
    CategoryRules {
        category: Category::Experience,
        rules: &EXPERIENCE_RULES,
    },
    CategoryRules {
        category: Category::Skills,
        rules: &SKILLS_RULES,
    },
    CategoryRules {
        category: Category::Research,
        rules: &RESEARCH_RULES,
    },
    CategoryRules {
        category: Category::Identity,
        rules: &IDENTITY_RULES,
    },
    CategoryRules {
        category: Category::Projects,
        rules: &PROJECT_RULES,
    },
    CategoryRules {
        category: Category::Contact,
        rules: &CONTACT_RULES,
    },
];

/// Rule-based intent classifier.
///
/// Stateless: the same text always yields the same category.
#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier {
    precedence: &'static [CategoryRules],
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self {
            precedence: &PRECEDENCE,
        }
    }

    /// Classify a message into a category.
    pub fn classify(&self, text: &str) -> Category {
        self.classify_detailed(text).category
    }

    /// Classify a message and report which rule decided it.
    pub fn classify_detailed(&self, text: &str) -> ClassificationResult {
        let utterance = Utterance::new(text);

        if !utterance.is_empty() {
            for group in self.precedence {
                if let Some(rule) = group.first_match(&utterance) {
                    return ClassificationResult {
                        category: group.category,
                        rule: Some(rule.name),
                    };
                }
            }
        }

        ClassificationResult {
            category: Category::Fallback,
            rule: None,
        }
    }

    /// Categories with their rules, in evaluation order.
    pub fn precedence(&self) -> &'static [CategoryRules] {
        self.precedence
    }

    pub fn rules_for(&self, category: Category) -> Option<&'static CategoryRules> {
        self.precedence.iter().find(|group| group.category == category)
    }
}

/// Classify with the default rule set.
pub fn classify(text: &str) -> Category {
    IntentClassifier::new().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_examples() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("Tell me about your work experience"), Category::Experience);
        assert_eq!(classifier.classify("What are your technical skills?"), Category::Skills);
        assert_eq!(classifier.classify("Show me your projects"), Category::Projects);
        assert_eq!(classifier.classify("How can I contact you?"), Category::Contact);
        assert_eq!(classifier.classify("Who is Ahib?"), Category::Identity);
        assert_eq!(
            classifier.classify("Tell me about your research work and blogs"),
            Category::Research
        );
        assert_eq!(classifier.classify("What's the weather today?"), Category::Fallback);
    }

    #[test]
    fn test_empty_and_punctuation_fall_back() {
        let classifier = IntentClassifier::new();

        for text in ["", "   ", "?!", "...", "\n\t"] {
            let result = classifier.classify_detailed(text);
            assert_eq!(result.category, Category::Fallback, "Expected Fallback for {:?}", text);
            assert_eq!(result.rule, None);
        }
    }

    #[test]
    fn test_matched_rule_is_reported() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify_detailed("Tell me about your work experience");
        assert_eq!(result.rule, Some("experience_phrase"));

        let result = classifier.classify_detailed("Me😄");
        assert_eq!(result.category, Category::Identity);
        assert_eq!(result.rule, Some("identity_trigger"));
    }

    #[test]
    fn test_precedence_order() {
        let order: Vec<Category> = IntentClassifier::new()
            .precedence()
            .iter()
            .map(|group| group.category)
            .collect();

        assert_eq!(
            order,
            vec![
                Category::Experience,
                Category::Skills,
                Category::Research,
                Category::Identity,
                Category::Projects,
                Category::Contact,
            ]
        );
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<&str> = IntentClassifier::new()
            .precedence()
            .iter()
            .flat_map(|group| group.rules.iter().map(|rule| rule.name))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_free_function_matches_classifier() {
        assert_eq!(classify("Who is Ahib?"), Category::Identity);
    }
}
