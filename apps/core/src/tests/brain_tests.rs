//! Brain Module Tests
//!
//! Routing behaviour of the intent classifier: category examples, precedence
//! between overlapping categories, the skills/projects exclusion and the
//! individual named rules.

use crate::brain::{classify, Category, IntentClassifier, Utterance};
use crate::session::QuickAction;

#[cfg(test)]
mod routing_tests {
    use super::*;

    #[test]
    fn test_quick_action_prompts_open_their_panel() {
        let classifier = IntentClassifier::new();

        for action in QuickAction::ALL {
            assert_eq!(
                classifier.classify(action.prompt()),
                action.category(),
                "Expected {:?} for '{}'",
                action.category(),
                action.prompt()
            );
        }
    }

    #[test]
    fn test_every_input_gets_a_category() {
        let long = "lorem ipsum ".repeat(500);
        let inputs = [
            "",
            "🤖🤖🤖",
            "SELECT * FROM users;",
            "a",
            "ahib",
            long.as_str(),
            "¿Qué tal?",
        ];

        for text in inputs {
            let category = classify(text);
            assert!(Category::ALL.contains(&category), "No category for {:?}", text);
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = IntentClassifier::new();
        let text = "What technologies are you skilled in?";

        let first = classifier.classify_detailed(text);
        let second = classifier.classify_detailed(text);
        assert_eq!(first.category, second.category);
        assert_eq!(first.rule, second.rule);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(classify("  SHOW ME YOUR PROJECTS  "), Category::Projects);
        assert_eq!(classify("what are your TECHNICAL skills"), Category::Skills);
    }

    #[test]
    fn test_typographic_apostrophe_is_folded() {
        assert_eq!(classify("What\u{2019}s your email address"), Category::Contact);
        assert_eq!(classify("What's your email address"), Category::Contact);
    }

    #[test]
    fn test_unrelated_questions_fall_back() {
        for text in ["What's the weather today?", "Translate hello into French", "2 + 2"] {
            assert_eq!(classify(text), Category::Fallback, "Expected Fallback for '{}'", text);
        }
    }
}

#[cfg(test)]
mod precedence_tests {
    use super::*;

    #[test]
    fn test_experience_beats_identity() {
        // "tell me about" + "you" would be an identity question on its own.
        assert_eq!(classify("Tell me about your experience"), Category::Experience);
    }

    #[test]
    fn test_research_beats_identity() {
        assert_eq!(classify("Tell me about your research"), Category::Research);
    }

    #[test]
    fn test_identity_before_contact() {
        // "me" is matched as a substring and Identity is checked first.
        assert_eq!(classify("Please send me your contact details"), Category::Identity);
    }

    #[test]
    fn test_skills_and_projects_exclude_each_other() {
        let compound = [
            "What technical skills did you use in your projects?",
            "Which projects show your programming skills",
        ];

        for text in compound {
            let category = classify(text);
            assert_ne!(category, Category::Skills, "Skills fired for '{}'", text);
            assert_ne!(category, Category::Projects, "Projects fired for '{}'", text);
        }
    }

    #[test]
    fn test_explicit_project_phrase_survives_skills_mention() {
        let classifier = IntentClassifier::new();

        for text in ["Show me your projects and skills", "Show me your best projects and skills"] {
            let result = classifier.classify_detailed(text);
            assert_eq!(result.category, Category::Projects, "Expected Projects for '{}'", text);
            assert_eq!(result.rule, Some("projects_phrase"));
        }
    }

    #[test]
    fn test_open_skills_question_survives_projects_mention() {
        let result = IntentClassifier::new().classify_detailed("Tell me about your skills and projects");
        assert_eq!(result.category, Category::Skills);
        assert_eq!(result.rule, Some("skills_open_question"));
    }

    #[test]
    fn test_projects_demonstrating_skills() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify_detailed("Which of your projects demonstrate your skills?");
        assert_eq!(result.category, Category::Projects);
        assert_eq!(result.rule, Some("projects_demonstrating_skills"));

        assert_ne!(
            classify("What skills? Which of your projects demonstrate your skills"),
            Category::Projects
        );
    }

    #[test]
    fn test_project_question_is_not_identity() {
        // Contains "me", but mentions projects without naming Ahib.
        assert_eq!(classify("Show me some projects"), Category::Projects);
    }

    #[test]
    fn test_project_question_naming_ahib_is_identity() {
        let result = IntentClassifier::new().classify_detailed("Tell me about Ahib's projects");
        assert_eq!(result.category, Category::Identity);
        assert_eq!(result.rule, Some("identity_question"));
    }
}

#[cfg(test)]
mod rule_tests {
    use super::*;

    fn fires(category: Category, rule: &str, text: &str) -> bool {
        IntentClassifier::new()
            .rules_for(category)
            .and_then(|group| group.rule(rule))
            .map(|rule| rule.matches(&Utterance::new(text)))
            .unwrap_or_else(|| panic!("Unknown rule {}/{}", category, rule))
    }

    #[test]
    fn test_experience_rules() {
        assert!(fires(Category::Experience, "experience_phrase", "Where have you worked?"));
        assert!(fires(Category::Experience, "experience_qualified", "How much AI experience do you have?"));
        assert!(fires(Category::Experience, "experience_what_is", "What is your experience?"));
        assert!(!fires(Category::Experience, "experience_qualified", "Experience?"));
    }

    #[test]
    fn test_skills_rules() {
        assert!(fires(Category::Skills, "skills_phrase", "List your skills"));
        assert!(fires(Category::Skills, "expertise_qualified", "What's your domain expertise?"));
        assert!(fires(Category::Skills, "skills_open_question", "What are the skills you use daily"));
    }

    #[test]
    fn test_research_rules() {
        assert!(fires(Category::Research, "research_phrase", "Have you written any papers?"));
        assert!(fires(Category::Research, "blog_writing", "Do you blog? I like your writing"));
        assert!(!fires(Category::Research, "blog_writing", "Do you blog?"));
    }

    #[test]
    fn test_identity_rules() {
        assert!(fires(Category::Identity, "identity_trigger", "  Me😄 "));
        assert!(!fires(Category::Identity, "identity_trigger", "me😄"));
        assert!(fires(Category::Identity, "identity_special_case", "What kind of person is Ahib?"));
        assert!(fires(Category::Identity, "identity_compact_name", "A-H-I-B intro?"));
        assert!(fires(Category::Identity, "identity_self_introduction", "Who are you?"));
    }

    #[test]
    fn test_qualifier_rules_exclude_the_other_topic() {
        assert!(fires(Category::Projects, "projects_qualified", "Your best projects"));
        assert!(!fires(Category::Projects, "projects_qualified", "Your best projects and skills"));
        assert!(fires(Category::Skills, "skills_qualified", "Ahib's main skills"));
        assert!(!fires(Category::Skills, "skills_qualified", "Ahib's main skills in that project"));
    }

    #[test]
    fn test_contact_rules() {
        assert!(fires(Category::Contact, "contact_phrase", "How can I contact you?"));
        assert!(fires(Category::Contact, "contact_how_can_i", "How can I reach Ahib"));
        assert!(fires(Category::Contact, "contact_details", "What is your contact info?"));
        assert!(!fires(Category::Contact, "contact_how", "How are you?"));
    }

    #[test]
    fn test_detailed_result_names_the_winning_rule() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify_detailed("What is your contact info?");
        assert_eq!(result.category, Category::Contact);
        assert_eq!(result.rule, Some("contact_details"));

        let result = classifier.classify_detailed("A-H-I-B intro?");
        assert_eq!(result.category, Category::Identity);
        assert_eq!(result.rule, Some("identity_compact_name"));
    }
}
